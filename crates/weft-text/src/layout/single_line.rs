//! Single-line rendering with optional ellipsis elision

use super::{measure_runs, TextAlign};
use crate::bidi;
use crate::geometry::{Point, Rectangle, Size};
use crate::surface::{TextSurface, ELLIPSIS};
use crate::Result;

/// Lays out one physical line within `[left, right)`.
///
/// When elision is enabled and the line overflows the window, the line is
/// anchored at the left edge regardless of the requested alignment and the
/// overflow is replaced by a trailing `"..."`.
pub(crate) struct SingleLine<'s, S: TextSurface> {
    surface: &'s mut S,
    left: i32,
    right: i32,
    align: TextAlign,
    ellipsis_px: u32,
}

impl<'s, S: TextSurface> SingleLine<'s, S> {
    pub(crate) fn new(
        surface: &'s mut S,
        left: i32,
        right: i32,
        align: TextAlign,
        use_ellipsis: bool,
    ) -> Self {
        let ellipsis_px = if use_ellipsis {
            surface.text_extent(ELLIPSIS).width
        } else {
            0
        };
        Self {
            surface,
            left,
            right,
            align,
            ellipsis_px,
        }
    }

    /// Lay out one line and return its tallest run height.
    pub(crate) fn line(&mut self, top: i32, line: &[char]) -> Result<u32> {
        let runs = bidi::visual_runs(line);
        let (metrics, total_width, max_height) = measure_runs(&*self.surface, line, &runs);

        // Elision only engages once the line actually overflows; a line
        // that fits is drawn whole, with no reserved ellipsis space.
        let overflows = total_width as i32 > self.right - self.left;
        let ellipsis_px = if overflows { self.ellipsis_px } else { 0 };

        let mut align = self.align;
        if ellipsis_px > 0 {
            // Overflowing elided content always reads from the left edge.
            align = TextAlign::Left;
        }

        match align {
            TextAlign::Left => {
                self.draw_left(top, line, &runs, &metrics, ellipsis_px)?;
            }
            TextAlign::Center => {
                let mut pos = Point::new((self.right - self.left - total_width as i32) / 2, top);
                for (run, ts) in runs.iter().zip(&metrics) {
                    self.surface.draw_text(pos, &line[run.range()]);
                    pos.x += ts.width as i32;
                }
            }
            TextAlign::Right => {
                let mut pos = Point::new(self.right, top);
                for (run, ts) in runs.iter().zip(&metrics).rev() {
                    pos.x -= ts.width as i32;
                    self.surface.draw_text(pos, &line[run.range()]);
                }
            }
        }

        Ok(max_height)
    }

    fn draw_left(
        &mut self,
        top: i32,
        line: &[char],
        runs: &[bidi::VisualRun],
        metrics: &[Size],
        ellipsis_px: u32,
    ) -> Result<()> {
        let limit = self.right - ellipsis_px as i32;
        let mut pos = Point::new(self.left, top);

        for (run, ts) in runs.iter().zip(metrics) {
            if pos.x + ts.width as i32 > 0 {
                if pos.x + ts.width as i32 <= limit {
                    self.surface.draw_text(pos, &line[run.range()]);
                } else {
                    // This run crosses the elision point and is painted
                    // partially.
                    self.clip_run(pos, &line[run.range()], ts.height, limit)?;
                    if ellipsis_px > 0 {
                        self.surface.draw_text(Point::new(limit, top), ELLIPSIS);
                    }
                    break;
                }
            }
            pos.x += ts.width as i32;
            if pos.x > limit {
                break;
            }
        }

        Ok(())
    }

    /// Paint the prefix of `seg` that fits before `limit` by compositing
    /// through an offscreen buffer, preserving the pixels already painted
    /// underneath the clipped glyphs.
    fn clip_run(&mut self, pos: Point, seg: &[char], height: u32, limit: i32) -> Result<()> {
        let avail = limit - pos.x;
        if avail <= 0 {
            return Ok(());
        }
        let size = Size::new(avail as u32, height);
        let mut patch = self.surface.make_offscreen(size)?;
        patch.blit(Rectangle::from_size(size), &*self.surface, pos);
        patch.draw_text(Point::default(), seg);
        self.surface.blit(Rectangle::new(pos, size), &patch, Point::default());
        Ok(())
    }
}
