//! Column-wrapped rendering and its measurement twin
//!
//! `WrappedDraw` paints; `WrappedExtent` walks the same cursor over the
//! same [`next_run_break`] decisions without emitting draw calls, so a
//! pre-measured height always matches what rendering consumes.

use super::split::{next_run_break, RunBreak};
use super::{measure_runs, TextAlign};
use crate::bidi;
use crate::geometry::{Point, Size};
use crate::surface::TextSurface;

fn slice_width(widths: &[u32], head: usize, end: usize) -> i32 {
    widths[head..end].iter().map(|&w| w as i32).sum()
}

/// Renders one physical line into a column, breaking into sub-lines when
/// the runs overrun `endpos`.
pub(crate) struct WrappedDraw<'s, S: TextSurface> {
    surface: &'s mut S,
    left: i32,
    endpos: i32,
    align: TextAlign,
}

impl<'s, S: TextSurface> WrappedDraw<'s, S> {
    pub(crate) fn new(surface: &'s mut S, left: i32, endpos: i32, align: TextAlign) -> Self {
        Self {
            surface,
            left,
            endpos,
            align,
        }
    }

    /// Lay out one line and return the total vertical span it consumed.
    pub(crate) fn line(&mut self, top: i32, line: &[char]) -> u32 {
        let runs = bidi::visual_runs(line);
        let (metrics, total_width, max_height) = measure_runs(&*self.surface, line, &runs);

        if self.left + total_width as i32 <= self.endpos {
            self.draw_aligned(top, line, &runs, &metrics, total_width);
            return max_height;
        }

        tracing::debug!(
            width = total_width,
            column = self.endpos - self.left,
            "line overflows column, wrapping"
        );

        let mut pos = Point::new(self.left, top);
        let mut line_px = 0u32;

        for (run, ts) in runs.iter().zip(&metrics) {
            line_px = line_px.max(ts.height);
            let seg = &line[run.range()];

            if pos.x + ts.width as i32 > self.endpos {
                if seg.len() > 1 {
                    let widths = self.surface.glyph_pixels(seg);
                    let mut head = 0;
                    while head < seg.len() {
                        match next_run_break(seg, head, pos.x, self.endpos, &widths) {
                            RunBreak::Fits { end } => {
                                self.surface.draw_text(pos, &seg[head..end]);
                                pos.x += slice_width(&widths, head, end);
                                head = end;
                            }
                            RunBreak::Break { end } => {
                                self.surface.draw_text(pos, &seg[head..end]);
                                pos.x = self.left;
                                pos.y += line_px as i32;
                                line_px = ts.height;
                                head = end;
                            }
                            RunBreak::Overflow { end } => {
                                tracing::trace!(head, end, "unbreakable slice forced past the column edge");
                                pos.x = self.left;
                                pos.y += line_px as i32;
                                line_px = ts.height;
                                self.surface.draw_text(pos, &seg[head..end]);
                                pos.x += slice_width(&widths, head, end);
                                if pos.x >= self.endpos {
                                    pos.x = self.left;
                                    pos.y += line_px as i32;
                                    // The fresh sub-line is empty until
                                    // something is placed on it.
                                    line_px = 0;
                                }
                                head = end;
                            }
                        }
                    }
                } else {
                    // A single character wider than the remaining space is
                    // forced onto its own line.
                    pos.x = self.left;
                    pos.y += line_px as i32;
                    self.surface.draw_text(pos, seg);
                    pos.x += ts.width as i32;
                    line_px = ts.height;
                }
            } else {
                self.surface.draw_text(pos, seg);
                pos.x += ts.width as i32;
            }
        }

        (pos.y - top) as u32 + line_px
    }

    /// Single-pass draw for a line that fits the column whole.
    fn draw_aligned(
        &mut self,
        top: i32,
        line: &[char],
        runs: &[bidi::VisualRun],
        metrics: &[Size],
        total_width: u32,
    ) {
        match self.align {
            TextAlign::Left | TextAlign::Center => {
                let mut pos = Point::new(self.left, top);
                if self.align == TextAlign::Center {
                    pos.x += (self.endpos - self.left - total_width as i32) / 2;
                }
                for (run, ts) in runs.iter().zip(metrics) {
                    if pos.x + ts.width as i32 > 0 {
                        self.surface.draw_text(pos, &line[run.range()]);
                    }
                    pos.x += ts.width as i32;
                }
            }
            TextAlign::Right => {
                let mut pos = Point::new(self.endpos, top);
                for (run, ts) in runs.iter().zip(metrics).rev() {
                    pos.x -= ts.width as i32;
                    if pos.x >= 0 {
                        self.surface.draw_text(pos, &line[run.range()]);
                    }
                }
            }
        }
    }
}

/// Measurement twin of [`WrappedDraw`]: accumulates the height the wrapped
/// layout would consume without touching the surface's pixels.
pub(crate) struct WrappedExtent<'s, S: TextSurface> {
    surface: &'s S,
    left: i32,
    endpos: i32,
    total: u32,
}

impl<'s, S: TextSurface> WrappedExtent<'s, S> {
    pub(crate) fn new(surface: &'s S, left: i32, endpos: i32) -> Self {
        Self {
            surface,
            left,
            endpos,
            total: 0,
        }
    }

    /// Total height accumulated over every line measured so far.
    pub(crate) fn total(&self) -> u32 {
        self.total
    }

    /// Measure one line and return the vertical span it would consume.
    pub(crate) fn line(&mut self, top: i32, line: &[char]) -> u32 {
        let runs = bidi::visual_runs(line);
        let (metrics, total_width, max_height) = measure_runs(self.surface, line, &runs);

        let height = if self.left + total_width as i32 <= self.endpos {
            max_height
        } else {
            let mut x = self.left;
            let mut y = top;
            let mut line_px = 0u32;

            for (run, ts) in runs.iter().zip(&metrics) {
                line_px = line_px.max(ts.height);

                if x + ts.width as i32 > self.endpos {
                    let seg = &line[run.range()];
                    if seg.len() > 1 {
                        let widths = self.surface.glyph_pixels(seg);
                        let mut head = 0;
                        while head < seg.len() {
                            match next_run_break(seg, head, x, self.endpos, &widths) {
                                RunBreak::Fits { end } => {
                                    x += slice_width(&widths, head, end);
                                    head = end;
                                }
                                RunBreak::Break { end } => {
                                    x = self.left;
                                    y += line_px as i32;
                                    line_px = ts.height;
                                    head = end;
                                }
                                RunBreak::Overflow { end } => {
                                    x = self.left;
                                    y += line_px as i32;
                                    line_px = ts.height;
                                    x += slice_width(&widths, head, end);
                                    if x >= self.endpos {
                                        x = self.left;
                                        y += line_px as i32;
                                        line_px = 0;
                                    }
                                    head = end;
                                }
                            }
                        }
                    } else {
                        x = self.left;
                        y += line_px as i32;
                        x += ts.width as i32;
                        line_px = ts.height;
                    }
                } else {
                    x += ts.width as i32;
                }
            }

            (y - top) as u32 + line_px
        };

        self.total += height;
        height
    }
}
