//! Whole-string aligned drawing with ellipsis truncation

use crate::geometry::Point;
use crate::layout::TextAlign;
use crate::surface::{TextSurface, ELLIPSIS};

/// Draws exactly one line as an atomic bidi string, truncating with an
/// ellipsis when it cannot fit.
///
/// The primary alignment positions the text; an independent secondary
/// alignment picks which end of an over-long string is elided: `Right`
/// keeps the tail and elides the head, anything else keeps the head and
/// elides the tail.
pub struct Aligner<'s, S: TextSurface> {
    surface: &'s mut S,
    align: TextAlign,
    align_ex: TextAlign,
}

impl<'s, S: TextSurface> Aligner<'s, S> {
    /// Elision follows `align`: right-aligned text keeps its tail.
    pub fn new(surface: &'s mut S, align: TextAlign) -> Self {
        Self::with_elision(surface, align, align)
    }

    /// `align` positions the text, `align_ex` picks the elided end.
    pub fn with_elision(surface: &'s mut S, align: TextAlign, align_ex: TextAlign) -> Self {
        Self {
            surface,
            align,
            align_ex,
        }
    }

    /// Draw `text` at `pos` within `width` pixels.
    pub fn draw(&mut self, text: &str, pos: Point, width: u32) {
        let chars: Vec<char> = text.chars().collect();
        let mut pos = pos;

        let text_px = self.surface.text_extent(&chars).width;
        if text_px <= width {
            match self.align {
                TextAlign::Center => pos.x += (width - text_px) as i32 / 2,
                TextAlign::Right => pos.x += (width - text_px) as i32,
                TextAlign::Left => {}
            }
            self.surface.draw_reordered(pos, &chars);
            return;
        }

        let ellipsis = self.surface.text_extent(ELLIPSIS).width;
        let widths = self.surface.glyph_pixels(&chars);

        if self.align_ex == TextAlign::Right {
            // Keep the tail: walk advances from the back until the next
            // character no longer fits beside the ellipsis.
            let mut kept_px = 0u32;
            let mut cut = 0usize;
            for (i, &w) in widths.iter().enumerate().rev() {
                if kept_px + w + ellipsis > width {
                    cut = i + 1;
                    break;
                }
                kept_px += w;
            }

            pos.x += width as i32 - kept_px as i32;
            self.surface.draw_reordered(pos, &chars[cut..]);
            self.surface
                .draw_text(Point::new(pos.x - ellipsis as i32, pos.y), ELLIPSIS);
        } else {
            // Keep the head: walk advances from the front with the same
            // fit condition.
            let mut kept_px = 0u32;
            let mut cut = 0usize;
            for (i, &w) in widths.iter().enumerate() {
                if kept_px + w + ellipsis > width {
                    cut = i;
                    break;
                }
                kept_px += w;
            }

            if self.align == TextAlign::Center {
                pos.x += (width as i32 - kept_px as i32 - ellipsis as i32) / 2;
            }
            self.surface.draw_reordered(pos, &chars[..cut]);
            self.surface
                .draw_text(Point::new(pos.x + kept_px as i32, pos.y), ELLIPSIS);
        }
    }
}
