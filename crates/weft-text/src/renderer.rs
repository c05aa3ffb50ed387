//! Layout entry points

use crate::geometry::{Point, Size};
use crate::layout::{lines, SingleLine, TextAlign, WrappedDraw, WrappedExtent};
use crate::surface::TextSurface;
use crate::Result;

/// Multi-line text renderer bound to a surface and an alignment.
///
/// Every call is a pure function of its inputs and the surface's
/// measurement services; no state survives between calls.
pub struct TextRenderer<'s, S: TextSurface> {
    surface: &'s mut S,
    align: TextAlign,
}

impl<'s, S: TextSurface> TextRenderer<'s, S> {
    /// Bind a renderer to a surface with the given alignment.
    pub fn new(surface: &'s mut S, align: TextAlign) -> Self {
        Self { surface, align }
    }

    /// Draw `text` line by line, each line laid out once within the window
    /// ending at the surface's right edge. A run crossing that edge is
    /// painted partially; no ellipsis is drawn.
    pub fn render(&mut self, pos: Point, text: &str) -> Result<()> {
        let chars: Vec<char> = text.chars().collect();
        let right = self.surface.size().width as i32;
        let mut drawer = SingleLine::new(self.surface, pos.x, right, self.align, false);
        let mut top = pos.y;
        for line in lines(&chars) {
            top += drawer.line(top, line)? as i32;
        }
        Ok(())
    }

    /// Draw `text` line by line within a window `max_width` wide. With
    /// `ellipsis` enabled, an overflowing line is elided with a trailing
    /// `"..."` and anchored left regardless of the configured alignment.
    pub fn render_within(
        &mut self,
        pos: Point,
        text: &str,
        max_width: u32,
        ellipsis: bool,
    ) -> Result<()> {
        let chars: Vec<char> = text.chars().collect();
        let right = pos.x + max_width as i32;
        let mut drawer = SingleLine::new(self.surface, pos.x, right, self.align, ellipsis);
        let mut top = pos.y;
        for line in lines(&chars) {
            top += drawer.line(top, line)? as i32;
        }
        Ok(())
    }

    /// Draw `text` within a column `max_width` wide, wrapping lines that
    /// overrun it at word boundaries where possible.
    pub fn render_wrapped(&mut self, pos: Point, text: &str, max_width: u32) {
        let chars: Vec<char> = text.chars().collect();
        let endpos = pos.x + max_width as i32;
        let mut drawer = WrappedDraw::new(self.surface, pos.x, endpos, self.align);
        let mut top = pos.y;
        for line in lines(&chars) {
            top += drawer.line(top, line) as i32;
        }
    }

    /// Height [`render_wrapped`](TextRenderer::render_wrapped) would
    /// consume for `text` in a column `max_width` wide, without drawing.
    pub fn wrapped_extent(&self, x: i32, y: i32, text: &str, max_width: u32) -> Size {
        let chars: Vec<char> = text.chars().collect();
        let mut extent = WrappedExtent::new(&*self.surface, x, x + max_width as i32);
        let mut top = y;
        for line in lines(&chars) {
            top += extent.line(top, line) as i32;
        }
        Size::new(max_width, extent.total())
    }
}
