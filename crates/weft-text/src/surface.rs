//! Drawing surface abstraction
//!
//! The layout engine never touches fonts or pixels directly. Everything it
//! needs from the platform graphics layer goes through [`TextSurface`]:
//! run measurement, per-character advances, run drawing, and the transient
//! offscreen buffer used when a run is painted partially.

use crate::bidi;
use crate::geometry::{Point, Rectangle, Size};
use crate::Result;

/// The elision marker, measured and drawn as ordinary text.
pub(crate) const ELLIPSIS: &[char] = &['.', '.', '.'];

/// Graphics surface consumed by the layout engine.
///
/// Measurement must be deterministic and self-consistent: the sum of
/// [`glyph_pixels`](TextSurface::glyph_pixels) for a range equals the
/// [`text_extent`](TextSurface::text_extent) width of the same range. The
/// engine relies on this to make identical decisions when measuring and
/// when drawing.
pub trait TextSurface: Sized {
    /// Drawable size of this surface.
    fn size(&self) -> Size;

    /// Pixel extent of a run of text.
    fn text_extent(&self, text: &[char]) -> Size;

    /// Per-character advance widths for a run.
    fn glyph_pixels(&self, text: &[char]) -> Vec<u32>;

    /// Draw a run with its top-left corner at `pos`.
    fn draw_text(&mut self, pos: Point, text: &[char]);

    /// Allocate an offscreen surface with the same text attributes as this
    /// one. Allocation failure is an error; there is no degraded path once
    /// background compositing becomes impossible.
    fn make_offscreen(&self, size: Size) -> Result<Self>;

    /// Copy the `dst`-sized region of `src`, read from `src_origin`, into
    /// `dst` of this surface.
    fn blit(&mut self, dst: Rectangle, src: &Self, src_origin: Point);

    /// Reorder `text` into visual runs and draw them left to right from
    /// `pos`, as one atomic unit.
    fn draw_reordered(&mut self, pos: Point, text: &[char]) {
        let mut x = pos.x;
        for run in bidi::visual_runs(text) {
            let seg = &text[run.range()];
            self.draw_text(Point::new(x, pos.y), seg);
            x += self.text_extent(seg).width as i32;
        }
    }
}
