//! Weft - Bidirectional Text Layout Engine
//!
//! Lays out logical (pre-bidi) text for visual display:
//! - Visual-run reordering (UAX #9, via unicode-bidi)
//! - Pixel-accurate run measurement through a narrow surface trait
//! - Explicit (`\n`) and width-driven line breaking with word cohesion
//! - Single-line ellipsis elision and whole-string aligned truncation
//! - A measurement twin of the wrapping pass for pre-sizing surfaces
//!
//! Fonts, glyph rasterization and the pixel buffer live behind the
//! [`TextSurface`] trait; the engine holds no state between calls.

mod aligner;
mod bidi;
mod geometry;
mod layout;
mod renderer;
mod surface;

pub use aligner::Aligner;
pub use bidi::{visual_runs, VisualRun};
pub use geometry::{Point, Rectangle, Size};
pub use layout::TextAlign;
pub use renderer::TextRenderer;
pub use surface::TextSurface;

/// Layout error types
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("offscreen buffer allocation failed: {width}x{height}")]
    Offscreen { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, TextError>;
