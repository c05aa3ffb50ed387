//! Line-oriented layout
//!
//! A logical string is first split at explicit `\n` boundaries; each
//! physical line is then handed to one of three strategies sharing the
//! same shape (`fn line(top, chars) -> height`): single-line rendering
//! with optional elision, column-wrapped rendering, or the wrapped
//! renderer's measurement twin.

mod single_line;
mod split;
mod wrap;

pub(crate) use single_line::SingleLine;
pub(crate) use wrap::{WrappedDraw, WrappedExtent};

use crate::bidi::VisualRun;
use crate::geometry::Size;
use crate::surface::TextSurface;

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Iterate the non-empty `\n`-delimited segments of a logical string.
///
/// Empty segments consume no vertical space and are skipped, including a
/// trailing segment when the text ends on a newline.
pub(crate) fn lines(text: &[char]) -> impl Iterator<Item = &[char]> + '_ {
    text.split(|&ch| ch == '\n').filter(|seg| !seg.is_empty())
}

/// Measure every run of a line once. Returns the per-run metrics, the
/// summed width and the tallest run height. Both the measuring and the
/// drawing passes go through here so their overflow decisions agree.
pub(crate) fn measure_runs<S: TextSurface>(
    surface: &S,
    line: &[char],
    runs: &[VisualRun],
) -> (Vec<Size>, u32, u32) {
    let mut metrics = Vec::with_capacity(runs.len());
    let mut total_width = 0u32;
    let mut max_height = 0u32;
    for run in runs {
        let ts = surface.text_extent(&line[run.range()]);
        total_width += ts.width;
        max_height = max_height.max(ts.height);
        metrics.push(ts);
    }
    (metrics, total_width, max_height)
}
