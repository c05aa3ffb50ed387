//! Visual-order run extraction
//!
//! Thin wrapper over the `unicode-bidi` implementation of UAX #9. The rest
//! of the engine only ever sees [`VisualRun`] values: contiguous slices of
//! the logical line, handed out in visual left-to-right order.

use unicode_bidi::BidiInfo;

/// A maximal directionally-consistent slice of a line, in visual order.
///
/// `start..end` are character indices into the line the run was produced
/// from. Runs never overlap and together cover the line exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualRun {
    /// First character of the run
    pub start: usize,
    /// One past the last character of the run
    pub end: usize,
    /// Resolved direction of the run
    pub rtl: bool,
}

impl VisualRun {
    /// Character range of the run
    pub fn range(&self) -> core::ops::Range<usize> {
        self.start..self.end
    }

    /// Number of characters in the run
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the run is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Split one line (no embedded newlines) into visual-order runs.
///
/// Deterministic for identical input. An empty line yields no runs.
pub fn visual_runs(line: &[char]) -> Vec<VisualRun> {
    if line.is_empty() {
        return Vec::new();
    }

    let mut text = String::with_capacity(line.len());
    // Byte offset of every character, plus the end offset, so byte ranges
    // reported by the bidi pass map back to character indices.
    let mut bounds = Vec::with_capacity(line.len() + 1);
    for &ch in line {
        bounds.push(text.len());
        text.push(ch);
    }
    bounds.push(text.len());

    let bidi = BidiInfo::new(&text, None);
    let para = match bidi.paragraphs.first() {
        Some(para) => para,
        None => return Vec::new(),
    };

    let (levels, ranges) = bidi.visual_runs(para, para.range.clone());

    ranges
        .into_iter()
        .map(|r| VisualRun {
            start: char_index(&bounds, r.start),
            end: char_index(&bounds, r.end),
            rtl: levels[r.start].is_rtl(),
        })
        .collect()
}

fn char_index(bounds: &[usize], byte: usize) -> usize {
    // Run boundaries always fall on character boundaries.
    bounds.partition_point(|&b| b < byte)
}
