#![forbid(unsafe_code)]

//! Caret and selection over the authoritative text.
//!
//! Carets are byte offsets kept on grapheme-cluster boundaries. Display
//! columns are measured in terminal/monospace cells so the transparent
//! input caret lines up with the glyphs of the colored layer.

use pyglow_text::{LinePosition, line_starts, position_of};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Selection defined by anchor (fixed) and head (moving with the caret).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    #[must_use]
    pub const fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Byte range of the selection (start, end) where start <= end.
    #[must_use]
    pub fn byte_range(&self) -> (usize, usize) {
        if self.anchor <= self.head {
            (self.anchor, self.head)
        } else {
            (self.head, self.anchor)
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }
}

// ---------------------------------------------------------------------------
// Grapheme navigation
// ---------------------------------------------------------------------------

/// Largest grapheme boundary `<= offset`, clamped to the text.
#[must_use]
pub fn snap(text: &str, offset: usize) -> usize {
    if offset >= text.len() {
        return text.len();
    }
    text.grapheme_indices(true)
        .map(|(idx, _)| idx)
        .take_while(|&idx| idx <= offset)
        .last()
        .unwrap_or(0)
}

/// Boundary one grapheme before `offset` (or 0).
#[must_use]
pub fn prev_boundary(text: &str, offset: usize) -> usize {
    let offset = snap(text, offset);
    text[..offset]
        .grapheme_indices(true)
        .next_back()
        .map_or(0, |(idx, _)| idx)
}

/// Boundary one grapheme after `offset` (or the text end).
#[must_use]
pub fn next_boundary(text: &str, offset: usize) -> usize {
    let offset = snap(text, offset);
    text[offset..]
        .graphemes(true)
        .next()
        .map_or(text.len(), |g| offset + g.len())
}

/// Start and end byte offsets of the line holding `offset`.
#[must_use]
pub fn line_bounds(text: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(text.len());
    let start = text[..offset].rfind('\n').map_or(0, |i| i + 1);
    let end = text[offset..].find('\n').map_or(text.len(), |i| offset + i);
    (start, end)
}

/// Display column of `offset` within its line.
#[must_use]
pub fn display_column(text: &str, offset: usize) -> usize {
    let offset = offset.min(text.len());
    let (start, _) = line_bounds(text, offset);
    text[start..offset].width()
}

/// Offset in `line` whose display column is closest to `column` without
/// passing it, always on a grapheme boundary.
#[must_use]
pub fn offset_at_column(line: &str, column: usize) -> usize {
    let mut width = 0;
    for (idx, grapheme) in line.grapheme_indices(true) {
        let next = width + grapheme.width();
        if next > column {
            return idx;
        }
        width = next;
    }
    line.len()
}

/// Move `offset` one line up or down, aiming for display column `column`.
/// Stays put at the first/last line.
#[must_use]
pub fn vertical_move(text: &str, offset: usize, column: usize, down: bool) -> usize {
    let starts = line_starts(text);
    let LinePosition { line, .. } = position_of(text, offset);
    let target = if down {
        if line + 1 >= starts.len() {
            return offset;
        }
        line + 1
    } else {
        if line == 0 {
            return offset;
        }
        line - 1
    };
    let start = starts[target];
    let end = starts.get(target + 1).map_or(text.len(), |next| next - 1);
    snap(text, start + offset_at_column(&text[start..end], column))
}
