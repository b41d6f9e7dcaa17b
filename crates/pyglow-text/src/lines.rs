#![forbid(unsafe_code)]

//! Line splitting shared by every view of a document.
//!
//! Lines are delimited by `'\n'` only. An empty document is exactly one empty
//! line, never zero. Both editor layers and the gutter must derive their
//! lines from [`split_lines`] so that they agree line-for-line.

/// Split `text` into lines on `'\n'`.
///
/// Always returns at least one line; a trailing newline yields a trailing
/// empty line.
///
/// ```
/// use pyglow_text::split_lines;
///
/// assert_eq!(split_lines(""), vec![""]);
/// assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b", ""]);
/// ```
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Number of lines [`split_lines`] would return, without allocating.
#[must_use]
pub fn line_count(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count() + 1
}

/// Byte offset at which each line starts.
#[must_use]
pub fn line_starts(text: &str) -> Vec<usize> {
    let mut starts = vec![0];
    starts.extend(
        text.bytes()
            .enumerate()
            .filter(|&(_, b)| b == b'\n')
            .map(|(i, _)| i + 1),
    );
    starts
}

/// A position expressed as a zero-based line and a byte column within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct LinePosition {
    pub line: usize,
    /// Byte offset from the start of the line.
    pub column: usize,
}

/// Map a byte offset to its line and column. Offsets past the end clamp to
/// the end of the text.
#[must_use]
pub fn position_of(text: &str, offset: usize) -> LinePosition {
    let offset = offset.min(text.len());
    let before = &text.as_bytes()[..offset];
    let line = before.iter().filter(|&&b| b == b'\n').count();
    let line_start = before
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);
    LinePosition {
        line,
        column: offset - line_start,
    }
}

/// Map a line and byte column back to an offset, clamping the line to the
/// document and the column to the line's length.
#[must_use]
pub fn offset_of(text: &str, position: LinePosition) -> usize {
    let starts = line_starts(text);
    let line = position.line.min(starts.len() - 1);
    let start = starts[line];
    let end = starts
        .get(line + 1)
        .map_or(text.len(), |next| next - 1);
    (start + position.column).min(end)
}
