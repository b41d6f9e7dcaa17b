#![forbid(unsafe_code)]

//! Edits the input layer can request.

/// One user action on the editable surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Edit {
    /// Type a character at the caret (replacing any selection).
    InsertChar(char),
    /// Insert text at the caret, e.g. a paste.
    InsertText(String),
    Newline,
    /// Delete the selection, or the grapheme before the caret.
    Backspace,
    /// Delete the selection, or the grapheme after the caret.
    Delete,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    /// Caret to the start of its line.
    Home,
    /// Caret to the end of its line.
    End,
    SelectAll,
    /// Place the caret at a byte offset (snapped to a grapheme boundary).
    SetCaret(usize),
}

impl Edit {
    /// Whether applying this edit proposes a new text value.
    #[must_use]
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::InsertChar(_) | Self::InsertText(_) | Self::Newline | Self::Backspace | Self::Delete
        )
    }
}

impl From<char> for Edit {
    fn from(c: char) -> Self {
        if c == '\n' {
            Self::Newline
        } else {
            Self::InsertChar(c)
        }
    }
}
