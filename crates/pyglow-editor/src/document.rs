#![forbid(unsafe_code)]

//! The authoritative text cell.
//!
//! A [`Document`] owns the one string both editor layers are projected
//! from. It is never patched in place: every keystroke and every
//! programmatic replacement swaps the whole value through
//! [`Document::replace`], and the revision counter moves forward.

use pyglow_text::{line_count, split_lines};

/// Owned source text plus a revision counter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    text: String,
    revision: u64,
}

impl Document {
    /// An empty document (one empty line) at revision 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            revision: 0,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of times the value has been replaced.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Derived lines, re-split on every call.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        split_lines(&self.text)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        line_count(&self.text)
    }

    /// Replace the value wholesale. Returns the previous value.
    pub fn replace(&mut self, text: impl Into<String>) -> String {
        self.revision = self.revision.wrapping_add(1);
        std::mem::replace(&mut self.text, text.into())
    }

    /// A change conduit that writes proposals back into this document.
    ///
    /// ```
    /// use pyglow_editor::{CodeEditor, Document, Edit};
    ///
    /// let mut doc = Document::new();
    /// let mut editor = CodeEditor::new();
    /// let value = doc.text().to_owned();
    /// editor.handle(&value, &Edit::InsertChar('x'), doc.conduit());
    /// assert_eq!(doc.text(), "x");
    /// ```
    pub fn conduit(&mut self) -> impl FnMut(String) + '_ {
        move |next| {
            self.replace(next);
        }
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self::with_text(text)
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::with_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_has_one_line() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.lines(), vec![""]);
        assert_eq!(doc.line_count(), 1);
    }

    #[test]
    fn replace_swaps_value_and_bumps_revision() {
        let mut doc = Document::with_text("a");
        let old = doc.replace("b\nc");
        assert_eq!(old, "a");
        assert_eq!(doc.text(), "b\nc");
        assert_eq!(doc.revision(), 1);
        assert_eq!(doc.line_count(), 2);
    }

    #[test]
    fn replace_with_same_text_still_counts() {
        let mut doc = Document::with_text("x");
        doc.replace("x");
        assert_eq!(doc.revision(), 1);
    }

    #[test]
    fn conduit_replaces() {
        let mut doc = Document::from("a");
        {
            let mut sink = doc.conduit();
            sink("b".to_owned());
            sink("c".to_owned());
        }
        assert_eq!(doc.text(), "c");
        assert_eq!(doc.revision(), 2);
    }
}
