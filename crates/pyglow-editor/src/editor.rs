#![forbid(unsafe_code)]

//! The code editor component.
//!
//! [`CodeEditor`] owns presentation state only (caret, selection,
//! placeholder, read-only flag). The text value belongs to the caller: every
//! call receives the current value, and a mutating edit is reported through
//! the change conduit as a complete new value. The editor never writes the
//! value itself.
//!
//! # Example
//! ```
//! use pyglow_editor::{CodeEditor, Edit};
//!
//! let mut value = String::from("print()");
//! let mut editor = CodeEditor::new();
//!
//! editor.handle(&value, &Edit::SetCaret(6), |_| {});
//! let mut proposed = None;
//! editor.handle(&value, &Edit::InsertChar('1'), |next| proposed = Some(next));
//! value = proposed.unwrap();
//! assert_eq!(value, "print(1)");
//! ```

use pyglow_text::Tokenizer;
use pyglow_text::logging::{debug, debug_span};

use crate::caret::{
    Selection, display_column, line_bounds, next_boundary, prev_boundary, snap, vertical_move,
};
use crate::edit::Edit;
use crate::view::EditorView;

/// Placeholder shown by the input layer while the value is empty.
pub const DEFAULT_PLACEHOLDER: &str = "# Write your Python code here...";

/// A proposed next value and the caret position inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub text: String,
    pub caret: usize,
}

/// Editable code surface bound to an externally owned text value.
#[derive(Debug, Clone)]
pub struct CodeEditor {
    caret: usize,
    selection: Option<Selection>,
    /// Display column that vertical moves aim for.
    preferred_column: Option<usize>,
    placeholder: String,
    read_only: bool,
    show_line_numbers: bool,
    tokenizer: Tokenizer,
}

impl Default for CodeEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeEditor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            caret: 0,
            selection: None,
            preferred_column: None,
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
            read_only: false,
            show_line_numbers: true,
            tokenizer: Tokenizer::standard(),
        }
    }

    // ── Builder methods ────────────────────────────────────────────

    /// Set placeholder text (builder).
    #[must_use]
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    #[must_use]
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Show the line-number gutter (builder). On by default.
    #[must_use]
    pub fn with_line_numbers(mut self, show: bool) -> Self {
        self.show_line_numbers = show;
        self
    }

    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    // ── Accessors ──────────────────────────────────────────────────

    /// Caret byte offset, as of the last value seen.
    #[must_use]
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// The current non-empty selection, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.selection.filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    #[must_use]
    pub fn show_line_numbers(&self) -> bool {
        self.show_line_numbers
    }

    #[must_use]
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Selected text of `value`, if any.
    #[must_use]
    pub fn selected_text<'a>(&self, value: &'a str) -> Option<&'a str> {
        let sel = self.selection()?;
        let (start, end) = sel.byte_range();
        value.get(snap(value, start)..snap(value, end))
    }

    // ── Value binding ──────────────────────────────────────────────

    /// Clamp caret and selection onto `value` after it changed underneath.
    pub fn sync(&mut self, value: &str) {
        self.caret = snap(value, self.caret);
        if let Some(sel) = self.selection {
            self.selection = Some(Selection::new(
                snap(value, sel.anchor),
                snap(value, sel.head),
            ));
        }
    }

    /// Apply one edit against `value`.
    ///
    /// Mutating edits compute a new value and hand it to `on_change`; the
    /// caller owns the value and re-invokes the editor with it. In read-only
    /// mode mutating edits are dropped without calling `on_change`. Caret
    /// movement is always allowed.
    ///
    /// Returns `true` if a value was proposed or the caret/selection moved.
    pub fn handle(&mut self, value: &str, edit: &Edit, mut on_change: impl FnMut(String)) -> bool {
        let _span = debug_span!("apply_edit", len = value.len()).entered();
        self.sync(value);

        if edit.is_mutating() {
            if self.read_only {
                debug!(edit = ?edit, "read-only editor dropped edit");
                return false;
            }
            let Some(proposal) = self.propose(value, edit) else {
                return false;
            };
            self.caret = proposal.caret;
            self.selection = None;
            self.preferred_column = None;
            on_change(proposal.text);
            return true;
        }

        let before = (self.caret, self.selection());
        self.apply_movement(value, edit);
        before != (self.caret, self.selection())
    }

    /// The value `edit` would produce from `value`, without touching any
    /// state. `None` for non-mutating edits, no-op deletions, and in
    /// read-only mode.
    #[must_use]
    pub fn propose(&self, value: &str, edit: &Edit) -> Option<Proposal> {
        if self.read_only {
            return None;
        }
        let caret = snap(value, self.caret);
        let (start, end) = self
            .selection()
            .map(|sel| sel.byte_range())
            .map_or((caret, caret), |(a, b)| (snap(value, a), snap(value, b)));

        match edit {
            Edit::InsertChar(c) => {
                let mut buf = [0u8; 4];
                Some(splice(value, start, end, c.encode_utf8(&mut buf)))
            }
            Edit::InsertText(text) => {
                if text.is_empty() && start == end {
                    return None;
                }
                Some(splice(value, start, end, text))
            }
            Edit::Newline => Some(splice(value, start, end, "\n")),
            Edit::Backspace => {
                if start != end {
                    Some(splice(value, start, end, ""))
                } else if caret == 0 {
                    None
                } else {
                    Some(splice(value, prev_boundary(value, caret), caret, ""))
                }
            }
            Edit::Delete => {
                if start != end {
                    Some(splice(value, start, end, ""))
                } else if caret >= value.len() {
                    None
                } else {
                    Some(splice(value, caret, next_boundary(value, caret), ""))
                }
            }
            _ => None,
        }
    }

    /// Replace the whole value programmatically (e.g. with generated code).
    ///
    /// Works in read-only mode too: read-only only blocks user edits. The
    /// caret moves to the end of the new value.
    pub fn replace_code(&mut self, code: impl Into<String>, mut on_change: impl FnMut(String)) {
        let code = code.into();
        debug!(len = code.len(), "replacing code");
        self.caret = code.len();
        self.selection = None;
        self.preferred_column = None;
        on_change(code);
    }

    /// Project `value` into the stacked input/highlight layers and gutter.
    #[must_use]
    pub fn view<'a>(&'a self, value: &'a str) -> EditorView<'a> {
        EditorView::new(value, self)
    }

    // ── Movement ───────────────────────────────────────────────────

    fn apply_movement(&mut self, value: &str, edit: &Edit) {
        match edit {
            Edit::MoveLeft => {
                self.caret = match self.selection() {
                    Some(sel) => sel.byte_range().0,
                    None => prev_boundary(value, self.caret),
                };
                self.clear_selection();
            }
            Edit::MoveRight => {
                self.caret = match self.selection() {
                    Some(sel) => sel.byte_range().1,
                    None => next_boundary(value, self.caret),
                };
                self.clear_selection();
            }
            Edit::MoveUp | Edit::MoveDown => {
                let column = self
                    .preferred_column
                    .unwrap_or_else(|| display_column(value, self.caret));
                self.caret =
                    vertical_move(value, self.caret, column, matches!(edit, Edit::MoveDown));
                self.selection = None;
                self.preferred_column = Some(column);
            }
            Edit::Home => {
                self.caret = line_bounds(value, self.caret).0;
                self.clear_selection();
            }
            Edit::End => {
                self.caret = snap(value, line_bounds(value, self.caret).1);
                self.clear_selection();
            }
            Edit::SelectAll => {
                self.selection = Some(Selection::new(0, value.len()));
                self.caret = value.len();
                self.preferred_column = None;
            }
            Edit::SetCaret(offset) => {
                self.caret = snap(value, *offset);
                self.clear_selection();
            }
            Edit::InsertChar(_)
            | Edit::InsertText(_)
            | Edit::Newline
            | Edit::Backspace
            | Edit::Delete => {}
        }
    }

    fn clear_selection(&mut self) {
        self.selection = None;
        self.preferred_column = None;
    }
}

/// `value[..start] + insert + value[end..]`, caret after the insertion.
fn splice(value: &str, start: usize, end: usize, insert: &str) -> Proposal {
    let mut text = String::with_capacity(value.len() - (end - start) + insert.len());
    text.push_str(&value[..start]);
    text.push_str(insert);
    text.push_str(&value[end..]);
    Proposal {
        text,
        caret: start + insert.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Apply `edit`, returning the proposed value if there was one.
    fn apply(editor: &mut CodeEditor, value: &str, edit: Edit) -> Option<String> {
        let mut proposed = None;
        editor.handle(value, &edit, |next| proposed = Some(next));
        proposed
    }

    /// Apply a sequence of edits, feeding each proposal back in.
    fn type_all(editor: &mut CodeEditor, mut value: String, edits: &[Edit]) -> String {
        for edit in edits {
            if let Some(next) = apply(editor, &value, edit.clone()) {
                value = next;
            }
        }
        value
    }

    #[test]
    fn defaults() {
        let editor = CodeEditor::new();
        assert_eq!(editor.placeholder(), DEFAULT_PLACEHOLDER);
        assert!(!editor.is_read_only());
        assert!(editor.show_line_numbers());
        assert_eq!(editor.caret(), 0);
        assert_eq!(editor.selection(), None);
    }

    #[test]
    fn view_borrows_placeholder_from_editor() {
        fn project<'a>(editor: &'a CodeEditor, value: &'a str) -> Option<&'a str> {
            editor.view(value).input().placeholder()
        }
        let editor = CodeEditor::new().with_placeholder("# start here");
        let value = String::new();
        assert_eq!(project(&editor, &value), Some("# start here"));
        assert_eq!(project(&editor, "x"), None);
    }

    #[test]
    fn insert_char_at_caret() {
        let mut editor = CodeEditor::new();
        apply(&mut editor, "ace", Edit::SetCaret(1));
        assert_eq!(apply(&mut editor, "ace", Edit::InsertChar('b')), Some("abce".into()));
        assert_eq!(editor.caret(), 2);
    }

    #[test]
    fn handle_never_mutates_value() {
        let value = String::from("x");
        let mut editor = CodeEditor::new();
        let proposed = apply(&mut editor, &value, Edit::InsertChar('y'));
        assert_eq!(value, "x");
        assert_eq!(proposed, Some("yx".into()));
    }

    #[test]
    fn typing_builds_text() {
        let mut editor = CodeEditor::new();
        let edits: Vec<Edit> = "def f():\n    pass".chars().map(Edit::from).collect();
        let text = type_all(&mut editor, String::new(), &edits);
        assert_eq!(text, "def f():\n    pass");
        assert_eq!(editor.caret(), text.len());
    }

    #[test]
    fn backspace_and_delete() {
        let mut editor = CodeEditor::new();
        apply(&mut editor, "abc", Edit::SetCaret(1));
        assert_eq!(apply(&mut editor, "abc", Edit::Backspace), Some("bc".into()));
        assert_eq!(editor.caret(), 0);
        assert_eq!(apply(&mut editor, "bc", Edit::Backspace), None);
        assert_eq!(apply(&mut editor, "bc", Edit::Delete), Some("c".into()));
        apply(&mut editor, "c", Edit::SetCaret(1));
        assert_eq!(apply(&mut editor, "c", Edit::Delete), None);
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let value = "ae\u{301}";
        let mut editor = CodeEditor::new();
        apply(&mut editor, value, Edit::SetCaret(value.len()));
        assert_eq!(apply(&mut editor, value, Edit::Backspace), Some("a".into()));
    }

    #[test]
    fn selection_is_replaced() {
        let mut editor = CodeEditor::new();
        apply(&mut editor, "hello", Edit::SelectAll);
        assert_eq!(editor.selected_text("hello"), Some("hello"));
        assert_eq!(apply(&mut editor, "hello", Edit::InsertChar('x')), Some("x".into()));
        assert_eq!(editor.selection(), None);
        assert_eq!(editor.caret(), 1);
    }

    #[test]
    fn backspace_deletes_selection() {
        let mut editor = CodeEditor::new();
        apply(&mut editor, "abc", Edit::SelectAll);
        assert_eq!(apply(&mut editor, "abc", Edit::Backspace), Some(String::new()));
    }

    #[test]
    fn paste_inserts_text() {
        let mut editor = CodeEditor::new();
        apply(&mut editor, "()", Edit::SetCaret(1));
        let out = apply(&mut editor, "()", Edit::InsertText("a, b".into()));
        assert_eq!(out, Some("(a, b)".into()));
        assert_eq!(apply(&mut editor, "(a, b)", Edit::InsertText(String::new())), None);
    }

    #[test]
    fn read_only_drops_mutations_but_moves() {
        let mut editor = CodeEditor::new().with_read_only(true);
        let mut calls = 0;
        for edit in [
            Edit::InsertChar('x'),
            Edit::InsertText("yz".into()),
            Edit::Newline,
            Edit::Backspace,
            Edit::Delete,
        ] {
            assert!(!editor.handle("abc", &edit, |_| calls += 1));
        }
        assert_eq!(calls, 0);
        assert!(editor.handle("abc", &Edit::MoveRight, |_| calls += 1));
        assert_eq!(editor.caret(), 1);
        assert_eq!(calls, 0);
        assert_eq!(editor.propose("abc", &Edit::InsertChar('x')), None);
    }

    #[test]
    fn replace_code_works_when_read_only() {
        let mut editor = CodeEditor::new().with_read_only(true);
        let mut value = String::from("old");
        editor.replace_code("new code", |next| value = next);
        assert_eq!(value, "new code");
        assert_eq!(editor.caret(), 8);
    }

    #[test]
    fn horizontal_movement() {
        let value = "ab\ncd";
        let mut editor = CodeEditor::new();
        apply(&mut editor, value, Edit::MoveLeft);
        assert_eq!(editor.caret(), 0);
        for _ in 0..3 {
            apply(&mut editor, value, Edit::MoveRight);
        }
        assert_eq!(editor.caret(), 3);
        apply(&mut editor, value, Edit::End);
        assert_eq!(editor.caret(), 5);
        apply(&mut editor, value, Edit::Home);
        assert_eq!(editor.caret(), 3);
    }

    #[test]
    fn movement_collapses_selection_to_its_edge() {
        let mut editor = CodeEditor::new();
        apply(&mut editor, "abc", Edit::SelectAll);
        apply(&mut editor, "abc", Edit::MoveLeft);
        assert_eq!(editor.caret(), 0);
        assert_eq!(editor.selection(), None);
    }

    #[test]
    fn vertical_movement_remembers_column() {
        let value = "abcdef\nxy\nlonger line";
        let mut editor = CodeEditor::new();
        apply(&mut editor, value, Edit::SetCaret(4));
        apply(&mut editor, value, Edit::MoveDown);
        assert_eq!(editor.caret(), 9);
        apply(&mut editor, value, Edit::MoveDown);
        assert_eq!(editor.caret(), 14);
        apply(&mut editor, value, Edit::MoveUp);
        apply(&mut editor, value, Edit::MoveUp);
        assert_eq!(editor.caret(), 4);
    }

    #[test]
    fn movement_reports_change() {
        let mut editor = CodeEditor::new();
        assert!(!editor.handle("ab", &Edit::MoveLeft, |_| {}));
        assert!(editor.handle("ab", &Edit::MoveRight, |_| {}));
        assert!(!editor.handle("ab", &Edit::SetCaret(1), |_| {}));
    }

    #[test]
    fn caret_resyncs_to_shorter_value() {
        let mut editor = CodeEditor::new();
        apply(&mut editor, "abcdef", Edit::SetCaret(6));
        editor.sync("ab");
        assert_eq!(editor.caret(), 2);
        assert_eq!(apply(&mut editor, "ab", Edit::InsertChar('c')), Some("abc".into()));
    }

    #[test]
    fn set_caret_snaps_inside_grapheme() {
        let value = "e\u{301}x";
        let mut editor = CodeEditor::new();
        apply(&mut editor, value, Edit::SetCaret(2));
        assert_eq!(editor.caret(), 0);
    }
}
