#![forbid(unsafe_code)]

//! Editable code surface for pyglow.
//!
//! The text value is owned by the caller (or by a [`Document`]). A
//! [`CodeEditor`] holds only presentation state; it turns [`Edit`]s into
//! proposed values delivered through a change conduit, and projects a value
//! into an [`EditorView`]: a transparent input layer stacked over the
//! highlighted layer, plus a line-number gutter, all from one line split.
//!
//! # Example
//! ```
//! use pyglow_editor::{CodeEditor, Document, Edit};
//!
//! let mut doc = Document::new();
//! let mut editor = CodeEditor::new();
//!
//! for c in "if x:".chars() {
//!     let value = doc.text().to_owned();
//!     editor.handle(&value, &Edit::from(c), doc.conduit());
//! }
//! assert_eq!(doc.text(), "if x:");
//!
//! let view = editor.view(doc.text());
//! assert!(view.is_synchronized());
//! assert_eq!(view.highlight().line_count(), 1);
//! ```

pub mod caret;
pub mod document;
pub mod edit;
pub mod editor;
pub mod response;
pub mod view;

pub use caret::Selection;
pub use document::Document;
pub use edit::Edit;
pub use editor::{CodeEditor, DEFAULT_PLACEHOLDER, Proposal};
pub use response::extract_code;
pub use view::{EditorView, Gutter, HighlightLayer, InputLayer};
