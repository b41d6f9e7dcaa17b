#![forbid(unsafe_code)]

//! Text primitives for pyglow.
//!
//! - [`escape`] / [`Escaped`] - the only way text becomes markup-safe
//! - [`tokenize`] / [`Tokenizer`] - rule-ordered, total, lossless line tokenizer
//! - [`Token`] / [`TokenKind`] - classified slices of a line
//! - [`split_lines`] - the one line-splitting rule every view shares
//!
//! # Example
//! ```
//! use pyglow_text::{TokenKind, escape, split_lines, tokenize};
//!
//! let code = "class Foo:\n    x = 1 # note";
//! let lines = split_lines(code);
//! assert_eq!(lines.len(), 2);
//!
//! let tokens = tokenize(lines[0]);
//! assert_eq!(tokens[2].kind, TokenKind::Type);
//!
//! assert_eq!(escape("a < b").as_str(), "a &lt; b");
//! ```

pub mod escape;
pub mod lines;
pub mod logging;
pub mod token;
pub mod tokenizer;

pub use escape::{Escaped, escape, escape_into, needs_escape};
pub use lines::{LinePosition, line_count, line_starts, offset_of, position_of, split_lines};
pub use token::{Token, TokenKind, reconstruct, validate_tokens};
pub use tokenizer::{Lexeme, Rule, STANDARD_RULES, Tokenizer, tokenize};
