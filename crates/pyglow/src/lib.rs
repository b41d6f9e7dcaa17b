#![forbid(unsafe_code)]

//! pyglow public facade crate.
//!
//! Re-exports the tokenizer, renderer, editor and theme types from the
//! internal crates and offers a prelude for day-to-day usage.
//!
//! # Example
//! ```
//! use pyglow::prelude::*;
//!
//! let html = HtmlRenderer::default().render("print(\"<hi>\")");
//! assert!(html.contains("&lt;hi&gt;"));
//!
//! let tokens = tokenize("class Foo:");
//! assert_eq!(tokens[2].kind, TokenKind::Type);
//! ```

use std::fmt;

pub mod cli;
pub mod output;

// --- Text re-exports -------------------------------------------------------

pub use pyglow_text::{
    Escaped, LinePosition, Rule, Token, TokenKind, Tokenizer, escape, reconstruct, split_lines,
    tokenize,
};

// --- Style re-exports ------------------------------------------------------

pub use pyglow_style::{
    HighlightTheme, HighlightThemeBuilder, Rgb, Style, StyleClass, StyleFlags, ThemeKind,
};

// --- Render re-exports -----------------------------------------------------

pub use pyglow_render::{
    HtmlRenderer, RenderedLine, StyledSpan, render_line, render_lines, style_for,
};

// --- Editor re-exports -----------------------------------------------------

pub use pyglow_editor::{
    CodeEditor, DEFAULT_PLACEHOLDER, Document, Edit, EditorView, Selection, extract_code,
};

pub use cli::{ConfigError, Opts};
pub use output::OutputFormat;

// --- Errors ---------------------------------------------------------------

/// Top-level error type for the command-line front end.
#[derive(Debug)]
pub enum Error {
    /// Reading input or writing output failed.
    Io(std::io::Error),
    /// Invalid flag or environment value.
    Config(ConfigError),
    /// JSON serialization failed.
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "json: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Config(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Standard result type for pyglow front-end APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CodeEditor, Document, Edit, Error, HighlightTheme, HtmlRenderer, RenderedLine, Result,
        StyleClass, ThemeKind, Token, TokenKind, escape, extract_code, render_lines, split_lines,
        tokenize,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_forwards() {
        let err = Error::from(ConfigError::InvalidFormat("pdf".into()));
        assert!(err.to_string().contains("pdf"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn io_error_converts() {
        let err: Error = std::io::Error::other("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
