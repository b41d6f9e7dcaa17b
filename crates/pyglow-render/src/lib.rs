#![forbid(unsafe_code)]

//! Highlight rendering for pyglow.
//!
//! - [`style_for`] maps a token kind to its [`StyleClass`](pyglow_style::StyleClass)
//! - [`StyledSpan`] pairs a class with the token's escaped text
//! - [`render_line`] / [`render_lines`] turn source lines into [`RenderedLine`]s
//! - [`HtmlRenderer`] emits a `<pre>` fragment or a full page
//!
//! # Example
//! ```
//! use pyglow_render::{RenderedLine, render_lines};
//!
//! let lines = render_lines("print(\"<hi>\")\n");
//! assert_eq!(lines.len(), 2);
//! assert!(matches!(lines[1], RenderedLine::Placeholder));
//! assert!(lines[0].to_markup("pg").contains("&lt;hi&gt;"));
//! ```

pub mod classify;
pub mod html;
pub mod line;
pub mod span;

pub use classify::style_for;
pub use html::HtmlRenderer;
pub use line::{
    PLACEHOLDER_HTML, RenderedLine, render_line, render_line_with, render_lines,
    render_lines_with,
};
pub use span::StyledSpan;
