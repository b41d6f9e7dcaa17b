#![forbid(unsafe_code)]

//! Style classes, colors, and highlight themes for pyglow.
//!
//! - [`StyleClass`] - the closed set of presentation roles a span can take
//! - [`Style`] - foreground color plus [`StyleFlags`]
//! - [`HighlightTheme`] - maps each class to a style and names surface colors
//! - [`ThemeKind`] - built-in theme selector with environment detection

pub mod class;
pub mod color;
pub mod style;
pub mod theme;

pub use class::StyleClass;
pub use color::Rgb;
pub use style::{Style, StyleFlags};
pub use theme::{HighlightTheme, HighlightThemeBuilder, THEME_ENV, ThemeKind, ThemeParseError};
