#![forbid(unsafe_code)]

//! Highlight themes: one [`Style`] per [`StyleClass`] plus surface colors.
//!
//! # Example
//! ```
//! use pyglow_style::{HighlightTheme, Rgb, Style, StyleClass};
//!
//! let theme = HighlightTheme::dark();
//! assert!(theme.style_for(StyleClass::Comment).flags.contains(pyglow_style::StyleFlags::ITALIC));
//!
//! let custom = HighlightTheme::builder()
//!     .keyword(Style::new().fg(Rgb::new(255, 0, 0)).bold())
//!     .build();
//! assert_eq!(custom.keyword.fg, Some(Rgb::new(255, 0, 0)));
//! ```

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::class::StyleClass;
use crate::color::Rgb;
use crate::style::Style;

/// Environment variable that forces a theme (`dark` or `light`).
pub const THEME_ENV: &str = "PYGLOW_THEME";

/// Built-in theme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    /// Pick a theme from the environment.
    ///
    /// Priority:
    /// 1. `PYGLOW_THEME` when it names a known theme
    /// 2. `COLORFGBG` background index (7 or 15 means a light terminal)
    /// 3. Dark
    #[must_use]
    pub fn detect() -> Self {
        Self::detect_from(
            env::var(THEME_ENV).ok().as_deref(),
            env::var("COLORFGBG").ok().as_deref(),
        )
    }

    /// [`ThemeKind::detect`] with the two variables passed in.
    ///
    /// An unparseable `explicit` value is ignored.
    #[must_use]
    pub fn detect_from(explicit: Option<&str>, colorfgbg: Option<&str>) -> Self {
        if let Some(kind) = explicit.and_then(|s| s.parse().ok()) {
            return kind;
        }
        // COLORFGBG format: "fg;bg" where values are ANSI color indices
        if let Some(colorfgbg) = colorfgbg
            && let Some(bg_part) = colorfgbg.split(';').next_back()
            && let Ok(bg) = bg_part.trim().parse::<u8>()
            && (bg == 7 || bg == 15)
        {
            return Self::Light;
        }
        Self::Dark
    }

    /// Build the theme this selector names.
    #[must_use]
    pub fn theme(self) -> HighlightTheme {
        match self {
            Self::Dark => HighlightTheme::dark(),
            Self::Light => HighlightTheme::light(),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Error returned when a theme name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeParseError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ThemeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme '{}': expected 'dark' or 'light'", self.input)
    }
}

impl std::error::Error for ThemeParseError {}

impl FromStr for ThemeKind {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(ThemeParseError {
                input: s.to_string(),
            }),
        }
    }
}

/// Maps every [`StyleClass`] to a [`Style`] and names the surface colors
/// the editor layers are painted on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightTheme {
    pub keyword: Style,
    pub string: Style,
    pub comment: Style,
    pub number: Style,
    pub function: Style,
    pub type_name: Style,
    pub operator: Style,
    /// Style for plain text (fallback).
    pub plain: Style,
    /// Editor background.
    pub background: Rgb,
    /// Line-number gutter background.
    pub gutter_background: Rgb,
    /// Line-number foreground.
    pub gutter_foreground: Rgb,
    /// Placeholder text color in the input layer.
    pub placeholder: Rgb,
}

impl Default for HighlightTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl HighlightTheme {
    /// Get the style for a given class.
    #[must_use]
    pub fn style_for(&self, class: StyleClass) -> Style {
        match class {
            StyleClass::Keyword => self.keyword,
            StyleClass::String => self.string,
            StyleClass::Comment => self.comment,
            StyleClass::Number => self.number,
            StyleClass::Function => self.function,
            StyleClass::Type => self.type_name,
            StyleClass::Operator => self.operator,
            StyleClass::Plain => self.plain,
        }
    }

    /// Caret color that stays visible on the editor background.
    #[must_use]
    pub fn caret(&self) -> Rgb {
        self.background.contrasting()
    }

    /// Dark theme, the editor's default palette.
    #[must_use]
    pub fn dark() -> Self {
        let blue = Rgb::from_u32(0x60a5fa); // keywords
        let green = Rgb::from_u32(0x4ade80); // strings
        let gray = Rgb::from_u32(0x6b7280); // comments
        let orange = Rgb::from_u32(0xfb923c); // numbers
        let yellow = Rgb::from_u32(0xfacc15); // function names
        let cyan = Rgb::from_u32(0x22d3ee); // type names
        let slate = Rgb::from_u32(0x94a3b8); // operators

        Self {
            keyword: Style::new().fg(blue).semibold(),
            string: Style::new().fg(green),
            comment: Style::new().fg(gray).italic(),
            number: Style::new().fg(orange),
            function: Style::new().fg(yellow),
            type_name: Style::new().fg(cyan).semibold(),
            operator: Style::new().fg(slate),
            plain: Style::new().fg(Rgb::from_u32(0xd1d5db)),
            background: Rgb::from_u32(0x111827),
            gutter_background: Rgb::from_u32(0x1f2937),
            gutter_foreground: Rgb::from_u32(0x9ca3af),
            placeholder: Rgb::from_u32(0x6b7280),
        }
    }

    /// Light theme (darker, more saturated foregrounds).
    #[must_use]
    pub fn light() -> Self {
        let blue = Rgb::from_u32(0x1d4ed8);
        let green = Rgb::from_u32(0x15803d);
        let gray = Rgb::from_u32(0x6b7280);
        let orange = Rgb::from_u32(0xc2410c);
        let yellow = Rgb::from_u32(0xa16207);
        let cyan = Rgb::from_u32(0x0e7490);
        let slate = Rgb::from_u32(0x475569);

        Self {
            keyword: Style::new().fg(blue).semibold(),
            string: Style::new().fg(green),
            comment: Style::new().fg(gray).italic(),
            number: Style::new().fg(orange),
            function: Style::new().fg(yellow),
            type_name: Style::new().fg(cyan).semibold(),
            operator: Style::new().fg(slate),
            plain: Style::new().fg(Rgb::from_u32(0x1f2937)),
            background: Rgb::from_u32(0xf9fafb),
            gutter_background: Rgb::from_u32(0xf3f4f6),
            gutter_foreground: Rgb::from_u32(0x6b7280),
            placeholder: Rgb::from_u32(0x9ca3af),
        }
    }

    /// Create a builder starting from the dark theme.
    #[must_use]
    pub fn builder() -> HighlightThemeBuilder {
        HighlightThemeBuilder::new()
    }
}

/// Builder for constructing custom highlight themes.
#[derive(Debug, Clone, Default)]
pub struct HighlightThemeBuilder {
    theme: HighlightTheme,
}

impl HighlightThemeBuilder {
    /// Create a new builder seeded with the dark theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing theme.
    #[must_use]
    pub fn from_theme(theme: HighlightTheme) -> Self {
        Self { theme }
    }

    #[must_use]
    pub fn keyword(mut self, style: Style) -> Self {
        self.theme.keyword = style;
        self
    }

    #[must_use]
    pub fn string(mut self, style: Style) -> Self {
        self.theme.string = style;
        self
    }

    #[must_use]
    pub fn comment(mut self, style: Style) -> Self {
        self.theme.comment = style;
        self
    }

    #[must_use]
    pub fn number(mut self, style: Style) -> Self {
        self.theme.number = style;
        self
    }

    #[must_use]
    pub fn function(mut self, style: Style) -> Self {
        self.theme.function = style;
        self
    }

    #[must_use]
    pub fn type_name(mut self, style: Style) -> Self {
        self.theme.type_name = style;
        self
    }

    #[must_use]
    pub fn operator(mut self, style: Style) -> Self {
        self.theme.operator = style;
        self
    }

    #[must_use]
    pub fn plain(mut self, style: Style) -> Self {
        self.theme.plain = style;
        self
    }

    #[must_use]
    pub fn background(mut self, color: Rgb) -> Self {
        self.theme.background = color;
        self
    }

    /// Build the final theme.
    #[must_use]
    pub fn build(self) -> HighlightTheme {
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleFlags;

    #[test]
    fn style_for_covers_every_class() {
        let theme = HighlightTheme::dark();
        let styled = StyleClass::ALL
            .iter()
            .filter(|c| !theme.style_for(**c).is_empty())
            .count();
        assert_eq!(styled, StyleClass::ALL.len());
        assert_eq!(theme.style_for(StyleClass::Keyword), theme.keyword);
        assert_eq!(theme.style_for(StyleClass::Type), theme.type_name);
        assert_eq!(theme.style_for(StyleClass::Plain), theme.plain);
    }

    #[test]
    fn dark_theme_palette() {
        let theme = HighlightTheme::dark();
        assert_eq!(theme.keyword.fg, Some(Rgb::from_u32(0x60a5fa)));
        assert!(theme.keyword.flags.contains(StyleFlags::SEMIBOLD));
        assert!(theme.comment.flags.contains(StyleFlags::ITALIC));
        assert!(theme.background.is_dark());
        assert_eq!(theme.caret(), Rgb::WHITE);
    }

    #[test]
    fn light_theme_has_dark_caret() {
        let theme = HighlightTheme::light();
        assert!(!theme.background.is_dark());
        assert_eq!(theme.caret(), Rgb::BLACK);
    }

    #[test]
    fn builder_overrides_single_slot() {
        let red = Style::new().fg(Rgb::new(255, 0, 0));
        let theme = HighlightTheme::builder().string(red).build();
        assert_eq!(theme.string, red);
        assert_eq!(theme.keyword, HighlightTheme::dark().keyword);
    }

    #[test]
    fn theme_kind_parses_case_insensitively() {
        assert_eq!("Dark".parse::<ThemeKind>(), Ok(ThemeKind::Dark));
        assert_eq!(" light ".parse::<ThemeKind>(), Ok(ThemeKind::Light));
        let err = "solarized".parse::<ThemeKind>().unwrap_err();
        assert_eq!(err.input, "solarized");
        assert!(err.to_string().contains("solarized"));
    }

    #[test]
    fn detect_prefers_explicit_env() {
        assert_eq!(
            ThemeKind::detect_from(Some("light"), Some("15;0")),
            ThemeKind::Light
        );
        assert_eq!(
            ThemeKind::detect_from(Some("dark"), Some("0;15")),
            ThemeKind::Dark
        );
    }

    #[test]
    fn detect_falls_back_to_colorfgbg() {
        assert_eq!(ThemeKind::detect_from(None, Some("0;15")), ThemeKind::Light);
        assert_eq!(ThemeKind::detect_from(None, Some("0;7")), ThemeKind::Light);
        assert_eq!(ThemeKind::detect_from(None, Some("15;0")), ThemeKind::Dark);
        assert_eq!(ThemeKind::detect_from(Some("bogus"), None), ThemeKind::Dark);
    }

    #[test]
    fn detect_without_env_defaults_dark() {
        assert_eq!(ThemeKind::detect_from(None, None), ThemeKind::Dark);
    }
}
