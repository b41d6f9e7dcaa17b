#![forbid(unsafe_code)]

//! Visual style: an optional foreground color plus text flags.
//!
//! A [`Style`] carries no behavior beyond how it is painted. Renderers turn it
//! into inline CSS with [`Style::write_css`].

use std::fmt::Write;

use crate::color::Rgb;

bitflags::bitflags! {
    /// Text decoration flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        /// Bold weight.
        const BOLD      = 0b0000_0001;
        /// Semibold weight (600). Ignored when `BOLD` is set.
        const SEMIBOLD  = 0b0000_0010;
        /// Italic text.
        const ITALIC    = 0b0000_0100;
        /// Underlined text.
        const UNDERLINE = 0b0000_1000;
        /// Dim / reduced opacity.
        const DIM       = 0b0001_0000;
    }
}

/// Foreground color and decoration for one style class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground color. `None` inherits from the surrounding element.
    pub fg: Option<Rgb>,
    /// Decoration flags.
    pub flags: StyleFlags,
}

impl Style {
    /// An empty style (inherits everything).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            flags: StyleFlags::empty(),
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: Rgb) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.flags |= StyleFlags::BOLD;
        self
    }

    #[must_use]
    pub fn semibold(mut self) -> Self {
        self.flags |= StyleFlags::SEMIBOLD;
        self
    }

    #[must_use]
    pub fn italic(mut self) -> Self {
        self.flags |= StyleFlags::ITALIC;
        self
    }

    #[must_use]
    pub fn underline(mut self) -> Self {
        self.flags |= StyleFlags::UNDERLINE;
        self
    }

    #[must_use]
    pub fn dim(mut self) -> Self {
        self.flags |= StyleFlags::DIM;
        self
    }

    /// Whether painting this style changes anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.flags.is_empty()
    }

    /// Append the CSS declarations for this style (`color:#..;font-weight:..;`).
    ///
    /// Writes nothing for an empty style.
    pub fn write_css(&self, out: &mut String) {
        if let Some(fg) = self.fg {
            let _ = write!(out, "color:{fg};");
        }
        if self.flags.contains(StyleFlags::BOLD) {
            out.push_str("font-weight:700;");
        } else if self.flags.contains(StyleFlags::SEMIBOLD) {
            out.push_str("font-weight:600;");
        }
        if self.flags.contains(StyleFlags::ITALIC) {
            out.push_str("font-style:italic;");
        }
        if self.flags.contains(StyleFlags::UNDERLINE) {
            out.push_str("text-decoration:underline;");
        }
        if self.flags.contains(StyleFlags::DIM) {
            out.push_str("opacity:0.6;");
        }
    }

    /// CSS declarations as an owned string.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        self.write_css(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_style_writes_nothing() {
        assert!(Style::new().is_empty());
        assert_eq!(Style::new().to_css(), "");
    }

    #[test]
    fn builder_accumulates_flags() {
        let s = Style::new().fg(Rgb::new(1, 2, 3)).italic().underline();
        assert!(s.flags.contains(StyleFlags::ITALIC | StyleFlags::UNDERLINE));
        assert!(!s.flags.contains(StyleFlags::BOLD));
        assert_eq!(
            s.to_css(),
            "color:#010203;font-style:italic;text-decoration:underline;"
        );
    }

    #[test]
    fn bold_wins_over_semibold() {
        let s = Style::new().semibold().bold();
        assert_eq!(s.to_css(), "font-weight:700;");
        assert_eq!(Style::new().semibold().to_css(), "font-weight:600;");
    }
}
