#![forbid(unsafe_code)]

//! Presentation categories for highlighted code.

use std::fmt;

/// A closed set of visual roles a span of code can play.
///
/// Correlated 1:1 with lexical token kinds, plus [`StyleClass::Plain`] as the
/// default. Carries no behavior, only a visual role.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StyleClass {
    Keyword,
    String,
    Comment,
    Number,
    Function,
    Type,
    Operator,
    #[default]
    Plain,
}

impl StyleClass {
    /// Every class, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Keyword,
        Self::String,
        Self::Comment,
        Self::Number,
        Self::Function,
        Self::Type,
        Self::Operator,
        Self::Plain,
    ];

    /// Stable lowercase name, used as a CSS class suffix.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::String => "string",
            Self::Comment => "comment",
            Self::Number => "number",
            Self::Function => "function",
            Self::Type => "type",
            Self::Operator => "operator",
            Self::Plain => "plain",
        }
    }

    /// Utility-class string for hosts that ship a Tailwind-style stylesheet.
    ///
    /// Empty for [`StyleClass::Plain`]: plain text inherits the container color.
    #[must_use]
    pub const fn utility_classes(self) -> &'static str {
        match self {
            Self::Keyword => "text-blue-400 font-semibold",
            Self::String => "text-green-400",
            Self::Comment => "text-gray-500 italic",
            Self::Number => "text-orange-400",
            Self::Function => "text-yellow-400",
            Self::Type => "text-cyan-400 font-semibold",
            Self::Operator => "text-slate-400",
            Self::Plain => "",
        }
    }

    /// Whether spans of this class need a wrapping element at all.
    #[must_use]
    pub const fn is_plain(self) -> bool {
        matches!(self, Self::Plain)
    }
}

impl fmt::Display for StyleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = StyleClass::ALL.iter().map(|c| c.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), StyleClass::ALL.len());
    }

    #[test]
    fn default_is_plain() {
        assert_eq!(StyleClass::default(), StyleClass::Plain);
        assert!(StyleClass::Plain.is_plain());
        assert_eq!(StyleClass::Plain.utility_classes(), "");
    }

    #[test]
    fn utility_classes_match_palette() {
        assert_eq!(
            StyleClass::Keyword.utility_classes(),
            "text-blue-400 font-semibold"
        );
        assert_eq!(StyleClass::Comment.utility_classes(), "text-gray-500 italic");
    }
}
