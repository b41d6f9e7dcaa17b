#![forbid(unsafe_code)]

//! Styled spans: the one place a token becomes displayable.

use pyglow_style::StyleClass;
use pyglow_text::{Escaped, Token, escape};

use crate::classify::style_for;

/// A token's escaped text paired with its presentation class.
///
/// The only constructor takes a [`Token`], and escapes its value on the
/// way in, so a span can never carry raw source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyledSpan {
    class: StyleClass,
    text: Escaped,
}

impl StyledSpan {
    /// Classify and escape one token.
    #[must_use]
    pub fn from_token(token: Token<'_>) -> Self {
        Self {
            class: style_for(token.kind),
            text: escape(token.value),
        }
    }

    #[must_use]
    pub const fn class(&self) -> StyleClass {
        self.class
    }

    /// Markup-safe text.
    #[must_use]
    pub fn html(&self) -> &str {
        self.text.as_str()
    }

    #[must_use]
    pub fn escaped(&self) -> &Escaped {
        &self.text
    }
}

impl From<Token<'_>> for StyledSpan {
    fn from(token: Token<'_>) -> Self {
        Self::from_token(token)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StyledSpan {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("StyledSpan", 2)?;
        state.serialize_field("class", self.class.name())?;
        state.serialize_field("html", self.html())?;
        state.end()
    }
}
