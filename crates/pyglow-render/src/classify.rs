#![forbid(unsafe_code)]

//! Token kind to style class mapping.

use pyglow_style::StyleClass;
use pyglow_text::TokenKind;

/// Map a lexical kind to its presentation class.
///
/// Pure and total: depends on the kind alone, never on a token's value.
/// [`TokenKind::Text`] maps to [`StyleClass::Plain`].
#[must_use]
pub const fn style_for(kind: TokenKind) -> StyleClass {
    match kind {
        TokenKind::Keyword => StyleClass::Keyword,
        TokenKind::String => StyleClass::String,
        TokenKind::Comment => StyleClass::Comment,
        TokenKind::Number => StyleClass::Number,
        TokenKind::Function => StyleClass::Function,
        TokenKind::Type => StyleClass::Type,
        TokenKind::Operator => StyleClass::Operator,
        TokenKind::Text => StyleClass::Plain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_plain() {
        assert_eq!(style_for(TokenKind::Text), StyleClass::Plain);
        assert_eq!(style_for(TokenKind::default()), StyleClass::default());
    }

    #[test]
    fn non_text_kinds_map_one_to_one() {
        let styled: Vec<StyleClass> = TokenKind::ALL
            .iter()
            .filter(|&&k| k != TokenKind::Text)
            .map(|&k| style_for(k))
            .collect();
        assert!(styled.iter().all(|c| !c.is_plain()));
        for (i, a) in styled.iter().enumerate() {
            for b in &styled[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn names_line_up() {
        for kind in TokenKind::ALL {
            if kind != TokenKind::Text {
                assert_eq!(style_for(kind).name(), kind.name());
            }
        }
    }
}
