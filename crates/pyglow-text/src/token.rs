#![forbid(unsafe_code)]

//! Token model.

use std::fmt;

// ---------------------------------------------------------------------------
// Token kinds
// ---------------------------------------------------------------------------

/// Lexical categories produced by the tokenizer.
///
/// Closed set; [`TokenKind::Text`] is the fallback for anything no rule
/// claims.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenKind {
    Keyword,
    String,
    Comment,
    Number,
    /// Callee name of an `identifier(` call.
    Function,
    /// Name introduced by a `class`/`struct` declaration.
    Type,
    Operator,
    #[default]
    Text,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Keyword,
        Self::String,
        Self::Comment,
        Self::Number,
        Self::Function,
        Self::Type,
        Self::Operator,
        Self::Text,
    ];

    /// Stable lowercase name.
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
            Self::Text => "text",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A classified slice of one source line.
///
/// `value` is the exact substring consumed, delimiters included (a string
/// token keeps its quotes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub value: &'a str,
}

impl<'a> Token<'a> {
    #[must_use]
    pub const fn new(kind: TokenKind, value: &'a str) -> Self {
        Self { kind, value }
    }

    /// Token length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.value.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Concatenate token values in order.
#[must_use]
pub fn reconstruct(tokens: &[Token<'_>]) -> String {
    let mut out = String::with_capacity(tokens.iter().map(Token::len).sum());
    for token in tokens {
        out.push_str(token.value);
    }
    out
}

/// Check that `tokens` partition `source` exactly: non-empty, in order,
/// with no gaps or overlap.
#[must_use]
pub fn validate_tokens(source: &str, tokens: &[Token<'_>]) -> bool {
    let mut rest = source;
    for token in tokens {
        if token.is_empty() {
            return false;
        }
        match rest.strip_prefix(token.value) {
            Some(tail) => rest = tail,
            None => return false,
        }
    }
    rest.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_accessors() {
        let t = Token::new(TokenKind::String, "\"hi\"");
        assert_eq!(t.len(), 4);
        assert!(!t.is_empty());
        assert_eq!(t.to_string(), "string(\"\\\"hi\\\"\")");
    }

    #[test]
    fn default_kind_is_text() {
        assert_eq!(TokenKind::default(), TokenKind::Text);
    }

    #[test]
    fn validate_accepts_exact_partition() {
        let tokens = [
            Token::new(TokenKind::Keyword, "if"),
            Token::new(TokenKind::Text, " "),
            Token::new(TokenKind::Text, "x"),
        ];
        assert!(validate_tokens("if x", &tokens));
        assert_eq!(reconstruct(&tokens), "if x");
    }

    #[test]
    fn validate_rejects_gaps_and_leftovers() {
        let tokens = [Token::new(TokenKind::Keyword, "if")];
        assert!(!validate_tokens("if x", &tokens));
        assert!(!validate_tokens("x if", &tokens));
        assert!(!validate_tokens("if", &[Token::new(TokenKind::Text, "")]));
    }

    #[test]
    fn validate_empty() {
        assert!(validate_tokens("", &[]));
    }
}
