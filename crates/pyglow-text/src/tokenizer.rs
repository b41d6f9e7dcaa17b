#![forbid(unsafe_code)]

//! Rule-ordered line tokenizer.
//!
//! A line is scanned left to right. At each cursor position the rules of a
//! [`Tokenizer`] are tried in table order and the first one that matches
//! *starting exactly at the cursor* wins. When no rule matches, one `char`
//! is emitted as [`TokenKind::Text`] and the cursor advances by it, so the
//! scan always terminates and the output always reconstructs the line.
//!
//! Rules are plain data ([`Rule`]): a name plus a scan function returning
//! the pieces it claims. Reordering or adding rules never touches the scan
//! loop.
//!
//! # Example
//! ```
//! use pyglow_text::{TokenKind, tokenize};
//!
//! let tokens = tokenize("print(\"if\")");
//! assert_eq!(tokens[0].kind, TokenKind::Function);
//! assert_eq!(tokens[2].kind, TokenKind::String);
//! assert_eq!(tokens[2].value, "\"if\"");
//! ```

use std::borrow::Cow;

use smallvec::{SmallVec, smallvec};

use crate::token::{Token, TokenKind};

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

/// Reserved words for the two snippet languages (Python and C++):
/// control flow, declarations, and boolean/null literals.
pub const KEYWORDS: &[&str] = &[
    "def", "class", "struct", "import", "from", "as", "return", "if", "else", "elif", "for",
    "while", "try", "except", "finally", "with", "in", "is", "not", "and", "or", "True", "False",
    "None", "void", "int", "bool", "using", "namespace", "std", "include",
];

/// Keywords that open a type declaration.
pub const TYPE_DECLARATION_KEYWORDS: &[&str] = &["class", "struct"];

/// Two-character operators. Tried before [`SINGLE_CHAR_OPERATORS`].
pub const TWO_CHAR_OPERATORS: &[&str] = &[
    "==", "!=", "<=", ">=", "**", "//", "<<", ">>", "&&", "||", "+=", "-=", "*=", "/=", "%=",
    "&=", "|=", "^=", "->",
];

/// Single-character operators.
pub const SINGLE_CHAR_OPERATORS: &[char] =
    &['+', '-', '*', '/', '%', '=', '<', '>', '!', '&', '|', '^', '~'];

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// What a rule claims at the cursor: `(kind, byte length)` pieces, in order.
///
/// Most rules claim a single piece; compound rules (type declarations)
/// claim several adjacent ones.
pub type Lexeme = SmallVec<[(TokenKind, usize); 3]>;

/// Scan function: `(line, cursor)` to the claimed pieces, or `None`.
///
/// `cursor` is always a char boundary strictly inside `line`.
pub type ScanFn = fn(&str, usize) -> Option<Lexeme>;

/// One lexical rule: a name (for diagnostics) and a scan function.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub scan: ScanFn,
}

impl Rule {
    #[must_use]
    pub const fn new(name: &'static str, scan: ScanFn) -> Self {
        Self { name, scan }
    }
}

/// The standard rule table, highest priority first.
///
/// The type-declaration rule sits directly before the keyword rule: it is
/// strictly more specific (it only fires on `class`/`struct` followed by a
/// name), and the keyword rule would otherwise claim `class` on its own.
pub const STANDARD_RULES: &[Rule] = &[
    Rule::new("comment", scan_comment),
    Rule::new("type-declaration", scan_type_declaration),
    Rule::new("keyword", scan_keyword),
    Rule::new("string-double", scan_double_quoted),
    Rule::new("string-single", scan_single_quoted),
    Rule::new("number", scan_number),
    Rule::new("function-call", scan_function_call),
    Rule::new("operator", scan_operator),
];

// ---------------------------------------------------------------------------
// Tokenizer
// ---------------------------------------------------------------------------

/// A tokenizer is an ordered rule table plus the universal one-char fallback.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    rules: Cow<'static, [Rule]>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::standard()
    }
}

static STANDARD: Tokenizer = Tokenizer::standard();

impl Tokenizer {
    /// Tokenizer using [`STANDARD_RULES`].
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            rules: Cow::Borrowed(STANDARD_RULES),
        }
    }

    /// Tokenizer with a custom rule table (highest priority first).
    #[must_use]
    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self {
            rules: Cow::Owned(rules),
        }
    }

    /// The rule table, highest priority first.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Insert a rule at `priority` (0 = highest), clamped to the table end.
    pub fn insert_rule(&mut self, priority: usize, rule: Rule) {
        let rules = self.rules.to_mut();
        let at = priority.min(rules.len());
        rules.insert(at, rule);
    }

    /// Tokenize one line (which must not contain `'\n'` to be meaningful,
    /// though any input is accepted).
    ///
    /// Total: never fails, returns an empty vector for an empty line, and
    /// the token values always concatenate back to `line`.
    #[must_use]
    pub fn tokenize<'a>(&self, line: &'a str) -> Vec<Token<'a>> {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("tokenize_line", len = line.len()).entered();

        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < line.len() {
            let lexeme = self
                .rules
                .iter()
                .find_map(|rule| (rule.scan)(line, pos).filter(|lx| fits(line, pos, lx)));

            match lexeme {
                Some(pieces) => {
                    for (kind, len) in pieces {
                        if len == 0 {
                            continue;
                        }
                        tokens.push(Token::new(kind, &line[pos..pos + len]));
                        pos += len;
                    }
                }
                None => {
                    let width = line[pos..].chars().next().map_or(1, char::len_utf8);
                    tokens.push(Token::new(TokenKind::Text, &line[pos..pos + width]));
                    pos += width;
                }
            }
        }

        debug_assert!(crate::token::validate_tokens(line, &tokens));
        tokens
    }
}

/// Tokenize one line with the standard rule table.
#[must_use]
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    STANDARD.tokenize(line)
}

/// A lexeme is usable only if it advances the cursor and every piece ends
/// on a char boundary inside the line.
fn fits(line: &str, pos: usize, lexeme: &Lexeme) -> bool {
    let mut end = pos;
    for &(_, len) in lexeme {
        end += len;
        if end > line.len() || !line.is_char_boundary(end) {
            return false;
        }
    }
    end > pos
}

// ---------------------------------------------------------------------------
// Character classes
// ---------------------------------------------------------------------------

/// Word characters for boundary checks: alphanumeric (Unicode) or `_`.
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Char immediately before `pos`.
#[inline]
fn prev_char(line: &str, pos: usize) -> Option<char> {
    line[..pos].chars().next_back()
}

/// Whether a word may start at `pos` (line start or a non-word char before).
#[inline]
fn at_word_start(line: &str, pos: usize) -> bool {
    !prev_char(line, pos).is_some_and(is_word_char)
}

/// Whether a word ending at `end` is closed (line end or a non-word char after).
#[inline]
fn at_word_end(line: &str, end: usize) -> bool {
    !line[end..].chars().next().is_some_and(is_word_char)
}

/// Byte length of the maximal word-char run at the start of `s`.
fn word_len(s: &str) -> usize {
    s.char_indices()
        .find(|&(_, c)| !is_word_char(c))
        .map_or(s.len(), |(i, _)| i)
}

/// Byte length of an ASCII identifier `[A-Za-z_][A-Za-z0-9_]*` at the start
/// of `s`, or 0.
fn identifier_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => {}
        _ => return 0,
    }
    bytes
        .iter()
        .position(|b| !(b.is_ascii_alphanumeric() || *b == b'_'))
        .unwrap_or(bytes.len())
}

/// Byte length of the ASCII digit run at the start of `s`.
fn digits_len(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

// ---------------------------------------------------------------------------
// Scan functions
// ---------------------------------------------------------------------------

/// `#` through end of line.
fn scan_comment(line: &str, pos: usize) -> Option<Lexeme> {
    let rest = &line[pos..];
    rest.starts_with('#')
        .then(|| smallvec![(TokenKind::Comment, rest.len())])
}

/// `class`/`struct`, whitespace, type name: keyword + text + type.
fn scan_type_declaration(line: &str, pos: usize) -> Option<Lexeme> {
    if !at_word_start(line, pos) {
        return None;
    }
    let rest = &line[pos..];
    let keyword_len = word_len(rest);
    if !TYPE_DECLARATION_KEYWORDS.contains(&&rest[..keyword_len]) {
        return None;
    }
    let after_keyword = &rest[keyword_len..];
    let space_len = after_keyword
        .char_indices()
        .find(|&(_, c)| !c.is_whitespace())
        .map_or(after_keyword.len(), |(i, _)| i);
    if space_len == 0 {
        return None;
    }
    let name_len = identifier_len(&after_keyword[space_len..]);
    if name_len == 0 || !at_word_end(line, pos + keyword_len + space_len + name_len) {
        return None;
    }
    Some(smallvec![
        (TokenKind::Keyword, keyword_len),
        (TokenKind::Text, space_len),
        (TokenKind::Type, name_len),
    ])
}

/// A whole word from [`KEYWORDS`].
fn scan_keyword(line: &str, pos: usize) -> Option<Lexeme> {
    if !at_word_start(line, pos) {
        return None;
    }
    let rest = &line[pos..];
    let len = word_len(rest);
    (len > 0 && KEYWORDS.contains(&&rest[..len])).then(|| smallvec![(TokenKind::Keyword, len)])
}

/// Quoted string up to the nearest unescaped closing `quote`.
///
/// A backslash escapes the following char. Unterminated strings do not match.
fn scan_quoted(line: &str, pos: usize, quote: char) -> Option<Lexeme> {
    let rest = &line[pos..];
    let mut chars = rest.char_indices();
    match chars.next() {
        Some((_, c)) if c == quote => {}
        _ => return None,
    }
    while let Some((i, c)) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c == quote {
            return Some(smallvec![(TokenKind::String, i + c.len_utf8())]);
        }
    }
    None
}

fn scan_double_quoted(line: &str, pos: usize) -> Option<Lexeme> {
    scan_quoted(line, pos, '"')
}

fn scan_single_quoted(line: &str, pos: usize) -> Option<Lexeme> {
    scan_quoted(line, pos, '\'')
}

/// Word-bounded integer or decimal (`\b\d+(\.\d+)?\b`).
///
/// When the fractional form is not word-bounded (`1.5x`), the integer part
/// alone is tried, matching regex backtracking.
fn scan_number(line: &str, pos: usize) -> Option<Lexeme> {
    if !at_word_start(line, pos) {
        return None;
    }
    let rest = &line[pos..];
    let int_len = digits_len(rest);
    if int_len == 0 {
        return None;
    }
    let after_int = &rest[int_len..];
    if let Some(fraction) = after_int.strip_prefix('.') {
        let frac_len = digits_len(fraction);
        let total = int_len + 1 + frac_len;
        if frac_len > 0 && at_word_end(line, pos + total) {
            return Some(smallvec![(TokenKind::Number, total)]);
        }
    }
    at_word_end(line, pos + int_len).then(|| smallvec![(TokenKind::Number, int_len)])
}

/// Identifier immediately followed by `(`; the paren is not consumed.
///
/// Calls through attribute access (`obj.method(`) are not recognized.
fn scan_function_call(line: &str, pos: usize) -> Option<Lexeme> {
    if !at_word_start(line, pos) || prev_char(line, pos) == Some('.') {
        return None;
    }
    let rest = &line[pos..];
    let len = identifier_len(rest);
    (len > 0 && rest[len..].starts_with('(')).then(|| smallvec![(TokenKind::Function, len)])
}

/// Two-char operators first, then single-char ones.
fn scan_operator(line: &str, pos: usize) -> Option<Lexeme> {
    let rest = &line[pos..];
    if let Some(op) = TWO_CHAR_OPERATORS.iter().find(|op| rest.starts_with(**op)) {
        return Some(smallvec![(TokenKind::Operator, op.len())]);
    }
    let c = rest.chars().next()?;
    SINGLE_CHAR_OPERATORS
        .contains(&c)
        .then(|| smallvec![(TokenKind::Operator, c.len_utf8())])
}
