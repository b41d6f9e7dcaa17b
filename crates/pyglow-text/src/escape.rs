#![forbid(unsafe_code)]

//! Markup escaping.
//!
//! Every piece of user-originated text must pass through [`escape`] before it
//! is placed inside markup. The result type, [`Escaped`], can only be built
//! here, so markup builders that accept `&Escaped` cannot be handed raw text
//! by mistake.
//!
//! Substitutions (every occurrence):
//!
//! | raw | entity   |
//! |-----|----------|
//! | `&` | `&amp;`  |
//! | `<` | `&lt;`   |
//! | `>` | `&gt;`   |
//! | `"` | `&quot;` |
//! | `'` | `&#39;`  |
//!
//! The scan is a single pass over the raw input, so `&` is always handled
//! before any entity is produced and already-escaped output is never
//! re-scanned.

use std::fmt;

/// Entity for `c`, or `None` when `c` is markup-safe.
#[inline]
const fn entity_for(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Whether `raw` contains any character that needs an entity.
#[must_use]
pub fn needs_escape(raw: &str) -> bool {
    raw.bytes()
        .any(|b| matches!(b, b'&' | b'<' | b'>' | b'"' | b'\''))
}

/// HTML-escape `raw` into the output buffer.
pub fn escape_into(out: &mut String, raw: &str) {
    let mut last = 0;
    for (idx, c) in raw.char_indices() {
        if let Some(entity) = entity_for(c) {
            out.push_str(&raw[last..idx]);
            out.push_str(entity);
            last = idx + c.len_utf8();
        }
    }
    out.push_str(&raw[last..]);
}

/// Escape `raw` for inclusion in markup text or a quoted attribute value.
#[must_use]
pub fn escape(raw: &str) -> Escaped {
    if !needs_escape(raw) {
        return Escaped(raw.to_owned());
    }
    let mut out = String::with_capacity(raw.len() + raw.len() / 4 + 8);
    escape_into(&mut out, raw);
    Escaped(out)
}

/// Text that has been through [`escape`] and is safe to embed in markup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Escaped(String);

impl Escaped {
    /// The escaped text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append more raw text, escaping it on the way in.
    pub fn push_raw(&mut self, raw: &str) {
        escape_into(&mut self.0, raw);
    }
}

impl AsRef<str> for Escaped {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Escaped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
