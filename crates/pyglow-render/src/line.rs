#![forbid(unsafe_code)]

//! Line rendering.
//!
//! One source line becomes either a [`RenderedLine::Placeholder`] (the line
//! is empty) or a run of [`StyledSpan`]s, one per token, in token order.
//! Rule matching sees the raw line; escaping happens per token when the span
//! is built, so multi-character operators and quote boundaries are matched
//! on the original text.

use pyglow_text::{Tokenizer, escape_into, split_lines};

use crate::span::StyledSpan;

/// Markup emitted for an empty line so it keeps its height.
pub const PLACEHOLDER_HTML: &str = "&nbsp;";

/// A rendered line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RenderedLine {
    /// Stand-in for an empty line.
    Placeholder,
    /// Styled spans whose text concatenates to the escaped line.
    Spans(Vec<StyledSpan>),
}

impl RenderedLine {
    /// Wrap spans, collapsing an empty run to [`RenderedLine::Placeholder`].
    #[must_use]
    pub fn from_spans(spans: Vec<StyledSpan>) -> Self {
        if spans.is_empty() {
            Self::Placeholder
        } else {
            Self::Spans(spans)
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        match self {
            Self::Placeholder => true,
            Self::Spans(spans) => spans.is_empty(),
        }
    }

    /// The spans of this line (empty for the placeholder).
    #[must_use]
    pub fn spans(&self) -> &[StyledSpan] {
        match self {
            Self::Placeholder => &[],
            Self::Spans(spans) => spans,
        }
    }

    /// Escaped text of the line with no styling, or [`PLACEHOLDER_HTML`].
    #[must_use]
    pub fn plain_html(&self) -> String {
        if self.is_placeholder() {
            return PLACEHOLDER_HTML.to_owned();
        }
        self.spans().iter().map(StyledSpan::html).collect()
    }

    /// Append class-based markup: `<span class="{prefix}-{class}">` around
    /// each styled span. Plain spans are written bare. The prefix is escaped.
    pub fn write_markup(&self, out: &mut String, class_prefix: &str) {
        if self.is_placeholder() {
            out.push_str(PLACEHOLDER_HTML);
            return;
        }
        for span in self.spans() {
            let class = span.class();
            if class.is_plain() {
                out.push_str(span.html());
                continue;
            }
            out.push_str("<span class=\"");
            escape_into(out, class_prefix);
            out.push('-');
            out.push_str(class.name());
            out.push_str("\">");
            out.push_str(span.html());
            out.push_str("</span>");
        }
    }

    /// Class-based markup as an owned string.
    #[must_use]
    pub fn to_markup(&self, class_prefix: &str) -> String {
        let mut out = String::new();
        self.write_markup(&mut out, class_prefix);
        out
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RenderedLine {
    /// Span lines serialize as an array of `{class, html}` objects; the
    /// placeholder as `{"placeholder": "&nbsp;"}`.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::{SerializeMap, SerializeSeq};

        if self.is_placeholder() {
            let mut map = serializer.serialize_map(Some(1))?;
            map.serialize_entry("placeholder", PLACEHOLDER_HTML)?;
            return map.end();
        }
        let spans = self.spans();
        let mut seq = serializer.serialize_seq(Some(spans.len()))?;
        for span in spans {
            seq.serialize_element(span)?;
        }
        seq.end()
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render one line with the standard tokenizer.
#[must_use]
pub fn render_line(line: &str) -> RenderedLine {
    render_line_with(&Tokenizer::standard(), line)
}

/// Render one line with a custom tokenizer.
#[must_use]
pub fn render_line_with(tokenizer: &Tokenizer, line: &str) -> RenderedLine {
    if line.is_empty() {
        return RenderedLine::Placeholder;
    }
    let spans = tokenizer
        .tokenize(line)
        .into_iter()
        .map(StyledSpan::from_token)
        .collect();
    RenderedLine::from_spans(spans)
}

/// Split `text` into lines and render every one of them.
///
/// Always returns at least one line.
#[must_use]
pub fn render_lines(text: &str) -> Vec<RenderedLine> {
    render_lines_with(&Tokenizer::standard(), text)
}

/// [`render_lines`] with a custom tokenizer.
#[must_use]
pub fn render_lines_with(tokenizer: &Tokenizer, text: &str) -> Vec<RenderedLine> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("render_lines", bytes = text.len()).entered();

    split_lines(text)
        .into_iter()
        .map(|line| render_line_with(tokenizer, line))
        .collect()
}
