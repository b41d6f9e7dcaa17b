#![forbid(unsafe_code)]

//! HTML rendering of highlighted code.
//!
//! [`HtmlRenderer`] turns source text into a `<pre>` block holding one
//! `<div>` per line. Spans are styled either inline (`style="..."`) or by
//! class, in which case each span carries `{prefix}-{class}` plus the
//! class's utility-class string and [`HtmlRenderer::stylesheet`] supplies
//! the rules.
//!
//! # Usage
//!
//! ```
//! use pyglow_render::HtmlRenderer;
//!
//! let html = HtmlRenderer::default().with_line_numbers(true).render("x = 1\n");
//! assert!(html.starts_with("<pre"));
//! assert_eq!(html.matches("class=\"pyglow-line\"").count(), 2);
//! ```

use std::fmt::Write;

use pyglow_style::{HighlightTheme, StyleClass};
use pyglow_text::{Tokenizer, escape_into};

use crate::line::{PLACEHOLDER_HTML, RenderedLine, render_lines_with};
use crate::span::StyledSpan;

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Configuration for HTML rendering.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    /// CSS class prefix for generated elements.
    pub class_prefix: String,
    /// Font family for the `<pre>` wrapper.
    pub font_family: String,
    /// Font size (CSS value).
    pub font_size: String,
    /// Line height (CSS value).
    pub line_height: String,
    /// Whether to use inline styles (true) or CSS classes (false).
    pub inline_styles: bool,
    /// Prefix every line with its 1-based number.
    pub line_numbers: bool,
    pub theme: HighlightTheme,
    pub tokenizer: Tokenizer,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self {
            class_prefix: "pyglow".into(),
            font_family: "ui-monospace, SFMono-Regular, Menlo, monospace".into(),
            font_size: "14px".into(),
            line_height: "1.625".into(),
            inline_styles: true,
            line_numbers: false,
            theme: HighlightTheme::dark(),
            tokenizer: Tokenizer::standard(),
        }
    }
}

impl HtmlRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_theme(mut self, theme: HighlightTheme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_line_numbers(mut self, on: bool) -> Self {
        self.line_numbers = on;
        self
    }

    #[must_use]
    pub fn with_inline_styles(mut self, on: bool) -> Self {
        self.inline_styles = on;
        self
    }

    #[must_use]
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Tokenize and render `code` as a `<pre>` fragment.
    #[must_use]
    pub fn render(&self, code: &str) -> String {
        let lines = render_lines_with(&self.tokenizer, code);
        self.render_lines(&lines)
    }

    /// Render already-rendered lines as a `<pre>` fragment.
    #[must_use]
    pub fn render_lines(&self, lines: &[RenderedLine]) -> String {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "render_html",
            lines = lines.len(),
            inline = self.inline_styles,
            gutter = self.line_numbers
        )
        .entered();

        let mut out = String::with_capacity(lines.len() * 64 + 256);
        self.write_pre_open(&mut out);

        let gutter_width = lines.len().to_string().len();
        for (idx, line) in lines.iter().enumerate() {
            out.push_str("<div class=\"");
            escape_into(&mut out, &self.class_prefix);
            out.push_str("-line\">");
            if self.line_numbers {
                self.write_gutter_cell(&mut out, idx + 1, gutter_width);
            }
            self.write_line(&mut out, line);
            out.push_str("</div>");
        }

        out.push_str("</pre>");
        out
    }

    /// A standalone HTML page wrapping [`HtmlRenderer::render`].
    #[must_use]
    pub fn render_document(&self, code: &str) -> String {
        let fragment = self.render(code);
        let mut out = String::with_capacity(fragment.len() + 512);
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str("<title>pyglow</title>\n");
        if !self.inline_styles {
            out.push_str("<style>\n");
            out.push_str(&self.stylesheet());
            out.push_str("</style>\n");
        }
        let _ = writeln!(
            out,
            "</head>\n<body style=\"margin:0;background:{};\">",
            self.theme.background
        );
        out.push_str(&fragment);
        out.push_str("\n</body>\n</html>\n");
        out
    }

    /// CSS rules for class-based output, one per non-plain class plus the
    /// container and gutter.
    #[must_use]
    pub fn stylesheet(&self) -> String {
        let mut prefix = String::new();
        escape_into(&mut prefix, &self.class_prefix);

        let mut out = String::new();
        let _ = write!(out, ".{prefix}{{background:{};", self.theme.background);
        self.theme.plain.write_css(&mut out);
        out.push_str("}\n");

        for class in StyleClass::ALL {
            if class.is_plain() {
                continue;
            }
            let _ = write!(out, ".{prefix}-{}{{", class.name());
            self.theme.style_for(class).write_css(&mut out);
            out.push_str("}\n");
        }

        let _ = writeln!(
            out,
            ".{prefix}-ln{{color:{};background:{};}}",
            self.theme.gutter_foreground, self.theme.gutter_background
        );
        out
    }

    // -----------------------------------------------------------------------
    // Pieces
    // -----------------------------------------------------------------------

    fn write_pre_open(&self, out: &mut String) {
        out.push_str("<pre class=\"");
        escape_into(out, &self.class_prefix);
        out.push_str("\" style=\"margin:0;padding:12px;overflow:auto;");
        let _ = write!(out, "background:{};", self.theme.background);
        self.theme.plain.write_css(out);
        self.write_font_css(out);
        out.push_str("\">");
    }

    /// Append the font declarations (`font-family`, `font-size`,
    /// `line-height`). Layers stacked on top of each other must share them.
    pub fn write_font_css(&self, out: &mut String) {
        out.push_str("font-family:");
        escape_into(out, &self.font_family);
        out.push_str(";font-size:");
        escape_into(out, &self.font_size);
        out.push_str(";line-height:");
        escape_into(out, &self.line_height);
        out.push(';');
    }

    fn write_gutter_cell(&self, out: &mut String, number: usize, width: usize) {
        out.push_str("<span class=\"");
        escape_into(out, &self.class_prefix);
        out.push_str("-ln\" aria-hidden=\"true\" style=\"display:inline-block;");
        let _ = write!(
            out,
            "min-width:{width}ch;padding-right:1ch;margin-right:1ch;text-align:right;user-select:none;"
        );
        if self.inline_styles {
            let _ = write!(
                out,
                "color:{};background:{};",
                self.theme.gutter_foreground, self.theme.gutter_background
            );
        }
        let _ = write!(out, "\">{number}</span>");
    }

    /// Append the inner markup of one line (spans, or the placeholder).
    pub fn write_line(&self, out: &mut String, line: &RenderedLine) {
        if line.is_placeholder() {
            out.push_str(PLACEHOLDER_HTML);
            return;
        }
        for span in line.spans() {
            self.write_span(out, span);
        }
    }

    fn write_span(&self, out: &mut String, span: &StyledSpan) {
        let class = span.class();
        let style = self.theme.style_for(class);

        if self.inline_styles {
            // Plain text inherits the container color.
            if class.is_plain() || style.is_empty() {
                out.push_str(span.html());
                return;
            }
            out.push_str("<span style=\"");
            style.write_css(out);
            out.push_str("\">");
        } else {
            if class.is_plain() {
                out.push_str(span.html());
                return;
            }
            out.push_str("<span class=\"");
            escape_into(out, &self.class_prefix);
            out.push('-');
            out.push_str(class.name());
            let utility = class.utility_classes();
            if !utility.is_empty() {
                out.push(' ');
                out.push_str(utility);
            }
            out.push_str("\">");
        }

        out.push_str(span.html());
        out.push_str("</span>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn body(html: &str) -> &str {
        let start = html.find('>').map_or(0, |i| i + 1);
        let end = html.rfind("</pre>").unwrap_or(html.len());
        &html[start..end]
    }

    #[test]
    fn basic_structure() {
        let html = HtmlRenderer::default().render("x");
        assert!(html.starts_with("<pre class=\"pyglow\""));
        assert!(html.ends_with("</pre>"));
        assert_eq!(body(&html), "<div class=\"pyglow-line\">x</div>");
    }

    #[test]
    fn container_carries_font_and_background() {
        let html = HtmlRenderer::default().render("");
        assert!(html.contains("background:#111827;"));
        assert!(html.contains("color:#d1d5db;"));
        assert!(html.contains("font-size:14px;"));
        assert!(html.contains("line-height:1.625;"));
    }

    #[test]
    fn empty_document_renders_one_placeholder_line() {
        let html = HtmlRenderer::default().render("");
        assert_eq!(body(&html), "<div class=\"pyglow-line\">&nbsp;</div>");
    }

    #[test]
    fn inline_styles_use_theme() {
        let html = HtmlRenderer::default().render("if x");
        assert!(html.contains("<span style=\"color:#60a5fa;font-weight:600;\">if</span>"));
    }

    #[test]
    fn class_mode_emits_prefix_and_utilities() {
        let html = HtmlRenderer::default()
            .with_inline_styles(false)
            .with_class_prefix("hl")
            .render("# note");
        assert!(html.contains("<span class=\"hl-comment text-gray-500 italic\"># note</span>"));
        assert!(!html.contains("<span style="));
    }

    #[test]
    fn escapes_special_chars() {
        let html = HtmlRenderer::default().render("a = \"<img src=x onerror=alert(1)>\"");
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img"));
    }

    #[test]
    fn config_strings_are_escaped() {
        let mut renderer = HtmlRenderer::default();
        renderer.font_family = "\"><script>".into();
        let html = renderer.render("x");
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn gutter_has_one_cell_per_line() {
        let html = HtmlRenderer::default()
            .with_line_numbers(true)
            .render("a\n\nb\n");
        assert_eq!(html.matches("class=\"pyglow-ln\"").count(), 4);
        assert!(html.contains(">1</span>"));
        assert!(html.contains(">4</span>"));
        assert!(!html.contains(">5</span>"));
    }

    #[test]
    fn gutter_width_fits_last_number() {
        let code = "x\n".repeat(11);
        let html = HtmlRenderer::default().with_line_numbers(true).render(&code);
        assert!(html.contains("min-width:2ch;"));
    }

    #[test]
    fn gutter_off_by_default() {
        let html = HtmlRenderer::default().render("a\nb");
        assert!(!html.contains("pyglow-ln"));
    }

    #[test]
    fn stylesheet_covers_styled_classes() {
        let css = HtmlRenderer::default().stylesheet();
        for class in StyleClass::ALL {
            let rule = format!(".pyglow-{}{{", class.name());
            assert_eq!(css.contains(&rule), !class.is_plain(), "{rule}");
        }
        assert!(css.contains(".pyglow-keyword{color:#60a5fa;font-weight:600;}"));
        assert!(css.contains(".pyglow-ln{"));
    }

    #[test]
    fn document_includes_stylesheet_only_in_class_mode() {
        let inline = HtmlRenderer::default().render_document("x");
        assert!(inline.starts_with("<!DOCTYPE html>"));
        assert!(!inline.contains("<style>"));

        let classes = HtmlRenderer::default()
            .with_inline_styles(false)
            .render_document("x");
        assert!(classes.contains("<style>"));
        assert!(classes.contains(".pyglow-string{"));
    }

    #[test]
    fn light_theme_changes_colors() {
        let html = HtmlRenderer::default()
            .with_theme(HighlightTheme::light())
            .render("if");
        assert!(!html.contains("#60a5fa"));
    }
}
