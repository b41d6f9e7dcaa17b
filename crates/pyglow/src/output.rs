#![forbid(unsafe_code)]

//! Output formats for the command-line front end.

use std::fmt::Write;
use std::str::FromStr;

use pyglow_editor::{CodeEditor, extract_code};
use pyglow_render::{HtmlRenderer, render_lines};
use pyglow_text::{split_lines, tokenize};
use tracing::debug;

use crate::cli::{ConfigError, Opts};

/// What the binary writes to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Standalone HTML page.
    #[default]
    Html,
    /// A single `<pre>` block.
    Fragment,
    /// Stacked input and highlight layers.
    Editor,
    /// Rendered lines as JSON.
    Json,
    /// Token dump, one source line per output line.
    Tokens,
}

impl OutputFormat {
    pub const ALL: [Self; 5] = [
        Self::Html,
        Self::Fragment,
        Self::Editor,
        Self::Json,
        Self::Tokens,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Fragment => "fragment",
            Self::Editor => "editor",
            Self::Json => "json",
            Self::Tokens => "tokens",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.name() == wanted)
            .ok_or_else(|| ConfigError::InvalidFormat(s.to_string()))
    }
}

/// HTML renderer configured from `opts`.
#[must_use]
pub fn renderer(opts: &Opts) -> HtmlRenderer {
    HtmlRenderer::default()
        .with_theme(opts.theme.theme())
        .with_line_numbers(opts.line_numbers)
        .with_inline_styles(opts.inline_styles)
}

/// Render `source` in the format `opts` selects.
pub fn render(source: &str, opts: &Opts) -> crate::Result<String> {
    let code = if opts.extract_code {
        extract_code(source)
    } else {
        source
    };
    debug!(
        format = opts.format.name(),
        theme = opts.theme.name(),
        bytes = code.len(),
        "rendering"
    );

    let out = match opts.format {
        OutputFormat::Html => renderer(opts).render_document(code),
        OutputFormat::Fragment => renderer(opts).render(code),
        OutputFormat::Editor => {
            let editor = CodeEditor::new()
                .with_placeholder(opts.placeholder.clone())
                .with_line_numbers(opts.line_numbers)
                .with_read_only(opts.read_only);
            // Class-mode spans need the stylesheet alongside.
            let renderer = renderer(opts);
            let mut html = String::new();
            if !renderer.inline_styles {
                html.push_str("<style>\n");
                html.push_str(&renderer.stylesheet());
                html.push_str("</style>\n");
            }
            html.push_str(&editor.view(code).to_html(&renderer));
            html
        }
        OutputFormat::Json => serde_json::to_string_pretty(&render_lines(code))?,
        OutputFormat::Tokens => token_dump(code),
    };
    Ok(out)
}

/// One output line per source line: `N  kind("value") kind("value") ...`.
#[must_use]
pub fn token_dump(code: &str) -> String {
    let lines = split_lines(code);
    let width = lines.len().to_string().len();
    let mut out = String::new();
    for (idx, line) in lines.iter().enumerate() {
        let _ = write!(out, "{:>width$}", idx + 1);
        for token in tokenize(line) {
            let _ = write!(out, " {token}");
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn opts(format: OutputFormat) -> Opts {
        Opts {
            format,
            ..Opts::default()
        }
    }

    #[test]
    fn format_names_round_trip() {
        for format in OutputFormat::ALL {
            assert_eq!(format.name().parse::<OutputFormat>(), Ok(format));
        }
        assert_eq!(" JSON ".parse::<OutputFormat>(), Ok(OutputFormat::Json));
    }

    #[test]
    fn token_dump_lists_kinds() {
        assert_eq!(
            token_dump("class Foo:\n"),
            "1 keyword(\"class\") text(\" \") type(\"Foo\") text(\":\")\n2\n"
        );
    }

    #[test]
    fn token_dump_pads_numbers() {
        let dump = token_dump(&"x\n".repeat(10));
        assert!(dump.starts_with(" 1 text(\"x\")\n"));
        assert!(dump.ends_with("11\n"));
    }

    #[test]
    fn html_is_a_page() {
        let out = render("x = 1", &opts(OutputFormat::Html)).unwrap();
        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains("<style>"));
    }

    #[test]
    fn fragment_is_a_pre() {
        let out = render("x = 1", &opts(OutputFormat::Fragment)).unwrap();
        assert!(out.starts_with("<pre"));
        assert!(out.ends_with("</pre>"));
    }

    #[test]
    fn editor_uses_placeholder() {
        let mut o = opts(OutputFormat::Editor);
        o.placeholder = "say <hi>".into();
        let out = render("", &o).unwrap();
        assert!(out.contains("placeholder=\"say &lt;hi&gt;\""));
        assert!(out.contains("<textarea"));
    }

    #[test]
    fn json_is_lines_of_spans() {
        let out = render("if\n", &opts(OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0][0]["class"], "keyword");
        assert_eq!(value[0][0]["html"], "if");
        assert_eq!(value[1]["placeholder"], "&nbsp;");
    }

    #[test]
    fn extract_code_applies_first() {
        let mut o = opts(OutputFormat::Tokens);
        o.extract_code = true;
        let out = render("Sure!\n```python\npass\n```", &o).unwrap();
        assert_eq!(out, "1 text(\"p\") text(\"a\") text(\"s\") text(\"s\")\n");
    }

    #[test]
    fn theme_reaches_renderer() {
        let mut o = opts(OutputFormat::Fragment);
        o.theme = pyglow_style::ThemeKind::Light;
        o.inline_styles = true;
        let out = render("if", &o).unwrap();
        assert!(out.contains("#1d4ed8"));
    }
}
