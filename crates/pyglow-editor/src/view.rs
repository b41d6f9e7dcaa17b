#![forbid(unsafe_code)]

//! Stacked-layer projection of the authoritative text.
//!
//! An [`EditorView`] is built from one value in one call: the value is split
//! once with [`split_lines`], and that single line list feeds the
//! transparent [`InputLayer`], the colored [`HighlightLayer`], and the
//! [`Gutter`]. Nothing here is cached between values, so the three can
//! never disagree about how many lines there are or what they contain.

use std::fmt::Write;

use pyglow_render::{HtmlRenderer, RenderedLine, render_line_with};
use pyglow_text::logging::debug_span;
use pyglow_text::{LinePosition, escape, escape_into, position_of, split_lines};

use crate::caret::{display_column, snap};
use crate::editor::CodeEditor;

// ---------------------------------------------------------------------------
// Layers
// ---------------------------------------------------------------------------

/// The editable layer: the raw value, drawn with transparent glyphs so only
/// its caret and selection show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLayer<'a> {
    value: &'a str,
    lines: Vec<&'a str>,
    placeholder: Option<&'a str>,
    read_only: bool,
    caret: LinePosition,
    caret_column: usize,
    selection: Option<(usize, usize)>,
}

impl<'a> InputLayer<'a> {
    #[must_use]
    pub fn value(&self) -> &'a str {
        self.value
    }

    #[must_use]
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Placeholder text, present only while the value is empty.
    #[must_use]
    pub fn placeholder(&self) -> Option<&'a str> {
        self.placeholder
    }

    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Caret line and byte column.
    #[must_use]
    pub fn caret(&self) -> LinePosition {
        self.caret
    }

    /// Caret display column (monospace cells from the line start).
    #[must_use]
    pub fn caret_column(&self) -> usize {
        self.caret_column
    }

    /// Selected byte range, if any.
    #[must_use]
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.selection
    }
}

/// The colored layer: one rendered line per source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightLayer {
    lines: Vec<RenderedLine>,
}

impl HighlightLayer {
    #[must_use]
    pub fn lines(&self) -> &[RenderedLine] {
        &self.lines
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// 1-based line numbers, one per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gutter {
    count: usize,
}

impl Gutter {
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.count
    }

    /// Line numbers, starting at 1.
    pub fn numbers(&self) -> impl Iterator<Item = usize> {
        1..=self.count
    }

    /// Digits needed for the largest number.
    #[must_use]
    pub fn width(&self) -> usize {
        self.count.to_string().len()
    }
}

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// Both layers and the gutter, projected from one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorView<'a> {
    input: InputLayer<'a>,
    highlight: HighlightLayer,
    gutter: Gutter,
    show_gutter: bool,
}

impl<'a> EditorView<'a> {
    /// Project `value` through `editor`'s presentation state.
    #[must_use]
    pub fn new(value: &'a str, editor: &'a CodeEditor) -> Self {
        let _span = debug_span!("editor_view", bytes = value.len()).entered();

        let lines = split_lines(value);
        let highlight = HighlightLayer {
            lines: lines
                .iter()
                .map(|line| render_line_with(editor.tokenizer(), line))
                .collect(),
        };
        let gutter = Gutter { count: lines.len() };

        let caret = snap(value, editor.caret());
        let selection = editor.selection().map(|sel| {
            let (start, end) = sel.byte_range();
            (snap(value, start), snap(value, end))
        });
        let input = InputLayer {
            value,
            lines,
            placeholder: value.is_empty().then_some(editor.placeholder()),
            read_only: editor.is_read_only(),
            caret: position_of(value, caret),
            caret_column: display_column(value, caret),
            selection,
        };

        Self {
            input,
            highlight,
            gutter,
            show_gutter: editor.show_line_numbers(),
        }
    }

    #[must_use]
    pub fn input(&self) -> &InputLayer<'a> {
        &self.input
    }

    #[must_use]
    pub fn highlight(&self) -> &HighlightLayer {
        &self.highlight
    }

    #[must_use]
    pub fn gutter(&self) -> Option<&Gutter> {
        self.show_gutter.then_some(&self.gutter)
    }

    /// Whether every projection agrees on the line count.
    #[must_use]
    pub fn is_synchronized(&self) -> bool {
        self.input.line_count() == self.highlight.line_count()
            && self.highlight.line_count() == self.gutter.line_count()
    }

    /// Emit the stacked layers as HTML.
    ///
    /// A transparent `<textarea>` (the input layer) is positioned over a
    /// `<pre>` with one `<div>` per line (the highlight layer). Both share
    /// the renderer's font declarations and padding so glyphs line up.
    /// The optional gutter sits to the left.
    #[must_use]
    pub fn to_html(&self, renderer: &HtmlRenderer) -> String {
        let _span = debug_span!("editor_html", lines = self.highlight.line_count()).entered();

        let theme = &renderer.theme;
        let mut prefix = String::new();
        escape_into(&mut prefix, &renderer.class_prefix);

        let mut out = String::with_capacity(self.input.value.len() * 4 + 1024);
        let _ = write!(
            out,
            "<style>.{prefix}-input::placeholder{{color:{};}}</style>",
            theme.placeholder
        );
        let _ = write!(
            out,
            "<div class=\"{prefix}-editor\" style=\"display:flex;position:relative;overflow:hidden;background:{};",
            theme.background
        );
        renderer.write_font_css(&mut out);
        out.push_str("\">");

        if let Some(gutter) = self.gutter() {
            let _ = write!(
                out,
                "<div class=\"{prefix}-gutter\" aria-hidden=\"true\" style=\"padding:12px 8px;text-align:right;user-select:none;color:{};background:{};\">",
                theme.gutter_foreground, theme.gutter_background
            );
            for number in gutter.numbers() {
                let _ = write!(
                    out,
                    "<div style=\"min-width:{}ch;padding-right:1ch;\">{number}</div>",
                    gutter.width()
                );
            }
            out.push_str("</div>");
        }

        let _ = write!(
            out,
            "<div class=\"{prefix}-layers\" style=\"position:relative;flex:1;\">"
        );

        // Input layer.
        let _ = write!(
            out,
            "<textarea class=\"{prefix}-input\" spellcheck=\"false\" autocomplete=\"off\" autocorrect=\"off\" autocapitalize=\"off\""
        );
        if self.input.read_only {
            out.push_str(" readonly");
        }
        if let Some(placeholder) = self.input.placeholder {
            let _ = write!(out, " placeholder=\"{}\"", escape(placeholder));
        }
        let _ = write!(
            out,
            " style=\"position:absolute;inset:0;z-index:1;width:100%;height:100%;box-sizing:border-box;margin:0;padding:12px;border:0;outline:none;resize:none;overflow:hidden;white-space:pre;background:transparent;color:transparent;caret-color:{};font:inherit;line-height:inherit;\">",
            theme.caret()
        );
        // A newline right after the start tag is dropped by HTML parsers,
        // so one is written to protect a value that starts with '\n'.
        out.push('\n');
        escape_into(&mut out, self.input.value);
        out.push_str("</textarea>");

        // Highlight layer.
        let _ = write!(
            out,
            "<pre class=\"{prefix}-highlight\" aria-hidden=\"true\" style=\"margin:0;padding:12px;pointer-events:none;white-space:pre;font:inherit;line-height:inherit;"
        );
        theme.plain.write_css(&mut out);
        out.push_str("\">");
        for line in &self.highlight.lines {
            let _ = write!(out, "<div class=\"{prefix}-line\">");
            renderer.write_line(&mut out, line);
            out.push_str("</div>");
        }
        out.push_str("</pre></div></div>");
        out
    }
}
