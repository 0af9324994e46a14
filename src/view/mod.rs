//! Rendering tagged text into ratatui lines.
//!
//! Pure functions over the grid layout's row breaks: each row becomes a
//! `Line`, with the per-kind style applied over matched ranges, the
//! highlight style over the active selection, and the default style
//! elsewhere. Consecutive bytes with the same style collapse into one
//! span.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::config::TagStyles;
use crate::index::TagIndex;
use crate::layout::GridLayout;
use crate::state::SelectionHighlight;

/// Render the laid-out text into one styled `Line` per grid row.
pub fn styled_lines(
    layout: &GridLayout,
    index: &TagIndex,
    highlight: Option<&SelectionHighlight>,
    styles: &TagStyles,
) -> Vec<Line<'static>> {
    let text = layout.text();
    layout
        .line_ranges()
        .map(|(start, end)| styled_row(&text[start..end], start, index, highlight, styles))
        .collect()
}

fn styled_row(
    row: &str,
    row_start: usize,
    index: &TagIndex,
    highlight: Option<&SelectionHighlight>,
    styles: &TagStyles,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();
    let mut run_style: Option<Style> = None;

    for (offset, ch) in row.char_indices() {
        let style = style_at(row_start + offset, index, highlight, styles);
        if run_style != Some(style) {
            flush(&mut spans, &mut run, run_style);
            run_style = Some(style);
        }
        run.push(ch);
    }
    flush(&mut spans, &mut run, run_style);
    Line::from(spans)
}

fn flush(spans: &mut Vec<Span<'static>>, run: &mut String, style: Option<Style>) {
    if run.is_empty() {
        return;
    }
    let style = style.unwrap_or_default();
    spans.push(Span::styled(std::mem::take(run), style));
}

/// The style for one byte of text. The highlight wins over kind styles;
/// kind styles win over the attachment style; everything else is default.
fn style_at(
    byte: usize,
    index: &TagIndex,
    highlight: Option<&SelectionHighlight>,
    styles: &TagStyles,
) -> Style {
    if let Some(selection) = highlight {
        if selection.range.covers(byte) {
            return styles.highlight;
        }
    }
    if let Some(kind) = index.kind_covering(byte) {
        return styles.for_kind(&kind);
    }
    if index.attachment_covers(byte) {
        return styles.attachment;
    }
    styles.default_style
}
