//! The text layout collaborator seam.
//!
//! Tap resolution needs three services from whatever lays the text out:
//! the occupied bounding rect, point-to-glyph translation, and substring
//! extraction. [`TextLayout`] is that seam; [`GridLayout`] is the
//! monospaced terminal-cell implementation used by the widget, the demo
//! and the tests.

use ratatui::layout::{Position, Rect};
use unicode_width::UnicodeWidthChar;

/// Services consumed from the text layout engine.
///
/// Glyph indices are byte offsets into the laid-out text, on `char`
/// boundaries, matching the index space of
/// [`crate::model::MatchRange`].
pub trait TextLayout {
    /// Bounding rect of the glyphs the text actually occupies.
    fn bounding_rect(&self) -> Rect;

    /// The glyph index nearest to a point, or `None` when the point is
    /// outside the occupied bounds.
    fn glyph_index_at(&self, point: Position) -> Option<usize>;

    /// The substring a range spans. Out-of-bounds ranges yield `""`.
    fn substring(&self, start: usize, len: usize) -> &str;
}

/// One wrapped row of the grid.
#[derive(Debug, Clone)]
struct GridLine {
    /// Byte offset of the first char on the row.
    start: usize,
    /// Byte offset one past the last char on the row.
    end: usize,
    /// Cells on the row: byte offset plus display width of each char.
    cells: Vec<GridCell>,
}

#[derive(Debug, Clone, Copy)]
struct GridCell {
    byte: usize,
    width: u16,
}

/// Monospaced grid layout: greedy per-char wrap at the area width, with
/// `\n` forcing a row break. Display widths come from `unicode-width`, so
/// wide characters occupy two cells.
#[derive(Debug, Clone)]
pub struct GridLayout {
    origin: Position,
    text: String,
    lines: Vec<GridLine>,
}

impl GridLayout {
    /// Lay `text` out inside `area`.
    pub fn new(text: &str, area: Rect) -> Self {
        let mut lines = Vec::new();
        let mut current = GridLine {
            start: 0,
            end: 0,
            cells: Vec::new(),
        };
        let mut used: u16 = 0;

        for (byte, ch) in text.char_indices() {
            if ch == '\n' {
                current.end = byte;
                let next_start = byte + ch.len_utf8();
                lines.push(current);
                current = GridLine {
                    start: next_start,
                    end: next_start,
                    cells: Vec::new(),
                };
                used = 0;
                continue;
            }
            let width = ch.width().unwrap_or(0) as u16;
            if area.width > 0 && used + width > area.width && !current.cells.is_empty() {
                current.end = byte;
                lines.push(current);
                current = GridLine {
                    start: byte,
                    end: byte,
                    cells: Vec::new(),
                };
                used = 0;
            }
            current.cells.push(GridCell { byte, width });
            used += width;
        }
        current.end = text.len();
        lines.push(current);

        Self {
            origin: Position::new(area.x, area.y),
            text: text.to_string(),
            lines,
        }
    }

    /// Byte ranges of the wrapped rows, top to bottom.
    pub fn line_ranges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.lines.iter().map(|line| (line.start, line.end))
    }

    /// The laid-out text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl TextLayout for GridLayout {
    fn bounding_rect(&self) -> Rect {
        let width = self
            .lines
            .iter()
            .map(|line| line.cells.iter().map(|c| c.width).sum::<u16>())
            .max()
            .unwrap_or(0);
        let height = self.lines.len() as u16;
        if width == 0 {
            return Rect::default();
        }
        Rect::new(self.origin.x, self.origin.y, width, height)
    }

    fn glyph_index_at(&self, point: Position) -> Option<usize> {
        if !self.bounding_rect().contains(point) {
            return None;
        }
        let row = (point.y - self.origin.y) as usize;
        let line = self.lines.get(row)?;
        let col = point.x - self.origin.x;

        let mut used: u16 = 0;
        for cell in &line.cells {
            if cell.width > 0 && col < used + cell.width {
                return Some(cell.byte);
            }
            used += cell.width;
        }
        // Past the end of a short row: nearest glyph is the last one on it,
        // or the row's start offset when the row is empty.
        line.cells.last().map(|c| c.byte).or(Some(line.start))
    }

    fn substring(&self, start: usize, len: usize) -> &str {
        self.text.get(start..start.saturating_add(len)).unwrap_or("")
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
