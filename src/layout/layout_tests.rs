//! Tests for the monospaced grid layout.

use super::*;
use ratatui::layout::Rect;

// ===== Test Helpers =====

fn layout(text: &str, width: u16, height: u16) -> GridLayout {
    GridLayout::new(text, Rect::new(0, 0, width, height))
}

// ===== Bounding Rect Tests =====

#[test]
fn single_line_bounding_rect_matches_text_width() {
    let grid = layout("hello", 40, 5);
    assert_eq!(grid.bounding_rect(), Rect::new(0, 0, 5, 1));
}

#[test]
fn empty_text_occupies_nothing() {
    let grid = layout("", 40, 5);
    assert_eq!(grid.bounding_rect(), Rect::default());
    assert!(grid.glyph_index_at(Position::new(0, 0)).is_none());
}

#[test]
fn wrapped_text_bounding_rect_uses_widest_row() {
    // Width 5 wraps "hello worl" + "d" style; widest row is 5 cells.
    let grid = layout("hello world", 5, 5);
    let rect = grid.bounding_rect();
    assert_eq!(rect.width, 5);
    assert_eq!(rect.height, 3, "11 chars wrap into three rows of up to 5");
}

#[test]
fn newline_forces_a_row_break() {
    let grid = layout("ab\ncdef", 40, 5);
    let rows: Vec<_> = grid.line_ranges().collect();
    assert_eq!(rows, vec![(0, 2), (3, 7)]);
    assert_eq!(grid.bounding_rect().height, 2);
}

#[test]
fn bounding_rect_is_offset_by_the_area_origin() {
    let grid = GridLayout::new("hi", Rect::new(3, 2, 10, 2));
    assert_eq!(grid.bounding_rect(), Rect::new(3, 2, 2, 1));
}

// ===== Point-to-Glyph Tests =====

#[test]
fn glyph_index_maps_columns_to_byte_offsets() {
    let grid = layout("hello #world", 40, 5);
    assert_eq!(grid.glyph_index_at(Position::new(0, 0)), Some(0));
    assert_eq!(grid.glyph_index_at(Position::new(6, 0)), Some(6));
    assert_eq!(grid.glyph_index_at(Position::new(11, 0)), Some(11));
}

#[test]
fn glyph_index_outside_occupied_rect_is_none() {
    let grid = layout("hello", 40, 5);
    assert!(grid.glyph_index_at(Position::new(5, 0)).is_none(), "past the row end");
    assert!(grid.glyph_index_at(Position::new(2, 1)).is_none(), "below the text");
}

#[test]
fn glyph_index_on_wrapped_row_accounts_for_earlier_rows() {
    // Width 5: "hello" on row 0, " worl" on row 1, "d" on row 2.
    let grid = layout("hello world", 5, 5);
    assert_eq!(grid.glyph_index_at(Position::new(1, 1)), Some(6));
    assert_eq!(grid.glyph_index_at(Position::new(0, 2)), Some(10));
}

#[test]
fn short_row_snaps_trailing_cells_to_its_last_glyph() {
    // Row 1 is just "d"; clicking to its right inside the bounding rect
    // snaps to the nearest glyph, like the platform hit-test would.
    let grid = layout("abcde\nd", 40, 5);
    let rect = grid.bounding_rect();
    assert_eq!(rect.width, 5);
    assert_eq!(grid.glyph_index_at(Position::new(3, 1)), Some(6));
}

#[test]
fn multibyte_chars_report_char_boundary_offsets() {
    let grid = layout("é#a", 40, 5);
    assert_eq!(grid.glyph_index_at(Position::new(0, 0)), Some(0));
    assert_eq!(grid.glyph_index_at(Position::new(1, 0)), Some(2), "past the 2-byte char");
}

#[test]
fn wide_chars_occupy_two_columns() {
    let grid = layout("日x", 40, 5);
    assert_eq!(grid.glyph_index_at(Position::new(0, 0)), Some(0));
    assert_eq!(grid.glyph_index_at(Position::new(1, 0)), Some(0), "second cell of the wide char");
    assert_eq!(grid.glyph_index_at(Position::new(2, 0)), Some(3));
}

// ===== Substring Tests =====

#[test]
fn substring_extracts_the_range_text() {
    let grid = layout("hello #world", 40, 5);
    assert_eq!(grid.substring(6, 6), "#world");
}

#[test]
fn substring_out_of_bounds_is_empty() {
    let grid = layout("short", 40, 5);
    assert_eq!(grid.substring(3, 100), "");
    assert_eq!(grid.substring(100, 1), "");
}
