//! Screen-space layout of resolved text
//!
//! Offsets are in screen units relative to the anchor's screen point, with
//! Y pointing up. Each glyph offset is the center of its cell.

use super::alignment::{HorizontalAlign, TextAlignment, VerticalAlign};
use super::glyph::TextBlock;
use crate::config::CellSize;
use crate::foundation::math::Vec2;

/// Vertical offset of the first line's center, applied once per block
#[allow(clippy::cast_precision_loss)]
pub fn vertical_offset(line_count: usize, vertical: VerticalAlign, cell_height: f32) -> f32 {
    let lines = line_count as f32;
    match vertical {
        VerticalAlign::Top => -cell_height / 2.0,
        VerticalAlign::Middle => cell_height * (lines - 1.0) / 2.0,
        VerticalAlign::Bottom => cell_height * (lines - 0.5),
    }
}

/// Horizontal offset of a line's first glyph center, applied once per line
#[allow(clippy::cast_precision_loss)]
pub fn horizontal_offset(line_len: usize, horizontal: HorizontalAlign, cell_width: f32) -> f32 {
    let len = line_len as f32;
    match horizontal {
        HorizontalAlign::Left => cell_width / 2.0,
        HorizontalAlign::Center => -cell_width * len / 2.0,
        HorizontalAlign::Right => -cell_width * (len - 0.5),
    }
}

/// Offset of the glyph at `column` on `row`, given the block and line offsets
#[allow(clippy::cast_precision_loss)]
pub fn glyph_offset(
    row: usize,
    column: usize,
    line_offset: f32,
    block_offset: f32,
    cell: CellSize,
) -> Vec2 {
    Vec2::new(
        line_offset + column as f32 * cell.width,
        block_offset - row as f32 * cell.height,
    )
}

/// Offset of the `index`-th character in the single-line basic layout
#[allow(clippy::cast_precision_loss)]
pub fn basic_offset(index: usize, cell_width: f32) -> Vec2 {
    Vec2::new(cell_width * (0.5 + index as f32), 0.0)
}

/// Per-glyph offsets of a block, row by row, in the same order as its glyphs
pub fn block_offsets(block: &TextBlock<'_>, alignment: TextAlignment, cell: CellSize) -> Vec<Vec2> {
    let block_offset = vertical_offset(block.line_count(), alignment.vertical, cell.height);

    block
        .lines()
        .iter()
        .enumerate()
        .flat_map(|(row, line)| {
            let line_offset = horizontal_offset(line.len(), alignment.horizontal, cell.width);
            (0..line.len()).map(move |column| glyph_offset(row, column, line_offset, block_offset, cell))
        })
        .collect()
}

/// Bounding box of laid out text in screen units, relative to the anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBounds {
    /// Minimum X coordinate
    pub min_x: f32,
    /// Minimum Y coordinate
    pub min_y: f32,
    /// Maximum X coordinate
    pub max_x: f32,
    /// Maximum Y coordinate
    pub max_y: f32,
}

impl TextBounds {
    /// Calculate width of bounding box
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Calculate height of bounding box
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

/// Bounds covering every glyph cell of the block.
///
/// Returns `None` when the block has no glyphs.
pub fn block_bounds(block: &TextBlock<'_>, alignment: TextAlignment, cell: CellSize) -> Option<TextBounds> {
    let half_w = cell.width / 2.0;
    let half_h = cell.height / 2.0;

    block_offsets(block, alignment, cell)
        .into_iter()
        .map(|center| TextBounds {
            min_x: center.x - half_w,
            min_y: center.y - half_h,
            max_x: center.x + half_w,
            max_y: center.y + half_h,
        })
        .reduce(|acc, cell_bounds| TextBounds {
            min_x: acc.min_x.min(cell_bounds.min_x),
            min_y: acc.min_y.min(cell_bounds.min_y),
            max_x: acc.max_x.max(cell_bounds.max_x),
            max_y: acc.max_y.max(cell_bounds.max_y),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gizmo::glyph::GlyphTable;
    use approx::assert_relative_eq;

    const W: f32 = 8.0;
    const H: f32 = 11.0;

    fn cell() -> CellSize {
        CellSize { width: W, height: H }
    }

    #[test]
    fn test_vertical_offsets_single_line() {
        assert_relative_eq!(vertical_offset(1, VerticalAlign::Top, H), -5.5);
        assert_relative_eq!(vertical_offset(1, VerticalAlign::Middle, H), 0.0);
        assert_relative_eq!(vertical_offset(1, VerticalAlign::Bottom, H), 5.5);
    }

    #[test]
    fn test_vertical_offsets_multi_line() {
        // (lines, top, middle, bottom)
        let cases: [(usize, f32, f32, f32); 3] = [
            (2, -5.5, 5.5, 16.5),
            (3, -5.5, 11.0, 27.5),
            (4, -5.5, 16.5, 38.5),
        ];

        for (lines, top, middle, bottom) in cases {
            assert_relative_eq!(vertical_offset(lines, VerticalAlign::Top, H), top);
            assert_relative_eq!(vertical_offset(lines, VerticalAlign::Middle, H), middle);
            assert_relative_eq!(vertical_offset(lines, VerticalAlign::Bottom, H), bottom);
        }
    }

    #[test]
    fn test_horizontal_offsets() {
        // (line length, left, center, right)
        let cases: [(usize, f32, f32, f32); 4] = [
            (0, 4.0, 0.0, 4.0),
            (1, 4.0, -4.0, -4.0),
            (2, 4.0, -8.0, -12.0),
            (5, 4.0, -20.0, -36.0),
        ];

        for (len, left, center, right) in cases {
            assert_relative_eq!(horizontal_offset(len, HorizontalAlign::Left, W), left);
            assert_relative_eq!(horizontal_offset(len, HorizontalAlign::Center, W), center);
            assert_relative_eq!(horizontal_offset(len, HorizontalAlign::Right, W), right);
        }
    }

    #[test]
    fn test_glyph_offset_rows_grow_down() {
        let offset = glyph_offset(2, 3, 4.0, 0.0, cell());
        assert_relative_eq!(offset, Vec2::new(28.0, -22.0));
    }

    #[test]
    fn test_basic_offset() {
        assert_relative_eq!(basic_offset(0, W), Vec2::new(4.0, 0.0));
        assert_relative_eq!(basic_offset(3, W), Vec2::new(28.0, 0.0));
    }

    #[test]
    fn test_single_glyph_alignment_cases() {
        let table = GlyphTable::new();
        let block = table.resolve("x");

        let left_top = block_offsets(&block, TextAlignment::LEFT_TOP, cell());
        let center_middle = block_offsets(&block, TextAlignment::CENTER_MIDDLE, cell());
        let right_bottom = block_offsets(&block, TextAlignment::RIGHT_BOTTOM, cell());

        assert_eq!(left_top, vec![Vec2::new(4.0, -5.5)]);
        assert_eq!(center_middle, vec![Vec2::new(-4.0, 0.0)]);
        assert_eq!(right_bottom, vec![Vec2::new(-4.0, 5.5)]);
    }

    #[test]
    fn test_right_aligned_lines_share_last_column() {
        let table = GlyphTable::new();
        let block = table.resolve("abc\nd");

        let offsets = block_offsets(&block, TextAlignment::RIGHT_TOP, cell());

        assert_eq!(offsets.len(), 4);
        // Last glyph of each line is centered half a cell left of the anchor
        assert_relative_eq!(offsets[2].x, -4.0);
        assert_relative_eq!(offsets[3].x, -4.0);
        assert_relative_eq!(offsets[3].y, -16.5);
    }

    #[test]
    fn test_bounds_left_top() {
        let table = GlyphTable::new();
        let block = table.resolve("ab\nc");

        let bounds = block_bounds(&block, TextAlignment::LEFT_TOP, cell()).expect("has glyphs");

        assert_relative_eq!(bounds.min_x, 0.0);
        assert_relative_eq!(bounds.max_x, 16.0);
        assert_relative_eq!(bounds.max_y, 0.0);
        assert_relative_eq!(bounds.min_y, -22.0);
        assert_relative_eq!(bounds.width(), 16.0);
        assert_relative_eq!(bounds.height(), 22.0);
    }

    #[test]
    fn test_bounds_bottom_sits_on_anchor() {
        let table = GlyphTable::new();
        let block = table.resolve("ab\ncd\nef");

        let bounds = block_bounds(&block, TextAlignment::CENTER_BOTTOM, cell()).expect("has glyphs");

        assert_relative_eq!(bounds.min_y, 0.0);
        assert_relative_eq!(bounds.max_y, 33.0);
        // Centered lines start at -W*len/2, so cells span [-12, 4]
        assert_relative_eq!(bounds.min_x, -12.0);
        assert_relative_eq!(bounds.max_x, 4.0);
    }

    #[test]
    fn test_bounds_empty_block() {
        let table = GlyphTable::new();
        let block = table.resolve("@@\n");

        assert_eq!(block_bounds(&block, TextAlignment::default(), cell()), None);
    }
}
