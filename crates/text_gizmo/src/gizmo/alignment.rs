//! Text alignment relative to the gizmo anchor
//!
//! Alignment is two independent choices: which side of the anchor the text
//! extends from horizontally, and vertically. Nine combinations in total.

use serde::{Deserialize, Serialize};

/// Horizontal placement of each line relative to the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HorizontalAlign {
    /// Line starts at the anchor and extends right
    #[default]
    Left,
    /// Line is centered on the anchor
    Center,
    /// Line ends at the anchor
    Right,
}

/// Vertical placement of the whole block relative to the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VerticalAlign {
    /// First line's top edge sits at the anchor
    Top,
    /// Block is centered on the anchor
    #[default]
    Middle,
    /// Last line's bottom edge sits at the anchor
    Bottom,
}

/// Combined horizontal and vertical alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextAlignment {
    /// Per-line horizontal alignment
    pub horizontal: HorizontalAlign,
    /// Block vertical alignment
    pub vertical: VerticalAlign,
}

// Packed form: three horizontal bits (Left, Center, Right) above three
// vertical bits (Top, Middle, Bottom), one bit set in each group.
const LEFT_BIT: u8 = 0b100_000;
const CENTER_BIT: u8 = 0b010_000;
const RIGHT_BIT: u8 = 0b001_000;
const TOP_BIT: u8 = 0b000_100;
const MIDDLE_BIT: u8 = 0b000_010;
const BOTTOM_BIT: u8 = 0b000_001;

impl TextAlignment {
    /// Left / Top
    pub const LEFT_TOP: Self = Self::new(HorizontalAlign::Left, VerticalAlign::Top);
    /// Center / Top
    pub const CENTER_TOP: Self = Self::new(HorizontalAlign::Center, VerticalAlign::Top);
    /// Right / Top
    pub const RIGHT_TOP: Self = Self::new(HorizontalAlign::Right, VerticalAlign::Top);
    /// Left / Middle
    pub const LEFT_MIDDLE: Self = Self::new(HorizontalAlign::Left, VerticalAlign::Middle);
    /// Center / Middle
    pub const CENTER_MIDDLE: Self = Self::new(HorizontalAlign::Center, VerticalAlign::Middle);
    /// Right / Middle
    pub const RIGHT_MIDDLE: Self = Self::new(HorizontalAlign::Right, VerticalAlign::Middle);
    /// Left / Bottom
    pub const LEFT_BOTTOM: Self = Self::new(HorizontalAlign::Left, VerticalAlign::Bottom);
    /// Center / Bottom
    pub const CENTER_BOTTOM: Self = Self::new(HorizontalAlign::Center, VerticalAlign::Bottom);
    /// Right / Bottom
    pub const RIGHT_BOTTOM: Self = Self::new(HorizontalAlign::Right, VerticalAlign::Bottom);

    /// All nine alignments, row by row from top-left
    pub const ALL: [Self; 9] = [
        Self::LEFT_TOP,
        Self::CENTER_TOP,
        Self::RIGHT_TOP,
        Self::LEFT_MIDDLE,
        Self::CENTER_MIDDLE,
        Self::RIGHT_MIDDLE,
        Self::LEFT_BOTTOM,
        Self::CENTER_BOTTOM,
        Self::RIGHT_BOTTOM,
    ];

    /// Combine a horizontal and vertical alignment
    pub const fn new(horizontal: HorizontalAlign, vertical: VerticalAlign) -> Self {
        Self { horizontal, vertical }
    }

    /// Packed six-bit form, e.g. `0b100_100` for left/top
    pub const fn bits(self) -> u8 {
        let horizontal = match self.horizontal {
            HorizontalAlign::Left => LEFT_BIT,
            HorizontalAlign::Center => CENTER_BIT,
            HorizontalAlign::Right => RIGHT_BIT,
        };
        let vertical = match self.vertical {
            VerticalAlign::Top => TOP_BIT,
            VerticalAlign::Middle => MIDDLE_BIT,
            VerticalAlign::Bottom => BOTTOM_BIT,
        };
        horizontal | vertical
    }

    /// Decode the packed form. Returns `None` unless exactly one bit is set
    /// in each group and nothing above bit 5.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        let horizontal = match bits & 0b111_000 {
            LEFT_BIT => HorizontalAlign::Left,
            CENTER_BIT => HorizontalAlign::Center,
            RIGHT_BIT => HorizontalAlign::Right,
            _ => return None,
        };
        let vertical = match bits & 0b000_111 {
            TOP_BIT => VerticalAlign::Top,
            MIDDLE_BIT => VerticalAlign::Middle,
            BOTTOM_BIT => VerticalAlign::Bottom,
            _ => return None,
        };
        if bits & !0b111_111 != 0 {
            return None;
        }
        Some(Self::new(horizontal, vertical))
    }
}

impl From<(HorizontalAlign, VerticalAlign)> for TextAlignment {
    fn from((horizontal, vertical): (HorizontalAlign, VerticalAlign)) -> Self {
        Self::new(horizontal, vertical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_left_middle() {
        assert_eq!(TextAlignment::default(), TextAlignment::LEFT_MIDDLE);
    }

    #[test]
    fn test_packed_values() {
        assert_eq!(TextAlignment::LEFT_TOP.bits(), 0b100_100);
        assert_eq!(TextAlignment::CENTER_MIDDLE.bits(), 0b010_010);
        assert_eq!(TextAlignment::RIGHT_BOTTOM.bits(), 0b001_001);
        assert_eq!(TextAlignment::CENTER_BOTTOM.bits(), 0b010_001);
    }

    #[test]
    fn test_all_alignments_decode_back() {
        for alignment in TextAlignment::ALL {
            assert_eq!(TextAlignment::from_bits(alignment.bits()), Some(alignment));
        }
    }

    #[test]
    fn test_invalid_bits_rejected() {
        assert_eq!(TextAlignment::from_bits(0), None);
        assert_eq!(TextAlignment::from_bits(0b110_100), None);
        assert_eq!(TextAlignment::from_bits(0b100_000), None);
        assert_eq!(TextAlignment::from_bits(0b100_011), None);
        assert_eq!(TextAlignment::from_bits(0b1_100_100), None);
    }
}
