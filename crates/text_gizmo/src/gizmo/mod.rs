//! Bitmap text gizmos
//!
//! Text is drawn as one small icon per character. The pipeline is:
//!
//! - [`GlyphTable::resolve`]: lower-case, split lines, map characters to glyphs
//! - [`layout`]: per-glyph screen offsets from the alignment and cell size
//! - [`TextGizmo`]: project the anchor, offset each glyph on screen, project
//!   back to world space and hand the result to an [`IconDrawer`]

pub mod alignment;
pub mod draw;
pub mod glyph;
pub mod layout;
mod text_gizmo;

pub use alignment::{HorizontalAlign, TextAlignment, VerticalAlign};
pub use draw::{Color, GlyphInstruction, IconCommand, IconDrawList, IconDrawer};
pub use glyph::{GlyphId, GlyphTable, TextBlock, SUPPORTED_CHARACTERS};
pub use layout::TextBounds;
pub use text_gizmo::TextGizmo;
