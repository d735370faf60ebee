//! Icon draw primitive and glyph draw instructions
//!
//! The host engine renders icons; this crate only decides which icon goes
//! where. [`IconDrawer`] is the seam, [`IconDrawList`] a recording drawer for
//! hosts that consume a command list once per frame.

use super::glyph::GlyphId;
use crate::foundation::math::{Vec3, Vec4};

/// RGBA color
pub type Color = Vec4;

/// One glyph to draw: which icon, where in world space, and its tint
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphInstruction {
    /// Glyph icon
    pub glyph: GlyphId,
    /// World-space center of the glyph
    pub position: Vec3,
    /// Tint color
    pub color: Color,
}

/// Host primitive that renders an icon centered at a world position
pub trait IconDrawer {
    /// Draw `icon` centered at `position` with the given tint
    fn draw_icon(&mut self, position: Vec3, icon: &GlyphId, wireframe: bool, color: Color);
}

/// Recorded icon draw
#[derive(Debug, Clone, PartialEq)]
pub struct IconCommand {
    /// World-space center
    pub position: Vec3,
    /// Icon to draw
    pub icon: GlyphId,
    /// Wireframe flag as passed by the caller
    pub wireframe: bool,
    /// Tint color
    pub color: Color,
}

/// Icon drawer that records commands for later submission
///
/// Commands are kept until [`IconDrawList::clear`], typically once per
/// frame after the host has rendered them.
#[derive(Debug, Clone)]
pub struct IconDrawList {
    commands: Vec<IconCommand>,

    /// Master enable/disable flag
    pub enabled: bool,
}

impl IconDrawList {
    /// Create an empty, enabled draw list
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            enabled: true,
        }
    }

    /// Recorded commands in draw order
    pub fn commands(&self) -> &[IconCommand] {
        &self.commands
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Take all recorded commands, leaving the list empty
    pub fn drain(&mut self) -> Vec<IconCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Forget all recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl IconDrawer for IconDrawList {
    fn draw_icon(&mut self, position: Vec3, icon: &GlyphId, wireframe: bool, color: Color) {
        if !self.enabled {
            return;
        }

        self.commands.push(IconCommand {
            position,
            icon: icon.clone(),
            wireframe,
            color,
        });
    }
}

impl Default for IconDrawList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(name: &str) -> GlyphId {
        GlyphId::for_char('a', name, ".png")
    }

    #[test]
    fn test_records_in_order() {
        let mut list = IconDrawList::new();
        let red = Color::new(1.0, 0.0, 0.0, 1.0);

        list.draw_icon(Vec3::new(1.0, 0.0, 0.0), &glyph("first_"), false, red);
        list.draw_icon(Vec3::new(2.0, 0.0, 0.0), &glyph("second_"), false, red);

        assert_eq!(list.len(), 2);
        assert_eq!(list.commands()[0].icon.as_str(), "first_a.png");
        assert_eq!(list.commands()[1].position, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_disabled_list_ignores_draws() {
        let mut list = IconDrawList::new();
        list.enabled = false;

        list.draw_icon(Vec3::zeros(), &glyph("x_"), false, Color::zeros());

        assert!(list.is_empty());
    }

    #[test]
    fn test_clear_between_frames() {
        let mut list = IconDrawList::new();
        list.draw_icon(Vec3::zeros(), &glyph("x_"), false, Color::zeros());
        list.draw_icon(Vec3::zeros(), &glyph("y_"), false, Color::zeros());

        list.clear();
        assert!(list.is_empty());

        list.draw_icon(Vec3::zeros(), &glyph("z_"), false, Color::zeros());
        assert_eq!(list.len(), 1);
        assert_eq!(list.commands()[0].icon.as_str(), "z_a.png");
    }

    #[test]
    fn test_drain_empties_list() {
        let mut list = IconDrawList::new();
        list.draw_icon(Vec3::zeros(), &glyph("x_"), true, Color::zeros());

        let drained = list.drain();

        assert_eq!(drained.len(), 1);
        assert!(drained[0].wireframe);
        assert!(list.is_empty());
    }
}
