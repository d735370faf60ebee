//! Text gizmo context
//!
//! Places bitmap glyphs for a string around a world-space anchor so that the
//! glyphs keep a constant size on screen. The anchor is projected to screen
//! space, every glyph is offset there in fixed screen units, and each glyph
//! center is unprojected back to world space for the host's icon primitive.

use std::borrow::Cow;

use super::alignment::TextAlignment;
use super::draw::{Color, GlyphInstruction, IconDrawer};
use super::glyph::GlyphTable;
use super::layout::{self, TextBounds};
use crate::config::{TextGizmoConfig, DEFAULT_ICON_EXTENSION, DEFAULT_ICON_PREFIX};
use crate::error::{Result, TextGizmoError};
use crate::foundation::math::{Vec2, Vec3};
use crate::render::{Camera, ViewportTransform};

/// Glyph table, settings and the viewport text is drawn into
///
/// Construct one per editor view (or once per process) and bind the active
/// camera before drawing. Drawing without a bound viewport fails with
/// [`TextGizmoError::NoActiveViewport`].
///
/// # Example
///
/// ```rust
/// use text_gizmo::prelude::*;
///
/// let camera = Camera::default();
/// let gizmo = TextGizmo::new().with_viewport(&camera);
/// let mut draw_list = IconDrawList::new();
///
/// let drawn = gizmo.draw_extended_aligned(
///     &mut draw_list,
///     &Vec3::zeros(),
///     "origin\n(0, 0, 0)",
///     TextAlignment::CENTER_TOP,
/// )?;
/// assert_eq!(drawn, draw_list.len());
/// # Ok::<(), TextGizmoError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TextGizmo<V = Camera> {
    glyphs: Cow<'static, GlyphTable>,
    config: TextGizmoConfig,
    viewport: Option<V>,
}

impl<V> TextGizmo<V> {
    /// Context with default settings and no viewport
    pub fn new() -> Self {
        Self::with_config(TextGizmoConfig::default())
    }

    /// Context with the given settings and no viewport
    ///
    /// The process-wide glyph table is reused when the configured icon
    /// naming is the default one.
    pub fn with_config(config: TextGizmoConfig) -> Self {
        let glyphs = if config.icon_prefix == DEFAULT_ICON_PREFIX
            && config.icon_extension == DEFAULT_ICON_EXTENSION
        {
            Cow::Borrowed(GlyphTable::shared())
        } else {
            Cow::Owned(GlyphTable::from_config(&config))
        };

        Self {
            glyphs,
            config,
            viewport: None,
        }
    }

    /// Builder form of [`TextGizmo::bind_viewport`]
    #[must_use]
    pub fn with_viewport(mut self, viewport: V) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Make `viewport` the active one, returning the previous viewport
    pub fn bind_viewport(&mut self, viewport: V) -> Option<V> {
        log::debug!("Text gizmo viewport bound");
        self.viewport.replace(viewport)
    }

    /// Remove the active viewport
    pub fn unbind_viewport(&mut self) -> Option<V> {
        log::debug!("Text gizmo viewport unbound");
        self.viewport.take()
    }

    /// Active viewport, if one is bound
    pub fn viewport(&self) -> Option<&V> {
        self.viewport.as_ref()
    }

    /// Mutable access to the active viewport, e.g. to move the camera
    pub fn viewport_mut(&mut self) -> Option<&mut V> {
        self.viewport.as_mut()
    }

    /// Glyph table in use
    pub fn glyphs(&self) -> &GlyphTable {
        &self.glyphs
    }

    /// Settings in use
    pub fn config(&self) -> &TextGizmoConfig {
        &self.config
    }

    /// Screen-space bounds of `text` relative to the anchor
    pub fn layout_bounds(&self, text: &str, alignment: TextAlignment) -> Option<TextBounds> {
        let block = self.glyphs.resolve(text);
        layout::block_bounds(&block, alignment, self.config.cell)
    }
}

impl<V> Default for TextGizmo<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ViewportTransform> TextGizmo<V> {
    fn active_viewport(&self) -> Result<&V> {
        self.viewport.as_ref().ok_or_else(|| {
            log::warn!("Text gizmo draw requested with no active viewport");
            TextGizmoError::NoActiveViewport
        })
    }

    /// Place multi-line, aligned text around `position`
    ///
    /// Returns one instruction per drawable glyph, line by line.
    pub fn place_extended(
        &self,
        position: &Vec3,
        text: &str,
        alignment: TextAlignment,
        color: Color,
    ) -> Result<Vec<GlyphInstruction>> {
        let viewport = self.active_viewport()?;
        let anchor = viewport.world_to_screen(position)?;

        let block = self.glyphs.resolve(text);
        let offsets = layout::block_offsets(&block, alignment, self.config.cell);

        let instructions = block
            .lines()
            .iter()
            .flatten()
            .zip(offsets)
            .map(|(glyph, offset)| -> Result<GlyphInstruction> {
                Ok(GlyphInstruction {
                    glyph: (*glyph).clone(),
                    position: unproject_offset(viewport, &anchor, offset)?,
                    color,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        log::trace!(
            "Placed {} glyphs over {} lines for {:?} at {:?}",
            instructions.len(),
            block.line_count(),
            alignment,
            position
        );
        Ok(instructions)
    }

    /// Place single-line, left-aligned text starting at `position`
    ///
    /// Every source character takes one cell, so characters without a glyph
    /// leave a blank cell. Each character is lower-cased on its own, keeping
    /// one cell per source character even when its lower case form is longer.
    /// No line splitting happens here.
    pub fn place_basic(&self, position: &Vec3, text: &str, color: Color) -> Result<Vec<GlyphInstruction>> {
        let viewport = self.active_viewport()?;
        let anchor = viewport.world_to_screen(position)?;

        let instructions = text
            .chars()
            .enumerate()
            .filter_map(|(index, ch)| {
                let lower = ch.to_lowercase().next()?;
                self.glyphs.get(lower).map(|glyph| (index, glyph))
            })
            .map(|(index, glyph)| -> Result<GlyphInstruction> {
                let offset = layout::basic_offset(index, self.config.cell.width);
                Ok(GlyphInstruction {
                    glyph: glyph.clone(),
                    position: unproject_offset(viewport, &anchor, offset)?,
                    color,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        log::trace!("Placed {} basic glyphs at {:?}", instructions.len(), position);
        Ok(instructions)
    }

    /// Draw text with the default alignment and color
    pub fn draw_extended<D: IconDrawer + ?Sized>(&self, drawer: &mut D, position: &Vec3, text: &str) -> Result<usize> {
        self.draw_extended_with(drawer, position, text, self.config.default_alignment, self.config.default_color)
    }

    /// Draw text with the default alignment
    pub fn draw_extended_colored<D: IconDrawer + ?Sized>(
        &self,
        drawer: &mut D,
        position: &Vec3,
        text: &str,
        color: Color,
    ) -> Result<usize> {
        self.draw_extended_with(drawer, position, text, self.config.default_alignment, color)
    }

    /// Draw text with the default color
    pub fn draw_extended_aligned<D: IconDrawer + ?Sized>(
        &self,
        drawer: &mut D,
        position: &Vec3,
        text: &str,
        alignment: TextAlignment,
    ) -> Result<usize> {
        self.draw_extended_with(drawer, position, text, alignment, self.config.default_color)
    }

    /// Draw multi-line, aligned text. Returns the number of glyphs drawn.
    pub fn draw_extended_with<D: IconDrawer + ?Sized>(
        &self,
        drawer: &mut D,
        position: &Vec3,
        text: &str,
        alignment: TextAlignment,
        color: Color,
    ) -> Result<usize> {
        let instructions = self.place_extended(position, text, alignment, color)?;
        Ok(submit(drawer, &instructions))
    }

    /// Draw single-line text with the default color
    pub fn draw_basic<D: IconDrawer + ?Sized>(&self, drawer: &mut D, position: &Vec3, text: &str) -> Result<usize> {
        self.draw_basic_colored(drawer, position, text, self.config.default_color)
    }

    /// Draw single-line, left-aligned text. Returns the number of glyphs drawn.
    pub fn draw_basic_colored<D: IconDrawer + ?Sized>(
        &self,
        drawer: &mut D,
        position: &Vec3,
        text: &str,
        color: Color,
    ) -> Result<usize> {
        let instructions = self.place_basic(position, text, color)?;
        Ok(submit(drawer, &instructions))
    }
}

/// Offset the anchor in screen space and bring the result back to world space
fn unproject_offset<V: ViewportTransform>(viewport: &V, anchor: &Vec3, offset: Vec2) -> Result<Vec3> {
    viewport.screen_to_world(&Vec3::new(anchor.x + offset.x, anchor.y + offset.y, anchor.z))
}

fn submit<D: IconDrawer + ?Sized>(drawer: &mut D, instructions: &[GlyphInstruction]) -> usize {
    for instruction in instructions {
        drawer.draw_icon(instruction.position, &instruction.glyph, false, instruction.color);
    }
    instructions.len()
}
