//! # Text Gizmo
//!
//! Draws ASCII text in a 3D editor viewport overlay as a row of small baked
//! glyph icons that keep a constant size on screen.
//!
//! ## Features
//!
//! - **Multi-line text**: `"\n"` and `"\r\n"` line breaks
//! - **3x3 alignment**: left/center/right by top/middle/bottom
//! - **Constant screen size**: glyphs are offset in screen units and
//!   projected back into world space
//! - **Pluggable host**: any camera via [`render::ViewportTransform`], any
//!   icon renderer via [`gizmo::IconDrawer`]
//!
//! ## Quick Start
//!
//! ```rust
//! use text_gizmo::prelude::*;
//!
//! fn draw_labels(camera: &Camera, draw_list: &mut IconDrawList) -> Result<(), TextGizmoError> {
//!     let gizmo = TextGizmo::new().with_viewport(camera);
//!     let white = Color::new(1.0, 1.0, 1.0, 1.0);
//!
//!     gizmo.draw_basic_colored(draw_list, &Vec3::new(0.0, 1.0, 0.0), "spawn point", white)?;
//!     gizmo.draw_extended_with(
//!         draw_list,
//!         &Vec3::zeros(),
//!         "hp: 100\nammo: 12",
//!         TextAlignment::CENTER_BOTTOM,
//!         white,
//!     )?;
//!     Ok(())
//! }
//!
//! let mut draw_list = IconDrawList::new();
//! draw_labels(&Camera::default(), &mut draw_list).unwrap();
//! assert_eq!(draw_list.len(), 11 + 15);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod render;
pub mod gizmo;

mod error;

pub use error::{Result, TextGizmoError};

/// Common imports for gizmo users
pub mod prelude {
    pub use crate::{
        TextGizmoError,
        foundation::math::{Vec2, Vec3, Vec4},
        config::{Config, ConfigError, CellSize, TextGizmoConfig},
        render::{Camera, ScreenSpaceViewport, ViewportTransform},
        gizmo::{
            Color, GlyphId, GlyphInstruction, GlyphTable, HorizontalAlign, IconDrawList,
            IconDrawer, TextAlignment, TextGizmo, VerticalAlign,
        },
    };
}
