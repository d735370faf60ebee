//! Viewport transforms
//!
//! The text gizmo pipeline needs to move points between world space and the
//! viewport's screen space. [`Camera`] does this with a perspective
//! projection; [`ScreenSpaceViewport`] is the identity for overlays that are
//! already laid out in screen units.

mod camera;
mod viewport;

pub use camera::Camera;
pub use viewport::{ScreenSpaceViewport, ViewportTransform};
