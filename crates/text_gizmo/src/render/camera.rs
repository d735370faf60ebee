//! # Viewport Camera
//!
//! Perspective camera that converts points between world space and the
//! viewport's pixel space for gizmo placement.
//!
//! ## Design Principles
//! - **Library-agnostic**: No graphics API types in camera math
//! - **Exact round trip**: Screen depth is kept in world units so unprojection
//!   lands back on the same view ray at the same distance

use crate::error::{Result, TextGizmoError};
use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec2, Vec3, Vec4};
use crate::render::ViewportTransform;

/// Smallest clip-space W accepted before a point counts as on the camera plane
const MIN_CLIP_W: f32 = 1e-6;

/// 3D perspective camera bound to a viewport
///
/// # Coordinate System
/// Uses standard right-handed Y-up coordinates in world and view space:
/// - X+ = Right
/// - Y+ = Up
/// - the camera looks down -Z in view space
///
/// The projection chain is `P × X × V` where `X` flips Y and Z into a Y-down
/// clip space. Screen space flips Y back so that screen Y grows upward.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,

    /// Vertical field of view in radians
    pub fov: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,

    /// Viewport size in pixels
    pub viewport_size: Vec2,
}

impl Camera {
    /// Create a new perspective camera looking at the origin
    ///
    /// # Arguments
    /// * `position` - Camera position in world space
    /// * `fov_degrees` - Vertical field of view in degrees
    /// * `viewport_size` - Viewport width and height in pixels
    /// * `near` - Distance to near clipping plane (must be > 0)
    /// * `far` - Distance to far clipping plane (must be > near)
    ///
    /// # Example
    /// ```rust
    /// use text_gizmo::foundation::math::{Vec2, Vec3};
    /// use text_gizmo::render::Camera;
    ///
    /// let camera = Camera::perspective(
    ///     Vec3::new(0.0, 2.0, 5.0),
    ///     60.0,
    ///     Vec2::new(1280.0, 720.0),
    ///     0.1,
    ///     100.0,
    /// );
    /// assert_eq!(camera.target, Vec3::zeros());
    /// ```
    pub fn perspective(position: Vec3, fov_degrees: f32, viewport_size: Vec2, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: utils::deg_to_rad(fov_degrees),
            near,
            far,
            viewport_size,
        }
    }

    /// Update camera position in world space
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        log::trace!("Camera position updated to: {:?}", position);
    }

    /// Configure camera to look at a specific point with custom up vector
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        self.target = target;
        self.up = up;
        log::trace!("Camera look_at updated - target: {:?}, up: {:?}", target, up);
    }

    /// Update the viewport size after a resize
    ///
    /// Only logs when the size changes by more than a pixel to keep resize
    /// drags quiet.
    pub fn set_viewport_size(&mut self, viewport_size: Vec2) {
        if (self.viewport_size - viewport_size).abs().max() > 1.0 {
            log::info!(
                "Camera viewport resized: {}x{} -> {}x{}",
                self.viewport_size.x,
                self.viewport_size.y,
                viewport_size.x,
                viewport_size.y
            );
        }
        self.viewport_size = viewport_size;
    }

    /// Aspect ratio (width / height) of the viewport
    pub fn aspect(&self) -> f32 {
        self.viewport_size.x / self.viewport_size.y
    }

    /// World to view space
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.target, self.up)
    }

    /// View to clip space
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov, self.aspect(), self.near, self.far)
    }

    /// Fail unless the viewport has a finite, positive size
    fn check_viewport(&self) -> Result<()> {
        let size = self.viewport_size;
        if size.iter().all(|extent| extent.is_finite() && *extent > 0.0) {
            Ok(())
        } else {
            Err(TextGizmoError::DegenerateProjection(format!(
                "viewport size {}x{} is empty",
                size.x, size.y
            )))
        }
    }

    /// Combined `P × X × V` matrix
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * Mat4::clip_space_flip() * self.view_matrix()
    }
}

impl ViewportTransform for Camera {
    fn world_to_screen(&self, world: &Vec3) -> Result<Vec3> {
        self.check_viewport()?;
        let clip = self.view_projection_matrix() * Vec4::new(world.x, world.y, world.z, 1.0);

        // W is the distance in front of the camera plane
        if clip.w.abs() < MIN_CLIP_W {
            return Err(TextGizmoError::DegenerateProjection(format!(
                "point {:?} lies on the camera plane",
                world
            )));
        }

        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;

        // Clip space is Y-down; screen space is Y-up from the bottom edge
        Ok(Vec3::new(
            (ndc_x + 1.0) * 0.5 * self.viewport_size.x,
            (1.0 - ndc_y) * 0.5 * self.viewport_size.y,
            clip.w,
        ))
    }

    fn screen_to_world(&self, screen: &Vec3) -> Result<Vec3> {
        self.check_viewport()?;
        let depth = screen.z;
        if depth.abs() < MIN_CLIP_W {
            return Err(TextGizmoError::DegenerateProjection(format!(
                "screen point {:?} has no depth",
                screen
            )));
        }

        let inv_view_proj = self.view_projection_matrix().try_inverse().ok_or_else(|| {
            TextGizmoError::DegenerateProjection("view-projection matrix is not invertible".to_string())
        })?;

        let ndc_x = screen.x / self.viewport_size.x * 2.0 - 1.0;
        let ndc_y = 1.0 - screen.y / self.viewport_size.y * 2.0;

        // Rebuild the clip-space point at the requested depth, then undo P × X × V
        let projection = self.projection_matrix();
        let clip = Vec4::new(
            ndc_x * depth,
            ndc_y * depth,
            projection[(2, 2)] * depth + projection[(2, 3)],
            depth,
        );
        let world = inv_view_proj * clip;

        Ok(Vec3::new(world.x / world.w, world.y / world.w, world.z / world.w))
    }
}

impl Default for Camera {
    /// Camera above and behind the origin, looking at it
    ///
    /// # Default Configuration
    /// - Position: (0, 3, 3)
    /// - Target: (0, 0, 0)
    /// - FOV: 45 degrees
    /// - Viewport: 1920 x 1080
    /// - Near / far: 0.1 / 1000
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 3.0, 3.0),
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: std::f32::consts::FRAC_PI_4,
            near: 0.1,
            far: 1000.0,
            viewport_size: Vec2::new(1920.0, 1080.0),
        }
    }
}
