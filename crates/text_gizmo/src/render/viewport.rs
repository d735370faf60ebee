//! World/screen conversion seam

use crate::error::Result;
use crate::foundation::math::Vec3;

/// Conversion between world space and a viewport's screen space.
///
/// Screen space is in pixels with the origin at the bottom-left and Y up.
/// The Z component is the distance in front of the camera plane in world
/// units, so `screen_to_world(world_to_screen(p))` returns `p`.
pub trait ViewportTransform {
    /// Project a world-space point to screen space
    fn world_to_screen(&self, world: &Vec3) -> Result<Vec3>;

    /// Unproject a screen-space point (with depth) back to world space
    fn screen_to_world(&self, screen: &Vec3) -> Result<Vec3>;
}

impl<T: ViewportTransform + ?Sized> ViewportTransform for &T {
    fn world_to_screen(&self, world: &Vec3) -> Result<Vec3> {
        (**self).world_to_screen(world)
    }

    fn screen_to_world(&self, screen: &Vec3) -> Result<Vec3> {
        (**self).screen_to_world(screen)
    }
}

/// Viewport whose world space already is screen space
///
/// - Fixed screen coordinates (pixels, Y up)
/// - No perspective, depth passes through
/// - Used for HUD-style overlays and for exact layout checks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenSpaceViewport;

impl ViewportTransform for ScreenSpaceViewport {
    fn world_to_screen(&self, world: &Vec3) -> Result<Vec3> {
        Ok(*world)
    }

    fn screen_to_world(&self, screen: &Vec3) -> Result<Vec3> {
        Ok(*screen)
    }
}
