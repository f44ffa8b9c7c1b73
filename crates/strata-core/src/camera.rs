//! Camera description and the shared content-framing helper.
//!
//! These types avoid referencing platform-specific APIs; the web frontend
//! consumes them to build view/projection matrices for the geometry pass.

use crate::constants::{CAMERA_ZFAR, CAMERA_ZNEAR, DEFAULT_FOV_RADIANS, FRAMING_MARGIN};
use crate::context::Viewport;
use glam::{Mat4, Vec3};

/// Simple right-handed camera with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: DEFAULT_FOV_RADIANS,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Distance from eye to the look target.
    #[inline]
    pub fn distance(&self) -> f32 {
        (self.eye - self.target).length()
    }
}

/// Distance required to keep a sphere of `content_radius` inscribed in the
/// viewport with a 5% margin. Portrait viewports are limited by horizontal
/// extent, so the aspect divides into the fit there.
pub fn framing_distance(content_radius: f32, fovy_radians: f32, aspect: f32) -> f32 {
    let half_tan = (fovy_radians * 0.5).tan();
    if aspect < 1.0 {
        content_radius * FRAMING_MARGIN / (half_tan * aspect)
    } else {
        content_radius * FRAMING_MARGIN / half_tan
    }
}

/// Re-frame `camera` so the content sphere stays visible in `viewport`,
/// preserving the current viewing direction.
pub fn frame_content(camera: &mut Camera, content_radius: f32, viewport: Viewport) {
    camera.aspect = viewport.aspect();
    let dist = framing_distance(content_radius, camera.fovy_radians, camera.aspect);
    let dir = (camera.eye - camera.target).normalize_or_zero();
    let dir = if dir == Vec3::ZERO { Vec3::Z } else { dir };
    camera.eye = camera.target + dir * dist;
}
