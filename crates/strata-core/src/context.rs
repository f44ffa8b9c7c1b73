//! Per-frame value types exchanged between the front-end and the director.

use glam::{Vec2, Vec3};

/// Canvas backing-store dimensions in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// Raw input sampled by the front-end at the top of a frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    /// Unclamped seconds since the previous frame.
    pub raw_dt: f32,
    /// Document visibility; hidden frames are skipped entirely.
    pub visible: bool,
    pub viewport: Viewport,
    /// Scroll progress through the tower, [0, 1].
    pub scroll_progress: f32,
    /// Pointer position in normalized device range [-1, 1].
    pub pointer: Vec2,
    pub pointer_down: bool,
    /// Device orientation vector, components roughly in [-1, 1].
    pub gyro: Vec3,
    pub gyro_active: bool,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            raw_dt: 1.0 / 60.0,
            visible: true,
            viewport: Viewport::new(1280, 720),
            scroll_progress: 0.0,
            pointer: Vec2::ZERO,
            pointer_down: false,
            gyro: Vec3::ZERO,
            gyro_active: false,
        }
    }
}

/// Fused, smoothed frame state handed to the active scene.
///
/// Created fresh each frame by the director; scenes only read it.
#[derive(Clone, Copy, Debug)]
pub struct RuntimeContext {
    pub time: f32,
    pub dt: f32,
    pub scroll_progress: f32,
    pub local_progress: f32,
    pub scroll_velocity: f32,
    pub scene_index: usize,
    pub active_scene_id: &'static str,
    pub pointer: Vec2,
    pub pointer_velocity: Vec2,
    pub gyro: Vec3,
    pub gyro_active: bool,
    pub press_intensity: f32,
    pub tap_pulse: f32,
    /// Accumulated auto-rotate yaw, radians.
    pub orbit_angle: f32,
    pub viewport: Viewport,
}

/// Externally-readable scene identity, refreshed per frame for DOM/CSS sync.
#[derive(Clone, Copy, Debug)]
pub struct SceneMarkers {
    pub scene_id: &'static str,
    pub scene_index: usize,
    pub progress: f32,
    pub scroll_velocity: f32,
    pub pointer: Vec2,
}
