// Shared orchestration and simulation tuning constants.

// Frame timing: raw deltas outside this band are clamped before use.
pub const DT_MIN_SEC: f32 = 1.0 / 240.0;
pub const DT_MAX_SEC: f32 = 1.0 / 30.0;

// Input smoothing (decay rates in 1/seconds)
pub const POINTER_DAMP_LAMBDA: f32 = 6.0;
pub const GYRO_DAMP_LAMBDA: f32 = 5.0;
pub const SCROLL_VELOCITY_LAMBDA: f32 = 8.0;

// Interaction scalars
pub const TAP_PULSE_DECAY_PER_SEC: f32 = 18.0;
pub const PRESS_RISE_PER_SEC: f32 = 1.0;
pub const PRESS_FALL_PER_SEC: f32 = 4.0;

// Scene transitions
pub const CUT_FADE_DECAY_PER_SEC: f32 = 10.0;
pub const CUT_FADE_DECAY_REDUCED_MOTION: f32 = 18.0;

// Camera framing: keep the content sphere inscribed with a 5% margin.
pub const FRAMING_MARGIN: f32 = 1.05;
pub const DEFAULT_FOV_RADIANS: f32 = 45.0 * core::f32::consts::PI / 180.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 400.0;

// Particle field
pub const PARTICLE_SUB_STEP_SEC: f32 = 0.016;
pub const PARTICLE_GRID_MIN: usize = 32;
pub const PARTICLE_GRID_MAX: usize = 256;
pub const PARTICLE_BUDGET_FINE: usize = 16384;
pub const PARTICLE_BUDGET_COARSE: usize = 4096;
pub const PARTICLE_DOMAIN_HALF_EXTENT: f32 = 15.0;
pub const RAIN_FLOOR_Y: f32 = -10.0;
pub const RAIN_RESEED_Y_MIN: f32 = 10.0;
pub const RAIN_RESEED_Y_MAX: f32 = 15.0;
pub const IDLE_FRICTION: f32 = 0.98;

// Capability-derived resolution multiplier caps
pub const PIXEL_RATIO_COARSE_LIMIT: f32 = 2.0;
pub const PIXEL_RATIO_FINE_LIMIT: f32 = 2.5;

// Platform ceilings set by the probe, before the pointer-class limit
pub const PLATFORM_PIXEL_CAP_COARSE: f32 = 2.0;
pub const PLATFORM_PIXEL_CAP_FINE: f32 = 3.0;

// Seed mixing for per-subsystem RNG derivation
pub const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;
