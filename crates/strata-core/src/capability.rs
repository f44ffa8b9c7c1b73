//! Device-capability descriptor and the resource budgets derived from it.
//!
//! The descriptor is produced exactly once by the platform probe and then
//! passed by value into every component constructor; nothing in the core ever
//! re-reads platform state.

use crate::constants::{
    PARTICLE_BUDGET_COARSE, PARTICLE_BUDGET_FINE, PARTICLE_GRID_MAX, PARTICLE_GRID_MIN,
    PIXEL_RATIO_COARSE_LIMIT, PIXEL_RATIO_FINE_LIMIT,
};

/// One-shot snapshot of the platform's rendering capability.
#[derive(Clone, Copy, Debug)]
pub struct CapabilityDescriptor {
    /// Primary pointer is coarse (touch-first device).
    pub pointer_coarse: bool,
    /// Reported device pixel ratio.
    pub device_pixel_ratio: f32,
    /// Platform-level cap on the usable pixel ratio.
    pub max_pixel_ratio_cap: f32,
    /// User prefers reduced motion.
    pub reduced_motion: bool,
}

impl Default for CapabilityDescriptor {
    fn default() -> Self {
        Self {
            pointer_coarse: false,
            device_pixel_ratio: 1.0,
            max_pixel_ratio_cap: PIXEL_RATIO_FINE_LIMIT,
            reduced_motion: false,
        }
    }
}

impl CapabilityDescriptor {
    /// Rendering resolution multiplier applied to CSS pixel dimensions.
    pub fn resolution_multiplier(&self) -> f32 {
        let pointer_limit = if self.pointer_coarse {
            PIXEL_RATIO_COARSE_LIMIT
        } else {
            PIXEL_RATIO_FINE_LIMIT
        };
        self.max_pixel_ratio_cap
            .min(self.device_pixel_ratio)
            .min(pointer_limit)
            .max(1.0)
    }

    /// Particle budget before grid quantization.
    pub fn max_particles(&self) -> usize {
        if self.pointer_coarse {
            PARTICLE_BUDGET_COARSE
        } else {
            PARTICLE_BUDGET_FINE
        }
    }

    /// Side length of the square particle grid.
    pub fn particle_grid_side(&self) -> usize {
        let side = (self.max_particles() as f32).sqrt().ceil() as usize;
        side.clamp(PARTICLE_GRID_MIN, PARTICLE_GRID_MAX)
    }
}
