//! Temporal smoothing primitives shared by every subsystem.
//!
//! Pointer and gyro fusion, the cut-fade, camera distance and the interaction
//! scalars all converge on the same frame-rate independent exponential form,
//! so it lives here once.

use glam::{Vec2, Vec3};

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Frame-rate independent exponential approach of `current` toward `target`.
///
/// `lambda` is the decay rate in 1/seconds; larger values converge faster.
#[inline]
pub fn damp(current: f32, target: f32, lambda: f32, dt: f32) -> f32 {
    lerp(current, target, 1.0 - (-lambda * dt).exp())
}

#[inline]
pub fn damp_vec2(current: Vec2, target: Vec2, lambda: f32, dt: f32) -> Vec2 {
    current.lerp(target, 1.0 - (-lambda * dt).exp())
}

#[inline]
pub fn damp_vec3(current: Vec3, target: Vec3, lambda: f32, dt: f32) -> Vec3 {
    current.lerp(target, 1.0 - (-lambda * dt).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damp_converges_and_never_overshoots() {
        let mut v = 1.0f32;
        for _ in 0..600 {
            let next = damp(v, 0.0, 10.0, 1.0 / 60.0);
            assert!(next <= v);
            assert!(next >= 0.0);
            v = next;
        }
        assert!(v < 0.001);
    }

    #[test]
    fn damp_is_frame_rate_independent_in_the_limit() {
        // One big step and many small steps should land close together.
        let coarse = damp(1.0, 0.0, 5.0, 0.5);
        let mut fine = 1.0f32;
        for _ in 0..500 {
            fine = damp(fine, 0.0, 5.0, 0.001);
        }
        assert!((coarse - fine).abs() < 1e-3);
    }
}
