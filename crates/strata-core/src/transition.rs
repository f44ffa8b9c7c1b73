//! Scene-cut transition state: a decaying fade scalar plus a cycling style.
//!
//! There is no separate "transitioning" flag; a transition is simply
//! `cut_fade > 0`.

use crate::math::damp;

/// Number of distinct composite transition algorithms.
pub const TRANSITION_STYLE_COUNT: u32 = 4;

/// Fade is snapped to zero once it falls below this.
pub const CUT_FADE_EPSILON: f32 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionState {
    cut_fade: f32,
    style: u32,
}

impl Default for TransitionState {
    fn default() -> Self {
        Self {
            cut_fade: 0.0,
            style: 0,
        }
    }
}

impl TransitionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called the instant the active scene changes: fade jumps to exactly 1
    /// and the style advances to the next algorithm.
    pub fn begin_cut(&mut self) {
        self.cut_fade = 1.0;
        self.style = (self.style + 1) % TRANSITION_STYLE_COUNT;
    }

    /// Decay the fade toward zero. Non-increasing between cuts, never
    /// negative.
    pub fn step(&mut self, lambda: f32, dt: f32) {
        self.cut_fade = damp(self.cut_fade, 0.0, lambda, dt).max(0.0);
        if self.cut_fade < CUT_FADE_EPSILON {
            self.cut_fade = 0.0;
        }
    }

    #[inline]
    pub fn cut_fade(&self) -> f32 {
        self.cut_fade
    }

    #[inline]
    pub fn style(&self) -> u32 {
        self.style
    }

    #[inline]
    pub fn in_transition(&self) -> bool {
        self.cut_fade > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cut_starts_at_one_and_decays_monotonically() {
        let mut t = TransitionState::new();
        t.begin_cut();
        assert_eq!(t.cut_fade(), 1.0);
        let mut prev = t.cut_fade();
        for _ in 0..240 {
            t.step(10.0, 1.0 / 60.0);
            assert!(t.cut_fade() <= prev);
            assert!(t.cut_fade() >= 0.0);
            prev = t.cut_fade();
        }
        assert_eq!(t.cut_fade(), 0.0);
    }

    #[test]
    fn style_cycles_in_order() {
        let mut t = TransitionState::new();
        let mut seen = Vec::new();
        for _ in 0..6 {
            t.begin_cut();
            seen.push(t.style());
        }
        assert_eq!(seen, vec![1, 2, 3, 0, 1, 2]);
    }
}
