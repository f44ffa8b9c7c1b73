use thiserror::Error;

/// Per-frame recoverable failure raised by a scene lifecycle method.
///
/// The director reports the first occurrence per (scene, phase) pair and
/// keeps ticking; the scene is retried naturally on the next frame.
#[derive(Debug, Error)]
#[error("scene `{scene}` {phase} failed: {detail}")]
pub struct SceneError {
    pub scene: &'static str,
    pub phase: &'static str,
    pub detail: String,
}

impl SceneError {
    pub fn during(scene: &'static str, phase: &'static str, detail: impl Into<String>) -> Self {
        Self {
            scene,
            phase,
            detail: detail.into(),
        }
    }

    /// Dedupe key for the diagnostics overlay.
    pub fn context_key(&self) -> String {
        format!("{}/{}", self.scene, self.phase)
    }
}

/// Sticky failure raised by the particle simulation step.
#[derive(Debug, Error)]
pub enum ParticleError {
    #[error("particle state became non-finite in mode {mode} at t={time:.3}")]
    NonFinite { mode: &'static str, time: f32 },
    #[error("particle field stepped after dispose")]
    Disposed,
}
