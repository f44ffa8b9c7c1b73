//! Platform-independent engine core: scene catalog, director, particle
//! simulation, transitions and diagnostics. Everything here runs on the host
//! for tests; the web crate owns the GPU and DOM.

pub mod camera;
pub mod capability;
pub mod constants;
pub mod context;
pub mod diag;
pub mod director;
pub mod draw;
pub mod error;
pub mod math;
pub mod particles;
pub mod scenes;
pub mod transition;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");
pub static TRANSITION_WGSL: &str = include_str!("../shaders/transition.wgsl");

pub use camera::{frame_content, framing_distance, Camera};
pub use capability::CapabilityDescriptor;
pub use context::{FrameInput, RuntimeContext, SceneMarkers, Viewport};
pub use diag::{DiagEntry, Diagnostics, MAX_VISIBLE_ENTRIES};
pub use director::{
    scene_index_gallery, scene_index_scroll, Director, PostParams, ProgressMode, Tunables,
};
pub use draw::{DrawList, InstanceData};
pub use error::{ParticleError, SceneError};
pub use particles::{ParticleConfig, ParticleField, ParticleMode};
pub use scenes::{catalog, Scene, SceneCommon, SCENE_COUNT};
pub use transition::{TransitionState, TRANSITION_STYLE_COUNT};
