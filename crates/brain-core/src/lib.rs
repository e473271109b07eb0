//! Platform-free engine behind the brain intro: particle data, the intro
//! director and its cancellation scope, orbit camera, label projection and
//! load-progress bookkeeping. Nothing here touches the DOM or the GPU.

pub mod assets;
pub mod camera;
pub mod constants;
pub mod director;
pub mod ease;
pub mod font;
pub mod labels;
pub mod loading;
pub mod memory;
pub mod mesh;
pub mod panel;
pub mod particles;
pub mod rising;
pub mod scene;
pub mod scheduler;
pub mod tween;
pub mod xray;

pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");
pub static BUBBLES_WGSL: &str = include_str!("../shaders/bubbles.wgsl");
pub static XRAY_WGSL: &str = include_str!("../shaders/xray.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");

pub use director::{Director, IntroPhase, StageCommand, StartMode};
pub use scene::BrainScene;
