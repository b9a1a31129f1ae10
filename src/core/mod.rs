pub mod camera;
pub mod config;
pub mod constants;
pub mod input;
pub mod model;
pub mod pose;
pub mod reveal;
pub mod session;

pub use camera::Camera;
pub use config::ViewerConfig;
pub use input::{InputState, ScrollMetrics, ViewportSize};
pub use model::{ModelError, ModelMesh, Vertex};
pub use pose::{DisplayedObject, PoseConfig, PoseTarget};
pub use reveal::{IntersectionSample, Reveal, RevealMonitor, RevealPolicy};
pub use session::{FrameSink, ViewportSession};

// Shaders bundled as string constants
pub static MODEL_WGSL: &str = include_str!("../../shaders/model.wgsl");
