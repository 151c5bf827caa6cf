pub mod config;
pub mod player;
pub mod render;
pub mod scene;
pub mod utils;

// Re-export commonly used types
pub use config::ViewerConfig;
pub use player::{PlayerInput, SimulationState};
pub use render::{Camera, MeshData, Model, RenderPipeline, ShaderProgram};
pub use scene::{compose_frame, DrawCall, FrameContext};
pub use utils::error::ModelError;
