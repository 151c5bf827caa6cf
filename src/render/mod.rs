pub mod buffers;
pub mod camera;
pub mod mesh;
pub mod model;
pub mod obj_loader;
pub mod pipeline;
pub mod shaders;

pub use camera::{Camera, Projection};
pub use mesh::MeshData;
pub use model::Model;
pub use pipeline::RenderPipeline;
pub use shaders::{ShaderError, ShaderProgram};
