use crate::render::{buffers::GeometryBuffers, mesh::MeshData, obj_loader};
use crate::utils::error::Result;
use log::info;
use std::path::Path;

/// A loaded mesh together with the GPU buffers it was uploaded to.
pub struct Model {
    mesh: MeshData,
    buffers: GeometryBuffers,
}

impl Model {
    /// Loads an OBJ file and uploads it. Requires a current GL context.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mesh = obj_loader::load_obj(path)?;
        match mesh.bounds() {
            Some((min, max)) => info!(
                "Loaded model {:?}: {} triangles, bounds {:?}..{:?}",
                path,
                mesh.triangle_count(),
                min,
                max
            ),
            None => info!("Loaded model {:?}: no faces", path),
        }
        Ok(Self::from_mesh(mesh))
    }

    pub fn from_mesh(mesh: MeshData) -> Self {
        let buffers = GeometryBuffers::from_mesh(&mesh);
        Self { mesh, buffers }
    }

    /// Empty model that draws nothing, used when loading failed.
    pub fn placeholder() -> Self {
        Self::from_mesh(MeshData::new())
    }

    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    pub fn draw(&self) {
        self.buffers.draw();
    }

    /// Releases the vertex array and its buffers.
    pub fn delete_buffers(self) {
        self.buffers.delete();
    }
}
