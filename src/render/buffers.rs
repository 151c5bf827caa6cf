use crate::render::mesh::MeshData;
use bytemuck::Pod;
use gl::types::*;
use glam::Vec3;

pub const POSITION_SLOT: GLuint = 0;
pub const TEX_COORD_SLOT: GLuint = 1;
pub const NORMAL_SLOT: GLuint = 2;

/// One tightly packed float stream bound to a fixed attribute slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub slot: GLuint,
    pub components: GLint,
}

impl VertexAttribute {
    pub const fn stride(&self) -> usize {
        self.components as usize * std::mem::size_of::<f32>()
    }
}

pub const POSITION: VertexAttribute = VertexAttribute { slot: POSITION_SLOT, components: 3 };
pub const TEX_COORD: VertexAttribute = VertexAttribute { slot: TEX_COORD_SLOT, components: 2 };
pub const NORMAL: VertexAttribute = VertexAttribute { slot: NORMAL_SLOT, components: 3 };

/// Layout of a full mesh: one non-interleaved buffer per attribute.
pub const MESH_LAYOUT: [VertexAttribute; 3] = [POSITION, TEX_COORD, NORMAL];

/// Vertex array object plus the buffers it references.
///
/// Buffers are uploaded once with `STATIC_DRAW` and freed when the value is
/// dropped, so a context must be current for both construction and drop.
#[derive(Debug)]
pub struct GeometryBuffers {
    vao: GLuint,
    buffers: Vec<GLuint>,
    vertex_count: usize,
}

impl GeometryBuffers {
    pub fn from_mesh(mesh: &MeshData) -> Self {
        let [position, tex_coord, normal] = MESH_LAYOUT;
        let mut geometry = Self::begin(mesh.vertex_count());
        geometry.upload(position, mesh.positions());
        geometry.upload(tex_coord, mesh.tex_coords());
        geometry.upload(normal, mesh.normals());
        geometry.finish()
    }

    /// Geometry with only the position stream; the other slots stay disabled.
    pub fn from_positions(positions: &[Vec3]) -> Self {
        let mut geometry = Self::begin(positions.len());
        geometry.upload(POSITION, positions);
        geometry.finish()
    }

    fn begin(vertex_count: usize) -> Self {
        let mut vao = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::BindVertexArray(vao);
        }
        Self {
            vao,
            buffers: Vec::with_capacity(MESH_LAYOUT.len()),
            vertex_count,
        }
    }

    fn upload<T: Pod>(&mut self, attribute: VertexAttribute, data: &[T]) {
        debug_assert_eq!(std::mem::size_of::<T>(), attribute.stride());
        let bytes: &[u8] = bytemuck::cast_slice(data);

        let mut vbo = 0;
        unsafe {
            gl::GenBuffers(1, &mut vbo);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                bytes.len() as GLsizeiptr,
                bytes.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );
            gl::EnableVertexAttribArray(attribute.slot);
            gl::VertexAttribPointer(
                attribute.slot,
                attribute.components,
                gl::FLOAT,
                gl::FALSE,
                0,
                std::ptr::null(),
            );
        }
        self.buffers.push(vbo);
    }

    fn finish(self) -> Self {
        unsafe {
            gl::BindVertexArray(0);
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
        }
        self
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn bind(&self) {
        unsafe {
            gl::BindVertexArray(self.vao);
        }
    }

    /// Draws `count` vertices starting at `first` as a triangle list.
    pub fn draw_range(&self, first: usize, count: usize) {
        debug_assert!(first + count <= self.vertex_count);
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawArrays(gl::TRIANGLES, first as GLint, count as GLsizei);
            gl::BindVertexArray(0);
        }
    }

    pub fn draw(&self) {
        if self.vertex_count > 0 {
            self.draw_range(0, self.vertex_count);
        }
    }

    /// Frees the GPU handles now instead of at end of scope.
    pub fn delete(self) {
        drop(self);
    }
}

impl Drop for GeometryBuffers {
    fn drop(&mut self) {
        unsafe {
            if !self.buffers.is_empty() {
                gl::DeleteBuffers(self.buffers.len() as GLsizei, self.buffers.as_ptr());
            }
            if self.vao != 0 {
                gl::DeleteVertexArrays(1, &self.vao);
            }
        }
    }
}
