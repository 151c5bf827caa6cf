use glam::{Vec2, Vec3};

/// Flat, non-indexed triangle list stored as three parallel attribute streams.
///
/// Corners can only be appended whole, so `positions`, `tex_coords` and
/// `normals` always have the same length and share indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    positions: Vec<Vec3>,
    tex_coords: Vec<Vec2>,
    normals: Vec<Vec3>,
}

impl MeshData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(corners: usize) -> Self {
        Self {
            positions: Vec::with_capacity(corners),
            tex_coords: Vec::with_capacity(corners),
            normals: Vec::with_capacity(corners),
        }
    }

    pub fn push_corner(&mut self, position: Vec3, tex_coord: Vec2, normal: Vec3) {
        self.positions.push(position);
        self.tex_coords.push(tex_coord);
        self.normals.push(normal);
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn tex_coords(&self) -> &[Vec2] {
        &self.tex_coords
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Axis-aligned bounds of all positions, `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        Some(
            self.positions
                .iter()
                .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p))),
        )
    }
}
