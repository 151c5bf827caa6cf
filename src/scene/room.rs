use glam::Vec3;

pub const FACE_COUNT: usize = 6;
pub const VERTICES_PER_FACE: usize = 6;
pub const ROOM_VERTEX_COUNT: usize = FACE_COUNT * VERTICES_PER_FACE;

/// Faces in the order they are laid out in the vertex list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Back,
    Front,
    Left,
    Right,
    Floor,
    Ceiling,
}

impl Face {
    pub const ALL: [Face; FACE_COUNT] = [
        Face::Back,
        Face::Front,
        Face::Left,
        Face::Right,
        Face::Floor,
        Face::Ceiling,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// First vertex of this face in the cuboid vertex list.
    pub fn first_vertex(self) -> usize {
        self.index() * VERTICES_PER_FACE
    }
}

/// Two triangles per face of an axis-aligned box centred on the origin.
///
/// The same list is reused, scaled, for the bulbs and the pedestal.
pub fn cuboid_vertices(half_extents: Vec3) -> [Vec3; ROOM_VERTEX_COUNT] {
    let Vec3 { x: sx, y: sy, z: sz } = half_extents;
    let v = Vec3::new;
    [
        // back
        v(-sx, -sy, -sz), v(sx, sy, -sz), v(sx, -sy, -sz),
        v(sx, sy, -sz), v(-sx, -sy, -sz), v(-sx, sy, -sz),
        // front
        v(-sx, -sy, sz), v(sx, -sy, sz), v(sx, sy, sz),
        v(sx, sy, sz), v(-sx, sy, sz), v(-sx, -sy, sz),
        // left
        v(-sx, -sy, -sz), v(-sx, -sy, sz), v(-sx, sy, sz),
        v(-sx, sy, sz), v(-sx, sy, -sz), v(-sx, -sy, -sz),
        // right
        v(sx, -sy, -sz), v(sx, sy, -sz), v(sx, sy, sz),
        v(sx, sy, sz), v(sx, -sy, sz), v(sx, -sy, -sz),
        // floor
        v(-sx, -sy, -sz), v(sx, -sy, -sz), v(sx, -sy, sz),
        v(sx, -sy, sz), v(-sx, -sy, sz), v(-sx, -sy, -sz),
        // ceiling
        v(-sx, sy, -sz), v(-sx, sy, sz), v(sx, sy, sz),
        v(sx, sy, sz), v(sx, sy, -sz), v(-sx, sy, -sz),
    ]
}
