use glam::{Mat4, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    Perspective {
        fov: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    },
}

impl Projection {
    pub fn matrix(&self) -> Mat4 {
        match *self {
            Projection::Perspective { fov, aspect_ratio, near, far } => {
                Mat4::perspective_rh_gl(fov.to_radians(), aspect_ratio, near, far)
            }
        }
    }
}

/// First-person camera driven by yaw/pitch in degrees.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub front: Vec3,
    pub world_up: Vec3,
    pub projection: Projection,
    yaw: f32,
    pitch: f32,
    pitch_limit: f32,
}

impl Camera {
    pub fn new(position: Vec3, yaw: f32, pitch: f32, projection: Projection) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            world_up: Vec3::Y,
            projection,
            yaw,
            pitch,
            pitch_limit: 89.0,
        };
        camera.update_vectors();
        camera
    }

    pub fn with_pitch_limit(mut self, limit: f32) -> Self {
        self.pitch_limit = limit;
        self.update_vectors();
        self
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Adds to yaw and pitch; pitch is clamped so the view never flips.
    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw += yaw_delta;
        self.pitch += pitch_delta;
        self.update_vectors();
    }

    fn update_vectors(&mut self) {
        self.pitch = self.pitch.clamp(-self.pitch_limit, self.pitch_limit);
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos())
            .normalize();
    }

    pub fn right(&self) -> Vec3 {
        self.front.cross(self.world_up).normalize()
    }

    /// View direction projected onto the floor plane.
    pub fn flat_front(&self) -> Vec3 {
        Vec3::new(self.front.x, 0.0, self.front.z).normalize_or_zero()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.world_up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let Projection::Perspective { aspect_ratio, .. } = &mut self.projection;
        *aspect_ratio = width as f32 / height as f32;
    }
}
