use glam::{Vec2, Vec3, Vec3Swizzles};

/// Square region of the floor plan the camera may occupy (open interval).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub limit: f32,
}

impl Footprint {
    pub fn contains(&self, position: Vec3) -> bool {
        position.x > -self.limit
            && position.x < self.limit
            && position.z > -self.limit
            && position.z < self.limit
    }
}

/// Infinite vertical cylinder the camera may not enter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderObstacle {
    pub center: Vec2,
    pub radius: f32,
}

impl CylinderObstacle {
    pub fn around(position: Vec3, radius: f32) -> Self {
        Self {
            center: position.xz(),
            radius,
        }
    }

    pub fn blocks(&self, position: Vec3) -> bool {
        position.xz().distance(self.center) < self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub footprint: Footprint,
    pub obstacle: CylinderObstacle,
}

impl Collider {
    pub fn allows(&self, position: Vec3) -> bool {
        self.footprint.contains(position) && !self.obstacle.blocks(position)
    }

    /// Moves toward `proposed` as far as the collider allows.
    ///
    /// The full move is tried first, then each horizontal axis on its own so
    /// the camera slides along walls and around the obstacle. If nothing is
    /// allowed the camera stays at `current`.
    pub fn resolve_move(&self, current: Vec3, proposed: Vec3) -> Vec3 {
        if self.allows(proposed) {
            return proposed;
        }

        let along_x = Vec3::new(proposed.x, proposed.y, current.z);
        let along_z = Vec3::new(current.x, proposed.y, proposed.z);
        for candidate in [along_x, along_z] {
            if candidate != current && self.allows(candidate) {
                return candidate;
            }
        }
        current
    }
}
