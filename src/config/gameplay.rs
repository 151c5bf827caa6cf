use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Walking speed in units per second.
    pub player_speed: f32,
    pub sprint_multiplier: f32,
    /// Degrees of rotation per pixel of mouse travel.
    pub mouse_sensitivity: f32,
    pub pitch_limit: f32,
    /// Fixed camera height; movement never changes it.
    pub eye_height: f32,
    /// Camera x and z must stay strictly inside `(-limit, limit)`.
    pub footprint_limit: f32,
    pub start_position: Vec3,
    pub start_yaw: f32,
    pub start_pitch: f32,
}

impl GameplayConfig {
    pub fn start_position(&self) -> Vec3 {
        Vec3::new(self.start_position.x, self.eye_height, self.start_position.z)
    }
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            player_speed: 1.8,
            sprint_multiplier: 2.0,
            mouse_sensitivity: 0.1,
            pitch_limit: 89.0,
            eye_height: 0.3,
            footprint_limit: 29.5,
            start_position: Vec3::new(0.0, 0.3, -20.0),
            // Looking down +z toward the pedestal, tilted up slightly.
            start_yaw: 90.0,
            start_pitch: 5.71,
        }
    }
}
