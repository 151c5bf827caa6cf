use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    pub clear_color: Vec3,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: "Eyeball Viewer".to_string(),
            width: 1024,
            height: 768,
            vsync: true,
            clear_color: Vec3::splat(0.2),
            fov: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}
