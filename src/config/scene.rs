use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Placement, sizes and colours of everything drawn in the room.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub model_path: PathBuf,
    pub vertex_shader: PathBuf,
    pub fragment_shader: PathBuf,
    /// Abort start-up instead of drawing an empty placeholder model.
    pub abort_on_model_error: bool,

    pub room_half_extents: Vec3,
    /// Base colours for back, front, left, right, floor and ceiling.
    pub face_colors: [Vec3; 6],

    pub table_position: Vec3,
    pub alarm_trigger_radius: f32,

    pub eyeball_position: Vec3,
    pub eyeball_radius: f32,
    pub eyeball_scale: f32,
    pub eyeball_color: Vec3,
    /// Extra clearance kept between the camera and the eyeball radius.
    pub collision_margin: f32,

    pub bulb_offsets: Vec<f32>,
    pub bulb_height: f32,
    pub bulb_scale: f32,
    pub bulb_idle_color: Vec3,

    pub pedestal_scale: f32,
    pub pedestal_color: Vec3,
}

impl SceneConfig {
    pub fn collision_radius(&self) -> f32 {
        self.eyeball_radius + self.collision_margin
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("assets/objects/eyeball.obj"),
            vertex_shader: PathBuf::from("assets/shaders/scene.vert"),
            fragment_shader: PathBuf::from("assets/shaders/scene.frag"),
            abort_on_model_error: false,
            room_half_extents: Vec3::new(30.0, 10.0, 30.0),
            face_colors: [
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.4, 0.7, 1.0),
                Vec3::new(1.0, 0.0, 1.0),
            ],
            table_position: Vec3::new(0.0, -9.925, 0.0),
            alarm_trigger_radius: 3.5,
            eyeball_position: Vec3::new(0.0, -6.0, 0.0),
            eyeball_radius: 1.0,
            eyeball_scale: 0.8,
            eyeball_color: Vec3::ONE,
            collision_margin: 1.5,
            bulb_offsets: vec![-0.4, 0.4],
            bulb_height: 9.8,
            bulb_scale: 0.1,
            bulb_idle_color: Vec3::new(1.0, 1.0, 0.0),
            pedestal_scale: 0.15,
            pedestal_color: Vec3::new(0.5, 0.3, 0.1),
        }
    }
}
