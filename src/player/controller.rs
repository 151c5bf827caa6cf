use crate::{
    config::{GameplayConfig, RenderConfig, SceneConfig},
    player::{
        input::PlayerInput,
        physics::{Collider, CylinderObstacle, Footprint},
    },
    render::camera::{Camera, Projection},
};
use glam::Vec3;
use log::warn;

/// Everything the per-frame update mutates.
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub camera: Camera,
    pub collider: Collider,
    pub player_speed: f32,
    pub sprint_multiplier: f32,
    pub mouse_sensitivity: f32,
    pub eye_height: f32,
}

impl SimulationState {
    pub fn new(gameplay: &GameplayConfig, render: &RenderConfig, scene: &SceneConfig) -> Self {
        let projection = Projection::Perspective {
            fov: render.fov,
            aspect_ratio: render.aspect_ratio(),
            near: render.near,
            far: render.far,
        };
        let start = gameplay.start_position();
        let camera = Camera::new(start, gameplay.start_yaw, gameplay.start_pitch, projection)
            .with_pitch_limit(gameplay.pitch_limit);

        let collider = Collider {
            footprint: Footprint {
                limit: gameplay.footprint_limit,
            },
            obstacle: CylinderObstacle::around(scene.eyeball_position, scene.collision_radius()),
        };
        if !collider.allows(start) {
            warn!(
                "Start position {:?} is outside the walkable area; the camera cannot move until it leaves it",
                start
            );
        }

        Self {
            camera,
            collider,
            player_speed: gameplay.player_speed,
            sprint_multiplier: gameplay.sprint_multiplier,
            mouse_sensitivity: gameplay.mouse_sensitivity,
            eye_height: gameplay.eye_height,
        }
    }

    /// Applies one frame of input: mouse look first, then movement.
    pub fn update(&mut self, input: &mut PlayerInput, delta_time: f32) {
        let mouse = input.take_mouse_delta() * self.mouse_sensitivity;
        if mouse != glam::Vec2::ZERO {
            self.camera.rotate(mouse.x, mouse.y);
        }

        let direction = self.movement_direction(input);
        if direction == Vec3::ZERO {
            return;
        }

        let speed = if input.sprint {
            self.player_speed * self.sprint_multiplier
        } else {
            self.player_speed
        };
        let current = self.camera.position;
        let mut proposed = current + direction * speed * delta_time;
        proposed.y = self.eye_height;

        // A start outside the walkable area must not let the camera wander further out.
        if self.collider.allows(current) {
            self.camera.position = self.collider.resolve_move(current, proposed);
        } else if self.collider.allows(proposed) {
            self.camera.position = proposed;
        }
    }

    fn movement_direction(&self, input: &PlayerInput) -> Vec3 {
        let front = self.camera.flat_front();
        let right = self.camera.right();

        let mut direction = Vec3::ZERO;
        if input.forward {
            direction += front;
        }
        if input.backward {
            direction -= front;
        }
        if input.right {
            direction += right;
        }
        if input.left {
            direction -= right;
        }
        direction
    }
}
