use crate::{
    config::SceneConfig,
    render::{buffers::GeometryBuffers, model::Model, shaders::ShaderProgram},
    scene::{room::cuboid_vertices, DrawCall, Geometry},
};
use gl::types::*;
use glam::Vec3;

pub const MVP_UNIFORM: &str = "MVP";
pub const COLOR_UNIFORM: &str = "baseColor";

/// Owns every GPU resource of the scene and executes composed draw lists.
pub struct RenderPipeline {
    shader: ShaderProgram,
    cuboid: GeometryBuffers,
    model: Model,
    clear_color: Vec3,
}

impl RenderPipeline {
    pub fn new(shader: ShaderProgram, model: Model, scene: &SceneConfig, clear_color: Vec3) -> Self {
        unsafe {
            gl::Enable(gl::DEPTH_TEST);
        }
        Self {
            shader,
            cuboid: GeometryBuffers::from_positions(&cuboid_vertices(scene.room_half_extents)),
            model,
            clear_color,
        }
    }

    pub fn resize(&self, width: u32, height: u32) {
        unsafe {
            gl::Viewport(0, 0, width as GLsizei, height as GLsizei);
        }
    }

    pub fn render(&mut self, calls: &[DrawCall]) {
        unsafe {
            gl::ClearColor(self.clear_color.x, self.clear_color.y, self.clear_color.z, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }
        self.shader.set_used();

        for call in calls {
            self.shader.set_mat4(MVP_UNIFORM, &call.mvp);
            self.shader.set_vec3(COLOR_UNIFORM, call.color);
            match call.geometry {
                Geometry::Cuboid { first, count } => self.cuboid.draw_range(first, count),
                Geometry::Model => self.model.draw(),
            }
        }
    }

    /// Frees buffers and the program. The GL context must still be current.
    pub fn release(self) {
        let Self { shader, cuboid, model, .. } = self;
        model.delete_buffers();
        cuboid.delete();
        drop(shader);
    }
}
