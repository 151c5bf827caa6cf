use super::alarm::{alarm_color, is_triggered};
use super::room::{Face, ROOM_VERTEX_COUNT, VERTICES_PER_FACE};
use crate::config::SceneConfig;
use glam::{Mat4, Vec3};

/// Which vertex array a draw call reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    /// A range of the shared cuboid vertex list.
    Cuboid { first: usize, count: usize },
    /// The loaded model, drawn whole.
    Model,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub geometry: Geometry,
    pub mvp: Mat4,
    pub color: Vec3,
}

/// Per-frame inputs to scene composition.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    pub camera_position: Vec3,
    pub view: Mat4,
    pub projection: Mat4,
    /// Seconds since start-up.
    pub time: f64,
}

/// Builds the ordered draw list for one frame: room faces, bulbs, pedestal, model.
pub fn compose_frame(scene: &SceneConfig, frame: &FrameContext) -> Vec<DrawCall> {
    let view_projection = frame.projection * frame.view;
    let siren = is_triggered(
        frame.camera_position,
        scene.table_position,
        scene.alarm_trigger_radius,
    );
    let flash = alarm_color(frame.time);

    let mut calls = Vec::with_capacity(Face::ALL.len() + scene.bulb_offsets.len() + 2);

    for face in Face::ALL {
        calls.push(DrawCall {
            geometry: Geometry::Cuboid {
                first: face.first_vertex(),
                count: VERTICES_PER_FACE,
            },
            mvp: view_projection,
            color: if siren { flash } else { scene.face_colors[face.index()] },
        });
    }

    let bulb_color = if siren { flash } else { scene.bulb_idle_color };
    for &offset in &scene.bulb_offsets {
        let model = Mat4::from_translation(Vec3::new(offset, scene.bulb_height, 0.0))
            * Mat4::from_scale(Vec3::splat(scene.bulb_scale));
        calls.push(whole_cuboid(view_projection * model, bulb_color));
    }

    let pedestal = Mat4::from_translation(scene.table_position)
        * Mat4::from_scale(Vec3::splat(scene.pedestal_scale));
    calls.push(whole_cuboid(view_projection * pedestal, scene.pedestal_color));

    let eyeball = Mat4::from_translation(scene.eyeball_position)
        * Mat4::from_scale(Vec3::splat(scene.eyeball_scale));
    calls.push(DrawCall {
        geometry: Geometry::Model,
        mvp: view_projection * eyeball,
        color: scene.eyeball_color,
    });

    calls
}

fn whole_cuboid(mvp: Mat4, color: Vec3) -> DrawCall {
    DrawCall {
        geometry: Geometry::Cuboid {
            first: 0,
            count: ROOM_VERTEX_COUNT,
        },
        mvp,
        color,
    }
}
