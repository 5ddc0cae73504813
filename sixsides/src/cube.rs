//! The six-sided cube scene.
//!
//! Six 5×5 planes around the origin, each a different color, hung from a
//! plane anchor. The plane anchor is the node the rotation transform is
//! applied to; it sits under a fixed axes anchor at the world origin.

use crate::{
    AnchorEntity, MeshResource, ModelEntity, PerspectiveCamera, RealityViewContent, SimpleMaterial,
};
use glam::{Quat, Vec3};
use sixsides_protocol::BackgroundData;
use std::f32::consts::{FRAC_PI_2, PI};

/// Anchor that receives the rotation every frame.
pub const PLANE_ANCHOR_ID: &str = "plane-anchor";
/// Fixed parent of the plane anchor.
pub const AXES_ANCHOR_ID: &str = "axes-anchor";

const FACE_SIZE: f32 = 5.0;
const HALF: f32 = FACE_SIZE / 2.0;

const CAMERA_FROM: Vec3 = Vec3::new(-5.0, 10.0, 10.0);
const BACKGROUND: [f32; 4] = [0.1, 0.1, 0.2, 1.0];

struct Face {
    id: &'static str,
    color: [f32; 3],
    position: Vec3,
    angle: f32,
    axis: Vec3,
}

const FACES: [Face; 6] = [
    Face {
        id: "front-face",
        color: [1.0, 1.0, 0.0],
        position: Vec3::new(0.0, 0.0, HALF),
        angle: FRAC_PI_2,
        axis: Vec3::X,
    },
    Face {
        id: "bottom-face",
        color: [1.0, 0.0, 0.0],
        position: Vec3::new(0.0, -HALF, 0.0),
        angle: PI,
        axis: Vec3::X,
    },
    Face {
        id: "top-face",
        color: [0.0, 1.0, 0.0],
        position: Vec3::new(0.0, HALF, 0.0),
        angle: 0.0,
        axis: Vec3::Y,
    },
    Face {
        id: "left-face",
        color: [0.0, 0.0, 1.0],
        position: Vec3::new(-HALF, 0.0, 0.0),
        angle: FRAC_PI_2,
        axis: Vec3::Z,
    },
    Face {
        id: "right-face",
        color: [0.5, 0.0, 0.5],
        position: Vec3::new(HALF, 0.0, 0.0),
        angle: -FRAC_PI_2,
        axis: Vec3::Z,
    },
    Face {
        id: "back-face",
        color: [1.0, 1.0, 1.0],
        position: Vec3::new(0.0, 0.0, -HALF),
        angle: -FRAC_PI_2,
        axis: Vec3::X,
    },
];

fn face_entity(face: &Face) -> ModelEntity {
    ModelEntity::new(
        face.id,
        MeshResource::generate_plane(FACE_SIZE, FACE_SIZE),
        SimpleMaterial::new(face.color, 0.0, false),
    )
    .position(face.position.x, face.position.y, face.position.z)
    .orientation(Quat::from_axis_angle(face.axis, face.angle))
}

/// The axes anchor with the plane anchor and its six faces beneath it.
pub fn six_sided_cube() -> AnchorEntity {
    let mut planes = AnchorEntity::world(PLANE_ANCHOR_ID, Vec3::ZERO);
    for face in &FACES {
        planes.add_child(face_entity(face));
    }

    let mut axes = AnchorEntity::world(AXES_ANCHOR_ID, Vec3::ZERO);
    axes.add_child(planes);
    axes
}

/// Full scene: background, camera and the cube.
pub fn cube_scene() -> RealityViewContent {
    let mut content = RealityViewContent::new();
    content.set_background(BackgroundData::Color(BACKGROUND));
    content.set_camera(PerspectiveCamera::new().look_at(Vec3::ZERO, CAMERA_FROM));
    content.add_anchor(six_sided_cube());
    content
}
