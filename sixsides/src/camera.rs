//! PerspectiveCamera - fixed viewpoint for the cube scene
//!
//! Equivalent to RealityKit's `PerspectiveCamera` with
//! `look(at:from:relativeTo:)`. The camera never moves once placed.

use glam::{Mat4, Vec3};
use sixsides_protocol::{CameraData, Command, EnvironmentCommand};

/// Default camera settings
const DEFAULT_FOV_DEGREES: f32 = 60.0;
const DEFAULT_NEAR: f32 = 0.01;
const DEFAULT_FAR: f32 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            target: Vec3::NEG_Z,
            up: Vec3::Y,
            fov_degrees: DEFAULT_FOV_DEGREES,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }
}

impl PerspectiveCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the camera at `from`, looking at `target`, world Y up.
    pub fn look_at(mut self, target: Vec3, from: Vec3) -> Self {
        self.position = from;
        self.target = target;
        self.up = Vec3::Y;
        self
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub(crate) fn to_command(&self) -> Command {
        Command::Environment(EnvironmentCommand::SetCamera(CameraData {
            position: self.position.to_array(),
            target: self.target.to_array(),
            up: self.up.to_array(),
            fov_degrees: self.fov_degrees,
            near: self.near,
            far: self.far,
        }))
    }
}
