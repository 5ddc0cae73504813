//! Scene table
//!
//! The headless stand-in for the renderer's scene graph: every anchor and
//! volume the core creates, keyed by id, with its parent and local
//! transform. Commands are applied in the order the core sent them.

use glam::{Mat4, Quat, Vec3};
use sixsides_protocol::{
    BackgroundData, CameraData, Command, CreateAnchorData, CreateVolumeData, EnvironmentCommand,
    Primitive, SceneCommand, SetTransformData, Transform,
};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Anchor,
    Volume {
        primitive: Primitive,
        color: Option<[f32; 4]>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub kind: NodeKind,
    pub parent: Option<String>,
    pub transform: Transform,
}

#[derive(Debug, Default)]
pub struct SceneTable {
    nodes: HashMap<String, SceneNode>,
    camera: Option<CameraData>,
    background: Option<BackgroundData>,
    /// Commands that referenced a node the table has never seen
    unknown_targets: usize,
}

fn to_matrix(transform: &Transform) -> Mat4 {
    Mat4::from_scale_rotation_translation(
        Vec3::from_array(transform.scale),
        Quat::from_array(transform.rotation),
        Vec3::from_array(transform.position),
    )
}

impl SceneTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one scene or environment command. Debug commands are not
    /// scene state and are ignored here.
    pub fn apply(&mut self, command: &Command) {
        match command {
            Command::Scene(SceneCommand::CreateAnchor(data)) => self.create_anchor(data),
            Command::Scene(SceneCommand::CreateVolume(data)) => self.create_volume(data),
            Command::Scene(SceneCommand::DestroyVolume { volume_id }) => {
                if self.nodes.remove(volume_id).is_none() {
                    log::warn!("DestroyVolume for unknown volume {}", volume_id);
                    self.unknown_targets += 1;
                }
            }
            Command::Scene(SceneCommand::SetTransform(data)) => self.set_transform(data),
            Command::Environment(EnvironmentCommand::SetCamera(camera)) => {
                log::info!("Camera at {:?} looking at {:?}", camera.position, camera.target);
                self.camera = Some(camera.clone());
            }
            Command::Environment(EnvironmentCommand::SetBackground(background)) => {
                self.background = Some(background.clone());
            }
            Command::Debug(_) => {}
        }
    }

    fn create_anchor(&mut self, data: &CreateAnchorData) {
        self.check_parent(&data.anchor_id, data.parent.as_deref());
        self.nodes.insert(
            data.anchor_id.clone(),
            SceneNode {
                kind: NodeKind::Anchor,
                parent: data.parent.clone(),
                transform: data.transform.clone(),
            },
        );
        log::info!("Anchor created: {} (total nodes: {})", data.anchor_id, self.nodes.len());
    }

    fn create_volume(&mut self, data: &CreateVolumeData) {
        self.check_parent(&data.volume_id, data.parent.as_deref());
        let color = data.material.as_ref().and_then(|m| m.color);
        self.nodes.insert(
            data.volume_id.clone(),
            SceneNode {
                kind: NodeKind::Volume {
                    primitive: data.primitive.clone(),
                    color,
                },
                parent: data.parent.clone(),
                transform: data.transform.clone(),
            },
        );
        log::info!(
            "Volume created: {} with color {:?} (total nodes: {})",
            data.volume_id,
            color,
            self.nodes.len()
        );
    }

    fn set_transform(&mut self, data: &SetTransformData) {
        match self.nodes.get_mut(&data.target_id) {
            Some(node) => node.transform = data.transform.clone(),
            None => {
                log::warn!("SetTransform for unknown node {}", data.target_id);
                self.unknown_targets += 1;
            }
        }
    }

    fn check_parent(&mut self, id: &str, parent: Option<&str>) {
        if let Some(parent) = parent {
            if !self.nodes.contains_key(parent) {
                log::warn!("{} created under unknown parent {}", id, parent);
                self.unknown_targets += 1;
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn volume_count(&self) -> usize {
        self.nodes
            .values()
            .filter(|node| matches!(node.kind, NodeKind::Volume { .. }))
            .count()
    }

    pub fn camera(&self) -> Option<&CameraData> {
        self.camera.as_ref()
    }

    pub fn background(&self) -> Option<&BackgroundData> {
        self.background.as_ref()
    }

    pub fn unknown_targets(&self) -> usize {
        self.unknown_targets
    }

    /// Local transforms composed from the root down to `id`.
    ///
    /// Stops at a missing parent instead of failing, so a node under an
    /// unknown parent is treated as a root.
    pub fn world_matrix(&self, id: &str) -> Option<Mat4> {
        let mut node = self.nodes.get(id)?;
        let mut matrix = to_matrix(&node.transform);
        // Parent links come from the core; cap the walk in case of a cycle
        for _ in 0..self.nodes.len() {
            let Some(parent) = node.parent.as_deref().and_then(|p| self.nodes.get(p)) else {
                break;
            };
            matrix = to_matrix(&parent.transform) * matrix;
            node = parent;
        }
        Some(matrix)
    }
}
