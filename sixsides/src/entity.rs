//! Entity - Nodes of the cube scene
//!
//! Matches the two RealityKit node types the demo needs:
//! - AnchorEntity: transform-only node pinned in world space, can have children
//! - ModelEntity: a mesh with a material, placed relative to its anchor
//!
//! # Example
//!
//! ```rust
//! use glam::{Quat, Vec3};
//! use sixsides::{AnchorEntity, MeshResource, ModelEntity, SimpleMaterial};
//!
//! let mut anchor = AnchorEntity::world("plane-anchor", Vec3::ZERO);
//! let face = ModelEntity::new(
//!     "front-face",
//!     MeshResource::generate_plane(5.0, 5.0),
//!     SimpleMaterial::new([1.0, 1.0, 0.0], 0.0, false),
//! )
//! .position(0.0, 0.0, 2.5)
//! .orientation(Quat::from_axis_angle(Vec3::X, std::f32::consts::FRAC_PI_2));
//! anchor.add_child(face);
//! ```

use crate::{MeshResource, SimpleMaterial};
use glam::{Quat, Vec3};
use sixsides_protocol::{Command, CreateAnchorData, CreateVolumeData, SceneCommand, Transform};

/// World anchor - a transform-only node in the scene hierarchy.
///
/// Equivalent to RealityKit's `AnchorEntity(world:)`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorEntity {
    id: String,
    position: Vec3,
    children: Vec<EntityKind>,
}

/// Different kinds of entities.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    Anchor(AnchorEntity),
    Model(ModelEntity),
}

impl AnchorEntity {
    /// Create an anchor at a fixed world position.
    pub fn world(id: impl Into<String>, position: Vec3) -> Self {
        Self {
            id: id.into(),
            position,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Add a child entity.
    ///
    /// Equivalent to `anchor.addChild(child)` in RealityKit.
    pub fn add_child(&mut self, child: impl Into<EntityKind>) {
        self.children.push(child.into());
    }

    pub fn children(&self) -> &[EntityKind] {
        &self.children
    }

    /// Emit creation commands for this anchor and everything under it,
    /// parents before children. Anchors are never rotated at creation; the
    /// core turns them later with `SetTransform`.
    pub(crate) fn collect_commands(&self, parent: Option<&str>, commands: &mut Vec<Command>) {
        commands.push(Command::Scene(SceneCommand::CreateAnchor(CreateAnchorData {
            anchor_id: self.id.clone(),
            parent: parent.map(str::to_string),
            transform: Transform {
                position: self.position.to_array(),
                ..Transform::default()
            },
        })));

        for child in &self.children {
            match child {
                EntityKind::Anchor(anchor) => anchor.collect_commands(Some(&self.id), commands),
                EntityKind::Model(model) => commands.push(model.to_command(&self.id)),
            }
        }
    }
}

/// Model entity - an entity with a mesh and a material.
///
/// Equivalent to RealityKit's `ModelEntity(mesh:materials:)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelEntity {
    id: String,
    mesh: MeshResource,
    material: SimpleMaterial,
    position: Vec3,
    orientation: Quat,
    scale: Vec3,
}

impl ModelEntity {
    pub fn new(id: impl Into<String>, mesh: MeshResource, material: SimpleMaterial) -> Self {
        Self {
            id: id.into(),
            mesh,
            material,
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Set position in the parent's coordinate space (builder style).
    pub fn position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    /// Set the orientation (builder style).
    pub fn orientation(mut self, orientation: Quat) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set uniform scale (builder style).
    pub fn scale(mut self, s: f32) -> Self {
        self.scale = Vec3::splat(s);
        self
    }

    pub fn transform(&self) -> Transform {
        Transform {
            position: self.position.to_array(),
            rotation: self.orientation.to_array(),
            scale: self.scale.to_array(),
        }
    }

    /// Convert to a CreateVolume command parented to `anchor_id`.
    pub(crate) fn to_command(&self, anchor_id: &str) -> Command {
        Command::Scene(SceneCommand::CreateVolume(CreateVolumeData {
            volume_id: self.id.clone(),
            parent: Some(anchor_id.to_string()),
            primitive: self.mesh.to_primitive(),
            transform: self.transform(),
            material: Some(self.material.to_override()),
        }))
    }
}

impl From<AnchorEntity> for EntityKind {
    fn from(e: AnchorEntity) -> Self {
        EntityKind::Anchor(e)
    }
}

impl From<ModelEntity> for EntityKind {
    fn from(e: ModelEntity) -> Self {
        EntityKind::Model(e)
    }
}
