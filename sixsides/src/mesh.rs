//! MeshResource - Procedural geometry for scene volumes
//!
//! Mirrors RealityKit's `MeshResource.generatePlane(width:depth:)`.

use sixsides_protocol::Primitive;

/// Mesh geometry resource for procedural primitives.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshResource {
    Plane { width: f32, depth: f32 },
}

impl MeshResource {
    /// Generate a plane mesh lying in the XZ plane, facing +Y.
    pub fn generate_plane(width: f32, depth: f32) -> Self {
        MeshResource::Plane { width, depth }
    }

    pub(crate) fn to_primitive(&self) -> Primitive {
        match *self {
            MeshResource::Plane { width, depth } => Primitive::Plane { width, depth },
        }
    }
}
