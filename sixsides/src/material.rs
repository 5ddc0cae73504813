//! SimpleMaterial - flat PBR surface for the cube faces
//!
//! RealityKit builds these in one call, `SimpleMaterial(color: .yellow,
//! roughness: 0, isMetallic: false)`, and so does [`SimpleMaterial::new`].
//! Colors are opaque RGB; the shell receives them as RGBA overrides.
//!
//! ```rust
//! use sixsides::SimpleMaterial;
//!
//! let yellow = SimpleMaterial::new([1.0, 1.0, 0.0], 0.0, false);
//! assert!(!yellow.is_metallic);
//! ```

use sixsides_protocol::MaterialOverride;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleMaterial {
    pub color: [f32; 3],
    /// 0 is mirror-smooth, 1 fully matte
    pub roughness: f32,
    pub is_metallic: bool,
}

impl Default for SimpleMaterial {
    /// Matte-ish white dielectric.
    fn default() -> Self {
        Self::new([1.0, 1.0, 1.0], 0.5, false)
    }
}

impl SimpleMaterial {
    pub fn new(color: [f32; 3], roughness: f32, is_metallic: bool) -> Self {
        Self {
            color,
            roughness,
            is_metallic,
        }
    }

    pub(crate) fn to_override(&self) -> MaterialOverride {
        let [r, g, b] = self.color;
        MaterialOverride {
            color: Some([r, g, b, 1.0]),
            metallic: Some(if self.is_metallic { 1.0 } else { 0.0 }),
            roughness: Some(self.roughness),
        }
    }
}
