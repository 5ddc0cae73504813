//! Single-axis rotation matrices.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// World axis a rotation is applied about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn unit_vector(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
        }
    }
}

/// Right-handed homogeneous rotation of `angle` radians about `axis`.
///
/// Rows are written out as they appear in the textbook form and transposed
/// into glam's column-major storage.
pub fn rotation_matrix(angle: f32, axis: Axis) -> Mat4 {
    let (s, c) = angle.sin_cos();
    let rows = match axis {
        Axis::X => [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
        Axis::Y => [
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };
    Mat4::from_cols_array_2d(&rows).transpose()
}

/// Quaternion equivalent of [`rotation_matrix`], for protocol transforms.
pub fn rotation_quat(angle: f32, axis: Axis) -> Quat {
    Quat::from_axis_angle(axis.unit_vector(), angle)
}
