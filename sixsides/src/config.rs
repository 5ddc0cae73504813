//! Rotation tuning, loadable from TOML.
//!
//! ```toml
//! variant = "two-axis"
//! sensitivity = 0.0001
//! blend = 0.1
//! ```
//!
//! Every key is optional; missing keys take the values the demo shipped with.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Radians of rotation per unit of drag velocity.
pub const DEFAULT_SENSITIVITY: f32 = 0.0001;
/// Fraction of the remaining distance covered per frame while snapping.
pub const DEFAULT_BLEND: f32 = 0.1;
/// Per-frame multiplier for the single-axis return-to-zero branch.
pub const DEFAULT_DECAY: f32 = 0.9;
/// Largest rotation a single gesture sample may contribute, in radians.
pub const DEFAULT_MAX_STEP: f32 = 0.25;
/// Radians per frame for the auto-spin variant.
pub const DEFAULT_SPIN_RATE: f32 = 0.004;
/// Distance to target below which a snap counts as settled.
pub const DEFAULT_SETTLE_EPSILON: f32 = 1e-4;

/// Which rotation behaviour the controller runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Horizontal drags turn the cube about Y; release snaps via the 45° threshold.
    #[default]
    SingleAxis,
    /// Dominant drag direction picks the axis; release snaps each axis to the
    /// nearest quarter turn.
    TwoAxis,
    /// No input response; the cube turns about X at a fixed rate.
    AutoSpin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    pub variant: Variant,
    pub sensitivity: f32,
    pub blend: f32,
    pub decay: f32,
    pub max_step: f32,
    pub spin_rate: f32,
    pub settle_epsilon: f32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            sensitivity: DEFAULT_SENSITIVITY,
            blend: DEFAULT_BLEND,
            decay: DEFAULT_DECAY,
            max_step: DEFAULT_MAX_STEP,
            spin_rate: DEFAULT_SPIN_RATE,
            settle_epsilon: DEFAULT_SETTLE_EPSILON,
        }
    }
}

impl RotationConfig {
    /// Default tuning with a different variant.
    pub fn with_variant(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("Loaded rotation config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("sensitivity", self.sensitivity),
            ("blend", self.blend),
            ("decay", self.decay),
            ("max_step", self.max_step),
            ("spin_rate", self.spin_rate),
            ("settle_epsilon", self.settle_epsilon),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(Error::Config(format!("{} must be finite, got {}", name, value)));
            }
        }

        for (name, value) in [("blend", self.blend), ("decay", self.decay)] {
            if value <= 0.0 || value > 1.0 {
                return Err(Error::Config(format!("{} must be in (0, 1], got {}", name, value)));
            }
        }

        let positive = [
            ("max_step", self.max_step),
            ("settle_epsilon", self.settle_epsilon),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(Error::Config(format!("{} must be positive, got {}", name, value)));
            }
        }

        Ok(())
    }
}
