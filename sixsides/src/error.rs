//! Error types for the rotation core.

use thiserror::Error;

/// A gesture sample carried a value the controller refuses to integrate.
///
/// The sample is dropped and the controller keeps its previous state.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid gesture input: {field} = {value}")]
pub struct InvalidInputError {
    pub field: &'static str,
    pub value: f32,
}

/// Error types for the rotation core
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
