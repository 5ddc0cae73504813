//! sixsides - drag-to-rotate cube core
//!
//! A six-faced cube hangs from a plane anchor. Drag gestures rotate the
//! anchor; when the drag ends the cube eases back to a quarter-turn
//! orientation.
//!
//! The crate is the *core* half of a shell-core split: the shell (renderer,
//! gesture recognizer, frame clock) sends [`Event`]s, the core answers with
//! [`Command`]s. [`CubeApp`] is the core; [`RotationController`] is the state
//! machine inside it and can be driven directly:
//!
//! ```rust
//! use glam::Vec2;
//! use sixsides::{GesturePhase, GestureSample, RotationController};
//!
//! let mut controller = RotationController::default();
//! let drag = GestureSample::new(
//!     GesturePhase::Changed,
//!     Vec2::new(2000.0, 0.0),
//!     Vec2::new(30.0, 0.0),
//! );
//! controller.on_gesture(&drag).unwrap();
//! controller.on_gesture(&GestureSample::at_rest(GesturePhase::Ended)).unwrap();
//! let transform = controller.on_frame_tick();
//! assert!(!transform.is_nan());
//! ```

mod app;
mod camera;
pub mod config;
mod controller;
mod cube;
mod entity;
mod error;
mod gesture;
mod material;
pub mod matrix;
mod mesh;
mod reality_view;
pub mod snap;

pub use app::{CubeApp, to_protocol_transform};
pub use camera::PerspectiveCamera;
pub use config::{RotationConfig, Variant};
pub use controller::{RotationController, RotationState};
pub use cube::{AXES_ANCHOR_ID, PLANE_ANCHOR_ID, cube_scene, six_sided_cube};
pub use entity::{AnchorEntity, EntityKind, ModelEntity};
pub use error::{Error, InvalidInputError, Result};
pub use gesture::{GesturePhase, GestureSample};
pub use material::SimpleMaterial;
pub use matrix::{Axis, rotation_matrix};
pub use mesh::MeshResource;
pub use reality_view::RealityViewContent;

// Re-export protocol types so apps only depend on this crate
pub use sixsides_protocol::{
    Command, Core, DebugCommand, EnvironmentCommand, Event, GestureEvent, InputEvent, InputHandler,
    LifecycleEvent, LifecycleHandler, LogLevel, SceneCommand, Transform,
};

// Re-export glam for convenience
pub use glam;
