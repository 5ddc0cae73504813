//! Shell-Core Protocol
//!
//! The cube demo uses a shell-core split:
//! - **Shell**: the host render/UI framework (or the headless replay host)
//!   - Owns the frame loop and the input devices
//!   - Delivers gesture samples and frame ticks in order, on one thread
//!   - Executes scene commands (anchors, planes, transforms, camera)
//!
//! - **Core**: platform-agnostic Rust code
//!   - Receives Events from the shell
//!   - Owns the rotation state machine
//!   - Emits Commands for the shell to execute
//!   - No threads, purely event-driven
//!
//! ## Architecture
//!
//! Events and Commands use an enum-of-enums pattern so handlers only see
//! the category they care about. Everything is serde-tagged so a shell can
//! record a session as JSON and replay it later.

use serde::{Deserialize, Serialize};

// ============================================================================
// IDs - All IDs are opaque strings
// ============================================================================

/// Unique identifier for volumes (renderable planes) in the scene
pub type VolumeId = String;

/// Unique identifier for anchors (transform-only scene nodes)
pub type AnchorId = String;

/// Unique identifier for input devices
pub type DeviceId = String;

// ============================================================================
// EVENTS (Shell -> Core)
// ============================================================================

/// Top-level events sent from Shell to Core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", content = "event")]
pub enum Event {
    /// Application lifecycle events
    Lifecycle(LifecycleEvent),
    /// Input device events
    Input(InputEvent),
}

// ----------------------------------------------------------------------------
// Lifecycle Events
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LifecycleEvent {
    /// Shell initialized, provides viewport
    Init(InitEvent),
    /// Render frame requested (called every frame)
    Frame(FrameEvent),
    /// Viewport/window resized
    Resize(ResizeEvent),
    /// Application going to background
    Pause,
    /// Application resuming from background
    Resume,
    /// Application shutting down
    Shutdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitEvent {
    pub platform: Platform,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub dpr: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    IOS,
    VisionOS,
    Desktop,
    Headless,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameEvent {
    pub time: f64,
    pub dt: f32,
    pub frame: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizeEvent {
    pub width: u32,
    pub height: u32,
    pub dpr: f32,
}

// ----------------------------------------------------------------------------
// Input Events
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    /// Single-finger (or mouse) drag gesture update
    Gesture(GestureEvent),
}

/// Phase of a drag gesture recognizer.
///
/// Mirrors the states a platform pan recognizer reports. `Idle` is the
/// "possible" state before any touch has been recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GesturePhase {
    #[default]
    Idle,
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

/// One drag gesture update.
///
/// `velocity` is in points per unit time, `translation` is the cumulative
/// displacement since the gesture began. Both are `[x, y]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureEvent {
    pub device_id: DeviceId,
    pub phase: GesturePhase,
    pub velocity: [f32; 2],
    pub translation: [f32; 2],
}

// ============================================================================
// COMMANDS (Core -> Shell)
// ============================================================================

/// Top-level commands sent from Core to Shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", content = "command")]
pub enum Command {
    /// Scene graph commands
    Scene(SceneCommand),
    /// Environment commands (camera, background)
    Environment(EnvironmentCommand),
    /// Debug/logging commands
    Debug(DebugCommand),
}

// ----------------------------------------------------------------------------
// Scene Commands
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum SceneCommand {
    CreateAnchor(CreateAnchorData),
    CreateVolume(CreateVolumeData),
    DestroyVolume { volume_id: VolumeId },
    SetTransform(SetTransformData),
}

/// A world anchor: a transform-only node that parents other nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAnchorData {
    pub anchor_id: AnchorId,
    pub parent: Option<AnchorId>,
    pub transform: Transform,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateVolumeData {
    pub volume_id: VolumeId,
    pub parent: Option<AnchorId>,
    pub primitive: Primitive,
    pub transform: Transform,
    pub material: Option<MaterialOverride>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Plane { width: f32, depth: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: [f32; 3],
    /// Quaternion, `[x, y, z, w]`
    pub rotation: [f32; 4],
    pub scale: [f32; 3],
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            rotation: [0.0, 0.0, 0.0, 1.0],
            scale: [1.0, 1.0, 1.0],
        }
    }
}

/// Replace the transform of an anchor or a volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetTransformData {
    pub target_id: String,
    pub transform: Transform,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialOverride {
    pub color: Option<[f32; 4]>,
    pub metallic: Option<f32>,
    pub roughness: Option<f32>,
}

// ----------------------------------------------------------------------------
// Environment Commands
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum EnvironmentCommand {
    SetCamera(CameraData),
    SetBackground(BackgroundData),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraData {
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BackgroundData {
    Color([f32; 4]),
    Transparent,
}

// ----------------------------------------------------------------------------
// Debug Commands
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum DebugCommand {
    Log { level: LogLevel, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

// ============================================================================
// CORE TRAIT
// ============================================================================

/// Trait that the application implements
pub trait Core {
    /// Handle an event from the shell
    /// Returns commands for the shell to execute
    fn handle(&mut self, event: Event) -> Vec<Command>;
}

// ============================================================================
// HELPER TRAITS FOR MODULAR HANDLERS
// ============================================================================

/// Handler for lifecycle events
pub trait LifecycleHandler {
    fn handle_lifecycle(&mut self, event: LifecycleEvent) -> Vec<Command>;
}

/// Handler for input events
pub trait InputHandler {
    fn handle_input(&mut self, event: InputEvent) -> Vec<Command>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_changed_json() {
        let json = r#"{
            "category": "Input",
            "event": {
                "type": "Gesture",
                "device_id": "touch-0",
                "phase": "Changed",
                "velocity": [420.0, -12.5],
                "translation": [80.0, 3.0]
            }
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        match event {
            Event::Input(InputEvent::Gesture(data)) => {
                assert_eq!(data.phase, GesturePhase::Changed);
                assert_eq!(data.velocity, [420.0, -12.5]);
                assert_eq!(data.translation, [80.0, 3.0]);
            }
            _ => panic!("Expected Input::Gesture event"),
        }
    }

    #[test]
    fn test_lifecycle_frame_json() {
        let json = r#"{
            "category": "Lifecycle",
            "event": {"type": "Frame", "time": 0.5, "dt": 0.016, "frame": 30}
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        match event {
            Event::Lifecycle(LifecycleEvent::Frame(frame)) => {
                assert_eq!(frame.frame, 30);
            }
            _ => panic!("Expected Lifecycle::Frame event"),
        }
    }

    #[test]
    fn test_lifecycle_unit_variant_json() {
        let json = r#"{"category":"Lifecycle","event":{"type":"Pause"}}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event, Event::Lifecycle(LifecycleEvent::Pause));
    }

    #[test]
    fn test_set_transform_command_json() {
        let command = Command::Scene(SceneCommand::SetTransform(SetTransformData {
            target_id: "plane-anchor".to_string(),
            transform: Transform::default(),
        }));
        let value = serde_json::to_value(&command).unwrap();
        assert_eq!(value["category"], "Scene");
        assert_eq!(value["command"]["action"], "SetTransform");
        assert_eq!(value["command"]["target_id"], "plane-anchor");
    }

    #[test]
    fn test_default_phase_is_idle() {
        assert_eq!(GesturePhase::default(), GesturePhase::Idle);
    }
}
