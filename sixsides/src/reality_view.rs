//! RealityView - Container for the 3D content handed to the shell
//!
//! Matches the `make` half of SwiftUI's RealityView: the core fills a
//! [`RealityViewContent`] once, and the shell receives it as a flat list of
//! commands.

use crate::{AnchorEntity, PerspectiveCamera};
use sixsides_protocol::{BackgroundData, Command, EnvironmentCommand};

/// Content container for RealityView.
#[derive(Debug, Default)]
pub struct RealityViewContent {
    pub(crate) anchors: Vec<AnchorEntity>,
    pub(crate) camera: Option<PerspectiveCamera>,
    pub(crate) background: Option<BackgroundData>,
}

impl RealityViewContent {
    /// Create new empty content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level anchor to the scene.
    ///
    /// Equivalent to `arView.scene.addAnchor(anchor)` in RealityKit.
    pub fn add_anchor(&mut self, anchor: AnchorEntity) {
        self.anchors.push(anchor);
    }

    pub fn set_camera(&mut self, camera: PerspectiveCamera) {
        self.camera = Some(camera);
    }

    pub fn set_background(&mut self, background: BackgroundData) {
        self.background = Some(background);
    }

    /// Convert everything to commands: environment first, then anchors in
    /// insertion order.
    pub fn to_commands(&self) -> Vec<Command> {
        let mut commands = Vec::new();
        if let Some(background) = &self.background {
            commands.push(Command::Environment(EnvironmentCommand::SetBackground(
                background.clone(),
            )));
        }
        if let Some(camera) = &self.camera {
            commands.push(camera.to_command());
        }
        for anchor in &self.anchors {
            anchor.collect_commands(None, &mut commands);
        }
        commands
    }
}
