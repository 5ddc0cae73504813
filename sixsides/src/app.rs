//! CubeApp - the core the shell talks to
//!
//! Owns a [`RotationController`] and forwards protocol events to it:
//! gesture input goes to [`RotationController::on_gesture`], every frame
//! calls [`RotationController::on_frame_tick`] and the resulting matrix is
//! sent back as a `SetTransform` for the plane anchor.

use crate::config::RotationConfig;
use crate::controller::RotationController;
use crate::cube::{PLANE_ANCHOR_ID, cube_scene};
use crate::error::Result;
use crate::gesture::GestureSample;
use glam::Mat4;
use sixsides_protocol::*;

/// Decompose a rigid transform into the protocol's position/rotation/scale.
pub fn to_protocol_transform(matrix: Mat4) -> Transform {
    let (scale, rotation, translation) = matrix.to_scale_rotation_translation();
    Transform {
        position: translation.to_array(),
        rotation: rotation.to_array(),
        scale: scale.to_array(),
    }
}

/// Application state
pub struct CubeApp {
    controller: RotationController,
    /// Has the scene been sent to the shell?
    initialized: bool,
    /// Gesture samples dropped for non-finite values
    rejected_samples: u64,
    frames: u64,
}

impl CubeApp {
    /// Fails if `config` does not validate.
    pub fn new(config: RotationConfig) -> Result<Self> {
        Ok(Self::with_controller(RotationController::new(config)?))
    }

    fn with_controller(controller: RotationController) -> Self {
        Self {
            controller,
            initialized: false,
            rejected_samples: 0,
            frames: 0,
        }
    }

    pub fn controller(&self) -> &RotationController {
        &self.controller
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn rejected_samples(&self) -> u64 {
        self.rejected_samples
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn log(&self, level: LogLevel, message: impl Into<String>) -> Command {
        Command::Debug(DebugCommand::Log {
            level,
            message: message.into(),
        })
    }
}

impl Default for CubeApp {
    fn default() -> Self {
        Self::with_controller(RotationController::default())
    }
}

impl Core for CubeApp {
    fn handle(&mut self, event: Event) -> Vec<Command> {
        match event {
            Event::Lifecycle(e) => self.handle_lifecycle(e),
            Event::Input(e) => self.handle_input(e),
        }
    }
}

impl LifecycleHandler for CubeApp {
    fn handle_lifecycle(&mut self, event: LifecycleEvent) -> Vec<Command> {
        let mut commands = Vec::new();

        match event {
            LifecycleEvent::Init(init) => {
                if self.initialized {
                    commands.push(self.log(LogLevel::Warn, "Init received twice, ignoring"));
                    return commands;
                }

                log::info!(
                    "Cube core initialized on {:?}, viewport {}x{}, variant {:?}",
                    init.platform,
                    init.viewport_width,
                    init.viewport_height,
                    self.controller.variant()
                );
                commands.push(self.log(
                    LogLevel::Info,
                    format!(
                        "Core initialized on {:?}, viewport: {}x{}",
                        init.platform, init.viewport_width, init.viewport_height
                    ),
                ));
                commands.extend(cube_scene().to_commands());
                self.initialized = true;
            }

            LifecycleEvent::Frame(_) => {
                let matrix = self.controller.on_frame_tick();
                self.frames += 1;
                if self.initialized {
                    commands.push(Command::Scene(SceneCommand::SetTransform(SetTransformData {
                        target_id: PLANE_ANCHOR_ID.to_string(),
                        transform: to_protocol_transform(matrix),
                    })));
                }
            }

            LifecycleEvent::Resize(_) => {
                // Camera is fixed; the shell handles the viewport
            }

            LifecycleEvent::Pause => {
                commands.push(self.log(LogLevel::Info, "App paused"));
            }

            LifecycleEvent::Resume => {
                commands.push(self.log(LogLevel::Info, "App resumed"));
            }

            LifecycleEvent::Shutdown => {
                commands.push(self.log(
                    LogLevel::Info,
                    format!(
                        "App shutting down after {} frames, {} rejected samples",
                        self.frames, self.rejected_samples
                    ),
                ));
            }
        }

        commands
    }
}

impl InputHandler for CubeApp {
    fn handle_input(&mut self, event: InputEvent) -> Vec<Command> {
        let mut commands = Vec::new();

        match event {
            InputEvent::Gesture(gesture) => {
                let sample = GestureSample::from(&gesture);
                if let Err(err) = self.controller.on_gesture(&sample) {
                    self.rejected_samples += 1;
                    commands.push(self.log(
                        LogLevel::Warn,
                        format!(
                            "Dropped {:?} sample from {}: {}",
                            gesture.phase, gesture.device_id, err
                        ),
                    ));
                }
            }
        }

        commands
    }
}
