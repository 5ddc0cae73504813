//! sixsides-shell - headless host for the sixsides core
//!
//! Plays a recorded [`Trace`] of protocol events into a core, applies the
//! commands it sends back to a [`SceneTable`] and reports where the cube
//! ended up. Stands in for the render framework when there is no display:
//! replays are deterministic, so they double as regression fixtures.
//!
//! ```rust
//! use sixsides_shell::{Shell, Trace};
//!
//! let mut shell = Shell::default();
//! let summary = shell.replay(&Trace::synthetic_drag([1200.0, 0.0], 4, 120));
//! assert_eq!(summary.frames, 124);
//! ```

mod runtime;
mod scene;
mod trace;

pub use runtime::CoreRuntime;
pub use scene::{NodeKind, SceneNode, SceneTable};
pub use trace::Trace;

use serde::Serialize;
use sixsides::{CubeApp, PLANE_ANCHOR_ID, RotationConfig};
use sixsides_protocol::{
    Command, Core, DebugCommand, Event, LifecycleEvent, LogLevel, Transform,
};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error types for shell operations
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Failed to read trace {path:?}: {source}")]
    TraceRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] sixsides::Error),
}

/// What a replay did, for printing or asserting on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplaySummary {
    pub events: usize,
    pub frames: usize,
    /// Gesture events the core answered with a warning
    pub rejected_samples: usize,
    /// Commands that referenced a node the scene does not have
    pub unknown_targets: usize,
    /// Last transform of the plane anchor, if the scene was created
    pub final_transform: Option<Transform>,
}

pub struct Shell {
    runtime: CoreRuntime,
    scene: SceneTable,
    frames: usize,
    rejected_samples: usize,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(Box::new(CubeApp::default()))
    }
}

impl Shell {
    pub fn new(core: Box<dyn Core>) -> Self {
        Self {
            runtime: CoreRuntime::new(core),
            scene: SceneTable::new(),
            frames: 0,
            rejected_samples: 0,
        }
    }

    /// Shell hosting a [`CubeApp`] built from `config`.
    pub fn with_config(config: RotationConfig) -> Result<Self, ShellError> {
        Ok(Self::new(Box::new(CubeApp::new(config)?)))
    }

    /// Deliver one event and apply whatever the core sends back.
    pub fn deliver(&mut self, event: &Event) {
        let commands = self.runtime.send_event(event);

        let is_input = matches!(event, Event::Input(_));
        if matches!(event, Event::Lifecycle(LifecycleEvent::Frame(_))) {
            self.frames += 1;
        }

        for command in &commands {
            if let Command::Debug(DebugCommand::Log { level, message }) = command {
                if is_input && *level == LogLevel::Warn {
                    self.rejected_samples += 1;
                }
                forward_log(*level, message);
            }
            self.scene.apply(command);
        }
    }

    /// Deliver every event of `trace` in order.
    pub fn replay(&mut self, trace: &Trace) -> ReplaySummary {
        for event in trace.events() {
            self.deliver(event);
        }
        let summary = self.summary();
        log::info!(
            "Replayed {} events ({} frames, {} rejected samples)",
            summary.events,
            summary.frames,
            summary.rejected_samples
        );
        summary
    }

    pub fn summary(&self) -> ReplaySummary {
        ReplaySummary {
            events: self.runtime.events_sent(),
            frames: self.frames,
            rejected_samples: self.rejected_samples,
            unknown_targets: self.scene.unknown_targets(),
            final_transform: self.scene.get(PLANE_ANCHOR_ID).map(|node| node.transform.clone()),
        }
    }

    pub fn scene(&self) -> &SceneTable {
        &self.scene
    }
}

/// Map core log commands onto `log` records.
fn forward_log(level: LogLevel, message: &str) {
    match level {
        LogLevel::Debug => log::debug!(target: "sixsides::core", "{}", message),
        LogLevel::Info => log::info!(target: "sixsides::core", "{}", message),
        LogLevel::Warn => log::warn!(target: "sixsides::core", "{}", message),
        LogLevel::Error => log::error!(target: "sixsides::core", "{}", message),
    }
}

/// Replay a trace file with `config` and return the summary.
pub fn replay_file(
    path: impl AsRef<Path>,
    config: RotationConfig,
) -> Result<ReplaySummary, ShellError> {
    let mut shell = Shell::with_config(config)?;
    let trace = Trace::load(path)?;
    Ok(shell.replay(&trace))
}

/// Run the shell on a trace file with the default configuration.
pub fn run(trace_path: &str) -> Result<ReplaySummary, ShellError> {
    log::info!("sixsides-shell starting with trace {}", trace_path);
    replay_file(trace_path, RotationConfig::default())
}
