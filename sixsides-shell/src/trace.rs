//! Recorded event traces
//!
//! A trace is a JSON array of protocol [`Event`]s in delivery order:
//!
//! ```json
//! [
//!   {"category": "Lifecycle", "event": {"type": "Init", "platform": "Headless",
//!     "viewport_width": 800, "viewport_height": 600, "dpr": 1.0}},
//!   {"category": "Input", "event": {"type": "Gesture", "device_id": "touch-0",
//!     "phase": "Changed", "velocity": [1200.0, 0.0], "translation": [30.0, 0.0]}},
//!   {"category":"Lifecycle","event":{"type":"Frame","time":0.016,"dt":0.016,"frame":0}}
//! ]
//! ```

use crate::ShellError;
use sixsides_protocol::{
    Event, FrameEvent, GestureEvent, GesturePhase, InitEvent, InputEvent, LifecycleEvent, Platform,
};
use std::path::Path;

const FRAME_DT: f32 = 1.0 / 60.0;
const DEVICE_ID: &str = "synthetic-0";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    events: Vec<Event>,
}

impl Trace {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn from_json(json: &str) -> Result<Self, ShellError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ShellError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ShellError::TraceRead {
            path: path.to_path_buf(),
            source,
        })?;
        let trace = Self::from_json(&content)?;
        log::info!("Loaded {} events from {}", trace.len(), path.display());
        Ok(trace)
    }

    pub fn to_json(&self) -> Result<String, ShellError> {
        Ok(serde_json::to_string_pretty(&self.events)?)
    }

    /// One drag at constant velocity, then the release animation.
    ///
    /// `Init`, `Began`, then `samples` × (`Changed` + a frame), `Ended`, and
    /// `frames` more frames. Translation grows along the velocity so the
    /// dominant axis matches the velocity's.
    pub fn synthetic_drag(velocity: [f32; 2], samples: usize, frames: usize) -> Self {
        let mut builder = TraceBuilder::default();
        builder.push(Event::Lifecycle(LifecycleEvent::Init(InitEvent {
            platform: Platform::Headless,
            viewport_width: 800,
            viewport_height: 600,
            dpr: 1.0,
        })));

        builder.gesture(GesturePhase::Began, [0.0, 0.0], [0.0, 0.0]);
        for i in 1..=samples {
            let t = i as f32 * FRAME_DT;
            builder.gesture(GesturePhase::Changed, velocity, [velocity[0] * t, velocity[1] * t]);
            builder.frame();
        }
        let t = samples as f32 * FRAME_DT;
        builder.gesture(GesturePhase::Ended, [0.0, 0.0], [velocity[0] * t, velocity[1] * t]);
        for _ in 0..frames {
            builder.frame();
        }

        Self::new(builder.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[derive(Default)]
struct TraceBuilder {
    events: Vec<Event>,
    frame: u64,
}

impl TraceBuilder {
    fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    fn gesture(&mut self, phase: GesturePhase, velocity: [f32; 2], translation: [f32; 2]) {
        self.push(Event::Input(InputEvent::Gesture(GestureEvent {
            device_id: DEVICE_ID.to_string(),
            phase,
            velocity,
            translation,
        })));
    }

    fn frame(&mut self) {
        let frame = self.frame;
        self.frame += 1;
        self.push(Event::Lifecycle(LifecycleEvent::Frame(FrameEvent {
            time: frame as f64 * FRAME_DT as f64,
            dt: FRAME_DT,
            frame,
        })));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(trace: &Trace, f: impl Fn(&Event) -> bool) -> usize {
        trace.events().iter().filter(|e| f(e)).count()
    }

    #[test]
    fn test_synthetic_drag_shape() {
        let trace = Trace::synthetic_drag([1200.0, 0.0], 5, 30);
        // Init + Began + 5 * (Changed + Frame) + Ended + 30 frames
        assert_eq!(trace.len(), 1 + 1 + 10 + 1 + 30);
        assert!(matches!(trace.events()[0], Event::Lifecycle(LifecycleEvent::Init(_))));
        assert_eq!(
            count(&trace, |e| matches!(e, Event::Lifecycle(LifecycleEvent::Frame(_)))),
            35
        );
        assert_eq!(
            count(&trace, |e| matches!(
                e,
                Event::Input(InputEvent::Gesture(GestureEvent { phase: GesturePhase::Changed, .. }))
            )),
            5
        );
    }

    #[test]
    fn test_frame_numbers_increase() {
        let trace = Trace::synthetic_drag([0.0, 800.0], 3, 3);
        let frames: Vec<u64> = trace
            .events()
            .iter()
            .filter_map(|e| match e {
                Event::Lifecycle(LifecycleEvent::Frame(f)) => Some(f.frame),
                _ => None,
            })
            .collect();
        assert_eq!(frames, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_json_round_trip() {
        let trace = Trace::synthetic_drag([300.0, -40.0], 2, 2);
        let json = trace.to_json().unwrap();
        assert_eq!(Trace::from_json(&json).unwrap(), trace);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(Trace::from_json("{\"not\": \"a trace\"}"), Err(ShellError::Json(_))));
    }
}
