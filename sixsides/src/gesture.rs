//! Gesture samples as seen by the rotation controller.
//!
//! The shell reports drag updates as [`GestureEvent`]s. The controller works
//! on [`GestureSample`], the same data with `glam` vectors, after checking
//! that every component is finite.

use crate::error::InvalidInputError;
use glam::Vec2;
use sixsides_protocol::GestureEvent;

pub use sixsides_protocol::GesturePhase;

/// One drag-gesture update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub phase: GesturePhase,
    /// Points per unit time.
    pub velocity: Vec2,
    /// Cumulative displacement since the gesture began.
    pub translation: Vec2,
}

impl GestureSample {
    pub fn new(phase: GesturePhase, velocity: Vec2, translation: Vec2) -> Self {
        Self {
            phase,
            velocity,
            translation,
        }
    }

    /// A sample with no motion, e.g. the recognizer reporting `Began`.
    pub fn at_rest(phase: GesturePhase) -> Self {
        Self::new(phase, Vec2::ZERO, Vec2::ZERO)
    }

    /// Reject NaN and infinite components.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        let fields = [
            ("velocity.x", self.velocity.x),
            ("velocity.y", self.velocity.y),
            ("translation.x", self.translation.x),
            ("translation.y", self.translation.y),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(InvalidInputError { field, value });
            }
        }
        Ok(())
    }

    /// True when the horizontal part of the drag dominates.
    ///
    /// Ties go to the vertical axis.
    pub fn is_horizontal(&self) -> bool {
        self.translation.x.abs() > self.translation.y.abs()
    }
}

impl From<&GestureEvent> for GestureSample {
    fn from(event: &GestureEvent) -> Self {
        Self {
            phase: event.phase,
            velocity: Vec2::from_array(event.velocity),
            translation: Vec2::from_array(event.translation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_finite() {
        let sample = GestureSample::new(
            GesturePhase::Changed,
            Vec2::new(-1200.0, 3.5),
            Vec2::new(40.0, -2.0),
        );
        assert!(sample.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nan_velocity() {
        let sample = GestureSample::new(
            GesturePhase::Changed,
            Vec2::new(f32::NAN, 0.0),
            Vec2::ZERO,
        );
        let err = sample.validate().unwrap_err();
        assert_eq!(err.field, "velocity.x");
        assert!(err.value.is_nan());
    }

    #[test]
    fn test_validate_rejects_infinite_translation() {
        let sample = GestureSample::new(
            GesturePhase::Changed,
            Vec2::ZERO,
            Vec2::new(0.0, f32::NEG_INFINITY),
        );
        let err = sample.validate().unwrap_err();
        assert_eq!(err.field, "translation.y");
    }

    #[test]
    fn test_is_horizontal_ties_go_vertical() {
        let tie = GestureSample::new(GesturePhase::Changed, Vec2::ZERO, Vec2::new(5.0, -5.0));
        assert!(!tie.is_horizontal());

        let wide = GestureSample::new(GesturePhase::Changed, Vec2::ZERO, Vec2::new(-9.0, 2.0));
        assert!(wide.is_horizontal());
    }

    #[test]
    fn test_from_protocol_event() {
        let event = GestureEvent {
            device_id: "touch-0".to_string(),
            phase: GesturePhase::Ended,
            velocity: [10.0, 20.0],
            translation: [1.0, 2.0],
        };
        let sample = GestureSample::from(&event);
        assert_eq!(sample.phase, GesturePhase::Ended);
        assert_eq!(sample.velocity, Vec2::new(10.0, 20.0));
        assert_eq!(sample.translation, Vec2::new(1.0, 2.0));
    }
}
