//! Rotation Controller
//!
//! Turns drag gestures into a cube rotation:
//! - While a drag is `Changed`, the angle follows the raw per-sample velocity
//!   (`angle += velocity * sensitivity`). This is not integrated over time, so
//!   a host that samples gestures faster rotates the cube further.
//! - Once the drag has `Ended`, every frame eases the angle toward a snap
//!   target until a new gesture arrives.
//!
//! The angle is stored as a `Vec2`: `x` accumulates horizontal drags and
//! turns the cube about world Y, `y` accumulates vertical drags and turns it
//! about world X. Horizontal drags therefore spin the cube like a turntable.
//!
//! Both entry points take `&mut self` and are expected to be driven from the
//! same thread, in event order.

use crate::config::{RotationConfig, Variant};
use crate::error::{InvalidInputError, Result};
use crate::gesture::{GesturePhase, GestureSample};
use crate::matrix::{Axis, rotation_matrix};
use crate::snap::{QUARTER_TURN, decay, ease_toward, nearest_quarter_turn, threshold_target};
use glam::{Mat4, Vec2};

/// Everything the controller mutates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    /// Unwrapped angles in radians. `x` turns about Y, `y` turns about X.
    pub angle: Vec2,
    /// Snap targets. Only meaningful while the phase is `Ended`.
    pub target: Vec2,
    /// Velocity of the last accepted sample.
    pub velocity: Vec2,
    /// Phase of the last accepted sample.
    pub phase: GesturePhase,
}

/// Gesture-to-rotation state machine.
#[derive(Debug, Clone)]
pub struct RotationController {
    config: RotationConfig,
    state: RotationState,
    /// Whether the current snap has already been reported as settled.
    settled: bool,
}

impl Default for RotationController {
    fn default() -> Self {
        Self::from_valid_config(RotationConfig::default())
    }
}

impl RotationController {
    /// Build a controller, refusing configs that fail
    /// [`RotationConfig::validate`].
    pub fn new(config: RotationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: RotationConfig) -> Self {
        Self {
            config,
            state: RotationState::default(),
            settled: false,
        }
    }

    pub fn config(&self) -> &RotationConfig {
        &self.config
    }

    pub fn state(&self) -> &RotationState {
        &self.state
    }

    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    /// Feed one gesture sample.
    ///
    /// Non-finite samples are rejected and leave the state untouched. Any
    /// accepted sample overwrites the stored velocity and phase, whatever its
    /// phase.
    pub fn on_gesture(&mut self, sample: &GestureSample) -> std::result::Result<(), InvalidInputError> {
        if let Err(err) = sample.validate() {
            log::warn!("Dropping gesture sample: {}", err);
            return Err(err);
        }

        let previous = self.state.phase;
        self.state.velocity = sample.velocity;
        self.state.phase = sample.phase;
        self.settled = false;

        if previous != sample.phase {
            log::debug!("Gesture phase {:?} -> {:?}", previous, sample.phase);
        }

        match (self.config.variant, sample.phase) {
            (Variant::AutoSpin, _) => {}
            (_, GesturePhase::Changed) => self.follow_drag(sample),
            (Variant::TwoAxis, GesturePhase::Ended) => {
                self.state.target = Vec2::new(
                    nearest_quarter_turn(self.state.angle.x),
                    nearest_quarter_turn(self.state.angle.y),
                );
                log::debug!("Snapping {:?} -> {:?}", self.state.angle, self.state.target);
            }
            // Began is a placeholder; Cancelled and Failed behave like Idle.
            _ => {}
        }

        Ok(())
    }

    /// Advance one render frame and return the transform for the cube anchor.
    pub fn on_frame_tick(&mut self) -> Mat4 {
        let blend = self.config.blend;

        match self.config.variant {
            Variant::SingleAxis if self.state.phase == GesturePhase::Ended => {
                self.state.angle.x = if self.state.target.x == 0.0 {
                    decay(self.state.angle.x, self.config.decay)
                } else {
                    ease_toward(self.state.angle.x, QUARTER_TURN, blend)
                };
            }
            Variant::TwoAxis if self.state.phase == GesturePhase::Ended => {
                self.state.angle = Vec2::new(
                    ease_toward(self.state.angle.x, self.state.target.x, blend),
                    ease_toward(self.state.angle.y, self.state.target.y, blend),
                );
            }
            Variant::AutoSpin => {
                self.state.angle.y += self.config.spin_rate;
            }
            _ => {}
        }

        if !self.settled && self.is_settled() {
            self.settled = true;
            log::debug!("Snap settled at {:?}", self.state.angle);
        }

        self.transform()
    }

    /// Transform for the current angles, without advancing anything.
    pub fn transform(&self) -> Mat4 {
        let angle = self.state.angle;
        match self.config.variant {
            Variant::SingleAxis => rotation_matrix(angle.x, Axis::Y),
            Variant::TwoAxis => {
                rotation_matrix(angle.x, Axis::Y) * rotation_matrix(angle.y, Axis::X)
            }
            Variant::AutoSpin => rotation_matrix(angle.y, Axis::X),
        }
    }

    /// Where the released cube is heading.
    ///
    /// For the single-axis variant this is `0` or `+π/2`, which is not always
    /// the stored target: the threshold reports `-π/2` for both neighbouring
    /// quadrants while the ease step always heads for `+π/2`.
    pub fn snap_goal(&self) -> Option<Vec2> {
        if self.state.phase != GesturePhase::Ended {
            return None;
        }
        match self.config.variant {
            Variant::SingleAxis => {
                let goal = if self.state.target.x == 0.0 { 0.0 } else { QUARTER_TURN };
                Some(Vec2::new(goal, self.state.angle.y))
            }
            Variant::TwoAxis => Some(self.state.target),
            Variant::AutoSpin => None,
        }
    }

    /// True once a released cube is within `settle_epsilon` of its goal.
    pub fn is_settled(&self) -> bool {
        self.snap_goal()
            .map(|goal| (goal - self.state.angle).abs().max_element() < self.config.settle_epsilon)
            .unwrap_or(false)
    }

    fn follow_drag(&mut self, sample: &GestureSample) {
        match self.config.variant {
            Variant::SingleAxis => {
                self.state.angle.x += self.scaled_delta(sample.velocity.x);
                self.state.target.x = threshold_target(self.state.angle.x);
            }
            Variant::TwoAxis => {
                if sample.is_horizontal() {
                    self.state.angle.x += self.scaled_delta(sample.velocity.x);
                } else {
                    self.state.angle.y += self.scaled_delta(sample.velocity.y);
                }
            }
            Variant::AutoSpin => {}
        }
    }

    fn scaled_delta(&self, velocity: f32) -> f32 {
        let raw = velocity * self.config.sensitivity;
        // max_step > 0 is checked in new()
        let max = self.config.max_step;
        let clamped = raw.clamp(-max, max);
        if clamped != raw {
            log::debug!("Clamped drag step {} to {}", raw, clamped);
        }
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use std::f32::consts::FRAC_PI_2;

    fn changed(vx: f32, vy: f32, tx: f32, ty: f32) -> GestureSample {
        GestureSample::new(GesturePhase::Changed, Vec2::new(vx, vy), Vec2::new(tx, ty))
    }

    fn ended() -> GestureSample {
        GestureSample::at_rest(GesturePhase::Ended)
    }

    fn two_axis() -> RotationController {
        RotationController::new(RotationConfig::with_variant(Variant::TwoAxis)).unwrap()
    }

    #[test]
    fn test_drag_follow_linearity() {
        let v = 500.0_f32;
        let mut controller = RotationController::default();
        controller.on_gesture(&changed(v, 0.0, 10.0, 0.0)).unwrap();
        assert_eq!(controller.state().angle.x, v * 0.0001);
        assert_eq!(controller.state().angle.y, 0.0);
    }

    #[test]
    fn test_drag_follow_is_per_sample_not_per_frame() {
        let mut controller = RotationController::default();
        controller.on_gesture(&changed(1000.0, 0.0, 10.0, 0.0)).unwrap();
        let after_sample = controller.state().angle;
        for _ in 0..10 {
            controller.on_frame_tick();
        }
        assert_eq!(controller.state().angle, after_sample);
    }

    #[test]
    fn test_every_sample_overwrites_velocity_and_phase() {
        let mut controller = RotationController::default();
        controller.on_gesture(&changed(300.0, 40.0, 5.0, 1.0)).unwrap();
        let began = GestureSample::new(GesturePhase::Began, Vec2::new(7.0, 8.0), Vec2::ZERO);
        controller.on_gesture(&began).unwrap();
        assert_eq!(controller.state().phase, GesturePhase::Began);
        assert_eq!(controller.state().velocity, Vec2::new(7.0, 8.0));
    }

    #[test]
    fn test_began_changes_no_angle_or_target() {
        for mut controller in [RotationController::default(), two_axis()] {
            for _ in 0..5 {
                controller.on_gesture(&changed(2000.0, 0.0, 10.0, 0.0)).unwrap();
            }
            let before = *controller.state();

            let began = GestureSample::new(
                GesturePhase::Began,
                Vec2::new(3000.0, -3000.0),
                Vec2::new(20.0, 5.0),
            );
            controller.on_gesture(&began).unwrap();
            controller.on_frame_tick();

            assert_eq!(controller.state().angle, before.angle, "{:?}", controller.variant());
            assert_eq!(controller.state().target, before.target, "{:?}", controller.variant());
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        for config in [
            RotationConfig {
                max_step: -1.0,
                ..RotationConfig::default()
            },
            RotationConfig {
                max_step: f32::NAN,
                ..RotationConfig::default()
            },
        ] {
            let err = RotationController::new(config).unwrap_err();
            assert!(matches!(err, crate::Error::Config(_)), "unexpected error {:?}", err);
        }
    }

    #[test]
    fn test_single_axis_threshold_target() {
        let mut controller = RotationController::default();
        // 0.5 rad: below 45 degrees
        controller.on_gesture(&changed(2500.0, 0.0, 1.0, 0.0)).unwrap();
        controller.on_gesture(&changed(2500.0, 0.0, 1.0, 0.0)).unwrap();
        assert!((controller.state().angle.x - 0.5).abs() < 1e-6);
        assert_eq!(controller.state().target.x, 0.0);

        // push on to 1.0 rad: past 45 degrees
        controller.on_gesture(&changed(2500.0, 0.0, 1.0, 0.0)).unwrap();
        controller.on_gesture(&changed(2500.0, 0.0, 1.0, 0.0)).unwrap();
        assert!((controller.state().angle.x - 1.0).abs() < 1e-6);
        assert_eq!(controller.state().target.x, -FRAC_PI_2);
    }

    #[test]
    fn test_single_axis_release_decays_to_zero() {
        let mut controller = RotationController::default();
        controller.on_gesture(&changed(2000.0, 0.0, 1.0, 0.0)).unwrap();
        controller.on_gesture(&ended()).unwrap();

        let mut previous = controller.state().angle.x;
        for _ in 0..200 {
            controller.on_frame_tick();
            let angle = controller.state().angle.x;
            assert!(angle >= 0.0 && angle <= previous);
            previous = angle;
        }
        assert!(previous < 1e-4);
        assert!(controller.is_settled());
    }

    #[test]
    fn test_single_axis_release_past_threshold_eases_to_positive_quarter_turn() {
        let mut controller = RotationController::default();
        for _ in 0..4 {
            controller.on_gesture(&changed(2500.0, 0.0, 1.0, 0.0)).unwrap();
        }
        assert_eq!(controller.state().target.x, -FRAC_PI_2);
        controller.on_gesture(&ended()).unwrap();

        for _ in 0..200 {
            controller.on_frame_tick();
        }
        assert!((controller.state().angle.x - FRAC_PI_2).abs() < 1e-4);
        assert_eq!(controller.snap_goal(), Some(Vec2::new(FRAC_PI_2, 0.0)));
    }

    #[test]
    fn test_two_axis_routes_by_dominant_translation() {
        let mut controller = two_axis();
        controller.on_gesture(&changed(1000.0, 2000.0, 30.0, 4.0)).unwrap();
        assert_eq!(controller.state().angle, Vec2::new(1000.0 * 0.0001, 0.0));

        controller.on_gesture(&changed(1000.0, 2000.0, 4.0, 30.0)).unwrap();
        assert_eq!(controller.state().angle, Vec2::new(1000.0 * 0.0001, 2000.0 * 0.0001));
    }

    #[test]
    fn test_two_axis_snaps_each_axis_to_nearest_quarter_turn() {
        let mut controller = two_axis();
        // x: 1.3 rad in steps of 0.1, y: -0.9 rad
        for _ in 0..13 {
            controller.on_gesture(&changed(1000.0, 0.0, 10.0, 0.0)).unwrap();
        }
        for _ in 0..9 {
            controller.on_gesture(&changed(0.0, -1000.0, 0.0, 10.0)).unwrap();
        }
        controller.on_gesture(&ended()).unwrap();
        let target = controller.state().target;
        assert!((target.x - FRAC_PI_2).abs() < 1e-6);
        assert!((target.y + FRAC_PI_2).abs() < 1e-6);

        for _ in 0..200 {
            controller.on_frame_tick();
        }
        let angle = controller.state().angle;
        assert!((angle - target).abs().max_element() < 1e-4, "angle {:?}", angle);
        assert!(controller.is_settled());
    }

    #[test]
    fn test_two_axis_composition_order() {
        let mut controller = two_axis();
        controller.on_gesture(&changed(2000.0, 0.0, 10.0, 0.0)).unwrap();
        controller.on_gesture(&changed(0.0, 1500.0, 0.0, 10.0)).unwrap();
        let angle = controller.state().angle;

        let expected = rotation_matrix(angle.x, Axis::Y) * rotation_matrix(angle.y, Axis::X);
        assert_eq!(controller.transform(), expected);
        assert_ne!(
            controller.transform(),
            rotation_matrix(angle.y, Axis::X) * rotation_matrix(angle.x, Axis::Y)
        );
    }

    #[test]
    fn test_idle_samples_change_nothing() {
        let mut controller = two_axis();
        controller.on_gesture(&changed(1200.0, 0.0, 10.0, 0.0)).unwrap();
        let before = *controller.state();

        let idle = GestureSample::new(
            GesturePhase::Idle,
            Vec2::new(9000.0, 9000.0),
            Vec2::new(50.0, 1.0),
        );
        for _ in 0..5 {
            controller.on_gesture(&idle).unwrap();
            controller.on_frame_tick();
        }
        assert_eq!(controller.state().angle, before.angle);
        assert_eq!(controller.state().target, before.target);
    }

    #[test]
    fn test_cancelled_freezes_angle_without_reset() {
        let mut controller = RotationController::default();
        controller.on_gesture(&changed(2000.0, 0.0, 10.0, 0.0)).unwrap();
        controller.on_gesture(&GestureSample::at_rest(GesturePhase::Cancelled)).unwrap();
        for _ in 0..50 {
            controller.on_frame_tick();
        }
        assert!((controller.state().angle.x - 0.2).abs() < 1e-6);
        assert!(!controller.is_settled());
    }

    #[test]
    fn test_invalid_sample_is_dropped() {
        let mut controller = RotationController::default();
        controller.on_gesture(&changed(1000.0, 0.0, 10.0, 0.0)).unwrap();
        let before = *controller.state();

        let bad =
            GestureSample::new(GesturePhase::Ended, Vec2::new(f32::INFINITY, 0.0), Vec2::ZERO);
        let err = controller.on_gesture(&bad).unwrap_err();
        assert_eq!(err.field, "velocity.x");
        assert_eq!(*controller.state(), before);
        assert_eq!(controller.state().phase, GesturePhase::Changed);
    }

    #[test]
    fn test_large_velocity_is_clamped() {
        let mut controller = RotationController::default();
        controller.on_gesture(&changed(1.0e9, 0.0, 10.0, 0.0)).unwrap();
        assert_eq!(controller.state().angle.x, controller.config().max_step);

        controller.on_gesture(&changed(-1.0e9, 0.0, -10.0, 0.0)).unwrap();
        assert_eq!(controller.state().angle.x, 0.0);
    }

    #[test]
    fn test_angle_is_not_wrapped() {
        let mut controller = two_axis();
        for _ in 0..100 {
            controller.on_gesture(&changed(2000.0, 0.0, 10.0, 0.0)).unwrap();
        }
        // 100 * 0.2 rad = 20 rad, more than three full turns
        assert!((controller.state().angle.x - 20.0).abs() < 1e-3);
        controller.on_gesture(&ended()).unwrap();
        assert!((controller.state().target.x - nearest_quarter_turn(20.0)).abs() < 1e-6);
        assert!(controller.state().target.x > std::f32::consts::TAU);
    }

    #[test]
    fn test_auto_spin_ignores_gestures() {
        let mut controller =
            RotationController::new(RotationConfig::with_variant(Variant::AutoSpin)).unwrap();
        controller.on_gesture(&changed(5000.0, 5000.0, 10.0, 0.0)).unwrap();
        assert_eq!(controller.state().angle, Vec2::ZERO);

        for _ in 0..250 {
            controller.on_frame_tick();
        }
        assert!((controller.state().angle.y - 1.0).abs() < 1e-4);
        let v = controller.transform().transform_vector3(Vec3::Y);
        let expected =
            rotation_matrix(controller.state().angle.y, Axis::X).transform_vector3(Vec3::Y);
        assert!(v.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn test_fresh_controller_outputs_identity() {
        let mut controller = RotationController::default();
        assert_eq!(controller.on_frame_tick(), Mat4::IDENTITY);
        assert!(controller.snap_goal().is_none());
    }
}
