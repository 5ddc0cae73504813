//! Quarter-turn snapping: target selection and the per-frame ease steps.
//!
//! None of these wrap the angle; targets are picked relative to the
//! unwrapped value so several full turns are preserved.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

/// Ninety degrees, the snap increment.
pub const QUARTER_TURN: f32 = FRAC_PI_2;

/// Nearest multiple of a quarter turn.
#[inline]
pub fn nearest_quarter_turn(angle: f32) -> f32 {
    (angle / QUARTER_TURN).round() * QUARTER_TURN
}

/// Single-axis target: one breakpoint at 45 degrees.
///
/// Only distinguishes the origin quadrant from its neighbour, and the
/// neighbour is always reported as `-π/2` whatever the sign of `angle`.
#[inline]
pub fn threshold_target(angle: f32) -> f32 {
    if angle.abs() > FRAC_PI_4 {
        -QUARTER_TURN
    } else {
        0.0
    }
}

/// One frame of first-order low-pass toward `target`.
#[inline]
pub fn ease_toward(angle: f32, target: f32, blend: f32) -> f32 {
    angle + (target - angle) * blend
}

/// One frame of multiplicative decay toward zero.
#[inline]
pub fn decay(angle: f32, factor: f32) -> f32 {
    angle * factor
}
