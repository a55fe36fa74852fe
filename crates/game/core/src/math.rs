//! Small float-geometry helpers shared by vision, locomotion, and darkness.

use glam::Vec2;
use std::f32::consts::{PI, TAU};

/// Normalizes an angle to the `[-PI, PI]` range.
///
/// Non-finite inputs pass through unchanged; callers guard with
/// [`Vec2::is_finite`] before trusting the result.
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI { wrapped - TAU } else { wrapped }
}

/// Angle of a direction vector, in radians (`atan2` convention).
#[inline]
pub fn direction_angle(direction: Vec2) -> f32 {
    direction.y.atan2(direction.x)
}

/// Linear interpolation between `a` and `b` by `t` in `[0, 1]`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
