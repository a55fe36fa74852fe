//! Vision-cone queries: range, angular offset, and occlusion.

use glam::Vec2;

use crate::env::GridOracle;
use crate::math::{direction_angle, wrap_angle};
use crate::raycast;

/// Per-agent vision tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisionParams {
    /// Maximum sight distance, in pixels.
    pub radius: f32,
    /// Half of the cone's angular width, in radians.
    pub half_angle: f32,
}

impl VisionParams {
    pub const fn new(radius: f32, half_angle: f32) -> Self {
        Self { radius, half_angle }
    }
}

impl Default for VisionParams {
    fn default() -> Self {
        Self {
            radius: crate::SimConfig::DEFAULT_VISION_RADIUS,
            half_angle: std::f32::consts::FRAC_PI_4,
        }
    }
}

/// Measurements taken when a target is visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SightSample {
    /// Straight-line distance to the target, in pixels.
    pub distance: f32,
    /// Signed angular offset from the facing direction, in radians.
    pub bearing: f32,
}

/// Checks whether `target` is visible from `eye`.
///
/// Visible means: within `params.radius`, strictly inside `params.half_angle`
/// of `facing` (a bearing exactly on the cone edge is outside; the rule is
/// still deterministic for repeated identical inputs), and with no
/// sight-blocking tile strictly between the two points. Returns the
/// distance/bearing measurements on success.
pub fn sight_check(
    grid: &dyn GridOracle,
    eye: Vec2,
    facing: f32,
    params: VisionParams,
    target: Vec2,
) -> Option<SightSample> {
    if !eye.is_finite() || !target.is_finite() {
        return None;
    }
    let delta = target - eye;
    let distance = delta.length();
    if distance > params.radius {
        return None;
    }
    if distance <= f32::EPSILON {
        // target on top of the eye: trivially seen
        return Some(SightSample {
            distance: 0.0,
            bearing: 0.0,
        });
    }
    let bearing = wrap_angle(direction_angle(delta) - facing);
    if bearing.abs() >= params.half_angle {
        return None;
    }
    if let Some(hit) = raycast::first_blocker(grid, eye, target) {
        if hit.distance < distance {
            return None;
        }
    }
    Some(SightSample { distance, bearing })
}

/// Discretized vision-cone polygon: the apex followed by `segments + 1`
/// arc samples swept from `facing - half_angle` to `facing + half_angle`,
/// each ray shortened to its first sight blocker.
///
/// Rendering-only output; recomputed every tick, never persisted.
pub fn cone_polygon(
    grid: &dyn GridOracle,
    eye: Vec2,
    facing: f32,
    params: VisionParams,
    segments: u32,
) -> Vec<Vec2> {
    if !eye.is_finite() {
        return Vec::new();
    }
    let segments = segments.max(1);
    let mut points = Vec::with_capacity(segments as usize + 2);
    points.push(eye);
    let start = facing - params.half_angle;
    let sweep = 2.0 * params.half_angle;
    for i in 0..=segments {
        let angle = start + sweep * (i as f32 / segments as f32);
        let dir = Vec2::from_angle(angle);
        let end = eye + dir * params.radius;
        let reach = raycast::first_blocker(grid, eye, end)
            .map(|hit| hit.distance.min(params.radius))
            .unwrap_or(params.radius);
        points.push(eye + dir * reach);
    }
    points
}
