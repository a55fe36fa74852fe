//! Player-centred visibility falloff ("darkness") field.
//!
//! Every tile gets an effective visibility radius that depends on how far
//! its direction lies off the player's facing: largest straight ahead,
//! shrinking to a side radius at 90 degrees and a rear radius directly
//! behind. This is a pure radial falloff with no occlusion; it is
//! independent of the agents' vision system.

use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

use crate::env::GridOracle;
use crate::math::{direction_angle, lerp, wrap_angle};

/// Darkness field tuning. Radii are in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DarknessParams {
    pub enabled: bool,
    /// Visibility radius straight ahead.
    pub front_radius: f32,
    /// Visibility radius at exactly 90 degrees off facing.
    pub side_radius: f32,
    /// Visibility radius directly behind.
    pub behind_radius: f32,
}

impl Default for DarknessParams {
    fn default() -> Self {
        Self {
            enabled: true,
            front_radius: 160.0,
            side_radius: 96.0,
            behind_radius: 48.0,
        }
    }
}

/// Effective visibility radius for a direction `offset` radians off the
/// player's facing (`offset` in `[0, PI]`).
pub fn effective_radius(params: &DarknessParams, offset: f32) -> f32 {
    if offset <= FRAC_PI_2 {
        lerp(params.front_radius, params.side_radius, offset / FRAC_PI_2)
    } else {
        lerp(
            params.side_radius,
            params.behind_radius,
            (offset - FRAC_PI_2) / FRAC_PI_2,
        )
    }
}

/// Visibility of a world-space point, in `[0, 1]`.
///
/// 1.0 at the player, falling off linearly to 0.0 at the effective radius.
/// A disabled field reports everything fully visible.
pub fn point_visibility(player: Vec2, facing: f32, point: Vec2, params: &DarknessParams) -> f32 {
    if !params.enabled {
        return 1.0;
    }
    let delta = point - player;
    let distance = delta.length();
    if distance <= f32::EPSILON {
        return 1.0;
    }
    let offset = wrap_angle(direction_angle(delta) - facing).abs();
    let radius = effective_radius(params, offset);
    if radius <= 0.0 || distance > radius {
        return 0.0;
    }
    (1.0 - distance / radius).clamp(0.0, 1.0)
}

/// Per-tile visibility field, row-major over the grid.
///
/// Samples each tile at its center. When the feature is disabled every tile
/// reads fully visible, which is exactly the "reset on disable" contract.
pub fn field(grid: &dyn GridOracle, player: Vec2, facing: f32, params: &DarknessParams) -> Vec<f32> {
    let dims = grid.dimensions();
    let count = dims.tile_count();
    if !params.enabled || !player.is_finite() {
        return vec![1.0; count];
    }
    let mut values = Vec::with_capacity(count);
    for y in 0..dims.height as i32 {
        for x in 0..dims.width as i32 {
            let center = dims.tile_center(crate::env::TileCoord::new(x, y));
            values.push(point_visibility(player, facing, center, params));
        }
    }
    values
}
