use std::f32::consts::FRAC_PI_4;

use crate::darkness::DarknessParams;

/// Simulation configuration constants and tunable parameters.
///
/// The dwell and timeout durations are deliberately runtime-tunable: level
/// designers balance them per scenario, so nothing here is hard-coded at
/// use sites.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Continuous visibility required before `Suspicious` escalates to
    /// `Searching`, in seconds.
    pub suspicious_dwell: f32,
    /// Additional continuous visibility required before `Searching`
    /// escalates to `Alert`, in seconds.
    pub searching_dwell: f32,
    /// Non-visibility span after which `Suspicious`/`Searching` decay one
    /// level, in seconds.
    pub decay_timeout: f32,
    /// Non-visibility span after which `Alert` gives up and returns, in
    /// seconds.
    pub lost_timeout: f32,
    /// Distance below which an agent has "reached" a waypoint or its
    /// last-known target position, in pixels.
    pub arrival_radius: f32,
    /// Distance below which an agent captures the player, in pixels.
    pub capture_radius: f32,
    /// Minimum seconds between random wander redirections.
    pub wander_redirect_min: f32,
    /// Maximum seconds between random wander redirections.
    pub wander_redirect_max: f32,
    /// Wander drift speed as a fraction of full agent speed.
    pub wander_speed_factor: f32,
    /// Default vision radius for spawned agents, in pixels.
    pub vision_radius: f32,
    /// Default vision half-angle for spawned agents, in radians.
    pub vision_half_angle: f32,
    /// Arc sample count for the rendered vision-cone polygon.
    pub cone_segments: u32,
    /// Player-centred darkness field tuning.
    pub darkness: DarknessParams,
}

impl SimConfig {
    // ===== compile-time capacities =====
    /// Maximum live agents per level.
    pub const MAX_AGENTS: usize = 64;
    /// Maximum waypoints in one patrol route.
    pub const MAX_PATROL_POINTS: usize = 16;

    // ===== runtime-tunable defaults =====
    /// Pixel size of one tile; also the default arrival radius.
    pub const TILE_SIZE: f32 = 16.0;
    pub const DEFAULT_SUSPICIOUS_DWELL: f32 = 0.5;
    pub const DEFAULT_SEARCHING_DWELL: f32 = 0.3;
    pub const DEFAULT_DECAY_TIMEOUT: f32 = 0.5;
    pub const DEFAULT_LOST_TIMEOUT: f32 = 2.0;
    pub const DEFAULT_CAPTURE_RADIUS: f32 = 12.0;
    pub const DEFAULT_AGENT_SPEED: f32 = 48.0;
    /// Ten tiles of sight.
    pub const DEFAULT_VISION_RADIUS: f32 = 10.0 * Self::TILE_SIZE;

    pub fn new() -> Self {
        Self {
            suspicious_dwell: Self::DEFAULT_SUSPICIOUS_DWELL,
            searching_dwell: Self::DEFAULT_SEARCHING_DWELL,
            decay_timeout: Self::DEFAULT_DECAY_TIMEOUT,
            lost_timeout: Self::DEFAULT_LOST_TIMEOUT,
            arrival_radius: Self::TILE_SIZE,
            capture_radius: Self::DEFAULT_CAPTURE_RADIUS,
            wander_redirect_min: 1.5,
            wander_redirect_max: 3.0,
            wander_speed_factor: 0.5,
            vision_radius: Self::DEFAULT_VISION_RADIUS,
            vision_half_angle: FRAC_PI_4,
            cone_segments: 24,
            darkness: DarknessParams::default(),
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}
