//! Per-level simulation session.
//!
//! A [`Session`] owns the authoritative state for one loaded level and
//! drives it one frame at a time. The caller samples the player pose,
//! calls [`Session::advance`], and renders the returned [`Frame`]; the
//! session never touches a clock or input device itself, which keeps
//! replays exact.

use tracing::{debug, info};

use umbra_content::{LevelData, SpawnSpec};
use umbra_core::{
    AgentSpawn, AgentView, Behavior, Env, PatrolRoute, PcgRng, SimConfig, SimEngine, SimState,
    StateError, TargetState, VisionParams, darkness, view,
};

/// Errors surfaced when building or resetting a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
    #[error(transparent)]
    Spawn(#[from] StateError),
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Per-agent render payloads, in roster order.
    pub agents: Vec<AgentView>,
    /// Highest alert level across the roster.
    pub alert: Behavior,
    /// Player-centred visibility per tile, row-major in `[0, 1]`.
    pub darkness: Vec<f32>,
    /// True once any agent is within capture range of the player.
    pub captured: bool,
}

/// One loaded level plus its live simulation state.
#[derive(Debug)]
pub struct Session {
    config: SimConfig,
    level: LevelData,
    state: SimState,
    rng: PcgRng,
}

impl Session {
    /// Builds a session and spawns the level's agents.
    ///
    /// A level without spawn markers is valid; the session simply has an
    /// empty roster.
    pub fn new(level: LevelData, config: SimConfig, seed: u64) -> Result<Self, SessionError> {
        validate_config(&config)?;
        let mut session = Self {
            config,
            level,
            state: SimState::new(seed),
            rng: PcgRng,
        };
        session.spawn_agents()?;
        Ok(session)
    }

    fn spawn_agents(&mut self) -> Result<(), SessionError> {
        let vision = VisionParams::new(self.config.vision_radius, self.config.vision_half_angle);
        for spec in &self.level.spawns {
            let SpawnSpec { position, patrol } = spec;
            self.state.spawn(
                AgentSpawn::at(*position)
                    .with_vision(vision)
                    .with_patrol(PatrolRoute::new(patrol.iter().copied())),
            )?;
        }
        info!(agents = self.state.len(), seed = self.state.seed, "session ready");
        Ok(())
    }

    /// Advances the simulation by `dt` seconds and projects a frame.
    pub fn advance(&mut self, target: &TargetState, dt: f32) -> Frame {
        let env = Env::new(&self.level.grid, &self.rng, &self.config);
        let changes = SimEngine::new(&mut self.state).tick(&env, target, dt);
        for change in &changes {
            debug!(
                agent = %change.agent,
                from = %change.from,
                to = %change.to,
                tick = self.state.ticks,
                "behavior change"
            );
        }

        let agents = self
            .state
            .agents()
            .iter()
            .map(|agent| view::agent_view(&self.level.grid, agent, self.config.cone_segments))
            .collect();
        let captured = self
            .state
            .agents()
            .iter()
            .any(|agent| view::capture_distance(agent, target) <= self.config.capture_radius);
        Frame {
            agents,
            alert: view::alert_summary(&self.state),
            darkness: darkness::field(
                &self.level.grid,
                target.position,
                target.facing,
                &self.config.darkness,
            ),
            captured,
        }
    }

    /// Rebuilds the roster from the level's spawn markers, keeping the
    /// seed so the rerun replays identically.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.state = SimState::new(self.state.seed);
        self.spawn_agents()
    }

    pub fn set_darkness_enabled(&mut self, enabled: bool) {
        self.config.darkness.enabled = enabled;
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn level(&self) -> &LevelData {
        &self.level
    }
}

fn validate_config(config: &SimConfig) -> Result<(), SessionError> {
    let positive = [
        ("suspicious_dwell", config.suspicious_dwell),
        ("searching_dwell", config.searching_dwell),
        ("decay_timeout", config.decay_timeout),
        ("lost_timeout", config.lost_timeout),
        ("arrival_radius", config.arrival_radius),
        ("capture_radius", config.capture_radius),
        ("vision_radius", config.vision_radius),
        ("vision_half_angle", config.vision_half_angle),
    ];
    for (name, value) in positive {
        if !value.is_finite() || value <= 0.0 {
            return Err(SessionError::InvalidConfig {
                reason: format!("{name} must be positive, got {value}"),
            });
        }
    }
    if config.wander_redirect_min > config.wander_redirect_max {
        return Err(SessionError::InvalidConfig {
            reason: format!(
                "wander redirect range is inverted ({} > {})",
                config.wander_redirect_min, config.wander_redirect_max
            ),
        });
    }
    if config.cone_segments == 0 {
        return Err(SessionError::InvalidConfig {
            reason: "cone_segments must be at least 1".into(),
        });
    }
    Ok(())
}
