use std::fmt;

use arrayvec::ArrayVec;
use glam::Vec2;

use crate::config::SimConfig;
use crate::state::Behavior;
use crate::vision::VisionParams;

/// Unique identifier for a live agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered patrol waypoints, traversed start-to-end-to-start (ping-pong).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatrolRoute {
    points: ArrayVec<Vec2, { SimConfig::MAX_PATROL_POINTS }>,
    cursor: usize,
    forward: bool,
}

impl PatrolRoute {
    /// Builds a route from the given waypoints; excess points beyond
    /// capacity are dropped.
    pub fn new(points: impl IntoIterator<Item = Vec2>) -> Self {
        let mut route = ArrayVec::new();
        for point in points {
            if route.try_push(point).is_err() {
                break;
            }
        }
        Self {
            points: route,
            cursor: 0,
            forward: true,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Waypoint the agent is currently heading for.
    pub fn current(&self) -> Option<Vec2> {
        self.points.get(self.cursor).copied()
    }

    /// Steps the cursor to the next waypoint, reversing at either end.
    pub fn advance(&mut self) {
        if self.points.len() < 2 {
            return;
        }
        let last = self.points.len() - 1;
        if self.forward {
            if self.cursor >= last {
                self.forward = false;
                self.cursor = last.saturating_sub(1);
            } else {
                self.cursor += 1;
            }
        } else if self.cursor == 0 {
            self.forward = true;
            self.cursor = 1;
        } else {
            self.cursor -= 1;
        }
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
        self.forward = true;
    }
}

/// Wander drift bookkeeping.
///
/// `period` starts at zero so a freshly spawned wanderer picks a random
/// direction on its first tick.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WanderState {
    pub direction: Vec2,
    pub elapsed: f32,
    pub period: f32,
}

impl Default for WanderState {
    fn default() -> Self {
        Self {
            direction: Vec2::X,
            elapsed: 0.0,
            period: 0.0,
        }
    }
}

/// Accumulated visibility timers driving dwell transitions.
///
/// `seen` survives brief sight lapses so re-acquisition can jump straight
/// back to the alert level the accumulated dwell supports; it only clears
/// when the agent settles back into `Patrol`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DwellTimers {
    /// Accumulated seconds of target visibility.
    pub seen: f32,
    /// Seconds since the target was last visible.
    pub unseen: f32,
}

impl DwellTimers {
    pub fn clear(&mut self) {
        self.seen = 0.0;
        self.unseen = 0.0;
    }
}

/// Per-agent simulation state. Plain data; mutated only by the engine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    pub id: AgentId,
    /// Pixel-space position.
    pub position: Vec2,
    /// Facing angle in radians, normalized to `[-PI, PI]`.
    pub facing: f32,
    /// Full movement speed, pixels per second.
    pub speed: f32,
    pub vision: VisionParams,
    pub behavior: Behavior,
    /// Target position at the most recent sighted tick.
    ///
    /// Present exactly while `behavior.tracks_target()`; cleared when the
    /// agent settles back into `Patrol`.
    pub last_known_target: Option<Vec2>,
    pub patrol: PatrolRoute,
    pub wander: WanderState,
    pub timers: DwellTimers,
}

impl AgentState {
    pub fn new(id: AgentId, position: Vec2) -> Self {
        Self {
            id,
            position,
            facing: 0.0,
            speed: SimConfig::DEFAULT_AGENT_SPEED,
            vision: VisionParams::default(),
            behavior: Behavior::Patrol,
            last_known_target: None,
            patrol: PatrolRoute::empty(),
            wander: WanderState::default(),
            timers: DwellTimers::default(),
        }
    }
}

/// Blueprint describing one agent to spawn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSpawn {
    pub position: Vec2,
    pub facing: f32,
    pub speed: f32,
    pub vision: VisionParams,
    pub patrol: PatrolRoute,
}

impl AgentSpawn {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            facing: 0.0,
            speed: SimConfig::DEFAULT_AGENT_SPEED,
            vision: VisionParams::default(),
            patrol: PatrolRoute::empty(),
        }
    }

    pub fn with_facing(mut self, facing: f32) -> Self {
        self.facing = facing;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_vision(mut self, vision: VisionParams) -> Self {
        self.vision = vision;
        self
    }

    pub fn with_patrol(mut self, patrol: PatrolRoute) -> Self {
        self.patrol = patrol;
        self
    }
}
