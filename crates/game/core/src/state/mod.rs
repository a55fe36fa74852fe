//! Authoritative simulation state.
//!
//! This module owns the plain-data structures describing agents and tick
//! bookkeeping. Collaborators read this state freely but mutate it
//! exclusively through [`crate::engine::SimEngine`].
mod agent;
mod behavior;
mod error;

pub use agent::{AgentId, AgentSpawn, AgentState, DwellTimers, PatrolRoute, WanderState};
pub use behavior::Behavior;
pub use error::StateError;

use glam::Vec2;

use crate::config::SimConfig;

/// Player pose as seen by the core. Read-only; sampled once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetState {
    pub position: Vec2,
    pub facing: f32,
}

impl TargetState {
    pub const fn new(position: Vec2, facing: f32) -> Self {
        Self { position, facing }
    }
}

/// Canonical simulation state: the live agent roster plus tick bookkeeping.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimState {
    /// RNG seed fixed at session start; combined with the tick counter and
    /// agent id for every random draw.
    pub seed: u64,
    /// Ticks simulated so far.
    pub ticks: u64,
    /// Sequential agent id allocator (monotonically increasing, never
    /// reused).
    next_agent_id: u32,
    agents: Vec<AgentState>,
}

impl SimState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ticks: 0,
            next_agent_id: 0,
            agents: Vec::new(),
        }
    }

    /// Spawns an agent from a blueprint, allocating its id.
    pub fn spawn(&mut self, spawn: AgentSpawn) -> Result<AgentId, StateError> {
        if self.agents.len() >= SimConfig::MAX_AGENTS {
            return Err(StateError::AgentListFull {
                max: SimConfig::MAX_AGENTS,
            });
        }
        let id = AgentId(self.next_agent_id);
        self.next_agent_id += 1;
        let mut agent = AgentState::new(id, spawn.position);
        agent.facing = spawn.facing;
        agent.speed = spawn.speed;
        agent.vision = spawn.vision;
        agent.patrol = spawn.patrol;
        self.agents.push(agent);
        Ok(id)
    }

    /// Removes an agent (death/despawn). Returns whether it existed.
    pub fn remove(&mut self, id: AgentId) -> bool {
        let before = self.agents.len();
        self.agents.retain(|agent| agent.id != id);
        self.agents.len() != before
    }

    /// Removes every agent (level teardown). Id allocation continues.
    pub fn clear(&mut self) {
        self.agents.clear();
    }

    pub fn agent(&self, id: AgentId) -> Option<&AgentState> {
        self.agents.iter().find(|agent| agent.id == id)
    }

    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut AgentState> {
        self.agents.iter_mut().find(|agent| agent.id == id)
    }

    pub fn agents(&self) -> &[AgentState] {
        &self.agents
    }

    pub(crate) fn agents_mut(&mut self) -> &mut [AgentState] {
        &mut self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
