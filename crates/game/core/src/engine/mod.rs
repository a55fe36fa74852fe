//! Simulation engine: the only writer of [`SimState`].
//!
//! Each tick runs the same fixed pipeline per agent — sight the target,
//! advance the behavior ladder, pick a movement intent, integrate it
//! against the grid. All world reads go through the [`Env`] oracles, so a
//! tick is a pure function of (state, env, target, dt).
mod locomotion;
mod machine;

pub use locomotion::MoveIntent;

use crate::env::{Env, compute_seed};
use crate::state::{AgentId, Behavior, SimState, TargetState};
use crate::vision;

/// One agent's behavior transition during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BehaviorChange {
    pub agent: AgentId,
    pub from: Behavior,
    pub to: Behavior,
}

/// Borrows the state for the duration of a tick batch.
pub struct SimEngine<'a> {
    state: &'a mut SimState,
}

impl<'a> SimEngine<'a> {
    pub fn new(state: &'a mut SimState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &SimState {
        self.state
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// Returns the behavior transitions that occurred, in agent order.
    /// Non-positive or non-finite `dt` is a no-op.
    pub fn tick(&mut self, env: &Env<'_>, target: &TargetState, dt: f32) -> Vec<BehaviorChange> {
        if !dt.is_finite() || dt <= 0.0 {
            return Vec::new();
        }
        self.state.ticks += 1;
        let seed = self.state.seed;
        let tick = self.state.ticks;
        let target_valid = target.position.is_finite();

        let mut changes = Vec::new();
        for agent in self.state.agents_mut() {
            let before = agent.behavior;
            // a corrupted position cannot sight anything or move, but the
            // behavior ladder still runs (and decays) normally
            let position_valid = agent.position.is_finite();

            let sighted = position_valid
                && target_valid
                && vision::sight_check(
                    env.grid,
                    agent.position,
                    agent.facing,
                    agent.vision,
                    target.position,
                )
                .is_some();
            machine::advance(agent, sighted, target.position, env.config, dt);
            if agent.behavior.tracks_target() && agent.last_known_target.is_none() {
                // tracking states always carry a goal
                agent.behavior = Behavior::Patrol;
                agent.timers.clear();
            }

            if position_valid {
                let seeds = [
                    compute_seed(seed, tick, agent.id.0, 0),
                    compute_seed(seed, tick, agent.id.0, 1),
                ];
                let intent = locomotion::intent(agent, env, seeds, dt);
                locomotion::apply_movement(agent, env.grid, intent, dt);
            }

            if agent.behavior != before {
                changes.push(BehaviorChange {
                    agent: agent.id,
                    from: before,
                    to: agent.behavior,
                });
            }
        }
        changes
    }
}
