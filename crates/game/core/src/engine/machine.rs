//! Behavior transition rules.
//!
//! The transition function is pure in (current behavior, accumulated
//! timers, this tick's sighting, delta time): there are no scheduled
//! callbacks, so level teardown can never leave a timer dangling.
//!
//! Climbing and decaying are asymmetric. While sighted, the agent jumps
//! directly to whatever alert level the accumulated `seen` dwell supports,
//! except from `Patrol`: a first detection always lands on `Suspicious`,
//! whatever the tick length. While unsighted, the `seen` accumulator is
//! frozen (not reset), and the ladder steps down one level per decay
//! window, so a briefly lost target is re-acquired at full alertness
//! instead of restarting from zero.

use glam::Vec2;

use crate::config::SimConfig;
use crate::state::{AgentState, Behavior};

/// Advances one agent's behavior for this tick.
///
/// `sighted` is the vision system's verdict for the tick; `target_position`
/// is only recorded while sighted (it becomes the last-known position).
pub(crate) fn advance(
    agent: &mut AgentState,
    sighted: bool,
    target_position: Vec2,
    config: &SimConfig,
    dt: f32,
) {
    if sighted {
        agent.timers.seen += dt;
        agent.timers.unseen = 0.0;
        agent.last_known_target = Some(target_position);
        agent.behavior = if agent.behavior == Behavior::Patrol {
            // a first detection never skips the bottom of the ladder
            Behavior::Suspicious
        } else {
            level_for_dwell(agent.timers.seen, config)
        };
        return;
    }

    agent.timers.unseen += dt;
    match agent.behavior {
        Behavior::Patrol => {
            agent.timers.seen = 0.0;
        }
        Behavior::Suspicious => {
            if agent.timers.unseen >= config.decay_timeout {
                settle_to_patrol(agent);
            }
        }
        Behavior::Searching => {
            if agent.timers.unseen >= config.decay_timeout {
                agent.behavior = Behavior::Suspicious;
                agent.timers.unseen = 0.0;
            }
        }
        Behavior::Alert => {
            if agent.timers.unseen >= config.lost_timeout {
                // last_known_target stays frozen at the last sighted tick
                agent.behavior = Behavior::Returning;
                agent.timers.unseen = 0.0;
            }
        }
        Behavior::Returning => match agent.last_known_target {
            Some(goal) if agent.position.distance(goal) < config.arrival_radius => {
                settle_to_patrol(agent);
            }
            Some(_) => {}
            None => settle_to_patrol(agent),
        },
    }
}

/// Alert level supported by the accumulated visibility dwell.
fn level_for_dwell(seen: f32, config: &SimConfig) -> Behavior {
    if seen >= config.suspicious_dwell + config.searching_dwell {
        Behavior::Alert
    } else if seen >= config.suspicious_dwell {
        Behavior::Searching
    } else {
        Behavior::Suspicious
    }
}

fn settle_to_patrol(agent: &mut AgentState) {
    agent.behavior = Behavior::Patrol;
    agent.last_known_target = None;
    agent.timers.clear();
}
