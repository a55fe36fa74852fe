//! Movement intent and integration.
//!
//! Translates the current behavior into a concrete velocity and facing,
//! then applies it against the grid with per-axis collision. Wandering
//! agents bounce: a blocked axis reflects that component of the drift
//! direction and restarts the redirection timer.

use glam::Vec2;

use crate::env::{Env, GridOracle};
use crate::math::{direction_angle, wrap_angle};
use crate::state::{AgentState, Behavior};

/// Velocity plus optional facing produced for one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveIntent {
    /// Pixels per second.
    pub velocity: Vec2,
    /// New facing angle; `None` leaves the current facing untouched
    /// (agent already at its goal).
    pub facing: Option<f32>,
}

impl MoveIntent {
    pub const fn idle() -> Self {
        Self {
            velocity: Vec2::ZERO,
            facing: None,
        }
    }
}

/// Computes this tick's movement intent.
///
/// `redirect_seeds` feed the wander redirection draws (angle, period);
/// the engine derives them from (session seed, tick, agent id).
pub(crate) fn intent(
    agent: &mut AgentState,
    env: &Env<'_>,
    redirect_seeds: [u64; 2],
    dt: f32,
) -> MoveIntent {
    match agent.behavior {
        Behavior::Patrol => patrol_intent(agent, env, redirect_seeds, dt),
        Behavior::Suspicious | Behavior::Searching | Behavior::Alert | Behavior::Returning => {
            pursue_intent(agent)
        }
    }
}

/// Full-speed seek toward the last tracked target position.
fn pursue_intent(agent: &AgentState) -> MoveIntent {
    let Some(goal) = agent.last_known_target else {
        return MoveIntent::idle();
    };
    seek(agent.position, goal, agent.speed)
}

fn patrol_intent(
    agent: &mut AgentState,
    env: &Env<'_>,
    redirect_seeds: [u64; 2],
    dt: f32,
) -> MoveIntent {
    if agent.patrol.is_empty() {
        // no patrol points assigned: wander with periodic redirection
        return wander_intent(agent, env, redirect_seeds, dt);
    }
    if agent.patrol.len() < 2 {
        // a degenerate route is a guard post, not an error
        return MoveIntent::idle();
    }
    if let Some(goal) = agent.patrol.current() {
        if agent.position.distance(goal) < env.config.arrival_radius {
            agent.patrol.advance();
        }
    }
    match agent.patrol.current() {
        Some(goal) => seek(agent.position, goal, agent.speed),
        None => MoveIntent::idle(),
    }
}

fn wander_intent(
    agent: &mut AgentState,
    env: &Env<'_>,
    redirect_seeds: [u64; 2],
    dt: f32,
) -> MoveIntent {
    let wander = &mut agent.wander;
    wander.elapsed += dt;
    if wander.elapsed >= wander.period {
        let angle = env
            .rng
            .range_f32(redirect_seeds[0], -std::f32::consts::PI, std::f32::consts::PI);
        wander.direction = Vec2::from_angle(angle);
        wander.period = env.rng.range_f32(
            redirect_seeds[1],
            env.config.wander_redirect_min,
            env.config.wander_redirect_max,
        );
        wander.elapsed = 0.0;
    }
    MoveIntent {
        velocity: wander.direction * agent.speed * env.config.wander_speed_factor,
        facing: Some(direction_angle(wander.direction)),
    }
}

/// Normalized seek: direction * speed, facing along the travel direction.
fn seek(from: Vec2, to: Vec2, speed: f32) -> MoveIntent {
    let delta = to - from;
    if delta.length_squared() <= f32::EPSILON {
        return MoveIntent::idle();
    }
    let direction = delta.normalize();
    MoveIntent {
        velocity: direction * speed,
        facing: Some(direction_angle(direction)),
    }
}

/// Applies an intent to the agent with per-axis collision against the grid.
///
/// Each axis is tested independently so agents slide along walls. While
/// wandering, a blocked axis reflects the drift direction on that axis and
/// resets the redirection timer so a fresh direction is not drawn
/// immediately after the bounce.
pub(crate) fn apply_movement(
    agent: &mut AgentState,
    grid: &dyn GridOracle,
    intent: MoveIntent,
    dt: f32,
) {
    if let Some(facing) = intent.facing {
        agent.facing = wrap_angle(facing);
    }
    let step = intent.velocity * dt;
    if !step.is_finite() || step == Vec2::ZERO {
        return;
    }

    let mut blocked = (false, false);

    let next_x = Vec2::new(agent.position.x + step.x, agent.position.y);
    if step.x != 0.0 {
        if is_blocked(grid, next_x) {
            blocked.0 = true;
        } else {
            agent.position.x = next_x.x;
        }
    }
    let next_y = Vec2::new(agent.position.x, agent.position.y + step.y);
    if step.y != 0.0 {
        if is_blocked(grid, next_y) {
            blocked.1 = true;
        } else {
            agent.position.y = next_y.y;
        }
    }

    let wandering = agent.behavior == Behavior::Patrol && agent.patrol.is_empty();
    if wandering && (blocked.0 || blocked.1) {
        if blocked.0 {
            agent.wander.direction.x = -agent.wander.direction.x;
        }
        if blocked.1 {
            agent.wander.direction.y = -agent.wander.direction.y;
        }
        agent.wander.elapsed = 0.0;
    }
}

/// Movement is blocked by colliding tiles and by the grid edge.
fn is_blocked(grid: &dyn GridOracle, point: Vec2) -> bool {
    match grid.tile_at_point(point) {
        Some(tile) => tile.collides,
        None => true,
    }
}
