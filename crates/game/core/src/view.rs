//! Read-only projections of simulation state for rendering layers.
//!
//! Nothing here mutates state; everything is recomputed per frame from the
//! authoritative agent data.

use glam::Vec2;

use crate::env::GridOracle;
use crate::state::{AgentId, AgentState, Behavior, SimState, TargetState};
use crate::vision;

/// Indicator color for an agent on the minimap / debug overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MinimapColor {
    Green,
    Yellow,
    Orange,
    Red,
    Blue,
}

impl Behavior {
    /// Color convention: calm greens through alert red, blue on the walk
    /// back.
    pub const fn minimap_color(self) -> MinimapColor {
        match self {
            Behavior::Patrol => MinimapColor::Green,
            Behavior::Suspicious => MinimapColor::Yellow,
            Behavior::Searching => MinimapColor::Orange,
            Behavior::Alert => MinimapColor::Red,
            Behavior::Returning => MinimapColor::Blue,
        }
    }
}

/// Per-agent render payload for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentView {
    pub id: AgentId,
    pub position: Vec2,
    pub facing: f32,
    pub behavior: Behavior,
    pub color: MinimapColor,
    /// Occlusion-clipped vision-cone polygon (apex first).
    pub cone: Vec<Vec2>,
}

/// Builds the render payload for one agent.
pub fn agent_view(grid: &dyn GridOracle, agent: &AgentState, cone_segments: u32) -> AgentView {
    AgentView {
        id: agent.id,
        position: agent.position,
        facing: agent.facing,
        behavior: agent.behavior,
        color: agent.behavior.minimap_color(),
        cone: vision::cone_polygon(
            grid,
            agent.position,
            agent.facing,
            agent.vision,
            cone_segments,
        ),
    }
}

/// Highest-priority behavior across the roster; `Patrol` when empty.
///
/// Drives the global alert indicator (and any music/ambience cue keyed on
/// it).
pub fn alert_summary(state: &SimState) -> Behavior {
    state
        .agents()
        .iter()
        .map(|agent| agent.behavior)
        .max_by_key(|behavior| behavior.priority())
        .unwrap_or_default()
}

/// Distance between an agent and the player, for capture checks.
pub fn capture_distance(agent: &AgentState, target: &TargetState) -> f32 {
    agent.position.distance(target.position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::EmptyGrid;
    use crate::state::AgentSpawn;

    #[test]
    fn colors_follow_the_ladder() {
        assert_eq!(Behavior::Patrol.minimap_color(), MinimapColor::Green);
        assert_eq!(Behavior::Suspicious.minimap_color(), MinimapColor::Yellow);
        assert_eq!(Behavior::Searching.minimap_color(), MinimapColor::Orange);
        assert_eq!(Behavior::Alert.minimap_color(), MinimapColor::Red);
        assert_eq!(Behavior::Returning.minimap_color(), MinimapColor::Blue);
    }

    #[test]
    fn summary_takes_the_highest_priority() {
        let mut state = SimState::new(0);
        for _ in 0..3 {
            state.spawn(AgentSpawn::at(Vec2::ZERO)).unwrap();
        }
        assert_eq!(alert_summary(&state), Behavior::Patrol);

        let ids: Vec<_> = state.agents().iter().map(|a| a.id).collect();
        state.agent_mut(ids[0]).unwrap().behavior = Behavior::Returning;
        state.agent_mut(ids[2]).unwrap().behavior = Behavior::Searching;
        assert_eq!(alert_summary(&state), Behavior::Searching);

        state.agent_mut(ids[1]).unwrap().behavior = Behavior::Alert;
        assert_eq!(alert_summary(&state), Behavior::Alert);
    }

    #[test]
    fn empty_roster_summarizes_as_patrol() {
        let state = SimState::new(0);
        assert_eq!(alert_summary(&state), Behavior::Patrol);
    }

    #[test]
    fn view_mirrors_agent_state() {
        let mut state = SimState::new(0);
        let id = state
            .spawn(AgentSpawn::at(Vec2::new(50.0, 60.0)).with_facing(1.0))
            .unwrap();
        let agent = state.agent(id).unwrap();
        let view = agent_view(&EmptyGrid, agent, 8);
        assert_eq!(view.id, id);
        assert_eq!(view.position, Vec2::new(50.0, 60.0));
        assert_eq!(view.color, MinimapColor::Green);
        assert_eq!(view.cone.len(), 10);
        assert_eq!(view.cone[0], agent.position);
    }

    #[test]
    fn capture_distance_is_euclidean() {
        let mut state = SimState::new(0);
        let id = state.spawn(AgentSpawn::at(Vec2::new(3.0, 0.0))).unwrap();
        let target = TargetState::new(Vec2::new(0.0, 4.0), 0.0);
        let agent = state.agent(id).unwrap();
        assert!((capture_distance(agent, &target) - 5.0).abs() < 1e-6);
    }
}
