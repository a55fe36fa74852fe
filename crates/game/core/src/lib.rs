//! Deterministic stealth-perception logic shared across clients.
//!
//! `umbra-core` defines the canonical rules (vision, behavior, movement,
//! darkness) and exposes pure APIs that can be reused by the runtime and by
//! offline tools. All state mutation flows through [`engine::SimEngine`];
//! world geometry and randomness come in through the [`env`] oracle traits,
//! so the crate itself holds no I/O, no clocks, and no global state.
pub mod config;
pub mod darkness;
pub mod engine;
pub mod env;
pub mod math;
pub mod raycast;
pub mod state;
pub mod view;
pub mod vision;
pub use config::SimConfig;
pub use darkness::DarknessParams;
pub use engine::{BehaviorChange, MoveIntent, SimEngine};
pub use env::{
    EmptyGrid, Env, GridDimensions, GridOracle, PcgRng, RngOracle, TileBounds, TileCoord, TileInfo,
    compute_seed,
};
pub use raycast::RayHit;
pub use state::{
    AgentId, AgentSpawn, AgentState, Behavior, DwellTimers, PatrolRoute, SimState, StateError,
    TargetState, WanderState,
};
pub use view::{AgentView, MinimapColor, agent_view, alert_summary, capture_distance};
pub use vision::{SightSample, VisionParams};
