//! Traits describing read-only world data.
//!
//! Oracles expose static level geometry and deterministic randomness. The
//! [`Env`] aggregate bundles them with the active configuration so the
//! engine can reach everything it needs without global state.
mod grid;
mod rng;

pub use grid::{EmptyGrid, GridDimensions, GridOracle, TileBounds, TileCoord, TileInfo};
pub use rng::{PcgRng, RngOracle, compute_seed};

use crate::config::SimConfig;

/// Read-only collaborators threaded into every tick.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    pub grid: &'a dyn GridOracle,
    pub rng: &'a dyn RngOracle,
    pub config: &'a SimConfig,
}

impl<'a> Env<'a> {
    pub fn new(grid: &'a dyn GridOracle, rng: &'a dyn RngOracle, config: &'a SimConfig) -> Self {
        Self { grid, rng, config }
    }
}
