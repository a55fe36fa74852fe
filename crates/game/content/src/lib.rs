//! Data-driven level content and loaders.
//!
//! This crate houses the authored-content model and provides loaders for
//! RON/TOML data files:
//! - Level layouts: tile kinds, spawn markers, patrol markers (RON)
//! - Simulation tuning (TOML)
//!
//! Content is consumed by the runtime as grid oracles and spawn specs; it
//! never appears in simulation state. All loaders use umbra-core types
//! directly with serde for deserialization.

pub mod level;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use level::{LevelData, LevelGrid, SpawnSpec, TileKind};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LevelLoader, LoadResult};
