//! Simulation configuration loader.

use std::path::Path;

use umbra_core::SimConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for simulation tuning from TOML files.
///
/// Every field is optional; anything omitted keeps its
/// [`SimConfig::default`] value, so tuning files only list what they
/// change.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<SimConfig> {
        let content = read_file(path)?;
        let config: SimConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
