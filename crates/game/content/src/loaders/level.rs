//! Level data loader.
//!
//! Levels are RON files listing only the non-floor tiles; everything else
//! defaults to walkable floor. Spawn and patrol markers are resolved into
//! [`SpawnSpec`]s by [`LevelData::from_grid`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use umbra_core::TileCoord;

use crate::level::{LevelData, LevelGrid, TileKind};
use crate::loaders::{LoadResult, read_file};

/// Level structure for RON files (sparse, floor-by-default).
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LevelRon {
    dimensions: (u32, u32),
    tile_size: f32,
    tiles: Vec<(i32, i32, TileKind)>, // (x, y, kind)
}

/// Loader for level data from RON files.
pub struct LevelLoader;

impl LevelLoader {
    /// Load a level from a RON file.
    ///
    /// Fails on an unparsable file, zero-sized dimensions, a non-positive
    /// tile size, or a tile outside the declared dimensions.
    pub fn load(path: &Path) -> LoadResult<LevelData> {
        let content = read_file(path)?;
        let data: LevelRon = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level RON: {}", e))?;

        let (width, height) = data.dimensions;
        if width == 0 || height == 0 {
            return Err(anyhow::anyhow!(
                "Level {} has zero-sized dimensions {}x{}",
                path.display(),
                width,
                height
            ));
        }
        if !data.tile_size.is_finite() || data.tile_size <= 0.0 {
            return Err(anyhow::anyhow!(
                "Level {} has invalid tile size {}",
                path.display(),
                data.tile_size
            ));
        }

        let mut grid = LevelGrid::filled(width, height, data.tile_size);
        for (x, y, kind) in data.tiles {
            let coord = TileCoord::new(x, y);
            if grid.kind_at(coord).is_none() {
                return Err(anyhow::anyhow!(
                    "Level {} places a tile at ({}, {}) outside {}x{}",
                    path.display(),
                    x,
                    y,
                    width,
                    height
                ));
            }
            grid.set(coord, kind);
        }

        Ok(LevelData::from_grid(grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use std::io::Write;
    use umbra_core::GridOracle;

    fn write_level(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write level");
        file
    }

    #[test]
    fn loads_a_sparse_level() {
        let file = write_level(
            r#"(
                dimensions: (8, 4),
                tile_size: 16.0,
                tiles: [
                    (3, 0, Wall),
                    (3, 1, Wall),
                    (0, 0, Spawn),
                    (1, 3, Patrol(0)),
                    (6, 3, Patrol(1)),
                    (7, 0, Exit),
                ],
            )"#,
        );
        let level = LevelLoader::load(file.path()).expect("load");

        let dims = level.grid.dimensions();
        assert_eq!((dims.width, dims.height), (8, 4));
        assert!(level.grid.tile(TileCoord::new(3, 0)).unwrap().blocks_sight);
        // unspecified tiles default to floor
        assert!(!level.grid.tile(TileCoord::new(5, 2)).unwrap().collides);

        assert_eq!(level.spawns.len(), 1);
        assert_eq!(level.spawns[0].position, Vec2::new(8.0, 8.0));
        assert_eq!(
            level.spawns[0].patrol,
            vec![Vec2::new(24.0, 56.0), Vec2::new(104.0, 56.0)]
        );
    }

    #[test]
    fn rejects_out_of_bounds_tiles() {
        let file = write_level(
            r#"(
                dimensions: (4, 4),
                tile_size: 16.0,
                tiles: [(9, 0, Wall)],
            )"#,
        );
        let err = LevelLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("outside"));
    }

    #[test]
    fn rejects_degenerate_geometry() {
        let zero = write_level(
            r#"(dimensions: (0, 4), tile_size: 16.0, tiles: [])"#,
        );
        assert!(LevelLoader::load(zero.path()).is_err());

        let flat = write_level(
            r#"(dimensions: (4, 4), tile_size: 0.0, tiles: [])"#,
        );
        assert!(LevelLoader::load(flat.path()).is_err());
    }

    #[test]
    fn rejects_malformed_ron() {
        let file = write_level("this is not a level");
        assert!(LevelLoader::load(file.path()).is_err());
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = LevelLoader::load(Path::new("/nonexistent/level.ron")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/level.ron"));
    }
}
