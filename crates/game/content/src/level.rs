//! Level model: authored tile kinds and the dense grid oracle built from
//! them.
//!
//! Authoring works in tile kinds (`Wall`, `Spawn`, `Patrol(n)`, ...); the
//! simulation only ever sees the [`umbra_core::GridOracle`] view, so marker
//! tiles (spawn points, patrol waypoints) behave as plain floor at runtime.

use glam::Vec2;

use umbra_core::{GridDimensions, GridOracle, TileCoord, TileInfo};

/// Authored tile kind, as written in level files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    #[default]
    Floor,
    Wall,
    /// Agent spawn marker; walkable.
    Spawn,
    /// Patrol waypoint marker; the index orders the shared route.
    Patrol(u8),
    /// Level exit marker; walkable.
    Exit,
    /// Game-specific tile carried through to [`TileInfo::type_code`]
    /// untouched.
    Custom(u16),
}

impl TileKind {
    /// Only walls stop sight lines.
    pub const fn blocks_sight(self) -> bool {
        matches!(self, TileKind::Wall)
    }

    /// Only walls stop movement.
    pub const fn collides(self) -> bool {
        matches!(self, TileKind::Wall)
    }

    /// Stable numeric code exposed to renderers through [`TileInfo`].
    ///
    /// Patrol markers map into a reserved block above 0x100 so they never
    /// collide with the fixed kinds; `Custom` passes its code through.
    pub const fn type_code(self) -> u16 {
        match self {
            TileKind::Floor => 0,
            TileKind::Wall => 1,
            TileKind::Spawn => 2,
            TileKind::Exit => 3,
            TileKind::Patrol(index) => 0x100 + index as u16,
            TileKind::Custom(code) => code,
        }
    }
}

/// Dense row-major tile grid implementing the core's grid oracle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelGrid {
    dimensions: GridDimensions,
    tiles: Vec<TileKind>,
}

impl LevelGrid {
    /// An all-floor grid of the given size.
    pub fn filled(width: u32, height: u32, tile_size: f32) -> Self {
        let dimensions = GridDimensions::new(width, height, tile_size);
        Self {
            tiles: vec![TileKind::Floor; dimensions.tile_count()],
            dimensions,
        }
    }

    /// Overwrites one tile. Out-of-bounds coordinates are ignored.
    pub fn set(&mut self, coord: TileCoord, kind: TileKind) {
        if let Some(index) = self.index_of(coord) {
            self.tiles[index] = kind;
        }
    }

    pub fn kind_at(&self, coord: TileCoord) -> Option<TileKind> {
        self.index_of(coord).map(|index| self.tiles[index])
    }

    fn index_of(&self, coord: TileCoord) -> Option<usize> {
        if !self.dimensions.contains(coord) {
            return None;
        }
        Some(coord.y as usize * self.dimensions.width as usize + coord.x as usize)
    }

    /// Tiles paired with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (TileCoord, TileKind)> + '_ {
        let width = self.dimensions.width as usize;
        self.tiles.iter().enumerate().map(move |(index, kind)| {
            let coord = TileCoord::new((index % width) as i32, (index / width) as i32);
            (coord, *kind)
        })
    }
}

impl GridOracle for LevelGrid {
    fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    fn tile(&self, coord: TileCoord) -> Option<TileInfo> {
        let kind = self.kind_at(coord)?;
        Some(TileInfo {
            blocks_sight: kind.blocks_sight(),
            collides: kind.collides(),
            bounds: self.dimensions.bounds_of(coord),
            type_code: kind.type_code(),
        })
    }
}

/// One agent to place, extracted from a `Spawn` marker.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnSpec {
    /// Tile-center spawn position, in pixels.
    pub position: Vec2,
    /// Patrol route for this agent, in marker-index order.
    pub patrol: Vec<Vec2>,
}

/// A loaded level: the grid plus everything derived from marker tiles.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelData {
    pub grid: LevelGrid,
    pub spawns: Vec<SpawnSpec>,
}

impl LevelData {
    /// Derives spawn specs from the grid's marker tiles.
    ///
    /// Every `Spawn` marker becomes one agent; all agents share the route
    /// formed by the `Patrol(n)` markers sorted by `n` (scan order breaks
    /// ties). A level without patrol markers produces wandering agents.
    pub fn from_grid(grid: LevelGrid) -> Self {
        let dimensions = grid.dimensions();
        let mut spawn_points = Vec::new();
        let mut waypoints = Vec::new();
        for (coord, kind) in grid.iter() {
            match kind {
                TileKind::Spawn => spawn_points.push(dimensions.tile_center(coord)),
                TileKind::Patrol(index) => waypoints.push((index, dimensions.tile_center(coord))),
                _ => {}
            }
        }
        waypoints.sort_by_key(|(index, _)| *index);
        let patrol: Vec<Vec2> = waypoints.into_iter().map(|(_, point)| point).collect();

        let spawns = spawn_points
            .into_iter()
            .map(|position| SpawnSpec {
                position,
                patrol: patrol.clone(),
            })
            .collect();
        Self { grid, spawns }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_walls_block() {
        assert!(TileKind::Wall.blocks_sight());
        assert!(TileKind::Wall.collides());
        for kind in [
            TileKind::Floor,
            TileKind::Spawn,
            TileKind::Patrol(3),
            TileKind::Exit,
            TileKind::Custom(42),
        ] {
            assert!(!kind.blocks_sight(), "{kind:?}");
            assert!(!kind.collides(), "{kind:?}");
        }
    }

    #[test]
    fn type_codes_are_distinct_per_kind() {
        assert_eq!(TileKind::Floor.type_code(), 0);
        assert_eq!(TileKind::Wall.type_code(), 1);
        assert_eq!(TileKind::Patrol(0).type_code(), 0x100);
        assert_eq!(TileKind::Patrol(5).type_code(), 0x105);
        assert_eq!(TileKind::Custom(9000).type_code(), 9000);
    }

    #[test]
    fn grid_exposes_oracle_view() {
        let mut grid = LevelGrid::filled(4, 3, 16.0);
        grid.set(TileCoord::new(2, 1), TileKind::Wall);
        grid.set(TileCoord::new(0, 0), TileKind::Spawn);

        let wall = grid.tile(TileCoord::new(2, 1)).unwrap();
        assert!(wall.blocks_sight && wall.collides);
        assert_eq!(wall.type_code, 1);
        // markers read as walkable floor with their own code
        let spawn = grid.tile(TileCoord::new(0, 0)).unwrap();
        assert!(!spawn.blocks_sight && !spawn.collides);
        assert_eq!(spawn.type_code, 2);

        assert!(grid.tile(TileCoord::new(4, 0)).is_none());
        assert!(grid.tile(TileCoord::new(-1, 0)).is_none());
    }

    #[test]
    fn out_of_bounds_set_is_ignored() {
        let mut grid = LevelGrid::filled(2, 2, 16.0);
        let copy = grid.clone();
        grid.set(TileCoord::new(5, 5), TileKind::Wall);
        assert_eq!(grid, copy);
    }

    #[test]
    fn spawns_share_the_sorted_patrol_route() {
        let mut grid = LevelGrid::filled(6, 2, 16.0);
        grid.set(TileCoord::new(0, 0), TileKind::Spawn);
        grid.set(TileCoord::new(5, 1), TileKind::Spawn);
        // authored out of order on purpose
        grid.set(TileCoord::new(4, 0), TileKind::Patrol(1));
        grid.set(TileCoord::new(1, 0), TileKind::Patrol(0));

        let level = LevelData::from_grid(grid);
        assert_eq!(level.spawns.len(), 2);
        let route = &level.spawns[0].patrol;
        assert_eq!(
            route,
            &vec![Vec2::new(24.0, 8.0), Vec2::new(72.0, 8.0)]
        );
        assert_eq!(level.spawns[1].patrol, *route);
        assert_eq!(level.spawns[0].position, Vec2::new(8.0, 8.0));
        assert_eq!(level.spawns[1].position, Vec2::new(88.0, 24.0));
    }

    #[test]
    fn level_without_markers_has_no_spawns() {
        let level = LevelData::from_grid(LevelGrid::filled(3, 3, 16.0));
        assert!(level.spawns.is_empty());
    }
}
