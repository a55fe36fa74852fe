use glam::Vec2;

/// Static grid oracle exposing immutable tile data.
///
/// The core never owns level geometry; it queries it through this trait.
/// Implementations must be cheap to call repeatedly within a tick.
pub trait GridOracle: Send + Sync {
    fn dimensions(&self) -> GridDimensions;
    fn tile(&self, coord: TileCoord) -> Option<TileInfo>;

    /// Tile under a pixel-space point, if inside the grid.
    fn tile_at_point(&self, point: Vec2) -> Option<TileInfo> {
        self.dimensions()
            .coord_at(point)
            .and_then(|coord| self.tile(coord))
    }

    fn contains(&self, coord: TileCoord) -> bool {
        self.dimensions().contains(coord)
    }
}

/// Integer tile coordinate (column, row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileCoord {
    pub x: i32,
    pub y: i32,
}

impl TileCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Grid extent in tiles plus the pixel size of one tile.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub width: u32,
    pub height: u32,
    pub tile_size: f32,
}

impl GridDimensions {
    pub const fn new(width: u32, height: u32, tile_size: f32) -> Self {
        Self {
            width,
            height,
            tile_size,
        }
    }

    pub fn contains(&self, coord: TileCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.x < self.width as i32
            && coord.y < self.height as i32
    }

    /// Coordinate of the tile containing a pixel-space point.
    ///
    /// Tiles are half-open boxes: the min edge belongs to a tile, the max
    /// edge to its neighbour. Points outside the grid return `None`.
    pub fn coord_at(&self, point: Vec2) -> Option<TileCoord> {
        if !point.is_finite() || self.tile_size <= 0.0 {
            return None;
        }
        let coord = TileCoord::new(
            (point.x / self.tile_size).floor() as i32,
            (point.y / self.tile_size).floor() as i32,
        );
        self.contains(coord).then_some(coord)
    }

    /// Pixel-space bounding box of a tile coordinate.
    pub fn bounds_of(&self, coord: TileCoord) -> TileBounds {
        let min = Vec2::new(
            coord.x as f32 * self.tile_size,
            coord.y as f32 * self.tile_size,
        );
        TileBounds::new(min, min + Vec2::splat(self.tile_size))
    }

    pub fn tile_center(&self, coord: TileCoord) -> Vec2 {
        self.bounds_of(coord).center()
    }

    pub fn tile_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Pixel-space axis-aligned bounding box of a tile.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl TileBounds {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn center(self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// Snapshot of one tile as seen by the core.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileInfo {
    /// Solid for line-of-sight queries.
    pub blocks_sight: bool,
    /// Solid for movement.
    pub collides: bool,
    /// Pixel-space bounding box.
    pub bounds: TileBounds,
    /// Loader-defined tile-type code (spawn, patrol, exit markers).
    pub type_code: u16,
}

/// Zero-sized grid used when no level is loaded. Every query misses, so
/// raycasts find no blockers and agents stay put.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyGrid;

impl GridOracle for EmptyGrid {
    fn dimensions(&self) -> GridDimensions {
        GridDimensions::new(0, 0, 0.0)
    }

    fn tile(&self, _coord: TileCoord) -> Option<TileInfo> {
        None
    }
}
