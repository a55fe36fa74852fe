//! Segment queries against the tile grid.
//!
//! Both vision occlusion and darkness reuse these primitives. Grids are
//! small (tens of thousands of tiles at most), so the raycaster enumerates
//! the tiles in the coordinate rectangle spanned by the segment and keeps
//! the ones whose bounding box the segment actually enters. That stays
//! deterministic for rays running exactly along tile edges, where an
//! incremental grid walker has to pick a side.

use glam::Vec2;

use crate::env::{GridOracle, TileBounds, TileCoord, TileInfo};

/// First sight-blocking tile hit along a segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Distance from the segment origin to the tile's entry point, in pixels.
    pub distance: f32,
    pub coord: TileCoord,
    pub tile: TileInfo,
}

/// All grid tiles the segment `p0 -> p1` passes through, ordered near to
/// far from `p0`. Portions of the segment outside the grid contribute
/// nothing.
pub fn tiles_along(grid: &dyn GridOracle, p0: Vec2, p1: Vec2) -> Vec<(TileCoord, TileInfo)> {
    let mut hits = collect_entries(grid, p0, p1);
    hits.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    hits.into_iter()
        .map(|(_, coord, tile)| (coord, tile))
        .collect()
}

/// The nearest `blocks_sight` tile along the segment, if any.
///
/// No blocker (including a segment entirely outside the grid) returns
/// `None`; callers treat their own max range as the effective distance.
pub fn first_blocker(grid: &dyn GridOracle, p0: Vec2, p1: Vec2) -> Option<RayHit> {
    let length = p0.distance(p1);
    collect_entries(grid, p0, p1)
        .into_iter()
        .filter(|(_, _, tile)| tile.blocks_sight)
        .min_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)))
        .map(|(t, coord, tile)| RayHit {
            distance: t * length,
            coord,
            tile,
        })
}

/// Entry parameter `t` in `[0, 1]` at which the segment first touches the
/// box, or `None` if it misses. Touching an edge or corner counts.
fn segment_entry(p0: Vec2, delta: Vec2, bounds: TileBounds) -> Option<f32> {
    let mut t_min = 0.0f32;
    let mut t_max = 1.0f32;
    for axis in 0..2 {
        let (origin, d, min, max) = if axis == 0 {
            (p0.x, delta.x, bounds.min.x, bounds.max.x)
        } else {
            (p0.y, delta.y, bounds.min.y, bounds.max.y)
        };
        if d.abs() <= f32::EPSILON {
            if origin < min || origin > max {
                return None;
            }
            continue;
        }
        let mut t0 = (min - origin) / d;
        let mut t1 = (max - origin) / d;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_min = t_min.max(t0);
        t_max = t_max.min(t1);
        if t_min > t_max {
            return None;
        }
    }
    Some(t_min)
}

fn collect_entries(grid: &dyn GridOracle, p0: Vec2, p1: Vec2) -> Vec<(f32, TileCoord, TileInfo)> {
    if !p0.is_finite() || !p1.is_finite() {
        return Vec::new();
    }
    let dims = grid.dimensions();
    if dims.tile_size <= 0.0 || dims.width == 0 || dims.height == 0 {
        return Vec::new();
    }
    let delta = p1 - p0;
    let lo = p0.min(p1) / dims.tile_size;
    let hi = p0.max(p1) / dims.tile_size;
    let x0 = (lo.x.floor() as i32).max(0);
    let y0 = (lo.y.floor() as i32).max(0);
    let x1 = (hi.x.floor() as i32).min(dims.width as i32 - 1);
    let y1 = (hi.y.floor() as i32).min(dims.height as i32 - 1);

    let mut entries = Vec::new();
    for y in y0..=y1 {
        for x in x0..=x1 {
            let coord = TileCoord::new(x, y);
            let Some(tile) = grid.tile(coord) else {
                continue;
            };
            if let Some(t) = segment_entry(p0, delta, tile.bounds) {
                entries.push((t, coord, tile));
            }
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::GridDimensions;

    /// Dense grid fixture with a list of wall coordinates.
    struct Fixture {
        dims: GridDimensions,
        walls: Vec<TileCoord>,
    }

    impl Fixture {
        fn open(width: u32, height: u32) -> Self {
            Self {
                dims: GridDimensions::new(width, height, 16.0),
                walls: Vec::new(),
            }
        }

        fn with_wall(mut self, x: i32, y: i32) -> Self {
            self.walls.push(TileCoord::new(x, y));
            self
        }
    }

    impl GridOracle for Fixture {
        fn dimensions(&self) -> GridDimensions {
            self.dims
        }
        fn tile(&self, coord: TileCoord) -> Option<TileInfo> {
            if !self.dims.contains(coord) {
                return None;
            }
            let solid = self.walls.contains(&coord);
            Some(TileInfo {
                blocks_sight: solid,
                collides: solid,
                bounds: self.dims.bounds_of(coord),
                type_code: 0,
            })
        }
    }

    #[test]
    fn open_segment_has_no_blocker() {
        let grid = Fixture::open(10, 10);
        assert!(first_blocker(&grid, Vec2::new(8.0, 8.0), Vec2::new(140.0, 8.0)).is_none());
    }

    #[test]
    fn tiles_along_orders_near_to_far() {
        let grid = Fixture::open(10, 1);
        let tiles = tiles_along(&grid, Vec2::new(8.0, 8.0), Vec2::new(56.0, 8.0));
        let xs: Vec<i32> = tiles.iter().map(|(c, _)| c.x).collect();
        assert_eq!(xs, vec![0, 1, 2, 3]);
    }

    #[test]
    fn first_blocker_reports_entry_distance() {
        // wall at column 3 (x in [48, 64)); ray along the row center
        let grid = Fixture::open(10, 1).with_wall(3, 0);
        let hit = first_blocker(&grid, Vec2::new(8.0, 8.0), Vec2::new(150.0, 8.0))
            .expect("wall should block");
        assert_eq!(hit.coord, TileCoord::new(3, 0));
        assert!((hit.distance - 40.0).abs() < 1e-3);
    }

    #[test]
    fn nearest_of_multiple_blockers_wins() {
        let grid = Fixture::open(10, 1).with_wall(5, 0).with_wall(2, 0);
        let hit = first_blocker(&grid, Vec2::new(8.0, 8.0), Vec2::new(150.0, 8.0)).unwrap();
        assert_eq!(hit.coord, TileCoord::new(2, 0));
    }

    #[test]
    fn reversed_ray_measures_from_its_own_origin() {
        let grid = Fixture::open(10, 1).with_wall(3, 0);
        let hit = first_blocker(&grid, Vec2::new(150.0, 8.0), Vec2::new(8.0, 8.0)).unwrap();
        // entry from the right side of the wall tile: 150 - 64 = 86
        assert!((hit.distance - 86.0).abs() < 1e-3);
    }

    #[test]
    fn out_of_bounds_segment_is_no_blocker() {
        let grid = Fixture::open(4, 4).with_wall(1, 1);
        assert!(first_blocker(&grid, Vec2::new(-200.0, -50.0), Vec2::new(-10.0, -50.0)).is_none());
        assert!(tiles_along(&grid, Vec2::new(500.0, 500.0), Vec2::new(600.0, 600.0)).is_empty());
    }

    #[test]
    fn segment_is_clipped_to_grid_bounds() {
        // ray starts far outside but crosses the grid
        let grid = Fixture::open(4, 1).with_wall(2, 0);
        let hit = first_blocker(&grid, Vec2::new(-100.0, 8.0), Vec2::new(100.0, 8.0)).unwrap();
        assert_eq!(hit.coord, TileCoord::new(2, 0));
        assert!((hit.distance - 132.0).abs() < 1e-3);
    }

    #[test]
    fn degenerate_segment_hits_containing_tile_only() {
        let grid = Fixture::open(4, 4).with_wall(1, 1);
        let inside = Vec2::new(24.0, 24.0);
        let hit = first_blocker(&grid, inside, inside).unwrap();
        assert_eq!(hit.coord, TileCoord::new(1, 1));
        assert_eq!(hit.distance, 0.0);
    }

    #[test]
    fn diagonal_ray_collects_crossed_tiles() {
        let grid = Fixture::open(4, 4);
        let tiles = tiles_along(&grid, Vec2::new(8.0, 8.0), Vec2::new(56.0, 56.0));
        // must include both endpoints' tiles and be near-to-far
        assert_eq!(tiles.first().map(|(c, _)| *c), Some(TileCoord::new(0, 0)));
        assert_eq!(tiles.last().map(|(c, _)| *c), Some(TileCoord::new(3, 3)));
        assert!(tiles.len() >= 4);
    }

    #[test]
    fn non_finite_input_yields_nothing() {
        let grid = Fixture::open(4, 4).with_wall(1, 1);
        assert!(first_blocker(&grid, Vec2::new(f32::NAN, 0.0), Vec2::new(10.0, 10.0)).is_none());
        assert!(tiles_along(&grid, Vec2::ZERO, Vec2::new(f32::INFINITY, 0.0)).is_empty());
    }
}
