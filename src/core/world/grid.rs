//=========================================================================
// Tile Grid
//=========================================================================
//
// Fixed-size, row-major grid of tiles describing level geometry.
//
// Contract:
//   get(x, y)       → never fails, Empty outside the grid
//   set(x, y, tile) → coordinates must be inside the grid (panics otherwise)
//
// The grid is built once at level load and never resized. The only
// runtime mutation is coin pickup (Collectible → Empty).
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::DVec2;

//=== Internal Dependencies ===============================================

use super::tile::Tile;

//=== TileGrid ============================================================

/// Level geometry, indexed by integer tile coordinates.
#[derive(Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    //--- Construction -----------------------------------------------------

    /// Creates a grid from row-major tiles.
    ///
    /// # Panics
    ///
    /// Panics if `tiles.len() != width * height`. Level loading validates
    /// this before calling.
    pub(crate) fn from_tiles(width: usize, height: usize, tiles: Vec<Tile>) -> Self {
        assert_eq!(
            tiles.len(),
            width * height,
            "tile count does not match {}x{} grid",
            width,
            height
        );
        Self { width, height, tiles }
    }

    /// Creates a grid filled with `Empty`.
    pub fn empty(width: usize, height: usize) -> Self {
        Self::from_tiles(width, height, vec![Tile::Empty; width * height])
    }

    //--- Dimensions -------------------------------------------------------

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    //--- Access -----------------------------------------------------------

    /// Returns the tile at `(x, y)`, or `Empty` when out of range.
    pub fn get(&self, x: i32, y: i32) -> Tile {
        match self.index(x, y) {
            Some(i) => self.tiles[i],
            None => Tile::Empty,
        }
    }

    /// Replaces the tile at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics when `(x, y)` lies outside the grid. Callers only write
    /// coordinates they just read a non-empty tile from, so an
    /// out-of-range write is a logic bug.
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) {
        match self.index(x, y) {
            Some(i) => self.tiles[i] = tile,
            None => panic!("could not set tile at position: ({}, {})", x, y),
        }
    }

    /// Whether `(x, y)` names a stored cell.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Whether a continuous point lies inside the grid bounds.
    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= 0.0
            && point.y >= 0.0
            && point.x < self.width as f64
            && point.y < self.height as f64
    }

    /// Counts tiles equal to `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Renders the grid back to its symbol layout, one row per line.
    pub fn to_layout(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.tiles.chunks(self.width.max(1)) {
            out.extend(row.iter().map(|t| t.symbol()));
            out.push('\n');
        }
        out
    }

    //--- Internal Helpers -------------------------------------------------

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Debug for TileGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TileGrid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("coins", &self.count(Tile::Collectible))
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::world::tile::SolidKind;

    fn ground() -> Tile {
        Tile::Solid(SolidKind::Ground)
    }

    //=====================================================================
    // Read Tests
    //=====================================================================

    #[test]
    fn get_returns_stored_tile() {
        let mut grid = TileGrid::empty(4, 3);
        grid.set(2, 1, ground());
        assert_eq!(grid.get(2, 1), ground());
        assert_eq!(grid.get(1, 2), Tile::Empty);
    }

    #[test]
    fn out_of_bounds_reads_are_empty() {
        let mut grid = TileGrid::empty(4, 3);
        for y in 0..3 {
            for x in 0..4 {
                grid.set(x, y, ground());
            }
        }

        for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 3), (i32::MIN, i32::MAX), (100, 100)] {
            assert_eq!(grid.get(x, y), Tile::Empty, "({}, {}) should read Empty", x, y);
        }
    }

    //=====================================================================
    // Write Tests
    //=====================================================================

    #[test]
    #[should_panic(expected = "could not set tile")]
    fn out_of_bounds_write_panics() {
        let mut grid = TileGrid::empty(4, 3);
        grid.set(4, 0, ground());
    }

    #[test]
    #[should_panic(expected = "could not set tile")]
    fn negative_write_panics() {
        let mut grid = TileGrid::empty(4, 3);
        grid.set(-1, 0, ground());
    }

    #[test]
    fn count_tracks_mutations() {
        let mut grid = TileGrid::empty(3, 3);
        grid.set(0, 0, Tile::Collectible);
        grid.set(1, 0, Tile::Collectible);
        assert_eq!(grid.count(Tile::Collectible), 2);

        grid.set(0, 0, Tile::Empty);
        assert_eq!(grid.count(Tile::Collectible), 1);
    }

    //=====================================================================
    // Layout Tests
    //=====================================================================

    #[test]
    fn layout_writes_one_row_per_line() {
        let mut grid = TileGrid::empty(3, 2);
        grid.set(0, 1, ground());
        grid.set(2, 0, Tile::Collectible);
        assert_eq!(grid.to_layout(), "..C\nG..\n");
    }

    #[test]
    fn in_bounds_matches_stored_cells() {
        let grid = TileGrid::empty(4, 3);
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(3, 2));
        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(4, 0));
        assert!(!grid.in_bounds(0, 3));
    }

    #[test]
    fn contains_uses_half_open_bounds() {
        let grid = TileGrid::empty(4, 3);
        assert!(grid.contains(DVec2::new(0.0, 0.0)));
        assert!(grid.contains(DVec2::new(3.9, 2.9)));
        assert!(!grid.contains(DVec2::new(4.0, 1.0)));
        assert!(!grid.contains(DVec2::new(-0.1, 1.0)));
    }

    #[test]
    #[should_panic(expected = "tile count does not match")]
    fn from_tiles_rejects_wrong_length() {
        TileGrid::from_tiles(2, 2, vec![Tile::Empty; 3]);
    }
}
