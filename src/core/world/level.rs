//=========================================================================
// Level Loading
//=========================================================================
//
// Turns a literal symbol layout into a `TileGrid` plus spawn point.
//
// Layouts may be written as one continuous string or one row per line;
// whitespace is skipped, every other character is a tile symbol.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::DVec2;
use log::debug;
use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::camera::Viewport;
use super::grid::TileGrid;
use super::tile::Tile;

//=== Built-in Level ======================================================

/// Width of the built-in level, in tiles.
pub const BUILTIN_WIDTH: usize = 64;

/// Height of the built-in level, in tiles.
pub const BUILTIN_HEIGHT: usize = 16;

const BUILTIN_LAYOUT: &str = "
    ................................................................
    ................................................................
    ................................................................
    ....CC..........................................................
    .....................................##.........................
    ....GG......#############..................#.#..................
    ..........####.....................GG......#.#..................
    .........#####.......CC.........................................
    ##################################.###########...###############
    .................................#.#.............#..............
    .......................###########.#...........###..............
    .......................#...........#.......#####................
    ............####.......#.###########....####....................
    .......................#..............####......................
    .......................################.........................
    ................................................................
";

//=== LevelError ==========================================================

/// Level and viewport validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("level dimensions must be non-zero, got {width}x{height}")]
    ZeroDimensions { width: usize, height: usize },

    #[error("level layout has {found} tiles, expected {expected}")]
    SizeMismatch { expected: usize, found: usize },

    #[error(
        "viewport {viewport_width}x{viewport_height} does not fit in level {level_width}x{level_height}"
    )]
    ViewportTooLarge {
        viewport_width: usize,
        viewport_height: usize,
        level_width: usize,
        level_height: usize,
    },
}

//=== Level ===============================================================

/// A loaded level: geometry plus where the player appears.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub grid: TileGrid,
    pub start: DVec2,
}

impl Level {
    /// Parses a `width`x`height` layout through the tile symbol table.
    ///
    /// The player starts at the top-left corner; see [`Level::with_start`].
    pub fn parse(width: usize, height: usize, layout: &str) -> Result<Self, LevelError> {
        if width == 0 || height == 0 {
            return Err(LevelError::ZeroDimensions { width, height });
        }

        let tiles: Vec<Tile> = layout
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Tile::from_symbol)
            .collect();

        let expected = width * height;
        if tiles.len() != expected {
            return Err(LevelError::SizeMismatch { expected, found: tiles.len() });
        }

        let grid = TileGrid::from_tiles(width, height, tiles);
        debug!(
            target: "world",
            "Parsed {}x{} level with {} coins",
            width,
            height,
            grid.count(Tile::Collectible)
        );

        Ok(Self { grid, start: DVec2::ZERO })
    }

    /// The 64x16 demo level.
    pub fn builtin() -> Result<Self, LevelError> {
        Self::parse(BUILTIN_WIDTH, BUILTIN_HEIGHT, BUILTIN_LAYOUT)
    }

    /// Overrides the spawn position (top-left of the player box, in tiles).
    pub fn with_start(mut self, start: DVec2) -> Self {
        self.start = start;
        self
    }

    /// Checks that the viewport fits inside the level on both axes.
    pub fn check_viewport(&self, viewport: Viewport) -> Result<(), LevelError> {
        if viewport.width > self.grid.width() || viewport.height > self.grid.height() {
            return Err(LevelError::ViewportTooLarge {
                viewport_width: viewport.width,
                viewport_height: viewport.height,
                level_width: self.grid.width(),
                level_height: self.grid.height(),
            });
        }
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
