//=========================================================================
// Player
//=========================================================================
//
// Mutable simulation state of the single player entity.
//
// Units are tiles: `position` is the top-left corner of a 1x1 box,
// `velocity` is tiles per tick.
//
//=========================================================================

use glam::DVec2;

//=== Facing ==============================================================

/// Horizontal direction the sprite faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    #[default]
    Left,
    Right,
}

//=== Player ==============================================================

/// Physics state of the player. Created once at level load, never destroyed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Set only when a downward collision zeroed vertical velocity this tick.
    pub grounded: bool,
    pub facing: Facing,
}

impl Player {
    /// Spawns a player at rest, airborne, facing left.
    pub fn spawn(position: DVec2) -> Self {
        Self {
            position,
            velocity: DVec2::ZERO,
            grounded: false,
            facing: Facing::Left,
        }
    }

    /// Tile containing `point`.
    #[inline]
    pub(crate) fn tile_at(point: DVec2) -> (i32, i32) {
        (cell(point.x), cell(point.y))
    }
}

/// Grid index of a continuous coordinate.
#[inline]
pub(crate) fn cell(v: f64) -> i32 {
    v.floor() as i32
}

impl Default for Player {
    fn default() -> Self {
        Self::spawn(DVec2::ZERO)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
