//=========================================================================
// Game State
//=========================================================================
//
// Aggregate of everything the update step reads and writes.
//
// Owned by the orchestrator and passed by `&mut` into `update_step`
// once per tick; rendering only ever sees `&GameState`.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::DVec2;

//=== Internal Dependencies ===============================================

use super::animation::Animation;
use super::grid::TileGrid;
use super::level::Level;
use super::player::Player;

//=== CoinCounter =========================================================

/// Coins collected so far. Only ever increases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoinCounter(u64);

impl CoinCounter {
    pub(crate) fn increment(&mut self) {
        self.0 += 1;
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

//=== GameState ===========================================================

/// World, player and derived per-tick values.
#[derive(Debug, Clone)]
pub struct GameState {
    pub grid: TileGrid,
    pub player: Player,
    pub coins: CoinCounter,
    pub animation: Animation,
    /// Follows the player exactly; recomputed at the end of every tick.
    pub camera: DVec2,
}

impl GameState {
    /// Builds the initial state for a level.
    pub fn new(level: Level) -> Self {
        Self {
            grid: level.grid,
            player: Player::spawn(level.start),
            coins: CoinCounter::default(),
            animation: Animation::new(),
            camera: level.start,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
