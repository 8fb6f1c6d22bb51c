//=========================================================================
// Animation Selection
//=========================================================================
//
// Presentational frame selection driven by the tick counter.
//
// Player:  Running (grounded, moving) → Jumping (airborne, vertical
//          motion) → Standing (everything else)
// Coin:    always cycling, independent of the player
//
// Both cycles advance one frame every `TICKS_PER_FRAME` ticks. Nothing
// here feeds back into physics.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::player::Player;

//=== Constants ===========================================================

pub const TICKS_PER_FRAME: u64 = 3;
pub const RUNNING_FRAMES: usize = 4;
pub const COIN_FRAMES: usize = 3;

//=== PlayerPose ==========================================================

/// Motion state picked for the player sprite this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerPose {
    #[default]
    Standing,
    /// Index into the running cycle, `0..RUNNING_FRAMES`.
    Running(usize),
    Jumping,
}

impl PlayerPose {
    /// Flat sprite index: standing, four running frames, then jumping.
    pub fn frame_index(self) -> usize {
        match self {
            Self::Standing => 0,
            Self::Running(frame) => 1 + frame,
            Self::Jumping => 1 + RUNNING_FRAMES,
        }
    }
}

//=== Animation ===========================================================

/// Tick counter plus the frames selected from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Animation {
    tick: u64,
    player: PlayerPose,
    coin_frame: usize,
}

impl Animation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the counter and reselects both frames from the player's
    /// post-collision state.
    pub fn advance(&mut self, player: &Player) {
        self.tick += 1;
        let cycle = (self.tick / TICKS_PER_FRAME) as usize;

        self.player = if player.grounded && player.velocity.x != 0.0 {
            PlayerPose::Running(cycle % RUNNING_FRAMES)
        } else if player.velocity.y != 0.0 && !player.grounded {
            PlayerPose::Jumping
        } else {
            PlayerPose::Standing
        };
        self.coin_frame = cycle % COIN_FRAMES;
    }

    /// Ticks elapsed since the level started.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn player_pose(&self) -> PlayerPose {
        self.player
    }

    pub fn coin_frame(&self) -> usize {
        self.coin_frame
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
