//=========================================================================
// World
//
// Tile grid, player physics and the per-tick update step.
//
// Everything in here is plain data plus pure-ish functions over
// `GameState`; no windowing, no channels, no clocks. One call to
// `update_step` is one tick.
//
//=========================================================================

//=== Submodules ==========================================================
pub mod animation;
pub mod camera;
pub mod grid;
pub mod level;
pub mod physics;
pub mod player;
pub mod state;
pub mod tile;
pub mod update;

//=== Re-exports ==========================================================
pub use animation::{Animation, PlayerPose};
pub use camera::{CameraView, Viewport};
pub use grid::TileGrid;
pub use level::{Level, LevelError};
pub use physics::PhysicsParams;
pub use player::{Facing, Player};
pub use state::{CoinCounter, GameState};
pub use tile::{SolidKind, Tile};
pub use update::{update_step, TickReport};
