//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use pheasant::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine facade
pub use crate::engine::{Engine, EngineBuilder, EngineError};

// Input
pub use crate::core::input::{
    Action, InputEvent, InputSample, InputSampler, InputSystem, KeyCode, PlayerAction,
};

// World
pub use crate::core::world::{
    update_step, CameraView, Facing, GameState, Level, LevelError, PhysicsParams, Player,
    PlayerPose, SolidKind, Tile, TickReport, TileGrid, Viewport,
};

// Rendering
pub use crate::core::render::{AsciiRenderer, RenderFrame, Renderer, VisibleTile};

// Errors
pub use crate::core::PlatformError;
