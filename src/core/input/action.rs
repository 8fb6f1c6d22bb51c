//=========================================================================
// Action Trait & Player Actions
//=========================================================================
//
// Actions are opaque identifiers routed by the input layer and
// interpreted by the game. `PlayerAction` is the set the platformer uses.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Action Trait ========================================================

/// Marker trait for action enums.
///
/// Actions represent high-level commands (Jump, MoveLeft) mapped from
/// raw keys. The input system routes actions without interpreting them.
///
/// # Example
///
/// ```
/// use pheasant::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum MenuAction { Select, Back }
///
/// impl Action for MenuAction {}
/// ```
pub trait Action: 'static + Send + Copy + Eq + Hash + Debug {}

//=== PlayerAction ========================================================

/// Everything the player can ask the character to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Jump,
}

impl Action for PlayerAction {}

impl PlayerAction {
    pub const ALL: [PlayerAction; 5] = [
        PlayerAction::MoveUp,
        PlayerAction::MoveDown,
        PlayerAction::MoveLeft,
        PlayerAction::MoveRight,
        PlayerAction::Jump,
    ];
}

//=========================================================================
// Unit Tests
//=========================================================================
