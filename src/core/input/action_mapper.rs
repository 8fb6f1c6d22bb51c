//=========================================================================
// Action Mapper
//=========================================================================
//
// Maps keys to actions.
//
// Architecture:
//   KeyCode → HashMap → Action
//
// Several keys may drive the same action (arrows and WASD); an action is
// held while any of its keys is held.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::action::{Action, PlayerAction};
use super::event::KeyCode;
use super::state_tracker::StateTracker;

//=== ActionMapper ========================================================

/// Key → action bindings.
#[derive(Debug)]
pub(crate) struct ActionMapper<A: Action> {
    key_bindings: HashMap<KeyCode, A>,
}

impl<A: Action> ActionMapper<A> {
    /// Creates a mapper with no bindings.
    pub(crate) fn new() -> Self {
        Self { key_bindings: HashMap::new() }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to an action, replacing any previous binding of that key.
    pub(crate) fn bind_key(&mut self, key: KeyCode, action: A) {
        self.key_bindings.insert(key, action);
    }

    pub(crate) fn unbind_key(&mut self, key: KeyCode) {
        self.key_bindings.remove(&key);
    }

    /// Removes every key bound to `action`.
    pub(crate) fn unbind_action(&mut self, action: A) {
        self.key_bindings.retain(|_, bound| *bound != action);
    }

    //--- Mapping ----------------------------------------------------------

    pub(crate) fn map_key(&self, key: KeyCode) -> Option<A> {
        self.key_bindings.get(&key).copied()
    }

    /// Whether any key bound to `action` is held.
    pub(crate) fn is_action_down(&self, action: A, tracker: &StateTracker) -> bool {
        self.keys_for(action).any(|key| tracker.is_key_down(key))
    }

    fn keys_for(&self, action: A) -> impl Iterator<Item = KeyCode> + '_ {
        self.key_bindings
            .iter()
            .filter(move |(_, bound)| **bound == action)
            .map(|(key, _)| *key)
    }
}

impl ActionMapper<PlayerAction> {
    /// Arrow keys plus Space, with WASD as aliases.
    pub(crate) fn with_default_bindings() -> Self {
        let mut mapper = Self::new();
        for (key, action) in [
            (KeyCode::ArrowUp, PlayerAction::MoveUp),
            (KeyCode::ArrowDown, PlayerAction::MoveDown),
            (KeyCode::ArrowLeft, PlayerAction::MoveLeft),
            (KeyCode::ArrowRight, PlayerAction::MoveRight),
            (KeyCode::Space, PlayerAction::Jump),
            (KeyCode::KeyW, PlayerAction::MoveUp),
            (KeyCode::KeyS, PlayerAction::MoveDown),
            (KeyCode::KeyA, PlayerAction::MoveLeft),
            (KeyCode::KeyD, PlayerAction::MoveRight),
        ] {
            mapper.bind_key(key, action);
        }
        mapper
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
