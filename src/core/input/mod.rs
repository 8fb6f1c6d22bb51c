//=========================================================================
// Input System
//
// High-level interface for input handling.
// Wraps the held-key tracker and key bindings, providing per-frame updates
// and action queries for the simulation.
//
// Responsibilities:
// - Digest each frame's batch of platform input events
// - Resolve held keys to held actions through the bindings
// - Produce the `InputSample` the update step consumes
//
// Notes:
// This system is owned and updated by the CoreSystemsOrchestrator.
//
//=========================================================================

//=== Submodules ==========================================================
pub mod action;
pub(crate) mod action_mapper;
pub mod event;
pub mod sampler;
pub mod state_tracker;

//=== Re-exports ==========================================================
pub use action::{Action, PlayerAction};
pub use event::{InputEvent, KeyCode};
pub use sampler::{InputSample, InputSampler};
pub use state_tracker::StateTracker;

//=== Internal Imports ====================================================
use action_mapper::ActionMapper;

//=== External Crates =====================================================
use log::debug;

//=== InputSystem =========================================================

/// Held-key state plus bindings for one action set.
#[derive(Debug)]
pub struct InputSystem<A: Action> {
    tracker: StateTracker,
    mapper: ActionMapper<A>,
}

impl<A: Action> InputSystem<A> {
    //--- Construction -----------------------------------------------------

    /// Creates a system with no bindings.
    pub fn new() -> Self {
        Self {
            tracker: StateTracker::new(),
            mapper: ActionMapper::new(),
        }
    }

    //--- process_frame() --------------------------------------------------
    //
    // Applies this frame's events in arrival order.
    //
    pub fn process_frame(&mut self, events: &[InputEvent]) {
        self.tracker.process_events(events);

        if !events.is_empty() {
            debug!(target: "platform::input", "Processed {} input events", events.len());
        }
    }

    //--- Binding API ------------------------------------------------------

    pub fn bind_key(&mut self, key: KeyCode, action: A) {
        self.mapper.bind_key(key, action);
    }

    pub fn unbind_key(&mut self, key: KeyCode) {
        self.mapper.unbind_key(key);
    }

    pub fn unbind_action(&mut self, action: A) {
        self.mapper.unbind_action(action);
    }

    //--- Query Methods ----------------------------------------------------

    /// Action bound to `key`, if any.
    pub fn action_for(&self, key: KeyCode) -> Option<A> {
        self.mapper.map_key(key)
    }

    /// `true` while any key bound to `action` is held.
    pub fn is_action_down(&self, action: A) -> bool {
        self.mapper.is_action_down(action, &self.tracker)
    }

    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.tracker.is_key_down(key)
    }
}

impl<A: Action> Default for InputSystem<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSystem<PlayerAction> {
    /// System with arrow keys, Space and WASD bound.
    pub fn with_default_bindings() -> Self {
        Self {
            tracker: StateTracker::new(),
            mapper: ActionMapper::with_default_bindings(),
        }
    }
}

impl InputSampler for InputSystem<PlayerAction> {
    fn sample(&self) -> InputSample {
        InputSample::from_held(
            PlayerAction::ALL
                .into_iter()
                .filter(|action| self.is_action_down(*action)),
        )
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
