//=========================================================================
// Input Buffer
//
// Collects translated input events between two frames.
//
// Responsibilities:
// - Store incoming platform events in arrival order
// - Drop immediate duplicates (e.g. a KeyDown reported twice)
// - Hand the whole batch over on `drain()`
//
// Notes:
// The buffer is drained once per frame by the platform, just before the
// core tick runs.
//=========================================================================

//=== Internal Modules ====================================================
use crate::core::input::event::InputEvent;

//=== InputBuffer Struct ==================================================

/// Transient event store for one frame of input.
#[derive(Debug)]
pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    //
    // Preallocates for a typical frame so steady-state input does not
    // reallocate.
    //
    pub(crate) fn new() -> Self {
        const BASE_CAPACITY: usize = 64;

        Self {
            events: Vec::with_capacity(BASE_CAPACITY),
        }
    }

    //--- push() -----------------------------------------------------------
    //
    // Appends an event. Duplicate consecutive events are ignored.
    //
    pub(crate) fn push(&mut self, event: InputEvent) {
        if self.events.last() != Some(&event) {
            self.events.push(event);
        }
    }

    //--- drain() ----------------------------------------------------------
    //
    // Returns all collected events for this frame, or `None` when there
    // is nothing to send.
    //
    pub(crate) fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.events.is_empty() {
            return None;
        }
        Some(self.events.drain(..).collect())
    }

    //--- Utilities --------------------------------------------------------
    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
