//=========================================================================
// Input Event Types
//
// Platform-independent representation of keyboard input.
//
// The platform layer translates native key events into these types before
// they cross the bridge; nothing above the bridge sees winit types.
//
// Event Flow:
// ```text
// Platform Layer (winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker (held keys)
//         ↓
//    ActionMapper → InputSample (per tick)
// ```
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced, so
/// WASD bindings stay in place on non-QWERTY layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,

    /// Any key the input layer does not name.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Key pressed down. OS key repeat arrives as repeated `KeyDown`.
    KeyDown(KeyCode),

    /// Key released.
    KeyUp(KeyCode),

    /// The window lost keyboard focus; every held key counts as released.
    FocusLost,
}

impl InputEvent {
    /// Key carried by the event, if any.
    pub fn key(&self) -> Option<KeyCode> {
        match self {
            Self::KeyDown(key) | Self::KeyUp(key) => Some(*key),
            Self::FocusLost => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
