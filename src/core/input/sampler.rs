//=========================================================================
// Input Sampling
//=========================================================================
//
// The update step only ever sees an `InputSample`: which of the five
// player actions are held at the moment the tick starts. How the sample
// is produced (keyboard, replay, test script) is behind `InputSampler`.
//
//=========================================================================

use super::action::PlayerAction;

//=== InputSample =========================================================

/// Held state of every player action for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InputSample {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputSample {
    /// Builds a sample from the actions currently held.
    pub fn from_held<I>(actions: I) -> Self
    where
        I: IntoIterator<Item = PlayerAction>,
    {
        let mut sample = Self::default();
        for action in actions {
            sample.set(action, true);
        }
        sample
    }

    pub fn is_held(&self, action: PlayerAction) -> bool {
        match action {
            PlayerAction::MoveUp => self.up,
            PlayerAction::MoveDown => self.down,
            PlayerAction::MoveLeft => self.left,
            PlayerAction::MoveRight => self.right,
            PlayerAction::Jump => self.jump,
        }
    }

    pub fn set(&mut self, action: PlayerAction, held: bool) {
        let slot = match action {
            PlayerAction::MoveUp => &mut self.up,
            PlayerAction::MoveDown => &mut self.down,
            PlayerAction::MoveLeft => &mut self.left,
            PlayerAction::MoveRight => &mut self.right,
            PlayerAction::Jump => &mut self.jump,
        };
        *slot = held;
    }

    /// `true` when nothing is held.
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

//=== InputSampler ========================================================

/// Source of per-tick input.
pub trait InputSampler {
    fn sample(&self) -> InputSample;
}

impl InputSampler for InputSample {
    fn sample(&self) -> InputSample {
        *self
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
