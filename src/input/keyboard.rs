//! Keyboard Input
//!
//! Key codes and modifier tracking for the painter's small key surface:
//! shift selects erase while held, space toggles the cursor mode.

/// Generic key codes, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Space,
    ShiftLeft,
    ShiftRight,
    Escape,
    /// Catch-all for keys the painter does not bind.
    Unknown,
}

/// State of keyboard modifier keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifierState {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl ModifierState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Keyboard state tracked by the interaction controller.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pub modifiers: ModifierState,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the key updated modifier state.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::ShiftLeft | KeyCode::ShiftRight => {
                self.modifiers.shift = pressed;
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
