//! Input Module
//!
//! Windowing-system-agnostic input state for the painter. The host maps
//! its native events (winit, DOM, ...) onto these types and feeds them to
//! the interaction controller; nothing here depends on a backend.

pub mod keyboard;
pub mod mouse;

pub use keyboard::{KeyCode, KeyboardState, ModifierState};
pub use mouse::{ButtonState, MouseButton, MouseState, Position};

/// Combined input state for both keyboard and mouse.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub keyboard: KeyboardState,
    pub mouse: MouseState,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all input state to defaults.
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.mouse.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_state_reset() {
        let mut input = InputState::new();
        input.mouse.set_button(MouseButton::Left, true);
        input.keyboard.handle_key(KeyCode::ShiftLeft, true);
        input.reset();
        assert!(!input.mouse.buttons.any_pressed());
        assert!(!input.keyboard.modifiers.shift);
    }
}
