//! Mouse Input
//!
//! Pointer position and button tracking, decoupled from any windowing
//! system. Positions are normalized UV coordinates with (0,0) at the
//! bottom-left so they can feed the camera's ray construction directly.

/// Mouse button identifiers, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    /// Additional mouse buttons (button 4, 5, etc.)
    Other(u16),
}

/// State of all mouse buttons.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonState {
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

impl ButtonState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update button state for a specific button.
    pub fn set(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.left = pressed,
            MouseButton::Middle => self.middle = pressed,
            MouseButton::Right => self.right = pressed,
            MouseButton::Other(_) => {}
        }
    }

    pub fn is_pressed(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Middle => self.middle,
            MouseButton::Right => self.right,
            MouseButton::Other(_) => false,
        }
    }

    pub fn any_pressed(&self) -> bool {
        self.left || self.middle || self.right
    }
}

/// Normalized pointer position in UV coordinates (0..1, 0..1), origin at
/// the bottom-left, Y increasing upward.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn to_tuple(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Convert from raw pixel coordinates with a top-left origin.
    pub fn from_pixels(x: f64, y: f64, window_width: u32, window_height: u32) -> Self {
        Self {
            x: x as f32 / window_width as f32,
            y: 1.0 - (y as f32 / window_height as f32),
        }
    }
}

impl From<(f32, f32)> for Position {
    fn from(tuple: (f32, f32)) -> Self {
        Self {
            x: tuple.0,
            y: tuple.1,
        }
    }
}

/// Pointer state tracked by the interaction controller.
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    /// Most recent pointer position, if the pointer has entered the view.
    pub position: Option<Position>,
    /// Current button states.
    pub buttons: ButtonState,
}

impl MouseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = Some(position);
    }

    pub fn set_button(&mut self, button: MouseButton, pressed: bool) {
        self.buttons.set(button, pressed);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
