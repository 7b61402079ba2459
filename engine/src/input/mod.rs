//! Input Module
//!
//! Platform-agnostic input for the ship: key events come in, held control
//! levels and one-shot debug actions come out. Decoupled from any specific
//! windowing system.
//!
//! # Example
//!
//! ```rust,ignore
//! use orbit_lander_engine::input::{InputState, KeyCode};
//!
//! let mut input = InputState::new();
//! input.handle_key(KeyCode::W, true); // W pressed
//! assert!(input.controls.accelerate);
//! ```

pub mod bindings;
pub mod keyboard;

pub use bindings::{InputAction, KeyBindings};
pub use keyboard::{KeyCode, ShipControls};

/// Key bindings plus the currently held ship controls.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub bindings: KeyBindings,
    pub controls: ShipControls,
}

impl InputState {
    /// Create a new input state with default bindings and nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a key transition.
    ///
    /// Held actions update the control levels. One-shot actions are returned
    /// on press only; releases and unbound keys return `None`.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> Option<InputAction> {
        let action = self.bindings.get_action(key)?;
        match action {
            InputAction::Thrust => self.controls.accelerate = pressed,
            InputAction::RotateLeft => self.controls.rotate_left = pressed,
            InputAction::RotateRight => self.controls.rotate_right = pressed,
            _ => return pressed.then_some(action),
        }
        None
    }

    /// Release all held controls.
    pub fn reset(&mut self) {
        self.controls.reset();
    }
}
