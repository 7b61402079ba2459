//! Input Bindings Module
//!
//! Maps physical keys to logical flight and debug actions so keys can be
//! remapped without touching game code.

use std::collections::HashMap;

use super::KeyCode;

/// Logical input actions that can be bound to physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Main engine, held (default: W)
    Thrust,
    /// Rotate counter-clockwise, held (default: A)
    RotateLeft,
    /// Rotate clockwise, held (default: D)
    RotateRight,
    /// Pause / resume the simulation (default: P)
    TogglePause,
    /// Advance exactly one tick while paused (default: N)
    StepOnce,
    /// Toggle the debug pause on collision (default: C)
    TogglePauseOnCollision,
}

impl InputAction {
    /// Whether the action is a held level rather than a one-shot press.
    pub fn is_held(self) -> bool {
        matches!(
            self,
            InputAction::Thrust | InputAction::RotateLeft | InputAction::RotateRight
        )
    }
}

/// Maps physical keys to logical actions, one key per action.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    key_to_action: HashMap<KeyCode, InputAction>,
    action_to_key: HashMap<InputAction, KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Default bindings:
    /// - W = Thrust
    /// - A = RotateLeft
    /// - D = RotateRight
    /// - P = TogglePause
    /// - N = StepOnce
    /// - C = TogglePauseOnCollision
    pub fn new() -> Self {
        let mut bindings = Self {
            key_to_action: HashMap::new(),
            action_to_key: HashMap::new(),
        };

        bindings.bind(KeyCode::W, InputAction::Thrust);
        bindings.bind(KeyCode::A, InputAction::RotateLeft);
        bindings.bind(KeyCode::D, InputAction::RotateRight);
        bindings.bind(KeyCode::P, InputAction::TogglePause);
        bindings.bind(KeyCode::N, InputAction::StepOnce);
        bindings.bind(KeyCode::C, InputAction::TogglePauseOnCollision);

        bindings
    }

    /// Bind a physical key to a logical action.
    ///
    /// Any previous binding of either the key or the action is dropped.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        if let Some(old_action) = self.key_to_action.remove(&key) {
            self.action_to_key.remove(&old_action);
        }
        if let Some(old_key) = self.action_to_key.remove(&action) {
            self.key_to_action.remove(&old_key);
        }

        self.key_to_action.insert(key, action);
        self.action_to_key.insert(action, key);
    }

    /// Remove the binding for a specific key.
    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(action) = self.key_to_action.remove(&key) {
            self.action_to_key.remove(&action);
        }
    }

    /// Get the action bound to a physical key, if any.
    pub fn get_action(&self, key: KeyCode) -> Option<InputAction> {
        self.key_to_action.get(&key).copied()
    }

    /// Get the key bound to a logical action, if any.
    pub fn get_key(&self, action: InputAction) -> Option<KeyCode> {
        self.action_to_key.get(&action).copied()
    }
}
