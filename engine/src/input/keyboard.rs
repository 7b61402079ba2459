//! Keyboard Input Module
//!
//! Generic key codes and the held control levels the ship reads every tick.
//! Decoupled from any windowing system.

use crate::physics::RotationInput;

/// Generic key codes, independent of the windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    W,
    A,
    D,
    N,
    P,
    C,
    ArrowUp,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Held control levels for the ship.
///
/// These are level-triggered: the physics samples whatever is held at the
/// start of each tick, no press events are queued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShipControls {
    /// Main engine
    pub accelerate: bool,
    /// Counter-clockwise rotation thruster
    pub rotate_left: bool,
    /// Clockwise rotation thruster
    pub rotate_right: bool,
}

impl ShipControls {
    /// All controls released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Net rotation request. Both directions held cancel out.
    pub fn rotation(&self) -> RotationInput {
        match (self.rotate_left, self.rotate_right) {
            (true, false) => RotationInput::Left,
            (false, true) => RotationInput::Right,
            _ => RotationInput::None,
        }
    }

    /// Check if any control is held.
    pub fn any_pressed(&self) -> bool {
        self.accelerate || self.rotate_left || self.rotate_right
    }

    /// Release everything.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_default_released() {
        let controls = ShipControls::new();
        assert!(!controls.any_pressed());
        assert_eq!(controls.rotation(), RotationInput::None);
    }

    #[test]
    fn test_rotation_levels() {
        let mut controls = ShipControls { rotate_left: true, ..Default::default() };
        assert_eq!(controls.rotation(), RotationInput::Left);
        controls.rotate_right = true;
        assert_eq!(controls.rotation(), RotationInput::None);
        controls.rotate_left = false;
        assert_eq!(controls.rotation(), RotationInput::Right);
        controls.reset();
        assert!(!controls.any_pressed());
    }
}
