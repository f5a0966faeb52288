//! Per-frame input as handed over by the host.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Directional keys held this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Movement input: key state plus an optional pointer/joystick vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    pub keys: KeyState,
    /// Joystick vector, each axis in [-1, 1].
    pub joystick: Vec2,
}

impl InputFrame {
    /// Pure joystick input.
    pub fn from_vector(x: f32, y: f32) -> Self {
        Self {
            keys: KeyState::default(),
            joystick: Vec2::new(x, y),
        }
    }

    /// Keys and joystick merged additively. Magnitude is not clamped.
    pub fn movement(&self) -> Vec2 {
        let mut v = self.joystick;
        if self.keys.up {
            v.y -= 1.0;
        }
        if self.keys.down {
            v.y += 1.0;
        }
        if self.keys.left {
            v.x -= 1.0;
        }
        if self.keys.right {
            v.x += 1.0;
        }
        v
    }
}
