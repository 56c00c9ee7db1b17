//! Keyboard Input Module
//!
//! Keyboard state tracking for walking and turning. Decoupled from any
//! windowing system; the shell translates its native key events into the
//! generic key codes here.
//!
//! WASD walks and strafes, arrow up/down also walk, arrow left/right turn
//! in place. Held keys are sampled once per frame and scaled by elapsed
//! time, so movement speed is frame-rate independent.

use crate::navigation::config::NavigationConfig;
use crate::navigation::intent::{LocomoteAxis, MotionIntent};

/// Generic key codes for walkthrough input, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Control keys
    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Tracks which movement keys are currently held.
///
/// Allows smooth continuous movement while keys are held down.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementKeys {
    /// W / ArrowUp - walk forward
    pub forward: bool,
    /// S / ArrowDown - walk backward
    pub backward: bool,
    /// A - strafe left
    pub left: bool,
    /// D - strafe right
    pub right: bool,
    /// ArrowLeft - turn left in place
    pub turn_left: bool,
    /// ArrowRight - turn right in place
    pub turn_right: bool,
}

impl MovementKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update movement state based on key press/release.
    ///
    /// Returns `true` if the key was a movement key and was handled.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W | KeyCode::ArrowUp => {
                self.forward = pressed;
                true
            }
            KeyCode::S | KeyCode::ArrowDown => {
                self.backward = pressed;
                true
            }
            KeyCode::A => {
                self.left = pressed;
                true
            }
            KeyCode::D => {
                self.right = pressed;
                true
            }
            KeyCode::ArrowLeft => {
                self.turn_left = pressed;
                true
            }
            KeyCode::ArrowRight => {
                self.turn_right = pressed;
                true
            }
            _ => false,
        }
    }

    /// Check if any movement key is currently pressed.
    pub fn any_pressed(&self) -> bool {
        self.forward
            || self.backward
            || self.left
            || self.right
            || self.turn_left
            || self.turn_right
    }

    /// Reset all keys to released state (focus lost).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Forward/backward direction (-1, 0, or 1).
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Strafe direction (-1, 0, or 1).
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }

    /// Turn direction (-1, 0, or 1), positive turns right.
    pub fn turn_axis(&self) -> i32 {
        (self.turn_right as i32) - (self.turn_left as i32)
    }
}

/// Per-frame sampler turning held keys into motion intents.
#[derive(Debug, Clone)]
pub struct KeyboardDriver {
    config: NavigationConfig,
    keys: MovementKeys,
}

impl KeyboardDriver {
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            config,
            keys: MovementKeys::new(),
        }
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the key was handled as a movement key.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        self.keys.handle_key(key, pressed)
    }

    /// Current key state.
    pub fn keys(&self) -> &MovementKeys {
        &self.keys
    }

    /// Release all keys (window lost focus).
    pub fn reset(&mut self) {
        self.keys.reset();
    }

    /// Sample held keys into intents for one frame.
    ///
    /// Amounts are pre-scaled by speed and elapsed time: the state machine
    /// applies them verbatim.
    ///
    /// # Arguments
    /// * `dt_seconds` - Elapsed time since the last sample
    pub fn sample(&self, dt_seconds: f32) -> Vec<MotionIntent> {
        let mut intents = Vec::new();

        let forward = self.keys.forward_axis();
        if forward != 0 {
            intents.push(MotionIntent::Locomote {
                axis: LocomoteAxis::Forward,
                amount: forward as f32 * self.config.move_speed * dt_seconds,
            });
        }

        let strafe = self.keys.right_axis();
        if strafe != 0 {
            intents.push(MotionIntent::Locomote {
                axis: LocomoteAxis::Strafe,
                amount: strafe as f32 * self.config.move_speed * dt_seconds,
            });
        }

        let turn = self.keys.turn_axis();
        if turn != 0 {
            intents.push(MotionIntent::Look {
                delta_yaw: turn as f32 * self.config.turn_speed * dt_seconds,
                delta_pitch: 0.0,
            });
        }

        intents
    }
}
