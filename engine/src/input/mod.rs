//! Input Module
//!
//! Gesture recognition for the three input sources the walkthrough supports:
//! mouse/pen pointer, keyboard, and single-finger touch. Drivers are
//! decoupled from any windowing system; the shell feeds raw events in and
//! receives motion intents for the navigation state machine.
//!
//! Drivers never mutate the camera. Every output is an intent the state
//! machine is free to drop.

pub mod keyboard;
pub mod pointer;
pub mod touch;

pub use keyboard::{KeyCode, KeyboardDriver, MovementKeys};
pub use pointer::{PointerDriver, PointerRelease, Position};
pub use touch::{SwipeAxis, TouchDriver, TouchRelease, SWIPE_MOVE_GAIN, SWIPE_TURN_GAIN};
