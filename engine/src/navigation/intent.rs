//! Motion Intent Module
//!
//! The discrete requests input drivers and the UI shell raise against the
//! navigation state machine. Intents are proposals: the state machine
//! arbitrates them against the current mode and either applies or silently
//! drops each one. Produced by drivers, consumed exactly once.

use glam::Vec3;

use crate::camera::CameraTransform;

/// Locomotion axis relative to the camera.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocomoteAxis {
    /// Along the camera's flattened forward direction
    Forward,
    /// Along the camera's flattened right direction
    Strafe,
}

/// A discrete request to change camera state.
#[derive(Clone, Debug, PartialEq)]
pub enum MotionIntent {
    /// Free-look rotation deltas from a pointer drag (radians)
    Look { delta_yaw: f32, delta_pitch: f32 },
    /// Continuous walking. `amount` is pre-scaled by the driver:
    /// sign x speed x elapsed seconds (meters)
    Locomote { axis: LocomoteAxis, amount: f32 },
    /// Animated point-to-point move to a floor point
    MoveTo { point: Vec3 },
    /// Animated zoom to an exhibit's viewing pose
    ZoomTo { exhibit_id: String },
    /// Return flight to the pose saved when the matching zoom was accepted
    ZoomOut,
    /// Instantaneous placement at a named waypoint's pose
    PresetJump { transform: CameraTransform },
}
