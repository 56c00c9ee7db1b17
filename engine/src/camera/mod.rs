//! Camera Module
//!
//! Camera pose math and screen-to-floor raycasting for the walkthrough.
//! This module is window-system agnostic - it only deals with camera state
//! and math.

pub mod raycast;
pub mod transform;

pub use raycast::{FLOOR_EPSILON, FloorResolver, RaycastConfig};
pub use transform::{CameraTransform, PITCH_LIMIT_MAX, PITCH_LIMIT_MIN};
