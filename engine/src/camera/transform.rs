//! Camera Transform Module
//!
//! The single authoritative camera pose for the walkthrough: a world-space
//! position plus a yaw/pitch orientation pair. The navigation state machine
//! is the only writer; input drivers propose changes but never mutate a
//! transform directly.
//!
//! Coordinate system (OpenGL convention, matching the rest of the engine):
//! - +X = right
//! - +Y = up
//! - -Z = forward
//!
//! When yaw=0 and pitch=0 the camera looks toward -Z.

use glam::Vec3;

/// Pitch limit constant: -89 degrees in radians
pub const PITCH_LIMIT_MIN: f32 = -89.0 * std::f32::consts::PI / 180.0;
/// Pitch limit constant: +89 degrees in radians
pub const PITCH_LIMIT_MAX: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// Camera pose: world-space position plus yaw/pitch orientation.
///
/// Yaw is unrestricted and wraps freely; pitch is clamped to ±89° to prevent
/// the camera flipping over the vertical.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTransform {
    /// Camera position in world space
    pub position: Vec3,
    /// Horizontal angle (radians) - unrestricted
    pub yaw: f32,
    /// Vertical angle (radians) - clamped to ±89°
    pub pitch: f32,
}

impl Default for CameraTransform {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.5, 0.0),
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl CameraTransform {
    /// Create a transform at a given position looking toward -Z.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with explicit position and orientation.
    ///
    /// Pitch is clamped to the ±89° limits.
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch: pitch.clamp(PITCH_LIMIT_MIN, PITCH_LIMIT_MAX),
        }
    }

    /// Get the camera's forward direction vector (normalized).
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Get the camera's right direction vector (normalized).
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    /// Forward direction projected onto the floor plane (normalized).
    ///
    /// Used for locomotion so that looking up or down does not change
    /// walking speed.
    #[inline]
    pub fn forward_flat(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Right direction projected onto the floor plane (normalized).
    #[inline]
    pub fn right_flat(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin())
    }

    /// Rotate by delta angles.
    ///
    /// Yaw accumulates without wrapping; pitch is clamped to ±89°.
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(PITCH_LIMIT_MIN, PITCH_LIMIT_MAX);
    }

    /// Point the camera at a specific world position.
    ///
    /// No-op if the target coincides with the camera position.
    pub fn look_at(&mut self, target: Vec3) {
        let to_target = target - self.position;
        let distance = to_target.length();
        if distance > 0.001 {
            self.yaw = to_target.x.atan2(-to_target.z);
            self.pitch = (to_target.y / distance)
                .asin()
                .clamp(PITCH_LIMIT_MIN, PITCH_LIMIT_MAX);
        }
    }

    /// Interpolate between two transforms.
    ///
    /// Position is lerped; yaw takes the shortest arc so an animation never
    /// spins the long way around; pitch is lerped directly. `t` is expected
    /// in [0, 1] and is not clamped here.
    pub fn lerp(&self, other: &CameraTransform, t: f32) -> CameraTransform {
        // Shortest signed yaw difference in (-π, π]
        let mut yaw_diff = other.yaw - self.yaw;
        while yaw_diff > std::f32::consts::PI {
            yaw_diff -= std::f32::consts::TAU;
        }
        while yaw_diff < -std::f32::consts::PI {
            yaw_diff += std::f32::consts::TAU;
        }

        CameraTransform {
            position: self.position.lerp(other.position, t),
            yaw: self.yaw + yaw_diff * t,
            pitch: self.pitch + (other.pitch - self.pitch) * t,
        }
    }

    /// Distance to another transform's position.
    #[inline]
    pub fn distance_to(&self, other: &CameraTransform) -> f32 {
        self.position.distance(other.position)
    }
}
