//! Floor Bounds Module
//!
//! Contains the walkable-floor policy for the museum room.
//! The camera is only ever allowed to rest inside a fixed floor rectangle
//! at a fixed eye height; every position change goes through `clamp`.
//!
//! ## Room Size
//! The default room is the museum gallery: 14m wide (x) by 13.5m deep (z),
//! with the camera eye at 2.5m above the floor.
//! - 1 unit = 1 meter (SI units)

use glam::Vec3;

/// Walkable floor rectangle with a fixed camera eye height.
///
/// Pure policy object: `clamp` deterministically maps any candidate position
/// to the nearest point inside the rectangle at exactly `eye_height`, and is
/// idempotent (`clamp(clamp(p)) == clamp(p)`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloorBounds {
    /// Minimum walkable x coordinate (west wall side)
    pub x_min: f32,
    /// Maximum walkable x coordinate (east wall side)
    pub x_max: f32,
    /// Minimum walkable z coordinate (front wall side)
    pub z_min: f32,
    /// Maximum walkable z coordinate (back wall side)
    pub z_max: f32,
    /// Camera eye height above the floor (meters)
    pub eye_height: f32,
}

impl Default for FloorBounds {
    fn default() -> Self {
        // Museum gallery: x from -7 to +7, z from -6.5 to +7, eyes at 2.5m
        Self {
            x_min: -7.0,
            x_max: 7.0,
            z_min: -6.5,
            z_max: 7.0,
            eye_height: 2.5,
        }
    }
}

impl FloorBounds {
    /// Create bounds for a custom rectangle.
    pub fn new(x_min: f32, x_max: f32, z_min: f32, z_max: f32, eye_height: f32) -> Self {
        Self {
            x_min,
            x_max,
            z_min,
            z_max,
            eye_height,
        }
    }

    /// Clamp a candidate position to the walkable rectangle at eye height.
    ///
    /// X and Z are clamped to the rectangle; Y is forced to `eye_height`.
    pub fn clamp(&self, pos: Vec3) -> Vec3 {
        Vec3::new(
            pos.x.clamp(self.x_min, self.x_max),
            self.eye_height,
            pos.z.clamp(self.z_min, self.z_max),
        )
    }

    /// Check whether a point lies inside the floor rectangle (Y ignored).
    pub fn contains(&self, pos: Vec3) -> bool {
        pos.x >= self.x_min && pos.x <= self.x_max && pos.z >= self.z_min && pos.z <= self.z_max
    }

    /// Center of the floor rectangle at eye height.
    pub fn center(&self) -> Vec3 {
        Vec3::new(
            (self.x_min + self.x_max) * 0.5,
            self.eye_height,
            (self.z_min + self.z_max) * 0.5,
        )
    }
}
