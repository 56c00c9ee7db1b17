//! Raycast Floor Resolver Module
//!
//! Converts a pointer/tap screen coordinate into a world-space floor point,
//! or "no hit" if the ray misses the floor or the hit lies outside the
//! walkable rectangle. This runs on every pointer-move sample (hover
//! feedback) and every pointer-up/tap (commit), independent of whether a
//! drag occurred.

use glam::Vec3;

use crate::camera::transform::CameraTransform;
use crate::world::FloorBounds;

/// Hits more than this far above floor level are walls or ceiling, not floor.
pub const FLOOR_EPSILON: f32 = 0.1;

/// Projection parameters for screen-to-world rays.
#[derive(Clone, Copy, Debug)]
pub struct RaycastConfig {
    /// Screen aspect ratio (width / height)
    pub aspect_ratio: f32,
    /// Vertical field of view in radians
    pub fov: f32,
}

impl Default for RaycastConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 16.0 / 9.0,
            fov: 1.2, // ~69 degrees
        }
    }
}

impl RaycastConfig {
    /// Create a config with a custom aspect ratio and default FOV.
    pub fn with_aspect(aspect_ratio: f32) -> Self {
        Self {
            aspect_ratio,
            ..Default::default()
        }
    }
}

/// Screen-space to floor-space resolver.
///
/// Owns the projection parameters and the floor rectangle the hit must land
/// inside. Stateless between calls; safe to query every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FloorResolver {
    /// Projection parameters
    pub config: RaycastConfig,
    /// Walkable floor rectangle hits must fall inside
    pub bounds: FloorBounds,
}

impl FloorResolver {
    /// Create a resolver for a given room and projection.
    pub fn new(config: RaycastConfig, bounds: FloorBounds) -> Self {
        Self { config, bounds }
    }

    /// Resolve a screen point to a floor point.
    ///
    /// # Arguments
    /// * `camera` - Current camera transform the ray originates from
    /// * `uv` - Normalized screen coordinates (0-1, 0-1), (0,0) bottom-left
    ///
    /// # Returns
    /// * `Some(Vec3)` - The intersection with the floor plane, inside bounds
    /// * `None` - Ray parallel/upward, intersection behind the camera, or
    ///   hit outside the walkable rectangle
    pub fn resolve(&self, camera: &CameraTransform, uv: (f32, f32)) -> Option<Vec3> {
        let ray_dir = self.ray_direction(camera, uv);

        // Intersect with the floor plane at Y=0
        // Ray: P = origin + t * dir, solve origin.y + t * dir.y = 0
        if ray_dir.y.abs() < 0.0001 {
            // Ray is parallel to the floor
            return None;
        }

        let t = -camera.position.y / ray_dir.y;
        if t < 0.0 {
            // Intersection is behind the camera (looking up)
            return None;
        }

        let hit = camera.position + ray_dir * t;
        self.accept_hit(hit)
    }

    /// Validate a collision hit supplied by the scene layer.
    ///
    /// Rejects hits more than [`FLOOR_EPSILON`] above floor level (walls,
    /// ceiling, exhibit geometry) and hits outside the walkable rectangle.
    pub fn accept_hit(&self, hit: Vec3) -> Option<Vec3> {
        if hit.y > FLOOR_EPSILON {
            return None;
        }
        if !self.bounds.contains(hit) {
            return None;
        }
        Some(hit)
    }

    /// Calculate the world-space ray direction through a screen point.
    ///
    /// # Arguments
    /// * `camera` - Camera transform the ray originates from
    /// * `uv` - Normalized screen coordinates (0-1, 0-1), (0,0) bottom-left
    pub fn ray_direction(&self, camera: &CameraTransform, uv: (f32, f32)) -> Vec3 {
        // Convert UV to NDC (-1 to 1)
        let ndc = (uv.0 * 2.0 - 1.0, uv.1 * 2.0 - 1.0);
        let half_fov = (self.config.fov * 0.5).tan();

        let forward = camera.forward();
        let up_world = Vec3::Y;

        // Handle edge case when looking almost straight up/down
        let (right, up) = if forward.y.abs() > 0.99 {
            let right = Vec3::X;
            let up = right.cross(forward).normalize();
            (right, up)
        } else {
            let right = forward.cross(up_world).normalize();
            let up = right.cross(forward);
            (right, up)
        };

        (right * ndc.0 * self.config.aspect_ratio * half_fov + up * ndc.1 * half_fov + forward)
            .normalize()
    }
}
