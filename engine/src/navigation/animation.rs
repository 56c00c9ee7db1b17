//! Animation Job Module
//!
//! The record of one in-flight camera interpolation. At most one job exists
//! at a time, held in an `Option` on the navigator: present means animating,
//! absent means not. There is no "start time zero" sentinel to collide with
//! a legitimate zero elapsed time.

use crate::camera::CameraTransform;

/// Which animated transition a job belongs to.
///
/// Zoom outranks Move: a new zoom forcibly resets a move in flight, while
/// move requests during any zoom state are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationKind {
    /// Click-to-move flight between floor points
    Move,
    /// Zoom-in or zoom-out flight to/from an exhibit viewing pose
    Zoom,
}

/// One in-flight interpolation between two camera poses.
#[derive(Clone, Debug)]
pub struct AnimationJob {
    pub kind: AnimationKind,
    /// Pose captured when the job was created
    pub start: CameraTransform,
    /// Pose the camera is pinned to on completion
    pub target: CameraTransform,
    /// Timestamp the job started (caller's clock, milliseconds)
    pub start_ms: f64,
    /// Total flight time (milliseconds)
    pub duration_ms: f64,
}

impl AnimationJob {
    /// Create a job starting now.
    pub fn new(
        kind: AnimationKind,
        start: CameraTransform,
        target: CameraTransform,
        start_ms: f64,
        duration_ms: f64,
    ) -> Self {
        Self {
            kind,
            start,
            target,
            start_ms,
            duration_ms,
        }
    }

    /// Normalized progress in [0, 1] at a given time.
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)) as f32
    }

    /// Whether the flight has run its full duration.
    pub fn is_finished(&self, now_ms: f64) -> bool {
        now_ms - self.start_ms >= self.duration_ms
    }

    /// Interpolated pose at a given time.
    ///
    /// Applies cubic ease in/out to the progress, then lerps the transform.
    /// At or past the end this returns exactly `target`, so completion never
    /// leaves residual floating-point drift.
    pub fn sample(&self, now_ms: f64) -> CameraTransform {
        if self.is_finished(now_ms) {
            return self.target;
        }
        let t = ease_in_out_cubic(self.progress(now_ms));
        self.start.lerp(&self.target, t)
    }
}

/// Cubic ease in/out: `t < 0.5 ? 4t^3 : 1 - (-2t + 2)^3 / 2`.
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
