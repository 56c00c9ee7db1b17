//! Navigation Configuration
//!
//! Centralized tuning constants for the navigation state machine and input
//! drivers. `Default` returns the values the museum shipped with.

/// Central configuration for camera navigation.
#[derive(Clone, Copy, Debug)]
pub struct NavigationConfig {
    /// Duration of a click-to-move flight (milliseconds)
    pub move_duration_ms: f64,
    /// Duration of a zoom-in or zoom-out flight (milliseconds)
    pub zoom_duration_ms: f64,
    /// Delay from zoom-in acceptance until the popup/narration fires
    /// (milliseconds, matches the zoom duration so the popup lands at
    /// arrival and never mid-flight)
    pub display_delay_ms: f64,
    /// Viewing distance from a wall-mounted exhibit (meters along wall normal)
    pub wall_offset: f32,
    /// Diagonal viewing offset from a free-standing exhibit (meters on x and z)
    pub freestanding_offset: f32,
    /// Minimum click-to-move distance; closer clicks emit no intent (meters)
    pub min_click_distance: f32,
    /// Distance below which a move target counts as already reached (meters)
    pub completion_epsilon: f32,
    /// Walking speed for keyboard/swipe locomotion (meters per second)
    pub move_speed: f32,
    /// Turn speed multiplier for horizontal swipes
    pub turn_speed: f32,
    /// Pointer-drag look sensitivity (radians per pixel)
    pub look_sensitivity: f32,
    /// Pointer movement beyond this marks the gesture a drag, not a click (pixels)
    pub drag_threshold_px: f32,
    /// Clicks within this window of the last accepted click are dropped (milliseconds)
    pub click_debounce_ms: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            move_duration_ms: 1000.0,
            zoom_duration_ms: 1200.0,
            display_delay_ms: 1200.0,
            wall_offset: 3.0,
            freestanding_offset: 2.0,
            min_click_distance: 0.3,
            completion_epsilon: 1e-3,
            move_speed: 2.0,
            turn_speed: 0.8,
            look_sensitivity: 0.002,
            drag_threshold_px: 5.0,
            click_debounce_ms: 100.0,
        }
    }
}
