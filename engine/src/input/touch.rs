//! Touch Input Module
//!
//! Single-finger gesture recognition for touch screens. Each move sample is
//! measured against a re-anchoring reference point; once it exceeds the drag
//! threshold the dominant axis of that sample decides: horizontal swipes turn
//! in place (world-grab, swiping right turns left), vertical swipes walk
//! forward/backward. The reference re-anchors after every applied sample, so
//! a long swipe keeps producing motion for as long as the finger moves.
//!
//! A touch that ends without ever crossing the threshold is a tap, committed
//! through the same debounce as pointer clicks.

use crate::input::pointer::Position;
use crate::navigation::config::NavigationConfig;
use crate::navigation::intent::{LocomoteAxis, MotionIntent};

/// Swipe-to-turn gain: radians of yaw per pixel, before the turn speed factor.
pub const SWIPE_TURN_GAIN: f32 = 0.004;
/// Swipe-to-walk gain: meters per pixel, before the move speed factor.
pub const SWIPE_MOVE_GAIN: f32 = 0.01;

/// Axis the last applied swipe sample fell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeAxis {
    /// Turning in place
    Horizontal,
    /// Walking forward/backward
    Vertical,
}

/// Outcome of a touch ending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchRelease {
    /// Touch never crossed the drag threshold and passed the debounce
    Tap(Position),
    /// Touch was a swipe; motion intents were already emitted along the way
    SwipeEnd,
    /// End without a matching start, or a tap inside the debounce window
    Ignored,
}

#[derive(Debug, Clone, Copy)]
struct TouchState {
    /// Reference point samples are measured against; re-anchors per sample
    anchor: Position,
    /// Whether any sample crossed the threshold
    swiped: bool,
    /// Axis of the last applied sample
    axis: Option<SwipeAxis>,
}

/// Gesture recognizer for single-finger touch input.
///
/// Additional fingers are ignored; the shell should forward only the
/// primary touch.
#[derive(Debug, Clone)]
pub struct TouchDriver {
    config: NavigationConfig,
    touch: Option<TouchState>,
    last_tap_ms: Option<f64>,
}

impl TouchDriver {
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            config,
            touch: None,
            last_tap_ms: None,
        }
    }

    /// Whether the current touch has produced any swipe motion.
    pub fn is_swiping(&self) -> bool {
        self.touch.is_some_and(|t| t.swiped)
    }

    /// Axis of the most recent swipe sample, if any.
    pub fn swipe_axis(&self) -> Option<SwipeAxis> {
        self.touch.and_then(|t| t.axis)
    }

    /// Begin a touch at a pixel position.
    pub fn on_touch_start(&mut self, x: f32, y: f32) {
        self.touch = Some(TouchState {
            anchor: Position::new(x, y),
            swiped: false,
            axis: None,
        });
    }

    /// Feed a touch movement.
    ///
    /// Returns a turn intent for horizontal samples (world-grab: swiping
    /// right turns left), a walk intent for vertical samples (finger up walks
    /// forward), `None` while the sample is still under the threshold.
    pub fn on_touch_move(&mut self, x: f32, y: f32) -> Option<MotionIntent> {
        let touch = self.touch.as_mut()?;
        let dx = x - touch.anchor.x;
        let dy = y - touch.anchor.y;
        if dx.abs() <= self.config.drag_threshold_px && dy.abs() <= self.config.drag_threshold_px {
            return None;
        }

        touch.swiped = true;
        touch.anchor = Position::new(x, y);

        if dx.abs() > dy.abs() {
            touch.axis = Some(SwipeAxis::Horizontal);
            Some(MotionIntent::Look {
                delta_yaw: -dx * SWIPE_TURN_GAIN * self.config.turn_speed,
                delta_pitch: 0.0,
            })
        } else {
            touch.axis = Some(SwipeAxis::Vertical);
            Some(MotionIntent::Locomote {
                axis: LocomoteAxis::Forward,
                // Screen Y grows downward; swiping up walks forward
                amount: -dy * SWIPE_MOVE_GAIN * self.config.move_speed,
            })
        }
    }

    /// End the touch.
    pub fn on_touch_end(&mut self, x: f32, y: f32, now_ms: f64) -> TouchRelease {
        let Some(touch) = self.touch.take() else {
            return TouchRelease::Ignored;
        };
        if touch.swiped {
            return TouchRelease::SwipeEnd;
        }
        if let Some(last) = self.last_tap_ms {
            if now_ms - last < self.config.click_debounce_ms {
                return TouchRelease::Ignored;
            }
        }
        self.last_tap_ms = Some(now_ms);
        TouchRelease::Tap(Position::new(x, y))
    }

    /// Drop any gesture in progress (touch cancelled by the system).
    pub fn reset(&mut self) {
        self.touch = None;
    }
}
