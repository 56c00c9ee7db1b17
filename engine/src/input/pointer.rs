//! Pointer Input Module
//!
//! Drag/click gesture recognition for mouse and pen input. Decoupled from
//! any windowing system; the shell feeds raw pixel events in and gets
//! motion intents and click commits back.
//!
//! A press starts a gesture. Once accumulated movement exceeds the drag
//! threshold the gesture is a drag for its whole lifetime and every
//! subsequent move emits a free-look intent. A release under the threshold
//! is a click, subject to a debounce window so double-fired browser/window
//! events do not commit two moves.

use glam::Vec3;

use crate::camera::raycast::FloorResolver;
use crate::camera::CameraTransform;
use crate::navigation::config::NavigationConfig;
use crate::navigation::intent::MotionIntent;

/// 2D pixel position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate distance to another position.
    pub fn distance(&self, other: &Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Outcome of a pointer release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerRelease {
    /// Gesture stayed under the drag threshold and passed the debounce
    Click(Position),
    /// Gesture was a drag; look intents were already emitted along the way
    DragEnd,
    /// Release without a matching press, or a click inside the debounce window
    Ignored,
}

/// State of the gesture in progress.
#[derive(Debug, Clone, Copy)]
struct PressState {
    start: Position,
    last: Position,
    dragging: bool,
}

/// Gesture recognizer for mouse/pen input.
///
/// One instance per pointer; feed it press/move/release in event order.
#[derive(Debug, Clone)]
pub struct PointerDriver {
    config: NavigationConfig,
    press: Option<PressState>,
    last_click_ms: Option<f64>,
}

impl PointerDriver {
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            config,
            press: None,
            last_click_ms: None,
        }
    }

    /// Whether a drag gesture is currently in progress.
    pub fn is_dragging(&self) -> bool {
        self.press.is_some_and(|p| p.dragging)
    }

    /// Begin a gesture at a pixel position.
    pub fn on_press(&mut self, x: f32, y: f32) {
        let position = Position::new(x, y);
        self.press = Some(PressState {
            start: position,
            last: position,
            dragging: false,
        });
    }

    /// Feed a pointer movement.
    ///
    /// Returns a free-look intent while a drag is in progress, `None` while
    /// the gesture is still under the drag threshold or no button is down.
    /// Moving the pointer right looks right; moving it down looks down.
    pub fn on_move(&mut self, x: f32, y: f32) -> Option<MotionIntent> {
        let press = self.press.as_mut()?;
        let current = Position::new(x, y);
        let dx = current.x - press.last.x;
        let dy = current.y - press.last.y;
        press.last = current;

        // Once a drag, always a drag: the release can no longer be a click
        if !press.dragging && press.start.distance(&current) > self.config.drag_threshold_px {
            press.dragging = true;
        }

        if press.dragging {
            Some(MotionIntent::Look {
                delta_yaw: dx * self.config.look_sensitivity,
                delta_pitch: -dy * self.config.look_sensitivity,
            })
        } else {
            None
        }
    }

    /// End the gesture.
    ///
    /// A release under the drag threshold is a click, unless another click
    /// was accepted within the debounce window.
    pub fn on_release(&mut self, x: f32, y: f32, now_ms: f64) -> PointerRelease {
        let Some(press) = self.press.take() else {
            return PointerRelease::Ignored;
        };
        let current = Position::new(x, y);
        if press.dragging || press.start.distance(&current) > self.config.drag_threshold_px {
            return PointerRelease::DragEnd;
        }
        if let Some(last) = self.last_click_ms {
            if now_ms - last < self.config.click_debounce_ms {
                return PointerRelease::Ignored;
            }
        }
        self.last_click_ms = Some(now_ms);
        PointerRelease::Click(current)
    }

    /// Convert an accepted click into a click-to-move intent.
    ///
    /// Resolves the pixel position against the floor; clicks that miss the
    /// walkable floor or land closer than the minimum move distance produce
    /// no intent.
    ///
    /// # Arguments
    /// * `click` - Pixel position from a [`PointerRelease::Click`]
    /// * `viewport` - Viewport size in pixels (width, height)
    /// * `camera` - Current camera transform
    /// * `resolver` - Floor resolver for the room
    pub fn click_to_move(
        &self,
        click: Position,
        viewport: (f32, f32),
        camera: &CameraTransform,
        resolver: &FloorResolver,
    ) -> Option<MotionIntent> {
        let hit = self.resolve_floor(click, viewport, camera, resolver)?;
        // Compare in the walking plane so eye height does not inflate distance
        let flat = Vec3::new(hit.x, camera.position.y, hit.z);
        if camera.position.distance(flat) < self.config.min_click_distance {
            return None;
        }
        Some(MotionIntent::MoveTo { point: hit })
    }

    /// Resolve a pixel position to a floor point, for hover feedback.
    ///
    /// Same projection as the click commit, with no distance gate.
    pub fn resolve_floor(
        &self,
        position: Position,
        viewport: (f32, f32),
        camera: &CameraTransform,
        resolver: &FloorResolver,
    ) -> Option<Vec3> {
        if viewport.0 <= 0.0 || viewport.1 <= 0.0 {
            return None;
        }
        // Pixel coordinates have Y down; the resolver takes bottom-left UV
        let uv = (position.x / viewport.0, 1.0 - position.y / viewport.1);
        resolver.resolve(camera, uv)
    }

    /// Drop any gesture in progress (pointer left the window, focus lost).
    pub fn reset(&mut self) {
        self.press = None;
    }
}
