//! Navigation State Machine
//!
//! The core of the walkthrough: owns the single authoritative camera
//! transform, arbitrates intents from every input source, and runs the two
//! animated transitions (point-to-point move, exhibit zoom). At most one
//! motion type is active at a time; every transition is interruptible and
//! resets to a consistent state.
//!
//! ## Arbitration rules
//! - Idle/FreeLook/Locomoting flow into each other freely; their intents
//!   mutate the transform immediately (bounds-clamped).
//! - Moving ignores look/locomote/click intents until it completes.
//! - Zoom outranks Move: a new `ZoomTo` forcibly resets whatever is in
//!   flight (its job is discarded with no completion side effects), while
//!   `MoveTo` during any zoom state is dropped, never queued.
//! - Interactive suspends all camera motion and intent processing.
//!
//! The navigator never reads a clock; callers pass their monotonic time in
//! milliseconds to `submit` and `update`, which keeps every path
//! deterministic under test.

use glam::Vec3;

use crate::camera::CameraTransform;
use crate::exhibits::{Exhibit, ExhibitKind, ExhibitRegistry, Placement};
use crate::navigation::animation::{AnimationJob, AnimationKind};
use crate::navigation::config::NavigationConfig;
use crate::navigation::intent::{LocomoteAxis, MotionIntent};
use crate::world::FloorBounds;

/// Exactly one mode is active at any instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NavigationMode {
    /// No motion; accepting any intent
    #[default]
    Idle,
    /// Pointer drag is rotating the camera
    FreeLook,
    /// Keyboard/swipe walking
    Locomoting,
    /// Animated click-to-move flight in progress
    Moving,
    /// Animated flight toward an exhibit viewing pose
    ZoomingIn,
    /// Parked at an exhibit viewing pose
    ZoomedIn,
    /// Animated flight back to the saved pose
    ZoomingOut,
    /// Table overlay open; all camera motion suspended
    Interactive,
}

/// Completion events consumed by the UI layer.
#[derive(Clone, Debug, PartialEq)]
pub enum NavEvent {
    /// A click-to-move flight reached its target
    MoveCompleted,
    /// A zoom-in flight reached the exhibit viewing pose
    ZoomInCompleted { exhibit_id: String },
    /// The delayed popup/narration for a zoomed exhibit is due
    ExhibitDisplayed {
        exhibit_id: String,
        display_name: String,
        narration_text: String,
    },
    /// A zoom-out flight returned to the saved pose
    ZoomOutCompleted,
    /// The interactive table overlay opened
    InteractiveOpened { exhibit_id: String },
    /// The interactive table overlay closed
    InteractiveClosed,
    /// Any in-flight narration should stop
    NarrationCancelled,
    /// A preset waypoint jump was applied
    PresetJumped,
}

/// State-machine outputs that drive UI markers and buttons.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavStatus {
    pub mode: NavigationMode,
    pub is_moving: bool,
    pub is_animating: bool,
    pub is_zoomed_in: bool,
    pub is_interactive: bool,
    pub destination_visible: bool,
    pub hover_visible: bool,
}

/// Popup/narration scheduled to fire when the zoom-in flight arrives.
#[derive(Clone, Debug)]
struct PendingDisplay {
    exhibit_id: String,
    display_name: String,
    narration_text: String,
    due_ms: f64,
}

/// The navigation state machine. Sole writer of the camera transform.
#[derive(Clone, Debug)]
pub struct Navigator {
    transform: CameraTransform,
    mode: NavigationMode,
    bounds: FloorBounds,
    config: NavigationConfig,
    /// The one in-flight interpolation, if any
    animation: Option<AnimationJob>,
    /// Pose snapshotted when the current zoom was accepted; zoom-out target
    saved_transform: Option<CameraTransform>,
    /// Exhibit the camera is zooming toward / parked at
    zoomed_exhibit: Option<String>,
    /// Scheduled popup, cancelled by any superseding navigation
    pending_display: Option<PendingDisplay>,
    /// Destination marker for an in-flight move
    destination: Option<Vec3>,
    /// Floor point currently under the pointer, fed by the shell
    hover: Option<Vec3>,
    /// Whether a continuous intent (look/locomote) arrived since last tick
    continuous_active: bool,
    events: Vec<NavEvent>,
}

impl Navigator {
    /// Create a navigator parked at the room center.
    pub fn new(bounds: FloorBounds, config: NavigationConfig) -> Self {
        Self {
            transform: CameraTransform::at(bounds.clamp(Vec3::ZERO)),
            mode: NavigationMode::Idle,
            bounds,
            config,
            animation: None,
            saved_transform: None,
            zoomed_exhibit: None,
            pending_display: None,
            destination: None,
            hover: None,
            continuous_active: false,
            events: Vec::new(),
        }
    }

    /// Current camera pose.
    pub fn transform(&self) -> &CameraTransform {
        &self.transform
    }

    /// Current navigation mode.
    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    /// Destination marker position while a move is in flight.
    pub fn destination(&self) -> Option<Vec3> {
        self.destination
    }

    /// Report the floor point under the pointer, resolved by the shell each
    /// pointer-move sample (`None` when the pointer is off the floor). Drives
    /// the hover marker; only shown while free navigation is possible.
    pub fn set_hover(&mut self, point: Option<Vec3>) {
        self.hover = point;
    }

    /// Hover marker position, if one should be shown.
    pub fn hover(&self) -> Option<Vec3> {
        if self.in_continuous_mode() {
            self.hover
        } else {
            None
        }
    }

    /// The floor bounds this navigator clamps against.
    pub fn bounds(&self) -> &FloorBounds {
        &self.bounds
    }

    /// State-machine outputs for the UI shell.
    pub fn status(&self) -> NavStatus {
        NavStatus {
            mode: self.mode,
            is_moving: self.mode == NavigationMode::Moving,
            is_animating: self.animation.is_some(),
            is_zoomed_in: self.mode == NavigationMode::ZoomedIn,
            is_interactive: self.mode == NavigationMode::Interactive,
            destination_visible: self.destination.is_some(),
            hover_visible: self.hover().is_some(),
        }
    }

    /// Take all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<NavEvent> {
        std::mem::take(&mut self.events)
    }

    /// Arbitrate one intent. Returns whether it was accepted.
    ///
    /// Rejected intents are dropped silently, never queued.
    pub fn submit(
        &mut self,
        intent: MotionIntent,
        registry: &ExhibitRegistry,
        now_ms: f64,
    ) -> bool {
        match intent {
            MotionIntent::Look {
                delta_yaw,
                delta_pitch,
            } => self.apply_look(delta_yaw, delta_pitch),
            MotionIntent::Locomote { axis, amount } => self.apply_locomote(axis, amount),
            MotionIntent::MoveTo { point } => self.start_move(point, now_ms),
            MotionIntent::ZoomTo { exhibit_id } => {
                let Some(exhibit) = registry.get(&exhibit_id) else {
                    return false;
                };
                self.start_zoom(exhibit, now_ms)
            }
            MotionIntent::ZoomOut => self.start_zoom_out(now_ms),
            MotionIntent::PresetJump { transform } => self.preset_jump(transform),
        }
    }

    /// Advance one frame: progress any in-flight animation, write the
    /// interpolated transform, fire due display events, and decay the
    /// continuous modes back to Idle when their driver went quiet.
    pub fn update(&mut self, now_ms: f64) {
        if let Some(job) = self.animation.clone() {
            if job.is_finished(now_ms) {
                // Pin the exact target so completion leaves no float drift
                self.transform = job.target;
                self.animation = None;
                self.finish_animation(job.kind);
            } else {
                self.transform = job.sample(now_ms);
            }
        } else if matches!(
            self.mode,
            NavigationMode::FreeLook | NavigationMode::Locomoting
        ) && !self.continuous_active
        {
            self.mode = NavigationMode::Idle;
        }
        self.continuous_active = false;

        let display_due = self
            .pending_display
            .as_ref()
            .is_some_and(|p| now_ms >= p.due_ms);
        if display_due {
            if let Some(pending) = self.pending_display.take() {
                self.events.push(NavEvent::ExhibitDisplayed {
                    exhibit_id: pending.exhibit_id,
                    display_name: pending.display_name,
                    narration_text: pending.narration_text,
                });
            }
        }
    }

    /// Open the interactive overlay for an exhibit, suspending all camera
    /// motion. Rejected if the overlay is already open.
    pub fn open_interactive(&mut self, exhibit_id: &str) -> bool {
        if self.mode == NavigationMode::Interactive {
            return false;
        }
        self.force_reset();
        self.mode = NavigationMode::Interactive;
        self.events.push(NavEvent::InteractiveOpened {
            exhibit_id: exhibit_id.to_string(),
        });
        true
    }

    /// Close the interactive table overlay and return to Idle.
    pub fn close_interactive(&mut self) -> bool {
        if self.mode != NavigationMode::Interactive {
            return false;
        }
        self.mode = NavigationMode::Idle;
        self.events.push(NavEvent::InteractiveClosed);
        true
    }

    // ------------------------------------------------------------------
    // Intent handlers
    // ------------------------------------------------------------------

    fn apply_look(&mut self, delta_yaw: f32, delta_pitch: f32) -> bool {
        if !self.in_continuous_mode() {
            return false;
        }
        self.transform.rotate(delta_yaw, delta_pitch);
        self.mode = NavigationMode::FreeLook;
        self.continuous_active = true;
        true
    }

    fn apply_locomote(&mut self, axis: LocomoteAxis, amount: f32) -> bool {
        if !self.in_continuous_mode() {
            return false;
        }
        let direction = match axis {
            LocomoteAxis::Forward => self.transform.forward_flat(),
            LocomoteAxis::Strafe => self.transform.right_flat(),
        };
        let candidate = self.transform.position + direction * amount;
        self.transform.position = self.bounds.clamp(candidate);
        self.mode = NavigationMode::Locomoting;
        self.continuous_active = true;
        true
    }

    fn start_move(&mut self, point: Vec3, now_ms: f64) -> bool {
        if !self.in_continuous_mode() {
            // Dropped while Moving, during any zoom state, or Interactive
            return false;
        }
        let target_pos = self
            .bounds
            .clamp(Vec3::new(point.x, self.bounds.eye_height, point.z));

        if self.transform.position.distance(target_pos) < self.config.completion_epsilon {
            // Degenerate move: accepted, completes without animating
            self.transform.position = target_pos;
            self.mode = NavigationMode::Idle;
            self.events.push(NavEvent::MoveCompleted);
            return true;
        }

        let target = CameraTransform {
            position: target_pos,
            ..self.transform
        };
        self.animation = Some(AnimationJob::new(
            AnimationKind::Move,
            self.transform,
            target,
            now_ms,
            self.config.move_duration_ms,
        ));
        self.destination = Some(target_pos);
        self.mode = NavigationMode::Moving;
        true
    }

    fn start_zoom(&mut self, exhibit: &Exhibit, now_ms: f64) -> bool {
        if self.mode == NavigationMode::Interactive {
            return false;
        }
        match exhibit.kind {
            // The table opens the overlay directly; no camera flight
            ExhibitKind::Table => self.open_interactive(&exhibit.id),
            ExhibitKind::ZoomOutSentinel => self.start_zoom_out(now_ms),
            ExhibitKind::Painting => {
                // Newest zoom always wins: discard whatever is in flight
                // with no completion side effects
                self.force_reset();

                // Snapshot at intent-acceptance time, not animation start,
                // so a rapid double-click saves the pose the user stood at
                self.saved_transform = Some(self.transform);

                let target = self.zoom_target(exhibit);
                self.animation = Some(AnimationJob::new(
                    AnimationKind::Zoom,
                    self.transform,
                    target,
                    now_ms,
                    self.config.zoom_duration_ms,
                ));
                self.zoomed_exhibit = Some(exhibit.id.clone());
                // Fixed-delay timer started with the flight; the delay equals
                // the flight duration, so the popup lands at arrival and can
                // never appear mid-flight
                self.pending_display = Some(PendingDisplay {
                    exhibit_id: exhibit.id.clone(),
                    display_name: exhibit.display_name.clone(),
                    narration_text: exhibit.narration_text.clone(),
                    due_ms: now_ms + self.config.display_delay_ms,
                });
                self.mode = NavigationMode::ZoomingIn;
                true
            }
        }
    }

    fn start_zoom_out(&mut self, now_ms: f64) -> bool {
        if !matches!(
            self.mode,
            NavigationMode::ZoomedIn | NavigationMode::ZoomingIn
        ) {
            return false;
        }
        let Some(saved) = self.saved_transform else {
            return false;
        };
        self.force_reset();
        self.events.push(NavEvent::NarrationCancelled);

        self.animation = Some(AnimationJob::new(
            AnimationKind::Zoom,
            self.transform,
            saved,
            now_ms,
            self.config.zoom_duration_ms,
        ));
        self.saved_transform = Some(saved);
        self.mode = NavigationMode::ZoomingOut;
        true
    }

    fn preset_jump(&mut self, target: CameraTransform) -> bool {
        // Rejected whenever a flight is in progress or the overlay is open;
        // never queued
        if self.animation.is_some() || self.mode == NavigationMode::Interactive {
            return false;
        }
        self.force_reset();
        self.saved_transform = None;
        self.zoomed_exhibit = None;
        self.transform = CameraTransform {
            position: self.bounds.clamp(target.position),
            ..target
        };
        self.mode = NavigationMode::Idle;
        self.events.push(NavEvent::NarrationCancelled);
        self.events.push(NavEvent::PresetJumped);
        true
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn in_continuous_mode(&self) -> bool {
        matches!(
            self.mode,
            NavigationMode::Idle | NavigationMode::FreeLook | NavigationMode::Locomoting
        )
    }

    /// Discard any in-flight job and its scheduled side effects.
    ///
    /// The superseded job's completion events never fire; the pending popup
    /// can no longer appear after the user navigated elsewhere.
    fn force_reset(&mut self) {
        self.animation = None;
        self.pending_display = None;
        self.destination = None;
    }

    fn finish_animation(&mut self, kind: AnimationKind) {
        match kind {
            AnimationKind::Move => {
                self.destination = None;
                self.mode = NavigationMode::Idle;
                self.events.push(NavEvent::MoveCompleted);
            }
            // A zoom job can only run to completion in a zoom mode; every
            // other mode change discards the job via force_reset first.
            // Matched exhaustively so a new mode has to decide its behavior.
            AnimationKind::Zoom => match self.mode {
                NavigationMode::ZoomingIn => {
                    self.mode = NavigationMode::ZoomedIn;
                    if let Some(id) = self.zoomed_exhibit.clone() {
                        self.events.push(NavEvent::ZoomInCompleted { exhibit_id: id });
                    }
                }
                NavigationMode::ZoomingOut => {
                    self.saved_transform = None;
                    self.zoomed_exhibit = None;
                    self.mode = NavigationMode::Idle;
                    self.events.push(NavEvent::ZoomOutCompleted);
                }
                NavigationMode::Idle
                | NavigationMode::FreeLook
                | NavigationMode::Locomoting
                | NavigationMode::Moving
                | NavigationMode::ZoomedIn
                | NavigationMode::Interactive => {}
            },
        }
    }

    /// Viewing pose for an exhibit.
    ///
    /// Wall-mounted: offset 3 units along the wall-normal axis, picked by
    /// which axis the exhibit's position is biased toward, signed away from
    /// the wall. Free-standing: (+2, +2) diagonal in the floor plane. The
    /// pose looks from the viewing position toward the exhibit.
    fn zoom_target(&self, exhibit: &Exhibit) -> CameraTransform {
        let p = exhibit.position;
        let eye = self.bounds.eye_height;
        let position = match exhibit.placement {
            Placement::WallMounted => {
                if p.x.abs() > p.z.abs() {
                    Vec3::new(p.x - p.x.signum() * self.config.wall_offset, eye, p.z)
                } else {
                    Vec3::new(p.x, eye, p.z - p.z.signum() * self.config.wall_offset)
                }
            }
            Placement::FreeStanding => Vec3::new(
                p.x + self.config.freestanding_offset,
                eye,
                p.z + self.config.freestanding_offset,
            ),
        };
        let mut target = CameraTransform::at(position);
        target.look_at(p);
        target
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(FloorBounds::default(), NavigationConfig::default())
    }
}
