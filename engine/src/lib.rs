//! Museum Walkthrough Engine Library
//!
//! A headless first-person navigation engine for a virtual museum
//! walkthrough. This library owns the camera state machine and everything
//! that feeds it; rendering and audio live in the shell on top.
//!
//! # Modules
//!
//! - [`camera`] - The authoritative camera transform and screen-to-floor raycasting
//! - [`navigation`] - Intent arbitration, animated transitions, preset waypoints
//! - [`input`] - Platform-agnostic pointer, keyboard, and touch gesture drivers
//! - [`exhibits`] - The exhibit registry (paintings, interactive table)
//! - [`world`] - Walkable floor bounds
//!
//! # Example
//!
//! ```
//! use museum_engine::exhibits::ExhibitRegistry;
//! use museum_engine::navigation::{MotionIntent, Navigator};
//! use glam::Vec3;
//!
//! let mut navigator = Navigator::default();
//! let registry = ExhibitRegistry::default_museum();
//!
//! // Click-to-move toward the front wall
//! navigator.submit(
//!     MotionIntent::MoveTo {
//!         point: Vec3::new(0.0, 0.0, -3.0),
//!     },
//!     &registry,
//!     0.0,
//! );
//!
//! // Advance the simulation with the shell's clock
//! navigator.update(16.0);
//! for event in navigator.drain_events() {
//!     println!("[Shell] {event:?}");
//! }
//! ```

pub mod camera;
pub mod exhibits;
pub mod input;
pub mod navigation;
pub mod world;

// Re-export the types nearly every caller touches
pub use camera::{CameraTransform, FloorResolver, RaycastConfig};
pub use exhibits::{Exhibit, ExhibitKind, ExhibitRegistry, Placement};
pub use input::{KeyCode, KeyboardDriver, PointerDriver, TouchDriver};
pub use navigation::{
    MotionIntent, NavEvent, NavStatus, NavigationConfig, NavigationMode, Navigator, WaypointSet,
};
pub use world::FloorBounds;
