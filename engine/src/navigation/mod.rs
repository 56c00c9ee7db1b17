//! Navigation Module
//!
//! The camera navigation stack: intents raised by input drivers, the state
//! machine that arbitrates them, the animation jobs it runs, and the preset
//! waypoint menu.

pub mod animation;
pub mod config;
pub mod intent;
pub mod navigator;
pub mod presets;

pub use animation::{AnimationJob, AnimationKind, ease_in_out_cubic};
pub use config::NavigationConfig;
pub use intent::{LocomoteAxis, MotionIntent};
pub use navigator::{NavEvent, NavStatus, NavigationMode, Navigator};
pub use presets::{Waypoint, WaypointSet};
