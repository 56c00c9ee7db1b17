//! Exhibits Module
//!
//! Static exhibit data consumed by the navigation state machine: positions,
//! placement hints, and descriptive payloads for the museum's interactive
//! targets.

pub mod registry;

pub use registry::{Exhibit, ExhibitKind, ExhibitRegistry, Placement, RegistryError};
