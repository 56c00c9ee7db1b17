//! World Module
//!
//! World-space policy for the museum room: the walkable floor rectangle
//! and fixed camera eye height.

pub mod bounds;

pub use bounds::FloorBounds;
