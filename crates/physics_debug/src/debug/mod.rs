//! Debug visualization of physics state
//!
//! Based on Game Engine Architecture 3rd Edition, Chapter 10.2:
//! "Debug Drawing Facilities"

pub mod collision_debug;

pub use collision_debug::{DebugSlot, PhysicsDebugRenderer, ShapeKey};
