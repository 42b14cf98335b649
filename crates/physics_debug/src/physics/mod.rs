//! Physics world model consumed by the debug renderer
//!
//! Mirrors the data a rigid-body engine exposes: an ordered list of bodies,
//! each with a world pose and shapes attached at local offsets. Nothing here
//! integrates motion or detects collisions.

pub mod shape;
pub mod body;
pub mod world;

pub use shape::{AttachedShape, Shape, ShapeType};
pub use body::{Body, BodyId};
pub use world::{BodySource, PhysicsWorld};
