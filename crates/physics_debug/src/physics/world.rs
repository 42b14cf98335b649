//! Physics world container
//!
//! Holds bodies in insertion order. No simulation happens here; callers move
//! bodies themselves (or mirror an external engine's state into this model).

use super::body::{Body, BodyId};

/// Read-only view of an ordered body list
///
/// This is all the debug renderer needs from a physics engine. Body order is
/// the enumeration order of debug slots.
pub trait BodySource {
    /// Bodies in world order
    fn bodies(&self) -> &[Body];

    /// Total number of shapes across all bodies
    fn shape_count(&self) -> usize {
        self.bodies().iter().map(|body| body.shapes.len()).sum()
    }
}

impl BodySource for [Body] {
    fn bodies(&self) -> &[Body] {
        self
    }
}

impl BodySource for Vec<Body> {
    fn bodies(&self) -> &[Body] {
        self
    }
}

/// Ordered collection of rigid bodies
#[derive(Debug, Default)]
pub struct PhysicsWorld {
    bodies: Vec<Body>,
    next_id: u32,
}

impl PhysicsWorld {
    /// Create an empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a body at the end of the world order and assign it a fresh id
    pub fn add_body(&mut self, mut body: Body) -> BodyId {
        let id = BodyId::new(self.next_id);
        self.next_id += 1;
        body.id = id;
        log::trace!("Added {} with {} shape(s)", id, body.shapes.len());
        self.bodies.push(body);
        id
    }

    /// Remove a body, keeping the relative order of the others
    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        let index = self.bodies.iter().position(|body| body.id == id)?;
        log::trace!("Removed {}", id);
        Some(self.bodies.remove(index))
    }

    /// Get a body by id
    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|body| body.id == id)
    }

    /// Get a mutable body by id
    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|body| body.id == id)
    }

    /// Number of bodies
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Remove every body; ids are not reused afterwards
    pub fn clear(&mut self) {
        self.bodies.clear();
    }
}

impl BodySource for PhysicsWorld {
    fn bodies(&self) -> &[Body] {
        &self.bodies
    }
}
