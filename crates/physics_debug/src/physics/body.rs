//! Rigid body model

use super::shape::{AttachedShape, Shape};
use crate::foundation::math::{Quat, Transform, Vec3};

/// Stable body identifier
///
/// Assigned by [`PhysicsWorld`](super::PhysicsWorld) on insertion and never
/// reused, so it survives removal of other bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId {
    id: u32,
}

impl BodyId {
    /// Create a body id from a raw value
    pub const fn new(id: u32) -> Self {
        Self { id }
    }

    /// Get the raw id
    pub const fn id(&self) -> u32 {
        self.id
    }
}

impl std::fmt::Display for BodyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "body#{}", self.id)
    }
}

/// A rigid body with a world pose and an ordered list of shapes
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub(super) id: BodyId,

    /// World-space position
    pub position: Vec3,

    /// World-space orientation
    pub orientation: Quat,

    /// Attached shapes in declaration order
    pub shapes: Vec<AttachedShape>,
}

impl Body {
    /// Create a body without shapes
    ///
    /// The id is a placeholder until the body is added to a world.
    pub const fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            id: BodyId::new(0),
            position,
            orientation,
            shapes: Vec::new(),
        }
    }

    /// Create a body at the given position with identity orientation
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Quat::identity())
    }

    /// Set the id explicitly, for bodies mirrored from an external engine
    ///
    /// Bodies in a plain slice that share an id are still mirrored, but
    /// only by their order among each other; distinct ids keep their debug
    /// meshes when earlier bodies are removed.
    #[must_use]
    pub fn with_id(mut self, id: BodyId) -> Self {
        self.id = id;
        self
    }

    /// Builder-style shape attachment
    #[must_use]
    pub fn with_shape(mut self, shape: Shape, offset: Vec3, orientation: Quat) -> Self {
        self.add_shape(shape, offset, orientation);
        self
    }

    /// Attach a shape; returns its index within this body
    pub fn add_shape(&mut self, shape: Shape, offset: Vec3, orientation: Quat) -> usize {
        self.shapes.push(AttachedShape::new(shape, offset, orientation));
        self.shapes.len() - 1
    }

    /// Identifier assigned by the owning world
    pub const fn id(&self) -> BodyId {
        self.id
    }

    /// World pose of the body
    pub fn transform(&self) -> Transform {
        Transform::from_position_rotation(self.position, self.orientation)
    }

    /// World position and orientation of the shape at `index`
    ///
    /// Position is `orientation * offset + position`, orientation is
    /// `orientation * shape_orientation`.
    pub fn shape_world_transform(&self, index: usize) -> Option<(Vec3, Quat)> {
        self.shapes.get(index).map(|attached| {
            let world = self.transform().combine(&attached.local_transform());
            (world.position, world.rotation)
        })
    }
}
