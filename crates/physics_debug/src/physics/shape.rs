//! Collision shape model
//!
//! Shapes are stored in body-local space; the owning [`Body`](super::Body)
//! places them in the world.

use crate::foundation::math::{Quat, Transform, Vec3};

/// Type tag of a collision shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// Sphere defined by a radius
    Sphere,
    /// Box defined by half extents
    Box,
    /// Infinite plane
    Plane,
    /// Point mass without extent
    Particle,
    /// Cylinder
    Cylinder,
    /// Convex polyhedron
    ConvexPolyhedron,
    /// Terrain height field
    Heightfield,
    /// Triangle mesh
    Trimesh,
}

impl ShapeType {
    /// Human readable name, used in log output
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::Box => "box",
            Self::Plane => "plane",
            Self::Particle => "particle",
            Self::Cylinder => "cylinder",
            Self::ConvexPolyhedron => "convex polyhedron",
            Self::Heightfield => "heightfield",
            Self::Trimesh => "trimesh",
        }
    }
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Collision shape
///
/// Only spheres and boxes carry dimensions; everything else is kept as a bare
/// type tag and is not visualized.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Sphere centered on its attachment point
    Sphere {
        /// Sphere radius
        radius: f32,
    },
    /// Box centered on its attachment point
    Box {
        /// Half the edge length along each local axis
        half_extents: Vec3,
    },
    /// Shape kind with no debug visualization
    Unsupported(ShapeType),
}

impl Shape {
    /// Creates a sphere with the given radius
    pub const fn sphere(radius: f32) -> Self {
        Self::Sphere { radius }
    }

    /// Creates a box with the given half extents
    pub const fn cuboid(half_extents: Vec3) -> Self {
        Self::Box { half_extents }
    }

    /// Type tag of this shape
    pub const fn shape_type(&self) -> ShapeType {
        match self {
            Self::Sphere { .. } => ShapeType::Sphere,
            Self::Box { .. } => ShapeType::Box,
            Self::Unsupported(shape_type) => *shape_type,
        }
    }
}

/// A shape attached to a body at a local offset and orientation
#[derive(Debug, Clone, PartialEq)]
pub struct AttachedShape {
    /// The collision shape
    pub shape: Shape,
    /// Offset from the body origin, in body space
    pub offset: Vec3,
    /// Orientation relative to the body
    pub orientation: Quat,
}

impl AttachedShape {
    /// Attach a shape at the given local offset and orientation
    pub const fn new(shape: Shape, offset: Vec3, orientation: Quat) -> Self {
        Self { shape, offset, orientation }
    }

    /// Attach a shape at the body origin
    pub fn centered(shape: Shape) -> Self {
        Self::new(shape, Vec3::zeros(), Quat::identity())
    }

    /// Offset and orientation relative to the body
    pub fn local_transform(&self) -> Transform {
        Transform::from_position_rotation(self.offset, self.orientation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_type_tags() {
        assert_eq!(Shape::sphere(1.0).shape_type(), ShapeType::Sphere);
        assert_eq!(Shape::cuboid(Vec3::new(1.0, 2.0, 3.0)).shape_type(), ShapeType::Box);
        assert_eq!(Shape::Unsupported(ShapeType::Plane).shape_type(), ShapeType::Plane);
    }

    #[test]
    fn test_centered_attachment() {
        let attached = AttachedShape::centered(Shape::sphere(0.5));
        assert_eq!(attached.offset, Vec3::zeros());
        assert_eq!(attached.orientation, Quat::identity());
    }
}
