//! Shared unit geometry for debug meshes
//!
//! One unit sphere and one unit box are built once and shared by every debug
//! mesh; per-shape size comes from the mesh scale, not from new vertex data.

use crate::foundation::math::Vec3;
use crate::physics::Shape;
use std::f32::consts::{PI, TAU};

/// Default sphere tessellation around the equator
pub const DEFAULT_SPHERE_WIDTH_SEGMENTS: u32 = 8;

/// Default sphere tessellation from pole to pole
pub const DEFAULT_SPHERE_HEIGHT_SEGMENTS: u32 = 6;

/// Kind of shared geometry a debug mesh is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    /// Unit sphere (radius 1)
    Sphere,
    /// Unit box (edge length 1)
    Box,
}

impl GeometryKind {
    /// Geometry that visualizes `shape`, or `None` for shapes without a debug mesh
    pub const fn for_shape(shape: &Shape) -> Option<Self> {
        match shape {
            Shape::Sphere { .. } => Some(Self::Sphere),
            Shape::Box { .. } => Some(Self::Box),
            Shape::Unsupported(_) => None,
        }
    }

    /// Mesh scale that stretches this unit geometry over `shape`
    ///
    /// Spheres scale uniformly by radius; boxes by the full edge length,
    /// i.e. twice the half extents.
    pub fn scale_for(shape: &Shape) -> Option<Vec3> {
        match shape {
            Shape::Sphere { radius } => Some(Vec3::from_element(*radius)),
            Shape::Box { half_extents } => Some(half_extents * 2.0),
            Shape::Unsupported(_) => None,
        }
    }
}

/// Position and normal of one geometry vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in model space
    pub position: [f32; 3],

    /// Outward normal
    pub normal: [f32; 3],
}

impl Vertex {
    /// Create a new vertex
    pub const fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }
}

/// Indexed triangle geometry tagged with its kind
#[derive(Debug, Clone)]
pub struct Geometry {
    kind: GeometryKind,

    /// Vertex data
    pub vertices: Vec<Vertex>,

    /// Index data for triangles (counter-clockwise front faces)
    pub indices: Vec<u32>,
}

impl Geometry {
    /// Unit sphere with the default tessellation
    pub fn unit_sphere() -> Self {
        Self::sphere_with_segments(DEFAULT_SPHERE_WIDTH_SEGMENTS, DEFAULT_SPHERE_HEIGHT_SEGMENTS)
    }

    /// UV sphere of radius 1
    ///
    /// Rings run from the +Y pole to the -Y pole; pole rows produce a single
    /// triangle per segment. Segment counts are clamped to a minimum of
    /// 3 around and 2 from pole to pole.
    pub fn sphere_with_segments(width_segments: u32, height_segments: u32) -> Self {
        let width = width_segments.max(3);
        let height = height_segments.max(2);

        let mut vertices = Vec::with_capacity(((width + 1) * (height + 1)) as usize);
        for iy in 0..=height {
            let v = iy as f32 / height as f32;
            for ix in 0..=width {
                let u = ix as f32 / width as f32;
                let position = [
                    -(u * TAU).cos() * (v * PI).sin(),
                    (v * PI).cos(),
                    (u * TAU).sin() * (v * PI).sin(),
                ];
                vertices.push(Vertex::new(position, position));
            }
        }

        let row = width + 1;
        let mut indices = Vec::new();
        for iy in 0..height {
            for ix in 0..width {
                let a = iy * row + ix + 1;
                let b = iy * row + ix;
                let c = (iy + 1) * row + ix;
                let d = (iy + 1) * row + ix + 1;

                if iy != 0 {
                    indices.extend_from_slice(&[a, b, d]);
                }
                if iy != height - 1 {
                    indices.extend_from_slice(&[b, c, d]);
                }
            }
        }

        Self { kind: GeometryKind::Sphere, vertices, indices }
    }

    /// Box with edge length 1 centered at the origin
    ///
    /// Four vertices per face so every face has a flat normal: 24 vertices,
    /// 36 indices.
    pub fn unit_box() -> Self {
        // (normal, u, v) with u x v == normal so quads wind counter-clockwise
        let faces = [
            (Vec3::x(), -Vec3::z(), Vec3::y()),
            (-Vec3::x(), Vec3::z(), Vec3::y()),
            (Vec3::y(), Vec3::x(), -Vec3::z()),
            (-Vec3::y(), Vec3::x(), Vec3::z()),
            (Vec3::z(), Vec3::x(), Vec3::y()),
            (-Vec3::z(), -Vec3::x(), Vec3::y()),
        ];

        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);
        for (normal, u, v) in faces {
            let base = vertices.len() as u32;
            for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                let corner = (normal + u * su + v * sv) * 0.5;
                vertices.push(Vertex::new(corner.into(), normal.into()));
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
        }

        Self { kind: GeometryKind::Box, vertices, indices }
    }

    /// Build the unit geometry for a kind
    pub fn for_kind(kind: GeometryKind) -> Self {
        match kind {
            GeometryKind::Sphere => Self::unit_sphere(),
            GeometryKind::Box => Self::unit_box(),
        }
    }

    /// Which kind of geometry this is
    pub const fn kind(&self) -> GeometryKind {
        self.kind
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    fn triangle_normal(geometry: &Geometry, tri: &[u32]) -> Vec3 {
        let p = |i: u32| Vec3::from(geometry.vertices[i as usize].position);
        let (a, b, c) = (p(tri[0]), p(tri[1]), p(tri[2]));
        (b - a).cross(&(c - a))
    }

    #[test]
    fn test_box_structure() {
        let geometry = Geometry::unit_box();
        assert_eq!(geometry.kind(), GeometryKind::Box);
        assert_eq!(geometry.vertices.len(), 24);
        assert_eq!(geometry.indices.len(), 36);

        for vertex in &geometry.vertices {
            for component in vertex.position {
                assert_relative_eq!(component.abs(), 0.5, epsilon = EPSILON);
            }
        }
    }

    #[test]
    fn test_box_faces_wind_outward() {
        let geometry = Geometry::unit_box();
        for tri in geometry.indices.chunks(3) {
            let normal = Vec3::from(geometry.vertices[tri[0] as usize].normal);
            assert!(triangle_normal(&geometry, tri).dot(&normal) > 0.0);
        }
    }

    #[test]
    fn test_sphere_structure() {
        let geometry = Geometry::unit_sphere();
        assert_eq!(geometry.kind(), GeometryKind::Sphere);
        assert_eq!(geometry.vertices.len(), 9 * 7);
        // Two triangles per quad, one per quad on each pole row
        assert_eq!(geometry.triangle_count(), 8 * (2 * 6 - 2));

        for vertex in &geometry.vertices {
            assert_relative_eq!(Vec3::from(vertex.position).norm(), 1.0, epsilon = EPSILON);
        }
        let max_index = *geometry.indices.iter().max().unwrap() as usize;
        assert!(max_index < geometry.vertices.len());
    }

    #[test]
    fn test_sphere_segments_clamped() {
        let geometry = Geometry::sphere_with_segments(0, 0);
        assert_eq!(geometry.vertices.len(), 4 * 3);
    }

    #[test]
    fn test_for_kind_builds_matching_geometry() {
        assert_eq!(Geometry::for_kind(GeometryKind::Sphere).kind(), GeometryKind::Sphere);
        let cube = Geometry::for_kind(GeometryKind::Box);
        assert_eq!(cube.kind(), GeometryKind::Box);
        assert_eq!(cube.triangle_count(), 12);
    }

    #[test]
    fn test_kind_and_scale_for_shapes() {
        let sphere = Shape::sphere(2.0);
        let cuboid = Shape::cuboid(Vec3::new(1.0, 2.0, 3.0));
        let plane = Shape::Unsupported(crate::physics::ShapeType::Plane);

        assert_eq!(GeometryKind::for_shape(&sphere), Some(GeometryKind::Sphere));
        assert_eq!(GeometryKind::for_shape(&cuboid), Some(GeometryKind::Box));
        assert_eq!(GeometryKind::for_shape(&plane), None);

        assert_eq!(GeometryKind::scale_for(&sphere), Some(Vec3::new(2.0, 2.0, 2.0)));
        assert_eq!(GeometryKind::scale_for(&cuboid), Some(Vec3::new(2.0, 4.0, 6.0)));
        assert_eq!(GeometryKind::scale_for(&plane), None);
    }
}
