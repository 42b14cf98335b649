//! Scene mesh: shared geometry and material placed in the world

use super::geometry::{Geometry, GeometryKind};
use super::material::Material;
use crate::foundation::math::{Mat4, Quat, Transform, Vec3};
use std::sync::Arc;

/// A visual object in the scene
///
/// Geometry and material are shared handles; position, orientation and scale
/// are per mesh and mutated in place every frame.
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Shared geometry
    pub geometry: Arc<Geometry>,

    /// Shared material
    pub material: Arc<Material>,

    /// World-space position
    pub position: Vec3,

    /// World-space orientation
    pub orientation: Quat,

    /// Per-axis scale applied to the geometry
    pub scale: Vec3,

    /// Whether the renderer should draw this mesh
    pub visible: bool,
}

impl Mesh {
    /// Create a mesh at the origin with unit scale
    pub fn new(geometry: Arc<Geometry>, material: Arc<Material>) -> Self {
        Self {
            geometry,
            material,
            position: Vec3::zeros(),
            orientation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
            visible: true,
        }
    }

    /// Kind of the underlying geometry
    pub fn geometry_kind(&self) -> GeometryKind {
        self.geometry.kind()
    }

    /// Whether this mesh draws exactly `geometry` (same shared handle)
    pub fn uses_geometry(&self, geometry: &Arc<Geometry>) -> bool {
        Arc::ptr_eq(&self.geometry, geometry)
    }

    /// Whether this mesh draws with exactly `material` (same shared handle)
    pub fn uses_material(&self, material: &Arc<Material>) -> bool {
        Arc::ptr_eq(&self.material, material)
    }

    /// Position, orientation and scale as a transform
    pub fn transform(&self) -> Transform {
        Transform {
            position: self.position,
            rotation: self.orientation,
            scale: self.scale,
        }
    }

    /// Model matrix for rendering
    pub fn model_matrix(&self) -> Mat4 {
        self.transform().to_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_model_matrix_scales_then_translates() {
        let mut mesh = Mesh::new(Arc::new(Geometry::unit_box()), Arc::new(Material::normal()));
        mesh.position = Vec3::new(1.0, 0.0, 0.0);
        mesh.scale = Vec3::new(2.0, 4.0, 6.0);

        let corner = mesh.model_matrix().transform_point(&nalgebra::Point3::new(0.5, 0.5, 0.5));
        assert_relative_eq!(corner.coords, Vec3::new(2.0, 2.0, 3.0), epsilon = 1e-6);
    }

    #[test]
    fn test_shared_handles() {
        let geometry = Arc::new(Geometry::unit_sphere());
        let material = Arc::new(Material::normal());
        let mesh = Mesh::new(Arc::clone(&geometry), Arc::clone(&material));

        assert_eq!(mesh.geometry_kind(), GeometryKind::Sphere);
        assert!(mesh.uses_geometry(&geometry));
        assert!(mesh.uses_material(&material));
        assert!(!mesh.uses_geometry(&Arc::new(Geometry::unit_sphere())));
    }
}
