//! Collision shape debug meshes
//!
//! Keeps one scene mesh per (body, shape) pair of a physics world, placed and
//! scaled to match the shape every frame. Call [`PhysicsDebugRenderer::update`]
//! after the physics step and before the scene is rendered.

use crate::config::DebugRendererConfig;
use crate::foundation::math::Transform;
use crate::physics::{AttachedShape, Body, BodyId, BodySource, ShapeType};
use crate::scene::{Geometry, GeometryKind, Material, Mesh, MeshId, SceneGraph};
use std::collections::HashMap;
use std::sync::Arc;

/// Stable identity of a debug slot: which body, which of its shapes
///
/// Bodies that share an id (plain body lists built without
/// [`Body::with_id`]) are told apart by `occurrence`, their order among the
/// bodies carrying that id. For bodies of a [`PhysicsWorld`](crate::physics::PhysicsWorld)
/// it is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeKey {
    /// Owning body
    pub body: BodyId,
    /// Position of the body among bodies with the same id this tick
    pub occurrence: u32,
    /// Index of the shape within the body
    pub shape: usize,
}

impl ShapeKey {
    /// Create a key for a body with a unique id
    pub const fn new(body: BodyId, shape: usize) -> Self {
        Self::with_occurrence(body, 0, shape)
    }

    /// Create a key for the `occurrence`-th body carrying `body` as its id
    pub const fn with_occurrence(body: BodyId, occurrence: u32, shape: usize) -> Self {
        Self { body, occurrence, shape }
    }
}

impl std::fmt::Display for ShapeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.occurrence == 0 {
            write!(f, "{}/shape{}", self.body, self.shape)
        } else {
            write!(f, "{}~{}/shape{}", self.body, self.occurrence, self.shape)
        }
    }
}

/// One entry of the mesh pool
///
/// `mesh` is `None` for shape types without a debug visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugSlot {
    key: ShapeKey,
    shape_type: ShapeType,
    mesh: Option<MeshId>,
}

impl DebugSlot {
    /// Body and shape this slot mirrors
    pub const fn key(&self) -> ShapeKey {
        self.key
    }

    /// Shape type seen on the last update
    pub const fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    /// Mesh in the scene, if the shape type is visualized
    pub const fn mesh(&self) -> Option<MeshId> {
        self.mesh
    }
}

/// Mirrors physics collision shapes as scene meshes
///
/// Slots are keyed by [`ShapeKey`], so removing a body only releases that
/// body's meshes; later bodies keep theirs. The pool is ordered like the
/// world: bodies in world order, shapes in declaration order.
///
/// The renderer does not own the scene or the world; both are passed to each
/// call. Meshes it added stay in the scene until [`clear`](Self::clear) is
/// called or their shapes disappear.
#[derive(Debug)]
pub struct PhysicsDebugRenderer {
    slots: Vec<DebugSlot>,

    solid_material: Arc<Material>,
    wireframe_material: Arc<Material>,

    sphere_geometry: Arc<Geometry>,
    box_geometry: Arc<Geometry>,

    wireframe: bool,
}

impl PhysicsDebugRenderer {
    /// Create a renderer with default options (solid material)
    pub fn new() -> Self {
        Self::with_config(DebugRendererConfig::default())
    }

    /// Create a renderer from configuration
    pub fn with_config(config: DebugRendererConfig) -> Self {
        Self {
            slots: Vec::new(),
            solid_material: Arc::new(Material::normal()),
            wireframe_material: Arc::new(Material::debug_wireframe()),
            sphere_geometry: Arc::new(Geometry::for_kind(GeometryKind::Sphere)),
            box_geometry: Arc::new(Geometry::for_kind(GeometryKind::Box)),
            wireframe: config.wireframe,
        }
    }

    /// Whether meshes are drawn with the wireframe material
    pub const fn wireframe(&self) -> bool {
        self.wireframe
    }

    /// Switch between the solid and wireframe materials
    ///
    /// Every mesh currently in the pool gets the new material immediately;
    /// geometry and transforms are left alone.
    pub fn configure(&mut self, wireframe: bool, scene: &mut dyn SceneGraph) {
        self.wireframe = wireframe;
        let material = Arc::clone(self.active_material());

        let mut updated = 0;
        for id in self.mesh_ids() {
            if let Some(mesh) = scene.get_mut(id) {
                mesh.material = Arc::clone(&material);
                updated += 1;
            }
        }
        log::debug!(
            "Debug meshes switched to {} material ({} updated)",
            if wireframe { "wireframe" } else { "solid" },
            updated,
        );
    }

    /// Bring the scene's debug meshes in line with the world
    ///
    /// For every shape: reuse the slot's mesh if its geometry still matches,
    /// otherwise remove it and add a fresh one; then copy scale and world
    /// pose. Meshes of shapes no longer in the world are removed.
    pub fn update<W: BodySource + ?Sized>(&mut self, world: &W, scene: &mut dyn SceneGraph) {
        // Keys are unique within a tick, so no slot is lost here
        let mut previous: HashMap<ShapeKey, DebugSlot> =
            self.slots.drain(..).map(|slot| (slot.key, slot)).collect();

        let mut occurrences: HashMap<BodyId, u32> = HashMap::new();
        let mut slots = Vec::with_capacity(world.shape_count());
        for body in world.bodies() {
            let seen = occurrences.entry(body.id()).or_insert(0);
            let occurrence = *seen;
            *seen += 1;

            for (index, attached) in body.shapes.iter().enumerate() {
                let key = ShapeKey::with_occurrence(body.id(), occurrence, index);
                let prior = previous.remove(&key);
                let mesh = self.sync_slot(key, prior, body, attached, scene);
                slots.push(DebugSlot {
                    key,
                    shape_type: attached.shape.shape_type(),
                    mesh,
                });
            }
        }

        for stale in previous.into_values() {
            Self::release(scene, stale);
        }

        self.slots = slots;
        log::trace!("Debug sync: {} slot(s), {} mesh(es)", self.slots.len(), self.mesh_count());
    }

    /// Remove every debug mesh from the scene and empty the pool
    pub fn clear(&mut self, scene: &mut dyn SceneGraph) {
        for slot in self.slots.drain(..) {
            Self::release(scene, slot);
        }
    }

    fn sync_slot(
        &self,
        key: ShapeKey,
        prior: Option<DebugSlot>,
        body: &Body,
        attached: &AttachedShape,
        scene: &mut dyn SceneGraph,
    ) -> Option<MeshId> {
        let shape_type = attached.shape.shape_type();
        let wanted = GeometryKind::for_shape(&attached.shape);

        let mut current = prior.and_then(|slot| slot.mesh);
        if let Some(id) = current {
            match scene.get(id).map(Mesh::geometry_kind) {
                Some(kind) if Some(kind) == wanted => {}
                Some(kind) => {
                    log::debug!("Replacing {:?} debug mesh for {} ({} shape)", kind, key, shape_type);
                    scene.remove(id);
                    current = None;
                }
                None => {
                    log::warn!("Debug mesh for {} is no longer in the scene", key);
                    current = None;
                }
            }
        }

        let Some(kind) = wanted else {
            if prior.map_or(true, |slot| slot.shape_type != shape_type) {
                log::debug!("No debug mesh for {} shape at {}", shape_type, key);
            }
            return None;
        };

        let id = match current {
            Some(id) => id,
            None => {
                let id = scene.add(self.create_mesh(kind));
                log::debug!("Created {:?} debug mesh for {}", kind, key);
                id
            }
        };

        let mesh = scene.get_mut(id)?;
        if let Some(scale) = GeometryKind::scale_for(&attached.shape) {
            mesh.scale = scale;
        }
        let world = body.transform().combine(&attached.local_transform());
        Self::place(mesh, &world);

        Some(id)
    }

    fn place(mesh: &mut Mesh, world: &Transform) {
        mesh.position = world.position;
        mesh.orientation = world.rotation;
    }

    fn create_mesh(&self, kind: GeometryKind) -> Mesh {
        Mesh::new(Arc::clone(self.geometry(kind)), Arc::clone(self.active_material()))
    }

    fn release(scene: &mut dyn SceneGraph, slot: DebugSlot) {
        if let Some(id) = slot.mesh {
            if scene.remove(id).is_some() {
                log::debug!("Removed debug mesh for {}", slot.key);
            }
        }
    }

    /// Number of slots (the world's shape count at the last update)
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the pool is empty
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots in world enumeration order
    pub fn slots(&self) -> &[DebugSlot] {
        &self.slots
    }

    /// Slot at a flattened index
    pub fn slot(&self, index: usize) -> Option<&DebugSlot> {
        self.slots.get(index)
    }

    /// Mesh at a flattened index
    pub fn mesh_at(&self, index: usize) -> Option<MeshId> {
        self.slot(index).and_then(DebugSlot::mesh)
    }

    /// Mesh mirroring a specific body shape
    pub fn mesh_for(&self, key: ShapeKey) -> Option<MeshId> {
        self.slots.iter().find(|slot| slot.key == key).and_then(DebugSlot::mesh)
    }

    /// Handles of every pooled mesh
    pub fn mesh_ids(&self) -> Vec<MeshId> {
        self.slots.iter().filter_map(DebugSlot::mesh).collect()
    }

    /// Number of slots holding a mesh
    pub fn mesh_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.mesh.is_some()).count()
    }

    /// Material new and existing meshes use
    pub const fn active_material(&self) -> &Arc<Material> {
        if self.wireframe {
            &self.wireframe_material
        } else {
            &self.solid_material
        }
    }

    /// Shared solid material
    pub const fn solid_material(&self) -> &Arc<Material> {
        &self.solid_material
    }

    /// Shared wireframe material
    pub const fn wireframe_material(&self) -> &Arc<Material> {
        &self.wireframe_material
    }

    /// Shared unit geometry for a kind
    pub const fn geometry(&self, kind: GeometryKind) -> &Arc<Geometry> {
        match kind {
            GeometryKind::Sphere => &self.sphere_geometry,
            GeometryKind::Box => &self.box_geometry,
        }
    }

    /// Shared unit sphere
    pub const fn sphere_geometry(&self) -> &Arc<Geometry> {
        &self.sphere_geometry
    }

    /// Shared unit box
    pub const fn box_geometry(&self) -> &Arc<Geometry> {
        &self.box_geometry
    }
}

impl Default for PhysicsDebugRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Quat, Vec3};
    use crate::physics::{PhysicsWorld, Shape};
    use crate::scene::SimpleListGraph;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    fn body_with(shape: Shape) -> Body {
        Body::at(Vec3::zeros()).with_shape(shape, Vec3::zeros(), Quat::identity())
    }

    #[test]
    fn test_single_sphere() {
        let mut world = PhysicsWorld::new();
        world.add_body(body_with(Shape::sphere(2.0)));
        let mut scene = SimpleListGraph::new();
        let mut debug = PhysicsDebugRenderer::new();

        debug.update(&world, &mut scene);

        assert_eq!(debug.len(), 1);
        let mesh = scene.get(debug.mesh_at(0).unwrap()).unwrap();
        assert!(mesh.uses_geometry(debug.sphere_geometry()));
        assert!(mesh.uses_material(debug.solid_material()));
        assert_eq!(mesh.scale, Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(mesh.position, Vec3::zeros());
        assert_relative_eq!(mesh.orientation, Quat::identity(), epsilon = EPSILON);
    }

    #[test]
    fn test_world_transform_of_offset_shape() {
        let body_rotation = Quat::from_axis_angle(&Vec3::z_axis(), FRAC_PI_2);
        let shape_rotation = Quat::from_axis_angle(&Vec3::x_axis(), 0.25);
        let mut world = PhysicsWorld::new();
        world.add_body(
            Body::new(Vec3::new(1.0, 2.0, 3.0), body_rotation)
                .with_shape(Shape::sphere(1.0), Vec3::new(1.0, 0.0, 0.0), shape_rotation),
        );
        let mut scene = SimpleListGraph::new();
        let mut debug = PhysicsDebugRenderer::new();

        debug.update(&world, &mut scene);

        let mesh = scene.get(debug.mesh_at(0).unwrap()).unwrap();
        assert_relative_eq!(mesh.position, Vec3::new(1.0, 3.0, 3.0), epsilon = EPSILON);
        assert_relative_eq!(mesh.orientation, body_rotation * shape_rotation, epsilon = EPSILON);
    }

    #[test]
    fn test_unsupported_shape_leaves_empty_slot() {
        let mut world = PhysicsWorld::new();
        world.add_body(body_with(Shape::Unsupported(ShapeType::Plane)));
        world.add_body(body_with(Shape::sphere(1.0)));
        let mut scene = SimpleListGraph::new();
        let mut debug = PhysicsDebugRenderer::new();

        debug.update(&world, &mut scene);

        assert_eq!(debug.len(), 2);
        assert_eq!(debug.mesh_at(0), None);
        assert_eq!(debug.slot(0).unwrap().shape_type(), ShapeType::Plane);
        assert!(debug.mesh_at(1).is_some());
        assert_eq!(scene.mesh_count(), 1);
    }

    #[test]
    fn test_type_change_releases_old_mesh() {
        let mut world = PhysicsWorld::new();
        let id = world.add_body(body_with(Shape::sphere(1.0)));
        let mut scene = SimpleListGraph::new();
        let mut debug = PhysicsDebugRenderer::new();

        debug.update(&world, &mut scene);
        let old = debug.mesh_at(0).unwrap();

        world.body_mut(id).unwrap().shapes[0].shape = Shape::cuboid(Vec3::new(0.5, 1.0, 1.5));
        debug.update(&world, &mut scene);

        let new = debug.mesh_at(0).unwrap();
        assert_ne!(old, new);
        assert!(!scene.contains(old));
        assert_eq!(scene.mesh_count(), 1);
        let mesh = scene.get(new).unwrap();
        assert!(mesh.uses_geometry(debug.box_geometry()));
        assert_eq!(mesh.scale, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_change_to_unsupported_removes_mesh() {
        let mut world = PhysicsWorld::new();
        let id = world.add_body(body_with(Shape::sphere(1.0)));
        let mut scene = SimpleListGraph::new();
        let mut debug = PhysicsDebugRenderer::new();

        debug.update(&world, &mut scene);
        world.body_mut(id).unwrap().shapes[0].shape = Shape::Unsupported(ShapeType::Trimesh);
        debug.update(&world, &mut scene);

        assert_eq!(debug.len(), 1);
        assert_eq!(debug.mesh_at(0), None);
        assert_eq!(scene.mesh_count(), 0);
    }

    #[test]
    fn test_vanished_mesh_is_recreated() {
        let mut world = PhysicsWorld::new();
        world.add_body(body_with(Shape::sphere(1.0)));
        let mut scene = SimpleListGraph::new();
        let mut debug = PhysicsDebugRenderer::new();

        debug.update(&world, &mut scene);
        scene.clear();
        debug.update(&world, &mut scene);

        assert_eq!(scene.mesh_count(), 1);
        assert!(scene.contains(debug.mesh_at(0).unwrap()));
    }

    #[test]
    fn test_wireframe_config_applies_to_new_meshes() {
        let mut world = PhysicsWorld::new();
        world.add_body(body_with(Shape::sphere(1.0)));
        let mut scene = SimpleListGraph::new();
        let mut debug = PhysicsDebugRenderer::with_config(DebugRendererConfig { wireframe: true });

        debug.update(&world, &mut scene);

        assert!(debug.wireframe());
        let mesh = scene.get(debug.mesh_at(0).unwrap()).unwrap();
        assert!(mesh.uses_material(debug.wireframe_material()));
    }

    #[test]
    fn test_duplicate_body_ids_keep_their_meshes() {
        let bodies = vec![
            body_with(Shape::sphere(1.0)).with_id(BodyId::new(7)),
            body_with(Shape::sphere(2.0)).with_id(BodyId::new(7)),
        ];
        let mut scene = SimpleListGraph::new();
        let mut debug = PhysicsDebugRenderer::new();

        debug.update(&bodies, &mut scene);
        let first = debug.mesh_ids();

        for _ in 0..3 {
            debug.update(&bodies, &mut scene);
            assert_eq!(debug.len(), 2);
            assert_eq!(scene.mesh_count(), 2);
            assert_eq!(debug.mesh_ids(), first);
        }
        assert_eq!(debug.slot(1).unwrap().key(), ShapeKey::with_occurrence(BodyId::new(7), 1, 0));
    }

    #[test]
    fn test_update_keeps_host_visibility() {
        let mut world = PhysicsWorld::new();
        let id = world.add_body(body_with(Shape::sphere(1.0)));
        let mut scene = SimpleListGraph::new();
        let mut debug = PhysicsDebugRenderer::new();

        debug.update(&world, &mut scene);
        let mesh_id = debug.mesh_at(0).unwrap();
        scene.get_mut(mesh_id).unwrap().visible = false;

        world.body_mut(id).unwrap().position = Vec3::new(0.0, 1.0, 0.0);
        debug.update(&world, &mut scene);

        let mesh = scene.get(mesh_id).unwrap();
        assert!(!mesh.visible);
        assert_eq!(mesh.position, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_shape_key_display() {
        assert_eq!(ShapeKey::new(BodyId::new(3), 1).to_string(), "body#3/shape1");
        assert_eq!(ShapeKey::with_occurrence(BodyId::new(0), 2, 0).to_string(), "body#0~2/shape0");
    }

    #[test]
    fn test_clear_removes_all_meshes() {
        let mut world = PhysicsWorld::new();
        world.add_body(body_with(Shape::sphere(1.0)));
        world.add_body(body_with(Shape::cuboid(Vec3::new(1.0, 1.0, 1.0))));
        let mut scene = SimpleListGraph::new();
        let mut debug = PhysicsDebugRenderer::new();

        debug.update(&world, &mut scene);
        assert_eq!(scene.mesh_count(), 2);

        debug.clear(&mut scene);
        assert!(debug.is_empty());
        assert_eq!(scene.mesh_count(), 0);
    }
}
