//! Scene graph trait and implementations
//!
//! The debug renderer only needs to add, remove and mutate meshes; spatial
//! queries and culling belong to the host renderer.

use super::mesh::Mesh;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a mesh stored in a scene graph
    pub struct MeshId;
}

/// Mesh container the debug renderer writes into
///
/// Implemented by the host's scene; [`SimpleListGraph`] is the in-crate
/// implementation.
pub trait SceneGraph: Send + Sync {
    /// Add a mesh and return its handle
    fn add(&mut self, mesh: Mesh) -> MeshId;

    /// Remove a mesh, returning it if it was present
    fn remove(&mut self, id: MeshId) -> Option<Mesh>;

    /// Get a mesh by handle
    fn get(&self, id: MeshId) -> Option<&Mesh>;

    /// Get a mutable mesh by handle
    fn get_mut(&mut self, id: MeshId) -> Option<&mut Mesh>;

    /// Whether the handle refers to a mesh in this scene
    fn contains(&self, id: MeshId) -> bool {
        self.get(id).is_some()
    }

    /// Handles of every mesh in the scene
    fn mesh_ids(&self) -> Vec<MeshId>;

    /// Number of meshes in the scene
    fn mesh_count(&self) -> usize;

    /// Remove every mesh
    fn clear(&mut self);
}

/// Flat mesh list (no spatial structure)
#[derive(Debug, Default)]
pub struct SimpleListGraph {
    meshes: SlotMap<MeshId, Mesh>,
}

impl SimpleListGraph {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over meshes with their handles
    pub fn iter(&self) -> impl Iterator<Item = (MeshId, &Mesh)> {
        self.meshes.iter()
    }
}

impl SceneGraph for SimpleListGraph {
    fn add(&mut self, mesh: Mesh) -> MeshId {
        self.meshes.insert(mesh)
    }

    fn remove(&mut self, id: MeshId) -> Option<Mesh> {
        self.meshes.remove(id)
    }

    fn get(&self, id: MeshId) -> Option<&Mesh> {
        self.meshes.get(id)
    }

    fn get_mut(&mut self, id: MeshId) -> Option<&mut Mesh> {
        self.meshes.get_mut(id)
    }

    fn mesh_ids(&self) -> Vec<MeshId> {
        self.meshes.keys().collect()
    }

    fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    fn clear(&mut self) {
        self.meshes.clear();
    }
}
