//! Scene graph model the debug renderer writes into
//!
//! ```text
//! Physics World (bodies, shapes)
//!      ↓
//! PhysicsDebugRenderer (sync)
//!      ↓
//! SceneGraph (meshes) → host renderer
//! ```

mod geometry;
mod material;
mod mesh;
mod scene_graph;

pub use geometry::{
    Geometry, GeometryKind, Vertex,
    DEFAULT_SPHERE_HEIGHT_SEGMENTS, DEFAULT_SPHERE_WIDTH_SEGMENTS,
};
pub use material::{Material, MaterialKind};
pub use mesh::Mesh;
pub use scene_graph::{MeshId, SceneGraph, SimpleListGraph};
