//! # Physics Debug
//!
//! Debug meshes that mirror the collision shapes of a physics world inside a
//! scene graph, so physics bodies can be seen overlaid on rendered geometry.
//!
//! ## Features
//!
//! - **Shape mirroring**: one mesh per body/shape pair, scaled from shared unit geometry
//! - **Stable identity**: meshes keyed by body id and shape index, not list position
//! - **Wireframe toggle**: switch every debug mesh between solid and wireframe materials
//! - **Configurable**: TOML or RON configuration files
//!
//! ## Quick Start
//!
//! ```rust
//! use physics_debug::prelude::*;
//!
//! let mut world = PhysicsWorld::new();
//! world.add_body(
//!     Body::new(Vec3::zeros(), Quat::identity())
//!         .with_shape(Shape::sphere(2.0), Vec3::zeros(), Quat::identity()),
//! );
//!
//! let mut scene = SimpleListGraph::new();
//! let mut debug = PhysicsDebugRenderer::new();
//!
//! // Once per frame, after the physics step and before rendering
//! debug.update(&world, &mut scene);
//! assert_eq!(scene.mesh_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod physics;
pub mod scene;
pub mod debug;

pub use config::{Config, ConfigError, DebugRendererConfig};
pub use debug::{DebugSlot, PhysicsDebugRenderer, ShapeKey};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, DebugRendererConfig},
        debug::{DebugSlot, PhysicsDebugRenderer, ShapeKey},
        foundation::math::{Quat, Transform, Vec3},
        physics::{AttachedShape, Body, BodyId, BodySource, PhysicsWorld, Shape, ShapeType},
        scene::{Geometry, GeometryKind, Material, MaterialKind, Mesh, MeshId, SceneGraph, SimpleListGraph},
    };
}
