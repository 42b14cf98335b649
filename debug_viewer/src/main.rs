//! Headless physics debug demo
//!
//! Builds a small world, animates it for a few seconds of simulated time and
//! keeps debug meshes in sync each frame, logging what a renderer would draw.
//!
//! Usage: `debug_viewer [config.toml|config.ron]`

use physics_debug::prelude::*;
use std::f32::consts::TAU;

const FRAME_TIME: f32 = 1.0 / 60.0;
const FRAME_COUNT: u32 = 240;

struct DebugViewerApp {
    world: PhysicsWorld,
    scene: SimpleListGraph,
    debug: PhysicsDebugRenderer,
    orbiter: BodyId,
    spinner: BodyId,
    doomed: Option<BodyId>,
    elapsed: f32,
}

impl DebugViewerApp {
    fn new(config: DebugRendererConfig) -> Self {
        let mut world = PhysicsWorld::new();

        let orbiter = world.add_body(
            Body::at(Vec3::new(3.0, 0.0, 0.0))
                .with_shape(Shape::sphere(0.5), Vec3::zeros(), Quat::identity()),
        );
        // Dumbbell: two spheres on a bar
        let spinner = world.add_body(
            Body::at(Vec3::new(0.0, 2.0, 0.0))
                .with_shape(Shape::cuboid(Vec3::new(1.0, 0.1, 0.1)), Vec3::zeros(), Quat::identity())
                .with_shape(Shape::sphere(0.3), Vec3::new(1.0, 0.0, 0.0), Quat::identity())
                .with_shape(Shape::sphere(0.3), Vec3::new(-1.0, 0.0, 0.0), Quat::identity()),
        );
        let doomed = world.add_body(
            Body::at(Vec3::new(0.0, -1.0, 0.0))
                .with_shape(Shape::cuboid(Vec3::new(0.5, 0.5, 0.5)), Vec3::zeros(), Quat::identity()),
        );
        world.add_body(
            Body::at(Vec3::zeros())
                .with_shape(Shape::Unsupported(ShapeType::Plane), Vec3::zeros(), Quat::identity()),
        );

        Self {
            world,
            scene: SimpleListGraph::new(),
            debug: PhysicsDebugRenderer::with_config(config),
            orbiter,
            spinner,
            doomed: Some(doomed),
            elapsed: 0.0,
        }
    }

    /// Stand-in for a physics step: move bodies along scripted paths
    fn step_world(&mut self, delta_time: f32) {
        self.elapsed += delta_time;
        let angle = self.elapsed * TAU / 4.0;

        if let Some(body) = self.world.body_mut(self.orbiter) {
            body.position = Vec3::new(3.0 * angle.cos(), 0.0, 3.0 * angle.sin());
        }
        if let Some(body) = self.world.body_mut(self.spinner) {
            body.orientation = Quat::from_axis_angle(&Vec3::y_axis(), angle);
        }
    }

    fn run(&mut self) {
        log::info!("Starting debug viewer ({} frames)", FRAME_COUNT);

        for frame in 0..FRAME_COUNT {
            self.step_world(FRAME_TIME);

            if frame == FRAME_COUNT / 3 {
                if let Some(id) = self.doomed.take() {
                    log::info!("Removing {}", id);
                    self.world.remove_body(id);
                }
            }
            if frame == FRAME_COUNT / 4 {
                self.set_body_visible(self.spinner, false);
            }
            if frame == FRAME_COUNT / 4 + 30 {
                self.set_body_visible(self.spinner, true);
            }
            if frame == FRAME_COUNT / 2 {
                let wireframe = !self.debug.wireframe();
                self.debug.configure(wireframe, &mut self.scene);
            }

            self.debug.update(&self.world, &mut self.scene);

            if frame % 60 == 0 {
                self.render_summary(frame);
            }
        }

        self.render_summary(FRAME_COUNT);
        self.debug.clear(&mut self.scene);
        log::info!("Debug viewer finished, {} mesh(es) left in scene", self.scene.mesh_count());
    }

    /// Show or hide every debug mesh of one body
    fn set_body_visible(&mut self, body: BodyId, visible: bool) {
        let ids: Vec<MeshId> = self
            .debug
            .slots()
            .iter()
            .filter(|slot| slot.key().body == body)
            .filter_map(DebugSlot::mesh)
            .collect();
        for id in ids {
            if let Some(mesh) = self.scene.get_mut(id) {
                mesh.visible = visible;
            }
        }
        log::info!("{} debug meshes of {}", if visible { "Showing" } else { "Hiding" }, body);
    }

    /// What a renderer would draw this frame
    fn render_summary(&self, frame: u32) {
        log::info!(
            "Frame {}: {} bodies, {} shapes, {} debug meshes ({})",
            frame,
            self.world.body_count(),
            self.world.shape_count(),
            self.debug.mesh_count(),
            if self.debug.wireframe() { "wireframe" } else { "solid" },
        );
        for slot in self.debug.slots() {
            let Some(mesh) = slot.mesh().and_then(|id| self.scene.get(id)).filter(|mesh| mesh.visible) else {
                log::debug!("  {}: {} (not drawn)", slot.key(), slot.shape_type());
                continue;
            };
            log::debug!(
                "  {}: {:?} at ({:.2}, {:.2}, {:.2}) scale ({:.2}, {:.2}, {:.2}), {} triangles",
                slot.key(),
                mesh.geometry_kind(),
                mesh.position.x, mesh.position.y, mesh.position.z,
                mesh.scale.x, mesh.scale.y, mesh.scale.z,
                mesh.geometry.triangle_count(),
            );
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    physics_debug::foundation::logging::init_with_default("info");

    let config = match std::env::args().nth(1) {
        Some(path) => DebugRendererConfig::load_from_file(&path)?,
        None => DebugRendererConfig::default(),
    };
    log::info!("Debug renderer config: {:?}", config);

    let mut app = DebugViewerApp::new(config);
    app.run();
    Ok(())
}
