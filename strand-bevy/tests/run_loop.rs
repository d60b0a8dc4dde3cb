//! Integration tests for the run/pause loop.
//!
//! The app runs headless with an injected backend, so the tests observe
//! exactly which engine calls each frame issues.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use approx::assert_relative_eq;
use bevy::prelude::*;
use nalgebra::{Point3, Vector3};
use strand_bevy::prelude::*;
use strand_core::backend::{GeometryFrame, SceneUpload, SimulationBackend};
use strand_core::{Engine, World};
use strand_geometry::build_rod;
use strand_scene::Scene;
use strand_types::{Result as StrandResult, StrandError};

/// Backend that counts engine calls and replays the uploaded pose.
struct CountingBackend {
    advances: Arc<AtomicUsize>,
    retrieves: Arc<AtomicUsize>,
    diverge_on_advance: bool,
    frames: Vec<GeometryFrame>,
}

impl CountingBackend {
    fn new(advances: Arc<AtomicUsize>, retrieves: Arc<AtomicUsize>) -> Self {
        Self {
            advances,
            retrieves,
            diverge_on_advance: false,
            frames: Vec::new(),
        }
    }

    fn diverging(advances: Arc<AtomicUsize>, retrieves: Arc<AtomicUsize>) -> Self {
        Self {
            diverge_on_advance: true,
            ..Self::new(advances, retrieves)
        }
    }
}

impl SimulationBackend for CountingBackend {
    fn init(&mut self, scene: &SceneUpload) -> StrandResult<()> {
        self.frames = scene
            .geometries
            .iter()
            .map(|g| GeometryFrame {
                geometry_id: g.geometry_id,
                positions: g.positions.clone(),
            })
            .collect();
        Ok(())
    }

    fn advance(&mut self) -> StrandResult<()> {
        self.advances.fetch_add(1, Ordering::SeqCst);
        if self.diverge_on_advance {
            return Err(StrandError::diverged(1, "non-finite velocity"));
        }
        Ok(())
    }

    fn retrieve(&mut self) -> StrandResult<Vec<GeometryFrame>> {
        self.retrieves.fetch_add(1, Ordering::SeqCst);
        Ok(self.frames.clone())
    }
}

fn single_rod_scene() -> Scene {
    let mut scene = Scene::new(Scene::default_config());
    let stretch = scene.constitution_tabular_mut().register_stretch(40e6);
    scene.contact_tabular_mut().default_model(0.05, 1e9);

    let mut rod = build_rod(
        Point3::new(0.0, 0.1, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
        0.03,
        4,
        2,
    )
    .expect("rod construction");
    rod.apply_constitution(stretch);
    rod.apply_contact(scene.contact_tabular().default_element());
    rod.label_surface();

    let object = scene.create_object("rod").expect("object");
    scene.add_geometry(object, rod).expect("geometry");
    scene
}

fn init_world(engine: Engine) -> World {
    let mut scene = single_rod_scene();
    let mut world = World::new(engine);
    world.init(&mut scene).expect("init");
    world.retrieve().expect("retrieve");
    world
}

/// Create a minimal Bevy app for testing (no rendering).
fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    // Asset plugin is required for mesh/material handling
    app.add_plugins(bevy::asset::AssetPlugin::default());
    app.init_resource::<bevy::prelude::Assets<bevy::prelude::Mesh>>();
    app.init_resource::<bevy::prelude::Assets<bevy::prelude::StandardMaterial>>();
    app.add_plugins(RodViewerPlugin::headless());
    app
}

#[test]
fn loop_starts_paused() {
    let mut app = test_app();
    app.update();
    assert_eq!(*app.world().resource::<RunState>(), RunState::Paused);
}

#[test]
fn paused_frames_issue_no_engine_calls() {
    let advances = Arc::new(AtomicUsize::new(0));
    let retrieves = Arc::new(AtomicUsize::new(0));
    let backend = CountingBackend::new(advances.clone(), retrieves.clone());
    let world = init_world(Engine::with_backend(Box::new(backend), "target/test_ws"));

    // One retrieve happened during setup; none may follow while paused.
    let baseline = retrieves.load(Ordering::SeqCst);

    let mut app = test_app();
    app.world_mut()
        .resource_mut::<SimulationHandle>()
        .set_world(world);

    for _ in 0..5 {
        app.update();
    }

    assert_eq!(advances.load(Ordering::SeqCst), 0);
    assert_eq!(retrieves.load(Ordering::SeqCst), baseline);
}

#[test]
fn running_frames_advance_and_retrieve() {
    let advances = Arc::new(AtomicUsize::new(0));
    let retrieves = Arc::new(AtomicUsize::new(0));
    let backend = CountingBackend::new(advances.clone(), retrieves.clone());
    let world = init_world(Engine::with_backend(Box::new(backend), "target/test_ws"));
    let baseline = retrieves.load(Ordering::SeqCst);

    let mut app = test_app();
    app.world_mut()
        .resource_mut::<SimulationHandle>()
        .set_world(world);
    *app.world_mut().resource_mut::<RunState>() = RunState::Running;

    for _ in 0..3 {
        app.update();
    }

    assert_eq!(advances.load(Ordering::SeqCst), 3);
    assert_eq!(retrieves.load(Ordering::SeqCst), baseline + 3);
    let handle = app.world().resource::<SimulationHandle>();
    assert_eq!(handle.world().expect("world").frame(), 3);
}

#[test]
fn toggle_twice_restores_paused() {
    let mut app = test_app();
    app.update();

    app.world_mut().resource_mut::<RunState>().toggle();
    assert_eq!(*app.world().resource::<RunState>(), RunState::Running);
    app.world_mut().resource_mut::<RunState>().toggle();
    assert_eq!(*app.world().resource::<RunState>(), RunState::Paused);
}

#[test]
fn divergence_pauses_but_world_stays_valid() {
    let advances = Arc::new(AtomicUsize::new(0));
    let retrieves = Arc::new(AtomicUsize::new(0));
    let backend = CountingBackend::diverging(advances.clone(), retrieves.clone());
    let world = init_world(Engine::with_backend(Box::new(backend), "target/test_ws"));

    let mut app = test_app();
    app.world_mut()
        .resource_mut::<SimulationHandle>()
        .set_world(world);
    *app.world_mut().resource_mut::<RunState>() = RunState::Running;

    for _ in 0..3 {
        app.update();
    }

    // The first running frame diverges and pauses the loop.
    assert_eq!(*app.world().resource::<RunState>(), RunState::Paused);
    assert_eq!(advances.load(Ordering::SeqCst), 1);
    let handle = app.world().resource::<SimulationHandle>();
    let world = handle.world().expect("world");
    assert!(world.is_valid());
    assert_eq!(world.frame(), 0);
}

#[test]
fn free_vertex_falls_with_ballistic_backend() {
    let engine = Engine::new("ballistic", "target/test_ws").expect("engine");
    let world = init_world(engine);
    let geometry = world.geometry_ids().next().expect("geometry id");

    let mut app = test_app();

    // Track the last (free) vertex of the rod with a render entity.
    let entity = app
        .world_mut()
        .spawn((
            Transform::from_xyz(0.0, 0.1, 0.09),
            RodVertex { geometry, index: 3 },
        ))
        .id();

    app.world_mut()
        .resource_mut::<SimulationHandle>()
        .set_world(world);
    *app.world_mut().resource_mut::<RunState>() = RunState::Running;

    for _ in 0..10 {
        app.update();
    }

    let transform = app
        .world()
        .entity(entity)
        .get::<Transform>()
        .expect("transform");
    assert!(
        transform.translation.y < 0.1,
        "free vertex should have fallen, y = {}",
        transform.translation.y
    );

    // Fixed vertices hold their pose.
    let handle = app.world().resource::<SimulationHandle>();
    let positions = handle
        .world()
        .expect("world")
        .positions(geometry)
        .expect("positions");
    assert_relative_eq!(positions[0].y, 0.1, epsilon = 1e-9);
}
