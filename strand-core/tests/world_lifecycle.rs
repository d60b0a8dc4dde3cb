//! World state-machine tests: operation ordering, divergence recovery, and
//! invalidation.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use nalgebra::{Point3, Vector3};
use strand_core::{
    Engine, GeometryFrame, SceneUpload, SimulationBackend, World,
};
use strand_geometry::build_rod;
use strand_scene::Scene;
use strand_types::{Result, StrandError};

/// Backend that counts calls and fails on a schedule.
#[derive(Default)]
struct ScriptedBackend {
    init_calls: usize,
    advance_calls: usize,
    retrieve_calls: usize,
    /// Advance calls (1-based) that fail with a divergence.
    diverge_on: Vec<usize>,
    /// Advance calls (1-based) that fail fatally.
    fail_on: Vec<usize>,
    positions: Vec<(strand_types::GeometryId, Vec<[f32; 3]>)>,
}

impl SimulationBackend for ScriptedBackend {
    fn init(&mut self, upload: &SceneUpload) -> Result<()> {
        self.init_calls += 1;
        self.positions = upload
            .geometries
            .iter()
            .map(|g| (g.geometry_id, g.positions.clone()))
            .collect();
        Ok(())
    }

    fn advance(&mut self) -> Result<()> {
        self.advance_calls += 1;
        if self.diverge_on.contains(&self.advance_calls) {
            return Err(StrandError::diverged(
                self.advance_calls as u64,
                "scripted divergence",
            ));
        }
        if self.fail_on.contains(&self.advance_calls) {
            return Err(StrandError::backend("scripted engine failure"));
        }
        Ok(())
    }

    fn retrieve(&mut self) -> Result<Vec<GeometryFrame>> {
        self.retrieve_calls += 1;
        Ok(self
            .positions
            .iter()
            .map(|(id, positions)| GeometryFrame {
                geometry_id: *id,
                positions: positions.clone(),
            })
            .collect())
    }
}

fn rod_scene() -> Scene {
    let mut scene = Scene::new(Scene::default_config());
    let rods = scene.create_object("rods").unwrap();
    scene
        .add_geometry(
            rods,
            build_rod(Point3::new(0.0, 0.1, 0.0), Vector3::z(), 0.03, 8, 2).unwrap(),
        )
        .unwrap();
    scene
}

fn scripted_world(backend: ScriptedBackend) -> World {
    World::new(Engine::with_backend(Box::new(backend), "target/test_ws"))
}

#[test]
fn advance_before_init_fails() {
    let mut world = scripted_world(ScriptedBackend::default());
    assert!(matches!(
        world.advance().unwrap_err(),
        StrandError::NotInitialized { op: "advance" }
    ));
}

#[test]
fn retrieve_before_init_fails() {
    let mut world = scripted_world(ScriptedBackend::default());
    assert!(matches!(
        world.retrieve().unwrap_err(),
        StrandError::NotInitialized { op: "retrieve" }
    ));
}

#[test]
fn double_init_fails() {
    let mut scene = rod_scene();
    let mut world = scripted_world(ScriptedBackend::default());

    world.init(&mut scene).unwrap();
    assert!(world.is_initialized());

    let mut other = rod_scene();
    assert!(matches!(
        world.init(&mut other).unwrap_err(),
        StrandError::AlreadyInitialized
    ));
    // The rejected scene was not frozen.
    assert!(!other.is_frozen());
}

#[test]
fn init_freezes_the_scene() {
    let mut scene = rod_scene();
    let mut world = scripted_world(ScriptedBackend::default());

    assert!(!scene.is_frozen());
    world.init(&mut scene).unwrap();
    assert!(scene.is_frozen());
    assert_eq!(scene.create_object("late"), Err(StrandError::SceneFrozen));
}

#[test]
fn retrieve_right_after_init_yields_initial_pose() {
    let mut scene = rod_scene();
    let mut world = scripted_world(ScriptedBackend::default());
    world.init(&mut scene).unwrap();

    world.retrieve().unwrap();

    let id = world.geometry_ids().next().unwrap();
    let positions = world.positions(id).unwrap();
    assert_eq!(positions.len(), 8);
    assert!((positions[0].y - 0.1).abs() < 1e-6);
    assert_eq!(world.frame(), 0);
}

#[test]
fn frames_count_successful_advances() {
    let mut scene = rod_scene();
    let mut world = scripted_world(ScriptedBackend::default());
    world.init(&mut scene).unwrap();

    for expected in 1..=5 {
        world.advance().unwrap();
        assert_eq!(world.frame(), expected);
    }
}

#[test]
fn divergence_is_recoverable() {
    let mut scene = rod_scene();
    let mut world = scripted_world(ScriptedBackend {
        diverge_on: vec![2],
        ..Default::default()
    });
    world.init(&mut scene).unwrap();

    world.advance().unwrap();
    let err = world.advance().unwrap_err();
    assert!(err.is_diverged());

    // The diverged step is not redone and the world stays valid.
    assert!(world.is_valid());
    assert_eq!(world.frame(), 1);
    world.advance().unwrap();
    assert_eq!(world.frame(), 2);
}

#[test]
fn fatal_error_invalidates_the_world() {
    let mut scene = rod_scene();
    let mut world = scripted_world(ScriptedBackend {
        fail_on: vec![1],
        ..Default::default()
    });
    world.init(&mut scene).unwrap();

    let err = world.advance().unwrap_err();
    assert!(err.is_fatal());
    assert!(!world.is_valid());

    assert!(matches!(
        world.advance().unwrap_err(),
        StrandError::WorldInvalid { .. }
    ));
    assert!(matches!(
        world.retrieve().unwrap_err(),
        StrandError::WorldInvalid { .. }
    ));
}

#[test]
fn init_rejects_an_empty_scene() {
    let mut scene = Scene::new(Scene::default_config());
    scene.create_object("empty").unwrap();

    let mut world = scripted_world(ScriptedBackend::default());
    assert!(world.init(&mut scene).is_err());
    assert!(!world.is_initialized());
    assert!(!scene.is_frozen());
}
