//! End-to-end scene tests against the reference backend.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};
use strand_core::{Engine, World};
use strand_geometry::{build_ground, build_rod};
use strand_scene::Scene;
use strand_types::GeometryId;

/// Builds the hanging-rod scene: one 8-vertex rod with the first two
/// vertices fixed, tagged with stretch and bending entries, plus a ground
/// object.
fn hanging_rod_scene() -> (Scene, GeometryId) {
    let mut scene = Scene::new(Scene::default_config());

    let spring = scene.constitution_tabular_mut().register_stretch(40.0e6);
    let bending = scene.constitution_tabular_mut().register_bending(1.0e9);
    scene.contact_tabular_mut().default_model(0.05, 1.0e9);
    let contact = scene.contact_tabular().default_element();

    let mut rod = build_rod(Point3::new(0.04, 0.1, 0.0), Vector3::z(), 0.03, 8, 2).unwrap();
    rod.label_surface();
    rod.apply_constitution(spring);
    rod.apply_constitution(bending);
    rod.apply_contact(contact);
    rod.set_radius(0.01);

    let rods = scene.create_object("rods").unwrap();
    let rod_id = scene.add_geometry(rods, rod).unwrap();

    let ground = scene.create_object("ground").unwrap();
    scene
        .add_geometry(ground, build_ground(-0.1).unwrap())
        .unwrap();

    (scene, rod_id)
}

#[test]
fn initial_retrieve_returns_unperturbed_pose() {
    let (mut scene, rod_id) = hanging_rod_scene();
    let mut world = World::new(Engine::new("ballistic", "target/test_ws").unwrap());
    world.init(&mut scene).unwrap();
    world.retrieve().unwrap();

    let positions = world.positions(rod_id).unwrap();
    assert_eq!(positions.len(), 8);
    for (i, p) in positions.iter().enumerate() {
        assert_relative_eq!(p.x, 0.04, epsilon = 1e-6);
        assert_relative_eq!(p.y, 0.1, epsilon = 1e-6);
        assert_relative_eq!(p.z, 0.03 * i as f64, epsilon = 1e-6);
    }
}

#[test]
fn fixed_vertices_hold_after_one_cycle() {
    let (mut scene, rod_id) = hanging_rod_scene();
    let mut world = World::new(Engine::new("ballistic", "target/test_ws").unwrap());
    world.init(&mut scene).unwrap();

    let initial = world.positions(rod_id).unwrap().to_vec();

    world.advance().unwrap();
    world.retrieve().unwrap();
    let after = world.positions(rod_id).unwrap();

    // The two anchored vertices are untouched.
    for i in 0..2 {
        assert_relative_eq!(after[i].y, initial[i].y, epsilon = 1e-9);
        assert_relative_eq!(after[i].z, initial[i].z, epsilon = 1e-9);
    }
    // Free vertices fell under gravity.
    for i in 2..8 {
        assert!(after[i].y < initial[i].y, "vertex {i} did not move");
    }
}

#[test]
fn ground_geometry_stays_static() {
    let (mut scene, _) = hanging_rod_scene();
    let ground_id = scene
        .object_by_name("ground")
        .unwrap()
        .geometries()
        .next()
        .unwrap()
        .0;

    let mut world = World::new(Engine::new("ballistic", "target/test_ws").unwrap());
    world.init(&mut scene).unwrap();

    for _ in 0..5 {
        world.advance().unwrap();
    }
    world.retrieve().unwrap();

    let positions = world.positions(ground_id).unwrap();
    for p in positions {
        assert_relative_eq!(p.y, -0.1, epsilon = 1e-6);
    }
    assert!(world.topology(ground_id).unwrap().is_static);
}

#[test]
fn six_rods_assemble_as_distinct_objects() {
    let mut scene = Scene::new(Scene::default_config());
    let spring = scene.constitution_tabular_mut().register_stretch(40.0e6);
    scene.contact_tabular_mut().default_model(0.05, 1.0e9);

    for i in 0..6 {
        let bending = scene
            .constitution_tabular_mut()
            .register_bending((i + 1) as f64 * 1.0e9);

        let origin = Point3::new(0.04 * (i + 1) as f64, 0.1, 0.0);
        let mut rod = build_rod(origin, Vector3::z(), 0.03, 8, 2).unwrap();
        rod.label_surface();
        rod.apply_constitution(spring);
        rod.apply_constitution(bending);

        let object = scene.create_object(&format!("rod_{i}")).unwrap();
        scene.add_geometry(object, rod).unwrap();
    }

    let ground = scene.create_object("ground").unwrap();
    scene
        .add_geometry(ground, build_ground(-0.1).unwrap())
        .unwrap();

    assert_eq!(scene.object_count(), 7);
    for i in 0..6 {
        let object = scene.object_by_name(&format!("rod_{i}")).unwrap();
        assert_eq!(object.geometry_count(), 1);
        let (_, geometry) = object.geometries().next().unwrap();
        let mesh = geometry.as_line().unwrap();
        assert_relative_eq!(
            mesh.bending().unwrap().stiffness,
            (i + 1) as f64 * 1.0e9,
            epsilon = 1.0
        );
    }

    let mut world = World::new(Engine::new("ballistic", "target/test_ws").unwrap());
    world.init(&mut scene).unwrap();
    assert_eq!(world.geometry_ids().count(), 7);
}
