//! Six hanging rods with graded bending stiffness.
//!
//! Each rod is anchored at its first two vertices and falls under gravity;
//! stiffer rods droop less. Press Space to toggle between paused and
//! running.
//!
//! Run with: `cargo run --example hanging_rods`

use bevy::prelude::*;
use nalgebra::{Point3, Vector3};
use strand_bevy::prelude::*;
use strand_core::{Engine, World};
use strand_geometry::{build_ground, build_rod};
use strand_scene::Scene;
use strand_types::Result;

const N_RODS: usize = 6;
const N_VERTICES: usize = 8;
const SEGMENT_LENGTH: f64 = 0.03;
const ROD_SPACING: f64 = 0.04;
const ROD_HEIGHT: f64 = 0.1;
const ROD_RADIUS: f64 = 0.01;
const STRETCH_STIFFNESS: f64 = 40e6;
const BENDING_BASE: f64 = 1e9;
const FRICTION: f64 = 0.05;
const CONTACT_STIFFNESS: f64 = 1e9;
const GROUND_HEIGHT: f64 = -0.1;

fn build_world() -> Result<World> {
    let mut scene = Scene::new(Scene::default_config());
    scene.contact_tabular_mut().default_model(FRICTION, CONTACT_STIFFNESS);

    for i in 0..N_RODS {
        let stretch = scene
            .constitution_tabular_mut()
            .register_stretch(STRETCH_STIFFNESS);
        #[allow(clippy::cast_precision_loss)]
        let bending = scene
            .constitution_tabular_mut()
            .register_bending((i as f64 + 1.0) * BENDING_BASE);

        #[allow(clippy::cast_precision_loss)]
        let origin = Point3::new(ROD_SPACING * (i as f64 + 1.0), ROD_HEIGHT, 0.0);
        let mut rod = build_rod(
            origin,
            Vector3::new(0.0, 0.0, 1.0),
            SEGMENT_LENGTH,
            N_VERTICES,
            2,
        )?;
        rod.apply_constitution(stretch);
        rod.apply_constitution(bending);
        rod.apply_contact(scene.contact_tabular().default_element());
        rod.set_radius(ROD_RADIUS);
        rod.label_surface();

        let object = scene.create_object(&format!("rod_{i}"))?;
        scene.add_geometry(object, rod)?;
    }

    let ground = build_ground(GROUND_HEIGHT)?;
    let object = scene.create_object("ground")?;
    scene.add_geometry(object, ground)?;

    let engine = Engine::new("ballistic", std::env::temp_dir().join("hanging_rods"))?;
    let mut world = World::new(engine);
    world.init(&mut scene)?;
    world.retrieve()?;
    Ok(world)
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut handle: ResMut<SimulationHandle>,
    config: Res<ViewerConfig>,
) {
    let world = match build_world() {
        Ok(world) => world,
        Err(err) => {
            error!(error = %err, "failed to build the rod scene");
            return;
        }
    };
    spawn_rod_visuals(&mut commands, &mut meshes, &mut materials, &world, &config);
    handle.set_world(world);
    info!("press Space to start the simulation");
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(RodViewerPlugin::new())
        .add_systems(Startup, setup)
        .run();
}
