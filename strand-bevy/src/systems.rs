//! ECS systems driving and rendering the simulation.

use bevy::prelude::*;
use strand_core::World;

use crate::components::{RodEdge, RodVertex};
use crate::convert::vec3_from_point;
use crate::mesh::triangle_mesh;
use crate::resources::{RunState, SimulationHandle, ViewerConfig};

/// System sets ordering the viewer loop.
///
/// `Input` flips the run state, `Step` drives the engine, `Sync` copies the
/// retrieved positions onto entity transforms. Step always sees the run
/// state decided this frame, and Sync always sees the positions Step
/// retrieved.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum RodViewerSet {
    /// Run-state toggling from input.
    Input,
    /// Engine advance and retrieve.
    Step,
    /// Transform synchronization from retrieved positions.
    Sync,
}

/// Toggles the run state when Space is pressed.
#[allow(clippy::needless_pass_by_value)] // Bevy system parameters are passed by value
pub fn toggle_run_state(
    keys: Res<ButtonInput<KeyCode>>,
    mut run_state: ResMut<RunState>,
) {
    if keys.just_pressed(KeyCode::Space) {
        run_state.toggle();
        info!(running = run_state.is_running(), "run state toggled");
    }
}

/// Advances the simulation one frame while running.
///
/// A diverged step pauses the loop but leaves the world valid, so the user
/// may resume. Any other engine error also pauses, and the world reports
/// itself invalid from then on.
pub fn step_simulation(mut handle: ResMut<SimulationHandle>, mut run_state: ResMut<RunState>) {
    if !run_state.is_running() {
        return;
    }
    let Some(world) = handle.world_mut() else {
        return;
    };

    let result = world.advance().and_then(|()| world.retrieve());
    if let Err(err) = result {
        if err.is_diverged() {
            warn!(error = %err, "simulation diverged, pausing");
        } else {
            error!(error = %err, "simulation step failed, pausing");
        }
        *run_state = RunState::Paused;
    }
}

/// Moves vertex spheres and edge cylinders to the retrieved positions.
#[allow(clippy::needless_pass_by_value)] // Bevy system parameters are passed by value
pub fn sync_rod_transforms(
    handle: Res<SimulationHandle>,
    mut vertices: Query<(&RodVertex, &mut Transform), Without<RodEdge>>,
    mut edges: Query<(&RodEdge, &mut Transform), Without<RodVertex>>,
) {
    let Some(world) = handle.world() else {
        return;
    };

    for (vertex, mut transform) in &mut vertices {
        if let Some(positions) = world.positions(vertex.geometry) {
            if let Some(p) = positions.get(vertex.index) {
                transform.translation = vec3_from_point(p);
            }
        }
    }

    for (edge, mut transform) in &mut edges {
        let Some(positions) = world.positions(edge.geometry) else {
            continue;
        };
        let (Some(a), Some(b)) = (
            positions.get(edge.endpoints[0] as usize),
            positions.get(edge.endpoints[1] as usize),
        ) else {
            continue;
        };
        update_edge_transform(&mut transform, vec3_from_point(a), vec3_from_point(b));
    }
}

/// Stretch a unit-height cylinder between two points.
fn update_edge_transform(transform: &mut Transform, start: Vec3, end: Vec3) {
    let midpoint = (start + end) / 2.0;
    let direction = (end - start).normalize_or_zero();
    let length = (end - start).length();

    transform.translation = midpoint;
    transform.scale = Vec3::new(1.0, length, 1.0);

    if direction.length_squared() > 0.0001 {
        transform.rotation = Quat::from_rotation_arc(Vec3::Y, direction);
    }
}

/// Spawn render entities for every geometry in an initialized world.
///
/// Rod geometries get a sphere per vertex (fixed vertices tinted) and a
/// unit-height cylinder per edge scaled by the sync system. Static
/// geometries get a single triangle mesh.
pub fn spawn_rod_visuals(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    world: &World,
    config: &ViewerConfig,
) {
    let rod_material = materials.add(StandardMaterial {
        base_color: config.rod_color,
        ..default()
    });
    let fixed_material = materials.add(StandardMaterial {
        base_color: config.fixed_color,
        ..default()
    });
    let ground_material = materials.add(StandardMaterial {
        base_color: config.ground_color,
        ..default()
    });

    let ids: Vec<_> = world.geometry_ids().collect();
    for id in ids {
        let Some(topology) = world.topology(id) else {
            continue;
        };
        let Some(positions) = world.positions(id) else {
            continue;
        };

        if topology.is_static {
            let mesh = meshes.add(triangle_mesh(positions, &topology.faces));
            commands.spawn((
                Mesh3d(mesh),
                MeshMaterial3d(ground_material.clone()),
                Transform::IDENTITY,
            ));
            continue;
        }

        #[allow(clippy::cast_possible_truncation)]
        let radius = if topology.radius > 0.0 {
            topology.radius as f32
        } else {
            config.fallback_radius
        };

        let sphere = meshes.add(Sphere::new(radius));
        for (index, p) in positions.iter().enumerate() {
            let material = if topology.fixed.get(index).copied().unwrap_or(false) {
                fixed_material.clone()
            } else {
                rod_material.clone()
            };
            commands.spawn((
                Mesh3d(sphere.clone()),
                MeshMaterial3d(material),
                Transform::from_translation(vec3_from_point(p)),
                RodVertex {
                    geometry: id,
                    index,
                },
            ));
        }

        let cylinder = meshes.add(Cylinder::new(radius * config.edge_radius_scale, 1.0));
        for &endpoints in &topology.edges {
            let mut transform = Transform::IDENTITY;
            let (Some(a), Some(b)) = (
                positions.get(endpoints[0] as usize),
                positions.get(endpoints[1] as usize),
            ) else {
                continue;
            };
            update_edge_transform(&mut transform, vec3_from_point(a), vec3_from_point(b));
            commands.spawn((
                Mesh3d(cylinder.clone()),
                MeshMaterial3d(rod_material.clone()),
                transform,
                RodEdge {
                    geometry: id,
                    endpoints,
                },
            ));
        }
    }
}
