//! Plugin composition for the rod viewer.

use bevy::prelude::*;

use crate::resources::{RunState, SimulationHandle, ViewerConfig};
use crate::systems::{RodViewerSet, step_simulation, sync_rod_transforms, toggle_run_state};

/// Interactive rod viewer plugin.
///
/// Owns the run/pause loop around a [`SimulationHandle`](crate::resources::SimulationHandle):
/// the loop starts paused, Space toggles it, and every running frame advances
/// the engine once and retrieves positions before the sync set moves the
/// render entities.
///
/// # Example
///
/// ```no_run,ignore
/// use bevy::prelude::*;
/// use strand_bevy::prelude::*;
///
/// fn main() {
///     App::new()
///         .add_plugins(DefaultPlugins)
///         .add_plugins(RodViewerPlugin::new())
///         .run();
/// }
/// ```
#[derive(Default)]
pub struct RodViewerPlugin {
    /// Initial viewer configuration.
    pub config: ViewerConfig,
    /// Whether to spawn a default camera.
    pub spawn_camera: bool,
    /// Whether to spawn default lighting.
    pub spawn_lighting: bool,
    /// Whether to add the keyboard toggle system (requires input resources).
    pub enable_input: bool,
}

impl RodViewerPlugin {
    /// Create a new plugin with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            spawn_camera: true,
            spawn_lighting: true,
            enable_input: true,
            ..Default::default()
        }
    }

    /// Create a plugin for headless/testing mode (no camera, no lighting, no input).
    #[must_use]
    pub fn headless() -> Self {
        Self {
            spawn_camera: false,
            spawn_lighting: false,
            enable_input: false,
            ..Default::default()
        }
    }

    /// Set the viewer configuration.
    #[must_use]
    pub fn with_config(mut self, config: ViewerConfig) -> Self {
        self.config = config;
        self
    }

    /// Disable automatic camera spawning.
    #[must_use]
    pub fn without_camera(mut self) -> Self {
        self.spawn_camera = false;
        self
    }

    /// Disable automatic lighting spawning.
    #[must_use]
    pub fn without_lighting(mut self) -> Self {
        self.spawn_lighting = false;
        self
    }
}

impl Plugin for RodViewerPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .init_resource::<RunState>()
            .init_resource::<SimulationHandle>();

        app.configure_sets(Update, RodViewerSet::Step.after(RodViewerSet::Input));
        app.configure_sets(PostUpdate, RodViewerSet::Sync);

        if self.enable_input {
            app.add_systems(Update, toggle_run_state.in_set(RodViewerSet::Input));
        }
        app.add_systems(Update, step_simulation.in_set(RodViewerSet::Step));
        app.add_systems(PostUpdate, sync_rod_transforms.in_set(RodViewerSet::Sync));

        if self.spawn_camera {
            app.add_systems(Startup, spawn_default_camera);
        }
        if self.spawn_lighting {
            app.add_systems(Startup, spawn_default_lighting);
        }
    }
}

/// Spawn a camera looking at the rod scene.
fn spawn_default_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.5, 0.3, 0.5).looking_at(Vec3::new(0.12, 0.0, 0.1), Vec3::Y),
    ));
}

/// Spawn default lighting for the scene.
fn spawn_default_lighting(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.5, 0.5, 0.0)),
    ));

    // Ambient light (Bevy 0.18: spawned as entity, not a resource)
    commands.spawn(AmbientLight {
        color: Color::WHITE,
        brightness: 200.0,
        ..default()
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_builder_pattern() {
        let plugin = RodViewerPlugin::new().without_camera().without_lighting();
        assert!(!plugin.spawn_camera);
        assert!(!plugin.spawn_lighting);
        assert!(plugin.enable_input);
    }

    #[test]
    fn headless_disables_everything() {
        let plugin = RodViewerPlugin::headless();
        assert!(!plugin.spawn_camera);
        assert!(!plugin.spawn_lighting);
        assert!(!plugin.enable_input);
    }
}
