//! Bevy resources for the rod viewer.

use bevy::prelude::*;
use strand_core::World;

/// Handle to the simulation world.
///
/// Wraps the strand-core [`World`]; the step system drives it, every other
/// system only reads the copied-out positions.
#[derive(Resource, Default)]
pub struct SimulationHandle {
    world: Option<World>,
}

impl SimulationHandle {
    /// Create a handle around an initialized world.
    #[must_use]
    pub fn new(world: World) -> Self {
        Self { world: Some(world) }
    }

    /// Create an empty handle.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get a reference to the world.
    #[must_use]
    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    /// Get a mutable reference to the world.
    pub fn world_mut(&mut self) -> Option<&mut World> {
        self.world.as_mut()
    }

    /// Set the world.
    pub fn set_world(&mut self, world: World) {
        self.world = Some(world);
    }

    /// Check if a world is present.
    #[must_use]
    pub fn has_world(&self) -> bool {
        self.world.is_some()
    }
}

/// Whether the loop steps the simulation this frame.
///
/// An explicit two-state machine owned by the viewer, initially
/// [`RunState::Paused`], flipped only by an explicit toggle command. While
/// paused the loop renders the last retrieved state and issues zero engine
/// calls.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// Render only; no engine calls.
    #[default]
    Paused,
    /// Advance and retrieve every frame.
    Running,
}

impl RunState {
    /// Flip between paused and running.
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Paused => Self::Running,
            Self::Running => Self::Paused,
        };
    }

    /// Check if the simulation should step this frame.
    #[must_use]
    pub fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}

/// Configuration for the rod viewer.
#[derive(Resource, Debug, Clone)]
pub struct ViewerConfig {
    /// Color of free rod vertices and edges.
    pub rod_color: Color,
    /// Color of fixed rod vertices.
    pub fixed_color: Color,
    /// Color of static ground geometry.
    pub ground_color: Color,
    /// Edge cylinder radius as a fraction of the vertex sphere radius.
    pub edge_radius_scale: f32,
    /// Fallback radius for geometries uploaded without one (meters).
    pub fallback_radius: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            rod_color: Color::srgb(0.8, 0.6, 0.4),
            fixed_color: Color::srgb(0.9, 0.2, 0.2),
            ground_color: Color::srgb(0.5, 0.5, 0.5),
            edge_radius_scale: 0.8,
            fallback_radius: 0.01,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_state_starts_paused() {
        assert_eq!(RunState::default(), RunState::Paused);
        assert!(!RunState::default().is_running());
    }

    #[test]
    fn toggle_twice_returns_to_original() {
        let mut state = RunState::Paused;
        state.toggle();
        assert_eq!(state, RunState::Running);
        state.toggle();
        assert_eq!(state, RunState::Paused);
    }

    #[test]
    fn empty_handle_has_no_world() {
        let handle = SimulationHandle::empty();
        assert!(!handle.has_world());
        assert!(handle.world().is_none());
    }
}
