//! Bevy viewer and interactive run loop for the strand simulation stack.
//!
//! This crate is **Layer 1**: it depends on Bevy and drives the Layer 0
//! crates (`strand-core` and below). The viewer owns the run/pause state
//! machine; the [`World`](strand_core::World) remains the source of truth
//! for simulation state, and all rendering is derived from the positions it
//! retrieves.
//!
//! The loop starts paused. Space toggles between paused and running; a
//! running frame advances the engine once, retrieves the new positions, and
//! syncs them onto the render entities. A diverged step pauses the loop and
//! leaves the world resumable.
//!
//! # Example
//!
//! ```no_run,ignore
//! use bevy::prelude::*;
//! use strand_bevy::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(RodViewerPlugin::new())
//!         .run();
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod components;
pub mod convert;
pub mod mesh;
pub mod plugin;
pub mod resources;
pub mod systems;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::components::{RodEdge, RodVertex};
    pub use crate::plugin::RodViewerPlugin;
    pub use crate::resources::{RunState, SimulationHandle, ViewerConfig};
    pub use crate::systems::{RodViewerSet, spawn_rod_visuals};
}
