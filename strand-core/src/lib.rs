//! Simulation driving for the strand deformable-rod stack.
//!
//! This crate owns the boundary with the numerical engine:
//!
//! - [`SimulationBackend`] - the three-operation capability
//!   (`init`/`advance`/`retrieve`) every engine exposes, plus its wire types
//! - [`Engine`] - backend selection and the workspace path
//! - [`World`] - the stepping state machine over one engine
//! - [`BallisticBackend`] - a reference backend for tests and demos
//!
//! Everything numerical lives behind the backend trait. The driver is
//! strictly sequential and single-threaded: one `advance` completes before
//! the next call, and a long solve blocks the caller.
//!
//! # Example
//!
//! ```
//! use nalgebra::{Point3, Vector3};
//! use strand_core::{Engine, World};
//! use strand_geometry::build_rod;
//! use strand_scene::Scene;
//!
//! let mut scene = Scene::new(Scene::default_config());
//! let rods = scene.create_object("rods")?;
//! scene.add_geometry(rods, build_rod(Point3::new(0.0, 0.1, 0.0), Vector3::z(), 0.03, 8, 2)?)?;
//!
//! let engine = Engine::new("ballistic", "target/doc_ws")?;
//! let mut world = World::new(engine);
//! world.init(&mut scene)?;
//! world.advance()?;
//! world.retrieve()?;
//! # Ok::<(), strand_types::StrandError>(())
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]

pub mod backend;
mod ballistic;
mod engine;
mod world;

pub use backend::{
    AttributeChannel, GeometryFrame, GeometryUpload, IS_FIXED, SceneUpload, SimulationBackend,
};
pub use ballistic::BallisticBackend;
pub use engine::Engine;
pub use world::{Topology, World};
