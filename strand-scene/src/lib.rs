//! Scene assembly for the strand deformable-rod simulation stack.
//!
//! A [`Scene`] collects named [`SceneObject`]s, each holding tagged
//! geometries, plus the [`ConstitutionTabular`] and [`ContactTabular`]
//! registration catalogs and the global [`SceneConfig`](strand_types::SceneConfig).
//! The assembly protocol:
//!
//! 1. register constitution entries and the default contact model,
//! 2. build geometry, stamp its tags and fixed vertices,
//! 3. create objects and add the geometry to them,
//! 4. hand the scene to a world, which freezes it.
//!
//! The assembler snapshots geometry at `add_geometry` time; after handoff the
//! scene stays usable as a read/query handle, and every mutation fails with
//! [`SceneFrozen`](strand_types::StrandError::SceneFrozen).
//!
//! # Example
//!
//! ```
//! use nalgebra::{Point3, Vector3};
//! use strand_geometry::build_rod;
//! use strand_scene::Scene;
//!
//! let mut scene = Scene::new(Scene::default_config());
//! let spring = scene.constitution_tabular_mut().register_stretch(40.0e6);
//! scene.contact_tabular_mut().default_model(0.05, 1.0e9);
//!
//! let mut rod = build_rod(Point3::new(0.0, 0.1, 0.0), Vector3::z(), 0.03, 8, 2)?;
//! rod.apply_constitution(spring);
//!
//! let rods = scene.create_object("rods")?;
//! scene.add_geometry(rods, rod)?;
//! # Ok::<(), strand_types::StrandError>(())
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]

mod constitution;
mod contact;
mod object;
mod scene;

pub use constitution::ConstitutionTabular;
pub use contact::ContactTabular;
pub use object::SceneObject;
pub use scene::Scene;
