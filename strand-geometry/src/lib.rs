//! Geometry construction for the strand deformable-rod simulation stack.
//!
//! This crate builds the geometry a scene is assembled from:
//!
//! - [`build_rod`] - a straight vertex chain with sequential edges and a
//!   fixed leading prefix
//! - [`build_ground`] - a static quad for collision
//! - [`LineMesh`] / [`TriMesh`] - the meshes themselves, with per-vertex
//!   [`VertexFlags`] and per-geometry tag slots for constitution and
//!   contact entries
//!
//! Construction is pure: nothing here touches the engine. Tag every mesh
//! before handing it to a scene - the assembler snapshots geometry at add
//! time and later edits are not seen by the engine.
//!
//! # Example
//!
//! ```
//! use nalgebra::{Point3, Vector3};
//! use strand_geometry::build_rod;
//! use strand_types::StretchSpring;
//!
//! let mut rod = build_rod(Point3::new(0.0, 0.1, 0.0), Vector3::z(), 0.03, 8, 2)?;
//! rod.apply_constitution(StretchSpring::new(40.0e6));
//! rod.label_surface();
//!
//! assert_eq!(rod.edge_count(), 7);
//! assert_eq!(rod.fixed_count(), 2);
//! # Ok::<(), strand_types::StrandError>(())
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]

mod geometry;
mod ground;
mod line_mesh;
mod rod;
mod trimesh;
mod types;

pub use geometry::Geometry;
pub use ground::{DEFAULT_GROUND_HALF_EXTENT, build_ground, build_ground_sized};
pub use line_mesh::{DEFAULT_ROD_RADIUS, LineMesh};
pub use rod::build_rod;
pub use trimesh::TriMesh;
pub use types::VertexFlags;
