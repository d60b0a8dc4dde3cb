//! Core types for the strand deformable-rod simulation stack.
//!
//! This crate provides the shared vocabulary of the stack:
//!
//! - [`StrandError`] / [`Result`] - one error taxonomy for assembly and driving
//! - [`SceneConfig`] - timestep and gravity
//! - [`StretchSpring`], [`BendingModel`], [`ContactModel`] - opaque parameter
//!   sets the engine turns into constitutive and contact behavior
//! - [`ObjectId`], [`GeometryId`] - scene entity identifiers
//!
//! # Design Philosophy
//!
//! These types are **pure data**. They carry no solver logic - the numerical
//! engine behind the backend boundary owns all of that. They are the common
//! language between:
//!
//! - Scene assembly (`strand-scene`)
//! - Geometry construction (`strand-geometry`)
//! - The simulation driver (`strand-core`)
//! - Viewers and tooling (`strand-bevy`)
//!
//! # Coordinate System
//!
//! - X: right
//! - Y: up (gravity is `(0, -9.8, 0)` by default)
//! - Z: toward the viewer
//! - Right-handed
//!
//! # Example
//!
//! ```
//! use strand_types::{SceneConfig, StretchSpring};
//!
//! let config = SceneConfig::default();
//! assert!(config.validate().is_ok());
//!
//! let spring = StretchSpring::new(40.0e6);
//! assert!(spring.validate().is_ok());
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
// Allow certain clippy lints that are overly pedantic for type definitions
#![allow(
    clippy::missing_const_for_fn,     // Many methods can't be const due to nalgebra
    clippy::module_name_repetitions,  // ConstitutionKind lives in constitution.rs
)]

mod config;
mod constitution;
mod contact;
mod error;
mod id;

pub use config::SceneConfig;
pub use constitution::{BendingModel, ConstitutionEntry, ConstitutionKind, StretchSpring};
pub use contact::ContactModel;
pub use error::{Result, StrandError};
pub use id::{GeometryId, ObjectId};
