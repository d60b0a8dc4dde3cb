//! Type conversions between strand-core and Bevy types.
//!
//! The rod stack is Y-up like Bevy, so conversion is a numeric cast with no
//! axis swap. This module is the only place that knows both type families.

#![allow(clippy::cast_possible_truncation)] // f64 -> f32 is intentional for Bevy

use bevy::math::Vec3;
use nalgebra::{Point3, Vector3};

/// Convert a nalgebra `Point3` to a Bevy `Vec3`.
#[inline]
#[must_use]
pub fn vec3_from_point(p: &Point3<f64>) -> Vec3 {
    Vec3::new(p.x as f32, p.y as f32, p.z as f32)
}

/// Convert a nalgebra `Vector3` to a Bevy `Vec3`.
#[inline]
#[must_use]
pub fn vec3_from_vector(v: &Vector3<f64>) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}
