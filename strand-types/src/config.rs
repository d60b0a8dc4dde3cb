//! Scene-level configuration.
//!
//! A [`SceneConfig`] carries the global parameters the engine needs before
//! it builds solver state: the step size and the gravity vector. Everything
//! solver-internal (iteration counts, tolerances) belongs to the engine and
//! is deliberately absent here.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Global configuration attached to a scene.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SceneConfig {
    /// Fixed timestep for one `advance` call (seconds).
    pub dt: f64,
    /// Gravity vector (m/s²). Y-up convention.
    pub gravity: Vector3<f64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            dt: 0.01,
            gravity: Vector3::new(0.0, -9.8, 0.0),
        }
    }
}

impl SceneConfig {
    /// Create a config with the given timestep and default gravity.
    #[must_use]
    pub fn with_dt(dt: f64) -> Self {
        Self {
            dt,
            ..Default::default()
        }
    }

    /// Set the gravity vector.
    #[must_use]
    pub fn gravity(mut self, gravity: Vector3<f64>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Disable gravity.
    #[must_use]
    pub fn zero_gravity(mut self) -> Self {
        self.gravity = Vector3::zeros();
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StrandError::InvalidConfig`](crate::StrandError::InvalidConfig)
    /// for a non-finite or non-positive timestep or a non-finite gravity
    /// vector.
    pub fn validate(&self) -> crate::Result<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(crate::StrandError::invalid_config(format!(
                "dt must be positive and finite, got {}",
                self.dt
            )));
        }

        if self.dt > 1.0 {
            return Err(crate::StrandError::invalid_config(
                "dt > 1 second is likely an error",
            ));
        }

        if !self.gravity.iter().all(|c| c.is_finite()) {
            return Err(crate::StrandError::invalid_config(
                "gravity components must be finite",
            ));
        }

        Ok(())
    }

    /// Steps per second implied by the timestep.
    #[must_use]
    pub fn frequency(&self) -> f64 {
        1.0 / self.dt
    }
}
