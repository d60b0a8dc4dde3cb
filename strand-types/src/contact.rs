//! Contact interaction parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pairwise surface interaction parameters.
///
/// Applied uniformly to every tagged surface unless a future per-pair
/// override mechanism replaces it. The friction coefficient is
/// conventionally in `[0, 1]`; the range is enforced by the engine, not
/// validated here.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContactModel {
    /// Friction coefficient.
    pub friction: f64,
    /// Contact stiffness (Pa).
    pub stiffness: f64,
}

impl ContactModel {
    /// Create a contact model with the given friction and stiffness.
    #[must_use]
    pub fn new(friction: f64, stiffness: f64) -> Self {
        Self {
            friction,
            stiffness,
        }
    }

    /// Validate the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`StrandError::InvalidConfig`](crate::StrandError::InvalidConfig)
    /// for non-finite parameters or a non-positive stiffness.
    pub fn validate(&self) -> crate::Result<()> {
        if !self.friction.is_finite() {
            return Err(crate::StrandError::invalid_config(format!(
                "contact friction must be finite, got {}",
                self.friction
            )));
        }

        if !self.stiffness.is_finite() || self.stiffness <= 0.0 {
            return Err(crate::StrandError::invalid_config(format!(
                "contact stiffness must be finite and positive, got {}",
                self.stiffness
            )));
        }

        Ok(())
    }
}

impl Default for ContactModel {
    /// The built-in default used when no model was registered:
    /// friction 0.5, stiffness 1e9 Pa.
    fn default() -> Self {
        Self {
            friction: 0.5,
            stiffness: 1.0e9,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_model() {
        let model = ContactModel::new(0.05, 1.0e9);
        assert!(model.validate().is_ok());
        assert_eq!(model.friction, 0.05);
        assert_eq!(model.stiffness, 1.0e9);
    }

    #[test]
    fn test_contact_validation() {
        assert!(ContactModel::new(0.5, 0.0).validate().is_err());
        assert!(ContactModel::new(0.5, -1.0).validate().is_err());
        assert!(ContactModel::new(f64::NAN, 1.0e9).validate().is_err());
        assert!(ContactModel::new(0.5, f64::INFINITY).validate().is_err());
        // Out-of-range friction is the engine's problem, not ours.
        assert!(ContactModel::new(1.5, 1.0e9).validate().is_ok());
    }

    #[test]
    fn test_default_model() {
        let model = ContactModel::default();
        assert!(model.validate().is_ok());
        assert_eq!(model.friction, 0.5);
    }
}
