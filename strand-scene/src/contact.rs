//! Contact registration catalog.

use strand_types::{ContactModel, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Catalog of the contact parameters registered with a scene.
///
/// Holds the default model applied to every contact surface that carries no
/// per-geometry override. Registering a second default replaces the first
/// (last write wins).
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContactTabular {
    default: Option<ContactModel>,
}

impl ContactTabular {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the default contact model.
    pub fn default_model(&mut self, friction: f64, stiffness: f64) -> ContactModel {
        let model = ContactModel::new(friction, stiffness);
        if let Some(previous) = self.default.replace(model) {
            tracing::debug!(
                friction = previous.friction,
                stiffness = previous.stiffness,
                "replacing default contact model"
            );
        }
        model
    }

    /// The model applied where no override exists.
    ///
    /// Falls back to [`ContactModel::default`] if nothing was registered.
    #[must_use]
    pub fn default_element(&self) -> ContactModel {
        self.default.unwrap_or_default()
    }

    /// Check whether a default model was registered.
    #[must_use]
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Validate the registered model.
    ///
    /// # Errors
    ///
    /// Propagates the model's validation error.
    pub fn validate(&self) -> Result<()> {
        self.default_element().validate()
    }
}
