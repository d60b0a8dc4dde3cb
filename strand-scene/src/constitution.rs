//! Constitution registration catalog.

use strand_types::{BendingModel, ConstitutionEntry, Result, StretchSpring};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Catalog of the constitution entries registered with a scene.
///
/// Registration returns the entry so it can be stamped onto geometry; the
/// catalog itself exists so the engine can see every distinct parameter set
/// the scene uses. Entries are not deduplicated: each call records one row.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstitutionTabular {
    entries: Vec<ConstitutionEntry>,
}

impl ConstitutionTabular {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stretching spring with the given stiffness.
    pub fn register_stretch(&mut self, stiffness: f64) -> StretchSpring {
        let spring = StretchSpring::new(stiffness);
        self.entries.push(spring.into());
        spring
    }

    /// Register a bending model with the given stiffness.
    pub fn register_bending(&mut self, stiffness: f64) -> BendingModel {
        let model = BendingModel::new(stiffness);
        self.entries.push(model.into());
        model
    }

    /// Insert an already-built entry.
    pub fn insert(&mut self, entry: impl Into<ConstitutionEntry>) -> ConstitutionEntry {
        let entry = entry.into();
        self.entries.push(entry);
        entry
    }

    /// All registered entries, in registration order.
    #[must_use]
    pub fn entries(&self) -> &[ConstitutionEntry] {
        &self.entries
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entries are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate every registered entry.
    ///
    /// # Errors
    ///
    /// Propagates the first entry validation error.
    pub fn validate(&self) -> Result<()> {
        for entry in &self.entries {
            entry.validate()?;
        }
        Ok(())
    }
}
