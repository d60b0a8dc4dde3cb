//! Constitutive model parameter sets.
//!
//! These types carry the per-object numeric parameters a solver needs to
//! evaluate a constitutive law. The law itself lives in the engine; from
//! the assembly side an entry is an opaque tag with a kind and a stiffness.
//!
//! A geometry holds at most one entry per [`ConstitutionKind`]. Re-applying
//! the same entry is a no-op; applying a different entry of the same kind
//! replaces the previous one (last write wins, no merging).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The behavior a constitution entry models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConstitutionKind {
    /// Resistance to change in edge length.
    Stretch,
    /// Resistance to curvature between adjacent edges.
    Bending,
}

impl std::fmt::Display for ConstitutionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stretch => write!(f, "stretch"),
            Self::Bending => write!(f, "bending"),
        }
    }
}

/// Stretching spring parameters for a rod.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StretchSpring {
    /// Spring stiffness (Pa).
    pub stiffness: f64,
}

impl StretchSpring {
    /// Create a stretch entry with the given stiffness.
    #[must_use]
    pub fn new(stiffness: f64) -> Self {
        Self { stiffness }
    }

    /// Validate the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`StrandError::InvalidConfig`](crate::StrandError::InvalidConfig)
    /// for a non-finite or negative stiffness.
    pub fn validate(&self) -> crate::Result<()> {
        validate_stiffness("stretch", self.stiffness)
    }
}

/// Bending resistance parameters for a rod.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BendingModel {
    /// Bending stiffness (Pa).
    pub stiffness: f64,
}

impl BendingModel {
    /// Create a bending entry with the given stiffness.
    #[must_use]
    pub fn new(stiffness: f64) -> Self {
        Self { stiffness }
    }

    /// Validate the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`StrandError::InvalidConfig`](crate::StrandError::InvalidConfig)
    /// for a non-finite or negative stiffness.
    pub fn validate(&self) -> crate::Result<()> {
        validate_stiffness("bending", self.stiffness)
    }
}

/// A constitution entry of either kind.
///
/// Used by the constitution tabular's catalog and by generic application
/// onto geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConstitutionEntry {
    /// A stretching spring.
    Stretch(StretchSpring),
    /// A bending model.
    Bending(BendingModel),
}

impl ConstitutionEntry {
    /// The kind of this entry.
    #[must_use]
    pub fn kind(&self) -> ConstitutionKind {
        match self {
            Self::Stretch(_) => ConstitutionKind::Stretch,
            Self::Bending(_) => ConstitutionKind::Bending,
        }
    }

    /// The stiffness parameter of this entry.
    #[must_use]
    pub fn stiffness(&self) -> f64 {
        match self {
            Self::Stretch(s) => s.stiffness,
            Self::Bending(b) => b.stiffness,
        }
    }

    /// Validate the parameters.
    ///
    /// # Errors
    ///
    /// Propagates the inner entry's validation error.
    pub fn validate(&self) -> crate::Result<()> {
        match self {
            Self::Stretch(s) => s.validate(),
            Self::Bending(b) => b.validate(),
        }
    }
}

impl From<StretchSpring> for ConstitutionEntry {
    fn from(spring: StretchSpring) -> Self {
        Self::Stretch(spring)
    }
}

impl From<BendingModel> for ConstitutionEntry {
    fn from(model: BendingModel) -> Self {
        Self::Bending(model)
    }
}

fn validate_stiffness(kind: &str, stiffness: f64) -> crate::Result<()> {
    if !stiffness.is_finite() || stiffness < 0.0 {
        return Err(crate::StrandError::invalid_config(format!(
            "{kind} stiffness must be finite and non-negative, got {stiffness}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kind_and_stiffness() {
        let stretch: ConstitutionEntry = StretchSpring::new(40.0e6).into();
        assert_eq!(stretch.kind(), ConstitutionKind::Stretch);
        assert_eq!(stretch.stiffness(), 40.0e6);

        let bending: ConstitutionEntry = BendingModel::new(2.0e9).into();
        assert_eq!(bending.kind(), ConstitutionKind::Bending);
        assert_eq!(bending.stiffness(), 2.0e9);
    }

    #[test]
    fn test_validation() {
        assert!(StretchSpring::new(1.0e7).validate().is_ok());
        assert!(StretchSpring::new(0.0).validate().is_ok());
        assert!(StretchSpring::new(-1.0).validate().is_err());
        assert!(StretchSpring::new(f64::NAN).validate().is_err());

        assert!(BendingModel::new(f64::INFINITY).validate().is_err());

        let entry: ConstitutionEntry = BendingModel::new(-2.0).into();
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ConstitutionKind::Stretch.to_string(), "stretch");
        assert_eq!(ConstitutionKind::Bending.to_string(), "bending");
    }
}
