//! Error types for scene assembly and simulation driving.

use thiserror::Error;

/// Result alias used throughout the strand crates.
pub type Result<T> = std::result::Result<T, StrandError>;

/// Errors that can occur while assembling a scene or driving a simulation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StrandError {
    /// A construction argument violated its contract.
    #[error("invalid argument `{arg}`: {message}")]
    InvalidArgument {
        /// Name of the offending argument.
        arg: &'static str,
        /// What was wrong with it.
        message: String,
    },

    /// Invalid scene or solver configuration.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration error.
        reason: String,
    },

    /// An object with this name already exists in the scene.
    #[error("object name already in use: {name}")]
    DuplicateName {
        /// The colliding name.
        name: String,
    },

    /// Geometry failed structural validation.
    #[error("invalid geometry: {reason}")]
    InvalidGeometry {
        /// Description of the structural defect.
        reason: String,
    },

    /// The scene has been handed to a world and no longer accepts edits.
    #[error("scene is frozen: it was already handed to a world")]
    SceneFrozen,

    /// A driver operation was called before `init`.
    #[error("world is not initialized: cannot {op}")]
    NotInitialized {
        /// The operation that was attempted.
        op: &'static str,
    },

    /// `init` was called on an already-initialized world.
    #[error("world is already initialized")]
    AlreadyInitialized,

    /// The solver failed to produce a usable step (`NaN`, non-convergence).
    ///
    /// Recoverable at the policy level: the caller may pause and report
    /// instead of terminating. The world stays valid.
    #[error("simulation diverged at frame {frame}: {reason}")]
    Diverged {
        /// Frame at which divergence was detected.
        frame: u64,
        /// Description of what went wrong.
        reason: String,
    },

    /// The world was invalidated by an earlier engine failure.
    #[error("world became invalid at frame {frame}; no further stepping is possible")]
    WorldInvalid {
        /// Frame at which the world was invalidated.
        frame: u64,
    },

    /// Fatal engine-internal failure. Invalidates the world.
    #[error("engine error: {message}")]
    Backend {
        /// Engine-provided description.
        message: String,
    },
}

impl StrandError {
    /// Create an invalid-argument error.
    #[must_use]
    pub fn invalid_argument(arg: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            message: message.into(),
        }
    }

    /// Create an invalid-configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create a duplicate-name error.
    #[must_use]
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Create an invalid-geometry error.
    #[must_use]
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }

    /// Create a not-initialized error for the given operation.
    #[must_use]
    pub fn not_initialized(op: &'static str) -> Self {
        Self::NotInitialized { op }
    }

    /// Create a diverged error.
    #[must_use]
    pub fn diverged(frame: u64, reason: impl Into<String>) -> Self {
        Self::Diverged {
            frame,
            reason: reason.into(),
        }
    }

    /// Create a backend error.
    #[must_use]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Check if this is a divergence error.
    #[must_use]
    pub fn is_diverged(&self) -> bool {
        matches!(self, Self::Diverged { .. })
    }

    /// Check if this error invalidates the world it came from.
    ///
    /// Divergence does not: the loop may pause and resume. Engine-internal
    /// failures and an already-invalid world do.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Backend { .. } | Self::WorldInvalid { .. })
    }

    /// Check if this is an assembly-phase error (programmer error class).
    #[must_use]
    pub fn is_assembly_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateName { .. } | Self::InvalidGeometry { .. } | Self::SceneFrozen
        )
    }
}
