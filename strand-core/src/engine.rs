//! Engine handle: backend selection plus a workspace path.

use std::path::{Path, PathBuf};

use strand_types::{Result, StrandError};

use crate::backend::SimulationBackend;
use crate::ballistic::BallisticBackend;

/// A compute engine: one backend bound to a workspace directory for
/// transient engine files.
///
/// Backends are selected by name; [`Engine::with_backend`] injects a custom
/// implementation (test doubles, future GPU solvers).
pub struct Engine {
    name: String,
    workspace: PathBuf,
    backend: Box<dyn SimulationBackend>,
}

impl Engine {
    /// Create an engine with a registered backend.
    ///
    /// Known names: `"ballistic"` (the reference backend).
    ///
    /// # Errors
    ///
    /// Returns [`StrandError::InvalidArgument`] for an unknown backend name.
    pub fn new(backend_name: &str, workspace: impl Into<PathBuf>) -> Result<Self> {
        let backend: Box<dyn SimulationBackend> = match backend_name {
            "ballistic" => Box::new(BallisticBackend::new()),
            other => {
                return Err(StrandError::invalid_argument(
                    "backend_name",
                    format!("unknown backend `{other}`"),
                ));
            }
        };
        Ok(Self {
            name: backend_name.to_owned(),
            workspace: workspace.into(),
            backend,
        })
    }

    /// Create an engine around an injected backend.
    #[must_use]
    pub fn with_backend(
        backend: Box<dyn SimulationBackend>,
        workspace: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: "custom".to_owned(),
            workspace: workspace.into(),
            backend,
        }
    }

    /// The backend name this engine was created with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The workspace directory for transient engine files.
    #[must_use]
    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    pub(crate) fn backend_mut(&mut self) -> &mut dyn SimulationBackend {
        self.backend.as_mut()
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("name", &self.name)
            .field("workspace", &self.workspace)
            .finish_non_exhaustive()
    }
}
