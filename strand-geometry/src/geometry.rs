//! Geometry variants a scene object can hold.

use strand_types::{ContactModel, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::line_mesh::LineMesh;
use crate::trimesh::TriMesh;

/// Any geometry a scene object can hold.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Geometry {
    /// A deformable rod chain.
    Line(LineMesh),
    /// Static collision geometry.
    Tri(TriMesh),
}

impl Geometry {
    /// Validate the structure of the underlying mesh.
    ///
    /// # Errors
    ///
    /// Propagates the mesh's validation error.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Line(mesh) => mesh.validate(),
            Self::Tri(mesh) => mesh.validate(),
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        match self {
            Self::Line(mesh) => mesh.vertex_count(),
            Self::Tri(mesh) => mesh.vertex_count(),
        }
    }

    /// Whether the geometry participates in contact.
    #[must_use]
    pub fn is_surface(&self) -> bool {
        match self {
            Self::Line(mesh) => mesh.is_surface(),
            Self::Tri(mesh) => mesh.is_surface(),
        }
    }

    /// The contact override, if one was applied.
    #[must_use]
    pub fn contact(&self) -> Option<ContactModel> {
        match self {
            Self::Line(mesh) => mesh.contact(),
            Self::Tri(mesh) => mesh.contact(),
        }
    }

    /// The line mesh, if this is one.
    #[must_use]
    pub fn as_line(&self) -> Option<&LineMesh> {
        match self {
            Self::Line(mesh) => Some(mesh),
            Self::Tri(_) => None,
        }
    }

    /// The triangle mesh, if this is one.
    #[must_use]
    pub fn as_tri(&self) -> Option<&TriMesh> {
        match self {
            Self::Line(_) => None,
            Self::Tri(mesh) => Some(mesh),
        }
    }
}

impl From<LineMesh> for Geometry {
    fn from(mesh: LineMesh) -> Self {
        Self::Line(mesh)
    }
}

impl From<TriMesh> for Geometry {
    fn from(mesh: TriMesh) -> Self {
        Self::Tri(mesh)
    }
}
