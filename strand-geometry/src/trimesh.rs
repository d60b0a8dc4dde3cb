//! Triangle meshes for static collision geometry.

use nalgebra::Point3;
use strand_types::{ContactModel, Result, StrandError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangle mesh.
///
/// Faces are wound counter-clockwise when seen from the outward side, so the
/// face normal follows the right-hand rule. Used for static collision
/// geometry (the ground); never simulated as deformable.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriMesh {
    /// Vertex positions.
    positions: Vec<Point3<f64>>,
    /// Triangle faces as vertex index triples.
    faces: Vec<[u32; 3]>,
    /// Whether the mesh participates in contact.
    surface: bool,
    /// Contact tag slot.
    contact: Option<ContactModel>,
}

impl TriMesh {
    /// Create a triangle mesh from vertex positions and face indices.
    ///
    /// # Errors
    ///
    /// Returns [`StrandError::InvalidGeometry`] if there are fewer than three
    /// vertices, a face references a missing vertex, or a face repeats a
    /// vertex.
    pub fn from_parts(positions: Vec<Point3<f64>>, faces: Vec<[u32; 3]>) -> Result<Self> {
        let mesh = Self {
            positions,
            faces,
            surface: false,
            contact: None,
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Validate the mesh structure.
    ///
    /// # Errors
    ///
    /// Returns [`StrandError::InvalidGeometry`] for the defects listed on
    /// [`TriMesh::from_parts`].
    pub fn validate(&self) -> Result<()> {
        if self.positions.len() < 3 {
            return Err(StrandError::invalid_geometry(format!(
                "triangle mesh needs at least 3 vertices, got {}",
                self.positions.len()
            )));
        }

        let n = self.positions.len() as u32;
        for (i, &[a, b, c]) in self.faces.iter().enumerate() {
            if a >= n || b >= n || c >= n {
                return Err(StrandError::invalid_geometry(format!(
                    "face {i} ({a}, {b}, {c}) references a vertex outside 0..{n}"
                )));
            }
            if a == b || b == c || a == c {
                return Err(StrandError::invalid_geometry(format!(
                    "face {i} ({a}, {b}, {c}) repeats a vertex"
                )));
            }
        }

        for p in &self.positions {
            if !p.iter().all(|c| c.is_finite()) {
                return Err(StrandError::invalid_geometry(
                    "vertex positions must be finite",
                ));
            }
        }

        Ok(())
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Vertex positions.
    #[must_use]
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// Face index triples.
    #[must_use]
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Mark this mesh as contact surface.
    pub fn label_surface(&mut self) {
        self.surface = true;
    }

    /// Whether the mesh participates in contact.
    #[must_use]
    pub fn is_surface(&self) -> bool {
        self.surface
    }

    /// Stamp a contact model onto the mesh, overriding the scene default.
    pub fn apply_contact(&mut self, model: ContactModel) {
        self.contact = Some(model);
    }

    /// The contact override, if one was applied.
    #[must_use]
    pub fn contact(&self) -> Option<ContactModel> {
        self.contact
    }
}
