//! 1-D simplicial complexes: vertex chains connected by edges.

use nalgebra::Point3;
use strand_types::{
    BendingModel, ConstitutionEntry, ContactModel, Result, StrandError, StretchSpring,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::VertexFlags;

/// Default render radius for a rod (meters).
pub const DEFAULT_ROD_RADIUS: f64 = 0.01;

/// A line mesh: ordered vertices connected by edges, with per-vertex flags
/// and per-geometry tag slots.
///
/// This is the geometry of a deformable rod. The constitutive and contact
/// behaviors are opaque tags stamped onto the mesh before it is added to a
/// scene; the engine turns them into forces. Each tag slot holds at most one
/// entry: re-applying the same entry is a no-op, applying a different entry
/// of the same kind replaces the previous one.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineMesh {
    /// Vertex positions.
    positions: Vec<Point3<f64>>,
    /// Edge connectivity as vertex index pairs.
    edges: Vec<[u32; 2]>,
    /// Per-vertex flags.
    flags: Vec<VertexFlags>,
    /// Render radius (meters).
    radius: f64,
    /// Whether the mesh participates in contact.
    surface: bool,
    /// Stretch tag slot.
    stretch: Option<StretchSpring>,
    /// Bending tag slot.
    bending: Option<BendingModel>,
    /// Contact tag slot.
    contact: Option<ContactModel>,
}

impl LineMesh {
    /// Create a line mesh from vertex positions and edge indices.
    ///
    /// # Errors
    ///
    /// Returns [`StrandError::InvalidGeometry`] if there are fewer than two
    /// vertices, an edge references a missing vertex, an edge is degenerate,
    /// or the same edge appears twice.
    pub fn from_parts(positions: Vec<Point3<f64>>, edges: Vec<[u32; 2]>) -> Result<Self> {
        let n_flags = positions.len();
        let mesh = Self {
            positions,
            edges,
            flags: vec![VertexFlags::empty(); n_flags],
            radius: DEFAULT_ROD_RADIUS,
            surface: false,
            stretch: None,
            bending: None,
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
    /// [`LineMesh::from_parts`].
    pub fn validate(&self) -> Result<()> {
        if self.positions.len() < 2 {
            return Err(StrandError::invalid_geometry(format!(
                "line mesh needs at least 2 vertices, got {}",
                self.positions.len()
            )));
        }

        let n = self.positions.len() as u32;
        for (i, &[a, b]) in self.edges.iter().enumerate() {
            if a >= n || b >= n {
                return Err(StrandError::invalid_geometry(format!(
                    "edge {i} ({a}, {b}) references a vertex outside 0..{n}"
                )));
            }
            if a == b {
                return Err(StrandError::invalid_geometry(format!(
                    "edge {i} connects vertex {a} to itself"
                )));
            }
        }

        // Repeated edges in either orientation count as duplicates.
        for (i, &[a, b]) in self.edges.iter().enumerate() {
            for &[c, d] in &self.edges[i + 1..] {
                if (a == c && b == d) || (a == d && b == c) {
                    return Err(StrandError::invalid_geometry(format!(
                        "edge ({a}, {b}) appears more than once"
                    )));
                }
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

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Vertex positions.
    #[must_use]
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// Edge index pairs.
    #[must_use]
    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// Per-vertex flags.
    #[must_use]
    pub fn flags(&self) -> &[VertexFlags] {
        &self.flags
    }

    /// Mark a vertex as fixed (a boundary condition).
    ///
    /// # Errors
    ///
    /// Returns [`StrandError::InvalidArgument`] if the index is out of range.
    pub fn fix_vertex(&mut self, index: usize) -> Result<()> {
        let flags = self.flags.get_mut(index).ok_or_else(|| {
            StrandError::invalid_argument(
                "index",
                format!("vertex {index} out of range 0..{}", self.positions.len()),
            )
        })?;
        flags.insert(VertexFlags::FIXED);
        Ok(())
    }

    /// Check whether a vertex is fixed.
    #[must_use]
    pub fn is_fixed(&self, index: usize) -> bool {
        self.flags
            .get(index)
            .is_some_and(|f| f.contains(VertexFlags::FIXED))
    }

    /// Number of fixed vertices.
    #[must_use]
    pub fn fixed_count(&self) -> usize {
        self.flags
            .iter()
            .filter(|f| f.contains(VertexFlags::FIXED))
            .count()
    }

    /// Render radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Set the render radius.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    /// Mark every vertex of this mesh as contact surface.
    pub fn label_surface(&mut self) {
        for flags in &mut self.flags {
            flags.insert(VertexFlags::SURFACE);
        }
        self.surface = true;
    }

    /// Whether the mesh participates in contact.
    #[must_use]
    pub fn is_surface(&self) -> bool {
        self.surface
    }

    /// Stamp a constitution entry onto the mesh.
    ///
    /// Idempotent for the same entry; a different entry of the same kind
    /// replaces the previous one (last write wins, no merging).
    pub fn apply_constitution(&mut self, entry: impl Into<ConstitutionEntry>) {
        match entry.into() {
            ConstitutionEntry::Stretch(s) => self.stretch = Some(s),
            ConstitutionEntry::Bending(b) => self.bending = Some(b),
        }
    }

    /// Stamp a contact model onto the mesh, overriding the scene default.
    pub fn apply_contact(&mut self, model: ContactModel) {
        self.contact = Some(model);
    }

    /// The stretch entry, if one was applied.
    #[must_use]
    pub fn stretch(&self) -> Option<StretchSpring> {
        self.stretch
    }

    /// The bending entry, if one was applied.
    #[must_use]
    pub fn bending(&self) -> Option<BendingModel> {
        self.bending
    }

    /// The contact override, if one was applied.
    #[must_use]
    pub fn contact(&self) -> Option<ContactModel> {
        self.contact
    }
}
