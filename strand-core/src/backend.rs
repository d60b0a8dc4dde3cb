//! The engine boundary: the backend trait and its wire format.
//!
//! A backend receives one scene upload at init and is then driven by the
//! advance/retrieve protocol. Positions cross the boundary as float32 n x 3
//! arrays and connectivity as int32 index arrays; per-vertex attributes ride
//! alongside as named channels. Everything behind the trait (degrees of
//! freedom, constraint lists, broad-phase structures) is opaque to the
//! driver.

use strand_types::{BendingModel, ContactModel, GeometryId, ObjectId, Result, StretchSpring};

/// Name of the per-vertex 0/1 channel marking fixed vertices.
pub const IS_FIXED: &str = "is_fixed";

/// A named per-vertex integer attribute channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeChannel {
    /// Channel name, e.g. [`IS_FIXED`].
    pub name: String,
    /// One value per vertex.
    pub values: Vec<i32>,
}

/// One geometry in wire format.
#[derive(Debug, Clone)]
pub struct GeometryUpload {
    /// Scene-assigned geometry id; echoed back in [`GeometryFrame`]s.
    pub geometry_id: GeometryId,
    /// The object this geometry belongs to.
    pub object_id: ObjectId,
    /// Vertex positions, n x 3.
    pub positions: Vec<[f32; 3]>,
    /// Edge indices (line geometry).
    pub edges: Vec<[i32; 2]>,
    /// Face indices (triangle geometry).
    pub faces: Vec<[i32; 3]>,
    /// Named per-vertex attribute channels.
    pub channels: Vec<AttributeChannel>,
    /// Stretch constitution tag, if applied.
    pub stretch: Option<StretchSpring>,
    /// Bending constitution tag, if applied.
    pub bending: Option<BendingModel>,
    /// Per-geometry contact override, if applied.
    pub contact: Option<ContactModel>,
    /// Whether the geometry participates in contact.
    pub is_surface: bool,
    /// Static geometry is collision-only and never integrated.
    pub is_static: bool,
    /// Render radius (meters); passed through for viewers.
    pub radius: f64,
}

impl GeometryUpload {
    /// Look up an attribute channel by name.
    #[must_use]
    pub fn channel(&self, name: &str) -> Option<&AttributeChannel> {
        self.channels.iter().find(|c| c.name == name)
    }
}

/// A finalized scene in wire format.
#[derive(Debug, Clone)]
pub struct SceneUpload {
    /// Fixed timestep (seconds).
    pub dt: f64,
    /// Gravity vector (m/s²).
    pub gravity: [f64; 3],
    /// Default contact model for surfaces without an override.
    pub contact: ContactModel,
    /// All geometries, in scene id order.
    pub geometries: Vec<GeometryUpload>,
}

/// Current positions of one geometry, copied out of engine storage.
#[derive(Debug, Clone)]
pub struct GeometryFrame {
    /// The geometry these positions belong to.
    pub geometry_id: GeometryId,
    /// Vertex positions, n x 3.
    pub positions: Vec<[f32; 3]>,
}

/// The three-operation capability a simulation engine exposes.
///
/// Calls are strictly sequential: `advance` completes before the next
/// `advance` or `retrieve`. A backend may parallelize internally, but it
/// presents synchronously. `retrieve` never mutates solver state.
pub trait SimulationBackend: Send + Sync {
    /// Build solver state from a finalized scene.
    ///
    /// # Errors
    ///
    /// Returns a backend-specific error if solver state cannot be built.
    fn init(&mut self, upload: &SceneUpload) -> Result<()>;

    /// Perform one simulation step.
    ///
    /// # Errors
    ///
    /// Returns [`Diverged`](strand_types::StrandError::Diverged) for a
    /// recoverable non-convergence or blow-up, or a fatal backend error.
    fn advance(&mut self) -> Result<()>;

    /// Copy current positions out of engine-owned storage.
    ///
    /// # Errors
    ///
    /// Returns a backend-specific error if the copy fails.
    fn retrieve(&mut self) -> Result<Vec<GeometryFrame>>;
}
