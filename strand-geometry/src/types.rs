//! Per-vertex flag bits.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Flags attached to each vertex of a geometry.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct VertexFlags: u32 {
        /// Vertex is a boundary condition: excluded from the solver's free
        /// degrees of freedom.
        const FIXED = 0b0000_0001;
        /// Vertex belongs to the contact surface.
        const SURFACE = 0b0000_0010;
    }
}
