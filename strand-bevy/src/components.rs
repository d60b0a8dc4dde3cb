//! ECS components linking Bevy entities to simulation geometry.

use bevy::prelude::*;
use strand_types::GeometryId;

/// A sphere entity tracking one rod vertex.
///
/// The sync system moves it to the vertex's retrieved position each frame.
#[derive(Component, Debug, Clone, Copy)]
pub struct RodVertex {
    /// Geometry the vertex belongs to.
    pub geometry: GeometryId,
    /// Vertex index within the geometry.
    pub index: usize,
}

/// A cylinder entity tracking one rod edge.
///
/// The sync system stretches it between its endpoints' retrieved positions
/// each frame.
#[derive(Component, Debug, Clone, Copy)]
pub struct RodEdge {
    /// Geometry the edge belongs to.
    pub geometry: GeometryId,
    /// Endpoint vertex indices.
    pub endpoints: [u32; 2],
}
