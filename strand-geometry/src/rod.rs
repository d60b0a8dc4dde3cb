//! Rod construction.

use nalgebra::{Point3, Vector3};
use strand_types::{Result, StrandError};

use crate::line_mesh::LineMesh;

/// Build a straight rod: `n_vertices` collinear points spaced
/// `segment_length` apart along `direction` from `origin`, connected by
/// `n_vertices - 1` sequential edges.
///
/// The first `fixed_count` vertices are marked fixed, anchoring the rod at
/// the origin end. `direction` is normalized internally.
///
/// # Errors
///
/// Returns [`StrandError::InvalidArgument`] if `n_vertices < 2`,
/// `fixed_count > n_vertices`, `segment_length` is not positive and finite,
/// or `direction` is degenerate.
pub fn build_rod(
    origin: Point3<f64>,
    direction: Vector3<f64>,
    segment_length: f64,
    n_vertices: usize,
    fixed_count: usize,
) -> Result<LineMesh> {
    if n_vertices < 2 {
        return Err(StrandError::invalid_argument(
            "n_vertices",
            format!("a rod needs at least 2 vertices, got {n_vertices}"),
        ));
    }
    if fixed_count > n_vertices {
        return Err(StrandError::invalid_argument(
            "fixed_count",
            format!("must be at most n_vertices ({n_vertices}), got {fixed_count}"),
        ));
    }
    if !segment_length.is_finite() || segment_length <= 0.0 {
        return Err(StrandError::invalid_argument(
            "segment_length",
            format!("must be positive and finite, got {segment_length}"),
        ));
    }
    if !origin.iter().all(|c| c.is_finite()) {
        return Err(StrandError::invalid_argument(
            "origin",
            "components must be finite",
        ));
    }
    let norm = direction.norm();
    if !norm.is_finite() || norm < 1e-12 {
        return Err(StrandError::invalid_argument(
            "direction",
            "must be a non-degenerate vector",
        ));
    }
    let unit = direction / norm;

    let positions: Vec<Point3<f64>> = (0..n_vertices)
        .map(|i| origin + unit * (segment_length * i as f64))
        .collect();
    let edges: Vec<[u32; 2]> = (0..n_vertices as u32 - 1).map(|i| [i, i + 1]).collect();

    let mut mesh = LineMesh::from_parts(positions, edges)?;
    for i in 0..fixed_count {
        mesh.fix_vertex(i)?;
    }
    Ok(mesh)
}
