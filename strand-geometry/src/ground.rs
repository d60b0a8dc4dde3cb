//! Ground plane construction.

use nalgebra::Point3;
use strand_types::{Result, StrandError};

use crate::trimesh::TriMesh;

/// Half extent of the default ground quad (meters).
pub const DEFAULT_GROUND_HALF_EXTENT: f64 = 10.0;

/// Build the default-sized ground quad at `y = height`.
///
/// # Errors
///
/// Returns [`StrandError::InvalidArgument`] for a non-finite height.
pub fn build_ground(height: f64) -> Result<TriMesh> {
    build_ground_sized(height, DEFAULT_GROUND_HALF_EXTENT)
}

/// Build a square ground quad at `y = height` spanning `±half_extent` in X
/// and Z, wound so both face normals point up (+Y).
///
/// Collision-only geometry: the engine never treats it as deformable.
///
/// # Errors
///
/// Returns [`StrandError::InvalidArgument`] for a non-finite height or a
/// non-positive half extent.
pub fn build_ground_sized(height: f64, half_extent: f64) -> Result<TriMesh> {
    if !height.is_finite() {
        return Err(StrandError::invalid_argument(
            "height",
            format!("must be finite, got {height}"),
        ));
    }
    if !half_extent.is_finite() || half_extent <= 0.0 {
        return Err(StrandError::invalid_argument(
            "half_extent",
            format!("must be positive and finite, got {half_extent}"),
        ));
    }

    let h = half_extent;
    let positions = vec![
        Point3::new(-h, height, -h),
        Point3::new(-h, height, h),
        Point3::new(h, height, h),
        Point3::new(h, height, -h),
    ];
    // CCW seen from above.
    let faces = vec![[0, 1, 2], [0, 2, 3]];

    let mut mesh = TriMesh::from_parts(positions, faces)?;
    mesh.label_surface();
    Ok(mesh)
}
