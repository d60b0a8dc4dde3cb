//! Reference backend: free flight under gravity.
//!
//! Integrates every free vertex with semi-implicit Euler and pins fixed
//! vertices in place. Constitutive response and contact are deliberately
//! absent; this backend exists so the driver and the interaction loop have a
//! real engine to run against without a GPU solver.

use nalgebra::{Point3, Vector3};
use strand_types::{Result, StrandError};

use crate::backend::{GeometryFrame, IS_FIXED, SceneUpload, SimulationBackend};

struct BallisticGeometry {
    id: strand_types::GeometryId,
    positions: Vec<Point3<f64>>,
    velocities: Vec<Vector3<f64>>,
    fixed: Vec<bool>,
    is_static: bool,
}

/// A minimal engine integrating free vertices under scene gravity.
#[derive(Default)]
pub struct BallisticBackend {
    dt: f64,
    gravity: Vector3<f64>,
    geometries: Vec<BallisticGeometry>,
    frame: u64,
}

impl BallisticBackend {
    /// Create an empty backend; state arrives with the scene upload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SimulationBackend for BallisticBackend {
    fn init(&mut self, upload: &SceneUpload) -> Result<()> {
        self.dt = upload.dt;
        self.gravity = Vector3::new(upload.gravity[0], upload.gravity[1], upload.gravity[2]);
        self.frame = 0;
        self.geometries = upload
            .geometries
            .iter()
            .map(|g| {
                let positions: Vec<Point3<f64>> = g
                    .positions
                    .iter()
                    .map(|p| Point3::new(f64::from(p[0]), f64::from(p[1]), f64::from(p[2])))
                    .collect();
                let fixed = g.channel(IS_FIXED).map_or_else(
                    || vec![false; positions.len()],
                    |c| c.values.iter().map(|&v| v != 0).collect(),
                );
                BallisticGeometry {
                    id: g.geometry_id,
                    velocities: vec![Vector3::zeros(); positions.len()],
                    positions,
                    fixed,
                    is_static: g.is_static,
                }
            })
            .collect();
        Ok(())
    }

    fn advance(&mut self) -> Result<()> {
        self.frame += 1;

        for geometry in &mut self.geometries {
            if geometry.is_static {
                continue;
            }
            for ((position, velocity), &fixed) in geometry
                .positions
                .iter_mut()
                .zip(&mut geometry.velocities)
                .zip(&geometry.fixed)
            {
                if fixed {
                    continue;
                }
                // Symplectic: velocity first, position with the new velocity.
                *velocity += self.gravity * self.dt;
                *position += *velocity * self.dt;
            }
        }

        for geometry in &self.geometries {
            let finite = geometry
                .positions
                .iter()
                .all(|p| p.iter().all(|c| c.is_finite()));
            if !finite {
                return Err(StrandError::diverged(
                    self.frame,
                    format!("{} has non-finite positions", geometry.id),
                ));
            }
        }

        Ok(())
    }

    fn retrieve(&mut self) -> Result<Vec<GeometryFrame>> {
        Ok(self
            .geometries
            .iter()
            .map(|g| GeometryFrame {
                geometry_id: g.id,
                positions: g
                    .positions
                    .iter()
                    .map(|p| [p.x as f32, p.y as f32, p.z as f32])
                    .collect(),
            })
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::backend::{AttributeChannel, GeometryUpload};
    use strand_types::{ContactModel, GeometryId, ObjectId};

    fn two_vertex_upload() -> SceneUpload {
        SceneUpload {
            dt: 0.01,
            gravity: [0.0, -9.8, 0.0],
            contact: ContactModel::default(),
            geometries: vec![GeometryUpload {
                geometry_id: GeometryId::new(0),
                object_id: ObjectId::new(0),
                positions: vec![[0.0, 1.0, 0.0], [0.0, 1.0, 0.03]],
                edges: vec![[0, 1]],
                faces: vec![],
                channels: vec![AttributeChannel {
                    name: IS_FIXED.to_owned(),
                    values: vec![1, 0],
                }],
                stretch: None,
                bending: None,
                contact: None,
                is_surface: true,
                is_static: false,
                radius: 0.01,
            }],
        }
    }

    #[test]
    fn test_fixed_vertices_hold_free_vertices_fall() {
        let mut backend = BallisticBackend::new();
        backend.init(&two_vertex_upload()).unwrap();

        backend.advance().unwrap();
        let frames = backend.retrieve().unwrap();
        assert_eq!(frames.len(), 1);

        let positions = &frames[0].positions;
        assert!((positions[0][1] - 1.0).abs() < 1e-6, "fixed vertex moved");
        assert!(positions[1][1] < 1.0, "free vertex did not fall");
    }

    #[test]
    fn test_static_geometry_never_moves() {
        let mut upload = two_vertex_upload();
        upload.geometries[0].is_static = true;
        upload.geometries[0].channels.clear();

        let mut backend = BallisticBackend::new();
        backend.init(&upload).unwrap();
        for _ in 0..10 {
            backend.advance().unwrap();
        }

        let frames = backend.retrieve().unwrap();
        assert!((frames[0].positions[1][1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_divergence_detection() {
        let mut upload = two_vertex_upload();
        upload.dt = f64::INFINITY;

        let mut backend = BallisticBackend::new();
        backend.init(&upload).unwrap();

        let err = backend.advance().unwrap_err();
        assert!(err.is_diverged());
    }
}
