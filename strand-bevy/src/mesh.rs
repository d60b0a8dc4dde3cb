//! Bevy mesh construction for static simulation geometry.

#![allow(clippy::cast_possible_truncation)] // f64 -> f32 is intentional for Bevy meshes

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;
use nalgebra::Point3;

/// Build a Bevy triangle mesh from simulation positions and faces.
///
/// Vertex normals are the normalized sum of adjacent face normals, so the
/// winding of the input faces decides which way the surface lights.
#[must_use]
pub fn triangle_mesh(positions: &[Point3<f64>], faces: &[[u32; 3]]) -> Mesh {
    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    if positions.is_empty() || faces.is_empty() {
        return mesh;
    }

    let vertex_positions: Vec<[f32; 3]> = positions
        .iter()
        .map(|p| [p.x as f32, p.y as f32, p.z as f32])
        .collect();

    let mut accumulated = vec![nalgebra::Vector3::zeros(); positions.len()];
    for &[a, b, c] in faces {
        let v0 = positions[a as usize];
        let v1 = positions[b as usize];
        let v2 = positions[c as usize];
        let face_normal = (v1 - v0).cross(&(v2 - v0));
        for idx in [a, b, c] {
            accumulated[idx as usize] += face_normal;
        }
    }
    let normals: Vec<[f32; 3]> = accumulated
        .iter()
        .map(|n| {
            let len = n.norm();
            if len > 1e-9 {
                let unit = n / len;
                [unit.x as f32, unit.y as f32, unit.z as f32]
            } else {
                [0.0, 1.0, 0.0]
            }
        })
        .collect();

    let indices: Vec<u32> = faces.iter().flatten().copied().collect();

    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertex_positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}
