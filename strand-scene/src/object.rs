//! Named scene objects.

use strand_geometry::Geometry;
use strand_types::{GeometryId, ObjectId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named container of geometries within a scene.
///
/// Objects are created empty and extended one geometry at a time before the
/// scene is handed to a world. Geometry is snapshotted when added: the scene
/// owns it from then on, and the engine sees exactly the tagged state it
/// carried at add time.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SceneObject {
    id: ObjectId,
    name: String,
    geometries: Vec<(GeometryId, Geometry)>,
}

impl SceneObject {
    pub(crate) fn new(id: ObjectId, name: String) -> Self {
        Self {
            id,
            name,
            geometries: Vec::new(),
        }
    }

    pub(crate) fn push_geometry(&mut self, id: GeometryId, geometry: Geometry) {
        self.geometries.push((id, geometry));
    }

    /// The object's id.
    #[must_use]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// The object's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The object's geometries, in the order they were added.
    pub fn geometries(&self) -> impl Iterator<Item = (GeometryId, &Geometry)> {
        self.geometries.iter().map(|(id, g)| (*id, g))
    }

    /// Look up one geometry by id.
    #[must_use]
    pub fn geometry(&self, id: GeometryId) -> Option<&Geometry> {
        self.geometries
            .iter()
            .find(|(gid, _)| *gid == id)
            .map(|(_, g)| g)
    }

    /// Number of geometries in this object.
    #[must_use]
    pub fn geometry_count(&self) -> usize {
        self.geometries.len()
    }
}
