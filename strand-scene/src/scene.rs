//! Scene assembly: the object table and its lifecycle.

use hashbrown::HashMap;
use strand_geometry::Geometry;
use strand_types::{GeometryId, ObjectId, Result, SceneConfig, StrandError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constitution::ConstitutionTabular;
use crate::contact::ContactTabular;
use crate::object::SceneObject;

/// The aggregate a simulation is built from: named objects, their
/// geometries, the registration tabulars, and the global config.
///
/// A scene is exclusively owned and freely extended until it is handed to a
/// world, which freezes it. A frozen scene rejects every mutation with
/// [`StrandError::SceneFrozen`] but remains a read/query handle for the rest
/// of the process.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scene {
    config: SceneConfig,
    constitution: ConstitutionTabular,
    contact: ContactTabular,
    objects: Vec<SceneObject>,
    names: HashMap<String, ObjectId>,
    next_geometry_id: u64,
    frozen: bool,
}

impl Scene {
    /// Create an empty scene with the given configuration.
    #[must_use]
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            constitution: ConstitutionTabular::new(),
            contact: ContactTabular::new(),
            objects: Vec::new(),
            names: HashMap::new(),
            next_geometry_id: 0,
            frozen: false,
        }
    }

    /// The default configuration (dt = 0.01 s, gravity = (0, -9.8, 0)).
    #[must_use]
    pub fn default_config() -> SceneConfig {
        SceneConfig::default()
    }

    /// The scene configuration.
    #[must_use]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// The constitution catalog.
    #[must_use]
    pub fn constitution_tabular(&self) -> &ConstitutionTabular {
        &self.constitution
    }

    /// The constitution catalog, for registration.
    pub fn constitution_tabular_mut(&mut self) -> &mut ConstitutionTabular {
        &mut self.constitution
    }

    /// The contact catalog.
    #[must_use]
    pub fn contact_tabular(&self) -> &ContactTabular {
        &self.contact
    }

    /// The contact catalog, for registration.
    pub fn contact_tabular_mut(&mut self) -> &mut ContactTabular {
        &mut self.contact
    }

    /// Create an empty named object.
    ///
    /// # Errors
    ///
    /// Returns [`StrandError::SceneFrozen`] after the scene was handed to a
    /// world, and [`StrandError::DuplicateName`] if the name is taken. A
    /// failed call leaves the scene unchanged.
    pub fn create_object(&mut self, name: &str) -> Result<ObjectId> {
        self.ensure_mutable()?;
        if self.names.contains_key(name) {
            return Err(StrandError::duplicate_name(name));
        }

        let id = ObjectId::new(self.objects.len() as u64);
        self.objects.push(SceneObject::new(id, name.to_owned()));
        self.names.insert(name.to_owned(), id);
        tracing::debug!(%id, name, "created scene object");
        Ok(id)
    }

    /// Add a geometry to an object, consuming it.
    ///
    /// The geometry is snapshotted as-is: attach every fixed-vertex flag and
    /// constitution/contact tag before this call.
    ///
    /// # Errors
    ///
    /// Returns [`StrandError::SceneFrozen`] after handoff,
    /// [`StrandError::InvalidArgument`] for an unknown object id, and
    /// [`StrandError::InvalidGeometry`] if the geometry fails structural
    /// validation.
    pub fn add_geometry(
        &mut self,
        object: ObjectId,
        geometry: impl Into<Geometry>,
    ) -> Result<GeometryId> {
        self.ensure_mutable()?;
        let geometry = geometry.into();
        geometry.validate()?;

        let slot = self
            .objects
            .get_mut(object.raw() as usize)
            .ok_or_else(|| {
                StrandError::invalid_argument("object", format!("{object} does not exist"))
            })?;

        let id = GeometryId::new(self.next_geometry_id);
        self.next_geometry_id += 1;
        tracing::debug!(
            %id,
            object = slot.name(),
            vertices = geometry.vertex_count(),
            "added geometry"
        );
        slot.push_geometry(id, geometry);
        Ok(id)
    }

    /// Look up an object by id.
    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.raw() as usize)
    }

    /// Look up an object by name.
    #[must_use]
    pub fn object_by_name(&self, name: &str) -> Option<&SceneObject> {
        self.names.get(name).and_then(|id| self.object(*id))
    }

    /// Iterate over all objects in creation order.
    pub fn objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter()
    }

    /// Number of objects.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Total number of geometries across all objects.
    #[must_use]
    pub fn geometry_count(&self) -> usize {
        self.objects.iter().map(SceneObject::geometry_count).sum()
    }

    /// Whether the scene was handed to a world.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Freeze the scene. Called by the driver at init; every later mutation
    /// fails with [`StrandError::SceneFrozen`].
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Check the scene is consistent enough to hand to an engine.
    ///
    /// # Errors
    ///
    /// Returns the config or tabular validation error, or
    /// [`StrandError::InvalidConfig`] for an empty scene.
    pub fn sanity_check(&self) -> Result<()> {
        self.config.validate()?;
        self.constitution.validate()?;
        self.contact.validate()?;

        if self.geometry_count() == 0 {
            return Err(StrandError::invalid_config(
                "scene has no geometry to simulate",
            ));
        }

        for object in &self.objects {
            for (id, geometry) in object.geometries() {
                geometry.validate()?;
                if let Some(contact) = geometry.contact() {
                    contact.validate().map_err(|_| {
                        StrandError::invalid_config(format!("{id} has an invalid contact override"))
                    })?;
                }
            }
        }

        Ok(())
    }

    fn ensure_mutable(&self) -> Result<()> {
        if self.frozen {
            return Err(StrandError::SceneFrozen);
        }
        Ok(())
    }
}
