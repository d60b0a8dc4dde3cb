//! The world: one simulation instance and its stepping state machine.

use hashbrown::HashMap;
use nalgebra::Point3;
use strand_geometry::{Geometry, VertexFlags};
use strand_scene::Scene;
use strand_types::{GeometryId, ObjectId, Result, StrandError};

use crate::backend::{
    AttributeChannel, GeometryUpload, IS_FIXED, SceneUpload, SimulationBackend,
};
use crate::engine::Engine;

/// Connectivity and render metadata retained from the scene at init time.
///
/// Topology never changes after init; only positions flow back through
/// `retrieve`, so viewers read connectivity from here.
#[derive(Debug, Clone)]
pub struct Topology {
    /// The object the geometry belongs to.
    pub object_id: ObjectId,
    /// Edge indices (line geometry).
    pub edges: Vec<[u32; 2]>,
    /// Face indices (triangle geometry).
    pub faces: Vec<[u32; 3]>,
    /// Per-vertex fixed markers.
    pub fixed: Vec<bool>,
    /// Render radius (meters).
    pub radius: f64,
    /// Static geometry is collision-only.
    pub is_static: bool,
}

/// One simulation instance bound to an engine.
///
/// The lifecycle is `Uninitialized -> Initialized -> Stepping* `; `init`
/// hands a finalized scene to the backend, `advance` requests one step, and
/// `retrieve` copies current positions into world-owned buffers. A fatal
/// engine error invalidates the world: further stepping fails with
/// [`StrandError::WorldInvalid`]. A diverged step leaves the world valid so
/// the caller may pause and resume.
pub struct World {
    engine: Engine,
    initialized: bool,
    valid: bool,
    frame: u64,
    order: Vec<GeometryId>,
    topologies: HashMap<GeometryId, Topology>,
    positions: HashMap<GeometryId, Vec<Point3<f64>>>,
}

impl World {
    /// Create an uninitialized world on the given engine.
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            initialized: false,
            valid: true,
            frame: 0,
            order: Vec::new(),
            topologies: HashMap::new(),
            positions: HashMap::new(),
        }
    }

    /// Hand a finalized scene to the engine and freeze it.
    ///
    /// The scene stays with the caller as a read/query handle; the engine
    /// owns all solver state derived from it.
    ///
    /// # Errors
    ///
    /// Returns [`StrandError::AlreadyInitialized`] on a second call, the
    /// scene's sanity-check error, or the backend's init error. A failed
    /// init leaves both the world uninitialized and the scene unfrozen.
    pub fn init(&mut self, scene: &mut Scene) -> Result<()> {
        if self.initialized {
            return Err(StrandError::AlreadyInitialized);
        }
        scene.sanity_check()?;

        let upload = build_upload(scene);
        self.engine.backend_mut().init(&upload)?;

        scene.freeze();
        self.order = upload.geometries.iter().map(|g| g.geometry_id).collect();
        for object in scene.objects() {
            for (id, geometry) in object.geometries() {
                self.topologies
                    .insert(id, topology_of(object.id(), geometry));
                self.positions.insert(id, positions_of(geometry));
            }
        }
        self.initialized = true;
        tracing::info!(
            backend = self.engine.name(),
            objects = scene.object_count(),
            geometries = self.order.len(),
            "world initialized"
        );
        Ok(())
    }

    /// Request one simulation step from the engine.
    ///
    /// Blocks for however long the solver takes; there is no timeout and no
    /// cancellation.
    ///
    /// # Errors
    ///
    /// Returns [`StrandError::NotInitialized`] before `init`,
    /// [`StrandError::WorldInvalid`] after a fatal engine error,
    /// [`StrandError::Diverged`] for a recoverable failed step (the world
    /// stays valid; the step is never silently redone), or the fatal engine
    /// error itself (which invalidates the world).
    pub fn advance(&mut self) -> Result<()> {
        self.ensure_steppable("advance")?;

        match self.engine.backend_mut().advance() {
            Ok(()) => {
                self.frame += 1;
                Ok(())
            }
            Err(err) => {
                if err.is_diverged() {
                    tracing::warn!(frame = self.frame, %err, "step diverged");
                } else {
                    self.valid = false;
                    tracing::error!(frame = self.frame, %err, "engine failed, world invalid");
                }
                Err(err)
            }
        }
    }

    /// Copy current positions out of engine storage into world buffers.
    ///
    /// Valid immediately after `init` (yielding the initial pose) and after
    /// any successful `advance`. Never mutates solver state.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`World::advance`], minus divergence.
    pub fn retrieve(&mut self) -> Result<()> {
        self.ensure_steppable("retrieve")?;

        let frames = match self.engine.backend_mut().retrieve() {
            Ok(frames) => frames,
            Err(err) => {
                if err.is_fatal() {
                    self.valid = false;
                }
                return Err(err);
            }
        };
        for frame in frames {
            let buffer = frame
                .positions
                .iter()
                .map(|p| Point3::new(f64::from(p[0]), f64::from(p[1]), f64::from(p[2])))
                .collect();
            self.positions.insert(frame.geometry_id, buffer);
        }
        Ok(())
    }

    /// Last retrieved positions of a geometry (the initial pose before the
    /// first `retrieve`).
    #[must_use]
    pub fn positions(&self, id: GeometryId) -> Option<&[Point3<f64>]> {
        self.positions.get(&id).map(Vec::as_slice)
    }

    /// Retained topology of a geometry.
    #[must_use]
    pub fn topology(&self, id: GeometryId) -> Option<&Topology> {
        self.topologies.get(&id)
    }

    /// All geometry ids in upload order.
    pub fn geometry_ids(&self) -> impl Iterator<Item = GeometryId> + '_ {
        self.order.iter().copied()
    }

    /// Number of completed steps.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Whether `init` has completed.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether the world can still step.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The engine this world runs on.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    fn ensure_steppable(&self, op: &'static str) -> Result<()> {
        if !self.initialized {
            return Err(StrandError::not_initialized(op));
        }
        if !self.valid {
            return Err(StrandError::WorldInvalid { frame: self.frame });
        }
        Ok(())
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("engine", &self.engine)
            .field("initialized", &self.initialized)
            .field("valid", &self.valid)
            .field("frame", &self.frame)
            .field("geometries", &self.order.len())
            .finish()
    }
}

fn build_upload(scene: &Scene) -> SceneUpload {
    let config = scene.config();
    let geometries = scene
        .objects()
        .flat_map(|object| {
            object
                .geometries()
                .map(|(id, geometry)| upload_of(object.id(), id, geometry))
        })
        .collect();

    SceneUpload {
        dt: config.dt,
        gravity: [config.gravity.x, config.gravity.y, config.gravity.z],
        contact: scene.contact_tabular().default_element(),
        geometries,
    }
}

fn upload_of(object_id: ObjectId, geometry_id: GeometryId, geometry: &Geometry) -> GeometryUpload {
    let positions: Vec<[f32; 3]> = match geometry {
        Geometry::Line(mesh) => wire_positions(mesh.positions()),
        Geometry::Tri(mesh) => wire_positions(mesh.positions()),
    };

    let (edges, faces, channels, stretch, bending, radius, is_static) = match geometry {
        Geometry::Line(mesh) => {
            let edges = mesh
                .edges()
                .iter()
                .map(|&[a, b]| [a as i32, b as i32])
                .collect();
            let fixed = AttributeChannel {
                name: IS_FIXED.to_owned(),
                values: mesh
                    .flags()
                    .iter()
                    .map(|f| i32::from(f.contains(VertexFlags::FIXED)))
                    .collect(),
            };
            (
                edges,
                Vec::new(),
                vec![fixed],
                mesh.stretch(),
                mesh.bending(),
                mesh.radius(),
                false,
            )
        }
        Geometry::Tri(mesh) => {
            let faces = mesh
                .faces()
                .iter()
                .map(|&[a, b, c]| [a as i32, b as i32, c as i32])
                .collect();
            (Vec::new(), faces, Vec::new(), None, None, 0.0, true)
        }
    };

    GeometryUpload {
        geometry_id,
        object_id,
        positions,
        edges,
        faces,
        channels,
        stretch,
        bending,
        contact: geometry.contact(),
        is_surface: geometry.is_surface(),
        is_static,
        radius,
    }
}

fn wire_positions(positions: &[Point3<f64>]) -> Vec<[f32; 3]> {
    positions
        .iter()
        .map(|p| [p.x as f32, p.y as f32, p.z as f32])
        .collect()
}

fn positions_of(geometry: &Geometry) -> Vec<Point3<f64>> {
    match geometry {
        Geometry::Line(mesh) => mesh.positions().to_vec(),
        Geometry::Tri(mesh) => mesh.positions().to_vec(),
    }
}

fn topology_of(object_id: ObjectId, geometry: &Geometry) -> Topology {
    match geometry {
        Geometry::Line(mesh) => Topology {
            object_id,
            edges: mesh.edges().to_vec(),
            faces: Vec::new(),
            fixed: mesh
                .flags()
                .iter()
                .map(|f| f.contains(VertexFlags::FIXED))
                .collect(),
            radius: mesh.radius(),
            is_static: false,
        },
        Geometry::Tri(mesh) => Topology {
            object_id,
            edges: Vec::new(),
            faces: mesh.faces().to_vec(),
            fixed: vec![true; mesh.vertex_count()],
            radius: 0.0,
            is_static: true,
        },
    }
}
