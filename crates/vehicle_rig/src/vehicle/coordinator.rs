//! Per-vehicle coordinator

use super::chase_camera::ChaseCameraRig;
use super::parts::{VehicleMeshes, VehiclePart};
use super::synchronizer::BodyMeshSynchronizer;
use super::VehicleError;
use crate::config::CameraParams;
use crate::physics::VehicleBodies;
use crate::scene::{NodeId, SceneError, SceneGraph};

/// Owns the mesh set, the pairing table and the chase camera of one vehicle
///
/// One coordinator per vehicle; the host keeps it alongside the scene graph
/// and passes both into [`update`](Self::update) every frame.
#[derive(Debug)]
pub struct VehicleCoordinator {
    meshes: VehicleMeshes,
    synchronizer: BodyMeshSynchronizer,
    rig: ChaseCameraRig,
    params: CameraParams,
}

impl VehicleCoordinator {
    /// Assemble a vehicle
    ///
    /// Meshes that have not loaded yet may be left out and bound later with
    /// [`bind_mesh`](Self::bind_mesh). Fails only on out-of-range `params`.
    pub fn new(
        scene: &mut SceneGraph,
        camera: NodeId,
        meshes: VehicleMeshes,
        params: CameraParams,
    ) -> Result<Self, VehicleError> {
        params.validate()?;
        let rig = ChaseCameraRig::new(scene, camera, &params)?;

        let missing: Vec<_> = VehiclePart::ALL
            .into_iter()
            .filter(|part| meshes.get(*part).is_none())
            .collect();
        if missing.is_empty() {
            log::info!("Vehicle assembled with all meshes");
        } else {
            log::info!("Vehicle assembled, waiting on meshes: {missing:?}");
        }

        Ok(Self {
            meshes,
            synchronizer: BodyMeshSynchronizer::new(),
            rig,
            params,
        })
    }

    /// Run one frame: sync every body/mesh pair, then move the chase camera
    ///
    /// The camera reads the chassis mesh after it was synchronized this frame.
    pub fn update<B: VehicleBodies + ?Sized>(&mut self, scene: &mut SceneGraph, bodies: &B) {
        let params = self.params;

        self.synchronizer.sync_all(scene, &self.meshes, bodies);
        self.rig
            .update(scene, self.meshes.get(VehiclePart::Chassis), &params);
    }

    /// Current camera parameter snapshot
    pub fn camera_params(&self) -> &CameraParams {
        &self.params
    }

    /// Replace the camera parameters
    ///
    /// The pivot is repositioned immediately; smoothing factors apply from the
    /// next frame. Out-of-range values are rejected and the old snapshot kept.
    pub fn set_camera_params(
        &mut self,
        scene: &mut SceneGraph,
        params: CameraParams,
    ) -> Result<(), VehicleError> {
        if let Err(err) = params.validate() {
            log::warn!("Rejected camera params: {err}");
            return Err(err.into());
        }
        self.params = params;
        self.rig.apply_offset(scene, &self.params)?;
        Ok(())
    }

    /// Replace a single camera parameter by name
    pub fn set_camera_param(
        &mut self,
        scene: &mut SceneGraph,
        name: &str,
        value: f32,
    ) -> Result<(), VehicleError> {
        let next = self.params.with_param(name, value).map_err(|err| {
            log::warn!("Rejected camera param: {err}");
            err
        })?;
        self.set_camera_params(scene, next)
    }

    /// Attach a mesh that finished loading after assembly
    pub fn bind_mesh(&mut self, part: VehiclePart, node: NodeId) {
        log::info!("Bound {part:?} mesh");
        self.meshes.bind(part, node);
    }

    /// Mesh set
    pub fn meshes(&self) -> &VehicleMeshes {
        &self.meshes
    }

    /// Chase camera rig
    pub fn rig(&self) -> &ChaseCameraRig {
        &self.rig
    }

    /// Tear down the rig nodes; meshes and the camera belong to the host
    pub fn dispose(self, scene: &mut SceneGraph) -> Result<(), SceneError> {
        log::info!("Disposing vehicle coordinator");
        self.rig.detach(scene)
    }
}
