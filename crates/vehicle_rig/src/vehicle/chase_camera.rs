//! Chase camera rig
//!
//! The camera trails the chassis through three smoothing stages:
//!
//! ```text
//! chassis ──chaseLerp──► root ──(pivot offset)──► view
//! view ──positionLerp──► camera
//! chassis + lookAtOffsetY ──lookAtLerp──► look-at target ──► camera orientation
//! ```
//!
//! The root copies the chassis orientation without smoothing, so the pivot
//! offset is expressed in the chassis mesh frame. The camera is smoothed in
//! world space, so the host may parent it anywhere in the scene.

use crate::config::CameraParams;
use crate::foundation::math::{utils::lerp_vec3, Transform, Vec3};
use crate::scene::{NodeId, NodeKind, SceneError, SceneGraph};

/// Lowest height the desired camera position may take
pub const MIN_VIEW_HEIGHT: f32 = 1.0;

/// Rig lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigState {
    /// Chassis mesh has never been available
    Uninitialized,
    /// Following the chassis; never left once entered
    Tracking,
}

/// Camera root, pivot and smoothing state for one vehicle
#[derive(Debug, Clone)]
pub struct ChaseCameraRig {
    root: NodeId,
    pivot: NodeId,
    camera: NodeId,
    view: Vec3,
    look_at_target: Vec3,
    state: RigState,
}

impl ChaseCameraRig {
    /// Create the root and pivot nodes and start in [`RigState::Uninitialized`]
    ///
    /// `camera` is owned by the host; the rig only moves and orients it.
    pub fn new(
        scene: &mut SceneGraph,
        camera: NodeId,
        params: &CameraParams,
    ) -> Result<Self, SceneError> {
        let root = scene.create_node("chase_camera", NodeKind::Group);
        let pivot = scene.create_node("chase_camera_pivot", NodeKind::Group);
        scene.attach(root, pivot)?;
        scene.set_position(pivot, params.pivot_offset())?;

        Ok(Self {
            root,
            pivot,
            camera,
            view: Vec3::zeros(),
            look_at_target: Vec3::zeros(),
            state: RigState::Uninitialized,
        })
    }

    /// Current state
    pub fn state(&self) -> RigState {
        self.state
    }

    /// Desired camera position from the last tracked frame
    pub fn view(&self) -> Vec3 {
        self.view
    }

    /// Smoothed point the camera faces
    pub fn look_at_target(&self) -> Vec3 {
        self.look_at_target
    }

    /// Camera root node
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Pivot node (child of the root)
    pub fn pivot(&self) -> NodeId {
        self.pivot
    }

    /// Host camera node
    pub fn camera(&self) -> NodeId {
        self.camera
    }

    /// Write the pivot offset from `params` right away
    pub fn apply_offset(
        &self,
        scene: &mut SceneGraph,
        params: &CameraParams,
    ) -> Result<(), SceneError> {
        scene.set_position(self.pivot, params.pivot_offset())
    }

    /// Advance the rig one frame
    ///
    /// Does nothing while the chassis mesh (or any rig node) is missing; the
    /// camera keeps its last transform until tracking can resume.
    pub fn update(
        &mut self,
        scene: &mut SceneGraph,
        chassis: Option<NodeId>,
        params: &CameraParams,
    ) {
        let Some(chassis) = chassis.and_then(|id| scene.world_transform(id)) else {
            log::debug!("Chassis mesh not available, holding camera");
            return;
        };
        if ![self.root, self.pivot, self.camera].into_iter().all(|id| scene.contains(id)) {
            log::debug!("Chase camera nodes missing from scene, holding camera");
            return;
        }

        if self.state == RigState::Uninitialized {
            log::info!("Chase camera tracking chassis at {:?}", chassis.position);
            self.state = RigState::Tracking;
        }

        if let Err(err) = self.track(scene, &chassis, params) {
            log::debug!("Chase camera update interrupted: {err}");
        }
    }

    fn track(
        &mut self,
        scene: &mut SceneGraph,
        chassis: &Transform,
        params: &CameraParams,
    ) -> Result<(), SceneError> {
        let root_position = scene
            .position(self.root)
            .ok_or(SceneError::UnknownNode(self.root))?;
        scene.set_position(
            self.root,
            lerp_vec3(&root_position, &chassis.position, params.chase_lerp),
        )?;
        scene.set_rotation(self.root, chassis.rotation)?;

        self.apply_offset(scene, params)?;

        let mut view = scene
            .world_position(self.pivot)
            .ok_or(SceneError::UnknownNode(self.pivot))?;
        view.y = view.y.max(MIN_VIEW_HEIGHT);
        self.view = view;

        let camera_position = scene
            .world_position(self.camera)
            .ok_or(SceneError::UnknownNode(self.camera))?;
        scene.set_world_position(
            self.camera,
            lerp_vec3(&camera_position, &self.view, params.position_lerp),
        )?;

        let mut look_at_point = chassis.position;
        look_at_point.y += params.look_at_offset_y;
        self.look_at_target =
            lerp_vec3(&self.look_at_target, &look_at_point, params.look_at_lerp);
        scene.look_at(self.camera, self.look_at_target)?;

        log::trace!(
            "Chase camera view {:?}, target {:?}",
            self.view,
            self.look_at_target
        );
        Ok(())
    }

    /// Remove the root and pivot from the scene; the host camera stays
    pub fn detach(self, scene: &mut SceneGraph) -> Result<(), SceneError> {
        scene.remove_node(self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Quat;
    use crate::vehicle::asset_orientation_correction;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    fn setup() -> (SceneGraph, NodeId, NodeId, ChaseCameraRig) {
        let mut scene = SceneGraph::new();
        let camera = scene.create_node("camera", NodeKind::Camera);
        let chassis = scene.create_node("chassis", NodeKind::Mesh);
        let rig = ChaseCameraRig::new(&mut scene, camera, &CameraParams::default()).unwrap();
        (scene, camera, chassis, rig)
    }

    #[test]
    fn test_single_frame_matches_hand_computed_values() {
        let (mut scene, camera, chassis, mut rig) = setup();
        scene.set_position(chassis, Vec3::new(10.0, 0.0, 0.0)).unwrap();

        rig.update(&mut scene, Some(chassis), &CameraParams::default());

        // Root moved 5% of the way, pivot sits at (0, -14, 4) below it
        assert_relative_eq!(
            scene.position(rig.root()).unwrap(),
            Vec3::new(0.5, 0.0, 0.0),
            epsilon = EPSILON
        );
        // Pivot y = -14 is clamped up to 1
        assert_relative_eq!(rig.view(), Vec3::new(0.5, 1.0, 4.0), epsilon = EPSILON);
        assert_relative_eq!(
            scene.position(camera).unwrap(),
            Vec3::new(0.04, 0.08, 0.32),
            epsilon = EPSILON
        );
        assert_relative_eq!(rig.look_at_target(), Vec3::new(1.0, 0.1, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_camera_faces_look_at_target() {
        let (mut scene, camera, chassis, mut rig) = setup();
        scene.set_position(chassis, Vec3::new(-3.0, 0.0, -6.0)).unwrap();

        for _ in 0..20 {
            rig.update(&mut scene, Some(chassis), &CameraParams::default());
        }

        let eye = scene.position(camera).unwrap();
        let forward = scene.rotation(camera).unwrap() * -Vec3::z();
        assert_relative_eq!(
            forward,
            (rig.look_at_target() - eye).normalize(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_parented_camera_converges_in_world_space() {
        let (mut scene, camera, chassis, mut rig) = setup();
        let mount = scene.create_node("camera_mount", NodeKind::Group);
        scene.set_position(mount, Vec3::new(100.0, 0.0, 0.0)).unwrap();
        scene.attach(mount, camera).unwrap();
        scene.set_rotation(chassis, asset_orientation_correction()).unwrap();

        for _ in 0..300 {
            rig.update(&mut scene, Some(chassis), &CameraParams::default());
        }

        assert_relative_eq!(rig.view(), Vec3::new(0.0, 4.0, 14.0), epsilon = 1e-3);
        assert_relative_eq!(
            scene.world_position(camera).unwrap(),
            rig.view(),
            epsilon = 1e-3
        );
        // Local position absorbs the mount offset
        assert_relative_eq!(
            scene.position(camera).unwrap(),
            Vec3::new(-100.0, 4.0, 14.0),
            epsilon = 1e-3
        );
    }

    #[test]
    fn test_root_copies_chassis_rotation_without_smoothing() {
        let (mut scene, _camera, chassis, mut rig) = setup();
        let heading = Quat::from_axis_angle(&Vec3::y_axis(), 2.0);
        scene.set_rotation(chassis, heading).unwrap();

        rig.update(&mut scene, Some(chassis), &CameraParams::default());
        assert_eq!(scene.rotation(rig.root()), Some(heading));
    }

    #[test]
    fn test_missing_chassis_holds_everything() {
        let (mut scene, camera, _chassis, mut rig) = setup();
        scene.set_position(camera, Vec3::new(1.0, 2.0, 3.0)).unwrap();

        rig.update(&mut scene, None, &CameraParams::default());

        assert_eq!(rig.state(), RigState::Uninitialized);
        assert_eq!(scene.position(camera), Some(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(scene.position(rig.root()), Some(Vec3::zeros()));
        assert_eq!(rig.view(), Vec3::zeros());
        assert_eq!(rig.look_at_target(), Vec3::zeros());
    }

    #[test]
    fn test_tracking_survives_chassis_disappearing() {
        let (mut scene, _camera, chassis, mut rig) = setup();
        rig.update(&mut scene, Some(chassis), &CameraParams::default());
        assert_eq!(rig.state(), RigState::Tracking);

        rig.update(&mut scene, None, &CameraParams::default());
        assert_eq!(rig.state(), RigState::Tracking);
    }

    #[test]
    fn test_detach_removes_rig_nodes_only() {
        let (mut scene, camera, chassis, rig) = setup();
        let (root, pivot) = (rig.root(), rig.pivot());

        rig.detach(&mut scene).unwrap();

        assert!(!scene.contains(root));
        assert!(!scene.contains(pivot));
        assert!(scene.contains(camera));
        assert!(scene.contains(chassis));
    }
}
