//! Rigid body to mesh transform synchronization

use super::parts::{asset_orientation_correction, BodySlot, VehicleMeshes, VehiclePart};
use crate::foundation::math::Quat;
use crate::physics::{BodyPose, VehicleBodies};
use crate::scene::{NodeId, SceneGraph};

/// One body/mesh pairing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyMeshPair {
    /// Visual part
    pub part: VehiclePart,
    /// Physics body it reads from
    pub body: BodySlot,
    /// Rotation composed onto the body orientation, if any
    pub correction: Option<Quat>,
}

/// Copies body poses onto their paired mesh nodes
#[derive(Debug, Clone)]
pub struct BodyMeshSynchronizer {
    pairs: [BodyMeshPair; 5],
}

impl Default for BodyMeshSynchronizer {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyMeshSynchronizer {
    /// Pairing table for all five parts; only the chassis gets a correction
    pub fn new() -> Self {
        let pairs = VehiclePart::ALL.map(|part| BodyMeshPair {
            part,
            body: part.body_slot(),
            correction: (part == VehiclePart::Chassis).then(asset_orientation_correction),
        });
        Self { pairs }
    }

    /// The pairing table, chassis first
    pub fn pairs(&self) -> &[BodyMeshPair] {
        &self.pairs
    }

    /// Copy one body pose onto one mesh
    ///
    /// Missing mesh or body is the normal not-yet-loaded state: nothing is
    /// written and `false` is returned.
    pub fn sync(
        scene: &mut SceneGraph,
        mesh: Option<NodeId>,
        pose: Option<BodyPose>,
        correction: Option<&Quat>,
    ) -> bool {
        let (Some(mesh), Some(pose)) = (mesh, pose) else {
            return false;
        };

        let orientation = match correction {
            Some(correction) => pose.orientation * correction,
            None => pose.orientation,
        };

        // Both writes fail together on a stale handle.
        if scene.set_position(mesh, pose.position).is_err()
            || scene.set_rotation(mesh, orientation).is_err()
        {
            log::debug!("Mesh node {mesh:?} is no longer in the scene, skipping sync");
            return false;
        }
        true
    }

    /// Synchronize every pair, returning how many meshes were written
    pub fn sync_all<B: VehicleBodies + ?Sized>(
        &self,
        scene: &mut SceneGraph,
        meshes: &VehicleMeshes,
        bodies: &B,
    ) -> usize {
        let mut synced = 0;
        for pair in &self.pairs {
            let pose = match pair.body {
                BodySlot::Chassis => bodies.chassis_body(),
                BodySlot::Wheel(index) => bodies.wheel_body(index),
            };
            if Self::sync(scene, meshes.get(pair.part), pose, pair.correction.as_ref()) {
                synced += 1;
            } else {
                log::trace!("Skipped {:?} this frame", pair.part);
            }
        }
        synced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::scene::NodeKind;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_sync_copies_pose() {
        let mut scene = SceneGraph::new();
        let mesh = scene.create_node("wheel", NodeKind::Mesh);
        let pose = BodyPose::new(
            Vec3::new(1.0, 2.0, 3.0),
            Quat::from_axis_angle(&Vec3::z_axis(), 0.4),
        );

        assert!(BodyMeshSynchronizer::sync(&mut scene, Some(mesh), Some(pose), None));
        assert_eq!(scene.position(mesh), Some(pose.position));
        assert_eq!(scene.rotation(mesh), Some(pose.orientation));
    }

    #[test]
    fn test_sync_without_mesh_or_body_is_noop() {
        let mut scene = SceneGraph::new();
        let mesh = scene.create_node("chassis", NodeKind::Mesh);
        scene.set_position(mesh, Vec3::new(7.0, 7.0, 7.0)).unwrap();

        assert!(!BodyMeshSynchronizer::sync(&mut scene, None, Some(BodyPose::default()), None));
        assert!(!BodyMeshSynchronizer::sync(&mut scene, Some(mesh), None, None));
        assert_eq!(scene.position(mesh), Some(Vec3::new(7.0, 7.0, 7.0)));
    }

    #[test]
    fn test_sync_skips_removed_mesh() {
        let mut scene = SceneGraph::new();
        let mesh = scene.create_node("chassis", NodeKind::Mesh);
        scene.remove_node(mesh).unwrap();

        assert!(!BodyMeshSynchronizer::sync(
            &mut scene,
            Some(mesh),
            Some(BodyPose::default()),
            None
        ));
    }

    #[test]
    fn test_correction_does_not_accumulate() {
        let mut scene = SceneGraph::new();
        let mesh = scene.create_node("chassis", NodeKind::Mesh);
        let correction = asset_orientation_correction();
        let pose = BodyPose::new(Vec3::zeros(), Quat::from_axis_angle(&Vec3::y_axis(), 1.2));

        for _ in 0..5 {
            BodyMeshSynchronizer::sync(&mut scene, Some(mesh), Some(pose), Some(&correction));
        }

        assert_relative_eq!(
            scene.rotation(mesh).unwrap(),
            pose.orientation * correction,
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_only_chassis_pair_is_corrected() {
        let synchronizer = BodyMeshSynchronizer::new();
        let corrected: Vec<_> = synchronizer
            .pairs()
            .iter()
            .filter(|pair| pair.correction.is_some())
            .map(|pair| pair.part)
            .collect();
        assert_eq!(corrected, [VehiclePart::Chassis]);
    }
}
