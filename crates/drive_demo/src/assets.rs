//! Simulated vehicle asset loading
//!
//! Meshes appear in the scene a fixed number of frames after startup so the
//! coordinator runs through its not-yet-loaded path first.

use vehicle_rig::scene::{NodeId, NodeKind, SceneGraph};
use vehicle_rig::vehicle::VehiclePart;

/// Pending vehicle model
pub struct VehicleModelLoader {
    frames_left: u32,
    done: bool,
}

impl VehicleModelLoader {
    /// Loader that finishes after `delay_frames` polls
    pub fn new(delay_frames: u32) -> Self {
        Self {
            frames_left: delay_frames,
            done: false,
        }
    }

    /// Poll once per frame; returns the mesh nodes on the frame they load
    pub fn poll(&mut self, scene: &mut SceneGraph) -> Option<Vec<(VehiclePart, NodeId)>> {
        if self.done {
            return None;
        }
        if self.frames_left > 0 {
            self.frames_left -= 1;
            return None;
        }

        self.done = true;
        let meshes = VehiclePart::ALL
            .into_iter()
            .map(|part| (part, scene.create_node(format!("car/{part:?}"), NodeKind::Mesh)))
            .collect::<Vec<_>>();
        log::info!("Vehicle model loaded ({} meshes)", meshes.len());
        Some(meshes)
    }
}
