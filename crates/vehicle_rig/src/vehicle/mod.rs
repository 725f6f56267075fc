//! Vehicle coordination
//!
//! Ties the physics bodies, the visual meshes and the chase camera together.
//! [`VehicleCoordinator::update`] is the single per-frame entry point; the
//! host calls it once per rendered frame after stepping physics.

mod chase_camera;
mod coordinator;
mod parts;
mod synchronizer;


pub use chase_camera::{ChaseCameraRig, RigState, MIN_VIEW_HEIGHT};
pub use coordinator::VehicleCoordinator;
pub use parts::{
    asset_orientation_correction, BodySlot, VehicleMeshes, VehiclePart, ASSET_CORRECTION_X,
    WHEEL_SLOT_MAPPING,
};
pub use synchronizer::{BodyMeshPair, BodyMeshSynchronizer};

use crate::config::ConfigError;
use crate::scene::SceneError;

/// Errors raised while assembling or reconfiguring a vehicle
///
/// Per-frame updates never fail; these only come from construction and
/// explicit configuration changes.
#[derive(thiserror::Error, Debug)]
pub enum VehicleError {
    /// Scene graph rejected an operation
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// Camera configuration rejected
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
