//! # Vehicle Rig
//!
//! Per-frame coordinator for a drivable vehicle in a real-time 3D scene.
//!
//! ## Features
//!
//! - **Body/Mesh Sync**: Copies rigid-body poses onto their visual mesh nodes
//! - **Chase Camera**: Multi-stage exponential smoothing that trails the chassis
//! - **Scene Graph**: Arena-backed node tree with parent/child transforms
//! - **Tunable Config**: Validated camera parameters loadable from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vehicle_rig::prelude::*;
//!
//! fn main() -> Result<(), VehicleError> {
//!     let mut scene = SceneGraph::new();
//!     let camera = scene.create_node("camera", NodeKind::Camera);
//!     let chassis = scene.create_node("chassis", NodeKind::Mesh);
//!
//!     let meshes = VehicleMeshes::default().with(VehiclePart::Chassis, chassis);
//!     let mut vehicle =
//!         VehicleCoordinator::new(&mut scene, camera, meshes, CameraParams::default())?;
//!
//!     let bodies = VehicleBodySet::default();
//!     // Once per rendered frame, after the physics step:
//!     vehicle.update(&mut scene, &bodies);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod physics;
pub mod scene;
pub mod vehicle;

/// Common imports for rig users
pub mod prelude {
    pub use crate::{
        config::{CameraParams, Config, ConfigError, RigConfig, TunableParam},
        foundation::math::{Quat, Transform, Vec3},
        physics::{BodyPose, VehicleBodies, VehicleBodySet},
        scene::{NodeId, NodeKind, SceneError, SceneGraph},
        vehicle::{
            BodyMeshSynchronizer, ChaseCameraRig, RigState, VehicleCoordinator, VehicleError,
            VehicleMeshes, VehiclePart,
        },
    };
}
