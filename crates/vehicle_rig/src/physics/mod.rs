//! Physics-facing interfaces
//!
//! The rigid-body simulation lives outside this crate. The vehicle core only
//! reads poses: one chassis body plus four wheel bodies, indexed in the order
//! they were registered with the vehicle constraint.

use crate::foundation::math::{Quat, Vec3};

/// Number of wheel bodies on a vehicle
pub const WHEEL_COUNT: usize = 4;

/// World pose of a rigid body at the end of the last physics step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPose {
    /// World position
    pub position: Vec3,
    /// World orientation
    pub orientation: Quat,
}

impl Default for BodyPose {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            orientation: Quat::identity(),
        }
    }
}

impl BodyPose {
    /// Pose from position and orientation
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }
}

/// Read-only view of a physics vehicle's bodies
///
/// `None` means the body does not exist yet; callers skip it for the frame.
pub trait VehicleBodies {
    /// Chassis body pose
    fn chassis_body(&self) -> Option<BodyPose>;

    /// Wheel body pose by registration index (`0..WHEEL_COUNT`)
    fn wheel_body(&self, index: usize) -> Option<BodyPose>;
}

/// Plain body set written by the physics step and read by the vehicle core
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleBodySet {
    /// Chassis body
    pub chassis: Option<BodyPose>,
    /// Wheel bodies in registration order
    pub wheels: [Option<BodyPose>; WHEEL_COUNT],
}

impl VehicleBodySet {
    /// Body set with every body present at the given poses
    pub fn new(chassis: BodyPose, wheels: [BodyPose; WHEEL_COUNT]) -> Self {
        Self {
            chassis: Some(chassis),
            wheels: wheels.map(Some),
        }
    }
}

impl VehicleBodies for VehicleBodySet {
    fn chassis_body(&self) -> Option<BodyPose> {
        self.chassis
    }

    fn wheel_body(&self, index: usize) -> Option<BodyPose> {
        self.wheels.get(index).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_lookup_out_of_range_is_none() {
        let bodies = VehicleBodySet::new(BodyPose::default(), [BodyPose::default(); WHEEL_COUNT]);
        assert!(bodies.wheel_body(3).is_some());
        assert!(bodies.wheel_body(WHEEL_COUNT).is_none());
    }

    #[test]
    fn test_default_set_has_no_bodies() {
        let bodies = VehicleBodySet::default();
        assert!(bodies.chassis_body().is_none());
        assert!((0..WHEEL_COUNT).all(|i| bodies.wheel_body(i).is_none()));
    }
}
