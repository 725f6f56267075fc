//! Scripted stand-in for the physics world
//!
//! Drives the chassis around a circular track and places the four wheel
//! bodies around it, registered rear-left, rear-right, front-left,
//! front-right like the raycast vehicle constraint does.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f32::consts::PI;
use vehicle_rig::foundation::math::{Quat, Vec3};
use vehicle_rig::physics::{BodyPose, VehicleBodySet, WHEEL_COUNT};

/// Wheel anchor points in chassis space, in registration order
const WHEEL_ANCHORS: [[f32; 3]; WHEEL_COUNT] = [
    [-0.85, -0.35, 1.3],  // rear-left
    [0.85, -0.35, 1.3],   // rear-right
    [-0.85, -0.35, -1.4], // front-left
    [0.85, -0.35, -1.4],  // front-right
];

const WHEEL_RADIUS: f32 = 0.4;
const RIDE_HEIGHT: f32 = 0.75;
const SUSPENSION_JITTER: f32 = 0.02;

/// Circular track physics
pub struct TrackPhysics {
    radius: f32,
    speed: f32,
    distance: f32,
    rng: StdRng,
    bodies: VehicleBodySet,
}

impl TrackPhysics {
    /// Track of `radius` driven at `speed` units per second
    pub fn new(radius: f32, speed: f32, seed: u64) -> Self {
        let mut physics = Self {
            radius,
            speed,
            distance: 0.0,
            rng: StdRng::seed_from_u64(seed),
            bodies: VehicleBodySet::default(),
        };
        physics.place_bodies();
        physics
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        self.distance += self.speed * dt;
        self.place_bodies();
    }

    /// Body poses after the last step
    pub fn bodies(&self) -> &VehicleBodySet {
        &self.bodies
    }

    fn place_bodies(&mut self) {
        let angle = self.distance / self.radius;
        let bump = self.rng.gen_range(-SUSPENSION_JITTER..=SUSPENSION_JITTER);

        let position = Vec3::new(
            self.radius * angle.cos(),
            RIDE_HEIGHT + bump,
            self.radius * angle.sin(),
        );
        // Chassis forward is -Z; turn it onto the counter-clockwise tangent
        let heading = Quat::from_axis_angle(&Vec3::y_axis(), PI - angle);
        let chassis = BodyPose::new(position, heading);

        let roll = Quat::from_axis_angle(&Vec3::x_axis(), -self.distance / WHEEL_RADIUS);
        let wheels = WHEEL_ANCHORS.map(|[x, y, z]| {
            BodyPose::new(position + heading * Vec3::new(x, y, z), heading * roll)
        });

        self.bodies = VehicleBodySet::new(chassis, wheels);
    }
}
