//! Vehicle parts and the fixed body/mesh pairing
//!
//! Two asset quirks are pinned here so they can be swapped in one place:
//! the chassis mesh orientation correction and the wheel slot mapping.

use crate::foundation::math::{constants::HALF_PI, Quat, Vec3};
use crate::physics::WHEEL_COUNT;
use crate::scene::NodeId;

/// Visual part of the vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehiclePart {
    /// Main body
    Chassis,
    /// First front wheel (front-left)
    FrontWheel1,
    /// Second front wheel (front-right)
    FrontWheel2,
    /// First rear wheel (rear-left)
    RearWheel1,
    /// Second rear wheel (rear-right)
    RearWheel2,
}

impl VehiclePart {
    /// Every part, chassis first
    pub const ALL: [Self; 5] = [
        Self::Chassis,
        Self::FrontWheel1,
        Self::FrontWheel2,
        Self::RearWheel1,
        Self::RearWheel2,
    ];

    const fn index(self) -> usize {
        self as usize
    }

    /// Physics body that drives this part
    pub fn body_slot(self) -> BodySlot {
        WHEEL_SLOT_MAPPING
            .iter()
            .find(|(part, _)| *part == self)
            .map_or(BodySlot::Chassis, |&(_, wheel)| BodySlot::Wheel(wheel))
    }
}

/// Which physics body a mesh reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodySlot {
    /// The chassis body
    Chassis,
    /// Wheel body by registration index
    Wheel(usize),
}

/// Visual wheel slot to physics wheel index
///
/// Front wheels read bodies 2 and 3, rear wheels 0 and 1, matching the order
/// the wheels were registered with the vehicle constraint.
pub const WHEEL_SLOT_MAPPING: [(VehiclePart, usize); WHEEL_COUNT] = [
    (VehiclePart::FrontWheel1, 2),
    (VehiclePart::FrontWheel2, 3),
    (VehiclePart::RearWheel1, 0),
    (VehiclePart::RearWheel2, 1),
];

/// Chassis mesh correction angle about its local X axis (radians)
pub const ASSET_CORRECTION_X: f32 = -HALF_PI;

/// Rotation composed onto the chassis body orientation every frame
///
/// The chassis asset is authored rotated relative to the collider frame.
pub fn asset_orientation_correction() -> Quat {
    Quat::from_axis_angle(&Vec3::x_axis(), ASSET_CORRECTION_X)
}

/// Mesh node per vehicle part; `None` until the asset has loaded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VehicleMeshes {
    nodes: [Option<NodeId>; 5],
}

impl VehicleMeshes {
    /// Builder pattern: Set the mesh for a part
    #[must_use]
    pub fn with(mut self, part: VehiclePart, node: NodeId) -> Self {
        self.bind(part, node);
        self
    }

    /// Set or replace the mesh for a part
    pub fn bind(&mut self, part: VehiclePart, node: NodeId) {
        self.nodes[part.index()] = Some(node);
    }

    /// Mesh for a part, if loaded
    pub fn get(&self, part: VehiclePart) -> Option<NodeId> {
        self.nodes[part.index()]
    }
}
