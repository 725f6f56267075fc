//! Math utilities and types
//!
//! Provides the vector, rotation and transform types shared by the scene graph,
//! the physics-facing interfaces and the chase camera.

pub use nalgebra::{Matrix4, Quaternion, Unit, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Convert to a transformation matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: Point3) -> Point3 {
        self.to_matrix().transform_point(&point)
    }

    /// Combine this transform (parent) with another (child, expressed in parent space)
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            position: self.position + self.rotation * self.scale.component_mul(&other.position),
            rotation: self.rotation * other.rotation,
            scale: self.scale.component_mul(&other.scale),
        }
    }

    /// Inverse transform, mapping points from this transform's space back out
    ///
    /// Exact for uniform scale. A rotated non-uniform scale has no exact
    /// position/rotation/scale inverse.
    pub fn inverse(&self) -> Self {
        let inv_scale = Vec3::new(1.0 / self.scale.x, 1.0 / self.scale.y, 1.0 / self.scale.z);
        let inv_rotation = self.rotation.inverse();
        let inv_position = inv_scale.component_mul(&(inv_rotation * -self.position));

        Self {
            position: inv_position,
            rotation: inv_rotation,
            scale: inv_scale,
        }
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;
}

/// Math utility functions
pub mod utils {
    use super::{Quat, Vec3};

    /// Linear interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// One exponential smoothing step from `current` toward `target`
    ///
    /// Moves each component the fraction `t` of its remaining distance, so the
    /// gap shrinks by exactly `1 - t` per call.
    pub fn lerp_vec3(current: &Vec3, target: &Vec3, t: f32) -> Vec3 {
        Vec3::new(
            lerp(current.x, target.x, t),
            lerp(current.y, target.y, t),
            lerp(current.z, target.z, t),
        )
    }

    /// Rotation whose local +Z axis points along `direction`
    ///
    /// `up` is a hint; when it is parallel to `direction` the next world axis
    /// that is not parallel is used instead. Returns `None` for a zero-length
    /// direction, in which case callers keep their current orientation.
    pub fn look_rotation(direction: &Vec3, up: &Vec3) -> Option<Quat> {
        let length = direction.norm();
        if length <= f32::EPSILON {
            return None;
        }
        let forward = direction / length;

        let up = [*up, Vec3::y(), Vec3::z(), Vec3::x()]
            .into_iter()
            .find(|axis| forward.cross(axis).norm_squared() > 1e-8)?;

        Some(Quat::face_towards(&forward, &up))
    }
}

#[cfg(test)]
mod tests {
    use super::utils::{lerp_vec3, look_rotation};
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_smoothing_step_shrinks_gap_by_one_minus_t() {
        let current = Vec3::new(-3.0, 2.5, 10.0);
        let target = Vec3::new(4.0, -1.0, 2.0);
        let before = (target - current).norm();

        for t in [0.01_f32, 0.05, 0.08, 0.3, 0.5, 1.0] {
            let next = lerp_vec3(&current, &target, t);
            let after = (target - next).norm();
            assert!(after < before);
            assert_relative_eq!(after, before * (1.0 - t), epsilon = EPSILON);
        }
    }

    #[test]
    fn test_smoothing_with_unit_factor_snaps() {
        let target = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(lerp_vec3(&Vec3::zeros(), &target, 1.0), target);
    }

    #[test]
    fn test_combine_applies_parent_rotation_to_child_offset() {
        let parent = Transform::from_position_rotation(
            Vec3::new(10.0, 0.0, 0.0),
            Quat::from_axis_angle(&Vec3::z_axis(), constants::HALF_PI),
        );
        let child = Transform::from_position(Vec3::new(1.0, 0.0, 0.0));

        let world = parent.combine(&child);
        assert_relative_eq!(world.position, Vec3::new(10.0, 1.0, 0.0), epsilon = EPSILON);

        let via_matrix = parent.transform_point(Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(via_matrix.coords, world.position, epsilon = EPSILON);
    }

    #[test]
    fn test_inverse_undoes_transform() {
        let transform = Transform {
            position: Vec3::new(3.0, -2.0, 7.5),
            rotation: Quat::from_axis_angle(&Vec3::y_axis(), 0.8),
            scale: Vec3::new(2.0, 2.0, 2.0),
        };
        let point = Point3::new(1.0, 4.0, -6.0);

        let there = transform.transform_point(point);
        let back = transform.inverse().transform_point(there);
        assert_relative_eq!(back, point, epsilon = 1e-4);

        let identity = transform.combine(&transform.inverse());
        assert_relative_eq!(identity.position, Vec3::zeros(), epsilon = 1e-4);
        assert_relative_eq!(identity.rotation, Quat::identity(), epsilon = EPSILON);
        assert_relative_eq!(identity.scale, Vec3::new(1.0, 1.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn test_look_rotation_points_positive_z_along_direction() {
        let direction = Vec3::new(1.0, 0.0, 1.0);
        let rotation = look_rotation(&direction, &Vec3::y()).unwrap();
        assert_relative_eq!(rotation * Vec3::z(), direction.normalize(), epsilon = EPSILON);
    }

    #[test]
    fn test_look_rotation_handles_direction_parallel_to_up() {
        let rotation = look_rotation(&Vec3::new(0.0, -5.0, 0.0), &Vec3::y()).unwrap();
        assert_relative_eq!(rotation * Vec3::z(), -Vec3::y(), epsilon = EPSILON);
    }

    #[test]
    fn test_look_rotation_rejects_zero_direction() {
        assert!(look_rotation(&Vec3::zeros(), &Vec3::y()).is_none());
    }
}
