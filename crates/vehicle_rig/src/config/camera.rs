//! Chase camera tuning parameters
//!
//! [`CameraParams`] is an immutable snapshot. Changing a value produces a new
//! snapshot through [`CameraParams::with_param`]; the coordinator reads one
//! snapshot per frame so a frame never observes a half-applied change.

use super::ConfigError;
use crate::foundation::math::Vec3;
use serde::{Deserialize, Serialize};

/// Chase camera tuning values
///
/// Field names serialize in camelCase (`lookAtOffsetY`, `positionLerp`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CameraParams {
    /// Pivot local X offset
    pub x: f32,
    /// Pivot local Y offset
    pub y: f32,
    /// Pivot local Z offset
    pub z: f32,
    /// Height of the look-at point above the chassis
    pub look_at_offset_y: f32,
    /// Camera to pivot smoothing factor
    pub position_lerp: f32,
    /// Look-at target smoothing factor
    pub look_at_lerp: f32,
    /// Camera root to chassis smoothing factor
    pub chase_lerp: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: -14.0,
            z: 4.0,
            look_at_offset_y: 1.0,
            position_lerp: 0.08,
            look_at_lerp: 0.1,
            chase_lerp: 0.05,
        }
    }
}

/// Descriptor a tuning panel binds to: name, range, step, getter and setter
#[derive(Clone, Copy)]
pub struct TunableParam {
    /// Parameter name as it appears in config files
    pub name: &'static str,
    /// Lower bound (inclusive)
    pub min: f32,
    /// Upper bound (inclusive)
    pub max: f32,
    /// Suggested slider step
    pub step: f32,
    /// Read the value from a snapshot
    pub get: fn(&CameraParams) -> f32,
    /// Write the value into a snapshot
    pub set: fn(&mut CameraParams, f32),
}

impl std::fmt::Debug for TunableParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TunableParam")
            .field("name", &self.name)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("step", &self.step)
            .finish_non_exhaustive()
    }
}

impl TunableParam {
    /// Whether `value` lies inside `[min, max]` (NaN never does)
    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn check(&self, value: f32) -> Result<(), ConfigError> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(ConfigError::OutOfRange {
                name: self.name,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

static TUNABLES: [TunableParam; 7] = [
    TunableParam {
        name: "x",
        min: -20.0,
        max: 20.0,
        step: 0.1,
        get: |p| p.x,
        set: |p, v| p.x = v,
    },
    TunableParam {
        name: "y",
        min: -20.0,
        max: 10.0,
        step: 0.1,
        get: |p| p.y,
        set: |p, v| p.y = v,
    },
    TunableParam {
        name: "z",
        min: -20.0,
        max: 20.0,
        step: 0.1,
        get: |p| p.z,
        set: |p, v| p.z = v,
    },
    TunableParam {
        name: "lookAtOffsetY",
        min: -2.0,
        max: 5.0,
        step: 0.1,
        get: |p| p.look_at_offset_y,
        set: |p, v| p.look_at_offset_y = v,
    },
    TunableParam {
        name: "positionLerp",
        min: 0.01,
        max: 0.5,
        step: 0.01,
        get: |p| p.position_lerp,
        set: |p, v| p.position_lerp = v,
    },
    TunableParam {
        name: "lookAtLerp",
        min: 0.01,
        max: 0.5,
        step: 0.01,
        get: |p| p.look_at_lerp,
        set: |p, v| p.look_at_lerp = v,
    },
    TunableParam {
        name: "chaseLerp",
        min: 0.01,
        max: 0.3,
        step: 0.01,
        get: |p| p.chase_lerp,
        set: |p, v| p.chase_lerp = v,
    },
];

impl CameraParams {
    /// All tunable parameters in declaration order
    pub fn tunables() -> &'static [TunableParam] {
        &TUNABLES
    }

    fn tunable(name: &str) -> Result<&'static TunableParam, ConfigError> {
        TUNABLES
            .iter()
            .find(|param| param.name == name)
            .ok_or_else(|| ConfigError::UnknownParameter(name.to_string()))
    }

    /// Pivot offset relative to the camera root
    pub fn pivot_offset(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Read a parameter by its config name
    pub fn get_param(&self, name: &str) -> Option<f32> {
        Self::tunable(name).ok().map(|param| (param.get)(self))
    }

    /// New snapshot with one parameter replaced
    ///
    /// Rejects unknown names and out-of-range values; `self` is never modified.
    pub fn with_param(&self, name: &str, value: f32) -> Result<Self, ConfigError> {
        let param = Self::tunable(name)?;
        param.check(value)?;

        let mut next = *self;
        (param.set)(&mut next, value);
        Ok(next)
    }

    /// Check every parameter against its range
    pub fn validate(&self) -> Result<(), ConfigError> {
        TUNABLES.iter().try_for_each(|param| param.check((param.get)(self)))
    }

    /// Copy with every parameter clamped into its range
    ///
    /// NaN values are replaced by the default for that parameter.
    pub fn clamped(&self) -> Self {
        let defaults = Self::default();
        let mut next = *self;
        for param in &TUNABLES {
            let value = (param.get)(self);
            let value = if value.is_nan() {
                (param.get)(&defaults)
            } else {
                value.clamp(param.min, param.max)
            };
            (param.set)(&mut next, value);
        }
        next
    }
}
