//! Configuration system
//!
//! Camera tuning lives in [`CameraParams`]; [`RigConfig`] is the on-disk
//! document that wraps it. Both TOML and RON files are supported.

mod camera;

pub use camera::{CameraParams, TunableParam};
pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file, then [`validate`](Self::validate) it
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Try different formats
        let config: Self = if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject a parsed configuration; accepts everything by default
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Parameter value outside its valid range
    #[error("Parameter `{name}` = {value} is outside [{min}, {max}]")]
    OutOfRange {
        /// Parameter name
        name: &'static str,
        /// Rejected value
        value: f32,
        /// Lower bound (inclusive)
        min: f32,
        /// Upper bound (inclusive)
        max: f32,
    },

    /// No parameter with this name exists
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),
}

/// Top-level rig configuration file
///
/// ```toml
/// [camera]
/// y = -12.0
/// positionLerp = 0.1
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    /// Chase camera tuning
    pub camera: CameraParams,
}

impl Config for RigConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.camera.validate()?;
        log::debug!("Validated rig config: {self:?}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(file_name: &str) -> String {
        std::env::temp_dir()
            .join(format!("vehicle_rig_{}_{file_name}", std::process::id()))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_toml_partial_file_falls_back_to_defaults() {
        let path = temp_path("partial.toml");
        std::fs::write(&path, "[camera]\ny = -12.0\npositionLerp = 0.2\n").unwrap();

        let config = RigConfig::load_from_file(&path).unwrap();
        assert_eq!(config.camera.y, -12.0);
        assert_eq!(config.camera.position_lerp, 0.2);
        assert_eq!(config.camera.chase_lerp, CameraParams::default().chase_lerp);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_ron_file_is_saved_and_reloaded() {
        let path = temp_path("saved.ron");
        let config = RigConfig {
            camera: CameraParams::default().with_param("z", 6.5).unwrap(),
        };
        config.save_to_file(&path).unwrap();

        let loaded = RigConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_out_of_range_file_is_rejected() {
        let path = temp_path("bad.toml");
        std::fs::write(&path, "[camera]\nchaseLerp = 0.9\n").unwrap();

        let result = RigConfig::load_from_file(&path);
        assert!(matches!(
            result,
            Err(ConfigError::OutOfRange { name: "chaseLerp", .. })
        ));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_unknown_extension_is_unsupported() {
        let result = RigConfig::default().save_to_file("camera.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
