//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`M4G_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use m4g_math::Vector3;
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output formatting
    #[serde(default)]
    pub display: DisplayConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
    /// Smoke report inputs
    #[serde(default)]
    pub smoke: SmokeConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`M4G_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // M4G_DISPLAY__PRECISION=6 -> display.precision = 6
        figment = figment.merge(Env::prefixed("M4G_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Output formatting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Digits after the decimal point when printing vectors and matrices
    pub precision: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { precision: 3 }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace); `RUST_LOG` takes precedence
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Inputs for the smoke report
///
/// Missing keys fall back to the defaults individually.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmokeConfig {
    /// Point moved by the translation step
    pub point: Vector3<f32>,
    /// Position for the composite transform
    pub position: Vector3<f32>,
    /// Euler rotation in degrees, applied X then Y then Z
    pub rotation_degrees: Vector3<f32>,
    /// Per-axis scale
    pub scale: Vector3<f32>,
    /// How many times the report is repeated for timing
    pub iterations: u32,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            point: Vector3::new(1.0, 2.0, 3.0),
            position: Vector3::new(10.0, 0.0, 0.0),
            rotation_degrees: Vector3::new(0.0, 0.0, 90.0),
            scale: Vector3::new(2.0, 2.0, 2.0),
            iterations: 1,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.display.precision, 3);
        assert_eq!(config.debug.log_level, "info");
        assert_eq!(config.smoke.scale, Vector3::new(2.0, 2.0, 2.0));
        assert_eq!(config.smoke.iterations, 1);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("precision"));
        assert!(toml.contains("rotation_degrees = [0.0, 0.0, 90.0]"));
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let config: AppConfig = toml::from_str("[display]\nprecision = 6\n").unwrap();
        assert_eq!(config.display.precision, 6);
        assert_eq!(config.debug.log_level, "info");
        assert_eq!(config.smoke.point, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_partial_smoke_section() {
        let config: AppConfig = toml::from_str("[smoke]\niterations = 100\n").unwrap();
        assert_eq!(config.smoke.iterations, 100);
        assert_eq!(config.smoke.rotation_degrees, Vector3::new(0.0, 0.0, 90.0));
    }

    #[test]
    fn test_missing_directory_falls_back_to_defaults() {
        let config = AppConfig::load_from("does/not/exist").unwrap();
        assert_eq!(config.smoke.position, Vector3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn test_bad_vector_length_is_an_error() {
        let dir = std::env::temp_dir().join(format!("m4g_config_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("default.toml"), "[smoke]\npoint = [1.0, 2.0]\n").unwrap();

        let err = AppConfig::load_from(&dir).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
