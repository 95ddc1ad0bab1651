//! Configuration file handling.
//!
//! Supports JSON and TOML files. Configuration is organized into two
//! sections:
//! - Generator defaults (program name, controller, feed/RPM ramp, steps,
//!   dwell, coolant)
//! - Machine presets (named per-axis travel limits)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use warmupkit_core::{Controller, Error, Result};

/// Default values for every parameter a resolver may leave unspecified.
///
/// Each field is serde-defaulted, so a config file only needs the keys it
/// wants to override.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorDefaults {
    /// Program name embedded in the header
    pub program_name: String,
    /// Target controller dialect
    pub controller: Controller,
    /// Feed rate at the start of the axis ramps (mm/min)
    pub start_feed: f64,
    /// Feed rate at the end of the axis ramps (mm/min)
    pub finish_feed: f64,
    /// Spindle speed at the start of the warmup ramp (RPM)
    pub start_rpm: f64,
    /// Spindle speed at the end of the warmup ramp (RPM)
    pub finish_rpm: f64,
    /// Number of spindle warmup steps
    pub rpm_steps: u32,
    /// Dwell at each spindle step (seconds)
    pub seconds_per_step: u32,
    /// Emit a coolant-on command during safe start
    pub coolant: bool,
}

impl Default for GeneratorDefaults {
    fn default() -> Self {
        Self {
            program_name: "WARMUP".to_string(),
            controller: Controller::Tnc640,
            start_feed: 1000.0,
            finish_feed: 2000.0,
            start_rpm: 500.0,
            finish_rpm: 6000.0,
            rpm_steps: 5,
            seconds_per_step: 1,
            coolant: true,
        }
    }
}

/// Per-axis travel limits for a named machine preset (mm).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachinePreset {
    pub x_travel: f64,
    pub y_travel: f64,
    pub z_travel: f64,
}

/// Complete application configuration
///
/// Aggregates generator defaults and the machine preset table and provides
/// file I/O operations.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Generator defaults
    pub defaults: GeneratorDefaults,
    /// Named machine presets, keyed by display name
    pub machines: BTreeMap<String, MachinePreset>,
}

impl Config {
    /// Create new config with built-in defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform-specific default config file location
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("warmupkit")
            .join("config.json")
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::ConfigLoad(format!("failed to read {}: {}", path.display(), e))
        })?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .map_err(|e| Error::ConfigLoad(format!("invalid JSON config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)
                .map_err(|e| Error::ConfigLoad(format!("invalid TOML config: {}", e)))?
        } else {
            return Err(Error::ConfigLoad(
                "config file must be .json or .toml".to_string(),
            ));
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)
                .map_err(|e| Error::other(format!("failed to serialize config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)
                .map_err(|e| Error::other(format!("failed to serialize config: {}", e)))?
        } else {
            return Err(Error::other("config file must be .json or .toml".to_string()));
        };

        std::fs::write(path, content)
            .map_err(|e| Error::Persistence(format!("failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let d = &self.defaults;
        if d.start_feed <= 0.0 || d.finish_feed <= 0.0 {
            return Err(Error::ConfigLoad("feed rates must be > 0".to_string()));
        }
        if d.start_rpm < 0.0 || d.finish_rpm < 0.0 {
            return Err(Error::ConfigLoad("spindle speeds must be >= 0".to_string()));
        }
        for (name, preset) in &self.machines {
            if preset.x_travel <= 0.0 || preset.y_travel <= 0.0 || preset.z_travel <= 0.0 {
                return Err(Error::ConfigLoad(format!(
                    "machine '{}': travel limits must be > 0",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Preset names in stable display order
    pub fn machine_names(&self) -> Vec<String> {
        self.machines.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_defaults() {
        let config = Config::new();
        assert_eq!(config.defaults.program_name, "WARMUP");
        assert_eq!(config.defaults.controller, Controller::Tnc640);
        assert_eq!(config.defaults.start_feed, 1000.0);
        assert_eq!(config.defaults.finish_feed, 2000.0);
        assert_eq!(config.defaults.start_rpm, 500.0);
        assert_eq!(config.defaults.finish_rpm, 6000.0);
        assert_eq!(config.defaults.rpm_steps, 5);
        assert_eq!(config.defaults.seconds_per_step, 1);
        assert!(config.defaults.coolant);
        assert!(config.machines.is_empty());
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{"defaults": {"rpm_steps": 8}}"#).unwrap();
        assert_eq!(config.defaults.rpm_steps, 8);
        assert_eq!(config.defaults.program_name, "WARMUP");
        assert_eq!(config.defaults.finish_rpm, 6000.0);
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::new();
        config.defaults.controller = Controller::Fanuc31i;
        config.machines.insert(
            "Machine 1".to_string(),
            MachinePreset {
                x_travel: 762.0,
                y_travel: 508.0,
                z_travel: 500.0,
            },
        );

        config.save_to_file(&path).unwrap();
        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.defaults.controller, Controller::Fanuc31i);
        assert_eq!(loaded.machines["Machine 1"].x_travel, 762.0);
        assert_eq!(loaded.machine_names(), vec!["Machine 1".to_string()]);
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::new();
        config.save_to_file(&path).unwrap();
        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.defaults.program_name, "WARMUP");
    }

    #[test]
    fn test_missing_file_is_config_load_error() {
        let err = Config::load_from_file(Path::new("/nonexistent/config.json")).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_malformed_json_is_config_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "defaults: {}").unwrap();

        assert!(Config::load_from_file(&path).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::new();
        config.defaults.start_feed = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.machines.insert(
            "Broken".to_string(),
            MachinePreset {
                x_travel: 300.0,
                y_travel: -1.0,
                z_travel: 300.0,
            },
        );
        assert!(config.validate().is_err());
    }
}
