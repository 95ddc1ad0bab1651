//! Configuration and settings management for WarmupKit
//!
//! Provides the configuration source consumed by the parameter resolvers:
//! generator defaults, a table of named machine presets with per-axis
//! travel limits, and JSON/TOML file handling. Missing keys fall back to
//! documented built-in defaults; the generation engine itself never reads
//! configuration.

pub mod config;

pub use config::{Config, GeneratorDefaults, MachinePreset};
