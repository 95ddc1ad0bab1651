//! # WarmupKit
//!
//! Generates controller-ready CNC warmup programs: a Q-variable program
//! for Heidenhain TNC 640 controls and a macro/WHILE-loop program for
//! Fanuc 31i controls, from a small set of numeric parameters (axis
//! travels, feed and spindle ramps, step count, dwell, coolant).
//!
//! ## Architecture
//!
//! WarmupKit is organized as a workspace with multiple crates:
//!
//! 1. **warmupkit-core** - The generation engine: parameters, dialect
//!    renderers, shared numeric formatting, error types
//! 2. **warmupkit-settings** - Configuration defaults and machine presets
//! 3. **warmupkit** - Main binary with the two parameter resolvers
//!    (command line and interactive wizard)

pub mod cli;
pub mod wizard;

pub use warmupkit_core::{
    format_number, generate_warmup, sanitize_program_name, Controller, Error,
    Fanuc31iWarmupGenerator, Result, Tnc640WarmupGenerator, WarmupParameters,
};
pub use warmupkit_settings::{Config, GeneratorDefaults, MachinePreset};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging on stderr (stdout is reserved for generated
/// program text) with RUST_LOG environment variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
