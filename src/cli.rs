//! Command-line parameter resolver.
//!
//! Maps flags onto a [`WarmupParameters`] record. The three travel limits
//! are required; everything else falls back to configuration defaults.
//! Output goes to `--output` or stdout.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use warmupkit_core::{generate_warmup, Controller, WarmupParameters};
use warmupkit_settings::Config;

/// Generate a CNC warmup program
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Program name embedded in the header
    #[arg(long)]
    pub program_name: Option<String>,

    /// Target controller (tnc640 or fanuc31i)
    #[arg(long)]
    pub controller: Option<Controller>,

    /// X axis travel limit (mm)
    #[arg(long)]
    pub x_travel: f64,

    /// Y axis travel limit (mm)
    #[arg(long)]
    pub y_travel: f64,

    /// Z axis travel limit (mm)
    #[arg(long)]
    pub z_travel: f64,

    /// Spindle speed at the start of the warmup ramp (RPM)
    #[arg(long)]
    pub start_rpm: Option<f64>,

    /// Spindle speed at the end of the warmup ramp (RPM)
    #[arg(long)]
    pub finish_rpm: Option<f64>,

    /// Feed rate at the start of the axis ramps (mm/min)
    #[arg(long)]
    pub start_feed: Option<f64>,

    /// Feed rate at the end of the axis ramps (mm/min)
    #[arg(long)]
    pub finish_feed: Option<f64>,

    /// Number of spindle warmup steps
    #[arg(long)]
    pub rpm_steps: Option<u32>,

    /// Dwell at each spindle step (seconds)
    #[arg(long)]
    pub seconds_per_step: Option<u32>,

    /// Enable flood coolant (M8/M08)
    #[arg(long)]
    pub coolant: bool,

    /// Free-form machine annotation for the header comment
    #[arg(long)]
    pub machine_label: Option<String>,

    /// Output file path (defaults to stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Configuration file path (JSON or TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Run the CLI resolver end to end
pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let (controller, params) = resolve_parameters(&args, &config);

    info!(%controller, program = %params.program_name, "generating warmup program");
    let text = generate_warmup(controller, &params)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = text.len(), "program written");
        }
        None => print!("{}", text),
    }
    Ok(())
}

/// Load configuration for a resolver.
///
/// An explicitly requested file must load cleanly, as must the default
/// file when it exists; only a wholly absent default file falls back to
/// built-in defaults.
pub(crate) fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) => {
            info!(path = %p.display(), "loading configuration");
            Ok(Config::load_from_file(p)?)
        }
        None => {
            let default = Config::default_path();
            if default.exists() {
                info!(path = %default.display(), "loading configuration");
                Ok(Config::load_from_file(&default)?)
            } else {
                warn!(path = %default.display(), "no configuration file, using built-in defaults");
                Ok(Config::default())
            }
        }
    }
}

/// Merge flags with configuration defaults into a parameter record
pub(crate) fn resolve_parameters(args: &Args, config: &Config) -> (Controller, WarmupParameters) {
    let d = &config.defaults;
    let controller = args.controller.unwrap_or(d.controller);
    let params = WarmupParameters {
        program_name: args
            .program_name
            .clone()
            .unwrap_or_else(|| d.program_name.clone()),
        x_travel: args.x_travel,
        y_travel: args.y_travel,
        z_travel: args.z_travel,
        start_feed: args.start_feed.unwrap_or(d.start_feed),
        finish_feed: args.finish_feed.unwrap_or(d.finish_feed),
        start_rpm: args.start_rpm.unwrap_or(d.start_rpm),
        finish_rpm: args.finish_rpm.unwrap_or(d.finish_rpm),
        steps: args.rpm_steps.unwrap_or(d.rpm_steps),
        seconds_per_step: args.seconds_per_step.unwrap_or(d.seconds_per_step),
        // The flag can only switch coolant on; absence defers to config
        include_coolant: args.coolant || d.coolant,
        machine_label: args.machine_label.clone(),
    };
    (controller, params)
}
