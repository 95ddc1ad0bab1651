//! Input record and controller dialect selector for the generators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Target controller dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Controller {
    /// Heidenhain TNC 640 (Q-variable dialect)
    Tnc640,
    /// Fanuc 31i (macro/WHILE-loop dialect)
    Fanuc31i,
}

impl Default for Controller {
    fn default() -> Self {
        Self::Tnc640
    }
}

impl Controller {
    /// Default file extension for programs saved in this dialect.
    pub fn file_extension(&self) -> &'static str {
        match self {
            Self::Tnc640 => ".h",
            Self::Fanuc31i => ".nc",
        }
    }

    /// Human-readable controller name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tnc640 => "Heidenhain TNC 640",
            Self::Fanuc31i => "Fanuc 31i",
        }
    }
}

impl fmt::Display for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tnc640 => write!(f, "tnc640"),
            Self::Fanuc31i => write!(f, "fanuc31i"),
        }
    }
}

impl FromStr for Controller {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tnc640" => Ok(Self::Tnc640),
            "fanuc31i" => Ok(Self::Fanuc31i),
            other => Err(Error::InputFormat(format!(
                "unknown controller '{}' (expected tnc640 or fanuc31i)",
                other
            ))),
        }
    }
}

/// Parameters for a warmup program.
///
/// Immutable input record consumed once by exactly one generator. Travel
/// limits are positive millimetres; feed rates are mm/min. Step count and
/// dwell are clamped by the generators, never rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarmupParameters {
    /// Program name embedded in the header (sanitized before emission)
    pub program_name: String,
    /// X axis travel (mm)
    pub x_travel: f64,
    /// Y axis travel (mm)
    pub y_travel: f64,
    /// Z axis travel (mm)
    pub z_travel: f64,
    /// Feed rate at the start of the axis ramps (mm/min)
    pub start_feed: f64,
    /// Feed rate at the end of the axis ramps (mm/min)
    pub finish_feed: f64,
    /// Spindle speed at the start of the warmup ramp (RPM)
    pub start_rpm: f64,
    /// Spindle speed at the end of the warmup ramp (RPM)
    pub finish_rpm: f64,
    /// Number of spindle warmup steps
    pub steps: u32,
    /// Dwell at each spindle step (seconds)
    pub seconds_per_step: u32,
    /// Emit a coolant-on command (M8/M08) during safe start
    pub include_coolant: bool,
    /// Free-form machine annotation for the header comment
    pub machine_label: Option<String>,
}

/// Sanitize a program name to characters both dialects accept.
///
/// Uppercases ASCII letters and replaces anything outside `[A-Z0-9_.-]`
/// with an underscore. A blank name falls back to `WARMUP`.
pub fn sanitize_program_name(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| {
            let c = c.to_ascii_uppercase();
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "WARMUP".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_round_trip() {
        for controller in [Controller::Tnc640, Controller::Fanuc31i] {
            let parsed: Controller = controller.to_string().parse().unwrap();
            assert_eq!(parsed, controller);
        }
        assert_eq!("TNC640".parse::<Controller>().unwrap(), Controller::Tnc640);
        assert!("siemens840d".parse::<Controller>().is_err());
    }

    #[test]
    fn test_controller_file_extension() {
        assert_eq!(Controller::Tnc640.file_extension(), ".h");
        assert_eq!(Controller::Fanuc31i.file_extension(), ".nc");
    }

    #[test]
    fn test_sanitize_program_name() {
        assert_eq!(sanitize_program_name("warmup"), "WARMUP");
        assert_eq!(sanitize_program_name("my warmup #1"), "MY_WARMUP__1");
        assert_eq!(sanitize_program_name("mill-2.long"), "MILL-2.LONG");
        assert_eq!(sanitize_program_name("   "), "WARMUP");
        assert_eq!(sanitize_program_name(""), "WARMUP");
    }

    #[test]
    fn test_controller_serde_lowercase() {
        let json = serde_json::to_string(&Controller::Fanuc31i).unwrap();
        assert_eq!(json, "\"fanuc31i\"");
    }
}
