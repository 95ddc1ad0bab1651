//! # WarmupKit Core
//!
//! This crate is the program-generation engine: it turns a validated
//! [`WarmupParameters`] record into a complete, directly loadable warmup
//! program for one of two controller dialects.
//!
//! ## Generators Included
//!
//! - **TNC 640**: Heidenhain Q-variable program warming up from the machine
//!   corner, with a label/jump spindle ramp loop and block-numbered output
//! - **Fanuc 31i**: macro-variable program in absolute machine coordinates
//!   (G53), centered on the table, with `WHILE...DO...END` warmup loops
//!
//! Both generators are pure functions of their input: no I/O, no shared
//! state, byte-identical output for equal inputs. All numeric inputs are
//! clamped rather than rejected, so generation never fails. The variable
//! numbers embedded in the output (Q1..Q100, #100..#211) are a compatibility
//! contract with downstream tooling and must not be renumbered.

pub mod error;
pub mod fanuc31i;
pub mod format;
pub mod params;
pub mod tnc640;

pub use error::{Error, Result};
pub use fanuc31i::Fanuc31iWarmupGenerator;
pub use format::format_number;
pub use params::{sanitize_program_name, Controller, WarmupParameters};
pub use tnc640::Tnc640WarmupGenerator;

/// Generate a warmup program for the selected controller.
///
/// Thin dispatch over the two dialect generators; each of them can also be
/// used directly.
pub fn generate_warmup(controller: Controller, params: &WarmupParameters) -> Result<String> {
    match controller {
        Controller::Tnc640 => Tnc640WarmupGenerator::new(params.clone()).generate(),
        Controller::Fanuc31i => Fanuc31iWarmupGenerator::new(params.clone()).generate(),
    }
}
