//! Interactive parameter resolver.
//!
//! Terminal form that collects the same fields as the CLI through labeled
//! prompts with configured defaults. Malformed numeric input is reported
//! and re-prompted locally; it never reaches the engine. Choosing a named
//! machine preset fixes the three travel limits and skips those prompts,
//! the terminal equivalent of disabling the form fields.

use anyhow::Result;
use std::fs;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::{error, info};
use warmupkit_core::{
    format_number, generate_warmup, sanitize_program_name, Controller, Error, WarmupParameters,
};
use warmupkit_settings::{Config, MachinePreset};

/// Run the interactive wizard on stdin/stdout
pub fn run() -> Result<()> {
    let config = crate::cli::load_config(None)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_with(&mut input, &mut output, &config)
}

/// Wizard flow over explicit streams
pub(crate) fn run_with<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &Config,
) -> Result<()> {
    let d = &config.defaults;
    writeln!(out, "WarmupKit {} - CNC warmup program generator", crate::VERSION)?;
    writeln!(out)?;

    let program_name = prompt_line(input, out, "Program name", &d.program_name)?;
    let controller: Controller = prompt_parsed(
        input,
        out,
        "Controller (tnc640/fanuc31i)",
        &d.controller.to_string(),
    )?;
    let start_rpm: f64 = prompt_parsed(input, out, "Start RPM", &format_number(d.start_rpm))?;
    let finish_rpm: f64 = prompt_parsed(input, out, "Finish RPM", &format_number(d.finish_rpm))?;
    let start_feed: f64 =
        prompt_parsed(input, out, "Start feed (mm/min)", &format_number(d.start_feed))?;
    let finish_feed: f64 =
        prompt_parsed(input, out, "Finish feed (mm/min)", &format_number(d.finish_feed))?;
    let steps: u32 =
        prompt_parsed(input, out, "Spindle warmup steps", &d.rpm_steps.to_string())?;
    let seconds_per_step: u32 = prompt_parsed(
        input,
        out,
        "Seconds per step",
        &d.seconds_per_step.to_string(),
    )?;
    let include_coolant = prompt_bool(input, out, "Flood coolant (M8)", d.coolant)?;

    let preset = prompt_preset(input, out, config)?;
    let (x_travel, y_travel, z_travel, machine_label) = match preset {
        Some((name, m)) => {
            writeln!(
                out,
                "Using preset '{}': {} x {} x {} mm",
                name,
                format_number(m.x_travel),
                format_number(m.y_travel),
                format_number(m.z_travel)
            )?;
            (m.x_travel, m.y_travel, m.z_travel, name)
        }
        None => {
            let x: f64 = prompt_parsed(input, out, "X travel limit (mm)", "300")?;
            let y: f64 = prompt_parsed(input, out, "Y travel limit (mm)", "300")?;
            let z: f64 = prompt_parsed(input, out, "Z travel limit (mm)", "300")?;
            (x, y, z, "Custom".to_string())
        }
    };

    let params = WarmupParameters {
        program_name,
        x_travel,
        y_travel,
        z_travel,
        start_feed,
        finish_feed,
        start_rpm,
        finish_rpm,
        steps,
        seconds_per_step,
        include_coolant,
        machine_label: Some(machine_label),
    };

    info!(%controller, "generating warmup program");
    let text = generate_warmup(controller, &params)?;

    let default_file = format!(
        "{}{}",
        sanitize_program_name(&params.program_name),
        controller.file_extension()
    );
    let path = prompt_line(input, out, "Save to ('-' prints to stdout)", &default_file)?;
    if path == "-" {
        out.write_all(text.as_bytes())?;
        return Ok(());
    }

    match fs::write(&path, &text) {
        Ok(()) => writeln!(out, "Program saved to: {}", path)?,
        Err(e) => {
            // A failed write must not lose the already-generated text
            let err = Error::Persistence(format!("{}: {}", path, e));
            error!(%err, "write failed, printing program instead");
            writeln!(out, "{}", err)?;
            out.write_all(text.as_bytes())?;
        }
    }
    Ok(())
}

/// Prompt for one line, returning the default on empty input or EOF
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    default: &str,
) -> Result<String> {
    write!(out, "{} [{}]: ", label, default)?;
    out.flush()?;

    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(default.to_string());
    }
    let trimmed = buf.trim();
    Ok(if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    })
}

/// Prompt until the answer parses
fn prompt_parsed<T: FromStr, R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    default: &str,
) -> Result<T> {
    loop {
        let raw = prompt_line(input, out, label, default)?;
        match raw.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(out, "Please enter a valid value (e.g. 123 or 123.4).")?,
        }
    }
}

/// Prompt for a yes/no answer
fn prompt_bool<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    default: bool,
) -> Result<bool> {
    let default_str = if default { "y" } else { "n" };
    loop {
        let raw = prompt_line(input, out, label, default_str)?.to_ascii_lowercase();
        match raw.as_str() {
            "y" | "yes" | "true" | "1" => return Ok(true),
            "n" | "no" | "false" | "0" => return Ok(false),
            _ => writeln!(out, "Please answer y or n.")?,
        }
    }
}

/// Offer the machine presets; `None` means custom travels
fn prompt_preset<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &Config,
) -> Result<Option<(String, MachinePreset)>> {
    let names = config.machine_names();
    if names.is_empty() {
        return Ok(None);
    }

    writeln!(out, "Travel limit presets:")?;
    for (i, name) in names.iter().enumerate() {
        let m = &config.machines[name];
        writeln!(
            out,
            "  {}. {} ({} x {} x {} mm)",
            i + 1,
            name,
            format_number(m.x_travel),
            format_number(m.y_travel),
            format_number(m.z_travel)
        )?;
    }
    writeln!(out, "  {}. Custom", names.len() + 1)?;

    loop {
        let raw = prompt_line(input, out, "Preset", "Custom")?;
        if raw.eq_ignore_ascii_case("custom") {
            return Ok(None);
        }
        if let Ok(n) = raw.parse::<usize>() {
            if (1..=names.len()).contains(&n) {
                let name = names[n - 1].clone();
                let preset = config.machines[&name].clone();
                return Ok(Some((name, preset)));
            }
            if n == names.len() + 1 {
                return Ok(None);
            }
        }
        if let Some(preset) = config.machines.get(&raw) {
            return Ok(Some((raw, preset.clone())));
        }
        writeln!(out, "Please choose a preset number or name from the list.")?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn wizard_output(input_lines: &[&str], config: &Config) -> String {
        let joined = input_lines.join("\n") + "\n";
        let mut input = Cursor::new(joined.into_bytes());
        let mut out: Vec<u8> = Vec::new();
        run_with(&mut input, &mut out, config).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn preset_config() -> Config {
        let mut config = Config::default();
        config.machines.insert(
            "Machine 1".to_string(),
            MachinePreset {
                x_travel: 762.0,
                y_travel: 508.0,
                z_travel: 500.0,
            },
        );
        config
    }

    #[test]
    fn test_all_defaults_produce_tnc_program_on_stdout() {
        // Twelve empty answers accept every default, then '-' prints the
        // program instead of saving
        let lines = ["", "", "", "", "", "", "", "", "", "", "", "", "-"];
        let out = wizard_output(&lines, &Config::default());

        assert!(out.contains("0  BEGIN PGM WARMUP MM"));
        assert!(out.contains("; MACHINE: Custom"));
        assert!(out.contains("Q22 =      5    ; RPM_STEPS"));
    }

    #[test]
    fn test_preset_selection_fixes_travels_and_label() {
        let lines = [
            "", "fanuc31i", "", "", "", "", "", "", "n", "1", "-",
        ];
        let out = wizard_output(&lines, &preset_config());

        assert!(out.contains("Using preset 'Machine 1': 762 x 508 x 500 mm"));
        assert!(out.contains("(FANUC 31I \u{2022} UNITS: MM \u{2022} Machine 1)"));
        // Half of the preset X travel, centered
        assert!(out.contains("#101 = 381     (X_MAX_SAFE)"));
        assert!(!out.contains("M08"));
    }

    #[test]
    fn test_malformed_numeric_input_reprompts() {
        let joined = "abc\n42\n";
        let mut input = Cursor::new(joined.as_bytes().to_vec());
        let mut out: Vec<u8> = Vec::new();
        let value: u32 = prompt_parsed(&mut input, &mut out, "Steps", "5").unwrap();

        assert_eq!(value, 42);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Please enter a valid value"));
    }

    #[test]
    fn test_empty_input_takes_default() {
        let mut input = Cursor::new(b"\n".to_vec());
        let mut out: Vec<u8> = Vec::new();
        let value: f64 = prompt_parsed(&mut input, &mut out, "Start RPM", "500").unwrap();
        assert_eq!(value, 500.0);
    }

    #[test]
    fn test_failed_save_still_prints_program() {
        let lines = [
            "", "", "", "", "", "", "", "", "", "", "", "",
            "/nonexistent-dir/warmup.h",
        ];
        let out = wizard_output(&lines, &Config::default());

        assert!(out.contains("Failed to write program"));
        assert!(out.contains("END PGM WARMUP MM"));
    }
}
