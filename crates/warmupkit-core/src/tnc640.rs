//! Heidenhain TNC 640 warmup program generator.
//!
//! Produces a Q-variable driven program that exercises the Z and XY axes
//! and ramps the spindle in incremental steps with a dwell at each step.
//! The machine datum is assumed to sit in a corner of the work envelope,
//! so the safe envelope runs from 0 to the axis travel on X/Y and from 0
//! down to -z_travel on Z.
//!
//! The Q-register numbering is a compatibility contract: Q1..Q6 envelope,
//! Q10/Q11 feed ramp, Q20..Q23 spindle ramp, Q80..Q83 derived increments,
//! Q90 loop counter, Q100 current feed. Downstream tooling keys on these
//! numbers for logging; do not renumber.

use crate::format::format_number;
use crate::params::{sanitize_program_name, WarmupParameters};
use crate::Result;

/// Generator for TNC 640 warmup programs
pub struct Tnc640WarmupGenerator {
    params: WarmupParameters,
}

/// One Q-register assignment with its inline annotation comment.
fn q_line(q: u32, value: f64, comment: &str) -> String {
    format!("Q{} = {:>6}    ; {}", q, format_number(value), comment)
}

impl Tnc640WarmupGenerator {
    /// Create a new generator with the given parameters
    pub fn new(params: WarmupParameters) -> Self {
        Self { params }
    }

    /// Generate the warmup program text
    pub fn generate(&self) -> Result<String> {
        let p = &self.params;
        let program_name = sanitize_program_name(&p.program_name);

        // The spindle RPM increment divides by the step count, so 1 is the
        // safe floor here (the Fanuc dialect needs 2).
        let steps = p.steps.max(1);
        let dwell = p.seconds_per_step;

        let mut lines: Vec<String> = Vec::new();
        lines.push(format!("BEGIN PGM {} MM", program_name));
        if let Some(label) = p.machine_label.as_deref().filter(|l| !l.is_empty()) {
            lines.push(format!("; MACHINE: {}", label));
        }

        // Config
        lines.push("; ===== Config =====".to_string());
        lines.push(q_line(1, 0.0, "X_MIN_SAFE (mm)"));
        lines.push(q_line(2, p.x_travel, "X_MAX_SAFE"));
        lines.push(q_line(3, 0.0, "Y_MIN_SAFE"));
        lines.push(q_line(4, p.y_travel, "Y_MAX_SAFE"));
        lines.push(q_line(5, 0.0, "Z_TOP_SAFE"));
        lines.push(q_line(6, -p.z_travel, "Z_BOTTOM_SAFE"));
        lines.push(String::new());
        lines.push(q_line(10, p.start_feed, "FEED_START (mm/min)"));
        lines.push(q_line(11, p.finish_feed, "FEED_FIN"));
        lines.push(String::new());
        lines.push(q_line(20, p.start_rpm, "RPM_START"));
        lines.push(q_line(21, p.finish_rpm, "RPM_FIN"));
        lines.push(q_line(22, steps as f64, "RPM_STEPS"));
        lines.push(q_line(23, dwell as f64, "DWELL PER STEP (s)"));
        lines.push(String::new());

        // Safe start
        lines.push("; ===== Safe start =====".to_string());
        lines.push("M5 M9".to_string());
        lines.push("PLANE RESET".to_string());
        lines.push("TRANS DATUM RESET".to_string());
        lines.push("FUNCTION RESET TCPM".to_string());
        lines.push("TOOL CALL 0 Z".to_string());
        if p.include_coolant {
            lines.push("M8".to_string());
        }

        // Feed and RPM increments, evaluated by the control at run time
        lines.push("Q80 = +Q11 - Q10        ; FEED_RANGE".to_string());
        lines.push("Q81 = Q80/3             ; FEED_INC".to_string());
        lines.push("Q83 = (Q21 - Q20)/Q22   ; RPM_INC".to_string());
        lines.push(String::new());

        lines.push("L  Z+Q5 FMAX M91  ; to safe Z".to_string());

        // Z axis test: four unrolled legs, feed rising by a third of the
        // range each leg
        lines.push(
            "; ===== Z axis test: top -> bottom -> top with increasing feed from start to finish ====="
                .to_string(),
        );
        lines.push("Q100 = Q10".to_string());
        lines.push("L  Z+Q6 FQ100 M91        ; to Z bottom at start feed".to_string());
        lines.push("Q100 = Q10 + Q81".to_string());
        lines.push("L  Z+Q5 FQ100 M91        ; back to Z top at start+1/3 range".to_string());
        lines.push("Q100 = Q10 + Q81*2".to_string());
        lines.push("L  Z+Q6 FQ100 M91        ; to Z bottom at start+2/3 range".to_string());
        lines.push("Q100 = Q11".to_string());
        lines.push("L  Z+Q5 FQ100 M91        ; back to Z top at finish feed".to_string());
        lines.push(String::new());

        // XY axis test: mirrored four legs between the envelope corners
        lines.push(
            "; ===== XY axis test: min -> max -> min with increasing feed from start to finish ====="
                .to_string(),
        );
        lines.push("L  Z+Q5 FMAX M91         ; ensure safe Z for XY motion".to_string());
        lines.push("L  X+Q1  Y+Q3 FQ10 M91   ; go to min corner (0,0) with start feed".to_string());
        lines.push("Q100 = Q10".to_string());
        lines.push("L  X+Q2  Y+Q4 FQ100 M91  ; to max corner at start feed".to_string());
        lines.push("Q100 = Q10 + Q81".to_string());
        lines.push("L  X+Q1  Y+Q3 FQ100 M91  ; back to min corner at start+1/3 range".to_string());
        lines.push("Q100 = Q10 + Q81*2".to_string());
        lines.push("L  X+Q2  Y+Q4 FQ100 M91  ; to max corner at start+2/3 range".to_string());
        lines.push("Q100 = Q11".to_string());
        lines.push("L  X+Q1  Y+Q3 FQ100 M91  ; back to min corner at finish feed".to_string());
        lines.push(String::new());

        // Spindle warmup: runtime loop via label/jump. The LT and EQU
        // branches both jump back, giving "loop while counter <= steps"
        // with the control's single-sided comparisons. Accepted-syntax
        // idiom; do not collapse into one branch.
        lines.push("; ===== Spindle warmup =====".to_string());
        lines.push("TOOL CALL 0 Z SQ20".to_string());
        lines.push("L  M3".to_string());
        lines.push("Q90 = 1".to_string());
        lines.push("LBL 2".to_string());
        lines.push("  Q20 = Q20 + Q83".to_string());
        lines.push("  TOOL CALL 0 Z SQ20".to_string());
        lines.push("  FUNCTION DWELL TIME+Q23".to_string());
        lines.push("  Q90 = Q90 + 1".to_string());
        lines.push("  FN 12: IF +Q90 LT +Q22 GOTO LBL 2".to_string());
        lines.push("  FN 9: IF +Q90 EQU +Q22 GOTO LBL 2".to_string());
        lines.push("LBL 0".to_string());
        lines.push(String::new());
        lines.push("M5 M9".to_string());
        lines.push(format!("END PGM {} MM", program_name));

        // Block numbering: single-digit numbers get one extra space so the
        // program text columns line up
        let numbered: Vec<String> = lines
            .iter()
            .enumerate()
            .map(|(idx, text)| {
                if idx < 10 {
                    format!("{}  {}", idx, text)
                } else {
                    format!("{} {}", idx, text)
                }
            })
            .collect();

        Ok(numbered.join("\n") + "\n")
    }
}
