//! Fanuc 31i warmup program generator.
//!
//! Produces a macro-style warmup program in absolute machine coordinates
//! (G53), centered on the table, with the Z, XY, and spindle warmups each
//! expressed as a controller-side `WHILE...DO...END` loop. Each loop uses
//! its own index variable so a hand-edit of one block cannot collide with
//! another.
//!
//! Macro variable numbering is a compatibility contract: #100..#111
//! machine limits and center, #120..#123 axis feed ramp, #200..#205
//! spindle warmup, #130/#140/#210 loop counters, #150/#160..#163 stroke
//! and rectangle geometry. Do not renumber.

use crate::format::format_number;
use crate::params::{sanitize_program_name, WarmupParameters};
use crate::Result;

/// Axis-exercise pass count. Fixed in the emitted program (editable there);
/// axis granularity is independent of the spindle step count.
const FEED_STEPS: u32 = 4;

/// Generator for Fanuc 31i warmup programs
pub struct Fanuc31iWarmupGenerator {
    params: WarmupParameters,
}

impl Fanuc31iWarmupGenerator {
    /// Create a new generator with the given parameters
    pub fn new(params: WarmupParameters) -> Self {
        Self { params }
    }

    /// Generate the warmup program text
    pub fn generate(&self) -> Result<String> {
        let p = &self.params;
        let program_name = sanitize_program_name(&p.program_name);

        // The per-step deltas divide by (steps - 1), so a ramp needs at
        // least two points
        let steps = p.steps.max(2);
        let dwell = p.seconds_per_step;

        let max_x = p.x_travel.abs();
        let max_y = p.y_travel.abs();
        let max_z = p.z_travel.abs();

        // Envelope centered on the XY origin; Z home at 0. Top-safe sits
        // 10% of the travel below home, capped at 50mm so the initial
        // descent stays short on long-travel machines.
        let half_x = max_x / 2.0;
        let half_y = max_y / 2.0;
        let x_min_safe = -half_x;
        let x_max_safe = half_x;
        let y_min_safe = -half_y;
        let y_max_safe = half_y;
        let z_home = 0.0;
        let z_top_safe = -(max_z * 0.10).min(50.0);
        let z_bottom_safe = -max_z;

        let mut gcode = String::new();
        let mut line = |text: String| {
            gcode.push_str(&text);
            gcode.push('\n');
        };

        line("%".to_string());
        line(format!("O0001 ({})", program_name));
        match p.machine_label.as_deref().filter(|l| !l.is_empty()) {
            Some(label) => line(format!("(FANUC 31I \u{2022} UNITS: MM \u{2022} {})", label)),
            None => line("(FANUC 31I \u{2022} UNITS: MM)".to_string()),
        }
        line(String::new());

        // Config: machine limits
        line("(===== CONFIG: MACHINE LIMITS IN MACHINE COORDS (G53) =====)".to_string());
        line(format!("#100 = {}     (X_MIN_SAFE)", format_number(x_min_safe)));
        line(format!("#101 = {}     (X_MAX_SAFE)", format_number(x_max_safe)));
        line(format!("#102 = {}     (Y_MIN_SAFE)", format_number(y_min_safe)));
        line(format!("#103 = {}     (Y_MAX_SAFE)", format_number(y_max_safe)));
        line(format!("#104 = {}      (Z_HOME)", format_number(z_home)));
        line(format!("#106 = {}     (Z_TOP_SAFE)", format_number(z_top_safe)));
        line(format!("#107 = {}     (Z_BOTTOM_SAFE)", format_number(z_bottom_safe)));
        line(String::new());

        // Config: axis feed ramp
        line("(===== CONFIG: AXIS FEED RAMP =====)".to_string());
        line(format!("#120 = {}     (FEED_START  mm/min)", format_number(p.start_feed)));
        line(format!("#121 = {}     (FEED_FIN    mm/min)", format_number(p.finish_feed)));
        line(format!("#122 = {}     (FEED_STEPS)", FEED_STEPS));
        line(String::new());

        // Config: spindle warmup
        line("(===== CONFIG: SPINDLE WARMUP =====)".to_string());
        line(format!("#200 = {}    (RPM_START)", format_number(p.start_rpm)));
        line(format!("#201 = {}    (RPM_FIN)", format_number(p.finish_rpm)));
        line(format!("#202 = {}    (RPM_STEPS   >=2)", format_number(steps as f64)));
        line(format!("#203 = {}    (DWELL PER STEP, seconds)", format_number(dwell as f64)));
        line(String::new());

        // Housekeeping / safe start
        line("(===== HOUSEKEEPING / SAFE START =====)".to_string());
        line("G21 G17 G90 G94 G40 G49 G80".to_string());
        line("M05".to_string());
        line("M09".to_string());
        if p.include_coolant {
            line("M08                  (optional coolant)".to_string());
        }
        line(String::new());

        // Runtime guard: the program may be hand-edited after generation
        line("IF[#202 LT 2.] THEN #202 = 2.".to_string());
        line(String::new());

        // Per-step deltas over (steps - 1) intervals
        line("#123 = [#121 - #120] / [#122 - 1.]    (axis feed delta per step)".to_string());
        line("#205 = [#201 - #200] / [#202 - 1.]    (spindle rpm delta per step)".to_string());
        line(String::new());

        line("(----- Establish safe machine positions -----)".to_string());
        line("G90 G53 G00 Z#104            (park at Z home)".to_string());
        line(String::new());
        line("G90 G53 G00 Z#106            (down to top-safe Z)".to_string());
        line("#110 = [#100 + #101] / 2.    (center X)".to_string());
        line("#111 = [#102 + #103] / 2.    (center Y)".to_string());
        line("G90 G53 G00 X#110 Y#111      (move to XY center)".to_string());
        line(String::new());

        // Z warmup loop
        line("(============ Z WARMUP ============)".to_string());
        line("#150 = ABS[#106 - #107]      (positive stroke length)".to_string());
        line("G91                          (incremental moves around the safe center)".to_string());
        line("#130 = 1.".to_string());
        line("WHILE[#130 LE #122] DO1".to_string());
        line("  #131 = #120 + [#123 * [#130 - 1.]]    (current feed)".to_string());
        line("  G01 Z[-#150] F#131                    (down to bottom-safe relative to top-safe)".to_string());
        line("  G01 Z[#150]  F#131                    (back up to top-safe)".to_string());
        line("  #130 = #130 + 1.".to_string());
        line("END1".to_string());
        line(String::new());

        // XY warmup loop: two full diagonal traversals per pass
        line("(============ XY WARMUP ============)".to_string());
        line("#160 = [#101 - #100]         (rect width)".to_string());
        line("#161 = [#103 - #102]         (rect height)".to_string());
        line("#162 = #160 / 2.             (half width)".to_string());
        line("#163 = #161 / 2.             (half height)".to_string());
        line(String::new());
        line("#140 = 1.".to_string());
        line("WHILE[#140 LE #122] DO2".to_string());
        line("  #141 = #120 + [#123 * [#140 - 1.]]    (current feed)".to_string());
        line(String::new());
        line("  (center -> corner A)".to_string());
        line("  G01 X[-#162] Y[-#163] F#141".to_string());
        line("  (A -> corner C (opposite))".to_string());
        line("  G01 X[#160]  Y[#161]  F#141".to_string());
        line("  (C -> A)".to_string());
        line("  G01 X[-#160] Y[-#161] F#141".to_string());
        line("  (A -> C again (second traverse per step))".to_string());
        line("  G01 X[#160]  Y[#161]  F#141".to_string());
        line("  (return to center)".to_string());
        line("  G01 X[-#162] Y[-#163] F#141".to_string());
        line(String::new());
        line("  #140 = #140 + 1.".to_string());
        line("END2".to_string());
        line(String::new());

        // Spindle warmup loop: truncated target RPM, combined speed+start
        // on the first pass only
        line("(============ SPINDLE WARMUP ============)".to_string());
        line("G90".to_string());
        line("#210 = 1.".to_string());
        line("WHILE[#210 LE #202] DO3".to_string());
        line("  #211 = FIX[#200 + [#205 * [#210 - 1.]]] (target RPM)".to_string());
        line("  IF[#210 EQ 1.] THEN".to_string());
        line("    S#211 M03".to_string());
        line("  ELSE".to_string());
        line("    S#211".to_string());
        line("  ENDIF".to_string());
        line("  G04 X#203 (dwell time)".to_string());
        line("  #210 = #210 + 1.".to_string());
        line("END3".to_string());
        line("M05".to_string());
        if p.include_coolant {
            line("M09".to_string());
        }
        line(String::new());

        // Park
        line("(============ PARK ============)".to_string());
        line("G90 G53 G00 Z#104".to_string());
        line("M30".to_string());
        line("%".to_string());

        Ok(gcode)
    }
}
