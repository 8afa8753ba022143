// File: crates/axis-core/src/label.rs
// Summary: Tick label formatting driven by the tick spacing.

/// Decimals beyond which a step is treated as irrational (log-axis ratios).
pub const MAX_DECIMALS: usize = 6;
/// Values at least this large switch to scientific notation.
pub const SCI_ABOVE: f64 = 1e6;
/// Steps finer than this switch to scientific notation.
pub const SCI_STEP_BELOW: f64 = 1e-4;

/// Fewest decimals that still tell ticks spaced by `step` apart.
///
/// `decimals_for_step(20.0) == 0`, `decimals_for_step(0.2) == 1`,
/// `decimals_for_step(0.25) == 2`.
pub fn decimals_for_step(step: f64) -> usize {
    let step = step.abs();
    if !step.is_finite() || step == 0.0 { return 0; }
    for d in 0..MAX_DECIMALS {
        let scaled = step * 10f64.powi(d as i32);
        if (scaled - scaled.round()).abs() <= 1e-6 * scaled.max(1.0) && scaled.round() > 0.0 {
            return d;
        }
    }
    MAX_DECIMALS
}

/// Label for a tick at `value` on an axis whose ticks are `step` apart.
pub fn format_tick(value: f64, step: f64) -> String {
    if !value.is_finite() { return value.to_string(); }
    let step = step.abs();
    // round-off residue at the zero tick
    let value = if value.abs() <= step * 1e-9 { 0.0 } else { value };
    if value == 0.0 && step < SCI_STEP_BELOW { return "0".to_string(); }
    if value.abs() >= SCI_ABOVE || (step > 0.0 && step < SCI_STEP_BELOW) {
        return format_scientific(value, step);
    }
    strip_negative_zero(format!("{:.*}", decimals_for_step(step), value))
}

/// Compact scientific form, `1e6`, `2.5e-7`: trailing zeros dropped.
fn format_scientific(value: f64, step: f64) -> String {
    let mut exp = value.abs().log10().floor() as i32;
    let d = decimals_for_step(step / 10f64.powi(exp));
    let mut mant = value / 10f64.powi(exp);
    let unit = 10f64.powi(d as i32);
    if ((mant * unit).round() / unit).abs() >= 10.0 {
        exp += 1;
        mant /= 10.0;
    }
    let mut m = format!("{:.*}", d, mant);
    if m.contains('.') {
        m = m.trim_end_matches('0').trim_end_matches('.').to_string();
    }
    format!("{}e{}", strip_negative_zero(m), exp)
}

fn strip_negative_zero(s: String) -> String {
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimals_from_step() {
        assert_eq!(decimals_for_step(20.0), 0);
        assert_eq!(decimals_for_step(1.0), 0);
        assert_eq!(decimals_for_step(0.5), 1);
        assert_eq!(decimals_for_step(0.1), 1);
        assert_eq!(decimals_for_step(0.25), 2);
        assert_eq!(decimals_for_step(0.05), 2);
        assert_eq!(decimals_for_step(2.5), 1);
        assert_eq!(decimals_for_step(std::f64::consts::PI), MAX_DECIMALS);
    }

    #[test]
    fn fixed_point_labels() {
        assert_eq!(format_tick(40.0, 20.0), "40");
        assert_eq!(format_tick(-0.4, 0.2), "-0.4");
        assert_eq!(format_tick(0.30000000000000004, 0.1), "0.3");
        assert_eq!(format_tick(1.25, 0.25), "1.25");
    }

    #[test]
    fn zero_never_prints_a_sign() {
        assert_eq!(format_tick(-1e-17, 0.1), "0.0");
        assert_eq!(format_tick(-0.0, 5.0), "0");
        assert_eq!(format_tick(-0.04, 1.0), "0");
    }

    #[test]
    fn scientific_for_large_values_and_fine_steps() {
        assert_eq!(format_tick(1_000_000.0, 200_000.0), "1e6");
        assert_eq!(format_tick(2_400_000.0, 200_000.0), "2.4e6");
        assert_eq!(format_tick(2.5e-7, 5e-8), "2.5e-7");
        assert_eq!(format_tick(0.0, 5e-8), "0");
    }

    #[test]
    fn scientific_mantissa_rolls_over() {
        assert_eq!(format_tick(9_999_999.0, 1_000_000.0), "1e7");
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert_eq!(format_tick(f64::INFINITY, 1.0), "inf");
        assert_eq!(format_tick(f64::NAN, 1.0), "NaN");
    }
}
