//! Display helpers for asset cards and dashboard tiles.

/// Groups the integer part with commas: `1234567.891` -> `"1,234,567.89"`.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// `"$50,000"` for whole amounts, `"$1,880.25"` otherwise.
pub fn format_usd(value: f64) -> String {
    let decimals = if value.fract() == 0.0 { 0 } else { 2 };
    let grouped = format_grouped(value, decimals);
    match grouped.strip_prefix('-') {
        Some(unsigned) => format!("-${}", unsigned),
        None => format!("${}", grouped),
    }
}

/// Short form used on tiles: `1_260_000.0` -> `"1.3M"`.
pub fn format_compact(value: f64) -> String {
    const UNITS: [(f64, &str); 3] = [(1e9, "B"), (1e6, "M"), (1e3, "K")];
    UNITS
        .iter()
        .find(|(scale, _)| value.abs() >= *scale)
        .map(|(scale, suffix)| format!("{:.1}{}", value / scale, suffix))
        .unwrap_or_else(|| format!("{:.0}", value))
}

/// Signed change label: `3.214` -> `"+3.21%"`.
pub fn format_change_percent(change: f64) -> String {
    format!("{:+.2}%", change)
}

/// Ratio in [0, 1] as a whole percentage.
pub fn format_ratio_percent(ratio: f64) -> String {
    format!("{:.0}%", ratio.clamp(0.0, 1.0) * 100.0)
}
