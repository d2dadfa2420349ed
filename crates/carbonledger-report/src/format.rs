//! Display formatting for emissions figures.
//!
//! Formatting never feeds back into the stored totals.

/// Formats `value` with `decimals` fixed decimal places and comma thousands
/// separators, e.g. `1234567.891` with two decimals is `1,234,567.89`.
pub fn format_thousands(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    // Values that round to zero are shown unsigned
    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Formats a percentage with one decimal, or `n/a` when undefined.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}%"),
        None => "n/a".to_string(),
    }
}

/// Formats an optional ratio with `decimals` places, or `n/a`.
pub fn format_optional(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format_thousands(v, decimals))
        .unwrap_or_else(|| "n/a".to_string())
}

/// Whole kgCO2e with thousands separators, e.g. `55,000 kgCO₂e`.
pub fn format_emissions(value: f64) -> String {
    format!("{} kgCO₂e", format_thousands(value, 0))
}
