// Pure display helpers derived from the dashboard payload

/// Year-over-year percentage change, signed, one decimal.
/// A zero previous period reads as `+0%` instead of dividing by zero.
pub fn calculate_change(current: &str, prev: &str) -> String {
    let current: f64 = current.parse().unwrap_or(0.0);
    let prev: f64 = prev.parse().unwrap_or(0.0);
    if prev == 0.0 {
        return "+0%".to_string();
    }
    let change = (current - prev) / prev * 100.0;
    format!("{change:+.1}%")
}

/// Average session duration arrives as a seconds string, fractional part
/// included; render as minutes and seconds.
pub fn format_duration(seconds: &str) -> String {
    let total = truncate_to_int(seconds);
    format!("{}m {:02}s", total / 60, total % 60)
}

/// Thousands separators for headline numbers.
pub fn format_number(value: &str) -> String {
    let n = truncate_to_int(value);
    let digits = n.abs().to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if n < 0 { format!("-{out}") } else { out }
}

// parseInt-style: integers as-is, float strings truncate, garbage is 0
fn truncate_to_int(value: &str) -> i64 {
    let value = value.trim();
    value
        .parse::<i64>()
        .or_else(|_| value.parse::<f64>().map(|v| v as i64))
        .unwrap_or(0)
}
