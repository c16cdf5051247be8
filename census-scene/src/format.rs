//! SI-prefixed number labels, e.g. `35M`, `5.0M`, `500k`.

const PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Split `x` (non-negative) into its first `precision` significant digits
/// and decimal exponent: `35_000_000` at precision 2 is `("35", 7)`.
fn decimal_parts(x: f64, precision: usize) -> (String, i32) {
    let formatted = format!("{:.*e}", precision.saturating_sub(1), x);
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    (digits, exponent.parse().unwrap_or(0))
}

/// Format `value` with `precision` significant digits and an SI suffix.
///
/// Trailing zeros are kept, so `0` is `0.0` and `5e6` is `5.0M` at
/// precision 2.
pub fn si_format(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let precision = precision.max(1);
    let sign = if value < 0.0 { "-" } else { "" };
    let (digits, exponent) = decimal_parts(value.abs(), precision);

    let prefix_exponent = (exponent as f64 / 3.0).floor().clamp(-8.0, 8.0) as i32;
    let i = exponent - prefix_exponent * 3 + 1;
    let n = digits.len() as i32;

    let body = if i == n {
        digits
    } else if i > n {
        format!("{}{}", digits, "0".repeat((i - n) as usize))
    } else if i > 0 {
        let (int, frac) = digits.split_at(i as usize);
        format!("{}.{}", int, frac)
    } else {
        // Below the smallest prefix: pad with leading zeros.
        let extra = (precision as i32 + i - 1).max(0) as usize;
        let (more, _) = decimal_parts(value.abs(), extra.max(1));
        format!("0.{}{}", "0".repeat((1 - i) as usize), more)
    };

    format!("{}{}{}", sign, body, PREFIXES[(8 + prefix_exponent) as usize])
}

/// Population axis labels: two significant digits.
pub fn population_tick(value: f64) -> String {
    si_format(value, 2)
}
