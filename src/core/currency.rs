use crate::core::number::to_fixed;
use crate::utils::error::Result;
use crate::utils::validation::validate_finite;

/// Thresholds checked in order; the first one `value` reaches wins.
const SCALES: [(f64, &str); 3] = [
    (1_000_000_000.0, "B"),
    (1_000_000.0, "M"),
    (1_000.0, "K"),
];

/// Dollar amount with two fixed decimals, scaled to `K`/`M`/`B` from a thousand up.
///
/// Thresholds compare the signed value, so negative amounts are never scaled:
/// `-1_500_000` renders as `$-1500000.00`.
pub fn format_currency(value: f64) -> Result<String> {
    let value = validate_finite("value", value)?;

    for (threshold, suffix) in SCALES {
        if value >= threshold {
            return Ok(format!("${}{}", to_fixed(value / threshold, 2), suffix));
        }
    }

    Ok(format!("${}", to_fixed(value, 2)))
}
