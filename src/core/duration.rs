use crate::utils::error::Result;
use crate::utils::validation::validate_non_negative;
use std::time::Duration;

/// `"{h}h {m}m {s}s"` with every component present and unpadded.
/// Hours keep counting past a day (and past `u64::MAX`); fractional seconds are dropped.
pub fn format_duration(seconds: f64) -> Result<String> {
    // abs() 讓 -0.0 輸出 "0h" 而非 "-0h"
    let seconds = validate_non_negative("seconds", seconds)?.abs();

    // 保持 f64，避免轉成整數時飽和
    let hours = (seconds / 3600.0).floor();
    let minutes = ((seconds % 3600.0) / 60.0).floor();
    let secs = (seconds % 60.0).floor();

    Ok(format!("{}h {}m {}s", hours, minutes, secs))
}

/// Same shape as [`format_duration`] for a `std::time::Duration`; cannot fail.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!("{}h {}m {}s", total / 3600, (total % 3600) / 60, total % 60)
}
