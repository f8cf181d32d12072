use crate::core::number::to_fixed;
use crate::utils::error::{FormatError, Result};
use crate::utils::validation::validate_non_negative;

pub const BYTE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];
pub const DEFAULT_BYTE_DECIMALS: i32 = 2;
/// Most fraction digits `format_bytes` accepts.
pub const MAX_BYTE_DECIMALS: i32 = 100;

const KIB: f64 = 1024.0;

/// Index into [`BYTE_UNITS`] for a positive byte count: `floor(log1024(bytes))`,
/// clamped so sub-byte values stay in `Bytes` and anything past a petabyte stays in `TB`.
pub fn unit_index(bytes: f64) -> usize {
    // 1024 的次方在 f64 中是精確值，逐級比較可避免 ln() 的誤差
    let mut index = 0;
    while index + 1 < BYTE_UNITS.len() && bytes >= KIB.powi(index as i32 + 1) {
        index += 1;
    }
    index
}

/// Human-readable size, e.g. `1536` → `"1.5 KB"`.
///
/// `decimals` below zero are treated as zero; above [`MAX_BYTE_DECIMALS`] they
/// are rejected. The rounded value is read back as a number, so `1.50` prints
/// as `1.5`, `1.00` as `1`, and digits past `f64` precision disappear.
pub fn format_bytes(bytes: f64, decimals: i32) -> Result<String> {
    let bytes = validate_non_negative("bytes", bytes)?;
    if bytes == 0.0 {
        return Ok("0 Bytes".to_string());
    }
    if decimals > MAX_BYTE_DECIMALS {
        return Err(FormatError::invalid_argument(
            "decimals",
            decimals,
            format!("must be at most {}", MAX_BYTE_DECIMALS),
        ));
    }

    let digits = decimals.max(0) as usize;
    let index = unit_index(bytes);
    let scaled = bytes / KIB.powi(index as i32);
    let fixed = to_fixed(scaled, digits);
    let rounded: f64 = fixed.parse().map_err(|_| {
        FormatError::invalid_argument("bytes", bytes, "rounded value is not a number")
    })?;

    Ok(format!("{} {}", rounded, BYTE_UNITS[index]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bytes_ignores_decimals() {
        assert_eq!(format_bytes(0.0, 2).unwrap(), "0 Bytes");
        assert_eq!(format_bytes(0.0, 0).unwrap(), "0 Bytes");
        assert_eq!(format_bytes(0.0, -4).unwrap(), "0 Bytes");
        assert_eq!(format_bytes(-0.0, 7).unwrap(), "0 Bytes");
    }

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(format_bytes(1.0, 2).unwrap(), "1 Bytes");
        assert_eq!(format_bytes(1023.0, 2).unwrap(), "1023 Bytes");
        assert_eq!(format_bytes(1024.0, 2).unwrap(), "1 KB");
        assert_eq!(format_bytes(1536.0, 2).unwrap(), "1.5 KB");
        assert_eq!(format_bytes(1_048_576.0, 2).unwrap(), "1 MB");
        assert_eq!(format_bytes(1_073_741_824.0, 2).unwrap(), "1 GB");
        assert_eq!(format_bytes(1_099_511_627_776.0, 2).unwrap(), "1 TB");
    }

    #[test]
    fn test_decimals() {
        assert_eq!(format_bytes(1234.0, 2).unwrap(), "1.21 KB");
        assert_eq!(format_bytes(1234.0, 0).unwrap(), "1 KB");
        assert_eq!(format_bytes(1234.0, -3).unwrap(), "1 KB");
        assert_eq!(format_bytes(1234.0, 4).unwrap(), "1.2051 KB");
        assert_eq!(format_bytes(1_500_000.0, 3).unwrap(), "1.431 MB");
    }

    #[test]
    fn test_zero_decimals_never_has_point() {
        for bytes in [1.0, 512.5, 1536.0, 999_999.0, 5.5e9, 3.3e13] {
            let out = format_bytes(bytes, 0).unwrap();
            assert!(!out.contains('.'), "{} produced {}", bytes, out);
        }
    }

    #[test]
    fn test_out_of_table_magnitudes_are_clamped() {
        assert_eq!(format_bytes(1024f64.powi(5), 2).unwrap(), "1024 TB");
        assert_eq!(format_bytes(0.5, 2).unwrap(), "0.5 Bytes");
    }

    #[test]
    fn test_unit_index_is_monotonic() {
        let mut previous = 0;
        let mut bytes = 1.0;
        while bytes < 1e16 {
            let index = unit_index(bytes);
            assert!(index >= previous);
            previous = index;
            bytes *= 1.7;
        }
        assert_eq!(previous, BYTE_UNITS.len() - 1);
    }

    #[test]
    fn test_high_precision_drops_binary_noise() {
        assert_eq!(format_bytes(1126.4, 17).unwrap(), "1.1 KB");
        assert_eq!(format_bytes(1126.4, 20).unwrap(), "1.1 KB");
        assert_eq!(format_bytes(1536.0, MAX_BYTE_DECIMALS).unwrap(), "1.5 KB");
    }

    #[test]
    fn test_decimals_above_limit_are_rejected() {
        let err = format_bytes(1536.0, 70_000).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("decimals"));
        assert!(format_bytes(1536.0, 50_000_000).is_err());
        assert!(format_bytes(1536.0, MAX_BYTE_DECIMALS + 1).is_err());
    }

    #[test]
    fn test_invalid_input() {
        assert!(format_bytes(-1.0, 2).unwrap_err().is_invalid_argument());
        assert!(format_bytes(f64::NAN, 2).is_err());
        assert!(format_bytes(f64::INFINITY, 2).is_err());
    }
}
