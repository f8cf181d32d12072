use crate::utils::error::{FormatError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects NaN and ±infinity.
pub fn validate_finite(argument: &str, value: f64) -> Result<f64> {
    if value.is_nan() {
        return Err(FormatError::invalid_argument(
            argument,
            value,
            "value is not a number",
        ));
    }
    if value.is_infinite() {
        return Err(FormatError::invalid_argument(
            argument,
            value,
            "value must be finite",
        ));
    }
    Ok(value)
}

/// Finite and `>= 0`. `-0.0` is accepted.
pub fn validate_non_negative(argument: &str, value: f64) -> Result<f64> {
    let value = validate_finite(argument, value)?;
    if value < 0.0 {
        return Err(FormatError::invalid_argument(
            argument,
            value,
            "value must not be negative",
        ));
    }
    Ok(value)
}

pub fn validate_non_empty_string<'a>(argument: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormatError::invalid_argument(
            argument,
            format!("{:?}", value),
            "value cannot be empty or whitespace-only",
        ));
    }
    Ok(trimmed)
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FormatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FormatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(FormatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(FormatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected one of: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
