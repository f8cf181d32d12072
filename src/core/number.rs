use crate::core::locale::{Grouping, Locale};
use crate::utils::error::Result;
use crate::utils::validation::validate_finite;

/// Most fraction digits [`format_number`] keeps.
pub const MAX_FRACTION_DIGITS: usize = 3;

/// Fixed-point rendering with `digits` fraction digits.
///
/// Exact halfway cases round away from zero (`2.5` → `3`, `0.125` → `0.13`),
/// everything else rounds to the nearest representable decimal. `-0` is
/// rendered without its sign.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value == 0.0 {
        return format!("{:.*}", digits, 0.0_f64);
    }

    if is_exact_tie(value, digits) {
        // 往外推一個 ulp，避免 std 的 round-half-to-even
        let nudged = f64::from_bits(value.abs().to_bits() + 1).copysign(value);
        format!("{:.*}", digits, nudged)
    } else {
        format!("{:.*}", digits, value)
    }
}

/// True when `value * 10^digits` lies exactly halfway between two integers.
///
/// With `value = m * 2^e`, that product doubled is `m * 5^digits * 2^(e + 1 + digits)`,
/// which is an odd integer only when the lowest set bit of `m` cancels the power of two.
fn is_exact_tie(value: f64, digits: usize) -> bool {
    if value == 0.0 || !value.is_finite() {
        return false;
    }

    let bits = value.to_bits();
    let biased_exponent = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased_exponent - 1075)
    };

    mantissa.trailing_zeros() as i64 + exponent + 1 + digits as i64 == 0
}

/// `"1.500"` → `"1.5"`, `"2.000"` → `"2"`; strings without a fraction are untouched.
pub fn strip_trailing_zeros(fixed: &str) -> &str {
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed
    }
}

/// Inserts the locale's group separator into a run of ASCII digits.
pub fn group_digits(digits: &str, locale: &Locale) -> String {
    let len = digits.len();
    if len < 3 + locale.min_grouping_digits {
        return digits.to_string();
    }

    let (head, last_group) = digits.split_at(len - 3);
    let size = match locale.grouping {
        Grouping::Standard => 3,
        Grouping::Indian => 2,
    };

    let mut groups = vec![last_group];
    let mut rest = head;
    while rest.len() > size {
        let (front, group) = rest.split_at(rest.len() - size);
        groups.push(group);
        rest = front;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();
    groups.join(locale.group_separator)
}

/// Rounds the shortest round-trip decimal of `|value|` to `digits` fraction
/// digits, halves away from zero, trailing zeros dropped.
///
/// Works on the decimal text rather than the binary value, so `1.0005` → `"1.001"`.
fn round_shortest(value: f64, digits: usize) -> String {
    let shortest = format!("{}", value.abs());
    let (integer, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    if fraction.len() <= digits {
        return shortest;
    }

    let round_up = fraction.as_bytes()[digits] >= b'5';
    let mut kept: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().take(digits))
        .collect();
    if round_up {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let mut rounded = String::with_capacity(kept.len() + 1);
    rounded.extend(kept[..split].iter().map(|&b| b as char));
    rounded.push('.');
    rounded.extend(kept[split..].iter().map(|&b| b as char));
    strip_trailing_zeros(&rounded).to_string()
}

/// Locale-aware number rendering: at most three fraction digits, grouped
/// integer part, locale decimal separator.
///
/// Negative values keep their sign even when they round to zero (`-0.0001` → `"-0"`).
pub fn format_number(value: f64, locale: &Locale) -> Result<String> {
    let value = validate_finite("value", value)?;

    let unsigned = round_shortest(value, MAX_FRACTION_DIGITS);
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned.as_str(), ""));

    let mut out = String::with_capacity(unsigned.len() + unsigned.len() / 3 + 1);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_digits(integer, locale));
    if !fraction.is_empty() {
        out.push_str(locale.decimal_separator);
        out.push_str(fraction);
    }
    Ok(out)
}

/// [`format_number`] with the locale detected from the host environment.
pub fn format_number_default(value: f64) -> Result<String> {
    format_number(value, &Locale::detect())
}
