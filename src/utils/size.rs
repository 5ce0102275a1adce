//! Size formatting utilities.
//!
//! This module renders byte counts either as plain integers or scaled through
//! binary (1024-based) unit suffixes. Scaling and rounding are done in integer
//! arithmetic so the output never depends on floating point representation.

use std::cmp::Ordering;

/// Divisor between consecutive units.
const DIVISOR: u64 = 1024;

/// Unit suffixes, one per power of [`DIVISOR`].
const SUFFIXES: [char; 6] = ['B', 'K', 'M', 'G', 'T', 'P'];

/// Upper bound on decimal places; keeps the scaled numerator inside `u128`.
const MAX_DIGITS: u32 = 18;

/// Convert a byte count into a display string.
///
/// When `human` is false, or `size` is below 1024, the plain decimal value is
/// returned with no suffix. Otherwise the size is divided by 1024 until it
/// drops below 1024 and rendered with `digits` decimal places followed
/// directly by the unit letter. Rounding is half-to-even on the exact value.
///
/// Sizes that stay at or above 1024 after the last suffix keep dividing once
/// more and are still labelled `P`.
///
/// # Examples
///
/// ```
/// # use pdu_tools::utils::size_to_str;
/// assert_eq!(size_to_str(1023, true, 1), "1023");
/// assert_eq!(size_to_str(1536, true, 1), "1.5K");
/// assert_eq!(size_to_str(1536, false, 1), "1536");
/// ```
#[must_use]
pub fn size_to_str(size: u64, human: bool, digits: u32) -> String {
    if !human || size < DIVISOR {
        return size.to_string();
    }

    let (exponent, suffix) = unit_for(size);
    format!("{}{suffix}", scale_rounded(size, exponent, digits))
}

/// Pick the number of divisions and the matching suffix for `size`.
fn unit_for(size: u64) -> (u32, char) {
    let mut value = size;
    for (exponent, suffix) in (0u32..).zip(SUFFIXES) {
        if value < DIVISOR {
            return (exponent, suffix);
        }
        value /= DIVISOR;
    }

    (6, SUFFIXES[SUFFIXES.len() - 1])
}

/// Render `size / 1024^exponent` with `digits` decimal places, ties to even.
fn scale_rounded(size: u64, exponent: u32, digits: u32) -> String {
    let digits = digits.min(MAX_DIGITS);
    let scale = 10u128.pow(digits);
    let divisor = u128::from(DIVISOR).pow(exponent);
    let numerator = u128::from(size) * scale;

    let mut quotient = numerator / divisor;
    let remainder = numerator % divisor;
    match (remainder * 2).cmp(&divisor) {
        Ordering::Greater => quotient += 1,
        Ordering::Equal if quotient % 2 == 1 => quotient += 1,
        _ => {}
    }

    if digits == 0 {
        return quotient.to_string();
    }

    let width = digits as usize;
    format!("{}.{:0width$}", quotient / scale, quotient % scale)
}
