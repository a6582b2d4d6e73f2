//! SNILS (national insurance number) format and checksum validation.
//!
//! # Responsibility
//! - Accept the two official textual forms and normalize to 11 digits.
//! - Verify the weighted control sum for non-exempt base numbers.
//!
//! # Invariants
//! - A value returned by `validate_snils` is always exactly 11 ASCII digits.
//! - Base numbers below `1_001_998` are historically exempt from the
//!   checksum and accepted as-is.

use crate::model::teacher::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Base numbers below this value predate the checksum scheme.
const CHECKSUM_EXEMPT_BELOW: u32 = 1_001_998;

static PLAIN_FORM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{11}$").expect("plain SNILS pattern must compile"));
static GROUPED_FORM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{3}-\d{3}-\d{3} \d{2}$").expect("grouped SNILS pattern must compile"));

/// Validates a SNILS value and returns its normalized 11-digit form.
///
/// Accepted inputs are `DDDDDDDDDDD` or `DDD-DDD-DDD DD` (surrounding
/// whitespace ignored). The last two digits are the control number checked
/// against the weighted sum of the first nine.
///
/// # Errors
/// - Malformed textual shape.
/// - Control number mismatch for non-exempt base numbers.
pub fn validate_snils(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if !PLAIN_FORM.is_match(trimmed) && !GROUPED_FORM.is_match(trimmed) {
        return Err(ValidationError::new(
            "snils",
            "must match `DDDDDDDDDDD` or `DDD-DDD-DDD DD`",
        ));
    }

    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    verify_checksum(&digits)?;
    Ok(digits)
}

fn verify_checksum(digits: &str) -> Result<(), ValidationError> {
    // Both shape patterns guarantee exactly 11 digits here.
    let base: u32 = digits[..9]
        .parse()
        .map_err(|_| ValidationError::new("snils", "base number is not numeric"))?;
    if base < CHECKSUM_EXEMPT_BELOW {
        return Ok(());
    }

    let check: u32 = digits[9..]
        .parse()
        .map_err(|_| ValidationError::new("snils", "control number is not numeric"))?;

    let sum: u32 = digits
        .bytes()
        .take(9)
        .enumerate()
        .map(|(i, byte)| u32::from(byte - b'0') * (9 - i as u32))
        .sum();

    let mut control = sum % 101;
    if control == 100 {
        control = 0;
    }

    if control != check {
        return Err(ValidationError::new("snils", "checksum mismatch"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_snils;

    #[test]
    fn grouped_form_is_normalized_to_digits() {
        assert_eq!(
            validate_snils("112-233-445 95").expect("known-good SNILS"),
            "11223344595"
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(
            validate_snils("  11223344595 ").expect("plain form with padding"),
            "11223344595"
        );
    }

    #[test]
    fn partial_separators_are_rejected() {
        assert!(validate_snils("112-233-44595").is_err());
        assert!(validate_snils("112 233 445 95").is_err());
        assert!(validate_snils("1122334459").is_err());
    }

    #[test]
    fn exempt_base_skips_checksum() {
        // Base 000100199 < 1001998, so the control digits are not verified.
        assert!(validate_snils("000-100-199 99").is_ok());
        assert!(validate_snils("00010019900").is_ok());
    }
}
