//! CNPJ (organization taxpayer identifier) checksum
//!
//! Fourteen digits: twelve base digits (eight for the company root, four for
//! the branch) followed by two mod-11 check digits.

use crate::sanitize::{all_same, digit_values};

/// Number of digits in a CNPJ.
pub const ORGANIZATION_LENGTH: usize = 14;

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

fn weighted_check(digits: &[u32]) -> Option<u32> {
    let weights: &[u32] = match digits.len() {
        12 => &FIRST_WEIGHTS,
        13 => &SECOND_WEIGHTS,
        _ => return None,
    };

    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    let remainder = sum % 11;
    Some(if remainder < 2 { 0 } else { 11 - remainder })
}

/// Compute the CNPJ check digit for a 12- or 13-digit base.
///
/// A 12-digit base yields the first check digit; the base followed by that
/// digit yields the second. Any other length, or a non-digit character,
/// gives `None`.
///
/// # Examples
/// ```
/// use recibo_identifiers::check_digit;
/// assert_eq!(check_digit("112223330001"), Some(8));
/// assert_eq!(check_digit("1122233300018"), Some(1));
/// assert_eq!(check_digit("123"), None);
/// ```
pub fn check_digit(base: &str) -> Option<u32> {
    weighted_check(&digit_values(base)?)
}

/// Derive both check digits for a twelve-digit CNPJ base.
pub fn organization_check_digits(base: &str) -> Option<[u32; 2]> {
    let mut digits = digit_values(base)?;
    if digits.len() != ORGANIZATION_LENGTH - 2 {
        return None;
    }

    let first = weighted_check(&digits)?;
    digits.push(first);
    let second = weighted_check(&digits)?;

    Some([first, second])
}

/// Validate a 14-digit CNPJ.
///
/// The input must already be sanitized. Sequences of one repeated digit are
/// rejected even when the arithmetic happens to hold.
///
/// # Examples
/// ```
/// use recibo_identifiers::check_organization;
/// assert!(check_organization("11222333000181"));
/// assert!(!check_organization("11222333000182"));
/// ```
pub fn check_organization(digits: &str) -> bool {
    let values = match digit_values(digits) {
        Some(v) if v.len() == ORGANIZATION_LENGTH => v,
        _ => return false,
    };

    if all_same(&values) {
        return false;
    }

    if weighted_check(&values[..12]) != Some(values[12]) {
        return false;
    }

    // values[12] now equals the first check digit, so the 13-digit prefix
    // is exactly the base the second digit is computed over
    weighted_check(&values[..13]) == Some(values[13])
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn check_organization_ffi(digits: String) -> bool {
    check_organization(&digits)
}
