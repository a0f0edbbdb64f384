//! CPF (individual taxpayer identifier) checksum
//!
//! Eleven digits: nine base digits followed by two mod-11 check digits.

use crate::sanitize::{all_same, digit_values};

/// Number of digits in a CPF.
pub const INDIVIDUAL_LENGTH: usize = 11;

/// Reduce a weighted sum to a CPF check digit.
fn reduce(sum: u32) -> u32 {
    let check = 11 - sum % 11;
    if check >= 10 {
        0
    } else {
        check
    }
}

/// Check digit over `digits`, weighting the first digit with `digits.len() + 1`
/// and counting down to 2.
fn check_digit(digits: &[u32]) -> u32 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| d * (top - i as u32))
        .sum();
    reduce(sum)
}

/// Derive both check digits for a nine-digit CPF base.
///
/// Returns `None` unless `base` is exactly nine ASCII digits.
pub fn individual_check_digits(base: &str) -> Option<[u32; 2]> {
    let mut digits = digit_values(base)?;
    if digits.len() != INDIVIDUAL_LENGTH - 2 {
        return None;
    }

    let first = check_digit(&digits);
    digits.push(first);
    let second = check_digit(&digits);

    Some([first, second])
}

/// Validate an 11-digit CPF.
///
/// The input must already be sanitized. Sequences of one repeated digit
/// (`00000000000`, `11111111111`, ...) satisfy the arithmetic but are
/// placeholders, so they are rejected.
///
/// # Examples
/// ```
/// use recibo_identifiers::check_individual;
/// assert!(check_individual("52998224725"));
/// assert!(!check_individual("52998224726"));
/// assert!(!check_individual("11111111111"));
/// ```
pub fn check_individual(digits: &str) -> bool {
    let values = match digit_values(digits) {
        Some(v) if v.len() == INDIVIDUAL_LENGTH => v,
        _ => return false,
    };

    if all_same(&values) {
        return false;
    }

    let first = check_digit(&values[..9]);
    if first != values[9] {
        return false;
    }

    check_digit(&values[..10]) == values[10]
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn check_individual_ffi(digits: String) -> bool {
    check_individual(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cpf() {
        assert!(check_individual("52998224725"));
        assert!(check_individual("11144477735"));
    }

    #[test]
    fn test_wrong_check_digits() {
        assert!(!check_individual("52998224726")); // second digit off
        assert!(!check_individual("52998224715")); // first digit off
    }

    #[test]
    fn test_repeated_digits_rejected() {
        for d in 0..=9 {
            let cpf = d.to_string().repeat(11);
            assert!(!check_individual(&cpf), "{cpf} should be rejected");
        }
    }

    #[test]
    fn test_wrong_length_or_chars() {
        assert!(!check_individual(""));
        assert!(!check_individual("5299822472"));
        assert!(!check_individual("529982247250"));
        assert!(!check_individual("529.982.247-25"));
    }

    #[test]
    fn test_derive_check_digits() {
        assert_eq!(individual_check_digits("529982247"), Some([2, 5]));
        assert_eq!(individual_check_digits("111444777"), Some([3, 5]));
        assert_eq!(individual_check_digits("52998224"), None);
        assert_eq!(individual_check_digits("52998224x"), None);
    }

    #[test]
    fn test_remainder_zero_and_one_map_to_zero() {
        // sum % 11 == 0 gives 11, sum % 11 == 1 gives 10; both collapse to 0
        assert_eq!(reduce(22), 0);
        assert_eq!(reduce(23), 0);
        assert_eq!(reduce(24), 9);
    }
}
