//! Display formatting for validated identifiers

use serde::{Deserialize, Serialize};

use crate::validators::{validate, IdentifierKind};

/// Outcome of [`format`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FormattedResult {
    /// Punctuated identifier; empty when invalid
    pub display_value: String,
    pub is_valid: bool,
}

/// Insert `.`, `/` and `-` into a sanitized digit string of the given kind.
///
/// CPF: `DDD.DDD.DDD-DD`. CNPJ: `DD.DDD.DDD/DDDD-DD`. Returns `None` when the
/// length does not match the kind. No checksum is run here.
pub fn punctuate(digits: &str, kind: IdentifierKind) -> Option<String> {
    if !digits.is_ascii() {
        return None;
    }

    match (kind, digits.len()) {
        (IdentifierKind::Individual, 11) => Some(format!(
            "{}.{}.{}-{}",
            &digits[0..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..11]
        )),
        (IdentifierKind::Organization, 14) => Some(format!(
            "{}.{}.{}/{}-{}",
            &digits[0..2],
            &digits[2..5],
            &digits[5..8],
            &digits[8..12],
            &digits[12..14]
        )),
        _ => None,
    }
}

/// Validate `raw` and, when valid, render it with its standard punctuation.
///
/// # Examples
/// ```
/// use recibo_identifiers::format;
/// assert_eq!(format("52998224725").display_value, "529.982.247-25");
/// assert_eq!(format("11222333000181").display_value, "11.222.333/0001-81");
/// assert!(!format("52998224726").is_valid);
/// ```
pub fn format(raw: &str) -> FormattedResult {
    let result = validate(raw);
    if !result.is_valid {
        return FormattedResult::default();
    }

    match punctuate(&result.sanitized_value, result.kind) {
        Some(display_value) => FormattedResult {
            display_value,
            is_valid: true,
        },
        None => FormattedResult::default(),
    }
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn format_ffi(raw: String) -> FormattedResult {
    format(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_individual() {
        let result = format("52998224725");
        assert_eq!(result.display_value, "529.982.247-25");
        assert!(result.is_valid);
    }

    #[test]
    fn test_format_organization() {
        let result = format("11222333000181");
        assert_eq!(result.display_value, "11.222.333/0001-81");
        assert!(result.is_valid);
    }

    #[test]
    fn test_format_reformats_messy_input() {
        assert_eq!(format(" 529-982 247.25 ").display_value, "529.982.247-25");
        assert_eq!(format("11/222/333 0001.81").display_value, "11.222.333/0001-81");
    }

    #[test]
    fn test_format_invalid() {
        assert_eq!(
            format("52998224726"),
            FormattedResult {
                display_value: String::new(),
                is_valid: false,
            }
        );
        assert_eq!(format(""), FormattedResult::default());
    }

    #[test]
    fn test_punctuate_length_mismatch() {
        assert_eq!(punctuate("52998224725", IdentifierKind::Organization), None);
        assert_eq!(punctuate("11222333000181", IdentifierKind::Individual), None);
        assert_eq!(punctuate("52998224725", IdentifierKind::None), None);
    }
}
