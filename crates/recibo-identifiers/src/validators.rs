//! Classification and validation of raw identifier input

use serde::{Deserialize, Serialize};

use crate::individual::{check_individual, INDIVIDUAL_LENGTH};
use crate::organization::{check_organization, ORGANIZATION_LENGTH};
use crate::sanitize::sanitize;

/// Which identifier scheme a digit string belongs to, decided by its length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum IdentifierKind {
    /// CPF, 11 digits
    Individual,
    /// CNPJ, 14 digits
    Organization,
    /// Neither length matched, or validation failed
    #[default]
    None,
}

impl IdentifierKind {
    /// Classify a sanitized digit string by length alone.
    pub fn from_length(len: usize) -> Self {
        match len {
            INDIVIDUAL_LENGTH => IdentifierKind::Individual,
            ORGANIZATION_LENGTH => IdentifierKind::Organization,
            _ => IdentifierKind::None,
        }
    }

    /// Short label used on the receipt ("CPF" / "CNPJ").
    pub fn label(&self) -> &'static str {
        match self {
            IdentifierKind::Individual => "CPF",
            IdentifierKind::Organization => "CNPJ",
            IdentifierKind::None => "",
        }
    }
}

/// Outcome of [`validate`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ValidationResult {
    /// Digits only; empty when invalid
    pub sanitized_value: String,
    pub kind: IdentifierKind,
    pub is_valid: bool,
}

impl ValidationResult {
    /// The sentinel returned for anything that is not a valid CPF or CNPJ.
    pub fn invalid() -> Self {
        Self::default()
    }

    fn valid(sanitized_value: String, kind: IdentifierKind) -> Self {
        Self {
            sanitized_value,
            kind,
            is_valid: true,
        }
    }
}

/// Sanitize `raw`, classify it by length, and run the matching checksum.
///
/// Never fails: anything that is not a valid CPF or CNPJ comes back as
/// [`ValidationResult::invalid`].
///
/// # Examples
/// ```
/// use recibo_identifiers::{validate, IdentifierKind};
/// let result = validate("529.982.247-25");
/// assert!(result.is_valid);
/// assert_eq!(result.kind, IdentifierKind::Individual);
/// assert_eq!(result.sanitized_value, "52998224725");
/// ```
pub fn validate(raw: &str) -> ValidationResult {
    let digits = sanitize(raw);

    match IdentifierKind::from_length(digits.len()) {
        IdentifierKind::Individual if check_individual(&digits) => {
            ValidationResult::valid(digits, IdentifierKind::Individual)
        }
        IdentifierKind::Organization if check_organization(&digits) => {
            ValidationResult::valid(digits, IdentifierKind::Organization)
        }
        _ => ValidationResult::invalid(),
    }
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn validate_ffi(raw: String) -> ValidationResult {
    validate(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_individual() {
        let result = validate("529.982.247-25");
        assert_eq!(
            result,
            ValidationResult {
                sanitized_value: "52998224725".to_string(),
                kind: IdentifierKind::Individual,
                is_valid: true,
            }
        );
    }

    #[test]
    fn test_validate_organization() {
        let result = validate("11.222.333/0001-81");
        assert!(result.is_valid);
        assert_eq!(result.kind, IdentifierKind::Organization);
        assert_eq!(result.sanitized_value, "11222333000181");
    }

    #[test]
    fn test_validate_invalid_is_sentinel() {
        assert_eq!(validate("52998224726"), ValidationResult::invalid());
        assert_eq!(validate("000.000.000-00"), ValidationResult::invalid());
        assert_eq!(validate(""), ValidationResult::invalid());
        assert_eq!(validate("1234"), ValidationResult::invalid());
    }

    #[test]
    fn test_from_length() {
        assert_eq!(IdentifierKind::from_length(11), IdentifierKind::Individual);
        assert_eq!(IdentifierKind::from_length(14), IdentifierKind::Organization);
        assert_eq!(IdentifierKind::from_length(0), IdentifierKind::None);
        assert_eq!(IdentifierKind::from_length(12), IdentifierKind::None);
    }

    #[test]
    fn test_kind_serde() {
        let json = serde_json::to_string(&IdentifierKind::Organization).unwrap();
        assert_eq!(json, "\"organization\"");
        let kind: IdentifierKind = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(kind, IdentifierKind::None);
    }

    #[test]
    fn test_label() {
        assert_eq!(IdentifierKind::Individual.label(), "CPF");
        assert_eq!(IdentifierKind::Organization.label(), "CNPJ");
        assert_eq!(IdentifierKind::None.label(), "");
    }
}
