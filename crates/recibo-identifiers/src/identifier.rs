//! Strongly typed CPF / CNPJ values
//!
//! [`TaxIdentifier`] can only be built from input that passed validation, so
//! holders of one never need to re-check it. Parsing reports which stage
//! rejected the input, unlike [`crate::validate`] which only says yes or no.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::error::IdentifierError;
use crate::formatter::punctuate;
use crate::individual::check_individual;
use crate::organization::check_organization;
use crate::sanitize::{all_same, digit_values, sanitize};
use crate::validators::{IdentifierKind, ValidationResult};

/// A validated CPF or CNPJ, stored as its digit string
///
/// Fields are private: parsing (`FromStr`, `TryFrom<&str>`, `Deserialize`)
/// is the only way to get one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaxIdentifier {
    kind: IdentifierKind,
    digits: String,
}

impl TaxIdentifier {
    pub fn kind(&self) -> IdentifierKind {
        self.kind
    }

    /// Digits only, no punctuation.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Punctuated form, e.g. `529.982.247-25`.
    pub fn formatted(&self) -> String {
        punctuate(&self.digits, self.kind).unwrap_or_default()
    }

    pub fn is_individual(&self) -> bool {
        self.kind == IdentifierKind::Individual
    }

    pub fn is_organization(&self) -> bool {
        self.kind == IdentifierKind::Organization
    }
}

impl FromStr for TaxIdentifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = sanitize(s);
        let kind = IdentifierKind::from_length(digits.len());
        let values = digit_values(&digits).unwrap_or_default();

        let rejection = if digits.is_empty() {
            Some(IdentifierError::Empty)
        } else if kind == IdentifierKind::None {
            Some(IdentifierError::InvalidLength(digits.len()))
        } else if all_same(&values) {
            Some(IdentifierError::RepeatedDigits)
        } else {
            None
        };
        if let Some(err) = rejection {
            debug!(len = digits.len(), error = %err, "rejected tax identifier");
            return Err(err);
        }

        let valid = match kind {
            IdentifierKind::Individual => check_individual(&digits),
            IdentifierKind::Organization => check_organization(&digits),
            IdentifierKind::None => false,
        };
        if !valid {
            let err = IdentifierError::ChecksumMismatch { kind };
            debug!(error = %err, "rejected tax identifier");
            return Err(err);
        }

        Ok(TaxIdentifier { kind, digits })
    }
}

impl TryFrom<&str> for TaxIdentifier {
    type Error = IdentifierError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for TaxIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl From<TaxIdentifier> for ValidationResult {
    fn from(id: TaxIdentifier) -> Self {
        ValidationResult {
            sanitized_value: id.digits,
            kind: id.kind,
            is_valid: true,
        }
    }
}

impl Serialize for TaxIdentifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.digits())
    }
}

impl<'de> Deserialize<'de> for TaxIdentifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
