//! Error types

use thiserror::Error;

use crate::validators::IdentifierKind;

/// Why an input could not be parsed into a [`crate::TaxIdentifier`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("no digits in input")]
    Empty,

    #[error("expected 11 (CPF) or 14 (CNPJ) digits, got {0}")]
    InvalidLength(usize),

    #[error("all digits are identical")]
    RepeatedDigits,

    #[error("{} check digits do not match", .kind.label())]
    ChecksumMismatch { kind: IdentifierKind },
}

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
