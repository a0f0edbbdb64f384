//! Brazilian tax identifier validation and formatting for recibo
//!
//! This crate handles the two identifiers a receipt can carry for its client
//! or issuing company:
//! - CPF (individual, 11 digits) checksum validation
//! - CNPJ (organization, 14 digits) checksum validation
//! - Classification of raw form input by digit count
//! - Display formatting (`529.982.247-25`, `11.222.333/0001-81`)
//! - Extraction of identifiers from free text
//!
//! [`validate`] and [`format`] never fail; they return an "invalid" result
//! instead. [`TaxIdentifier`] parses the same input and explains rejections.

pub mod config;
pub mod error;
pub mod extractors;
pub mod formatter;
pub mod identifier;
pub mod individual;
pub mod organization;
pub mod sanitize;
pub mod validators;

pub use config::*;
pub use error::*;
pub use extractors::*;
pub use formatter::*;
pub use identifier::*;
pub use individual::*;
pub use organization::*;
pub use sanitize::*;
pub use validators::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
