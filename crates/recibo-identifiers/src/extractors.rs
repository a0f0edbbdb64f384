//! CPF / CNPJ extraction from free text

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::formatter::punctuate;
use crate::validators::{validate, IdentifierKind};

/// Identifier found in text, with byte positions of the matched span
///
/// Positions are `u32`; matches past 4 GiB of input are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ExtractedIdentifier {
    pub kind: IdentifierKind,
    /// Digits only
    pub value: String,
    pub display_value: String,
    pub start_index: u32,
    pub end_index: u32,
}

lazy_static! {
    // CNPJ first so a bare 14-digit run is not read as a CPF prefix.
    // Punctuation is optional, so both "11.222.333/0001-81" and
    // "11222333000181" match.
    static ref TAX_ID_REGEX: Regex = Regex::new(
        r"\b(?:(?P<org>[0-9]{2}\.?[0-9]{3}\.?[0-9]{3}/?[0-9]{4}-?[0-9]{2})|(?P<ind>[0-9]{3}\.?[0-9]{3}\.?[0-9]{3}-?[0-9]{2}))\b"
    ).unwrap();
}

fn is_separator(b: u8) -> bool {
    matches!(b, b'.' | b'/' | b'-')
}

/// True when the span `start..end` continues a longer number on either side,
/// e.g. `12.529.982.247-25` or `529.982.247-25-99`. `\b` alone treats the
/// punctuation as a boundary.
fn is_embedded(text: &[u8], start: usize, end: usize) -> bool {
    let before = |i: usize| start.checked_sub(i).map(|j| text[j]);
    let after = |i: usize| text.get(end + i - 1).copied();

    let continues = |next: Option<u8>, beyond: Option<u8>| match next {
        Some(b) if b.is_ascii_digit() => true,
        Some(b) if is_separator(b) => beyond.is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    };

    continues(before(1), before(2)) || continues(after(1), after(2))
}

/// Extract every valid CPF and CNPJ from `text`, in order of appearance.
///
/// Candidates that fail the checksum, or that sit inside a longer number,
/// are skipped.
pub fn extract_identifiers(text: &str) -> Vec<ExtractedIdentifier> {
    let mut results = Vec::new();
    let bytes = text.as_bytes();

    for cap in TAX_ID_REGEX.captures_iter(text) {
        let Some(m) = cap.name("org").or_else(|| cap.name("ind")) else {
            continue;
        };

        if is_embedded(bytes, m.start(), m.end()) {
            continue;
        }
        let (Ok(start_index), Ok(end_index)) = (u32::try_from(m.start()), u32::try_from(m.end()))
        else {
            continue;
        };

        let result = validate(m.as_str());
        if !result.is_valid {
            continue;
        }

        let display_value = punctuate(&result.sanitized_value, result.kind).unwrap_or_default();
        results.push(ExtractedIdentifier {
            kind: result.kind,
            value: result.sanitized_value,
            display_value,
            start_index,
            end_index,
        });
    }

    trace!(found = results.len(), "extracted tax identifiers");
    results
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn extract_identifiers_ffi(text: String) -> Vec<ExtractedIdentifier> {
    extract_identifiers(&text)
}

fn extract_kind(text: &str, kind: IdentifierKind) -> Vec<String> {
    extract_identifiers(text)
        .into_iter()
        .filter(|id| id.kind == kind)
        .map(|id| id.value)
        .collect()
}

/// Extract CPFs from text, as digit strings
pub fn extract_individuals(text: &str) -> Vec<String> {
    extract_kind(text, IdentifierKind::Individual)
}

/// Extract CNPJs from text, as digit strings
pub fn extract_organizations(text: &str) -> Vec<String> {
    extract_kind(text, IdentifierKind::Organization)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_punctuated() {
        let text = "Cliente: 529.982.247-25, empresa 11.222.333/0001-81.";
        let ids = extract_identifiers(text);
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[0].kind, IdentifierKind::Individual);
        assert_eq!(ids[0].value, "52998224725");
        assert_eq!(ids[0].display_value, "529.982.247-25");
        assert_eq!(ids[1].kind, IdentifierKind::Organization);
        assert_eq!(ids[1].value, "11222333000181");
    }

    #[test]
    fn test_extract_positions() {
        let text = "CPF 529.982.247-25";
        let ids = extract_identifiers(text);
        assert_eq!(ids.len(), 1);
        assert_eq!(ids[0].start_index, 4);
        assert_eq!(ids[0].end_index, text.len() as u32);
    }

    #[test]
    fn test_extract_bare_digits() {
        assert_eq!(extract_organizations("cnpj 11222333000181"), vec!["11222333000181"]);
        assert_eq!(extract_individuals("cpf 52998224725"), vec!["52998224725"]);
        // A bare CNPJ must not also show up as a CPF
        assert!(extract_individuals("11222333000181").is_empty());
    }

    #[test]
    fn test_extract_skips_invalid() {
        let text = "bad 529.982.247-26 and 000.000.000-00, good 111.444.777-35";
        assert_eq!(extract_individuals(text), vec!["11144477735"]);
    }

    #[test]
    fn test_extract_no_match_inside_longer_number() {
        assert!(extract_identifiers("order 5299822472512345").is_empty());
    }

    #[test]
    fn test_extract_no_match_inside_punctuated_number() {
        assert!(extract_identifiers("ref 12.529.982.247-25 and 529.982.247-25-99").is_empty());
        assert!(extract_identifiers("id 9/11.222.333/0001-81").is_empty());
    }

    #[test]
    fn test_extract_trailing_punctuation_is_not_a_number() {
        let ids = extract_individuals("CPF 529.982.247-25. Next: 111.444.777-35-");
        assert_eq!(ids, vec!["52998224725", "11144477735"]);
    }

    #[test]
    fn test_is_embedded() {
        let text = b"1.529";
        assert!(is_embedded(text, 2, 5));
        assert!(!is_embedded(b"x 529", 2, 5));
        assert!(!is_embedded(b"529", 0, 3));
        assert!(is_embedded(b"5291", 0, 3));
        assert!(!is_embedded(b"529-", 0, 3));
    }

    #[test]
    fn test_extract_empty() {
        assert!(extract_identifiers("").is_empty());
        assert!(extract_identifiers("no identifiers here").is_empty());
    }
}
