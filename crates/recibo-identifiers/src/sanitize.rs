//! Input sanitizing

/// Strip every character that is not an ASCII decimal digit.
///
/// Punctuation, whitespace, letters and non-ASCII digits are all dropped;
/// the remaining digits keep their relative order.
///
/// # Examples
/// ```
/// use recibo_identifiers::sanitize;
/// assert_eq!(sanitize("529.982.247-25"), "52998224725");
/// assert_eq!(sanitize("abc"), "");
/// ```
pub fn sanitize(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn sanitize_ffi(input: String) -> String {
    sanitize(&input)
}

/// Digits of an already-sanitized string, or `None` if it contains anything else.
pub(crate) fn digit_values(digits: &str) -> Option<Vec<u32>> {
    digits.chars().map(|c| c.to_digit(10)).collect()
}

/// True when every digit equals the first one.
pub(crate) fn all_same(digits: &[u32]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}
