//! Text measurements shared by the field rules.

/// True when `value` holds nothing but whitespace.
///
/// A byte order mark (U+FEFF) counts as whitespace here, as it does for
/// browser-side `trim()`.
pub fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

/// Length of `value` in UTF-16 code units.
///
/// Characters outside the Basic Multilingual Plane (most emoji) count as two.
pub fn text_length(value: &str) -> usize {
    value.encode_utf16().count()
}
