//! Digit Normalization
//!
//! Identifiers are typed by people with or without punctuation
//! (`123.456.789-09` vs `12345678909`). Everything that compares or
//! validates identifiers works on the digit-only form produced here.

/// Keep only the ASCII decimal digits of `s`, in order
///
/// ```
/// use platform::digits::normalize;
///
/// assert_eq!(normalize("123.456.789-09"), "12345678909");
/// assert_eq!(normalize("11.222.333/0001-81"), "11222333000181");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// True when every character equals the first one (`"00000000000"`)
///
/// An empty string is not considered a repeated sequence.
pub fn is_repeated_sequence(digits: &str) -> bool {
    let mut chars = digits.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}

/// Convert a normalized digit string into numeric values
pub(crate) fn digit_values(digits: &str) -> Vec<u32> {
    digits.chars().filter_map(|c| c.to_digit(10)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize("123.456.789-09"), "12345678909");
        assert_eq!(normalize(" 12 34 "), "1234");
        assert_eq!(normalize("abc"), "");
    }

    #[test]
    fn test_normalize_ignores_non_ascii_digits() {
        // Arabic-Indic digits are not part of identifiers
        assert_eq!(normalize("١٢٣4"), "4");
    }

    #[test]
    fn test_repeated_sequence() {
        assert!(is_repeated_sequence("11111111111"));
        assert!(is_repeated_sequence("7"));
        assert!(!is_repeated_sequence("11111111112"));
        assert!(!is_repeated_sequence(""));
    }

    #[test]
    fn test_digit_values() {
        assert_eq!(digit_values("1203"), vec![1, 2, 0, 3]);
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in ".*") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once.clone());
        }

        #[test]
        fn normalize_keeps_only_digits(s in ".*") {
            prop_assert!(normalize(&s).chars().all(|c| c.is_ascii_digit()));
        }
    }
}
