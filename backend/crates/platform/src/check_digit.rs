//! Check-Digit Validation
//!
//! Validation of the two national taxpayer identifier formats:
//! - Individual identifier: 11 digits, the last two are check digits
//! - Corporate identifier: 14 digits, the last two are check digits
//!
//! Both validators accept formatted or unformatted input (they normalize
//! first). Strict punctuation for corporate identifiers is a separate rule,
//! see [`is_formatted_corporate_id`].

use crate::digits::{digit_values, is_repeated_sequence, normalize};

// ============================================================================
// Constants
// ============================================================================

/// Number of digits of an individual taxpayer identifier
pub const INDIVIDUAL_ID_LENGTH: usize = 11;

/// Number of digits of a corporate taxpayer identifier
pub const CORPORATE_ID_LENGTH: usize = 14;

/// Display mask of a corporate identifier (`N` = ASCII digit)
pub const CORPORATE_ID_MASK: &str = "NN.NNN.NNN/NNNN-NN";

const CORPORATE_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CORPORATE_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

// ============================================================================
// Individual
// ============================================================================

/// Validate an individual taxpayer identifier
///
/// ```
/// use platform::check_digit::is_valid_individual_id;
///
/// assert!(is_valid_individual_id("123.456.789-09"));
/// assert!(is_valid_individual_id("12345678909"));
/// assert!(!is_valid_individual_id("111.111.111-11"));
/// ```
pub fn is_valid_individual_id(s: &str) -> bool {
    let digits = normalize(s);
    if digits.len() != INDIVIDUAL_ID_LENGTH || is_repeated_sequence(&digits) {
        return false;
    }

    let values = digit_values(&digits);
    individual_check_digit(&values[..9]) == values[9]
        && individual_check_digit(&values[..10]) == values[10]
}

/// Weights descend from `len + 1` down to 2
fn individual_check_digit(prefix: &[u32]) -> u32 {
    let top = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(idx, digit)| digit * (top - idx as u32))
        .sum();

    match (sum * 10) % 11 {
        10 => 0,
        r => r,
    }
}

// ============================================================================
// Corporate
// ============================================================================

/// Validate a corporate taxpayer identifier
///
/// ```
/// use platform::check_digit::is_valid_corporate_id;
///
/// assert!(is_valid_corporate_id("11.222.333/0001-81"));
/// assert!(is_valid_corporate_id("11222333000181"));
/// assert!(!is_valid_corporate_id("00000000000000"));
/// ```
pub fn is_valid_corporate_id(s: &str) -> bool {
    let digits = normalize(s);
    if digits.len() != CORPORATE_ID_LENGTH || is_repeated_sequence(&digits) {
        return false;
    }

    let values = digit_values(&digits);
    corporate_check_digit(&values, &CORPORATE_FIRST_WEIGHTS) == values[12]
        && corporate_check_digit(&values, &CORPORATE_SECOND_WEIGHTS) == values[13]
}

fn corporate_check_digit(values: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = values.iter().zip(weights).map(|(d, w)| d * w).sum();

    match sum % 11 {
        m if m < 2 => 0,
        m => 11 - m,
    }
}

/// Whether `s` is exactly in the `NN.NNN.NNN/NNNN-NN` display format
///
/// Says nothing about check digits.
pub fn is_formatted_corporate_id(s: &str) -> bool {
    s.chars().count() == CORPORATE_ID_MASK.len()
        && s.chars().zip(CORPORATE_ID_MASK.chars()).all(|(c, m)| match m {
            'N' => c.is_ascii_digit(),
            literal => c == literal,
        })
}

// ============================================================================
// Tests
// ============================================================================
