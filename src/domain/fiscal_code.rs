//! Structural check for fiscal codes.
//!
//! Only the first eight characters are inspected: six consonants followed by
//! two digits. The remaining eight characters are accepted as they are and no
//! check digit is computed.

use thiserror::Error;
use unicode_categories::UnicodeCategories;

pub const FISCAL_CODE_LEN: usize = 16;

const CONSONANT_PREFIX_LEN: usize = 6;
const DIGIT_PAIR_END: usize = 8;
const VOWELS: &str = "AEIOU";

/// First rule a candidate code breaks.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FiscalCodeViolation {
    #[error("code is empty")]
    Empty,

    #[error("expected 16 characters, got {len}")]
    WrongLength { len: usize },

    #[error("character '{found}' at position {position} is not a letter")]
    NotALetter { position: usize, found: char },

    #[error("character '{found}' at position {position} is a vowel")]
    Vowel { position: usize, found: char },

    #[error("character '{found}' at position {position} is not a digit")]
    NotADigit { position: usize, found: char },
}

/// Checks `code` and reports the first violated rule.
///
/// Length is counted in characters of `code` as given. Positions are then read
/// from the uppercased code: 0..6 must be letters other than A, E, I, O, U and
/// 6..8 must be decimal digits (Unicode `Nd`). A character whose uppercase form
/// expands, such as `ß`, shifts every later position.
pub fn check_fiscal_code(code: &str) -> Result<(), FiscalCodeViolation> {
    if code.is_empty() {
        return Err(FiscalCodeViolation::Empty);
    }

    let len = code.chars().count();
    if len != FISCAL_CODE_LEN {
        return Err(FiscalCodeViolation::WrongLength { len });
    }

    let upper = code.to_uppercase();
    for (position, found) in upper.chars().enumerate().take(DIGIT_PAIR_END) {
        if position < CONSONANT_PREFIX_LEN {
            if !found.is_letter() {
                return Err(FiscalCodeViolation::NotALetter { position, found });
            }
            if is_vowel(found) {
                return Err(FiscalCodeViolation::Vowel { position, found });
            }
        } else if !found.is_number_decimal_digit() {
            return Err(FiscalCodeViolation::NotADigit { position, found });
        }
    }

    Ok(())
}

pub fn is_valid_fiscal_code(code: &str) -> bool {
    check_fiscal_code(code).is_ok()
}

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}
