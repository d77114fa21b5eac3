//! Classification of ordered list marker tokens.
//!
//! The first marker of an ordered list decides how the whole list is numbered.
//! A token made only of digits is decimal; a token made only of lowercase or
//! only of uppercase letters is a Roman numeral if it evaluates as one, and a
//! letter sequence otherwise. `i.` therefore always starts a Roman list, never
//! a list at the ninth letter.

use serde::Serialize;

use crate::config::Config;
use crate::numerals::{letters_to_number, roman_to_number};

/// How the items of an ordered list are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumberingStyle {
    /// `1`, `2`, `3`
    #[default]
    Decimal,
    /// `a`, `b`, `c`
    LowerLatin,
    /// `A`, `B`, `C`
    UpperLatin,
    /// `i`, `ii`, `iii`
    LowerRoman,
    /// `I`, `II`, `III`
    UpperRoman,
}

impl NumberingStyle {
    /// The HTML `type` character for this style.
    pub fn marker_char(self) -> char {
        match self {
            NumberingStyle::Decimal => '1',
            NumberingStyle::LowerLatin => 'a',
            NumberingStyle::UpperLatin => 'A',
            NumberingStyle::LowerRoman => 'i',
            NumberingStyle::UpperRoman => 'I',
        }
    }

    /// Inverse of [`NumberingStyle::marker_char`].
    pub fn from_marker_char(ch: char) -> Option<Self> {
        match ch {
            '1' => Some(NumberingStyle::Decimal),
            'a' => Some(NumberingStyle::LowerLatin),
            'A' => Some(NumberingStyle::UpperLatin),
            'i' => Some(NumberingStyle::LowerRoman),
            'I' => Some(NumberingStyle::UpperRoman),
            _ => None,
        }
    }
}

/// Style and start index of an ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListNumbering {
    pub style: NumberingStyle,
    pub start: u64,
}

impl Default for ListNumbering {
    fn default() -> Self {
        Self {
            style: NumberingStyle::Decimal,
            start: 1,
        }
    }
}

/// Letter case of an alphabetic marker token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LetterCase {
    Lower,
    Upper,
}

/// Classify a marker token (without its trailing `.`).
///
/// Returns `None` when the token is not a pure run of digits, of lowercase
/// letters, or of uppercase letters, or when its value overflows. The caller
/// keeps [`ListNumbering::default`] in that case.
pub fn classify_marker(token: &str, config: &Config) -> Option<ListNumbering> {
    if token.is_empty() {
        return None;
    }

    if token.chars().all(|c| c.is_ascii_digit()) {
        let start = token.parse::<u64>().ok()?;
        return Some(ListNumbering {
            style: NumberingStyle::Decimal,
            start,
        });
    }

    if !config.extensions.fancy_lists {
        return None;
    }

    let case = if token.chars().all(|c| c.is_ascii_lowercase()) {
        LetterCase::Lower
    } else if token.chars().all(|c| c.is_ascii_uppercase()) {
        LetterCase::Upper
    } else {
        return None;
    };

    let lowered = token.to_ascii_lowercase();

    if config.extensions.roman_numerals
        && let Some(value) = roman_to_number(&lowered)
        && value > 0
    {
        let style = match case {
            LetterCase::Lower => NumberingStyle::LowerRoman,
            LetterCase::Upper => NumberingStyle::UpperRoman,
        };
        return Some(ListNumbering {
            style,
            start: value,
        });
    }

    let start = letters_to_number(&lowered)?;
    let style = match case {
        LetterCase::Lower => NumberingStyle::LowerLatin,
        LetterCase::Upper => NumberingStyle::UpperLatin,
    };
    Some(ListNumbering { style, start })
}
