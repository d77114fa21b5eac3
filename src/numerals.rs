//! Conversions from list marker tokens to the integers they count from.

/// Value of a single lowercase Roman digit.
fn roman_digit(ch: char) -> Option<i64> {
    match ch {
        'i' => Some(1),
        'v' => Some(5),
        'x' => Some(10),
        'l' => Some(50),
        'c' => Some(100),
        'd' => Some(500),
        'm' => Some(1000),
        _ => None,
    }
}

/// Convert a run of lowercase letters to its bijective base-26 value
/// (`a` = 1, `z` = 26, `aa` = 27).
///
/// Returns `None` for empty input, for anything outside `a..=z`, and when the
/// value does not fit in a `u64`.
pub fn letters_to_number(letters: &str) -> Option<u64> {
    if letters.is_empty() {
        return None;
    }

    letters.chars().try_fold(0u64, |acc, ch| {
        if !ch.is_ascii_lowercase() {
            return None;
        }
        let digit = u64::from(ch as u8 - b'a' + 1);
        acc.checked_mul(26)?.checked_add(digit)
    })
}

/// Evaluate a lowercase Roman numeral.
///
/// Digits are scanned right to left; a digit smaller than the one to its right
/// is subtracted, everything else is added. No structural validation is done,
/// so some malformed numerals (`iiii`, `vx`) still produce a value.
///
/// Returns `None` if any character is not a Roman digit or the total is
/// negative. The empty string evaluates to `Some(0)`; callers treat zero as
/// "not Roman".
pub fn roman_to_number(roman: &str) -> Option<u64> {
    let mut total: i64 = 0;
    let mut prev = 0;

    for ch in roman.chars().rev() {
        let value = roman_digit(ch)?;
        if value < prev {
            total = total.checked_sub(value)?;
        } else {
            total = total.checked_add(value)?;
        }
        prev = value;
    }

    u64::try_from(total).ok()
}
