//! Non-ASCII numeral characters
//!
//! The tables in `table.rs` are generated offline by
//! `tools/gen_unicode_numbers.py`; scanning the code point space at startup
//! would be far too slow. All three tables are sorted by code point.

mod table;

use std::sync::LazyLock;

static NUMERIC_CHARS: LazyLock<String> =
    LazyLock::new(|| table::NUMERIC.iter().map(|&(c, _)| c).collect());
static DIGIT_CHARS: LazyLock<String> =
    LazyLock::new(|| table::DIGITS.iter().map(|&(c, _)| c).collect());
static DECIMAL_CHARS: LazyLock<String> =
    LazyLock::new(|| table::DECIMALS.iter().map(|&(c, _)| c).collect());

/// Unicode version the tables were generated from.
pub fn unicode_version() -> &'static str {
    table::UNICODE_VERSION
}

/// Numeric value of a non-ASCII character, e.g. `'½'` is `0.5`.
pub fn numeric_value(c: char) -> Option<f64> {
    table::NUMERIC
        .binary_search_by_key(&c, |&(k, _)| k)
        .ok()
        .map(|i| table::NUMERIC[i].1)
}

/// Digit value of a non-ASCII character, e.g. `'²'` is `2`.
pub fn digit_value(c: char) -> Option<u32> {
    lookup(table::DIGITS, c)
}

/// Decimal digit value of a non-ASCII character, e.g. `'٣'` is `3`.
pub fn decimal_value(c: char) -> Option<u32> {
    lookup(table::DECIMALS, c)
}

fn lookup(table: &[(char, u8)], c: char) -> Option<u32> {
    table
        .binary_search_by_key(&c, |&(k, _)| k)
        .ok()
        .map(|i| u32::from(table[i].1))
}

/// Every character with a numeric value, concatenated.
pub fn numeric_chars() -> &'static str {
    &NUMERIC_CHARS
}

/// Every character with a digit value, concatenated.
pub fn digit_chars() -> &'static str {
    &DIGIT_CHARS
}

/// Every character with a decimal value, concatenated.
pub fn decimal_chars() -> &'static str {
    &DECIMAL_CHARS
}

/// `true` for ASCII digits and non-ASCII decimal digits.
pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || decimal_value(c).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(numeric_value('½'), Some(0.5));
        assert_eq!(numeric_value('Ⅻ'), Some(12.0));
        assert_eq!(digit_value('²'), Some(2));
        assert_eq!(decimal_value('²'), None);
        assert_eq!(decimal_value('٣'), Some(3));
        assert_eq!(decimal_value('５'), Some(5));
        assert_eq!(numeric_value('a'), None);
        assert_eq!(numeric_value('7'), None);
        // U+11F51 KAWI DIGIT ONE arrived after the tables
        assert_eq!(unicode_version(), "14.0.0");
        assert!(!is_decimal_digit('\u{11F51}'));
    }

    #[test]
    fn test_tables_are_sorted_and_non_ascii() {
        for pair in table::NUMERIC.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
        for pair in table::DIGITS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
        for pair in table::DECIMALS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
        assert!(numeric_chars().chars().all(|c| !c.is_ascii()));
    }

    #[test]
    fn test_subset_invariants() {
        for &(c, d) in table::DIGITS {
            assert_eq!(numeric_value(c), Some(f64::from(d)), "{c:?}");
        }
        for &(c, d) in table::DECIMALS {
            assert_eq!(digit_value(c), Some(u32::from(d)), "{c:?}");
        }
    }

    #[test]
    fn test_char_strings_match_tables() {
        assert_eq!(numeric_chars().chars().count(), table::NUMERIC.len());
        assert_eq!(digit_chars().chars().count(), table::DIGITS.len());
        assert_eq!(decimal_chars().chars().count(), table::DECIMALS.len());
        assert!(digit_chars().contains('²'));
        assert!(!decimal_chars().contains('²'));
    }

    #[test]
    fn test_is_decimal_digit() {
        assert!(is_decimal_digit('7'));
        assert!(is_decimal_digit('٣'));
        assert!(!is_decimal_digit('²'));
        assert!(!is_decimal_digit('x'));
    }
}
