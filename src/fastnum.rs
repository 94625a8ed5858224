//! Fast conversion of numeral text into numbers
//!
//! Parsing never fails: text that is not a number is handed to a caller
//! supplied fallback instead. The standard library parsers do the real work;
//! a cheap first-character screen keeps obvious text off that path.

use crate::unicode_numbers;
use std::borrow::Cow;
use std::cmp::Ordering;

/// A parsed numeric key component.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i128),
    Float(f64),
}

impl Number {
    /// Numeric ordering across ints and floats.
    ///
    /// Int/float comparisons are exact rather than going through a lossy
    /// `i128 as f64` conversion, so the ordering stays transitive.
    pub fn total_cmp(&self, other: &Number) -> Ordering {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a.cmp(&b),
            (Number::Float(a), Number::Float(b)) => {
                a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
            }
            (Number::Int(a), Number::Float(b)) => cmp_int_float(a, b),
            (Number::Float(a), Number::Int(b)) => cmp_int_float(b, a).reverse(),
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Number::Float(f) if f.is_nan())
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.total_cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.total_cmp(other))
    }
}

fn cmp_int_float(i: i128, f: f64) -> Ordering {
    const BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0; // 2^127
    if f.is_nan() {
        return Ordering::Less;
    }
    if f >= BOUND {
        return Ordering::Less;
    }
    if f < -BOUND {
        return Ordering::Greater;
    }
    let whole = f.trunc();
    match i.cmp(&(whole as i128)) {
        Ordering::Equal if f > whole => Ordering::Less,
        Ordering::Equal if f < whole => Ordering::Greater,
        other => other,
    }
}

/// Result of a parse attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed<T> {
    Number(Number),
    Other(T),
}

impl<T> Parsed<T> {
    pub fn number(&self) -> Option<Number> {
        match self {
            Parsed::Number(n) => Some(*n),
            Parsed::Other(_) => None,
        }
    }
}

/// Could this text start a number the standard parsers accept?
#[inline]
fn may_be_number(s: &str) -> bool {
    match s.as_bytes().first() {
        Some(b) if b.is_ascii_digit() => true,
        Some(b'+' | b'-' | b'.') => true,
        // inf, infinity and nan in any case
        Some(b'i' | b'I' | b'n' | b'N') => true,
        _ => false,
    }
}

/// Replace non-ASCII decimal digits (`'٣'`, `'５'`) with their ASCII forms.
fn ascii_decimals(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        return Cow::Borrowed(s);
    }
    s.chars()
        .map(|c| {
            unicode_numbers::decimal_value(c)
                .and_then(|d| char::from_digit(d, 10))
                .unwrap_or(c)
        })
        .collect::<String>()
        .into()
}

/// The single character of `s`, if it has exactly one.
fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Parse a float, returning NaN as-is. Surrounding whitespace is ignored.
pub fn parse_float(s: &str) -> Option<f64> {
    let text = ascii_decimals(s.trim());
    if may_be_number(&text) {
        if let Ok(value) = text.parse::<f64>() {
            return Some(value);
        }
    }
    single_char(s).and_then(unicode_numbers::numeric_value)
}

/// Parse an integer; digit runs too wide for `i128` come back as floats.
pub fn parse_int(s: &str) -> Option<Number> {
    let text = ascii_decimals(s.trim());
    if may_be_number(&text) {
        match text.parse::<i128>() {
            Ok(value) => return Some(Number::Int(value)),
            Err(err) => {
                if matches!(
                    err.kind(),
                    std::num::IntErrorKind::PosOverflow | std::num::IntErrorKind::NegOverflow
                ) {
                    return text.parse::<f64>().ok().map(Number::Float);
                }
            }
        }
    }
    single_char(s)
        .and_then(unicode_numbers::digit_value)
        .map(|d| Number::Int(i128::from(d)))
}

/// Parse `s` as a float, or hand it to `fallback`.
///
/// A NaN result is replaced by `nan` when one is given.
pub fn try_float<T, F>(s: &str, nan: Option<f64>, fallback: F) -> Parsed<T>
where
    F: FnOnce(&str) -> T,
{
    match parse_float(s) {
        Some(value) if value.is_nan() => Parsed::Number(Number::Float(nan.unwrap_or(value))),
        Some(value) => Parsed::Number(Number::Float(value)),
        None => Parsed::Other(fallback(s)),
    }
}

/// Parse `s` as an integer, or hand it to `fallback`.
pub fn try_int<T, F>(s: &str, fallback: F) -> Parsed<T>
where
    F: FnOnce(&str) -> T,
{
    match parse_int(s) {
        Some(number) => Parsed::Number(number),
        None => Parsed::Other(fallback(s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn float(s: &str) -> Option<f64> {
        try_float(s, None, |_| ()).number().map(|n| n.as_f64())
    }

    #[test]
    fn test_float_forms() {
        assert_eq!(float("1.5"), Some(1.5));
        assert_eq!(float("-1.5"), Some(-1.5));
        assert_eq!(float("+.5"), Some(0.5));
        assert_eq!(float("5."), Some(5.0));
        assert_eq!(float("1e3"), Some(1000.0));
        assert_eq!(float("1E-2"), Some(0.01));
        assert_eq!(float("inf"), Some(f64::INFINITY));
        assert_eq!(float("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(float("abc"), None);
        assert_eq!(float("1.2.3"), None);
        assert_eq!(float("½"), Some(0.5));
        assert_eq!(float("½½"), None);
        assert_eq!(float(" 2.5 "), Some(2.5));
        assert_eq!(float("   "), None);
    }

    #[test]
    fn test_nan_substitution() {
        match try_float("nan", Some(f64::NEG_INFINITY), |_| ()) {
            Parsed::Number(Number::Float(v)) => assert_eq!(v, f64::NEG_INFINITY),
            other => panic!("unexpected {other:?}"),
        }
        match try_float("-NaN", None, |_| ()) {
            Parsed::Number(n) => assert!(n.is_nan()),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_int_forms() {
        assert_eq!(try_int("42", |_| ()).number(), Some(Number::Int(42)));
        assert_eq!(try_int("+7", |_| ()).number(), Some(Number::Int(7)));
        assert_eq!(try_int("-007", |_| ()).number(), Some(Number::Int(-7)));
        assert_eq!(try_int("٣", |_| ()).number(), Some(Number::Int(3)));
        assert_eq!(try_int("²", |_| ()).number(), Some(Number::Int(2)));
        assert_eq!(try_int("½", |_| ()).number(), None);
        assert_eq!(try_int("1.5", |_| ()).number(), None);
        assert_eq!(try_int("٣٤", |_| ()).number(), Some(Number::Int(34)));
        assert_eq!(float("１.５"), Some(1.5));
    }

    #[test]
    fn test_huge_int_becomes_float() {
        let digits = "9".repeat(60);
        match try_int(&digits, |_| ()) {
            Parsed::Number(Number::Float(v)) => assert!(v > 1e59),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_fallback_receives_original() {
        assert_eq!(
            try_int("abc", |s| s.to_uppercase()),
            Parsed::Other("ABC".to_string())
        );
        assert_eq!(try_float("x", None, str::len), Parsed::Other(1));
    }

    #[test]
    fn test_mixed_comparison() {
        assert_eq!(Number::Int(1), Number::Float(1.0));
        assert!(Number::Int(1) < Number::Float(1.5));
        assert!(Number::Float(-0.5) < Number::Int(0));
        assert!(Number::Int(i128::MAX) < Number::Float(f64::INFINITY));
        assert!(Number::Float(f64::NEG_INFINITY) < Number::Int(i128::MIN));
        assert_eq!(Number::Float(-0.0), Number::Float(0.0));
    }
}
