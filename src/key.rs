//! Sort keys and their tuple-style ordering
//!
//! Keys compare element by element; the first unequal pair decides and a
//! shorter prefix sorts first. Parts of different types are only comparable
//! when they are both numbers, so keys built from `bytes` and `str` values
//! never compare.

use crate::error::{NatsortError, NatsortResult};
use crate::fastnum::Number;
use std::cmp::Ordering;
use std::fmt;

/// First type mismatch met during a comparison, as `(left, right)` names.
pub type Mismatch = Option<(&'static str, &'static str)>;

/// One component of a sort key.
#[derive(Debug, Clone)]
pub enum KeyPart {
    Str(String),
    Bytes(Vec<u8>),
    /// Locale collation key of a text run.
    Collated(Vec<u8>),
    Num(Number),
    Tuple(Vec<KeyPart>),
}

impl KeyPart {
    pub fn str(s: impl Into<String>) -> Self {
        KeyPart::Str(s.into())
    }

    pub fn int(i: i128) -> Self {
        KeyPart::Num(Number::Int(i))
    }

    pub fn float(f: f64) -> Self {
        KeyPart::Num(Number::Float(f))
    }

    pub fn tuple(parts: impl IntoIterator<Item = KeyPart>) -> Self {
        KeyPart::Tuple(parts.into_iter().collect())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            KeyPart::Str(_) => "str",
            KeyPart::Bytes(_) => "bytes",
            KeyPart::Collated(_) => "collation_key",
            KeyPart::Num(Number::Int(_)) => "int",
            KeyPart::Num(Number::Float(_)) => "float",
            KeyPart::Tuple(_) => "tuple",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, KeyPart::Num(_))
    }

    fn rank(&self) -> u8 {
        match self {
            KeyPart::Num(_) => 0,
            KeyPart::Str(_) => 1,
            KeyPart::Collated(_) => 2,
            KeyPart::Bytes(_) => 3,
            KeyPart::Tuple(_) => 4,
        }
    }

    /// Total order that never fails.
    ///
    /// Parts of incomparable types are ordered by type, and the first such
    /// pair is recorded in `mismatch`.
    pub fn cmp_lenient(&self, other: &KeyPart, mismatch: &mut Mismatch) -> Ordering {
        match (self, other) {
            (KeyPart::Str(a), KeyPart::Str(b)) => a.cmp(b),
            (KeyPart::Bytes(a), KeyPart::Bytes(b)) => a.cmp(b),
            (KeyPart::Collated(a), KeyPart::Collated(b)) => a.cmp(b),
            (KeyPart::Num(a), KeyPart::Num(b)) => a.total_cmp(b),
            (KeyPart::Tuple(a), KeyPart::Tuple(b)) => cmp_parts_lenient(a, b, mismatch),
            _ => {
                if mismatch.is_none() {
                    *mismatch = Some((self.type_name(), other.type_name()));
                }
                self.rank().cmp(&other.rank())
            }
        }
    }

    pub fn try_cmp(&self, other: &KeyPart) -> NatsortResult<Ordering> {
        let mut mismatch = None;
        let ordering = self.cmp_lenient(other, &mut mismatch);
        match mismatch {
            Some((left, right)) => Err(NatsortError::incomparable(left, right)),
            None => Ok(ordering),
        }
    }
}

pub(crate) fn cmp_parts_lenient(a: &[KeyPart], b: &[KeyPart], mismatch: &mut Mismatch) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        match x.cmp_lenient(y, mismatch) {
            Ordering::Equal => continue,
            decided => return decided,
        }
    }
    a.len().cmp(&b.len())
}

impl PartialEq for KeyPart {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (KeyPart::Str(a), KeyPart::Str(b)) => a == b,
            (KeyPart::Bytes(a), KeyPart::Bytes(b)) => a == b,
            (KeyPart::Collated(a), KeyPart::Collated(b)) => a == b,
            (KeyPart::Num(a), KeyPart::Num(b)) => a == b,
            (KeyPart::Tuple(a), KeyPart::Tuple(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialOrd for KeyPart {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl From<&str> for KeyPart {
    fn from(s: &str) -> Self {
        KeyPart::Str(s.to_string())
    }
}

impl From<i128> for KeyPart {
    fn from(i: i128) -> Self {
        KeyPart::int(i)
    }
}

impl From<f64> for KeyPart {
    fn from(f: f64) -> Self {
        KeyPart::float(f)
    }
}

impl From<Number> for KeyPart {
    fn from(n: Number) -> Self {
        KeyPart::Num(n)
    }
}

impl fmt::Display for KeyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPart::Str(s) => write!(f, "{s:?}"),
            KeyPart::Bytes(b) | KeyPart::Collated(b) => write!(f, "b\"{}\"", b.escape_ascii()),
            KeyPart::Num(Number::Int(i)) => write!(f, "{i}"),
            KeyPart::Num(Number::Float(x)) => write!(f, "{x:?}"),
            KeyPart::Tuple(parts) => write_tuple(f, parts),
        }
    }
}

fn write_tuple(f: &mut fmt::Formatter<'_>, parts: &[KeyPart]) -> fmt::Result {
    write!(f, "(")?;
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{part}")?;
    }
    if parts.len() == 1 {
        write!(f, ",")?;
    }
    write!(f, ")")
}

/// A complete sort key: the outermost tuple.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SortKey(pub Vec<KeyPart>);

impl SortKey {
    pub fn new(parts: Vec<KeyPart>) -> Self {
        SortKey(parts)
    }

    pub fn parts(&self) -> &[KeyPart] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// This key as a nested tuple part.
    pub fn into_part(self) -> KeyPart {
        KeyPart::Tuple(self.0)
    }

    pub fn cmp_lenient(&self, other: &SortKey, mismatch: &mut Mismatch) -> Ordering {
        cmp_parts_lenient(&self.0, &other.0, mismatch)
    }

    /// Compare two keys, failing when they hold incomparable parts.
    pub fn try_cmp(&self, other: &SortKey) -> NatsortResult<Ordering> {
        let mut mismatch = None;
        let ordering = self.cmp_lenient(other, &mut mismatch);
        match mismatch {
            Some((left, right)) => Err(NatsortError::incomparable(left, right)),
            None => Ok(ordering),
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl From<Vec<KeyPart>> for SortKey {
    fn from(parts: Vec<KeyPart>) -> Self {
        SortKey(parts)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(parts: Vec<KeyPart>) -> SortKey {
        SortKey::new(parts)
    }

    #[test]
    fn test_tuple_ordering() {
        let a2 = key(vec!["a".into(), KeyPart::int(2)]);
        let a10 = key(vec!["a".into(), KeyPart::int(10)]);
        let a = key(vec!["a".into()]);
        assert!(a2 < a10);
        assert!(a < a2);
        assert_eq!(a2.try_cmp(&a2).expect("Failed to compare"), Ordering::Equal);
    }

    #[test]
    fn test_int_float_mix() {
        let i = key(vec!["".into(), KeyPart::int(1)]);
        let f = key(vec!["".into(), KeyPart::float(1.0)]);
        assert_eq!(i, f);
        assert!(key(vec![KeyPart::float(0.5)]) < key(vec![KeyPart::int(1)]));
    }

    #[test]
    fn test_incomparable_types() {
        let s = key(vec![KeyPart::str("ä")]);
        let b = key(vec![KeyPart::Bytes(b"b".to_vec())]);
        let err = s.try_cmp(&b).expect_err("bytes and str must not compare");
        assert!(matches!(
            err,
            NatsortError::IncomparableTypes {
                left: "str",
                right: "bytes"
            }
        ));
        assert_eq!(s.partial_cmp(&b), None);
        assert_ne!(s, b);
    }

    #[test]
    fn test_mismatch_after_decision_is_ignored() {
        // The first unequal pair decides before the mismatched pair is reached.
        let a = key(vec!["a".into(), KeyPart::int(1)]);
        let b = key(vec!["b".into(), KeyPart::str("x")]);
        assert_eq!(a.try_cmp(&b).expect("Failed to compare"), Ordering::Less);
    }

    #[test]
    fn test_lenient_order_records_first_mismatch() {
        let mut mismatch = None;
        let n = KeyPart::int(3);
        let s = KeyPart::str("x");
        assert_eq!(n.cmp_lenient(&s, &mut mismatch), Ordering::Less);
        assert_eq!(mismatch, Some(("int", "str")));
        assert_eq!(s.cmp_lenient(&n, &mut mismatch), Ordering::Greater);
        assert_eq!(mismatch, Some(("int", "str")));
    }

    #[test]
    fn test_display() {
        let k = key(vec![
            KeyPart::tuple([KeyPart::str("a")]),
            KeyPart::tuple([KeyPart::str(""), KeyPart::int(5), KeyPart::float(1.5)]),
        ]);
        assert_eq!(k.to_string(), r#"(("a",), ("", 5, 1.5))"#);
        assert_eq!(SortKey::default().to_string(), "()");
    }
}
