//! Values that can be turned into sort keys
//!
//! [`Value`] is the closed set of input shapes the key generator dispatches
//! on. Rust types opt in through [`Sortable`]; anything else can describe
//! itself as [`Value::Opaque`], which key generation rejects.

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

/// An input value, borrowed from the caller where possible.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Str(Cow<'a, str>),
    Bytes(Cow<'a, [u8]>),
    Int(i128),
    Float(f64),
    Path(Cow<'a, Path>),
    Seq(Vec<Value<'a>>),
    /// A null entry; sorts like NaN.
    Missing,
    /// A value of an unsupported type, by type name.
    Opaque(String),
}

impl<'a> Value<'a> {
    pub fn opaque(type_name: &str) -> Self {
        Value::Opaque(type_name.to_string())
    }

    pub fn type_name(&self) -> &str {
        match self {
            Value::Str(_) => "str",
            Value::Bytes(_) => "bytes",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Path(_) => "Path",
            Value::Seq(_) => "list",
            Value::Missing => "NoneType",
            Value::Opaque(name) => name.as_str(),
        }
    }

    /// Borrow this value without copying any owned data.
    pub fn reborrow(&self) -> Value<'_> {
        match self {
            Value::Str(s) => Value::Str(Cow::Borrowed(&**s)),
            Value::Bytes(b) => Value::Bytes(Cow::Borrowed(&**b)),
            Value::Int(i) => Value::Int(*i),
            Value::Float(f) => Value::Float(*f),
            Value::Path(p) => Value::Path(Cow::Borrowed(&**p)),
            Value::Seq(items) => Value::Seq(items.iter().map(Value::reborrow).collect()),
            Value::Missing => Value::Missing,
            Value::Opaque(name) => Value::Opaque(name.clone()),
        }
    }

    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Str(s) => Value::Str(Cow::Owned(s.into_owned())),
            Value::Bytes(b) => Value::Bytes(Cow::Owned(b.into_owned())),
            Value::Int(i) => Value::Int(i),
            Value::Float(f) => Value::Float(f),
            Value::Path(p) => Value::Path(Cow::Owned(p.into_owned())),
            Value::Seq(items) => Value::Seq(items.into_iter().map(Value::into_owned).collect()),
            Value::Missing => Value::Missing,
            Value::Opaque(name) => Value::Opaque(name),
        }
    }

    /// Decode a byte value into text; other values pass through.
    pub fn decode(self, encoding: Encoding) -> Value<'a> {
        match self {
            Value::Bytes(bytes) => Value::Str(encoding.decode(bytes)),
            other => other,
        }
    }

    fn write_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "'{}'", s.escape_default()),
            other => write!(f, "{other}"),
        }
    }
}

/// Plain text rendering of a value, used to presort.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{s}"),
            Value::Bytes(b) => write!(f, "b'{}'", b.escape_ascii()),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write_float(f, *x),
            Value::Path(p) => write!(f, "{}", p.display()),
            Value::Seq(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    item.write_repr(f)?;
                }
                write!(f, "]")
            }
            Value::Missing => write!(f, "None"),
            Value::Opaque(name) => write!(f, "<{name} object>"),
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        write!(f, "nan")
    } else if x.is_infinite() {
        write!(f, "{}", if x > 0.0 { "inf" } else { "-inf" })
    } else if x.fract() == 0.0 && x.abs() < 1e16 {
        write!(f, "{x:.1}")
    } else {
        write!(f, "{x}")
    }
}

/// Text encodings understood by the byte decoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Ascii,
    Latin1,
}

impl Encoding {
    /// Decode bytes, replacing undecodable input with U+FFFD.
    pub fn decode<'a>(self, bytes: Cow<'a, [u8]>) -> Cow<'a, str> {
        match self {
            Encoding::Utf8 => match bytes {
                Cow::Borrowed(b) => String::from_utf8_lossy(b),
                Cow::Owned(b) => match String::from_utf8(b) {
                    Ok(s) => Cow::Owned(s),
                    Err(err) => Cow::Owned(String::from_utf8_lossy(err.as_bytes()).into_owned()),
                },
            },
            Encoding::Ascii => {
                if bytes.is_ascii() {
                    Encoding::Utf8.decode(bytes)
                } else {
                    Cow::Owned(
                        bytes
                            .iter()
                            .map(|&b| if b.is_ascii() { char::from(b) } else { '\u{FFFD}' })
                            .collect(),
                    )
                }
            }
            Encoding::Latin1 => Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}

/// A key function that decodes byte values with a fixed encoding.
#[derive(Debug, Clone, Copy)]
pub struct Decoder {
    encoding: Encoding,
}

impl Decoder {
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn decode<'a, T: Sortable + ?Sized>(&self, item: &'a T) -> Value<'a> {
        item.to_value().decode(self.encoding)
    }
}

/// A decoder for `encoding`, for use as a key function.
pub fn decoder(encoding: Encoding) -> Decoder {
    Decoder { encoding }
}

/// Decode byte values as UTF-8; everything else passes through.
pub fn as_utf8<T: Sortable + ?Sized>(item: &T) -> Value<'_> {
    item.to_value().decode(Encoding::Utf8)
}

/// Decode byte values as ASCII; everything else passes through.
pub fn as_ascii<T: Sortable + ?Sized>(item: &T) -> Value<'_> {
    item.to_value().decode(Encoding::Ascii)
}

/// Types that can be natural-sorted.
pub trait Sortable {
    fn to_value(&self) -> Value<'_>;
}

/// A byte string. Bare `[u8]` slices are not `Sortable`; wrap them in this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bytes<'a>(pub &'a [u8]);

impl Sortable for Bytes<'_> {
    fn to_value(&self) -> Value<'_> {
        Value::Bytes(Cow::Borrowed(self.0))
    }
}

impl Sortable for Value<'_> {
    fn to_value(&self) -> Value<'_> {
        self.reborrow()
    }
}

impl Sortable for str {
    fn to_value(&self) -> Value<'_> {
        Value::Str(Cow::Borrowed(self))
    }
}

impl Sortable for String {
    fn to_value(&self) -> Value<'_> {
        Value::Str(Cow::Borrowed(self.as_str()))
    }
}

impl Sortable for Cow<'_, str> {
    fn to_value(&self) -> Value<'_> {
        Value::Str(Cow::Borrowed(&**self))
    }
}

impl Sortable for Path {
    fn to_value(&self) -> Value<'_> {
        Value::Path(Cow::Borrowed(self))
    }
}

impl Sortable for PathBuf {
    fn to_value(&self) -> Value<'_> {
        Value::Path(Cow::Borrowed(self.as_path()))
    }
}

macro_rules! sortable_int {
    ($($t:ty),*) => {
        $(
            impl Sortable for $t {
                fn to_value(&self) -> Value<'_> {
                    Value::Int(i128::from(*self))
                }
            }
        )*
    };
}

sortable_int!(i8, i16, i32, i64, i128, u16, u32, u64, bool);

impl Sortable for isize {
    fn to_value(&self) -> Value<'_> {
        Value::Int(*self as i128)
    }
}

impl Sortable for usize {
    fn to_value(&self) -> Value<'_> {
        Value::Int(*self as i128)
    }
}

impl Sortable for u128 {
    fn to_value(&self) -> Value<'_> {
        i128::try_from(*self)
            .map(Value::Int)
            .unwrap_or(Value::Float(*self as f64))
    }
}

impl Sortable for f32 {
    fn to_value(&self) -> Value<'_> {
        Value::Float(f64::from(*self))
    }
}

impl Sortable for f64 {
    fn to_value(&self) -> Value<'_> {
        Value::Float(*self)
    }
}

impl<T: Sortable> Sortable for Option<T> {
    fn to_value(&self) -> Value<'_> {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Missing,
        }
    }
}

impl<T: Sortable + ?Sized> Sortable for &T {
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

impl<T: Sortable + ?Sized> Sortable for Box<T> {
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

impl<T: Sortable> Sortable for [T] {
    fn to_value(&self) -> Value<'_> {
        Value::Seq(self.iter().map(Sortable::to_value).collect())
    }
}

impl<T: Sortable, const N: usize> Sortable for [T; N] {
    fn to_value(&self) -> Value<'_> {
        self.as_slice().to_value()
    }
}

impl<T: Sortable> Sortable for Vec<T> {
    fn to_value(&self) -> Value<'_> {
        self.as_slice().to_value()
    }
}

impl<A: Sortable, B: Sortable> Sortable for (A, B) {
    fn to_value(&self) -> Value<'_> {
        Value::Seq(vec![self.0.to_value(), self.1.to_value()])
    }
}

impl<A: Sortable, B: Sortable, C: Sortable> Sortable for (A, B, C) {
    fn to_value(&self) -> Value<'_> {
        Value::Seq(vec![self.0.to_value(), self.1.to_value(), self.2.to_value()])
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Str(Cow::Borrowed(s))
    }
}

impl From<String> for Value<'_> {
    fn from(s: String) -> Self {
        Value::Str(Cow::Owned(s))
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(b: &'a [u8]) -> Self {
        Value::Bytes(Cow::Borrowed(b))
    }
}

impl From<Vec<u8>> for Value<'_> {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(Cow::Owned(b))
    }
}

impl<'a> From<&'a Path> for Value<'a> {
    fn from(p: &'a Path) -> Self {
        Value::Path(Cow::Borrowed(p))
    }
}

impl From<PathBuf> for Value<'_> {
    fn from(p: PathBuf) -> Self {
        Value::Path(Cow::Owned(p))
    }
}

impl From<i64> for Value<'_> {
    fn from(i: i64) -> Self {
        Value::Int(i128::from(i))
    }
}

impl From<i32> for Value<'_> {
    fn from(i: i32) -> Self {
        Value::Int(i128::from(i))
    }
}

impl From<f64> for Value<'_> {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Missing, Into::into)
    }
}

impl<'a> From<Vec<Value<'a>>> for Value<'a> {
    fn from(items: Vec<Value<'a>>) -> Self {
        Value::Seq(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sortable_shapes() {
        assert_eq!("a1".to_value(), Value::from("a1"));
        assert_eq!(5u32.to_value(), Value::Int(5));
        assert_eq!(Some(2.5f64).to_value(), Value::Float(2.5));
        assert_eq!(None::<i32>.to_value(), Value::Missing);
        assert_eq!(Bytes(b"x").to_value(), Value::from(&b"x"[..]));
        assert_eq!(
            ("a", 1).to_value(),
            Value::Seq(vec![Value::from("a"), Value::Int(1)])
        );
        assert_eq!(
            vec!["x", "y"].to_value(),
            Value::Seq(vec![Value::from("x"), Value::from("y")])
        );
        assert_eq!(u128::MAX.to_value(), Value::Float(u128::MAX as f64));
        assert_eq!(Path::new("/a").to_value().type_name(), "Path");
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(Value::from("a1").to_string(), "a1");
        assert_eq!(Value::Float(1.0).to_string(), "1.0");
        assert_eq!(Value::Float(1.45).to_string(), "1.45");
        assert_eq!(Value::Float(f64::NAN).to_string(), "nan");
        assert_eq!(Value::from(&b"ab\xff"[..]).to_string(), "b'ab\\xff'");
        assert_eq!(Value::Missing.to_string(), "None");
        assert_eq!(
            ("a", 2).to_value().to_string(),
            "['a', 2]"
        );
    }

    #[test]
    fn test_decoders() {
        let raw = Bytes(b"caf\xc3\xa9");
        assert_eq!(as_utf8(&raw), Value::from("café"));
        assert_eq!(as_ascii(&raw), Value::from("caf\u{FFFD}\u{FFFD}"));
        assert_eq!(decoder(Encoding::Latin1).decode(&raw), Value::from("cafÃ©"));
        assert_eq!(as_utf8("plain"), Value::from("plain"));
        assert_eq!(as_utf8(&7i64), Value::Int(7));
    }

    #[test]
    fn test_reborrow_and_into_owned() {
        let owned = Value::Seq(vec![Value::from("a".to_string()), Value::Int(1)]);
        assert_eq!(owned.reborrow(), owned);
        let detached: Value<'static> = Value::from("x").into_owned();
        assert_eq!(detached, Value::from("x"));
        assert_eq!(Value::opaque("Widget").type_name(), "Widget");
    }
}
