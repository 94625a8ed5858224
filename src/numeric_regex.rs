//! Tokenizers that split text into alternating non-numeric and numeric runs

use crate::error::NatsortResult;
use crate::ns::{NumberKind, Ns, SignMode};
use crate::unicode_numbers;
use regex::Regex;
use std::fmt;

/// The six numeral grammars, by number kind, sign and exponent handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegexKind {
    IntUnsigned,
    IntSigned,
    FloatUnsignedNoexp,
    FloatUnsignedExp,
    FloatSignedNoexp,
    FloatSignedExp,
}

impl RegexKind {
    /// Pick the grammar selected by an option set.
    pub fn choose(alg: Ns) -> Self {
        let resolved = alg.resolve();
        let signed = resolved.sign == SignMode::Signed;
        match (resolved.number, signed, resolved.exponent) {
            (NumberKind::Int, false, _) => RegexKind::IntUnsigned,
            (NumberKind::Int, true, _) => RegexKind::IntSigned,
            (NumberKind::Float, false, false) => RegexKind::FloatUnsignedNoexp,
            (NumberKind::Float, false, true) => RegexKind::FloatUnsignedExp,
            (NumberKind::Float, true, false) => RegexKind::FloatSignedNoexp,
            (NumberKind::Float, true, true) => RegexKind::FloatSignedExp,
        }
    }

    pub fn is_float(self) -> bool {
        !matches!(self, RegexKind::IntUnsigned | RegexKind::IntSigned)
    }

    /// The pattern text for this grammar with `decimal` as the decimal point.
    pub fn pattern(self, decimal: char) -> String {
        let d = regex::escape(decimal.encode_utf8(&mut [0u8; 4]));
        // Decimal digits come from the numeral table rather than `\d`, so
        // every run the tokenizer takes is one the parser can read.
        let dec = format!("[0-9{}]", regex::escape(unicode_numbers::decimal_chars()));
        let float_num = format!(r"(?:{dec}+{d}?{dec}*|{d}{dec}+)");
        let exp = r"(?:[eE][-+]?[0-9]+)?";
        let digits = regex::escape(unicode_numbers::digit_chars());
        let numeric = regex::escape(unicode_numbers::numeric_chars());
        match self {
            RegexKind::IntUnsigned => format!(r"({dec}+|[{digits}])"),
            RegexKind::IntSigned => format!(r"([-+]?{dec}+|[{digits}])"),
            RegexKind::FloatUnsignedNoexp => format!(r"({float_num}|[{numeric}])"),
            RegexKind::FloatUnsignedExp => format!(r"({float_num}{exp}|[{numeric}])"),
            RegexKind::FloatSignedNoexp => format!(r"([-+]?{float_num}|[{numeric}])"),
            RegexKind::FloatSignedExp => format!(r"([-+]?{float_num}{exp}|[{numeric}])"),
        }
    }
}

impl fmt::Display for RegexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RegexKind::IntUnsigned => "int-unsigned",
            RegexKind::IntSigned => "int-signed",
            RegexKind::FloatUnsignedNoexp => "float-unsigned-noexp",
            RegexKind::FloatUnsignedExp => "float-unsigned-exp",
            RegexKind::FloatSignedNoexp => "float-signed-noexp",
            RegexKind::FloatSignedExp => "float-signed-exp",
        };
        write!(f, "{name}")
    }
}

/// A compiled numeral tokenizer.
#[derive(Debug, Clone)]
pub struct NumericRegex {
    kind: RegexKind,
    decimal: char,
    regex: Regex,
}

impl NumericRegex {
    pub fn new(kind: RegexKind, decimal: char) -> NatsortResult<Self> {
        let regex = Regex::new(&kind.pattern(decimal))?;
        Ok(Self {
            kind,
            decimal,
            regex,
        })
    }

    /// Tokenizer for the grammar `alg` selects.
    pub fn for_alg(alg: Ns, decimal: char) -> NatsortResult<Self> {
        Self::new(RegexKind::choose(alg), decimal)
    }

    pub fn kind(&self) -> RegexKind {
        self.kind
    }

    pub fn decimal(&self) -> char {
        self.decimal
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Split `s` into `text, number, text, ..., text`.
    ///
    /// The result always has odd length; text runs may be empty.
    pub fn split<'t>(&self, s: &'t str) -> Vec<&'t str> {
        let mut parts = Vec::new();
        let mut last = 0;
        for m in self.regex.find_iter(s) {
            parts.push(&s[last..m.start()]);
            parts.push(m.as_str());
            last = m.end();
        }
        parts.push(&s[last..]);
        parts
    }

    /// The numeric runs of `s`, in order.
    pub fn find_numbers<'a>(&'a self, s: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.regex.find_iter(s).map(|m| m.as_str())
    }
}

/// The tokenizer pattern `alg` selects, with `.` as the decimal point.
pub fn numeric_regex_chooser(alg: Ns) -> String {
    RegexKind::choose(alg).pattern('.')
}
