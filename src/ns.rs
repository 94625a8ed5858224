//! Option flags controlling how natural sort keys are built
//!
//! Every flag is an independent bit. A few names are shortcuts for common
//! combinations (`REAL`, `LOCALE`) and a few are zero-valued aliases kept for
//! readability (`INT`, `UNSIGNED`, `VERSION`, ...). Numbers are integers unless
//! `FLOAT` is set and unsigned unless `SIGNED` is set.

use crate::error::{NatsortError, NatsortResult};
use std::fmt;
use std::str::FromStr;

bitflags::bitflags! {
    /// A set of natural sort options.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Ns: u32 {
        /// Parse numbers as floats instead of integers.
        const FLOAT = 1 << 0;
        /// Treat a leading `+` or `-` as part of the number.
        const SIGNED = 1 << 1;
        /// Do not consume exponents (`1e5`) when parsing floats.
        const NOEXP = 1 << 2;
        /// Split strings as filesystem paths before parsing.
        const PATH = 1 << 3;
        /// Use the locale collation for non-numeric text.
        const LOCALEALPHA = 1 << 4;
        /// Use the locale thousands separator and decimal point.
        const LOCALENUM = 1 << 5;
        /// Compare text case-insensitively.
        const IGNORECASE = 1 << 6;
        /// Put lowercase letters before uppercase ones.
        const LOWERCASEFIRST = 1 << 7;
        /// Group upper and lowercase forms of each letter together.
        const GROUPLETTERS = 1 << 8;
        /// Put strings starting with a capital letter first (locale only).
        const UNGROUPLETTERS = 1 << 9;
        /// Sort NaN and missing values last instead of first.
        const NANLAST = 1 << 10;
        /// Use compatibility (NFKD) normalization instead of NFD.
        const COMPATIBILITYNORMALIZE = 1 << 11;
        /// Sort numbers after text instead of before.
        const NUMAFTER = 1 << 12;
        /// Sort by string form before the natural sort for deterministic ties.
        const PRESORT = 1 << 13;

        const REAL = Self::FLOAT.bits() | Self::SIGNED.bits();
        const LOCALE = Self::LOCALEALPHA.bits() | Self::LOCALENUM.bits();
        const CAPITALFIRST = Self::UNGROUPLETTERS.bits();
    }
}

impl Ns {
    pub const DEFAULT: Ns = Ns::empty();
    pub const INT: Ns = Ns::empty();
    pub const UNSIGNED: Ns = Ns::empty();
    pub const DIGIT: Ns = Ns::empty();
    pub const VERSION: Ns = Ns::empty();
    pub const TYPESAFE: Ns = Ns::empty();

    pub const I: Ns = Ns::INT;
    pub const U: Ns = Ns::UNSIGNED;
    pub const D: Ns = Ns::DIGIT;
    pub const V: Ns = Ns::VERSION;
    pub const T: Ns = Ns::TYPESAFE;
    pub const F: Ns = Ns::FLOAT;
    pub const S: Ns = Ns::SIGNED;
    pub const N: Ns = Ns::NOEXP;
    pub const P: Ns = Ns::PATH;
    pub const LA: Ns = Ns::LOCALEALPHA;
    pub const LN: Ns = Ns::LOCALENUM;
    pub const L: Ns = Ns::LOCALE;
    pub const IC: Ns = Ns::IGNORECASE;
    pub const LF: Ns = Ns::LOWERCASEFIRST;
    pub const G: Ns = Ns::GROUPLETTERS;
    pub const UG: Ns = Ns::UNGROUPLETTERS;
    pub const C: Ns = Ns::CAPITALFIRST;
    pub const NL: Ns = Ns::NANLAST;
    pub const CN: Ns = Ns::COMPATIBILITYNORMALIZE;
    pub const NA: Ns = Ns::NUMAFTER;
    pub const PS: Ns = Ns::PRESORT;
    pub const R: Ns = Ns::REAL;

    /// Build a flag set from raw bits, rejecting bits no option uses.
    pub fn from_raw(bits: u32) -> NatsortResult<Self> {
        Ns::from_bits(bits).ok_or_else(|| {
            NatsortError::invalid_configuration(&format!(
                "unrecognized option bits {:#x}",
                bits & !Ns::all().bits()
            ))
        })
    }

    /// Resolve the flag set into the independent choices it encodes.
    pub fn resolve(self) -> ResolvedConfig {
        let locale = match (
            self.contains(Ns::LOCALEALPHA),
            self.contains(Ns::LOCALENUM),
        ) {
            (false, false) => LocaleMode::Off,
            (true, false) => LocaleMode::Alpha,
            (false, true) => LocaleMode::Numeric,
            (true, true) => LocaleMode::Both,
        };

        ResolvedConfig {
            number: if self.contains(Ns::FLOAT) {
                NumberKind::Float
            } else {
                NumberKind::Int
            },
            sign: if self.contains(Ns::SIGNED) {
                SignMode::Signed
            } else {
                SignMode::Unsigned
            },
            exponent: !self.contains(Ns::NOEXP),
            path: self.contains(Ns::PATH),
            locale,
            case: CaseHandling {
                ignore_case: self.contains(Ns::IGNORECASE),
                lowercase_first: self.contains(Ns::LOWERCASEFIRST),
                group_letters: self.contains(Ns::GROUPLETTERS),
                capitalize_first: self.contains(Ns::UNGROUPLETTERS),
            },
            nan: if self.contains(Ns::NANLAST) {
                NanOrder::Last
            } else {
                NanOrder::First
            },
            presort: self.contains(Ns::PRESORT),
            numbers_after_text: self.contains(Ns::NUMAFTER),
            compatibility_normalize: self.contains(Ns::COMPATIBILITYNORMALIZE),
        }
    }

    fn from_short_name(name: &str) -> Option<Ns> {
        let flag = match name {
            "DEFAULT" | "INT" | "I" | "UNSIGNED" | "U" | "DIGIT" | "D" | "VERSION" | "V"
            | "TYPESAFE" | "T" => Ns::DEFAULT,
            "F" => Ns::F,
            "S" => Ns::S,
            "N" => Ns::N,
            "P" => Ns::P,
            "LA" => Ns::LA,
            "LN" => Ns::LN,
            "L" => Ns::L,
            "IC" => Ns::IC,
            "LF" => Ns::LF,
            "G" => Ns::G,
            "UG" => Ns::UG,
            "C" => Ns::C,
            "NL" => Ns::NL,
            "CN" => Ns::CN,
            "NA" => Ns::NA,
            "PS" => Ns::PS,
            "R" => Ns::R,
            _ => return None,
        };
        Some(flag)
    }
}

impl FromStr for Ns {
    type Err = NatsortError;

    /// Parse `"FLOAT|SIGNED"`, `"F|S"` or a raw integer such as `"3"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Ns::empty();
        for token in s.split('|').map(str::trim) {
            if token.is_empty() {
                return Err(NatsortError::invalid_configuration(&format!(
                    "empty option name in '{s}'"
                )));
            }
            if let Ok(bits) = token.parse::<u32>() {
                flags |= Ns::from_raw(bits)?;
                continue;
            }
            let name = token.to_ascii_uppercase();
            let flag = Ns::from_name(&name)
                .or_else(|| Ns::from_short_name(&name))
                .ok_or_else(|| {
                    NatsortError::invalid_configuration(&format!("unknown option: {token}"))
                })?;
            flags |= flag;
        }
        Ok(flags)
    }
}

impl fmt::Display for Ns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "DEFAULT");
        }
        bitflags::parser::to_writer(self, f)
    }
}

/// How numeric runs are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Int,
    Float,
}

/// Whether a leading sign belongs to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignMode {
    Unsigned,
    Signed,
}

/// Which parts of the locale take part in key generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleMode {
    Off,
    Alpha,
    Numeric,
    Both,
}

impl LocaleMode {
    pub fn alpha(self) -> bool {
        matches!(self, LocaleMode::Alpha | LocaleMode::Both)
    }

    pub fn numeric(self) -> bool {
        matches!(self, LocaleMode::Numeric | LocaleMode::Both)
    }
}

/// Where NaN and missing values land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NanOrder {
    First,
    Last,
}

impl NanOrder {
    /// The value substituted for NaN so that keys stay totally ordered.
    pub fn replacement(self) -> f64 {
        match self {
            NanOrder::First => f64::NEG_INFINITY,
            NanOrder::Last => f64::INFINITY,
        }
    }
}

/// Case-handling switches. All false means plain code point order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaseHandling {
    pub ignore_case: bool,
    pub lowercase_first: bool,
    pub group_letters: bool,
    pub capitalize_first: bool,
}

impl CaseHandling {
    pub fn is_default(&self) -> bool {
        *self == CaseHandling::default()
    }
}

/// The choices encoded by an [`Ns`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub number: NumberKind,
    pub sign: SignMode,
    pub exponent: bool,
    pub path: bool,
    pub locale: LocaleMode,
    pub case: CaseHandling,
    pub nan: NanOrder,
    pub presort: bool,
    pub numbers_after_text: bool,
    pub compatibility_normalize: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolution() {
        let resolved = Ns::DEFAULT.resolve();
        assert_eq!(resolved.number, NumberKind::Int);
        assert_eq!(resolved.sign, SignMode::Unsigned);
        assert!(resolved.exponent);
        assert!(!resolved.path);
        assert_eq!(resolved.locale, LocaleMode::Off);
        assert!(resolved.case.is_default());
        assert_eq!(resolved.nan, NanOrder::First);
    }

    #[test]
    fn test_derived_combinations() {
        assert_eq!(Ns::REAL, Ns::FLOAT | Ns::SIGNED);
        assert_eq!(Ns::LOCALE, Ns::LOCALEALPHA | Ns::LOCALENUM);
        assert_eq!(Ns::CAPITALFIRST, Ns::UNGROUPLETTERS);
        assert_eq!(Ns::VERSION, Ns::DEFAULT);

        let resolved = (Ns::REAL | Ns::NOEXP | Ns::LOCALEALPHA).resolve();
        assert_eq!(resolved.number, NumberKind::Float);
        assert_eq!(resolved.sign, SignMode::Signed);
        assert!(!resolved.exponent);
        assert_eq!(resolved.locale, LocaleMode::Alpha);
    }

    #[test]
    fn test_from_raw() {
        assert_eq!(Ns::from_raw(3).expect("Failed to accept REAL bits"), Ns::REAL);
        assert!(matches!(
            Ns::from_raw(1 << 20),
            Err(NatsortError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "FLOAT|SIGNED".parse::<Ns>().expect("Failed to parse long names"),
            Ns::REAL
        );
        assert_eq!(
            "f | s | ps".parse::<Ns>().expect("Failed to parse short names"),
            Ns::REAL | Ns::PRESORT
        );
        assert_eq!("version".parse::<Ns>().expect("Failed to parse alias"), Ns::DEFAULT);
        assert_eq!("8".parse::<Ns>().expect("Failed to parse raw bits"), Ns::PATH);
        assert!("FLAOT".parse::<Ns>().is_err());
        assert!("FLOAT||PATH".parse::<Ns>().is_err());
    }

    #[test]
    fn test_nan_replacement() {
        assert_eq!(NanOrder::First.replacement(), f64::NEG_INFINITY);
        assert_eq!(Ns::NANLAST.resolve().nan.replacement(), f64::INFINITY);
    }
}
