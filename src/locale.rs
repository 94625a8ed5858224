//! Locale-aware collation and number formatting
//!
//! The key generator never touches process-wide locale state directly. It is
//! handed a [`LocaleProvider`]; [`SystemLocale`] reads the C library's current
//! locale (`strxfrm`, `localeconv`) and [`FixedLocale`] is a deterministic
//! stand-in for tests and the C locale. With the `icu` feature, `IcuLocale`
//! collates with ICU4X and becomes the default provider.

use crate::error::{NatsortError, NatsortResult};
use parking_lot::Mutex;
use std::env;
use std::ffi::{CStr, CString};
use std::fmt;
use std::sync::Arc;

/// Serializes reads of the C library's static locale buffers.
static LOCALE_LOCK: Mutex<()> = Mutex::new(());

/// Source of locale-dependent behaviour for key generation.
pub trait LocaleProvider: Send + Sync + fmt::Debug {
    /// Transform a string so that byte order of the results matches the
    /// locale's collation order.
    fn collation_key(&self, s: &str) -> NatsortResult<Vec<u8>>;

    /// The locale's decimal point character.
    fn decimal_point(&self) -> char;

    /// The locale's grouping character, if the locale groups digits.
    fn thousands_separator(&self) -> Option<char>;

    /// Name of the active locale, for diagnostics.
    fn name(&self) -> String;

    /// Whether collation is "dumb", i.e. uppercase sorts before lowercase as
    /// in plain code point order. Key generation compensates by grouping
    /// letters itself.
    fn is_dumb(&self) -> bool {
        match (self.collation_key("A"), self.collation_key("a")) {
            (Ok(upper), Ok(lower)) => upper < lower,
            _ => true,
        }
    }
}

/// The process locale as seen by the C library.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl SystemLocale {
    pub fn new() -> Self {
        SystemLocale
    }

    pub(crate) fn query(category: libc::c_int) -> String {
        let _guard = LOCALE_LOCK.lock();
        // SAFETY: a null locale argument only queries; the returned string is
        // copied out before the lock is released.
        unsafe {
            let ptr = libc::setlocale(category, std::ptr::null());
            if ptr.is_null() {
                "C".to_string()
            } else {
                CStr::from_ptr(ptr).to_string_lossy().into_owned()
            }
        }
    }

    /// Read `(decimal_point, thousands_sep)` from `localeconv`.
    fn numeric_conventions() -> (String, String) {
        let _guard = LOCALE_LOCK.lock();
        // SAFETY: localeconv returns a pointer to static storage that stays
        // valid until the next localeconv/setlocale call; we hold the lock
        // while copying both fields out.
        unsafe {
            let conv = libc::localeconv();
            if conv.is_null() {
                return (".".to_string(), String::new());
            }
            let read = |ptr: *const libc::c_char| {
                if ptr.is_null() {
                    String::new()
                } else {
                    CStr::from_ptr(ptr).to_string_lossy().into_owned()
                }
            };
            (read((*conv).decimal_point), read((*conv).thousands_sep))
        }
    }
}

impl LocaleProvider for SystemLocale {
    fn collation_key(&self, s: &str) -> NatsortResult<Vec<u8>> {
        let src = CString::new(s).map_err(|_| {
            NatsortError::locale(&format!("cannot collate string with embedded NUL: {s:?}"))
        })?;

        // SAFETY: with a zero length strxfrm only measures; the second call
        // writes at most `needed + 1` bytes into a buffer of that size.
        unsafe {
            let needed = libc::strxfrm(std::ptr::null_mut(), src.as_ptr(), 0);
            let mut buf = vec![0u8; needed + 1];
            let written = libc::strxfrm(
                buf.as_mut_ptr() as *mut libc::c_char,
                src.as_ptr(),
                buf.len(),
            );
            if written > needed {
                return Err(NatsortError::locale(&format!(
                    "strxfrm output grew from {needed} to {written} bytes"
                )));
            }
            buf.truncate(written);
            Ok(buf)
        }
    }

    fn decimal_point(&self) -> char {
        let (decimal, _) = Self::numeric_conventions();
        decimal.chars().next().unwrap_or('.')
    }

    fn thousands_separator(&self) -> Option<char> {
        let (_, sep) = Self::numeric_conventions();
        if let Some(c) = sep.chars().next() {
            return Some(c);
        }
        // Broken platform locale libraries report a blank separator for
        // locales that do group digits.
        if self.is_dumb() {
            return known_thousands_separator(&Self::query(libc::LC_NUMERIC));
        }
        None
    }

    fn name(&self) -> String {
        Self::query(libc::LC_COLLATE)
    }
}

/// Corrections for locales whose separator is reported blank by broken
/// locale libraries, keyed on the exact locale name.
fn known_thousands_separator(locale: &str) -> Option<char> {
    match locale {
        "de_DE.ISO8859-15" | "de_DE.ISO8859-1" | "de_DE.UTF-8" | "de_de" => Some('.'),
        "es_ES.ISO8859-1" | "es_ES.ISO8859-15" | "es_ES.UTF-8" | "es_es" => Some('.'),
        "de_AT.ISO8859-1" | "de_AT.ISO8859-15" | "de_AT.UTF-8" | "de_at" => Some('.'),
        "nl_NL.ISO8859-1" | "nl_NL.ISO8859-15" | "nl_NL.UTF-8" | "nl_nl" => Some('.'),
        "ca_ES.ISO8859-1" | "ca_ES.ISO8859-15" | "ca_ES.UTF-8" | "ca_es" => Some('.'),
        "de_CH.ISO8859-1" | "de_CH.ISO8859-15" => Some('.'),
        "de_CH.UTF-8" | "de_ch" => Some('\''),
        "fr_FR.ISO8859-1" | "fr_FR.ISO8859-15" | "fr_FR.UTF-8" | "fr_fr" => Some('\u{a0}'),
        "fr_CH.ISO8859-1" | "fr_CH.ISO8859-15" | "fr_CH.UTF-8" | "fr_ch" => Some('\u{a0}'),
        "fr_CA.ISO8859-1" | "fr_CA.ISO8859-15" | "fr_CA.UTF-8" | "fr_ca" => Some('\u{a0}'),
        _ => None,
    }
}

/// The provider used when none is configured: ICU collation when built with
/// the `icu` feature and the process locale is known to ICU, otherwise the C
/// library.
pub fn default_locale_provider() -> Arc<dyn LocaleProvider> {
    #[cfg(feature = "icu")]
    match IcuLocale::from_process_locale() {
        Ok(icu) => return Arc::new(icu),
        Err(err) => tracing::debug!(error = %err, "falling back to strxfrm collation"),
    }
    Arc::new(SystemLocale::new())
}

/// Turn a POSIX locale name such as `de_DE.UTF-8@euro` into a BCP 47 tag.
#[cfg_attr(not(feature = "icu"), allow(dead_code))]
fn posix_to_bcp47(name: &str) -> String {
    let base = name.split(['.', '@']).next().unwrap_or_default();
    match base {
        "" | "C" | "POSIX" => "und".to_string(),
        _ => base.replace('_', "-"),
    }
}

/// ICU4X collation with the C library's numeric conventions.
#[cfg(feature = "icu")]
pub struct IcuLocale {
    name: String,
    collator: icu_collator::CollatorBorrowed<'static>,
    numeric: SystemLocale,
}

#[cfg(feature = "icu")]
impl IcuLocale {
    /// Collator for a POSIX or BCP 47 locale name.
    pub fn new(name: &str) -> NatsortResult<Self> {
        let tag = posix_to_bcp47(name);
        let locale: icu_locale_core::Locale = tag
            .parse()
            .map_err(|e| NatsortError::locale(&format!("invalid locale '{name}': {e:?}")))?;
        let prefs = icu_collator::CollatorPreferences::from(&locale);
        let collator = icu_collator::Collator::try_new(
            prefs,
            icu_collator::options::CollatorOptions::default(),
        )
        .map_err(|e| NatsortError::locale(&format!("no collation data for '{name}': {e}")))?;
        tracing::debug!(locale = %name, tag = %tag, "built ICU collator");
        Ok(Self {
            name: name.to_string(),
            collator,
            numeric: SystemLocale::new(),
        })
    }

    /// Collator for the process's `LC_COLLATE` locale.
    pub fn from_process_locale() -> NatsortResult<Self> {
        Self::new(&SystemLocale::query(libc::LC_COLLATE))
    }
}

#[cfg(feature = "icu")]
impl fmt::Debug for IcuLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IcuLocale").field("name", &self.name).finish()
    }
}

#[cfg(feature = "icu")]
impl LocaleProvider for IcuLocale {
    fn collation_key(&self, s: &str) -> NatsortResult<Vec<u8>> {
        let mut key = Vec::new();
        self.collator
            .write_sort_key_to(s, &mut key)
            .map_err(|e| NatsortError::locale(&format!("cannot collate {s:?}: {e:?}")))?;
        Ok(key)
    }

    fn decimal_point(&self) -> char {
        self.numeric.decimal_point()
    }

    fn thousands_separator(&self) -> Option<char> {
        self.numeric.thousands_separator()
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

/// An in-memory locale with fixed conventions and code point collation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLocale {
    name: String,
    decimal_point: char,
    thousands_sep: Option<char>,
    dumb: bool,
}

impl FixedLocale {
    pub fn new(name: &str, decimal_point: char, thousands_sep: Option<char>) -> Self {
        Self {
            name: name.to_string(),
            decimal_point,
            thousands_sep,
            dumb: false,
        }
    }

    /// The C locale: `.` decimal point, no grouping, code point collation.
    pub fn c() -> Self {
        Self::new("C", '.', None).with_dumb(true)
    }

    /// US English conventions: `1,234.5`.
    pub fn en_us() -> Self {
        Self::new("en_US.UTF-8", '.', Some(','))
    }

    /// German conventions: `1.234,5`.
    pub fn de_de() -> Self {
        Self::new("de_DE.UTF-8", ',', Some('.'))
    }

    /// Mark whether collation should be treated as dumb.
    pub fn with_dumb(mut self, dumb: bool) -> Self {
        self.dumb = dumb;
        self
    }
}

impl LocaleProvider for FixedLocale {
    fn collation_key(&self, s: &str) -> NatsortResult<Vec<u8>> {
        if s.contains('\0') {
            return Err(NatsortError::locale(&format!(
                "cannot collate string with embedded NUL: {s:?}"
            )));
        }
        Ok(s.as_bytes().to_vec())
    }

    fn decimal_point(&self) -> char {
        self.decimal_point
    }

    fn thousands_separator(&self) -> Option<char> {
        self.thousands_sep
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn is_dumb(&self) -> bool {
        self.dumb
    }
}

/// Locale settings requested by the environment
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// The requested locale name
    pub locale_name: String,
    /// Whether the locale is UTF-8
    pub is_utf8: bool,
}

impl LocaleConfig {
    /// Read the requested locale from `LC_ALL`, `LC_COLLATE` or `LANG`
    pub fn from_env() -> Self {
        let locale = env::var("LC_ALL")
            .ok()
            .filter(|s| !s.is_empty())
            .or_else(|| env::var("LC_COLLATE").ok().filter(|s| !s.is_empty()))
            .or_else(|| env::var("LANG").ok().filter(|s| !s.is_empty()))
            .unwrap_or_else(|| "C".to_string());

        let is_utf8 = locale.contains("UTF-8") || locale.contains("utf8");

        Self {
            locale_name: locale,
            is_utf8,
        }
    }
}

/// Apply the environment's locale to the whole process.
///
/// This is for host applications such as the command-line tool; key
/// generation itself only ever reads the process locale.
pub fn activate_environment_locale() -> NatsortResult<LocaleConfig> {
    let config = LocaleConfig::from_env();
    let _guard = LOCALE_LOCK.lock();
    // SAFETY: an empty string asks the C library to consult the environment.
    let ptr = unsafe { libc::setlocale(libc::LC_ALL, c"".as_ptr()) };
    if ptr.is_null() {
        return Err(NatsortError::locale(&format!(
            "locale '{}' is not available",
            config.locale_name
        )));
    }
    tracing::debug!(locale = %config.locale_name, utf8 = config.is_utf8, "activated environment locale");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_locale_conventions() {
        let de = FixedLocale::de_de();
        assert_eq!(de.decimal_point(), ',');
        assert_eq!(de.thousands_separator(), Some('.'));
        assert!(!de.is_dumb());
        assert!(FixedLocale::c().is_dumb());
        assert_eq!(FixedLocale::c().thousands_separator(), None);
    }

    #[test]
    fn test_fixed_collation_is_code_point_order() {
        let loc = FixedLocale::en_us();
        let a = loc.collation_key("apple").expect("Failed to collate");
        let b = loc.collation_key("banana").expect("Failed to collate");
        assert!(a < b);
        assert!(loc.collation_key("a\0b").is_err());
    }

    #[test]
    fn test_default_dumb_detection() {
        #[derive(Debug)]
        struct Reversed;
        impl LocaleProvider for Reversed {
            fn collation_key(&self, s: &str) -> NatsortResult<Vec<u8>> {
                Ok(s.bytes().map(|b| u8::MAX - b).collect())
            }
            fn decimal_point(&self) -> char {
                '.'
            }
            fn thousands_separator(&self) -> Option<char> {
                None
            }
            fn name(&self) -> String {
                "reversed".to_string()
            }
        }
        // 'A' maps above 'a' here, so this locale is not dumb
        assert!(!Reversed.is_dumb());
    }

    #[test]
    fn test_system_locale_reads() {
        // Whatever the process locale is, the reads must be well formed.
        let loc = SystemLocale::new();
        assert!(!loc.name().is_empty());
        let key = loc.collation_key("abc").expect("Failed to collate");
        assert!(!key.is_empty());
        assert!(loc.collation_key("a\0b").is_err());
        let decimal = loc.decimal_point();
        assert!(!decimal.is_ascii_digit());
    }

    #[test]
    fn test_posix_names_become_language_tags() {
        assert_eq!(posix_to_bcp47("de_DE.UTF-8"), "de-DE");
        assert_eq!(posix_to_bcp47("de_DE@euro"), "de-DE");
        assert_eq!(posix_to_bcp47("en_US.ISO8859-1@x"), "en-US");
        assert_eq!(posix_to_bcp47("C"), "und");
        assert_eq!(posix_to_bcp47("POSIX"), "und");
        assert_eq!(posix_to_bcp47("C.UTF-8"), "und");
    }

    #[test]
    fn test_default_provider_collates() {
        let loc = default_locale_provider();
        let a = loc.collation_key("a").expect("Failed to collate");
        let b = loc.collation_key("b").expect("Failed to collate");
        assert!(a < b);
    }

    #[test]
    #[cfg(feature = "icu")]
    fn test_icu_locale_collates_case_together() {
        let loc = IcuLocale::new("en_US.UTF-8").expect("Failed to build ICU collator");
        let key = |s| loc.collation_key(s).expect("Failed to collate");
        assert!(key("apple") < key("Banana"));
        assert!(key("Apple") < key("banana"));
        assert!(!loc.is_dumb());
        assert_eq!(loc.name(), "en_US.UTF-8");
        assert!(IcuLocale::new("C").is_ok());
    }

    #[test]
    fn test_known_separator_table() {
        assert_eq!(known_thousands_separator("de_DE.ISO8859-15"), Some('.'));
        assert_eq!(known_thousands_separator("fr_FR.UTF-8"), Some('\u{a0}'));
        assert_eq!(known_thousands_separator("de_ch"), Some('\''));
        assert_eq!(known_thousands_separator("de_CH.UTF-8"), Some('\''));
        assert_eq!(known_thousands_separator("de_CH.ISO8859-1"), Some('.'));
        assert_eq!(known_thousands_separator("de_DE.utf8"), None);
        assert_eq!(known_thousands_separator("en_US.UTF-8"), None);
        assert_eq!(known_thousands_separator("de_DE.KOI8-R"), None);
    }
}
