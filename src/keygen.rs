//! Sort key generation
//!
//! A [`KeyGenerator`] is assembled once per option set. Strings go through
//! four stages:
//!
//! 1. an input transform applied to the whole string (case changes,
//!    locale number cleanup),
//! 2. the numeral tokenizer,
//! 3. a per-component transform (number parsing, or letter grouping and
//!    collation for text),
//! 4. separator insertion and an optional final wrapping that lets
//!    capitalized words sort apart.
//!
//! The locale is read at the start of every call. Transforms that depend on
//! it are compiled once per distinct locale state and reused.

use crate::config::SortConfig;
use crate::error::{NatsortError, NatsortResult};
use crate::fastnum::{self, Number, Parsed};
use crate::key::{KeyPart, SortKey};
use crate::locale::{self, LocaleProvider};
use crate::ns::{NumberKind, Ns, ResolvedConfig};
use crate::numeric_regex::NumericRegex;
use crate::path_split;
use crate::unicode_numbers;
use crate::value::{Sortable, Value};
use fancy_regex::Regex as FancyRegex;
use parking_lot::Mutex;
use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use unicode_normalization::UnicodeNormalization;

/// Length of the text separator that sorts numbers after text.
const MAX_SEPARATOR_CHARS: usize = 20;
/// Length of the collation key that sorts numbers after text.
const MAX_COLLATED_BYTES: usize = 50;

/// Locale-derived values a key depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct LocaleState {
    decimal: char,
    thousands: Option<char>,
    dumb: bool,
}

impl Default for LocaleState {
    fn default() -> Self {
        Self {
            decimal: '.',
            thousands: None,
            dumb: false,
        }
    }
}

/// A whole-string rewrite applied before tokenizing.
#[derive(Debug)]
enum StringTransform {
    SwapCase,
    CaseFold,
    StripThousands(FancyRegex),
    SwitchDecimal(FancyRegex),
}

impl StringTransform {
    fn apply(&self, s: &str) -> NatsortResult<String> {
        match self {
            StringTransform::SwapCase => Ok(swap_case(s)),
            StringTransform::CaseFold => Ok(s.to_lowercase()),
            StringTransform::StripThousands(re) => replace_matches(re, s, ""),
            StringTransform::SwitchDecimal(re) => replace_matches(re, s, "."),
        }
    }
}

/// The locale-dependent half of a generator.
#[derive(Debug)]
pub(crate) struct Pipeline {
    dumb: bool,
    input: Vec<StringTransform>,
    group_letters: bool,
    swap_first: bool,
}

impl Pipeline {
    fn transform_input<'s>(&self, s: &'s str) -> NatsortResult<Cow<'s, str>> {
        let mut current = Cow::Borrowed(s);
        for step in &self.input {
            current = Cow::Owned(step.apply(&current)?);
        }
        Ok(current)
    }
}

/// Turns values into [`SortKey`]s for one option set.
#[derive(Debug)]
pub struct KeyGenerator {
    alg: Ns,
    config: ResolvedConfig,
    locale: Arc<dyn LocaleProvider>,
    tokenizer: NumericRegex,
    nan: f64,
    sep: KeyPart,
    pre_sep: KeyPart,
    pipelines: Mutex<HashMap<LocaleState, Arc<Pipeline>>>,
}

impl KeyGenerator {
    /// Generator reading the process locale.
    pub fn new(alg: Ns) -> NatsortResult<Self> {
        Self::with_locale(alg, locale::default_locale_provider())
    }

    pub fn with_locale(alg: Ns, locale: Arc<dyn LocaleProvider>) -> NatsortResult<Self> {
        Self::build(alg, locale, '.')
    }

    pub fn from_config(config: &SortConfig) -> NatsortResult<Self> {
        config.validate()?;
        let locale = config
            .locale
            .clone()
            .unwrap_or_else(locale::default_locale_provider);
        Self::build(config.alg, locale, config.decimal_point)
    }

    fn build(alg: Ns, locale: Arc<dyn LocaleProvider>, decimal: char) -> NatsortResult<Self> {
        let config = alg.resolve();
        let tokenizer = NumericRegex::for_alg(alg, decimal)?;

        let (sep, pre_sep) = if config.numbers_after_text {
            let max_str = KeyPart::Str(char::MAX.to_string().repeat(MAX_SEPARATOR_CHARS));
            let sep = if config.locale.alpha() {
                KeyPart::Collated(vec![u8::MAX; MAX_COLLATED_BYTES])
            } else {
                max_str.clone()
            };
            (sep, max_str)
        } else {
            let sep = if config.locale.alpha() {
                KeyPart::Collated(Vec::new())
            } else {
                KeyPart::str("")
            };
            (sep, KeyPart::str(""))
        };

        tracing::debug!(
            alg = %alg,
            tokenizer = %tokenizer.kind(),
            decimal = %decimal,
            locale = %locale.name(),
            unicode = unicode_numbers::unicode_version(),
            "built key generator"
        );

        Ok(Self {
            alg,
            config,
            locale,
            tokenizer,
            nan: config.nan.replacement(),
            sep,
            pre_sep,
            pipelines: Mutex::new(HashMap::new()),
        })
    }

    pub fn alg(&self) -> Ns {
        self.alg
    }

    pub fn resolved(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn tokenizer(&self) -> &NumericRegex {
        &self.tokenizer
    }

    /// Key for any [`Sortable`] value.
    pub fn key<T: Sortable + ?Sized>(&self, item: &T) -> NatsortResult<SortKey> {
        self.key_value(&item.to_value())
    }

    pub fn key_value(&self, value: &Value<'_>) -> NatsortResult<SortKey> {
        let pipeline = self.pipeline()?;
        self.key_with(value, &pipeline)
    }

    /// Key for `value` under an already resolved locale state.
    pub(crate) fn key_with(&self, value: &Value<'_>, pipeline: &Pipeline) -> NatsortResult<SortKey> {
        self.dispatch(value, pipeline).map(SortKey::new)
    }

    fn locale_state(&self) -> LocaleState {
        let mode = self.config.locale;
        let mut state = LocaleState::default();
        if mode.alpha() {
            state.dumb = self.locale.is_dumb();
        }
        if mode.numeric() {
            state.decimal = self.locale.decimal_point();
            state.thousands = self.locale.thousands_separator();
        }
        state
    }

    /// The compiled transforms for the current locale state.
    pub(crate) fn pipeline(&self) -> NatsortResult<Arc<Pipeline>> {
        let state = self.locale_state();
        if let Some(pipeline) = self.pipelines.lock().get(&state) {
            return Ok(Arc::clone(pipeline));
        }
        let pipeline = Arc::new(self.build_pipeline(state)?);
        self.pipelines.lock().insert(state, Arc::clone(&pipeline));
        Ok(pipeline)
    }

    fn build_pipeline(&self, state: LocaleState) -> NatsortResult<Pipeline> {
        let case = self.config.case;
        let float = self.config.number == NumberKind::Float;
        let mut input = Vec::new();

        if state.dumb != case.lowercase_first {
            input.push(StringTransform::SwapCase);
        }
        if case.ignore_case {
            input.push(StringTransform::CaseFold);
        }
        if self.config.locale.numeric() {
            if let Some(thousands) = state.thousands {
                let decimal = float.then_some(state.decimal);
                input.push(StringTransform::StripThousands(strip_thousands_regex(
                    thousands, decimal,
                )?));
            }
            if float && state.decimal != '.' {
                input.push(StringTransform::SwitchDecimal(switch_decimal_regex(
                    state.decimal,
                )?));
            }
        }

        let forced_grouping = self.config.locale.alpha() && state.dumb;
        if forced_grouping && !case.group_letters {
            tracing::warn!(
                locale = %self.locale.name(),
                "locale collation ignores case; grouping letters to compensate"
            );
        }

        Ok(Pipeline {
            dumb: state.dumb,
            input,
            group_letters: case.group_letters || forced_grouping,
            swap_first: state.dumb && case.lowercase_first,
        })
    }

    fn dispatch(&self, value: &Value<'_>, pipeline: &Pipeline) -> NatsortResult<Vec<KeyPart>> {
        match value {
            Value::Bytes(bytes) => Ok(self.bytes_key(bytes)),
            Value::Int(i) => Ok(self.number_key(Number::Int(*i))),
            Value::Float(f) if f.is_nan() => Ok(self.number_key(Number::Float(self.nan))),
            Value::Float(f) => Ok(self.number_key(Number::Float(*f))),
            Value::Missing => Ok(self.number_key(Number::Float(self.nan))),
            Value::Str(s) if self.config.path => self.path_key(Path::new(&**s), pipeline),
            Value::Path(p) if self.config.path => self.path_key(p, pipeline),
            Value::Str(s) => self.string_key(s, pipeline),
            Value::Path(p) => self.string_key(&p.to_string_lossy(), pipeline),
            Value::Seq(items) => items
                .iter()
                .map(|item| self.dispatch(item, pipeline).map(KeyPart::Tuple))
                .collect(),
            Value::Opaque(type_name) => Err(NatsortError::not_iterable(type_name)),
        }
    }

    fn bytes_key(&self, bytes: &[u8]) -> Vec<KeyPart> {
        let bytes = if self.config.case.ignore_case {
            bytes.to_ascii_lowercase()
        } else {
            bytes.to_vec()
        };
        let part = KeyPart::Bytes(bytes);
        if self.config.path {
            vec![KeyPart::Tuple(vec![part])]
        } else {
            vec![part]
        }
    }

    fn number_key(&self, number: Number) -> Vec<KeyPart> {
        let core = vec![self.sep.clone(), KeyPart::Num(number)];
        let capital_split = self.config.locale.alpha() && self.config.case.capitalize_first;
        match (self.config.path, capital_split) {
            (true, true) => vec![KeyPart::Tuple(vec![
                KeyPart::Tuple(vec![self.pre_sep.clone()]),
                KeyPart::Tuple(core),
            ])],
            (false, true) => vec![
                KeyPart::Tuple(vec![self.pre_sep.clone()]),
                KeyPart::Tuple(core),
            ],
            (true, false) => vec![KeyPart::Tuple(core)],
            (false, false) => core,
        }
    }

    fn path_key(&self, path: &Path, pipeline: &Pipeline) -> NatsortResult<Vec<KeyPart>> {
        path_split::path_splitter(path)
            .iter()
            .map(|component| self.string_key(component, pipeline).map(KeyPart::Tuple))
            .collect()
    }

    fn string_key(&self, s: &str, pipeline: &Pipeline) -> NatsortResult<Vec<KeyPart>> {
        let normalized: String = if self.config.compatibility_normalize {
            s.nfkd().collect()
        } else {
            s.nfd().collect()
        };
        let transformed = pipeline.transform_input(&normalized)?;

        let mut parts: Vec<KeyPart> = Vec::new();
        for segment in self.tokenizer.split(&transformed) {
            if segment.is_empty() {
                continue;
            }
            let part = self.component(segment, pipeline)?;
            if part.is_numeric() && parts.last().map_or(true, KeyPart::is_numeric) {
                parts.push(self.sep.clone());
            }
            parts.push(part);
        }

        if !(self.config.locale.alpha() && self.config.case.capitalize_first) {
            return Ok(parts);
        }
        if parts.is_empty() {
            return Ok(vec![KeyPart::Tuple(Vec::new()), KeyPart::Tuple(Vec::new())]);
        }

        let head = if parts[0] == self.sep {
            self.pre_sep.clone()
        } else {
            // A dumb locale swaps case on input, so take the first letter
            // from the untransformed text.
            let original: &str = if pipeline.dumb { &normalized } else { &transformed };
            match original.chars().next() {
                Some(c) if pipeline.swap_first => KeyPart::Str(swap_case(c.encode_utf8(&mut [0; 4]))),
                Some(c) => KeyPart::Str(c.to_string()),
                None => self.pre_sep.clone(),
            }
        };
        Ok(vec![KeyPart::Tuple(vec![head]), KeyPart::Tuple(parts)])
    }

    fn component(&self, segment: &str, pipeline: &Pipeline) -> NatsortResult<KeyPart> {
        let decimal = self.tokenizer.decimal();
        let candidate: Cow<'_, str> = if decimal != '.' && self.tokenizer.kind().is_float() {
            Cow::Owned(segment.replace(decimal, "."))
        } else {
            Cow::Borrowed(segment)
        };

        let text = |_: &str| self.text_part(segment, pipeline);
        let parsed = match self.config.number {
            NumberKind::Float => fastnum::try_float(&candidate, Some(self.nan), text),
            NumberKind::Int => fastnum::try_int(&candidate, text),
        };
        match parsed {
            Parsed::Number(number) => Ok(KeyPart::Num(number)),
            Parsed::Other(part) => part,
        }
    }

    fn text_part(&self, segment: &str, pipeline: &Pipeline) -> NatsortResult<KeyPart> {
        let text: Cow<'_, str> = if pipeline.group_letters {
            Cow::Owned(group_letters(segment))
        } else {
            Cow::Borrowed(segment)
        };
        if self.config.locale.alpha() {
            Ok(KeyPart::Collated(self.locale.collation_key(&text)?))
        } else {
            Ok(KeyPart::Str(text.into_owned()))
        }
    }
}

/// Build a key generator for `alg` using the process locale.
pub fn natsort_keygen(alg: Ns) -> NatsortResult<KeyGenerator> {
    KeyGenerator::new(alg)
}

fn swap_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_uppercase() {
            out.extend(c.to_lowercase());
        } else if c.is_lowercase() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Precede every character by its lowercase form: `"Ab"` becomes `"aAbb"`.
fn group_letters(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    for c in s.chars() {
        out.extend(c.to_lowercase());
        out.push(c);
    }
    out
}

/// Matches a grouping separator in a valid position: after one to three
/// digits and before exactly three, never inside a fraction.
fn strip_thousands_regex(thousands: char, decimal: Option<char>) -> NatsortResult<FancyRegex> {
    let thou = regex::escape(thousands.encode_utf8(&mut [0; 4]));
    let no_fraction = match decimal {
        Some(d) => {
            let d = regex::escape(d.encode_utf8(&mut [0; 4]));
            format!(r"(?<!{d}[0-9])(?<!{d}[0-9]{{2}})(?<!{d}[0-9]{{3}})")
        }
        None => String::new(),
    };
    let pattern =
        format!(r"(?<=[0-9])(?<![0-9]{{4}}){no_fraction}{thou}(?=[0-9]{{3}}(?:[^0-9]|$))");
    Ok(FancyRegex::new(&pattern)?)
}

/// Matches a locale decimal point next to a digit.
fn switch_decimal_regex(decimal: char) -> NatsortResult<FancyRegex> {
    let d = regex::escape(decimal.encode_utf8(&mut [0; 4]));
    Ok(FancyRegex::new(&format!(r"(?<=[0-9]){d}|{d}(?=[0-9])"))?)
}

fn replace_matches(re: &FancyRegex, s: &str, with: &str) -> NatsortResult<String> {
    let mut out = String::with_capacity(s.len());
    let mut last = 0;
    for m in re.find_iter(s) {
        let m = m?;
        out.push_str(&s[last..m.start()]);
        out.push_str(with);
        last = m.end();
    }
    out.push_str(&s[last..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::FixedLocale;
    use crate::value::Bytes;
    use proptest::prelude::*;

    fn keygen(alg: Ns) -> KeyGenerator {
        KeyGenerator::with_locale(alg, Arc::new(FixedLocale::en_us()))
            .expect("Failed to build key generator")
    }

    fn key_of<T: Sortable + ?Sized>(alg: Ns, item: &T) -> SortKey {
        keygen(alg).key(item).expect("Failed to generate key")
    }

    fn s(text: &str) -> KeyPart {
        KeyPart::str(text)
    }

    #[test]
    fn test_string_keys() {
        assert_eq!(
            key_of(Ns::DEFAULT, "a10b2").parts(),
            [s("a"), KeyPart::int(10), s("b"), KeyPart::int(2)]
        );
        assert_eq!(key_of(Ns::DEFAULT, "12").parts(), [s(""), KeyPart::int(12)]);
        assert!(key_of(Ns::DEFAULT, "").is_empty());
        assert_eq!(
            key_of(Ns::FLOAT, "1.5.2").parts(),
            [s(""), KeyPart::float(1.5), s(""), KeyPart::float(0.2)]
        );
    }

    #[test]
    fn test_signed_and_exponent() {
        assert_eq!(key_of(Ns::SIGNED, "a-5").parts(), [s("a"), KeyPart::int(-5)]);
        assert_eq!(
            key_of(Ns::DEFAULT, "a-5").parts(),
            [s("a-"), KeyPart::int(5)]
        );
        assert_eq!(
            key_of(Ns::REAL, "x-1e3").parts(),
            [s("x"), KeyPart::float(-1000.0)]
        );
        assert_eq!(
            key_of(Ns::FLOAT | Ns::NOEXP, "x1e3").parts(),
            [s("x"), KeyPart::float(1.0), s("e"), KeyPart::float(3.0)]
        );
    }

    #[test]
    fn test_numbers_and_missing() {
        assert_eq!(key_of(Ns::DEFAULT, &5i32).parts(), [s(""), KeyPart::int(5)]);
        assert_eq!(
            key_of(Ns::DEFAULT, &f64::NAN).parts(),
            [s(""), KeyPart::float(f64::NEG_INFINITY)]
        );
        assert_eq!(
            key_of(Ns::NANLAST, &None::<i32>).parts(),
            [s(""), KeyPart::float(f64::INFINITY)]
        );
        assert_eq!(
            key_of(Ns::PATH, &3i32).parts(),
            [KeyPart::tuple([s(""), KeyPart::int(3)])]
        );
    }

    #[test]
    fn test_nan_text_becomes_sentinel() {
        assert_eq!(
            key_of(Ns::FLOAT, "nan").parts(),
            [s(""), KeyPart::float(f64::NEG_INFINITY)]
        );
        assert_eq!(
            key_of(Ns::FLOAT | Ns::NANLAST, "NaN").parts(),
            [s(""), KeyPart::float(f64::INFINITY)]
        );
    }

    #[test]
    fn test_bytes_keys() {
        let raw = Bytes(b"A1");
        assert_eq!(key_of(Ns::DEFAULT, &raw).parts(), [KeyPart::Bytes(b"A1".to_vec())]);
        assert_eq!(
            key_of(Ns::IGNORECASE, &raw).parts(),
            [KeyPart::Bytes(b"a1".to_vec())]
        );
        assert_eq!(
            key_of(Ns::PATH, &raw).parts(),
            [KeyPart::tuple([KeyPart::Bytes(b"A1".to_vec())])]
        );
    }

    #[test]
    fn test_path_keys() {
        let key = key_of(Ns::PATH, "/p/Folder (1)/file.tar.gz");
        assert_eq!(key.len(), 6);
        assert_eq!(key.parts()[2], KeyPart::tuple([s("Folder ("), KeyPart::int(1), s(")")]));
        assert_eq!(key.parts()[5], KeyPart::tuple([s(".gz")]));
        let as_path = key_of(Ns::PATH, Path::new("/p/Folder (1)/file.tar.gz"));
        assert_eq!(key, as_path);
    }

    #[test]
    fn test_path_without_path_mode_is_text() {
        assert_eq!(
            key_of(Ns::DEFAULT, Path::new("a10")),
            key_of(Ns::DEFAULT, "a10")
        );
    }

    #[test]
    fn test_sequences_recurse() {
        let key = key_of(Ns::DEFAULT, &("a2", 7i32));
        assert_eq!(
            key.parts(),
            [
                KeyPart::tuple([s("a"), KeyPart::int(2)]),
                KeyPart::tuple([s(""), KeyPart::int(7)]),
            ]
        );
    }

    #[test]
    fn test_opaque_is_not_iterable() {
        let err = keygen(Ns::DEFAULT)
            .key_value(&Value::opaque("Widget"))
            .expect_err("opaque values have no key");
        assert!(matches!(err, NatsortError::NotIterable { .. }));
    }

    #[test]
    fn test_case_options() {
        assert_eq!(key_of(Ns::IGNORECASE, "ABc").parts(), [s("abc")]);
        assert_eq!(key_of(Ns::LOWERCASEFIRST, "aB").parts(), [s("Ab")]);
        assert_eq!(key_of(Ns::GROUPLETTERS, "Ab").parts(), [s("aAbb")]);
    }

    #[test]
    fn test_normalization() {
        let composed = key_of(Ns::DEFAULT, "\u{e9}");
        let decomposed = key_of(Ns::DEFAULT, "e\u{301}");
        assert_eq!(composed, decomposed);
        assert_eq!(
            key_of(Ns::COMPATIBILITYNORMALIZE, "\u{2460}").parts(),
            [s(""), KeyPart::int(1)]
        );
    }

    #[test]
    fn test_unicode_numerals() {
        assert_eq!(key_of(Ns::DEFAULT, "a²").parts(), [s("a"), KeyPart::int(2)]);
        assert_eq!(key_of(Ns::FLOAT, "½").parts(), [s(""), KeyPart::float(0.5)]);
        assert_eq!(key_of(Ns::DEFAULT, "x٣٤").parts(), [s("x"), KeyPart::int(34)]);
        // Digits missing from the numeral table stay text
        assert_eq!(key_of(Ns::DEFAULT, "x\u{11F51}").parts(), [s("x\u{11F51}")]);
    }

    #[test]
    fn test_locale_numbers() {
        let gen = KeyGenerator::with_locale(Ns::LOCALENUM | Ns::FLOAT, Arc::new(FixedLocale::de_de()))
            .expect("Failed to build key generator");
        let key = gen.key("x1.234,5").expect("Failed to generate key");
        assert_eq!(key.parts(), [s("x"), KeyPart::float(1234.5)]);

        let gen = keygen(Ns::LOCALENUM);
        let key = gen.key("1,234,567 and 12,34").expect("Failed to generate key");
        assert_eq!(
            key.parts(),
            [
                s(""),
                KeyPart::int(1_234_567),
                s(" and "),
                KeyPart::int(12),
                s(","),
                KeyPart::int(34)
            ]
        );
    }

    #[test]
    fn test_thousands_never_stripped_in_fraction() {
        let gen = keygen(Ns::LOCALENUM | Ns::FLOAT);
        let key = gen.key("0.123,456").expect("Failed to generate key");
        assert_eq!(
            key.parts(),
            [s(""), KeyPart::float(0.123), s(","), KeyPart::float(456.0)]
        );
    }

    #[test]
    fn test_locale_alpha_collates() {
        let gen = keygen(Ns::LOCALEALPHA);
        let key = gen.key("b1").expect("Failed to generate key");
        assert_eq!(
            key.parts(),
            [KeyPart::Collated(b"b".to_vec()), KeyPart::int(1)]
        );
        let key = gen.key("1").expect("Failed to generate key");
        assert_eq!(key.parts(), [KeyPart::Collated(Vec::new()), KeyPart::int(1)]);
    }

    #[test]
    fn test_dumb_locale_groups_letters() {
        let gen = KeyGenerator::with_locale(Ns::LOCALEALPHA, Arc::new(FixedLocale::c()))
            .expect("Failed to build key generator");
        // Swapped to "aB", then grouped
        let key = gen.key("Ab").expect("Failed to generate key");
        assert_eq!(key.parts(), [KeyPart::Collated(b"aabB".to_vec())]);
    }

    #[test]
    fn test_capital_first_wrapping() {
        let gen = keygen(Ns::LOCALE | Ns::CAPITALFIRST);
        let key = gen.key("Apple2").expect("Failed to generate key");
        assert_eq!(key.parts()[0], KeyPart::tuple([s("A")]));
        let key = gen.key("2x").expect("Failed to generate key");
        assert_eq!(key.parts()[0], KeyPart::tuple([s("")]));
        let key = gen.key("").expect("Failed to generate key");
        assert_eq!(
            key.parts(),
            [KeyPart::Tuple(Vec::new()), KeyPart::Tuple(Vec::new())]
        );
        let key = gen.key(&4i32).expect("Failed to generate key");
        assert_eq!(
            key.parts(),
            [
                KeyPart::tuple([s("")]),
                KeyPart::tuple([KeyPart::Collated(Vec::new()), KeyPart::int(4)])
            ]
        );
    }

    #[test]
    fn test_capital_first_on_dumb_locale() {
        let gen = KeyGenerator::with_locale(
            Ns::LOCALE | Ns::CAPITALFIRST,
            Arc::new(FixedLocale::c()),
        )
        .expect("Failed to build key generator");
        let key = gen.key("apple").expect("Failed to generate key");
        assert_eq!(
            key.parts(),
            [
                KeyPart::tuple([s("a")]),
                KeyPart::tuple([KeyPart::Collated(b"aApPpPlLeE".to_vec())])
            ]
        );

        let gen = KeyGenerator::with_locale(
            Ns::LOCALE | Ns::CAPITALFIRST | Ns::LOWERCASEFIRST,
            Arc::new(FixedLocale::c()),
        )
        .expect("Failed to build key generator");
        let key = gen.key("apple").expect("Failed to generate key");
        assert_eq!(
            key.parts(),
            [
                KeyPart::tuple([s("A")]),
                KeyPart::tuple([KeyPart::Collated(b"aappppllee".to_vec())])
            ]
        );
    }

    #[test]
    fn test_numbers_after_text() {
        let gen = keygen(Ns::NUMAFTER);
        let num = gen.key("10").expect("Failed to generate key");
        let text = gen.key("abc").expect("Failed to generate key");
        assert_eq!(num.try_cmp(&text).expect("Failed to compare"), std::cmp::Ordering::Greater);
        let plain = keygen(Ns::DEFAULT);
        let num = plain.key("10").expect("Failed to generate key");
        let text = plain.key("abc").expect("Failed to generate key");
        assert_eq!(num.try_cmp(&text).expect("Failed to compare"), std::cmp::Ordering::Less);
    }

    #[test]
    fn test_custom_decimal_point() {
        let config = SortConfig::new()
            .with_alg(Ns::FLOAT)
            .with_decimal_point(',')
            .with_locale(Arc::new(FixedLocale::c()));
        let gen = KeyGenerator::from_config(&config).expect("Failed to build key generator");
        let key = gen.key("v1,5").expect("Failed to generate key");
        assert_eq!(key.parts(), [s("v"), KeyPart::float(1.5)]);
    }

    #[test]
    fn test_locale_changes_are_seen() {
        #[derive(Debug)]
        struct Switching(parking_lot::Mutex<char>);
        impl LocaleProvider for Switching {
            fn collation_key(&self, s: &str) -> NatsortResult<Vec<u8>> {
                Ok(s.as_bytes().to_vec())
            }
            fn decimal_point(&self) -> char {
                *self.0.lock()
            }
            fn thousands_separator(&self) -> Option<char> {
                None
            }
            fn name(&self) -> String {
                "switching".to_string()
            }
        }
        let locale = Arc::new(Switching(parking_lot::Mutex::new('.')));
        let gen = KeyGenerator::with_locale(Ns::LOCALENUM | Ns::FLOAT, locale.clone())
            .expect("Failed to build key generator");
        assert_eq!(
            gen.key("1,5").expect("Failed to generate key").parts(),
            [s(""), KeyPart::float(1.0), s(","), KeyPart::float(5.0)]
        );
        *locale.0.lock() = ',';
        assert_eq!(
            gen.key("1,5").expect("Failed to generate key").parts(),
            [s(""), KeyPart::float(1.5)]
        );
    }

    fn flatten(parts: &[KeyPart]) -> Vec<&KeyPart> {
        parts
            .iter()
            .flat_map(|part| match part {
                KeyPart::Tuple(inner) => flatten(inner),
                other => vec![other],
            })
            .collect()
    }

    fn any_alg() -> impl Strategy<Value = Ns> {
        (0u32..(1 << 14)).prop_map(Ns::from_bits_truncate)
    }

    proptest! {
        #[test]
        fn keys_are_deterministic(text in "\\PC{0,24}", alg in any_alg()) {
            let gen = keygen(alg);
            let first = gen.key(text.as_str()).expect("Failed to generate key");
            let second = gen.key(text.as_str()).expect("Failed to generate key");
            prop_assert_eq!(first, second);
        }

        #[test]
        fn numbers_never_adjacent(text in "[a-c0-9.+-]{0,24}", alg in any_alg()) {
            let alg = alg - Ns::PATH - (Ns::LOCALEALPHA | Ns::UNGROUPLETTERS);
            let key = keygen(alg).key(text.as_str()).expect("Failed to generate key");
            let parts = key.parts();
            if let Some(first) = parts.first() {
                prop_assert!(!first.is_numeric());
            }
            for pair in parts.windows(2) {
                prop_assert!(!(pair[0].is_numeric() && pair[1].is_numeric()));
                prop_assert!(pair[0].is_numeric() != pair[1].is_numeric());
            }
        }

        #[test]
        fn keys_never_hold_nan(text in "[a-z0-9.eE+-]{0,16}|nan|-nan|NaN", alg in any_alg()) {
            let key = keygen(alg).key(text.as_str()).expect("Failed to generate key");
            for part in flatten(key.parts()) {
                if let KeyPart::Num(number) = part {
                    prop_assert!(!number.is_nan());
                }
            }
        }
    }
}
