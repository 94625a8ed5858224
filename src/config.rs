//! Configuration management for natural sort operations

use crate::error::{NatsortError, NatsortResult};
use crate::locale::LocaleProvider;
use crate::ns::Ns;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Inputs at least this long are keyed and sorted on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 8192;

/// Upper bound on an explicit worker thread count.
pub const MAX_THREADS: usize = 1024;

/// Main configuration structure for sort operations
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// Option flags controlling key generation
    pub alg: Ns,
    /// Sort in descending order; equal elements keep their input order
    pub reverse: bool,
    /// Decimal point recognised by the tokenizer
    pub decimal_point: char,
    /// Locale to collate with; the process locale when `None`
    pub locale: Option<Arc<dyn LocaleProvider>>,
    /// Number of parallel threads to use
    pub parallel_threads: Option<usize>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            alg: Ns::DEFAULT,
            reverse: false,
            decimal_point: '.',
            locale: None,
            parallel_threads: None,
        }
    }
}

impl SortConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the option flags
    pub fn with_alg(mut self, alg: Ns) -> Self {
        self.alg = alg;
        self
    }

    /// Enable reverse sorting
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Set the tokenizer's decimal point
    pub fn with_decimal_point(mut self, decimal_point: char) -> Self {
        self.decimal_point = decimal_point;
        self
    }

    /// Collate with an explicit locale
    pub fn with_locale(mut self, locale: Arc<dyn LocaleProvider>) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Set parallel threads
    pub fn with_parallel_threads(mut self, threads: Option<usize>) -> Self {
        self.parallel_threads = threads;
        self
    }

    /// Replace the number-type flags
    pub fn with_number_type(mut self, number_type: NumberType) -> Self {
        self.alg = (self.alg - (Ns::FLOAT | Ns::SIGNED)) | number_type.ns();
        self
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> NatsortResult<()> {
        let d = self.decimal_point;
        if d.is_numeric() || d.is_whitespace() || matches!(d, '+' | '-' | 'e' | 'E') {
            return Err(NatsortError::invalid_configuration(&format!(
                "{d:?} cannot be used as a decimal point"
            )));
        }

        // Validate thread count
        if let Some(threads) = self.parallel_threads {
            if threads == 0 {
                return Err(NatsortError::invalid_configuration(
                    "thread count must be positive",
                ));
            }
            if threads > MAX_THREADS {
                return Err(NatsortError::invalid_configuration(&format!(
                    "too many threads (maximum {MAX_THREADS})"
                )));
            }
        }

        Ok(())
    }

    /// Get effective thread count
    pub fn effective_thread_count(&self) -> usize {
        self.parallel_threads.unwrap_or_else(num_cpus::get)
    }

    /// Whether `len` items should be keyed and sorted in parallel
    pub fn use_parallel(&self, len: usize) -> bool {
        self.parallel_threads.is_some() || (len >= PARALLEL_THRESHOLD && num_cpus::get() > 1)
    }
}

/// Number interpretation offered by the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberType {
    /// Unsigned integers
    Int,
    /// Unsigned floats
    Float,
    /// Signed floats
    Real,
    /// Version numbers, read as unsigned integers
    Version,
    /// Digit runs, read as unsigned integers
    Digit,
}

impl NumberType {
    pub fn ns(self) -> Ns {
        match self {
            NumberType::Int => Ns::INT,
            NumberType::Float => Ns::FLOAT,
            NumberType::Real => Ns::REAL,
            NumberType::Version => Ns::VERSION,
            NumberType::Digit => Ns::DIGIT,
        }
    }
}

impl FromStr for NumberType {
    type Err = NatsortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "int" | "i" => Ok(NumberType::Int),
            "float" | "f" => Ok(NumberType::Float),
            "real" | "r" => Ok(NumberType::Real),
            "version" | "ver" => Ok(NumberType::Version),
            "digit" | "d" => Ok(NumberType::Digit),
            _ => Err(NatsortError::parse_error(&format!("unknown number type: {s}"))),
        }
    }
}

impl fmt::Display for NumberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumberType::Int => "int",
            NumberType::Float => "float",
            NumberType::Real => "real",
            NumberType::Version => "version",
            NumberType::Digit => "digit",
        };
        write!(f, "{name}")
    }
}

/// Builder pattern for creating configurations
pub struct SortConfigBuilder {
    config: SortConfig,
}

impl SortConfigBuilder {
    /// Start building a new configuration
    pub fn new() -> Self {
        Self {
            config: SortConfig::default(),
        }
    }

    /// Add option flags to those already set
    pub fn flags(mut self, alg: Ns) -> Self {
        self.config.alg |= alg;
        self
    }

    /// Set the number interpretation
    pub fn number_type(mut self, number_type: NumberType) -> Self {
        self.config = self.config.with_number_type(number_type);
        self
    }

    /// Enable reverse sorting
    pub fn reverse(mut self) -> Self {
        self.config.reverse = true;
        self
    }

    /// Set the tokenizer's decimal point
    pub fn decimal_point(mut self, decimal_point: char) -> Self {
        self.config.decimal_point = decimal_point;
        self
    }

    /// Collate with an explicit locale
    pub fn locale(mut self, locale: Arc<dyn LocaleProvider>) -> Self {
        self.config.locale = Some(locale);
        self
    }

    /// Set the worker thread count
    pub fn parallel_threads(mut self, threads: usize) -> Self {
        self.config.parallel_threads = Some(threads);
        self
    }

    /// Build the final configuration
    pub fn build(self) -> NatsortResult<SortConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for SortConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Preset configurations for common use cases
pub mod presets {
    use super::*;

    /// Plain natural sorting of unsigned integers
    pub fn natural() -> SortConfig {
        SortConfig::new()
    }

    /// Locale-aware sorting, as a person reading the text would expect
    pub fn human() -> SortConfig {
        SortConfig::new().with_alg(Ns::LOCALE)
    }

    /// Signed floating point numbers
    pub fn real() -> SortConfig {
        SortConfig::new().with_alg(Ns::REAL)
    }

    /// Version strings such as `1.10.2`
    pub fn version() -> SortConfig {
        SortConfig::new().with_number_type(NumberType::Version)
    }

    /// Filesystem paths, split into components
    pub fn paths() -> SortConfig {
        SortConfig::new().with_alg(Ns::PATH)
    }

    /// Configuration for case-insensitive sorting
    pub fn case_insensitive() -> SortConfig {
        SortConfig::new().with_alg(Ns::IGNORECASE)
    }

    /// Configuration for reverse sorting
    pub fn reverse() -> SortConfig {
        SortConfig::new().with_reverse(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::FixedLocale;

    #[test]
    fn test_default_config() {
        let config = SortConfig::default();
        assert_eq!(config.alg, Ns::DEFAULT);
        assert!(!config.reverse);
        assert_eq!(config.decimal_point, '.');
        assert!(config.locale.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = SortConfigBuilder::new()
            .number_type(NumberType::Real)
            .flags(Ns::PATH)
            .reverse()
            .locale(Arc::new(FixedLocale::de_de()))
            .build()
            .expect("Failed to build test config");

        assert_eq!(config.alg, Ns::REAL | Ns::PATH);
        assert!(config.reverse);
        assert_eq!(
            config
                .locale
                .as_ref()
                .map(|l| l.decimal_point()),
            Some(',')
        );
    }

    #[test]
    fn test_number_type_from_str() {
        assert_eq!(
            "float"
                .parse::<NumberType>()
                .expect("Failed to parse float type"),
            NumberType::Float
        );
        assert_eq!(
            "ver".parse::<NumberType>().expect("Failed to parse ver type"),
            NumberType::Version
        );
        assert_eq!("R".parse::<NumberType>().expect("Failed to parse R"), NumberType::Real);
        assert!("invalid".parse::<NumberType>().is_err());
        assert_eq!(NumberType::Digit.to_string(), "digit");
    }

    #[test]
    fn test_number_type_replaces_flags() {
        let config = SortConfig::new()
            .with_alg(Ns::REAL | Ns::IGNORECASE)
            .with_number_type(NumberType::Int);
        assert_eq!(config.alg, Ns::IGNORECASE);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(SortConfig::new().with_decimal_point('5').validate().is_err());
        assert!(SortConfig::new().with_decimal_point('-').validate().is_err());
        assert!(SortConfig::new().with_decimal_point(',').validate().is_ok());
        assert!(SortConfig::new()
            .with_parallel_threads(Some(0))
            .validate()
            .is_err());
        assert!(SortConfig::new()
            .with_parallel_threads(Some(MAX_THREADS + 1))
            .validate()
            .is_err());
    }

    #[test]
    fn test_parallel_decision() {
        let config = SortConfig::default();
        assert!(!config.use_parallel(10));
        let config = SortConfig::default().with_parallel_threads(Some(2));
        assert!(config.use_parallel(10));
        assert_eq!(config.effective_thread_count(), 2);
    }

    #[test]
    fn test_presets() {
        assert_eq!(presets::human().alg, Ns::LOCALE);
        assert_eq!(presets::real().alg, Ns::REAL);
        assert_eq!(presets::version().alg, Ns::DEFAULT);
        assert!(presets::reverse().reverse);
        assert!(presets::paths().alg.contains(Ns::PATH));
    }
}
