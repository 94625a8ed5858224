//! Numeric filters for command line entries
//!
//! An entry's numbers are found with the same tokenizer that sorting uses,
//! so `-f 1 10` keeps exactly the entries whose keys would hold a number in
//! that range.

use crate::error::{NatsortError, NatsortResult};
use crate::fastnum;
use crate::numeric_regex::NumericRegex;
use std::borrow::Cow;
use std::fmt;

/// An inclusive range of numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberRange {
    low: f64,
    high: f64,
}

impl NumberRange {
    pub fn new(low: f64, high: f64) -> NatsortResult<Self> {
        if low.is_nan() || high.is_nan() {
            return Err(NatsortError::invalid_configuration(
                "filter bounds must be numbers",
            ));
        }
        if low >= high {
            return Err(NatsortError::invalid_configuration(&format!(
                "low >= high ({low} >= {high})"
            )));
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }
}

impl fmt::Display for NumberRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

fn numbers_in<'a>(entry: &'a str, regex: &'a NumericRegex) -> impl Iterator<Item = f64> + 'a {
    let decimal = regex.decimal();
    regex.find_numbers(entry).filter_map(move |run| {
        let run: Cow<'_, str> = if decimal == '.' {
            Cow::Borrowed(run)
        } else {
            Cow::Owned(run.replace(decimal, "."))
        };
        fastnum::parse_float(&run)
    })
}

/// Whether any number in `entry` lies in any of `ranges`.
pub fn keep_entry_range(entry: &str, ranges: &[NumberRange], regex: &NumericRegex) -> bool {
    numbers_in(entry, regex).any(|n| ranges.iter().any(|range| range.contains(n)))
}

/// Whether `entry` holds none of `values`.
pub fn keep_entry_value(entry: &str, values: &[f64], regex: &NumericRegex) -> bool {
    !numbers_in(entry, regex).any(|n| values.contains(&n))
}

/// The combined filters of one command line invocation.
#[derive(Debug)]
pub struct EntryFilter {
    regex: NumericRegex,
    keep: Vec<NumberRange>,
    drop: Vec<NumberRange>,
    exclude: Vec<f64>,
}

impl EntryFilter {
    pub fn new(regex: NumericRegex) -> Self {
        Self {
            regex,
            keep: Vec::new(),
            drop: Vec::new(),
            exclude: Vec::new(),
        }
    }

    /// Keep only entries with a number in one of `ranges`.
    pub fn with_ranges(mut self, ranges: Vec<NumberRange>) -> Self {
        self.keep = ranges;
        self
    }

    /// Drop entries with a number in one of `ranges`.
    pub fn with_reverse_ranges(mut self, ranges: Vec<NumberRange>) -> Self {
        self.drop = ranges;
        self
    }

    /// Drop entries holding any of `values`.
    pub fn with_excluded(mut self, values: Vec<f64>) -> Self {
        self.exclude = values;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.keep.is_empty() && self.drop.is_empty() && self.exclude.is_empty()
    }

    pub fn keeps(&self, entry: &str) -> bool {
        if !self.keep.is_empty() && !keep_entry_range(entry, &self.keep, &self.regex) {
            return false;
        }
        if !self.drop.is_empty() && keep_entry_range(entry, &self.drop, &self.regex) {
            return false;
        }
        self.exclude.is_empty() || keep_entry_value(entry, &self.exclude, &self.regex)
    }

    pub fn apply(&self, entries: Vec<String>) -> Vec<String> {
        if self.is_empty() {
            return entries;
        }
        let before = entries.len();
        let kept: Vec<String> = entries.into_iter().filter(|e| self.keeps(e)).collect();
        tracing::debug!(before, after = kept.len(), "filtered entries");
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ns::Ns;

    fn regex(alg: Ns) -> NumericRegex {
        NumericRegex::for_alg(alg, '.').expect("Failed to build tokenizer")
    }

    #[test]
    fn test_range_validation() {
        assert!(NumberRange::new(1.0, 10.0).is_ok());
        let err = NumberRange::new(5.0, 5.0).expect_err("empty range must fail");
        assert!(err.to_string().contains("low >= high"));
        assert!(NumberRange::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_keep_entry_range() {
        let re = regex(Ns::INT);
        let ranges = [NumberRange::new(2.0, 5.0).expect("Failed to build range")];
        assert!(keep_entry_range("a3", &ranges, &re));
        assert!(keep_entry_range("a10b4", &ranges, &re));
        assert!(!keep_entry_range("a10", &ranges, &re));
        assert!(!keep_entry_range("none", &ranges, &re));
    }

    #[test]
    fn test_sign_depends_on_tokenizer() {
        let ranges = [NumberRange::new(-10.0, -1.0).expect("Failed to build range")];
        assert!(!keep_entry_range("a-5", &ranges, &regex(Ns::INT)));
        assert!(keep_entry_range("a-5", &ranges, &regex(Ns::SIGNED)));
    }

    #[test]
    fn test_keep_entry_value() {
        let re = regex(Ns::FLOAT);
        assert!(!keep_entry_value("v1.5", &[1.5], &re));
        assert!(keep_entry_value("v1.25", &[1.5], &re));
        assert!(keep_entry_value("plain", &[1.5], &re));
    }

    #[test]
    fn test_entry_filter() {
        let filter = EntryFilter::new(regex(Ns::INT))
            .with_ranges(vec![NumberRange::new(1.0, 20.0).expect("Failed to build range")])
            .with_reverse_ranges(vec![NumberRange::new(5.0, 6.0).expect("Failed to build range")])
            .with_excluded(vec![10.0]);
        let entries = ["a1", "a5", "a10", "a15", "a30"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(filter.apply(entries), ["a1", "a15"]);
        assert!(EntryFilter::new(regex(Ns::INT)).is_empty());
    }
}
