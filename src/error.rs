//! Error handling for natural sorting

use std::io;
use thiserror::Error;

/// Custom error type for natural sort operations
#[derive(Error, Debug)]
pub enum NatsortError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("'{type_name}' object is not iterable")]
    NotIterable { type_name: String },

    #[error("'<' not supported between instances of '{left}' and '{right}'")]
    IncomparableTypes {
        left: &'static str,
        right: &'static str,
    },

    #[error("locale error: {message}")]
    Locale { message: String },

    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("regex error: {0}")]
    FancyRegex(#[from] fancy_regex::Error),

    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Thread pool error: {message}")]
    ThreadPoolError { message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },
}

impl NatsortError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NatsortError::InvalidConfiguration { .. } | NatsortError::ParseError { .. } => {
                crate::USAGE_FAILURE
            }
            _ => crate::EXIT_FAILURE,
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(message: &str) -> Self {
        NatsortError::InvalidConfiguration {
            message: message.to_string(),
        }
    }

    /// Create a not iterable error for a value of the named type
    pub fn not_iterable(type_name: &str) -> Self {
        NatsortError::NotIterable {
            type_name: type_name.to_string(),
        }
    }

    /// Create an incomparable types error
    pub fn incomparable(left: &'static str, right: &'static str) -> Self {
        NatsortError::IncomparableTypes { left, right }
    }

    /// Create a locale error
    pub fn locale(message: &str) -> Self {
        NatsortError::Locale {
            message: message.to_string(),
        }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        NatsortError::IndexOutOfRange { index, len }
    }

    /// Create a thread pool error
    pub fn thread_pool_error(message: &str) -> Self {
        NatsortError::ThreadPoolError {
            message: message.to_string(),
        }
    }

    /// Create a parse error
    pub fn parse_error(message: &str) -> Self {
        NatsortError::ParseError {
            message: message.to_string(),
        }
    }
}

/// Result type for natural sort operations
pub type NatsortResult<T> = Result<T, NatsortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            NatsortError::invalid_configuration("bad").exit_code(),
            crate::USAGE_FAILURE
        );
        assert_eq!(
            NatsortError::parse_error("x").exit_code(),
            crate::USAGE_FAILURE
        );
        assert_eq!(
            NatsortError::incomparable("str", "int").exit_code(),
            crate::EXIT_FAILURE
        );
    }

    #[test]
    fn test_messages() {
        let err = NatsortError::incomparable("bytes", "str");
        assert_eq!(
            err.to_string(),
            "'<' not supported between instances of 'bytes' and 'str'"
        );
        assert_eq!(
            NatsortError::not_iterable("Widget").to_string(),
            "'Widget' object is not iterable"
        );
    }
}
