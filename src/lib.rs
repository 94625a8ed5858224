//! Natural sorting in Rust
//!
//! This crate sorts strings the way people read them: `"a2"` before `"a10"`.
//! Each value is turned into a composite [`SortKey`] whose ordinary tuple
//! ordering is the natural ordering. Numbers may be read as integers or
//! floats, signed or not, with or without exponents, and with the locale's
//! grouping and decimal separators. Paths, byte strings, missing values and
//! nested sequences are handled too.
//!
//! ```
//! use natsort::{natsorted, Ns};
//!
//! let sorted = natsorted(&["x-1.5", "x-2", "x+3"], Ns::REAL).unwrap();
//! assert_eq!(sorted, ["x-2", "x-1.5", "x+3"]);
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod fastnum;
pub mod filter;
pub mod key;
pub mod keygen;
pub mod locale;
pub mod ns;
pub mod numeric_regex;
pub mod path_split;
pub mod sort;
pub mod unicode_numbers;
pub mod value;

// Re-export commonly used types
pub use config::{NumberType, SortConfig, SortConfigBuilder};
pub use error::{NatsortError, NatsortResult};
pub use key::{KeyPart, SortKey};
pub use keygen::{natsort_keygen, KeyGenerator};
pub use locale::{default_locale_provider, FixedLocale, LocaleProvider, SystemLocale};
#[cfg(feature = "icu")]
pub use locale::IcuLocale;
pub use ns::Ns;
pub use numeric_regex::numeric_regex_chooser;
pub use sort::{
    humansorted, index_humansorted, index_natsorted, index_natsorted_by, index_realsorted,
    natsorted, natsorted_by, order_by_index, order_by_index_iter, realsorted,
};
pub use value::{as_ascii, as_utf8, decoder, Bytes, Encoding, Sortable, Value};

/// Exit codes of the `natsort` binary
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const USAGE_FAILURE: i32 = 2;
