//! strx
//!
//! Small, stateless string and value helpers.
//!
//! This library provides:
//! - Null, length and shape predicates
//! - Email and URL validation against fixed patterns
//! - Parse-or-default and strict conversions
//! - Inclusive range checks and serialization-based deep cloning

pub mod clone;
pub mod config;
pub mod convert;
pub mod error;
pub mod ext;
pub mod predicates;
pub mod range;
pub mod validators;

pub mod cli;

// Re-exports for clean public API
pub use clone::deep_clone;
pub use convert::{swap_case, to_boolean, to_enum, to_int32, toggle, NamedVariants};
pub use error::{Error, Result};
pub use ext::{OptionStrExt, StrExt};
pub use predicates::{
    empty_if_null, if_null_else, is_integer, is_match, is_max_length, is_min_length, is_null,
    is_null_or_empty, word_count,
};
pub use range::{between, Between};
pub use validators::{is_email_address, is_valid_url};
