//! Extension traits exposing the helpers as methods.
//!
//! ```
//! use strx::{OptionStrExt, StrExt};
//!
//! assert!("-42".is_integer());
//! assert_eq!("AbC1".swap_case(), "aBc1");
//! assert!(Some("hello").is_max_length(5));
//! assert!(!None::<&str>.is_min_length(0));
//! ```

use crate::convert::{self, NamedVariants};
use crate::error::Result;
use crate::{predicates, validators};

/// Helpers on a present string value.
pub trait StrExt {
    fn word_count(&self) -> usize;
    fn is_integer(&self) -> bool;
    fn is_match(&self, pattern: &str) -> Result<bool>;
    fn is_email_address(&self) -> Result<bool>;
    fn is_valid_url(&self) -> bool;
    fn to_int32(&self) -> i32;
    fn to_boolean(&self) -> Result<bool>;
    fn swap_case(&self) -> String;
    fn to_enum<T: NamedVariants>(&self) -> Result<T>;
}

impl StrExt for str {
    fn word_count(&self) -> usize {
        predicates::word_count(self)
    }

    fn is_integer(&self) -> bool {
        predicates::is_integer(self)
    }

    fn is_match(&self, pattern: &str) -> Result<bool> {
        predicates::is_match(self, pattern)
    }

    fn is_email_address(&self) -> Result<bool> {
        validators::is_email_address(self)
    }

    fn is_valid_url(&self) -> bool {
        validators::is_valid_url(self)
    }

    fn to_int32(&self) -> i32 {
        convert::to_int32(self)
    }

    fn to_boolean(&self) -> Result<bool> {
        convert::to_boolean(self)
    }

    fn swap_case(&self) -> String {
        convert::swap_case(self)
    }

    fn to_enum<T: NamedVariants>(&self) -> Result<T> {
        convert::to_enum(self)
    }
}

/// Helpers on a possibly absent string value.
pub trait OptionStrExt<'a> {
    fn is_null(&self) -> bool;
    fn is_null_or_empty(&self) -> bool;
    fn is_max_length(&self, max: usize) -> bool;
    fn is_min_length(&self, min: usize) -> bool;
    fn if_null_else(self, default: &'a str) -> &'a str;
    fn empty_if_null(&self) -> String;
}

impl<'a> OptionStrExt<'a> for Option<&'a str> {
    fn is_null(&self) -> bool {
        predicates::is_null(*self)
    }

    fn is_null_or_empty(&self) -> bool {
        predicates::is_null_or_empty(*self)
    }

    fn is_max_length(&self, max: usize) -> bool {
        predicates::is_max_length(*self, max)
    }

    fn is_min_length(&self, min: usize) -> bool {
        predicates::is_min_length(*self, min)
    }

    fn if_null_else(self, default: &'a str) -> &'a str {
        predicates::if_null_else(self, default)
    }

    fn empty_if_null(&self) -> String {
        predicates::empty_if_null(*self)
    }
}
