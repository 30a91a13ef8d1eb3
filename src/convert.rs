//! Conversions
//!
//! Parse-or-default integers, strict boolean tokens, case swapping and
//! case-insensitive enum lookup.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::{Error, Result};

static LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{L}").expect("letter pattern compiles"));

/// Types whose variants can be looked up by name with [`to_enum`].
pub trait NamedVariants: Sized + Copy + 'static {
    /// Every variant paired with its canonical name.
    const VARIANTS: &'static [(&'static str, Self)];
}

/// Parse a 32-bit integer, returning 0 on any failure.
///
/// Surrounding ASCII whitespace and a single leading sign are accepted;
/// overflow counts as failure.
pub fn to_int32(value: &str) -> i32 {
    value
        .trim_matches(|c: char| matches!(c, '\t'..='\r' | ' '))
        .parse()
        .unwrap_or(0)
}

/// Parse a boolean token.
///
/// Recognizes `true`, `t`, `yes`, `y` and `false`, `f`, `no`, `n` in any
/// case, ignoring surrounding whitespace.
pub fn to_boolean(value: &str) -> Result<bool> {
    let token = value.trim();
    if token.is_empty() {
        return Err(Error::EmptyArgument { name: "value" });
    }

    match token.to_lowercase().as_str() {
        "true" | "t" | "yes" | "y" => Ok(true),
        "false" | "f" | "no" | "n" => Ok(false),
        _ => Err(Error::InvalidBoolean(value.to_string())),
    }
}

/// Flip the case of every letter, leaving other characters untouched.
///
/// Only general category L* counts as a letter; letter numbers such as `Ⅻ`
/// and symbols such as `Ⓐ` pass through. A letter whose opposite case is not a single character (e.g. `ß`) is
/// kept as-is, so the output always has as many characters as the input.
pub fn swap_case(value: &str) -> String {
    LETTER
        .replace_all(value, |caps: &Captures| {
            caps[0].chars().map(swap_letter_case).collect::<String>()
        })
        .into_owned()
}

fn swap_letter_case(c: char) -> char {
    let mapped: Vec<char> = if c.is_uppercase() {
        c.to_lowercase().collect()
    } else {
        c.to_uppercase().collect()
    };

    match mapped.as_slice() {
        [single] => *single,
        _ => c,
    }
}

/// Logical negation.
pub fn toggle(value: bool) -> bool {
    !value
}

/// Look up a variant of `T` by name, ignoring case and surrounding
/// whitespace.
pub fn to_enum<T: NamedVariants>(value: &str) -> Result<T> {
    let name = value.trim();
    T::VARIANTS
        .iter()
        .find(|(variant, _)| variant.eq_ignore_ascii_case(name))
        .map(|(_, v)| *v)
        .ok_or_else(|| Error::UnknownVariant {
            value: value.to_string(),
            type_name: std::any::type_name::<T>(),
        })
}
