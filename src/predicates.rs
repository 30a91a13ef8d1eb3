//! String Predicates
//!
//! Null, length and shape checks. Absent values are modelled as `None`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;

static NON_INTEGER_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9-]").expect("non-integer pattern compiles"));

static INTEGER_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-[0-9]+$|^[0-9]+$").expect("integer pattern compiles"));

static NON_WORD_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\W+").expect("word separator pattern compiles"));

/// True iff the value is absent.
pub fn is_null(value: Option<&str>) -> bool {
    value.is_none()
}

/// True if the value is absent or has zero length.
pub fn is_null_or_empty(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

/// The trimmed value, or an empty string when absent.
pub fn empty_if_null(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

/// The value when present, otherwise `default`.
pub fn if_null_else<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    value.unwrap_or(default)
}

/// True if the value is present and at most `max` characters long.
pub fn is_max_length(value: Option<&str>, max: usize) -> bool {
    value.is_some_and(|s| s.chars().count() <= max)
}

/// True if the value is present and at least `min` characters long.
pub fn is_min_length(value: Option<&str>, min: usize) -> bool {
    value.is_some_and(|s| s.chars().count() >= min)
}

/// Count the tokens left after splitting on runs of non-word characters.
///
/// Whitespace-only input counts as zero. A separator at either end of the
/// input still produces an (empty) token, so `"hello world."` counts 3.
pub fn word_count(value: &str) -> usize {
    if value.trim().is_empty() {
        return 0;
    }

    NON_WORD_RUN.split(value).count()
}

/// True iff the value is an optional minus sign followed by decimal digits.
pub fn is_integer(value: &str) -> bool {
    !NON_INTEGER_CHAR.is_match(value) && INTEGER_SHAPE.is_match(value)
}

/// True iff `pattern` matches anywhere in the value.
///
/// The pattern is compiled on every call; an invalid pattern is reported as
/// [`crate::Error::InvalidPattern`].
pub fn is_match(value: &str, pattern: &str) -> Result<bool> {
    let re = Regex::new(pattern)?;
    log::trace!("compiled ad-hoc pattern {:?}", pattern);
    Ok(re.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_checks() {
        assert!(is_null(None));
        assert!(!is_null(Some("")));

        assert!(is_null_or_empty(None));
        assert!(is_null_or_empty(Some("")));
        assert!(!is_null_or_empty(Some(" ")));
        assert!(!is_null_or_empty(Some("a")));
    }

    #[test]
    fn test_empty_if_null_trims() {
        assert_eq!(empty_if_null(None), "");
        assert_eq!(empty_if_null(Some("  padded  ")), "padded");
    }

    #[test]
    fn test_if_null_else() {
        assert_eq!(if_null_else(None, "fallback"), "fallback");
        assert_eq!(if_null_else(Some(""), "fallback"), "");
        assert_eq!(if_null_else(Some("value"), "fallback"), "value");
    }

    #[test]
    fn test_length_bounds() {
        assert!(is_max_length(Some("hello"), 5));
        assert!(!is_max_length(Some("hello!"), 5));
        assert!(!is_max_length(None, usize::MAX));

        assert!(is_min_length(Some("hello"), 5));
        assert!(!is_min_length(Some("hi"), 3));
        assert!(!is_min_length(None, 0));
    }

    #[test]
    fn test_length_counts_characters() {
        // four characters, eight bytes
        assert!(is_max_length(Some("éèêë"), 4));
        assert!(is_min_length(Some("éèêë"), 4));
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("  "), 0);
        assert_eq!(word_count("one"), 1);
        assert_eq!(word_count("a b  c"), 3);
        assert_eq!(word_count("one,two;three"), 3);
    }

    #[test]
    fn test_word_count_counts_edge_separators() {
        assert_eq!(word_count("hello world."), 3);
        assert_eq!(word_count(" hello"), 2);
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer("123"));
        assert!(is_integer("-5"));
        assert!(is_integer("0"));

        assert!(!is_integer(""));
        assert!(!is_integer("12a"));
        assert!(!is_integer("--5"));
        assert!(!is_integer("5-"));
        assert!(!is_integer("+5"));
        assert!(!is_integer(" 5"));
        assert!(!is_integer("1.0"));
    }

    #[test]
    fn test_is_match() {
        assert!(is_match("abc123", r"\d+").unwrap());
        assert!(!is_match("abc", r"^\d+$").unwrap());

        let err = is_match("abc", "(unclosed").unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
