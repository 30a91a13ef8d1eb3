//! Regex Validators
//!
//! Email and URL checks against fixed, anchored patterns. The patterns are
//! compiled once per process and shared.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

/// Letter-led local part, `@`, alphanumeric-led domain and an all-letter
/// top-level label. Local part and first domain label may be a single
/// character. One trailing newline is tolerated at the end.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z](?:[\w.-]*[a-zA-Z0-9])?@[a-zA-Z0-9](?:[\w.-]*[a-zA-Z0-9])?\.[a-zA-Z][a-zA-Z.]*[a-zA-Z]\n?\z";

/// Optional `http(s)://`, optional userinfo, IPv4 literal or hostname,
/// optional port and optional path. Lowercase only; one trailing newline
/// is tolerated at the end.
pub const URL_PATTERN: &str = concat!(
    r"^(https?://)?",
    r"(([0-9a-z_!~*'().&=+$%-]+: )?[0-9a-z_!~*'().&=+$%-]+@)?",
    r"(([0-9]{1,3}\.){3}[0-9]{1,3}",
    r"|",
    r"([0-9a-z_!~*'()-]+\.)*",
    r"([0-9a-z][0-9a-z-]{0,61})?[0-9a-z]",
    r"(\.[a-z]{2,6})?)",
    r"(:[0-9]{1,5})?",
    r"((/?)|",
    r"((/?)|",
    r"(/[0-9a-z_!~*'().;?:@&=+$,%#-]+)+/?))\n?\z",
);

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(URL_PATTERN).expect("url pattern compiles"));

/// Validate an email address.
///
/// Empty or whitespace-only input is an invalid argument rather than a
/// plain `false`.
pub fn is_email_address(email: &str) -> Result<bool> {
    if email.trim().is_empty() {
        return Err(Error::EmptyArgument { name: "email" });
    }

    Ok(EMAIL_REGEX.is_match(email))
}

/// Validate a URL against [`URL_PATTERN`].
///
/// This is a best-effort shape check: no IPv6 hosts, no uppercase hosts and
/// no per-scheme rules.
pub fn is_valid_url(url: &str) -> bool {
    URL_REGEX.is_match(url)
}
