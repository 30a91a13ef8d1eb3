//! Subcommand definitions and dispatch for the `strx` binary.

use std::io::Write;

use anyhow::{Context, Result, anyhow};
use chrono::DateTime;
use clap::Subcommand;

use crate::config::Config;
use crate::convert::{self, NamedVariants};
use crate::{clone, predicates, range, validators};

/// Validators selectable with `strx check`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Email,
    Url,
    Integer,
}

impl NamedVariants for CheckKind {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("email", CheckKind::Email),
        ("url", CheckKind::Url),
        ("integer", CheckKind::Integer),
    ];
}

fn parse_check_kind(value: &str) -> std::result::Result<CheckKind, String> {
    convert::to_enum(value).map_err(|e| e.to_string())
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run a validator (email, url, integer) against a value
    Check {
        #[arg(value_parser = parse_check_kind)]
        kind: CheckKind,
        value: String,
    },
    /// Check a value's length against inclusive bounds
    Length {
        value: String,
        #[arg(long, required_unless_present = "max")]
        min: Option<usize>,
        #[arg(long)]
        max: Option<usize>,
    },
    /// Count words
    Words { value: String },
    /// Parse a 32-bit integer, printing 0 when unparseable
    ToInt {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Parse a boolean token (true/t/yes/y, false/f/no/n)
    ToBool { value: String },
    /// Flip the case of every letter
    SwapCase { value: String },
    /// Match a value against an ad-hoc or configured regular expression
    Match {
        value: String,
        #[arg(long, conflicts_with = "name", required_unless_present = "name")]
        pattern: Option<String>,
        #[arg(long)]
        name: Option<String>,
    },
    /// Check that an RFC 3339 date-time lies within [start, end]
    Between {
        value: String,
        start: String,
        end: String,
    },
    /// Deep clone a JSON document through a serialization round trip
    #[command(name = "clone")]
    DeepClone { json: String },
}

/// Execute a subcommand, writing its result to `out`
pub fn run<W: Write>(command: &Command, config: &Config, out: &mut W) -> Result<()> {
    log::debug!("running {:?}", command);

    match command {
        Command::Check { kind, value } => {
            let ok = match kind {
                CheckKind::Email => validators::is_email_address(value)?,
                CheckKind::Url => validators::is_valid_url(value),
                CheckKind::Integer => predicates::is_integer(value),
            };
            writeln!(out, "{}", ok)?;
        }
        Command::Length { value, min, max } => {
            let value = Some(value.as_str());
            let ok = min.is_none_or(|n| predicates::is_min_length(value, n))
                && max.is_none_or(|n| predicates::is_max_length(value, n));
            writeln!(out, "{}", ok)?;
        }
        Command::Words { value } => {
            writeln!(out, "{}", predicates::word_count(value))?;
        }
        Command::ToInt { value } => {
            writeln!(out, "{}", convert::to_int32(value))?;
        }
        Command::ToBool { value } => {
            writeln!(out, "{}", convert::to_boolean(value)?)?;
        }
        Command::SwapCase { value } => {
            writeln!(out, "{}", convert::swap_case(value))?;
        }
        Command::Match {
            value,
            pattern,
            name,
        } => {
            let pattern = match (pattern, name) {
                (Some(pattern), _) => pattern.as_str(),
                (None, Some(name)) => config
                    .pattern(name)
                    .ok_or_else(|| anyhow!("No pattern named '{}' in configuration", name))?,
                (None, None) => return Err(anyhow!("Either --pattern or --name is required")),
            };
            writeln!(out, "{}", predicates::is_match(value, pattern)?)?;
        }
        Command::Between { value, start, end } => {
            let parse = |label: &str, text: &str| {
                DateTime::parse_from_rfc3339(text)
                    .with_context(|| format!("Invalid {} date-time '{}'", label, text))
            };
            let value = parse("value", value.as_str())?;
            let start = parse("start", start.as_str())?;
            let end = parse("end", end.as_str())?;
            writeln!(out, "{}", range::between(&value, &start, &end))?;
        }
        Command::DeepClone { json } => {
            let document: serde_json::Value =
                serde_json::from_str(json).context("Input is not valid JSON")?;
            let copy = clone::deep_clone(&document)?;
            writeln!(out, "{}", serde_json::to_string(&copy)?)?;
        }
    }

    Ok(())
}
