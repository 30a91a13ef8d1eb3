//! Error type shared by every helper in the crate.

use thiserror::Error;

/// Errors raised by the helpers.
///
/// Everything except [`Error::Serialization`] is an invalid-argument
/// condition: the caller handed in a value that violates the function's
/// precondition.
#[derive(Error, Debug)]
pub enum Error {
    #[error("argument '{name}' must not be empty or whitespace")]
    EmptyArgument { name: &'static str },

    #[error("invalid boolean: '{0}'")]
    InvalidBoolean(String),

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("'{value}' is not a variant of {type_name}")]
    UnknownVariant {
        value: String,
        type_name: &'static str,
    },

    #[error("serialization round-trip failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// True when the error signals a bad argument rather than a failure
    /// inside the helper itself.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, Error::Serialization(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
