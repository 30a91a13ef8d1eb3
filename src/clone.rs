//! Deep clone through a serialization round trip.
//!
//! The copy is rebuilt from an intermediate `serde_json::Value` tree. A type
//! opts in by implementing `Serialize` and `DeserializeOwned`, usually via
//! derive; it does not need to implement `Clone`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Produce a round-trip-equivalent copy of `value`.
pub fn deep_clone<T>(value: &T) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let tree = serde_json::to_value(value)?;
    Ok(serde_json::from_value(tree)?)
}
