//! `serde` integration for declared entities.
//!
//! [`crate::entity!`] implements `Serialize`/`Deserialize` by routing through
//! the converter, so an entity embedded in any serde structure produces the
//! same JSON-LD as [`crate::to_json`].

use crate::entity::{Entity, from_json, to_json};
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Serializes an entity through its JSON-LD form.
///
/// # Errors
///
/// Returns the serializer's error if conversion or serialization fails.
pub fn serialize<E, S>(entity: &E, serializer: S) -> Result<S::Ok, S::Error>
where
    E: Entity,
    S: Serializer,
{
    to_json(entity).map_err(S::Error::custom)?.serialize(serializer)
}

/// Deserializes an entity from its JSON-LD form.
///
/// # Errors
///
/// Returns the deserializer's error if the input is not valid JSON or does
/// not decode as `E`.
pub fn deserialize<'de, E, D>(deserializer: D) -> Result<E, D::Error>
where
    E: Entity,
    D: Deserializer<'de>,
{
    let token = Value::deserialize(deserializer)?;
    from_json(&token).map_err(D::Error::custom)
}
