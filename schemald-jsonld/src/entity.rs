//! Entity descriptor tables and the document-level entry points.
//!
//! An entity type describes its properties once, in a static table of
//! [`PropertyDescriptor`]s (usually generated by [`crate::entity!`]). The
//! converter walks that table directly; nothing is discovered at runtime.

use crate::alternative::{Alternative, DecodeContext, Decoded};
use crate::canonical::Canonicalization;
use crate::error::{Error, Result, token_kind};
use crate::options::{DecodeOptions, UnknownProperties};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

/// Wire key of the type discriminator.
pub const DISCRIMINATOR: &str = "@type";

/// Metadata and conversion hooks for one property of entity type `E`.
pub struct PropertyDescriptor<E: 'static> {
    /// Vocabulary property name used as the JSON key.
    pub key: &'static str,
    /// Emission order among siblings; the discriminator is always first.
    pub order: u32,
    /// Names of the declared alternatives, in precedence order.
    pub alternatives: &'static [&'static str],
    /// Scalar canonicalization used for this property.
    pub canonicalization: Canonicalization,
    /// Writes the property; `None` means absent.
    pub encode: fn(&E, &Canonicalization) -> Result<Option<Value>>,
    /// Replaces the property from the token under its key.
    pub decode: fn(&mut E, Option<&Value>, &DecodeContext<'_>) -> Result<()>,
}

impl<E: 'static> std::fmt::Debug for PropertyDescriptor<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("key", &self.key)
            .field("order", &self.order)
            .field("alternatives", &self.alternatives)
            .field("canonicalization", &self.canonicalization)
            .finish_non_exhaustive()
    }
}

/// A vocabulary type: a discriminator plus a fixed table of properties.
pub trait Entity: Default + Send + Sync + 'static {
    /// Value of the `@type` discriminator.
    const TYPE_NAME: &'static str;

    /// The property table, in declaration order.
    fn properties() -> &'static [PropertyDescriptor<Self>];

    /// Serializes this entity; see [`to_json`].
    ///
    /// # Errors
    ///
    /// See [`to_json`].
    fn to_json(&self) -> Result<Value> {
        to_json(self)
    }

    /// Deserializes an entity of this type; see [`from_json`].
    ///
    /// # Errors
    ///
    /// See [`from_json`].
    fn from_json(token: &Value) -> Result<Self> {
        from_json(token)
    }
}

/// Looks up a property descriptor by wire key.
#[must_use]
pub fn find_property<E: Entity>(key: &str) -> Option<&'static PropertyDescriptor<E>> {
    E::properties().iter().find(|p| p.key == key)
}

/// Serializes an entity to a JSON object.
///
/// The discriminator comes first, then every non-absent property in
/// declared order. Nested entities are serialized recursively; the
/// recursion depth equals the depth of the graph.
///
/// # Errors
///
/// Fails if any property value has no JSON representation. The error is
/// wrapped with the entity and property it came from.
pub fn to_json<E: Entity>(entity: &E) -> Result<Value> {
    let mut properties: Vec<&PropertyDescriptor<E>> = E::properties().iter().collect();
    properties.sort_by_key(|p| p.order);

    let mut map = Map::new();
    map.insert(DISCRIMINATOR.to_owned(), Value::String(E::TYPE_NAME.to_owned()));
    for property in properties {
        let token = (property.encode)(entity, &property.canonicalization)
            .map_err(|e| e.in_property(E::TYPE_NAME, property.key))?;
        if let Some(token) = token {
            map.insert(property.key.to_owned(), token);
        }
    }
    Ok(Value::Object(map))
}

/// Deserializes an entity of type `E` with default options.
///
/// # Errors
///
/// See [`from_json_with`].
pub fn from_json<E: Entity>(token: &Value) -> Result<E> {
    from_json_with(token, &DecodeOptions::default())
}

/// Deserializes an entity of type `E`.
///
/// The token must be an object. If it carries a discriminator, it must name
/// `E`; a missing discriminator is accepted as `E`.
///
/// # Errors
///
/// - `ValueAlternativeMismatch` if the token is not an object;
/// - `UnknownTypeDiscriminator` if `@type` names another type;
/// - any property error, wrapped with its entity and key. No partially
///   decoded entity is returned.
pub fn from_json_with<E: Entity>(token: &Value, options: &DecodeOptions) -> Result<E> {
    let Value::Object(map) = token else {
        return Err(Error::ValueAlternativeMismatch {
            token: token_kind(token),
            expected: E::TYPE_NAME.to_owned(),
        });
    };
    if let Some(found) = map.get(DISCRIMINATOR) {
        if !names_type(found, E::TYPE_NAME) {
            debug!(expected = E::TYPE_NAME, %found, "rejecting document with foreign discriminator");
            return Err(Error::UnknownTypeDiscriminator {
                found: match found {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                },
                expected: E::TYPE_NAME.to_owned(),
            });
        }
    }
    decode_object(map, &DecodeContext::new(options))
}

/// True if a discriminator token (string or array of strings) names `type_name`.
fn names_type(discriminator: &Value, type_name: &str) -> bool {
    match discriminator {
        Value::String(s) => s == type_name,
        Value::Array(items) => items.iter().any(|item| item.as_str() == Some(type_name)),
        _ => false,
    }
}

fn decode_object<E: Entity>(map: &Map<String, Value>, cx: &DecodeContext<'_>) -> Result<E> {
    let mut entity = E::default();
    for property in E::properties() {
        let property_cx = cx.with_canonicalization(property.canonicalization);
        (property.decode)(&mut entity, map.get(property.key), &property_cx).map_err(|e| {
            debug!(entity = E::TYPE_NAME, key = property.key, error = %e, "property decode failed");
            e.in_property(E::TYPE_NAME, property.key)
        })?;
    }

    for key in map.keys() {
        // JSON-LD keywords (`@id`, `@context`, ...) are not properties.
        if key.starts_with('@') || find_property::<E>(key).is_some() {
            continue;
        }
        match cx.options.unknown_properties {
            UnknownProperties::Ignore => {
                debug!(entity = E::TYPE_NAME, key = %key, "skipping unknown property");
            }
            UnknownProperties::Reject => {
                return Err(Error::UnknownProperty {
                    entity: E::TYPE_NAME,
                    key: key.clone(),
                });
            }
        }
    }
    Ok(entity)
}

/// Entity alternatives are held by shared reference so one node can sit
/// under several parents.
impl<E: Entity> Alternative for Arc<E> {
    const NAME: &'static str = E::TYPE_NAME;
    const ENTITY: bool = true;

    fn encode(&self, _: &Canonicalization) -> Result<Value> {
        to_json(self.as_ref())
    }

    fn decode(token: &Value, cx: &DecodeContext<'_>) -> Result<Decoded<Self>> {
        let Value::Object(map) = token else {
            return Ok(Decoded::Declined);
        };
        match map.get(DISCRIMINATOR) {
            Some(found) if !names_type(found, E::TYPE_NAME) => Ok(Decoded::Declined),
            _ => decode_object::<E>(map, cx).map(|e| Decoded::Matched(Arc::new(e))),
        }
    }
}

/// Serializes a single property by key.
///
/// Returns `Ok(None)` if the property is absent.
///
/// # Errors
///
/// Fails if `key` is not declared by `E`, or if the value cannot be
/// written.
pub fn get_property<E: Entity>(entity: &E, key: &str) -> Result<Option<Value>> {
    let property = find_property::<E>(key).ok_or_else(|| Error::UnknownProperty {
        entity: E::TYPE_NAME,
        key: key.to_owned(),
    })?;
    (property.encode)(entity, &property.canonicalization)
        .map_err(|e| e.in_property(E::TYPE_NAME, property.key))
}

/// Replaces a single property from a raw token; `None` clears it.
///
/// # Errors
///
/// Fails if `key` is not declared by `E`, or if the token matches none of
/// the property's alternatives. The entity is left unchanged on error.
pub fn set_property<E: Entity>(entity: &mut E, key: &str, token: Option<&Value>) -> Result<()> {
    let property = find_property::<E>(key).ok_or_else(|| Error::UnknownProperty {
        entity: E::TYPE_NAME,
        key: key.to_owned(),
    })?;
    let options = DecodeOptions::default();
    let cx = DecodeContext::new(&options).with_canonicalization(property.canonicalization);
    (property.decode)(entity, token, &cx).map_err(|e| e.in_property(E::TYPE_NAME, property.key))
}

/// Serializes an entity to compact JSON text.
///
/// # Errors
///
/// See [`to_json`].
pub fn to_string<E: Entity>(entity: &E) -> Result<String> {
    Ok(serde_json::to_string(&to_json(entity)?)?)
}

/// Serializes an entity to indented JSON text.
///
/// # Errors
///
/// See [`to_json`].
pub fn to_string_pretty<E: Entity>(entity: &E) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_json(entity)?)?)
}

/// Parses JSON text into an entity of type `E`.
///
/// # Errors
///
/// Returns `Serialization` for invalid JSON text, otherwise see
/// [`from_json`].
pub fn from_str<E: Entity>(text: &str) -> Result<E> {
    let token: Value = serde_json::from_str(text)?;
    from_json(&token)
}
