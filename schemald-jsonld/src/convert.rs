//! Container-level write and read paths.

use crate::alternative::{Alternative, DecodeContext, Decoded};
use crate::canonical::Canonicalization;
use crate::entity::DISCRIMINATOR;
use crate::error::{Error, Result, token_kind};
use schemald_values::{Form, OneOf, Values};
use serde_json::Value;
use tracing::trace;

/// Writes a container. Returns `None` for an absent container, in which
/// case the enclosing object omits the key.
///
/// A scalar-form container writes a bare token; sequence form always
/// writes an array, even with zero or one element.
///
/// # Errors
///
/// Returns the first element error, wrapped with its array index.
pub fn encode_values<A, B, C>(
    values: &Values<A, B, C>,
    canonicalization: &Canonicalization,
) -> Result<Option<Value>>
where
    A: Alternative,
    B: Alternative,
    C: Alternative,
{
    match values.form() {
        Form::Absent => Ok(None),
        Form::Null => Ok(Some(Value::Null)),
        Form::Single => match values.get(0) {
            Some(value) => encode_one(value, canonicalization).map(Some),
            None => Ok(None),
        },
        Form::Many => values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                encode_one(value, canonicalization).map_err(|e| e.in_element(index))
            })
            .collect::<Result<Vec<_>>>()
            .map(|items| Some(Value::Array(items))),
    }
}

fn encode_one<A, B, C>(value: &OneOf<A, B, C>, canonicalization: &Canonicalization) -> Result<Value>
where
    A: Alternative,
    B: Alternative,
    C: Alternative,
{
    match value {
        OneOf::First(a) => a.encode(canonicalization),
        OneOf::Second(b) => b.encode(canonicalization),
        OneOf::Third(c) => c.encode(canonicalization),
    }
}

/// Reads a container from the token stored under a property key, or
/// `None` if the key is missing.
///
/// # Errors
///
/// Fails if any element matches no declared alternative; see
/// [`resolve`] for which error is reported.
pub fn decode_values<A, B, C>(token: Option<&Value>, cx: &DecodeContext<'_>) -> Result<Values<A, B, C>>
where
    A: Alternative,
    B: Alternative,
    C: Alternative,
{
    match token {
        None => Ok(Values::absent()),
        Some(Value::Null) => Ok(Values::null()),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(index, item)| resolve(item, cx).map_err(|e| e.in_element(index)))
            .collect::<Result<Vec<_>>>()
            .map(Values::many),
        Some(token) => resolve(token, cx).map(Values::single),
    }
}

/// Resolves one raw token to the first declared alternative that claims it.
///
/// Alternatives are asked strictly in declaration order. When none
/// matches, the error is:
/// - `MalformedScalarFormat` if an alternative recognized the token's shape
///   but could not parse it (e.g. a non-ISO string for a date-only slot);
/// - `UnknownTypeDiscriminator` for an object carrying `@type` when entity
///   alternatives are declared;
/// - `ValueAlternativeMismatch` otherwise.
///
/// # Errors
///
/// See above; errors from inside a claimed entity propagate unchanged.
pub fn resolve<A, B, C>(token: &Value, cx: &DecodeContext<'_>) -> Result<OneOf<A, B, C>>
where
    A: Alternative,
    B: Alternative,
    C: Alternative,
{
    let mut malformed = None;

    match A::decode(token, cx)? {
        Decoded::Matched(a) => {
            trace!(alternative = A::NAME, "resolved token");
            return Ok(OneOf::First(a));
        }
        Decoded::Malformed { format } => malformed = malformed.or(Some(format)),
        Decoded::Declined => {}
    }
    match B::decode(token, cx)? {
        Decoded::Matched(b) => {
            trace!(alternative = B::NAME, "resolved token");
            return Ok(OneOf::Second(b));
        }
        Decoded::Malformed { format } => malformed = malformed.or(Some(format)),
        Decoded::Declined => {}
    }
    match C::decode(token, cx)? {
        Decoded::Matched(c) => {
            trace!(alternative = C::NAME, "resolved token");
            return Ok(OneOf::Third(c));
        }
        Decoded::Malformed { format } => malformed = malformed.or(Some(format)),
        Decoded::Declined => {}
    }

    Err(rejection::<A, B, C>(token, malformed))
}

fn rejection<A, B, C>(token: &Value, malformed: Option<&'static str>) -> Error
where
    A: Alternative,
    B: Alternative,
    C: Alternative,
{
    if let (Some(format), Value::String(text)) = (malformed, token) {
        return Error::MalformedScalarFormat {
            format,
            text: text.clone(),
        };
    }

    let declared = [
        (A::NAME, A::ENTITY, A::DECLARED),
        (B::NAME, B::ENTITY, B::DECLARED),
        (C::NAME, C::ENTITY, C::DECLARED),
    ];
    let entity_names: Vec<&str> = declared
        .iter()
        .filter(|(_, entity, used)| *entity && *used)
        .map(|(name, _, _)| *name)
        .collect();

    if let Some(found) = token
        .as_object()
        .and_then(|map| map.get(DISCRIMINATOR))
        .filter(|_| !entity_names.is_empty())
    {
        return Error::UnknownTypeDiscriminator {
            found: match found {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            },
            expected: entity_names.join(", "),
        };
    }

    Error::ValueAlternativeMismatch {
        token: token_kind(token),
        expected: declared
            .iter()
            .filter(|(_, _, used)| *used)
            .map(|(name, _, _)| *name)
            .collect::<Vec<_>>()
            .join(", "),
    }
}
