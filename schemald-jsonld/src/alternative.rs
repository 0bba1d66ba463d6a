//! The per-type half of the conversion protocol.
//!
//! Every type allowed as a property alternative implements [`Alternative`]:
//! how to write one value as a JSON token, and whether a raw token belongs
//! to this alternative at all. The container-level logic in
//! [`crate::convert`] asks each declared alternative in order and keeps the
//! first match.

use crate::canonical::{Canonicalization, Canonicalize};
use crate::error::{Error, Result};
use crate::options::DecodeOptions;
use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta};
use schemald_values::Never;
use serde_json::{Number, Value};

/// Outcome of offering a raw token to one alternative.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<T> {
    /// The token belongs to this alternative.
    Matched(T),
    /// The token has a different shape; try the next alternative.
    Declined,
    /// The token has this alternative's shape but failed to parse.
    Malformed { format: &'static str },
}

/// Settings in effect while decoding one property.
#[derive(Debug, Clone, Copy)]
pub struct DecodeContext<'a> {
    pub canonicalization: Canonicalization,
    pub options: &'a DecodeOptions,
}

impl<'a> DecodeContext<'a> {
    /// Context with default canonicalization.
    #[must_use]
    pub fn new(options: &'a DecodeOptions) -> Self {
        Self {
            canonicalization: Canonicalization::ISO8601,
            options,
        }
    }

    /// Same options, different canonicalization.
    #[must_use]
    pub fn with_canonicalization(&self, canonicalization: Canonicalization) -> Self {
        Self {
            canonicalization,
            options: self.options,
        }
    }
}

/// A type that may be declared as one alternative of a property.
pub trait Alternative: Sized {
    /// Name reported in descriptor tables and diagnostics.
    const NAME: &'static str;

    /// True for entity alternatives, which match objects by `@type`.
    const ENTITY: bool = false;

    /// False only for [`Never`], the filler for unused slots.
    const DECLARED: bool = true;

    /// Writes this value as a JSON token.
    ///
    /// # Errors
    ///
    /// Returns an error if the value has no JSON representation.
    fn encode(&self, canonicalization: &Canonicalization) -> Result<Value>;

    /// Claims, declines, or rejects a raw token.
    ///
    /// # Errors
    ///
    /// Returns an error only when the token was claimed and converting its
    /// contents failed; such errors are not retried against later
    /// alternatives.
    fn decode(token: &Value, cx: &DecodeContext<'_>) -> Result<Decoded<Self>>;
}

impl Alternative for Never {
    const NAME: &'static str = "!";
    const DECLARED: bool = false;

    fn encode(&self, _: &Canonicalization) -> Result<Value> {
        match *self {}
    }

    fn decode(_: &Value, _: &DecodeContext<'_>) -> Result<Decoded<Self>> {
        Ok(Decoded::Declined)
    }
}

impl Alternative for String {
    const NAME: &'static str = "Text";

    fn encode(&self, _: &Canonicalization) -> Result<Value> {
        Ok(Value::String(self.clone()))
    }

    fn decode(token: &Value, _: &DecodeContext<'_>) -> Result<Decoded<Self>> {
        Ok(match token {
            Value::String(s) => Decoded::Matched(s.clone()),
            _ => Decoded::Declined,
        })
    }
}

impl Alternative for bool {
    const NAME: &'static str = "Boolean";

    fn encode(&self, _: &Canonicalization) -> Result<Value> {
        Ok(Value::Bool(*self))
    }

    fn decode(token: &Value, _: &DecodeContext<'_>) -> Result<Decoded<Self>> {
        Ok(match token {
            Value::Bool(b) => Decoded::Matched(*b),
            _ => Decoded::Declined,
        })
    }
}

impl Alternative for i64 {
    const NAME: &'static str = "Integer";

    fn encode(&self, _: &Canonicalization) -> Result<Value> {
        Ok(Value::Number((*self).into()))
    }

    fn decode(token: &Value, _: &DecodeContext<'_>) -> Result<Decoded<Self>> {
        Ok(match token.as_i64() {
            Some(n) => Decoded::Matched(n),
            None => Decoded::Declined,
        })
    }
}

impl Alternative for i32 {
    const NAME: &'static str = "Integer";

    fn encode(&self, _: &Canonicalization) -> Result<Value> {
        Ok(Value::Number((*self).into()))
    }

    fn decode(token: &Value, _: &DecodeContext<'_>) -> Result<Decoded<Self>> {
        Ok(match token.as_i64().and_then(|n| i32::try_from(n).ok()) {
            Some(n) => Decoded::Matched(n),
            None => Decoded::Declined,
        })
    }
}

impl Alternative for f64 {
    const NAME: &'static str = "Number";

    fn encode(&self, _: &Canonicalization) -> Result<Value> {
        Number::from_f64(*self)
            .map(Value::Number)
            .ok_or(Error::NonFiniteNumber(*self))
    }

    fn decode(token: &Value, _: &DecodeContext<'_>) -> Result<Decoded<Self>> {
        Ok(match token {
            Value::Number(n) => n.as_f64().map_or(Decoded::Declined, Decoded::Matched),
            _ => Decoded::Declined,
        })
    }
}

/// Offers a string token to a text-based strategy.
fn decode_text<T>(token: &Value, strategy: &dyn Canonicalize<T>) -> Decoded<T> {
    match token {
        Value::String(text) => match strategy.from_text(text) {
            Some(value) => Decoded::Matched(value),
            None => Decoded::Malformed {
                format: strategy.format(),
            },
        },
        _ => Decoded::Declined,
    }
}

impl Alternative for DateTime<FixedOffset> {
    const NAME: &'static str = "DateTime";

    fn encode(&self, canonicalization: &Canonicalization) -> Result<Value> {
        Ok(Value::String(canonicalization.date_time.to_text(self)))
    }

    fn decode(token: &Value, cx: &DecodeContext<'_>) -> Result<Decoded<Self>> {
        Ok(decode_text(token, cx.canonicalization.date_time))
    }
}

impl Alternative for NaiveDate {
    const NAME: &'static str = "Date";

    fn encode(&self, canonicalization: &Canonicalization) -> Result<Value> {
        Ok(Value::String(canonicalization.date.to_text(self)))
    }

    fn decode(token: &Value, cx: &DecodeContext<'_>) -> Result<Decoded<Self>> {
        Ok(decode_text(token, cx.canonicalization.date))
    }
}

impl Alternative for TimeDelta {
    const NAME: &'static str = "Duration";

    fn encode(&self, canonicalization: &Canonicalization) -> Result<Value> {
        Ok(Value::String(canonicalization.duration.to_text(self)))
    }

    fn decode(token: &Value, cx: &DecodeContext<'_>) -> Result<Decoded<Self>> {
        Ok(decode_text(token, cx.canonicalization.duration))
    }
}

/// Raw JSON kept as-is.
///
/// Declared as the last alternative of an open-ended property, it absorbs
/// whatever the typed alternatives before it decline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node(pub Value);

impl Alternative for Node {
    const NAME: &'static str = "Node";

    fn encode(&self, _: &Canonicalization) -> Result<Value> {
        Ok(self.0.clone())
    }

    fn decode(token: &Value, _: &DecodeContext<'_>) -> Result<Decoded<Self>> {
        Ok(Decoded::Matched(Node(token.clone())))
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        Node(value)
    }
}
