//! JSON-LD conversion for schemald values and entities.
//!
//! Writing turns an entity into a JSON object whose first key is the
//! `@type` discriminator, followed by every present property in declared
//! order. Reading walks the same property tables in reverse, resolving each
//! raw token to the first declared alternative that claims it.
//!
//! ```
//! use schemald_jsonld::{entity, from_json, Values};
//! use serde_json::json;
//!
//! entity! {
//!     pub struct Talk = "Talk" {
//!         [2] name "name": String,
//!         [3] seats "seats": i64 | String,
//!     }
//! }
//!
//! let talk: Talk = from_json(&json!({ "@type": "Talk", "seats": [40, "standing"] })).unwrap();
//! assert_eq!(talk.seats.len(), 2);
//! assert!(talk.name.is_absent());
//! ```

mod alternative;
mod canonical;
mod convert;
mod duration;
mod entity;
mod error;
mod macros;
mod options;
pub mod serde_bridge;
pub mod vocab;

pub use alternative::{Alternative, DecodeContext, Decoded, Node};
pub use canonical::{
    Canonicalization, Canonicalize, ClockDuration, Iso8601Date, Iso8601DateTime, Iso8601Duration,
    UtcDateTime,
};
pub use convert::{decode_values, encode_values, resolve};
pub use entity::{
    DISCRIMINATOR, Entity, PropertyDescriptor, find_property, from_json, from_json_with, from_str,
    get_property, set_property, to_json, to_string, to_string_pretty,
};
pub use error::{Error, Result};
pub use options::{DecodeOptions, UnknownProperties};
pub use schemald_values::{Form, Never, OneOf, Values, values};

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;
}
