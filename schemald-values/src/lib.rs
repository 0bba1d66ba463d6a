//! Polymorphic property values for linked-data entities.
//!
//! A vocabulary property may legally hold one of several unrelated types
//! (a `location` is a `Place`, a plain string, or a `PostalAddress`), and may
//! hold several of them at once. This crate provides the typed container for
//! such a slot:
//! - [`OneOf`]: a tagged value that is exactly one of up to three alternatives
//! - [`Values`]: an order-preserving holder of zero or more `OneOf` values
//!   that also remembers whether the property was absent, null, a single
//!   scalar, or a sequence
//!
//! The container has no knowledge of any wire format; JSON-LD conversion
//! lives in `schemald-jsonld`.

mod one_of;
mod values;

pub use one_of::{At0, At1, At2, Inject, Never, OneOf};
pub use values::{Form, Values};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when storing values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid alternative type: {found} is not one of [{expected}]")]
    InvalidAlternativeType {
        found: &'static str,
        expected: String,
    },
}

/// Builds a [`Values`] in sequence form, injecting each element into the
/// alternative matching its type.
///
/// ```
/// use schemald_values::{values, Values};
///
/// let v: Values<String, i64> = values!["a".to_owned(), 2_i64, "c".to_owned()];
/// assert_eq!(v.len(), 3);
/// assert!(v.is_many());
/// ```
#[macro_export]
macro_rules! values {
    () => {
        $crate::Values::empty()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Values::many([$($crate::OneOf::of($value)),+])
    };
}
