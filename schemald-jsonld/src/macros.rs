//! Declaration macros for vocabulary types.

/// Declares an entity type, its static property table, and its serde
/// bridge.
///
/// Each property line reads `[order] field "wireKey" : Alt1 | Alt2 | Alt3`,
/// optionally with `with CANONICALIZATION` before the colon to override
/// scalar canonicalization. Every field is a `Values` container over the
/// listed alternatives, in precedence order.
///
/// ```
/// use schemald_jsonld::{entity, Entity, Values};
///
/// entity! {
///     /// A place where something happens.
///     pub struct Venue = "Venue" {
///         [2] name "name": String,
///         [3] capacity "maximumAttendeeCapacity": i32,
///     }
/// }
///
/// let mut venue = Venue::default();
/// venue.name = Values::of("Hall A".to_owned());
/// let json = venue.to_json().unwrap();
/// assert_eq!(json["@type"], "Venue");
/// assert!(json.get("maximumAttendeeCapacity").is_none());
/// ```
#[macro_export]
macro_rules! entity {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident = $type_name:literal {
            $(
                $(#[$field_meta:meta])*
                [$order:literal] $field:ident $key:literal $(with $canon:path)? : $($alt:ty)|+
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $crate::Values<$($alt),+>,
            )*
        }

        impl $crate::Entity for $name {
            const TYPE_NAME: &'static str = $type_name;

            fn properties() -> &'static [$crate::PropertyDescriptor<Self>] {
                static PROPERTIES: &[$crate::PropertyDescriptor<$name>] = &[
                    $(
                        $crate::PropertyDescriptor {
                            key: $key,
                            order: $order,
                            alternatives: &[$(<$alt as $crate::Alternative>::NAME),+],
                            canonicalization: $crate::__canonicalization!($($canon)?),
                            encode: |entity, canonicalization| {
                                $crate::encode_values(&entity.$field, canonicalization)
                            },
                            decode: |entity, token, cx| {
                                entity.$field = $crate::decode_values(token, cx)?;
                                Ok(())
                            },
                        },
                    )*
                ];
                PROPERTIES
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::serde_bridge::serialize(self, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::serde_bridge::deserialize(deserializer)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __canonicalization {
    () => {
        $crate::Canonicalization::ISO8601
    };
    ($canon:path) => {
        $canon
    };
}

/// Declares a vocabulary enumeration whose members are written as IRIs
/// under a base (`https://schema.org/EventScheduled`).
///
/// Decoding accepts the full IRI, its `http` form, or the bare member name;
/// any other string is declined so a later alternative may claim it.
///
/// ```
/// use schemald_jsonld::vocab_enum;
///
/// vocab_enum! {
///     /// Days of the week.
///     pub enum DayOfWeek = "DayOfWeek" in "https://schema.org/" {
///         Monday,
///         Tuesday,
///     }
/// }
///
/// assert_eq!(DayOfWeek::Monday.iri(), "https://schema.org/Monday");
/// assert_eq!(DayOfWeek::from_iri("http://schema.org/Tuesday"), Some(DayOfWeek::Tuesday));
/// ```
#[macro_export]
macro_rules! vocab_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident = $type_name:literal in $base:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Bare member name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }

            /// Full member IRI.
            #[must_use]
            pub const fn iri(self) -> &'static str {
                match self {
                    $($name::$variant => concat!($base, stringify!($variant)),)+
                }
            }

            /// Looks a member up by IRI or bare name.
            #[must_use]
            pub fn from_iri(text: &str) -> Option<Self> {
                match $crate::vocab::member_name(text, $base) {
                    $(stringify!($variant) => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.iri())
            }
        }

        impl $crate::Alternative for $name {
            const NAME: &'static str = $type_name;

            fn encode(
                &self,
                _: &$crate::Canonicalization,
            ) -> $crate::Result<$crate::__private::serde_json::Value> {
                Ok($crate::__private::serde_json::Value::String(self.iri().to_owned()))
            }

            fn decode(
                token: &$crate::__private::serde_json::Value,
                _: &$crate::DecodeContext<'_>,
            ) -> $crate::Result<$crate::Decoded<Self>> {
                Ok(match token.as_str().and_then($name::from_iri) {
                    Some(member) => $crate::Decoded::Matched(member),
                    None => $crate::Decoded::Declined,
                })
            }
        }
    };
}
