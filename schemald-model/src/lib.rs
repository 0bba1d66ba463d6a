//! A slice of the schema.org vocabulary, declared on `schemald-jsonld`.
//!
//! [`Event`] carries its complete property set; the other types exist so
//! that every `Event` property has a concrete target:
//! - agents: [`Person`], [`Organization`], [`Audience`]
//! - places: [`Place`], [`PostalAddress`]
//! - works and commerce: [`CreativeWork`], [`Offer`], [`Review`],
//!   [`Rating`], [`AggregateRating`]
//! - [`Thing`] and [`Language`] for the open-ended slots
//!
//! Every entity also carries the common `Thing` properties (`name`, `url`,
//! ...), written after its own properties.

mod agent;
mod commerce;
mod enumerations;
mod event;
mod place;
mod thing;
mod work;

pub use agent::{Audience, Organization, Person};
pub use commerce::{AggregateRating, Offer, Rating, Review};
pub use enumerations::{EventStatusType, ItemAvailability};
pub use event::Event;
pub use place::{Place, PostalAddress};
pub use thing::{Language, Thing};
pub use work::CreativeWork;

/// Base IRI of the vocabulary.
pub const VOCABULARY: &str = "https://schema.org/";
