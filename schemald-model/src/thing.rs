//! Generic things and languages.

use schemald_jsonld::entity;

entity! {
    /// The most generic type of item.
    ///
    /// Used where a property accepts anything; a document naming a more
    /// specific type is not accepted here.
    pub struct Thing = "Thing" {
        [101] alternate_name "alternateName": String,
        [102] description "description": String,
        [103] identifier "identifier": String,
        [104] image "image": String,
        [105] name "name": String,
        [106] same_as "sameAs": String,
        [107] url "url": String,
    }
}

entity! {
    /// A natural or programming language.
    pub struct Language = "Language" {
        [101] alternate_name "alternateName": String,
        [102] description "description": String,
        [103] identifier "identifier": String,
        [104] image "image": String,
        [105] name "name": String,
        [106] same_as "sameAs": String,
        [107] url "url": String,
    }
}
