//! Creative works.

use crate::agent::{Organization, Person};
use crate::thing::Language;
use chrono::{DateTime, FixedOffset, NaiveDate};
use schemald_jsonld::entity;
use std::sync::Arc;

entity! {
    /// A creative work: a recording, a book, a film, a piece of music.
    pub struct CreativeWork = "CreativeWork" {
        [2] author "author": Arc<Person> | Arc<Organization>,
        [3] creator "creator": Arc<Person> | Arc<Organization>,
        [4] date_created "dateCreated": NaiveDate | DateTime<FixedOffset>,
        [5] date_published "datePublished": NaiveDate | DateTime<FixedOffset>,
        [6] headline "headline": String,
        [7] in_language "inLanguage": Arc<Language> | String,
        [8] keywords "keywords": String,
        [9] license "license": Arc<CreativeWork> | String,
        [10] text "text": String,
        [101] alternate_name "alternateName": String,
        [102] description "description": String,
        [103] identifier "identifier": String,
        [104] image "image": String,
        [105] name "name": String,
        [106] same_as "sameAs": String,
        [107] url "url": String,
    }
}
