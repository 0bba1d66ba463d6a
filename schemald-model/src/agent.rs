//! People, organizations and audiences.

use crate::place::{Place, PostalAddress};
use chrono::NaiveDate;
use schemald_jsonld::entity;
use std::sync::Arc;

entity! {
    /// A person, alive, dead, or fictional.
    pub struct Person = "Person" {
        [2] additional_name "additionalName": String,
        [3] address "address": Arc<PostalAddress> | String,
        [4] affiliation "affiliation": Arc<Organization>,
        [5] birth_date "birthDate": NaiveDate,
        [6] email "email": String,
        [7] family_name "familyName": String,
        [8] given_name "givenName": String,
        [9] job_title "jobTitle": String,
        [10] telephone "telephone": String,
        [11] works_for "worksFor": Arc<Organization>,
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
    /// An organization such as a school, club, or company.
    pub struct Organization = "Organization" {
        [2] address "address": Arc<PostalAddress> | String,
        [3] email "email": String,
        [4] founder "founder": Arc<Person>,
        [5] founding_date "foundingDate": NaiveDate,
        [6] legal_name "legalName": String,
        [7] location "location": Arc<Place> | String | Arc<PostalAddress>,
        [8] logo "logo": String,
        [9] member "member": Arc<Organization> | Arc<Person>,
        [10] telephone "telephone": String,
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
    /// Intended audience of an event or work.
    pub struct Audience = "Audience" {
        [2] audience_type "audienceType": String,
        [3] geographic_area "geographicArea": Arc<Place>,
        [101] alternate_name "alternateName": String,
        [102] description "description": String,
        [103] identifier "identifier": String,
        [104] image "image": String,
        [105] name "name": String,
        [106] same_as "sameAs": String,
        [107] url "url": String,
    }
}
