//! Places and postal addresses.

use schemald_jsonld::entity;
use std::sync::Arc;

entity! {
    /// A physical location.
    pub struct Place = "Place" {
        [2] address "address": Arc<PostalAddress> | String,
        [3] contained_in_place "containedInPlace": Arc<Place>,
        // Coordinates are often published as strings.
        [4] latitude "latitude": f64 | String,
        [5] longitude "longitude": f64 | String,
        [6] maximum_attendee_capacity "maximumAttendeeCapacity": i32,
        [7] telephone "telephone": String,
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
    /// A mailing address.
    pub struct PostalAddress = "PostalAddress" {
        [2] address_country "addressCountry": String,
        [3] address_locality "addressLocality": String,
        [4] address_region "addressRegion": String,
        [5] post_office_box_number "postOfficeBoxNumber": String,
        [6] postal_code "postalCode": String,
        [7] street_address "streetAddress": String,
        [101] alternate_name "alternateName": String,
        [102] description "description": String,
        [103] identifier "identifier": String,
        [104] image "image": String,
        [105] name "name": String,
        [106] same_as "sameAs": String,
        [107] url "url": String,
    }
}
