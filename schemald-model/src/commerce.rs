//! Offers, reviews and ratings.

use crate::agent::{Organization, Person};
use crate::enumerations::ItemAvailability;
use crate::thing::Thing;
use chrono::{DateTime, FixedOffset, NaiveDate};
use schemald_jsonld::entity;
use std::sync::Arc;

entity! {
    /// An offer to sell or provide access to something, such as a ticket.
    pub struct Offer = "Offer" {
        [2] availability "availability": ItemAvailability,
        [3] availability_ends "availabilityEnds": DateTime<FixedOffset>,
        [4] availability_starts "availabilityStarts": DateTime<FixedOffset>,
        [5] category "category": String,
        [6] item_offered "itemOffered": Arc<Thing>,
        // Prices are published both as numbers and as decimal strings.
        [7] price "price": f64 | String,
        [8] price_currency "priceCurrency": String,
        [9] seller "seller": Arc<Organization> | Arc<Person>,
        [10] valid_from "validFrom": DateTime<FixedOffset>,
        [11] valid_through "validThrough": DateTime<FixedOffset>,
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
    /// A single rating on a scale.
    pub struct Rating = "Rating" {
        [2] author "author": Arc<Person> | Arc<Organization>,
        [3] best_rating "bestRating": f64 | String,
        [4] rating_value "ratingValue": f64 | String,
        [5] worst_rating "worstRating": f64 | String,
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
    /// The average of many ratings.
    pub struct AggregateRating = "AggregateRating" {
        [2] best_rating "bestRating": f64 | String,
        [3] item_reviewed "itemReviewed": Arc<Thing>,
        [4] rating_count "ratingCount": i32,
        [5] rating_value "ratingValue": f64 | String,
        [6] review_count "reviewCount": i32,
        [7] worst_rating "worstRating": f64 | String,
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
    /// A review of an item.
    pub struct Review = "Review" {
        [2] author "author": Arc<Person> | Arc<Organization>,
        [3] date_published "datePublished": NaiveDate | DateTime<FixedOffset>,
        [4] item_reviewed "itemReviewed": Arc<Thing>,
        [5] review_body "reviewBody": String,
        [6] review_rating "reviewRating": Arc<Rating>,
        [101] alternate_name "alternateName": String,
        [102] description "description": String,
        [103] identifier "identifier": String,
        [104] image "image": String,
        [105] name "name": String,
        [106] same_as "sameAs": String,
        [107] url "url": String,
    }
}
