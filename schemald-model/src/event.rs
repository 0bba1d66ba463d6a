//! The `Event` type.

use crate::agent::{Audience, Organization, Person};
use crate::commerce::{AggregateRating, Offer, Review};
use crate::enumerations::EventStatusType;
use crate::place::{Place, PostalAddress};
use crate::thing::{Language, Thing};
use crate::work::CreativeWork;
use chrono::{DateTime, FixedOffset, TimeDelta};
use schemald_jsonld::entity;
use std::sync::Arc;

entity! {
    /// An event happening at a certain time and location, such as a concert,
    /// lecture, or festival.
    ///
    /// Repeated occurrences are better modelled as separate events, linked
    /// through `super_event` / `sub_event`.
    pub struct Event = "Event" {
        /// Subject matter of the event.
        [2] about "about": Arc<Thing>,
        /// A performer in the event, or a cast member of a recorded one.
        [3] actor "actor": Arc<Person>,
        [4] aggregate_rating "aggregateRating": Arc<AggregateRating>,
        [5] attendee "attendee": Arc<Person> | Arc<Organization>,
        [6] audience "audience": Arc<Audience>,
        [7] composer "composer": Arc<Organization> | Arc<Person>,
        [8] contributor "contributor": Arc<Person> | Arc<Organization>,
        [9] director "director": Arc<Person>,
        /// When admission opens.
        [10] door_time "doorTime": DateTime<FixedOffset>,
        /// Written as an ISO 8601 duration, e.g. `PT1H30M`.
        [11] duration "duration": TimeDelta,
        [12] end_date "endDate": DateTime<FixedOffset>,
        [13] event_status "eventStatus": EventStatusType,
        [14] funder "funder": Arc<Organization> | Arc<Person>,
        /// A language entity, or a BCP 47 tag such as `en-GB`.
        [15] in_language "inLanguage": Arc<Language> | String,
        [16] is_accessible_for_free "isAccessibleForFree": bool,
        [17] location "location": Arc<Place> | String | Arc<PostalAddress>,
        [18] maximum_attendee_capacity "maximumAttendeeCapacity": i32,
        [19] offers "offers": Arc<Offer>,
        [20] organizer "organizer": Arc<Organization> | Arc<Person>,
        [21] performer "performer": Arc<Organization> | Arc<Person>,
        /// Earlier start dates of a rescheduled event, oldest first.
        [22] previous_start_date "previousStartDate": DateTime<FixedOffset>,
        [23] recorded_in "recordedIn": Arc<CreativeWork>,
        [24] remaining_attendee_capacity "remainingAttendeeCapacity": i32,
        [25] review "review": Arc<Review>,
        [26] sponsor "sponsor": Arc<Organization> | Arc<Person>,
        [27] start_date "startDate": DateTime<FixedOffset>,
        /// Smaller events within this one, e.g. the sessions of a conference.
        [28] sub_event "subEvent": Arc<Event>,
        [29] super_event "superEvent": Arc<Event>,
        [30] translator "translator": Arc<Person> | Arc<Organization>,
        /// Free text such as `7-9` or `18+`.
        [31] typical_age_range "typicalAgeRange": String,
        [32] work_featured "workFeatured": Arc<CreativeWork>,
        [33] work_performed "workPerformed": Arc<CreativeWork>,
        [101] alternate_name "alternateName": String,
        [102] description "description": String,
        [103] identifier "identifier": String,
        [104] image "image": String,
        [105] name "name": String,
        [106] same_as "sameAs": String,
        [107] url "url": String,
    }
}
