//! Vocabulary enumerations.

use schemald_jsonld::vocab_enum;

vocab_enum! {
    /// Scheduling state of an event.
    pub enum EventStatusType = "EventStatusType" in "https://schema.org/" {
        EventCancelled,
        EventMovedOnline,
        EventPostponed,
        EventRescheduled,
        EventScheduled,
    }
}

vocab_enum! {
    /// Availability of an offered item.
    pub enum ItemAvailability = "ItemAvailability" in "https://schema.org/" {
        BackOrder,
        Discontinued,
        InStock,
        InStoreOnly,
        LimitedAvailability,
        OnlineOnly,
        OutOfStock,
        PreOrder,
        PreSale,
        SoldOut,
    }
}
