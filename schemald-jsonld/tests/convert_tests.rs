use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta};
use pretty_assertions::assert_eq;
use schemald_jsonld::{
    Canonicalization, DecodeContext, DecodeOptions, Entity, Error, Node, OneOf, Values, entity,
    from_json, from_json_with, from_str, get_property, set_property, to_json, to_string,
    vocab_enum,
};
use serde_json::{Value, json};
use std::sync::Arc;

vocab_enum! {
    pub enum Status = "Status" in "https://schema.org/" {
        Scheduled,
        Cancelled,
    }
}

entity! {
    pub struct Venue = "Venue" {
        [2] name "name": String,
        [3] capacity "capacity": i64,
    }
}

entity! {
    pub struct Address = "Address" {
        [2] street "streetAddress": String,
    }
}

entity! {
    pub struct Session = "Session" {
        [2] name "name": String,
        [3] start "startDate": NaiveDate | DateTime<FixedOffset>,
        [4] duration "duration": TimeDelta,
        [5] location "location": Arc<Venue> | String | Arc<Address>,
        [6] status "status": Status,
        [7] flag "isFree": bool,
        [8] score "score": f64,
        [9] extra "extra": Node,
        [10] utc "endDate" with Canonicalization::UTC: DateTime<FixedOffset>,
        [11] clock "runtime" with Canonicalization::CLOCK: TimeDelta,
        [1] first "identifier": String,
    }
}

fn at(text: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(text).unwrap()
}

fn venue(name: &str) -> Arc<Venue> {
    Arc::new(Venue {
        name: Values::of(name.to_owned()),
        ..Venue::default()
    })
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn decode<A, B, C>(token: Value) -> schemald_jsonld::Result<Values<A, B, C>>
where
    A: schemald_jsonld::Alternative,
    B: schemald_jsonld::Alternative,
    C: schemald_jsonld::Alternative,
{
    let options = DecodeOptions::default();
    schemald_jsonld::decode_values(Some(&token), &DecodeContext::new(&options))
}

// ── Write path ───────────────────────────────────────────────────

#[test]
fn absent_properties_are_omitted() {
    let json = to_json(&Session::default()).unwrap();
    assert_eq!(json, json!({ "@type": "Session" }));
}

#[test]
fn discriminator_is_written_first_then_declared_order() {
    let session = Session {
        name: Values::of("Keynote".to_owned()),
        first: Values::of("s-1".to_owned()),
        flag: Values::of(true),
        ..Session::default()
    };
    let json = to_json(&session).unwrap();
    let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["@type", "identifier", "name", "isFree"]);
}

#[test]
fn single_value_is_written_bare() {
    let session = Session {
        name: Values::of("Keynote".to_owned()),
        ..Session::default()
    };
    assert_eq!(to_json(&session).unwrap()["name"], json!("Keynote"));
}

#[test]
fn sequence_is_written_as_array_even_with_one_element() {
    let mut session = Session::default();
    session.name.extend([OneOf::of("Keynote".to_owned())]);
    assert_eq!(to_json(&session).unwrap()["name"], json!(["Keynote"]));
}

#[test]
fn appended_values_round_trip_as_sequence() {
    let mut session = Session::default();
    session.location.push("Room 3".to_owned());
    assert_eq!(to_json(&session).unwrap()["location"], json!("Room 3"));

    session.location.push(venue("Hall A"));
    let json = to_json(&session).unwrap();
    assert_eq!(
        json["location"],
        json!(["Room 3", { "@type": "Venue", "name": "Hall A" }])
    );
    assert_eq!(from_json::<Session>(&json).unwrap(), session);
}

#[test]
fn empty_sequence_is_written_as_empty_array() {
    let session = Session {
        name: Values::empty(),
        ..Session::default()
    };
    assert_eq!(to_json(&session).unwrap()["name"], json!([]));
}

#[test]
fn null_is_written_as_null() {
    let session = Session {
        name: Values::null(),
        ..Session::default()
    };
    assert_eq!(to_json(&session).unwrap()["name"], Value::Null);
}

#[test]
fn mixed_alternatives_keep_their_order() {
    let session = Session {
        location: Values::many([
            OneOf::of(venue("Hall A")),
            OneOf::of("Room 3".to_owned()),
        ]),
        ..Session::default()
    };
    assert_eq!(
        to_json(&session).unwrap()["location"],
        json!([{ "@type": "Venue", "name": "Hall A" }, "Room 3"])
    );
}

#[test]
fn durations_are_iso8601() {
    let session = Session {
        duration: Values::of(TimeDelta::minutes(90)),
        clock: Values::of(TimeDelta::hours(26)),
        ..Session::default()
    };
    let json = to_json(&session).unwrap();
    assert_eq!(json["duration"], json!("PT1H30M"));
    assert_eq!(json["runtime"], json!("PT26H"));
}

#[test]
fn utc_canonicalization_normalizes_offset() {
    let session = Session {
        start: Values::of(at("2024-05-01T10:00:00+02:00")),
        utc: Values::of(at("2024-05-01T10:00:00+02:00")),
        ..Session::default()
    };
    let json = to_json(&session).unwrap();
    assert_eq!(json["startDate"], json!("2024-05-01T10:00:00+02:00"));
    assert_eq!(json["endDate"], json!("2024-05-01T08:00:00Z"));
}

#[test]
fn enumeration_members_are_written_as_iris() {
    let session = Session {
        status: Values::of(Status::Cancelled),
        ..Session::default()
    };
    assert_eq!(
        to_json(&session).unwrap()["status"],
        json!("https://schema.org/Cancelled")
    );
}

#[test]
fn non_finite_number_fails_with_path() {
    let session = Session {
        score: Values::of(f64::NAN),
        ..Session::default()
    };
    let err = to_json(&session).unwrap_err();
    assert!(matches!(err.root_cause(), Error::NonFiniteNumber(_)));
    assert!(err.to_string().starts_with("Session.score:"));
}

// ── Read path ────────────────────────────────────────────────────

#[test]
fn missing_key_reads_as_absent() {
    let session: Session = from_json(&json!({ "@type": "Session" })).unwrap();
    assert!(session.name.is_absent());
}

#[test]
fn null_reads_as_null() {
    let session: Session = from_json(&json!({ "name": null })).unwrap();
    assert!(session.name.is_null());
    assert_eq!(to_json(&session).unwrap()["name"], Value::Null);
}

#[test]
fn scalar_and_array_forms_are_preserved() {
    let scalar: Values<String> = decode(json!("a")).unwrap();
    assert!(!scalar.is_many());
    assert_eq!(scalar.len(), 1);

    let array: Values<String> = decode(json!(["a"])).unwrap();
    assert!(array.is_many());
    assert_eq!(array.len(), 1);
}

#[test]
fn earlier_alternative_wins_for_timestamps() {
    let values: Values<DateTime<FixedOffset>, String> =
        decode(json!("2024-05-01T10:00:00Z")).unwrap();
    assert_eq!(values.get(0), Some(&OneOf::First(at("2024-05-01T10:00:00Z"))));
}

#[test]
fn unparseable_timestamp_falls_through_to_text() {
    let values: Values<DateTime<FixedOffset>, String> = decode(json!("next tuesday")).unwrap();
    assert_eq!(values.get(0), Some(&OneOf::Second("next tuesday".to_owned())));
}

#[test]
fn date_only_alternative_claims_calendar_dates() {
    let session: Session = from_json(&json!({ "startDate": "2024-05-01" })).unwrap();
    assert_eq!(
        session.start.firsts().next(),
        Some(&NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
    );

    let session: Session = from_json(&json!({ "startDate": "2024-05-01T09:00" })).unwrap();
    assert_eq!(session.start.seconds().next(), Some(&at("2024-05-01T09:00:00Z")));
}

#[test]
fn timestamp_alternative_claims_calendar_dates_before_text() {
    let values: Values<DateTime<FixedOffset>, String> = decode(json!("2024-05-01")).unwrap();
    assert_eq!(values.get(0), Some(&OneOf::First(at("2024-05-01T00:00:00Z"))));
}

#[test]
fn offset_less_timestamps_read_as_utc() {
    for (text, expected) in [
        ("2024-05-01T19:30:00.250", "2024-05-01T19:30:00.250Z"),
        ("2024-05-01T19:30:00", "2024-05-01T19:30:00Z"),
        ("2024-05-01T19:30", "2024-05-01T19:30:00Z"),
        ("2024-05-01", "2024-05-01T00:00:00Z"),
    ] {
        let session: Session = from_json(&json!({ "endDate": text })).unwrap();
        assert_eq!(session.utc.firsts().next(), Some(&at(expected)), "{text}");
        assert_eq!(to_json(&session).unwrap()["endDate"], json!(expected));
    }
}

#[test]
fn duration_reads_hours_and_minutes() {
    let session: Session = from_json(&json!({ "duration": "PT1H30M" })).unwrap();
    assert_eq!(session.duration.firsts().next(), Some(&TimeDelta::minutes(90)));
}

#[test]
fn duration_reads_years_and_months_at_fixed_lengths() {
    let session: Session = from_json(&json!({ "duration": "P1Y2M3DT4H" })).unwrap();
    let expected = TimeDelta::days(365 + 2 * 30 + 3) + TimeDelta::hours(4);
    assert_eq!(session.duration.firsts().next(), Some(&expected));
    assert_eq!(to_json(&session).unwrap()["duration"], json!("P428DT4H"));
}

#[test]
fn malformed_duration_is_reported() {
    let err = from_json::<Session>(&json!({ "duration": "P1H" })).unwrap_err();
    assert!(matches!(
        err.root_cause(),
        Error::MalformedScalarFormat { text, .. } if text == "P1H"
    ));
}

#[test]
fn malformed_timestamp_without_text_fallback_is_reported() {
    let err = from_json::<Session>(&json!({ "endDate": "yesterday" })).unwrap_err();
    assert!(matches!(err.root_cause(), Error::MalformedScalarFormat { .. }));
    assert!(err.to_string().starts_with("Session.endDate:"));
}

#[test]
fn entity_alternative_is_chosen_by_discriminator() {
    let session: Session = from_json(&json!({
        "location": [
            { "@type": "Address", "streetAddress": "1 Main St" },
            { "@type": "Venue", "name": "Hall A" },
            "Room 3"
        ]
    }))
    .unwrap();
    let items = session.location.as_slice();
    assert!(matches!(&items[0], OneOf::Third(address) if address.street.len() == 1));
    assert!(matches!(&items[1], OneOf::First(hall) if hall.name.len() == 1));
    assert_eq!(items[2], OneOf::Second("Room 3".to_owned()));
}

#[test]
fn object_without_discriminator_takes_first_entity_alternative() {
    let session: Session = from_json(&json!({ "location": { "name": "Hall A" } })).unwrap();
    assert!(matches!(session.location.get(0), Some(OneOf::First(_))));
}

#[test]
fn unknown_discriminator_is_reported() {
    init_tracing();
    let err = from_json::<Session>(&json!({ "location": { "@type": "Planet" } })).unwrap_err();
    match err.root_cause() {
        Error::UnknownTypeDiscriminator { found, expected } => {
            assert_eq!(found, "Planet");
            assert_eq!(expected, "Venue, Address");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn token_of_wrong_kind_is_a_mismatch() {
    let err = decode::<i64, bool, schemald_jsonld::Never>(json!("many")).unwrap_err();
    match err {
        Error::ValueAlternativeMismatch { token, expected } => {
            assert_eq!(token, "string");
            assert_eq!(expected, "Integer, Boolean");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn element_errors_carry_their_index() {
    let err = decode::<i64, schemald_jsonld::Never, schemald_jsonld::Never>(json!([1, 2, "x"]))
        .unwrap_err();
    assert!(matches!(err, Error::Element { index: 2, .. }));
}

#[test]
fn enumeration_accepts_iri_forms() {
    for text in [
        "https://schema.org/Scheduled",
        "http://schema.org/Scheduled",
        "Scheduled",
    ] {
        let session: Session = from_json(&json!({ "status": text })).unwrap();
        assert_eq!(session.status.firsts().next(), Some(&Status::Scheduled));
    }
}

#[test]
fn raw_node_keeps_unmodelled_json() {
    let extra = json!({ "@type": "Thing", "nested": [1, 2] });
    let session: Session = from_json(&json!({ "extra": extra.clone() })).unwrap();
    assert_eq!(session.extra.firsts().next(), Some(&Node(extra)));
}

// ── Document level ───────────────────────────────────────────────

#[test]
fn foreign_top_level_discriminator_is_rejected() {
    let err = from_json::<Session>(&json!({ "@type": "Venue" })).unwrap_err();
    assert!(matches!(err, Error::UnknownTypeDiscriminator { .. }));
}

#[test]
fn discriminator_array_naming_the_type_is_accepted() {
    let session: Session = from_json(&json!({ "@type": ["Thing", "Session"] })).unwrap();
    assert_eq!(session, Session::default());
}

#[test]
fn non_object_document_is_a_mismatch() {
    let err = from_json::<Session>(&json!(["Session"])).unwrap_err();
    assert!(matches!(err, Error::ValueAlternativeMismatch { token: "array", .. }));
}

#[test]
fn keywords_and_unknown_keys_are_ignored_by_default() {
    init_tracing();
    let token = json!({
        "@context": "https://schema.org",
        "@id": "urn:session:1",
        "@type": "Session",
        "audienceSize": 12
    });
    let session: Session = from_json(&token).unwrap();
    assert_eq!(session, Session::default());
}

#[test]
fn strict_options_reject_unknown_keys() {
    let token = json!({ "@type": "Session", "audienceSize": 12 });
    let err = from_json_with::<Session>(&token, &DecodeOptions::strict()).unwrap_err();
    match err {
        Error::UnknownProperty { entity, key } => {
            assert_eq!(entity, "Session");
            assert_eq!(key, "audienceSize");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn text_round_trip() {
    let session = Session {
        name: Values::of("Keynote".to_owned()),
        location: Values::many([OneOf::of(venue("Hall A"))]),
        duration: Values::of(TimeDelta::minutes(45)),
        ..Session::default()
    };
    let text = to_string(&session).unwrap();
    assert_eq!(from_str::<Session>(&text).unwrap(), session);
}

#[test]
fn invalid_text_is_a_serialization_error() {
    let err = from_str::<Session>("{ not json").unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

// ── Dynamic access ───────────────────────────────────────────────

#[test]
fn get_and_set_property_by_key() {
    let mut session = Session::default();
    set_property(&mut session, "name", Some(&json!(["a", "b"]))).unwrap();
    assert_eq!(get_property(&session, "name").unwrap(), Some(json!(["a", "b"])));

    set_property(&mut session, "name", None).unwrap();
    assert_eq!(get_property(&session, "name").unwrap(), None);
}

#[test]
fn set_property_failure_leaves_entity_unchanged() {
    let mut session = Session {
        flag: Values::of(false),
        ..Session::default()
    };
    assert!(set_property(&mut session, "isFree", Some(&json!("yes"))).is_err());
    assert_eq!(session.flag, Values::of(false));
}

#[test]
fn unknown_key_is_rejected_by_dynamic_access() {
    assert!(matches!(
        get_property(&Session::default(), "nope"),
        Err(Error::UnknownProperty { .. })
    ));
}

#[test]
fn descriptor_table_lists_alternative_names() {
    let location = schemald_jsonld::find_property::<Session>("location").unwrap();
    assert_eq!(location.alternatives, &["Venue", "Text", "Address"]);
    assert_eq!(Session::TYPE_NAME, "Session");
}

// ── serde bridge ─────────────────────────────────────────────────

#[test]
fn serde_uses_the_jsonld_form() {
    #[derive(serde::Serialize, serde::Deserialize)]
    struct Envelope {
        session: Session,
    }

    let envelope = Envelope {
        session: Session {
            name: Values::of("Keynote".to_owned()),
            ..Session::default()
        },
    };
    let value = serde_json::to_value(&envelope).unwrap();
    assert_eq!(value, json!({ "session": { "@type": "Session", "name": "Keynote" } }));

    let back: Envelope = serde_json::from_value(value).unwrap();
    assert_eq!(back.session, envelope.session);
}
