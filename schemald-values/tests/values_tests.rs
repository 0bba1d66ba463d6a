use schemald_values::{Error, Form, OneOf, Values, values};

type Location = Values<u32, String, bool>;

// ── Construction ─────────────────────────────────────────────────

#[test]
fn default_is_absent() {
    let v: Location = Values::default();
    assert!(v.is_absent());
    assert_eq!(v.form(), Form::Absent);
    assert_eq!(v.len(), 0);
    assert!(v.is_empty());
}

#[test]
fn null_is_distinct_from_absent() {
    let v: Location = Values::null();
    assert!(v.is_null());
    assert!(!v.is_absent());
    assert!(v.is_empty());
    assert_ne!(v, Location::absent());
}

#[test]
fn empty_is_explicit_sequence() {
    let v: Location = Values::empty();
    assert_eq!(v.form(), Form::Many);
    assert!(v.is_empty());
    assert!(!v.is_absent());
}

#[test]
fn of_selects_alternative_from_type() {
    let v: Location = Values::of("Main hall".to_owned());
    assert_eq!(v.form(), Form::Single);
    assert_eq!(v.len(), 1);
    assert_eq!(v.get(0).map(OneOf::index), Some(1));
}

#[test]
fn from_single_alternative_value() {
    let v: Values<String> = "hello".to_owned().into();
    assert_eq!(v.form(), Form::Single);
    assert_eq!(v.firsts().next().map(String::as_str), Some("hello"));
}

#[test]
fn many_preserves_order() {
    let v: Location = Values::many([
        OneOf::First(1),
        OneOf::Second("two".to_owned()),
        OneOf::Third(true),
    ]);
    let indices: Vec<usize> = v.iter().map(OneOf::index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn values_macro_injects_each_element() {
    let v: Location = values![7_u32, "x".to_owned(), false, 9_u32];
    assert!(v.is_many());
    assert_eq!(v.len(), 4);
    assert_eq!(v.firsts().copied().collect::<Vec<_>>(), vec![7, 9]);
    assert_eq!(v.thirds().copied().collect::<Vec<_>>(), vec![false]);
}

#[test]
fn values_macro_without_elements_is_empty_sequence() {
    let v: Location = values![];
    assert_eq!(v.form(), Form::Many);
    assert_eq!(v.len(), 0);
}

#[test]
fn one_element_sequence_differs_from_scalar() {
    let scalar: Values<u32> = Values::of(5_u32);
    let sequence: Values<u32> = values![5_u32];
    assert_eq!(scalar.len(), 1);
    assert_eq!(sequence.len(), 1);
    assert_ne!(scalar, sequence);
}

#[test]
fn collect_builds_sequence() {
    let v: Values<u32> = (1..=3).map(OneOf::First).collect();
    assert!(v.is_many());
    assert_eq!(v.firsts().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

// ── Append ───────────────────────────────────────────────────────

#[test]
fn push_on_absent_becomes_scalar() {
    let mut v: Location = Values::absent();
    v.push(3_u32);
    assert_eq!(v.form(), Form::Single);
}

#[test]
fn push_on_null_becomes_scalar() {
    let mut v: Location = Values::null();
    v.push(true);
    assert_eq!(v.form(), Form::Single);
    assert_eq!(v.len(), 1);
}

#[test]
fn push_on_scalar_becomes_sequence() {
    let mut v: Location = Values::of(1_u32);
    v.push("b".to_owned());
    assert_eq!(v.form(), Form::Many);
    assert_eq!(v.iter().map(OneOf::index).collect::<Vec<_>>(), vec![0, 1]);
}

#[test]
fn push_on_sequence_appends() {
    let mut v: Location = values![1_u32];
    v.push(2_u32);
    v.push(3_u32);
    assert_eq!(v.firsts().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn extend_always_yields_sequence() {
    let mut v: Location = Values::absent();
    v.extend([OneOf::First(1)]);
    assert_eq!(v.form(), Form::Many);
    assert_eq!(v.len(), 1);
}

#[test]
fn try_push_accepts_declared_type() {
    let mut v: Location = Values::absent();
    v.try_push("room".to_owned()).unwrap();
    assert_eq!(v.seconds().next().map(String::as_str), Some("room"));
}

#[test]
fn try_push_rejects_undeclared_type() {
    let mut v: Location = Values::of(1_u32);
    let err = v.try_push(2.5_f64).unwrap_err();
    match err {
        Error::InvalidAlternativeType { found, expected } => {
            assert_eq!(found, "f64");
            assert!(expected.contains("u32"));
            assert!(expected.contains("String"));
            assert!(expected.contains("bool"));
        }
    }
    // Rejected value leaves the container untouched.
    assert_eq!(v.form(), Form::Single);
    assert_eq!(v.len(), 1);
}

#[test]
fn try_from_any_error_lists_only_declared_alternatives() {
    let err = OneOf::<String>::try_from_any(1_i8).unwrap_err();
    let Error::InvalidAlternativeType { expected, .. } = err;
    assert!(!expected.contains("Never"));
}

// ── Enumeration ──────────────────────────────────────────────────

#[test]
fn iteration_is_restartable() {
    let v: Location = values![1_u32, "two".to_owned()];
    let first_pass: Vec<usize> = v.iter().map(OneOf::index).collect();
    let second_pass: Vec<usize> = (&v).into_iter().map(OneOf::index).collect();
    assert_eq!(first_pass, second_pass);
}

#[test]
fn absent_and_null_iterate_nothing() {
    assert_eq!(Location::absent().iter().count(), 0);
    assert_eq!(Location::null().iter().count(), 0);
}

#[test]
fn into_vec_returns_owned_values() {
    let v: Location = Values::of(true);
    assert_eq!(v.into_vec(), vec![OneOf::Third(true)]);
}

#[test]
fn clear_resets_to_absent() {
    let mut v: Location = values![1_u32, 2_u32];
    v.clear();
    assert!(v.is_absent());
}

#[test]
fn match_over_unused_slots_is_exhaustive() {
    let v: Values<String> = Values::of("x".to_owned());
    for value in &v {
        let text = match value {
            OneOf::First(s) => s.clone(),
            OneOf::Second(never) => never.absurd(),
            OneOf::Third(never) => never.absurd(),
        };
        assert_eq!(text, "x");
    }
}
