use crate::compare::CompareOptions;
use crate::compare::primitives::*;
use std::collections::BTreeMap;

const COLLAPSE: CompareOptions = CompareOptions::STRICT.with_nil_same_as_empty(true);
const STRICT: CompareOptions = CompareOptions::STRICT;

#[test]
fn scalar_equality_is_plain_equality() {
    assert!(equal_scalar(&"http", &"http"));
    assert!(!equal_scalar(&1_i64, &2_i64));
    assert!(equal_scalar("a str", "a str"));
}

#[test]
fn optional_absent_never_equals_zero() {
    assert!(equal_optional::<i64>(&None, &None));
    assert!(equal_optional(&Some(0_i64), &Some(0)));
    assert!(!equal_optional(&None, &Some(0_i64)));
    assert!(!equal_optional(&Some(0_i64), &None));
    assert!(!equal_optional(&Some(1_i64), &Some(2)));
}

#[test]
fn sequence_absent_and_empty_collapse_only_when_asked() {
    let empty: Vec<i64> = vec![];

    assert!(equal_sequence(None, Some(empty.as_slice()), COLLAPSE));
    assert!(equal_sequence(Some(empty.as_slice()), None, COLLAPSE));
    assert!(!equal_sequence(None, Some(empty.as_slice()), STRICT));
    assert!(equal_sequence::<i64>(None, None, STRICT));
}

#[test]
fn sequence_absent_never_equals_non_empty() {
    let one = [1_i64];
    assert!(!equal_sequence(None, Some(&one[..]), COLLAPSE));
}

#[test]
fn sequence_is_order_sensitive() {
    let ab = ["a", "b"];
    let ba = ["b", "a"];
    assert!(equal_sequence(Some(&ab[..]), Some(&ab[..]), STRICT));
    assert!(!equal_sequence(Some(&ab[..]), Some(&ba[..]), STRICT));
    assert!(!equal_sequence(Some(&ab[..]), Some(&ab[..1]), STRICT));
}

#[test]
fn sequence_by_uses_element_comparator() {
    let a = ["A", "b"];
    let b = ["a", "B"];
    assert!(equal_sequence_by(Some(&a[..]), Some(&b[..]), STRICT, |x, y| {
        x.eq_ignore_ascii_case(y)
    }));
}

#[test]
fn mapping_requires_identical_key_sets() {
    let a = BTreeMap::from([("x", 1), ("y", 2)]);
    let b = BTreeMap::from([("x", 1), ("z", 2)]);
    let c = BTreeMap::from([("y", 2), ("x", 1)]);

    assert!(!equal_mapping(Some(&a), Some(&b), STRICT));
    assert!(equal_mapping(Some(&a), Some(&c), STRICT));
}

#[test]
fn mapping_compares_values_per_key() {
    let a = BTreeMap::from([("x", 1)]);
    let b = BTreeMap::from([("x", 2)]);
    assert!(!equal_mapping(Some(&a), Some(&b), COLLAPSE));
}

#[test]
fn mapping_absent_and_empty_follow_options() {
    let empty: BTreeMap<String, i64> = BTreeMap::new();
    assert!(equal_mapping(None, Some(&empty), COLLAPSE));
    assert!(!equal_mapping(Some(&empty), None, STRICT));
}
