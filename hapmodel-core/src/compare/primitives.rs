//! Equality for the primitive field shapes, independent of any entity type.
//!
//! Collections are passed as `Option<&C>` so that "absent" and "present but
//! empty" stay distinguishable until [`CompareOptions::nil_same_as_empty`]
//! decides otherwise.

use crate::compare::{Compare, CompareOptions, Entity};
use std::collections::BTreeMap;

pub fn equal_scalar<T: PartialEq + ?Sized>(a: &T, b: &T) -> bool {
    a == b
}

/// Both absent, or both present and equal. Absence never equals a present
/// zero value, whatever the options say.
pub fn equal_optional<T: PartialEq>(a: &Option<T>, b: &Option<T>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Order-sensitive sequence equality.
pub fn equal_sequence<T: PartialEq>(
    a: Option<&[T]>,
    b: Option<&[T]>,
    opts: CompareOptions,
) -> bool {
    equal_sequence_by(a, b, opts, |x, y| x == y)
}

pub fn equal_sequence_by<T>(
    a: Option<&[T]>,
    b: Option<&[T]>,
    opts: CompareOptions,
    eq: impl Fn(&T, &T) -> bool,
) -> bool {
    match presence(a, b, |s: &[T]| s.is_empty(), opts) {
        Presence::Decided(equal) => equal,
        Presence::Both(a, b) => a.len() == b.len() && a.iter().zip(b).all(|(x, y)| eq(x, y)),
    }
}

/// Mapping equality: identical key sets and equal values per key.
pub fn equal_mapping<K: Ord, V: PartialEq>(
    a: Option<&BTreeMap<K, V>>,
    b: Option<&BTreeMap<K, V>>,
    opts: CompareOptions,
) -> bool {
    equal_mapping_by(a, b, opts, |x, y| x == y)
}

pub fn equal_mapping_by<K: Ord, V>(
    a: Option<&BTreeMap<K, V>>,
    b: Option<&BTreeMap<K, V>>,
    opts: CompareOptions,
    eq: impl Fn(&V, &V) -> bool,
) -> bool {
    match presence(a, b, |m: &BTreeMap<K, V>| m.is_empty(), opts) {
        Presence::Decided(equal) => equal,
        Presence::Both(a, b) => {
            a.len() == b.len()
                && a
                    .iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| eq(x, y)))
        }
    }
}

/// A nested entity that may be absent. Under `nil_same_as_empty` an absent
/// side stands for `E::default()`.
pub fn equal_optional_entity<E: Entity + Default>(
    a: Option<&E>,
    b: Option<&E>,
    opts: CompareOptions,
) -> bool {
    let empty = |e: &E| e.equal_with(&E::default(), opts);
    match presence(a, b, empty, opts) {
        Presence::Decided(equal) => equal,
        Presence::Both(a, b) => a.equal_with(b, opts),
    }
}

pub(crate) fn same_keys<K: Ord, V, W>(a: &BTreeMap<K, V>, b: &BTreeMap<K, W>) -> bool {
    a.len() == b.len() && a.keys().all(|key| b.contains_key(key))
}

enum Presence<'a, C: ?Sized> {
    /// Presence alone settles the comparison.
    Decided(bool),
    Both(&'a C, &'a C),
}

fn presence<'a, C: ?Sized>(
    a: Option<&'a C>,
    b: Option<&'a C>,
    is_empty: impl Fn(&C) -> bool,
    opts: CompareOptions,
) -> Presence<'a, C> {
    match (a, b) {
        (None, None) => Presence::Decided(true),
        (Some(a), Some(b)) => Presence::Both(a, b),
        (Some(present), None) | (None, Some(present)) => {
            Presence::Decided(opts.nil_same_as_empty && is_empty(present))
        }
    }
}
