use crate::compare::primitives::{
    equal_mapping, equal_mapping_by, equal_optional, equal_optional_entity, equal_scalar,
    equal_sequence, equal_sequence_by, same_keys,
};
use crate::compare::{Compare, CompareOptions, DiffNode, DiffResult, Entity, Field};
use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::ControlFlow;

/// Receives the fields that fail their equality check during a walk.
///
/// The diff node is built lazily, so a sink that only needs to know *that*
/// something differs never pays for rendering it.
pub trait Sink {
    fn mismatch(&mut self, field: Field, node: impl FnOnce() -> DiffNode) -> ControlFlow<()>;
}

/// Drives an entity's field manifest, one method per field shape.
///
/// Each method decides equality for its field with the shared primitives and
/// reports a mismatch to the sink. Entities call these from
/// [`Entity::walk`], propagating `ControlFlow::Break` with `?`.
pub struct Walker<S> {
    opts: CompareOptions,
    sink: S,
}

impl<S: Sink> Walker<S> {
    pub fn new(opts: CompareOptions, sink: S) -> Self {
        Self { opts, sink }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn check(
        &mut self,
        field: Field,
        equal: impl FnOnce(CompareOptions) -> bool,
        node: impl FnOnce(CompareOptions) -> DiffNode,
    ) -> ControlFlow<()> {
        let opts = self.opts;
        if field.is_skipped(opts) || equal(opts) {
            return ControlFlow::Continue(());
        }
        self.sink.mismatch(field, || node(opts))
    }

    pub fn scalar<V>(&mut self, field: Field, a: &V, b: &V) -> ControlFlow<()>
    where
        V: PartialEq + Serialize,
    {
        self.check(
            field,
            |_| equal_scalar(a, b),
            |_| DiffNode::changed(a, b),
        )
    }

    pub fn optional<V>(&mut self, field: Field, a: &Option<V>, b: &Option<V>) -> ControlFlow<()>
    where
        V: PartialEq + Serialize,
    {
        self.check(
            field,
            |_| equal_optional(a, b),
            |_| DiffNode::changed(a, b),
        )
    }

    pub fn sequence<V>(
        &mut self,
        field: Field,
        a: &Option<Vec<V>>,
        b: &Option<Vec<V>>,
    ) -> ControlFlow<()>
    where
        V: PartialEq + Serialize,
    {
        self.check(
            field,
            |opts| equal_sequence(a.as_deref(), b.as_deref(), opts),
            |_| DiffNode::changed(a, b),
        )
    }

    pub fn mapping<V>(
        &mut self,
        field: Field,
        a: &Option<BTreeMap<String, V>>,
        b: &Option<BTreeMap<String, V>>,
    ) -> ControlFlow<()>
    where
        V: PartialEq + Serialize,
    {
        self.check(
            field,
            |opts| equal_mapping(a.as_ref(), b.as_ref(), opts),
            |_| DiffNode::changed(a, b),
        )
    }

    pub fn entity<E: Entity>(&mut self, field: Field, a: &E, b: &E) -> ControlFlow<()> {
        self.check(
            field,
            |opts| a.equal_with(b, opts),
            |opts| DiffNode::Nested(a.diff_with(b, opts)),
        )
    }

    /// Absent against present never recurses: the pair is reported raw, with
    /// the absent side rendered as the empty entity when absence collapses.
    pub fn optional_entity<E>(
        &mut self,
        field: Field,
        a: &Option<E>,
        b: &Option<E>,
    ) -> ControlFlow<()>
    where
        E: Entity + Default,
    {
        self.check(
            field,
            |opts| equal_optional_entity(a.as_ref(), b.as_ref(), opts),
            |opts| match (a, b) {
                (Some(a), Some(b)) => DiffNode::Nested(a.diff_with(b, opts)),
                _ if opts.nil_same_as_empty => {
                    let empty = E::default();
                    DiffNode::changed(a.as_ref().unwrap_or(&empty), b.as_ref().unwrap_or(&empty))
                }
                _ => DiffNode::changed(a, b),
            },
        )
    }

    pub fn entity_sequence<E: Entity>(
        &mut self,
        field: Field,
        a: &Option<Vec<E>>,
        b: &Option<Vec<E>>,
    ) -> ControlFlow<()> {
        self.check(
            field,
            |opts| {
                equal_sequence_by(a.as_deref(), b.as_deref(), opts, |x, y| {
                    x.equal_with(y, opts)
                })
            },
            |opts| match (a, b) {
                (Some(xs), Some(ys)) if xs.len() == ys.len() => DiffNode::Indexed(non_empty(
                    xs.iter()
                        .zip(ys)
                        .enumerate()
                        .map(|(index, (x, y))| (index, x.diff_with(y, opts))),
                )),
                _ => DiffNode::changed(a, b),
            },
        )
    }

    pub fn entity_mapping<E: Entity>(
        &mut self,
        field: Field,
        a: &Option<BTreeMap<String, E>>,
        b: &Option<BTreeMap<String, E>>,
    ) -> ControlFlow<()> {
        self.check(
            field,
            |opts| {
                equal_mapping_by(a.as_ref(), b.as_ref(), opts, |x, y| x.equal_with(y, opts))
            },
            |opts| match (a, b) {
                (Some(xs), Some(ys)) if same_keys(xs, ys) => DiffNode::Keyed(non_empty(
                    xs.iter()
                        .filter_map(|(key, x)| ys.get(key).map(|y| (key.clone(), x.diff_with(y, opts)))),
                )),
                _ => DiffNode::changed(a, b),
            },
        )
    }
}

fn non_empty<K: Ord>(elements: impl Iterator<Item = (K, DiffResult)>) -> BTreeMap<K, DiffResult> {
    elements.filter(|(_, diff)| !diff.is_empty()).collect()
}

/// Stops at the first mismatching field.
#[derive(Debug, Default)]
pub(crate) struct FirstMismatch;

impl Sink for FirstMismatch {
    fn mismatch(&mut self, _field: Field, _node: impl FnOnce() -> DiffNode) -> ControlFlow<()> {
        ControlFlow::Break(())
    }
}

/// Records every mismatching field and never stops early.
#[derive(Debug, Default)]
pub(crate) struct Collect {
    result: DiffResult,
}

impl Collect {
    pub(crate) fn into_result(self) -> DiffResult {
        self.result
    }
}

impl Sink for Collect {
    fn mismatch(&mut self, field: Field, node: impl FnOnce() -> DiffNode) -> ControlFlow<()> {
        let node = node();
        debug_assert!(!node.is_empty(), "mismatching field '{}' produced an empty diff", field.name());
        tracing::trace!(
            field = field.name(),
            volatile = field.is_volatile(),
            "field differs"
        );
        self.result.insert(field.name(), node);
        ControlFlow::Continue(())
    }
}
