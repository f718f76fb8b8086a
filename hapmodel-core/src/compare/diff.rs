use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

/// Field-by-field differences between two instances of one entity type.
///
/// An empty result means "no differences", and only ever comes out of a
/// comparison whose boolean counterpart returned `true`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DiffResult {
    entries: BTreeMap<String, DiffNode>,
}

/// What changed under a single key of a [`DiffResult`].
///
/// Serializes untagged: `Changed` as a `[left, right]` pair, the others as
/// JSON objects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DiffNode {
    /// Raw left and right values. Absent renders as `null`.
    Changed(Value, Value),

    /// A nested entity that differs in some of its own fields.
    Nested(DiffResult),

    /// Same-length sequence of entities; only the differing elements are
    /// present, in index order.
    Indexed(BTreeMap<usize, DiffResult>),

    /// Mapping of entities with identical key sets; only the differing
    /// entries are present.
    Keyed(BTreeMap<String, DiffResult>),
}

/// A leaf difference with its full dotted path, as yielded by
/// [`DiffResult::changes`].
#[derive(Debug, Clone, PartialEq)]
pub struct Change<'a> {
    pub path: String,
    pub left: &'a Value,
    pub right: &'a Value,
}

impl DiffResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: &str) -> Option<&DiffNode> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, DiffNode> {
        self.entries.iter()
    }

    pub(crate) fn insert(&mut self, key: impl Into<String>, node: DiffNode) {
        self.entries.insert(key.into(), node);
    }

    /// Flattens the nested structure into leaf changes, in key order.
    ///
    /// Path segments are joined with `.`. A mapping key that contains a `.`
    /// or a `"` is written quoted, as in `servers."app.example.com".weight`.
    pub fn changes(&self) -> Vec<Change<'_>> {
        let mut out = Vec::new();
        self.collect_changes(None, &mut out);
        out
    }

    fn collect_changes<'a>(&'a self, prefix: Option<&str>, out: &mut Vec<Change<'a>>) {
        for (key, node) in &self.entries {
            let path = join(prefix, key);
            match node {
                DiffNode::Changed(left, right) => out.push(Change { path, left, right }),
                DiffNode::Nested(inner) => inner.collect_changes(Some(&path), out),
                DiffNode::Indexed(elements) => {
                    for (index, inner) in elements {
                        inner.collect_changes(Some(&format!("{path}.{index}")), out);
                    }
                }
                DiffNode::Keyed(elements) => {
                    for (key, inner) in elements {
                        inner.collect_changes(Some(&join(Some(&path), key)), out);
                    }
                }
            }
        }
    }
}

impl<'a> IntoIterator for &'a DiffResult {
    type Item = (&'a String, &'a DiffNode);
    type IntoIter = btree_map::Iter<'a, String, DiffNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for DiffResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for change in self.changes() {
            writeln!(f, "{}: {} -> {}", change.path, change.left, change.right)?;
        }
        Ok(())
    }
}

impl DiffNode {
    /// Builds a leaf from two raw values.
    pub fn changed<L, R>(left: &L, right: &R) -> Self
    where
        L: Serialize + ?Sized,
        R: Serialize + ?Sized,
    {
        Self::Changed(raw(left), raw(right))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            DiffNode::Changed(..) => false,
            DiffNode::Nested(inner) => inner.is_empty(),
            DiffNode::Indexed(elements) => elements.values().all(DiffResult::is_empty),
            DiffNode::Keyed(elements) => elements.values().all(DiffResult::is_empty),
        }
    }

    pub fn as_changed(&self) -> Option<(&Value, &Value)> {
        match self {
            DiffNode::Changed(left, right) => Some((left, right)),
            _ => None,
        }
    }

    pub fn as_nested(&self) -> Option<&DiffResult> {
        match self {
            DiffNode::Nested(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_indexed(&self) -> Option<&BTreeMap<usize, DiffResult>> {
        match self {
            DiffNode::Indexed(elements) => Some(elements),
            _ => None,
        }
    }

    pub fn as_keyed(&self) -> Option<&BTreeMap<String, DiffResult>> {
        match self {
            DiffNode::Keyed(elements) => Some(elements),
            _ => None,
        }
    }
}

fn join(prefix: Option<&str>, key: &str) -> String {
    let quoted;
    let key = if key.contains(['.', '"']) {
        quoted = format!("{key:?}");
        quoted.as_str()
    } else {
        key
    };

    match prefix {
        Some(prefix) => format!("{prefix}.{key}"),
        None => key.to_string(),
    }
}

fn raw<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "diff value is not representable as JSON, rendering null");
        Value::Null
    })
}
