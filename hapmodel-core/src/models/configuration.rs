use crate::entity_fields;
use crate::models::{Backend, Frontend};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A whole configuration snapshot as returned by the data plane API.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Configuration {
    /// Bumped by the server on every committed transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontends: Option<BTreeMap<String, Frontend>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backends: Option<BTreeMap<String, Backend>>,
}

entity_fields!(Configuration {
    optional version: volatile,
    entity_mapping frontends,
    entity_mapping backends,
});
