use crate::entity_fields;
use crate::models::SslOptions;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A listening socket of a frontend.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Bind {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,

    /// Upper bound when the bind covers a port range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_range_end: Option<i64>,

    #[serde(default)]
    pub accept_proxy: bool,

    #[serde(default)]
    pub v4v6: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl: Option<SslOptions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, Value>>,
}

entity_fields!(Bind {
    scalar name,
    optional address,
    optional port,
    optional port_range_end,
    scalar accept_proxy,
    scalar v4v6,
    optional thread,
    optional_entity ssl,
    mapping metadata,
});
