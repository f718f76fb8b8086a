use crate::entity_fields;
use crate::models::StickTableType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StickTable {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<StickTableType>,

    /// Entry count, with an optional k/m/g suffix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keylen: Option<i64>,

    #[serde(default)]
    pub nopurge: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub peers: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
}

entity_fields!(StickTable {
    optional kind as "type",
    optional size,
    optional expire,
    optional keylen,
    scalar nopurge,
    optional peers,
    optional store,
});
