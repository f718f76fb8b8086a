use crate::entity_fields;
use crate::models::{SslOptions, Toggle};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Per-server tuning, also used as a backend's `default-server` line.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServerParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<Toggle>,

    /// Health check interval in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inter: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rise: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fall: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxconn: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<Toggle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_proxy: Option<Toggle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl: Option<SslOptions>,
}

entity_fields!(ServerParams {
    optional check,
    optional inter,
    optional rise,
    optional fall,
    optional weight,
    optional maxconn,
    optional backup,
    optional send_proxy,
    optional cookie,
    optional_entity ssl,
});

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Server {
    pub name: String,

    /// IP address, hostname or socket path.
    pub address: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(flatten)]
    pub params: ServerParams,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, Value>>,
}

entity_fields!(Server {
    scalar name,
    scalar address,
    optional port,
    optional id,
    entity params,
    mapping metadata,
});
