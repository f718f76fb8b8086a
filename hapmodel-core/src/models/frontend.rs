use crate::entity_fields;
use crate::models::{Acl, Bind, Forwardfor, HttpRequestRule, ProxyMode, StickTable};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Frontend {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ProxyMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub disabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_backend: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxconn: Option<i64>,

    /// Client inactivity timeout in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_timeout: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_tag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub forwardfor: Option<Forwardfor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stick_table: Option<StickTable>,

    /// Keyed by bind name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binds: Option<BTreeMap<String, Bind>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl_list: Option<Vec<Acl>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_request_rule_list: Option<Vec<HttpRequestRule>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, Value>>,
}

entity_fields!(Frontend {
    scalar name,
    optional mode,
    optional description,
    scalar disabled,
    optional default_backend,
    optional maxconn,
    optional client_timeout,
    optional log_tag,
    optional_entity forwardfor,
    optional_entity stick_table,
    entity_mapping binds,
    entity_sequence acl_list,
    entity_sequence http_request_rule_list,
    mapping metadata,
});
