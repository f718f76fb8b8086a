use crate::entity_fields;
use crate::models::{
    Acl, Balance, Cookie, Forwardfor, HttpRequestRule, ProxyMode, Server, ServerParams,
    StickTable,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Backend {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ProxyMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub disabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<Balance>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie: Option<Cookie>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub forwardfor: Option<Forwardfor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stick_table: Option<StickTable>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_server: Option<ServerParams>,

    // Timeouts are in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_timeout: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_timeout: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_timeout: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<i64>,

    /// Keyed by server name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<BTreeMap<String, Server>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl_list: Option<Vec<Acl>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_request_rule_list: Option<Vec<HttpRequestRule>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, Value>>,
}

entity_fields!(Backend {
    scalar name,
    optional mode,
    optional description,
    scalar disabled,
    optional_entity balance,
    optional_entity cookie,
    optional_entity forwardfor,
    optional_entity stick_table,
    optional_entity default_server,
    optional connect_timeout,
    optional server_timeout,
    optional check_timeout,
    optional retries,
    entity_mapping servers,
    entity_sequence acl_list,
    entity_sequence http_request_rule_list,
    mapping metadata,
});
