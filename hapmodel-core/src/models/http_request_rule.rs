use crate::entity_fields;
use crate::models::{Condition, HttpRequestRuleType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReturnHeader {
    pub name: String,
    pub fmt: String,
}

entity_fields!(ReturnHeader {
    scalar name,
    scalar fmt,
});

/// One `http-request` line of a frontend or backend.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HttpRequestRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,

    #[serde(rename = "type")]
    pub kind: HttpRequestRuleType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cond: Option<Condition>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cond_test: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdr_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdr_format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub redir_value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub redir_code: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deny_status: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_status_code: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_hdrs: Option<Vec<ReturnHeader>>,
}

entity_fields!(HttpRequestRule {
    optional index: volatile,
    scalar kind as "type",
    optional cond,
    optional cond_test,
    optional hdr_name,
    optional hdr_format,
    optional redir_value,
    optional redir_code,
    optional deny_status,
    optional return_status_code,
    optional return_content,
    entity_sequence return_hdrs,
});
