use crate::entity_fields;
use crate::models::BalanceAlgorithm;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Balance {
    pub algorithm: BalanceAlgorithm,

    /// Header inspected by the `hdr` algorithm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdr_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri_depth: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri_len: Option<i64>,

    #[serde(default)]
    pub uri_whole: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_param: Option<String>,
}

entity_fields!(Balance {
    scalar algorithm,
    optional hdr_name,
    optional uri_depth,
    optional uri_len,
    scalar uri_whole,
    optional url_param,
});
