use crate::entity_fields;
use crate::models::CookieType;
use serde::{Deserialize, Serialize};

/// Persistence cookie of a backend.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Cookie {
    pub name: String,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<CookieType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Vec<String>>,

    #[serde(default)]
    pub dynamic: bool,

    #[serde(default)]
    pub httponly: bool,

    #[serde(default)]
    pub indirect: bool,

    #[serde(default)]
    pub nocache: bool,

    #[serde(default)]
    pub secure: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxidle: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxlife: Option<i64>,
}

entity_fields!(Cookie {
    scalar name,
    optional kind as "type",
    sequence domains,
    sequence attrs,
    scalar dynamic,
    scalar httponly,
    scalar indirect,
    scalar nocache,
    scalar secure,
    optional maxidle,
    optional maxlife,
});
