use crate::entity_fields;
use crate::models::Toggle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Forwardfor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Toggle>,

    /// Source network excluded from the header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub except: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,

    #[serde(default)]
    pub ifnone: bool,
}

entity_fields!(Forwardfor {
    optional enabled,
    optional except,
    optional header,
    scalar ifnone,
});
