use crate::entity_fields;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Acl {
    /// Position in the parent's ACL list, assigned by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,

    pub acl_name: String,

    pub criterion: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

entity_fields!(Acl {
    optional index: volatile,
    scalar acl_name,
    scalar criterion,
    optional value,
});
