use crate::snapshot::LoadError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Names an entity type for callers that pick it at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Acl,
    Backend,
    Bind,
    Configuration,
    Frontend,
    HttpRequestRule,
    Server,
}

impl EntityKind {
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Acl,
        EntityKind::Backend,
        EntityKind::Bind,
        EntityKind::Configuration,
        EntityKind::Frontend,
        EntityKind::HttpRequestRule,
        EntityKind::Server,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Acl => "acl",
            EntityKind::Backend => "backend",
            EntityKind::Bind => "bind",
            EntityKind::Configuration => "configuration",
            EntityKind::Frontend => "frontend",
            EntityKind::HttpRequestRule => "http_request_rule",
            EntityKind::Server => "server",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| LoadError::UnknownKind {
                kind: s.to_string(),
            })
    }
}
