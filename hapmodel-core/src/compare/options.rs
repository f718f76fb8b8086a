use serde::{Deserialize, Serialize};

/// Comparison policy, passed by value into every comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompareOptions {
    /// An absent collection (or nested record) compares equal to an empty one.
    pub nil_same_as_empty: bool,

    /// Ignore fields flagged volatile, e.g. indices assigned by the server.
    pub skip_volatile_fields: bool,
}

impl CompareOptions {
    /// The policy used when a caller does not pass options explicitly.
    pub const DEFAULT: Self = Self {
        nil_same_as_empty: true,
        skip_volatile_fields: true,
    };

    /// Every field counts and absence is never collapsed.
    pub const STRICT: Self = Self {
        nil_same_as_empty: false,
        skip_volatile_fields: false,
    };

    pub const fn with_nil_same_as_empty(self, nil_same_as_empty: bool) -> Self {
        Self {
            nil_same_as_empty,
            ..self
        }
    }

    pub const fn with_skip_volatile_fields(self, skip_volatile_fields: bool) -> Self {
        Self {
            skip_volatile_fields,
            ..self
        }
    }
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
