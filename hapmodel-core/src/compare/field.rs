use crate::compare::CompareOptions;

/// One entry of an entity's field manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    name: &'static str,
    volatile: bool,
}

impl Field {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            volatile: false,
        }
    }

    /// Marks the field as skippable under [`CompareOptions::skip_volatile_fields`].
    pub const fn volatile(self) -> Self {
        Self {
            volatile: true,
            ..self
        }
    }

    /// Key used for this field in a [`DiffResult`](crate::compare::DiffResult).
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn is_volatile(&self) -> bool {
        self.volatile
    }

    pub(crate) fn is_skipped(&self, opts: CompareOptions) -> bool {
        self.volatile && opts.skip_volatile_fields
    }
}
