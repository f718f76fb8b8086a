use crate::compare::walker::{Collect, FirstMismatch};
use crate::compare::{CompareOptions, DiffResult, Sink, Walker};
use serde::Serialize;
use std::ops::ControlFlow;

/// A configuration record that can be compared field by field.
///
/// Implementors only provide [`Entity::walk`], normally through the
/// [`entity_fields!`](crate::entity_fields) macro. The comparison operations
/// live on [`Compare`], which every `Entity` gets through a blanket impl.
pub trait Entity: Serialize {
    /// Visits every compared field of `a` and `b` in declaration order.
    fn walk<S: Sink>(a: &Self, b: &Self, walker: &mut Walker<S>) -> ControlFlow<()>;
}

/// `Equal` and `Diff` for any [`Entity`].
///
/// Both are folds over the same [`Entity::walk`]. The blanket impl below is
/// the only one coherence allows, so neither can be replaced per type:
///
/// ```compile_fail
/// use hapmodel_core::{Compare, CompareOptions, DiffResult, entity_fields};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Acl {
///     acl_name: String,
/// }
///
/// entity_fields!(Acl { scalar acl_name });
///
/// impl Compare for Acl {
///     fn equal_with(&self, _: &Self, _: CompareOptions) -> bool {
///         true
///     }
///
///     fn diff_with(&self, _: &Self, _: CompareOptions) -> DiffResult {
///         DiffResult::new()
///     }
/// }
/// ```
pub trait Compare: Entity {
    /// Equality under [`CompareOptions::DEFAULT`].
    fn equal(&self, other: &Self) -> bool {
        self.equal_with(other, CompareOptions::DEFAULT)
    }

    fn equal_with(&self, other: &Self, opts: CompareOptions) -> bool;

    /// Differences under [`CompareOptions::DEFAULT`].
    fn diff(&self, other: &Self) -> DiffResult {
        self.diff_with(other, CompareOptions::DEFAULT)
    }

    fn diff_with(&self, other: &Self, opts: CompareOptions) -> DiffResult;
}

impl<T: Entity> Compare for T {
    fn equal_with(&self, other: &Self, opts: CompareOptions) -> bool {
        let mut walker = Walker::new(opts, FirstMismatch);
        T::walk(self, other, &mut walker).is_continue()
    }

    fn diff_with(&self, other: &Self, opts: CompareOptions) -> DiffResult {
        let mut walker = Walker::new(opts, Collect::default());
        // Collect never breaks, every field is visited.
        let _ = T::walk(self, other, &mut walker);
        walker.into_sink().into_result()
    }
}
