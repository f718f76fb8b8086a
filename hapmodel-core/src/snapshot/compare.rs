use crate::compare::{Compare, CompareOptions, DiffResult, Entity};
use crate::models::{Acl, Backend, Bind, Configuration, EntityKind, Frontend, HttpRequestRule, Server};
use crate::snapshot::{DiffReport, LoadError, load_entity};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Loads two snapshots as `kind` and compares them.
pub fn compare_files(
    kind: EntityKind,
    left: &Path,
    right: &Path,
    opts: CompareOptions,
) -> Result<DiffReport, LoadError> {
    let (equal, diff) = match kind {
        EntityKind::Acl => compare_as::<Acl>(left, right, opts)?,
        EntityKind::Backend => compare_as::<Backend>(left, right, opts)?,
        EntityKind::Bind => compare_as::<Bind>(left, right, opts)?,
        EntityKind::Configuration => compare_as::<Configuration>(left, right, opts)?,
        EntityKind::Frontend => compare_as::<Frontend>(left, right, opts)?,
        EntityKind::HttpRequestRule => compare_as::<HttpRequestRule>(left, right, opts)?,
        EntityKind::Server => compare_as::<Server>(left, right, opts)?,
    };

    tracing::debug!(
        kind = %kind,
        left = %left.display(),
        right = %right.display(),
        equal,
        differences = diff.len(),
        "compared snapshots"
    );

    Ok(DiffReport {
        kind,
        left: left.to_path_buf(),
        right: right.to_path_buf(),
        options: opts,
        equal,
        diff,
    })
}

fn compare_as<T>(left: &Path, right: &Path, opts: CompareOptions) -> Result<(bool, DiffResult), LoadError>
where
    T: Entity + DeserializeOwned,
{
    let a: T = load_entity(left)?;
    let b: T = load_entity(right)?;

    let equal = a.equal_with(&b, opts);
    let diff = a.diff_with(&b, opts);
    debug_assert_eq!(equal, diff.is_empty());

    Ok((equal, diff))
}
