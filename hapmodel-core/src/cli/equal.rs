use crate::cli::CompareArgs;
use crate::snapshot::compare_files;

/// Prints `equal` or `different`. Returns whether the snapshots are equal.
pub fn equal(args: &CompareArgs) -> anyhow::Result<bool> {
    let opts = args.resolve_options()?;
    let report = compare_files(args.kind, &args.left, &args.right, opts)?;

    println!("{}", if report.equal { "equal" } else { "different" });

    Ok(report.equal)
}
