use crate::cli::{CompareArgs, OutputFormat};
use crate::snapshot::compare_files;

/// Prints the differences between two snapshots. Returns whether they are equal.
pub fn diff(args: &CompareArgs, format: OutputFormat) -> anyhow::Result<bool> {
    let opts = args.resolve_options()?;
    let report = compare_files(args.kind, &args.left, &args.right, opts)?;

    match format {
        OutputFormat::Json => println!("{}", report.render_json()?),
        OutputFormat::Plain => print!("{}", report.render_plain()),
        OutputFormat::Pretty => print!("{}", report.render_pretty()),
    }

    Ok(report.equal)
}
