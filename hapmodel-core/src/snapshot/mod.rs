//! Loading entity snapshots from disk and comparing them.

mod compare;
mod error;
mod format;
mod loader;
mod report;

#[cfg(test)]
mod tests;

pub use compare::compare_files;
pub use error::LoadError;
pub use format::SnapshotFormat;
pub use loader::{load_entity, load_options};
pub use report::DiffReport;
