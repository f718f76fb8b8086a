mod diff;
mod equal;

#[cfg(test)]
mod tests;

pub use diff::*;
pub use equal::*;

use crate::compare::CompareOptions;
use crate::models::EntityKind;
use crate::snapshot::load_options;
use clap::Args;
use std::path::PathBuf;

/// Inputs shared by every comparison command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Entity type of both snapshots (backend, frontend, bind, server, acl,
    /// http_request_rule, configuration)
    #[arg(short, long)]
    pub kind: EntityKind,

    /// Left-hand snapshot (.json, .yaml, .yml or .hcl)
    pub left: PathBuf,

    /// Right-hand snapshot
    pub right: PathBuf,

    /// HCL file with comparison options
    #[arg(long)]
    pub options: Option<PathBuf>,

    /// Treat absent collections as different from empty ones
    #[arg(long)]
    pub nil_distinct: bool,

    /// Compare volatile fields such as server-assigned indices
    #[arg(long)]
    pub keep_volatile: bool,
}

impl CompareArgs {
    /// Flags win over the options file, which wins over the defaults.
    pub fn resolve_options(&self) -> anyhow::Result<CompareOptions> {
        let mut opts = match &self.options {
            Some(path) => load_options(path)?,
            None => CompareOptions::DEFAULT,
        };

        if self.nil_distinct {
            opts = opts.with_nil_same_as_empty(false);
        }
        if self.keep_volatile {
            opts = opts.with_skip_volatile_fields(false);
        }

        Ok(opts)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Plain,
    Json,
}

/// Process exit status for a finished command: 0 when the snapshots are
/// equal, 1 when they differ, 2 when the comparison could not run.
pub fn exit_status(outcome: &anyhow::Result<bool>) -> u8 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}
