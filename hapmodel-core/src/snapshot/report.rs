use crate::compare::{CompareOptions, DiffResult};
use crate::models::EntityKind;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Write;
use std::path::PathBuf;

/// Outcome of comparing two snapshot files.
#[derive(Debug, Clone, Serialize)]
pub struct DiffReport {
    pub kind: EntityKind,
    pub left: PathBuf,
    pub right: PathBuf,
    pub options: CompareOptions,
    pub equal: bool,
    pub diff: DiffResult,
}

impl DiffReport {
    pub fn has_differences(&self) -> bool {
        !self.equal
    }

    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// One `path: left -> right` line per change, nothing when equal.
    pub fn render_plain(&self) -> String {
        self.diff.to_string()
    }

    pub fn render_pretty(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(
            out,
            "{} {} -> {}",
            self.kind.bold(),
            self.left.display(),
            self.right.display()
        );

        if self.equal {
            let _ = writeln!(out, "  {}", "no differences".green());
            return out;
        }

        let changes = self.diff.changes();
        let _ = writeln!(
            out,
            "  {} ({} fields, {} changes)\n",
            "differs".red().bold(),
            self.diff.len(),
            changes.len()
        );

        for change in changes {
            let _ = writeln!(out, "  {}", change.path.bold());
            let _ = writeln!(out, "    {} {}", "-".red(), change.left.red());
            let _ = writeln!(out, "    {} {}", "+".green(), change.right.green());
        }

        out
    }
}
