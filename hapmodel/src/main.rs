use clap::{Parser, Subcommand};
use hapmodel_core::cli::{self, CompareArgs, OutputFormat};
use hapmodel_core::logging::{self, init_logging};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "hapmodel",
    version,
    about = "hapmodel: compare HAProxy data plane configuration snapshots"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show where two snapshots differ
    Diff {
        #[command(flatten)]
        args: CompareArgs,

        /// Output as JSON
        #[arg(long, conflicts_with = "plain")]
        json: bool,

        /// One line per change, no colors
        #[arg(long)]
        plain: bool,
    },

    /// Report whether two snapshots are equivalent
    Equal {
        #[command(flatten)]
        args: CompareArgs,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(logging::default_log_mode());

    let outcome = match cli.command {
        Command::Diff { args, json, plain } => {
            let format = if json {
                OutputFormat::Json
            } else if plain {
                OutputFormat::Plain
            } else {
                OutputFormat::Pretty
            };
            cli::diff(&args, format)
        }
        Command::Equal { args } => cli::equal(&args),
    };

    if let Err(e) = &outcome {
        eprintln!("hapmodel: {e:#}");
    }

    ExitCode::from(cli::exit_status(&outcome))
}
