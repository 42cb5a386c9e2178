//! CLI argument definitions using clap
//!
//! Commands:
//! - voltform apply --report <path> [--edits <path>] [--profile <path>] [--output <path>]
//! - voltform recompute --report <path> [--profile <path>] [--output <path>]
//! - voltform sections --report <path>
//! - voltform fields --report <path> [--profile <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// voltform - edit, group and temperature-correct electrical test reports
#[derive(Parser, Debug)]
#[command(name = "voltform")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress log lines below ERROR
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply an edit batch to a report, then recompute derived values
    Apply {
        /// Path to the report JSON file
        #[arg(long)]
        report: PathBuf,

        /// Path to the edit batch (JSON array); read from stdin when omitted
        #[arg(long)]
        edits: Option<PathBuf>,

        /// Path to a report profile file
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Write the resulting report here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Recompute all derived values without applying edits
    Recompute {
        /// Path to the report JSON file
        #[arg(long)]
        report: PathBuf,

        /// Path to a report profile file
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Write the resulting report here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print the ordered display sections of a report
    Sections {
        /// Path to the report JSON file
        #[arg(long)]
        report: PathBuf,
    },

    /// Print the widget classification of every leaf field
    Fields {
        /// Path to the report JSON file
        #[arg(long)]
        report: PathBuf,

        /// Path to a report profile file
        #[arg(long)]
        profile: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
