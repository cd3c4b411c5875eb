//! CLI argument structure using clap

use clap::{Parser, ValueEnum};
use fsstress_core::OutputFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fsstress")]
#[command(
    version,
    about = "Emit a synthetic open/read/write/close workload for file-system stress harnesses",
    long_about = None
)]
pub struct Cli {
    /// Token distinguishing this participant, embedded in every write payload
    #[arg(allow_hyphen_values = true)]
    pub identifier: String,

    /// Number of synthetic files [default: 5]
    #[arg(short = 'n', long, value_name = "N")]
    pub files: Option<usize>,

    /// Number of passes over the file list [default: 5]
    #[arg(short, long, value_name = "N")]
    pub iters: Option<usize>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Write the workload to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Workload config file (TOML)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug output and a run summary to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// One command per line
    Text,
    /// JSON Lines, one object per command
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
