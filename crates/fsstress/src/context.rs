//! Resolved settings for a single run

use anyhow::{Context as _, Result};
use fsstress_core::OutputFormat;
use fsstress_core::config::{Config, WorkloadConfig};
use log::debug;
use std::path::PathBuf;

use crate::cli::Cli;

/// Run settings: defaults, then the config file, then CLI flags
#[derive(Debug)]
pub struct Context {
    pub identifier: String,
    pub workload: WorkloadConfig,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub verbose: bool,
}

impl Context {
    /// Resolve the run settings from parsed arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => Config::default(),
        };

        let mut workload = config.workload;
        if let Some(files) = cli.files {
            workload.files = files;
        }
        if let Some(iters) = cli.iters {
            workload.iters = iters;
        }
        let format = cli.format.map_or(config.output.format, OutputFormat::from);

        debug!(
            "resolved workload: files={} iters={} format={}",
            workload.files, workload.iters, format
        );

        Ok(Self {
            identifier: cli.identifier,
            workload,
            format,
            output: cli.output,
            verbose: cli.verbose,
        })
    }
}
