//! Generate command - emit the workload stream

use crate::context::Context;
use crate::output;
use anyhow::Result;
use colored::Colorize;
use fsstress_core::workload::{Generator, filenames};
use log::info;

/// Emit the full workload for the resolved context
///
/// Nothing is written to stdout except the command stream itself; status
/// lines go to stderr.
pub fn run(ctx: &Context) -> Result<()> {
    let files: Vec<String> = filenames(ctx.workload.files).collect();
    let mut generator = Generator::new(ctx.identifier.as_str());

    let summary = output::with_sink(ctx.output.as_deref(), |out| {
        Ok(generator.run(out, &files, ctx.workload.iters, ctx.format)?)
    })?;

    let destination = match &ctx.output {
        Some(path) => path.display().to_string(),
        None => "stdout".to_string(),
    };

    info!(
        "emitted {} block(s) for '{}' to {}",
        summary.blocks,
        generator.identifier(),
        destination
    );

    if ctx.verbose {
        eprintln!(
            "{} Wrote {} block(s) to {} (next descriptor {})",
            "✓".green().bold(),
            summary.blocks,
            destination,
            summary.next_descriptor
        );
    }

    Ok(())
}
