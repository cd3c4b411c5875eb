mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use context::Context;
use fsstress_core::FsstressError;
use fsstress_core::config::consts::LOG_ENV;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let rendered = e.to_string();
            let err = FsstressError::InvalidArgument(
                rendered.trim_start_matches("error: ").trim_end().to_string(),
            );
            eprintln!("{} {}", "Error:".red().bold(), err);
            std::process::exit(err.exit_code());
        }
    };

    init_logging(cli.verbose);

    let result = Context::from_cli(cli).and_then(|ctx| commands::generate::run(&ctx));

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        let code = e
            .downcast_ref::<FsstressError>()
            .map_or(1, FsstressError::exit_code);
        std::process::exit(code);
    }
}

/// Log to stderr; stdout carries the command stream
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, default_filter))
        .init();
}
