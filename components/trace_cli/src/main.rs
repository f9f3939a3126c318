//! Playground trace CLI
//!
//! Entry point for the resolver command line tool. Parses CLI arguments and
//! delegates to the TraceRunner.

use clap::Parser as ClapParser;
use trace_cli::logging::initialize_tracing;
use trace_cli::{Cli, TraceRunner};

fn main() {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level());

    let result = TraceRunner::from_cli(&cli)
        .and_then(|runner| runner.execute(&cli.command, &mut std::io::stdout().lock()));

    if let Err(e) = result {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
