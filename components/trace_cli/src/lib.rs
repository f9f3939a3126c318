//! Playground trace CLI library
//!
//! Provides the argument definitions and the TraceRunner used by the
//! `playground-trace` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod logging;
pub mod repl;
pub mod runner;

pub use cli::{Cli, Command, OutputFormat, Preset};
pub use error::{CliError, CliResult};
pub use runner::TraceRunner;
