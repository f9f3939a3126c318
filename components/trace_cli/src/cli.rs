//! Command line arguments

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Map playground stack traces and syntax errors back to learner source
#[derive(Debug, Parser)]
#[command(name = "playground-trace", version)]
pub struct Cli {
    /// JSON resolver config; overrides --preset
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Built-in resolver config
    #[arg(short, long, value_enum, default_value_t = Preset::Playground, global = true)]
    pub preset: Preset,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the learner frames of a captured stack trace
    Frames(FramesArgs),
    /// Guess a syntax error location from source text
    Infer(InferArgs),
    /// Resolve the single best location for a captured error
    Resolve(ResolveArgs),
    /// Paste stack traces interactively
    Interactive,
}

/// Arguments of `frames`
#[derive(Debug, Args)]
pub struct FramesArgs {
    /// File holding the stack trace text
    #[arg(short, long)]
    pub stack: PathBuf,
}

/// Arguments of `infer`
#[derive(Debug, Args)]
pub struct InferArgs {
    /// Learner source file
    #[arg(short = 'S', long)]
    pub source: PathBuf,

    /// Engine error message
    #[arg(short, long, default_value = "")]
    pub message: String,
}

/// Arguments of `resolve`
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Learner source file
    #[arg(short = 'S', long)]
    pub source: PathBuf,

    /// File holding the error's stack trace text
    #[arg(short, long)]
    pub stack: Option<PathBuf>,

    /// Error name
    #[arg(short, long, default_value = "Error")]
    pub name: String,

    /// Error message
    #[arg(short, long, default_value = "")]
    pub message: String,

    /// Engine-reported line number
    #[arg(long, allow_negative_numbers = true)]
    pub line: Option<i64>,

    /// Engine-reported column number
    #[arg(long, allow_negative_numbers = true)]
    pub column: Option<i64>,
}

/// Built-in resolver configs
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Lesson playground (StudentCode.js shown as file.js)
    Playground,
    /// Standalone editor page (Editor.js)
    Editor,
}

/// Output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON
    Json,
}

impl Cli {
    /// Log filter level implied by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
