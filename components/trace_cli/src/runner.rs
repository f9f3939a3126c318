//! Command execution
//!
//! The TraceRunner owns the resolver built from the CLI options and turns
//! each subcommand into text or JSON output.

use crate::cli::{Cli, Command, FramesArgs, InferArgs, OutputFormat, Preset, ResolveArgs};
use crate::error::{read_input, CliResult};
use core_types::{CapturedError, SourceFrame};
use serde::Serialize;
use source_resolver::{format_trace, ResolverConfig, SandboxScript, SourceResolver};
use std::io::Write;

/// JSON shape of a single-location answer
#[derive(Debug, Serialize)]
struct LocationReport<'a> {
    location: String,
    resolved: bool,
    frame: Option<&'a SourceFrame>,
}

/// Runs subcommands against one resolver
pub struct TraceRunner {
    resolver: SourceResolver,
    format: OutputFormat,
}

impl TraceRunner {
    /// Create a runner
    ///
    /// # Example
    /// ```
    /// use source_resolver::{ResolverConfig, SourceResolver};
    /// use trace_cli::{OutputFormat, TraceRunner};
    ///
    /// let runner = TraceRunner::new(SourceResolver::new(ResolverConfig::playground()), OutputFormat::Text);
    /// assert_eq!(runner.frames_output("at f (StudentCode.js:4:2)").unwrap(), "at f (file.js:2:2)\n");
    /// ```
    pub fn new(resolver: SourceResolver, format: OutputFormat) -> Self {
        Self { resolver, format }
    }

    /// Build a runner from the global CLI options
    ///
    /// # Errors
    /// Returns `CliError` if the config file cannot be read or is invalid
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let config = match &cli.config {
            Some(path) => ResolverConfig::load(path)?,
            None => match cli.preset {
                Preset::Playground => ResolverConfig::playground(),
                Preset::Editor => ResolverConfig::standalone_editor(),
            },
        };
        Ok(Self::new(SourceResolver::new(config), cli.format))
    }

    /// The resolver in use
    pub fn resolver(&self) -> &SourceResolver {
        &self.resolver
    }

    /// Execute one non-interactive command, writing its output to `out`
    ///
    /// # Errors
    /// Returns `CliError` if an input file cannot be read or output fails
    pub fn execute(&self, command: &Command, out: &mut impl Write) -> CliResult<()> {
        let text = match command {
            Command::Frames(args) => self.frames(args)?,
            Command::Infer(args) => self.infer(args)?,
            Command::Resolve(args) => self.resolve(args)?,
            Command::Interactive => return crate::repl::run_repl(self),
        };
        out.write_all(text.as_bytes())?;
        Ok(())
    }

    fn frames(&self, args: &FramesArgs) -> CliResult<String> {
        let stack = read_input(&args.stack)?;
        self.frames_output(&stack)
    }

    fn infer(&self, args: &InferArgs) -> CliResult<String> {
        let source = self.read_source(&args.source)?;
        let frame = self.resolver.infer_syntax_frame(&source, &args.message);
        self.location_output(frame.as_ref())
    }

    fn resolve(&self, args: &ResolveArgs) -> CliResult<String> {
        let source = self.read_source(&args.source)?;
        let mut error = CapturedError::new(args.name.as_str(), args.message.as_str())
            .with_position(args.line, args.column);
        if let Some(path) = &args.stack {
            error = error.with_stack(read_input(path)?);
        }

        let frame = self.resolver.resolve_error_location(&error, &source);
        self.location_output(frame.as_ref())
    }

    /// Learner source as the sandbox would have run it
    fn read_source(&self, path: &std::path::Path) -> CliResult<String> {
        let raw = read_input(path)?;
        let script = SandboxScript::prepare(&raw, self.resolver.config());
        Ok(script.code().to_string())
    }

    /// Render the frames of `stack`
    ///
    /// # Errors
    /// Returns `CliError::Json` if JSON encoding fails
    pub fn frames_output(&self, stack: &str) -> CliResult<String> {
        let frames = self.resolver.parse_stack_frames(stack);
        tracing::info!(frames = frames.len(), "Resolved stack");

        match self.format {
            OutputFormat::Text if frames.is_empty() => Ok(String::new()),
            OutputFormat::Text => Ok(format!("{}\n", format_trace(&frames))),
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&frames)?)),
        }
    }

    /// Render a single location, falling back to the default location
    ///
    /// # Errors
    /// Returns `CliError::Json` if JSON encoding fails
    pub fn location_output(&self, frame: Option<&SourceFrame>) -> CliResult<String> {
        let location = frame
            .map(SourceFrame::location)
            .unwrap_or_else(|| self.resolver.default_location());

        match self.format {
            OutputFormat::Text => Ok(format!("{}\n", location)),
            OutputFormat::Json => {
                let report = LocationReport {
                    location,
                    resolved: frame.is_some(),
                    frame,
                };
                Ok(format!("{}\n", serde_json::to_string_pretty(&report)?))
            }
        }
    }
}
