//! Source-location resolution for the lesson code playground.
//!
//! Learner scripts run inside a sandboxed execution context. When one of
//! them throws or logs, this crate maps the engine's report back onto the
//! learner's own source text so the console can show a clickable
//! `file:line:col` label.
//!
//! # Overview
//!
//! - [`ResolverConfig`] - Filenames and wrapper offset of one embedding context
//! - [`SourceResolver`] - Stack parsing, syntax inference and fallbacks
//! - [`infer_syntax_position`] - The single-pass syntax error heuristic
//! - [`Console`] - Turns harness [`ConsoleEvent`]s into [`ConsoleEntry`]s
//! - [`SandboxScript`] - Learner code prepared for execution
//!
//! # Examples
//!
//! ```
//! use core_types::CapturedError;
//! use source_resolver::{ResolverConfig, SourceResolver};
//!
//! let resolver = SourceResolver::new(ResolverConfig::playground());
//! let error = CapturedError::new("SyntaxError", "Invalid or unexpected token");
//!
//! let frame = resolver.resolve_error_location(&error, "let s = 'oops\nnext();").unwrap();
//! assert_eq!(frame.location(), "file.js:1:9");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod console;
pub mod frames;
pub mod resolver;
pub mod sandbox;
pub mod syntax;

pub use config::{ConfigError, ResolverConfig, DEFAULT_LINE_OFFSET};
pub use console::{Console, ConsoleArg, ConsoleEntry, ConsoleEvent, ConsoleSink};
pub use frames::GLOBAL_SCOPE;
pub use resolver::{format_trace, SourceResolver};
pub use sandbox::{normalize_source, SandboxScript};
pub use syntax::infer_syntax_position;
