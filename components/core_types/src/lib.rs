//! Core types shared by the playground trace components.
//!
//! This crate provides the value types exchanged between the sandbox
//! harness, the source-location resolver and whatever renders the console:
//! resolved stack frames, scanner positions, editor cursor targets and the
//! raw error data captured from a sandboxed script.
//!
//! # Overview
//!
//! - [`SourceFrame`] - A call-stack frame expressed in the learner's source
//! - [`SourcePosition`] - 1-based line/column position in a source text
//! - [`EditorPosition`] - 0-based cursor target for the editor widget
//! - [`CapturedError`] - Error data captured from a sandboxed execution
//! - [`ConsoleLevel`] - Severity of a console call
//!
//! # Examples
//!
//! ```
//! use core_types::{EditorPosition, SourceFrame};
//!
//! let frame = SourceFrame::new(Some("greet".to_string()), "file.js", 3, 7);
//! assert_eq!(frame.location(), "file.js:3:7");
//! assert_eq!(frame.to_string(), "at greet (file.js:3:7)");
//!
//! let cursor = EditorPosition::from(&frame);
//! assert_eq!((cursor.line, cursor.ch), (2, 6));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod level;
mod source;

pub use error::CapturedError;
pub use level::ConsoleLevel;
pub use source::{EditorPosition, SourceFrame, SourcePosition};
