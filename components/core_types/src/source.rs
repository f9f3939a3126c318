//! Source position and stack frame types for learner-code error tracking.
//!
//! This module provides the types used to point back into the learner's
//! original script: resolved call-stack frames, scanner positions and the
//! editor cursor target derived from a frame.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a 1-based position in source code.
///
/// Produced by the syntax scanner while walking the learner's script.
///
/// # Examples
///
/// ```
/// use core_types::SourcePosition;
///
/// let pos = SourcePosition::new(0, 0);
///
/// assert_eq!(pos.line, 1);
/// assert_eq!(pos.column, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePosition {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl SourcePosition {
    /// Create a position, clamping both coordinates to at least 1
    pub fn new(line: u32, column: u32) -> Self {
        Self {
            line: line.max(1),
            column: column.max(1),
        }
    }
}

/// Represents a single frame of a call stack, expressed in terms of the
/// learner's original source text.
///
/// Frames are derived data: a resolver builds fresh ones for every call and
/// never stores them. Line and column are always at least 1.
///
/// # Examples
///
/// ```
/// use core_types::SourceFrame;
///
/// let frame = SourceFrame::new(None, "file.js", -4, 0);
///
/// assert_eq!(frame.line, 1);
/// assert_eq!(frame.column, 1);
/// assert_eq!(frame.to_string(), "at file.js:1:1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceFrame {
    /// Name of the function, or None for anonymous/top-level code
    pub function_name: Option<String>,
    /// Filename shown to the learner
    pub file: String,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl SourceFrame {
    /// Create a frame from signed coordinates, clamping both to at least 1
    pub fn new(function_name: Option<String>, file: impl Into<String>, line: i64, column: i64) -> Self {
        Self {
            function_name,
            file: file.into(),
            line: clamp_coordinate(line),
            column: clamp_coordinate(column),
        }
    }

    /// Create a frame pointing at a scanner position
    pub fn at_position(file: impl Into<String>, position: SourcePosition) -> Self {
        Self::new(
            None,
            file,
            i64::from(position.line),
            i64::from(position.column),
        )
    }

    /// The `file:line:col` label rendered next to a console entry
    pub fn location(&self) -> String {
        format!("{}:{}:{}", self.file, self.line, self.column)
    }
}

impl fmt::Display for SourceFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.function_name {
            Some(name) => write!(f, "at {} ({})", name, self.location()),
            None => write!(f, "at {}", self.location()),
        }
    }
}

fn clamp_coordinate(value: i64) -> u32 {
    u32::try_from(value.max(1)).unwrap_or(u32::MAX)
}

/// A 0-based cursor target for the code editor.
///
/// Clicking a location label moves the editor cursor here and scrolls it
/// into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorPosition {
    /// Line index (0-based)
    pub line: u32,
    /// Character index within the line (0-based)
    pub ch: u32,
}

impl From<&SourceFrame> for EditorPosition {
    fn from(frame: &SourceFrame) -> Self {
        Self {
            line: frame.line.saturating_sub(1),
            ch: frame.column.saturating_sub(1),
        }
    }
}
