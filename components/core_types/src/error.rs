//! Error data captured from a sandboxed script execution.
//!
//! The sandbox hands over whatever the engine attached to a thrown value:
//! a name, a message, the platform stack string and, on some engines,
//! direct line/column fields. None of it is interpreted here.

use serde::{Deserialize, Serialize};

/// Error data captured from a sandboxed execution context.
///
/// This struct is the raw input of location resolution. The stack string is
/// kept verbatim in whatever format the engine produced.
///
/// # Examples
///
/// ```
/// use core_types::CapturedError;
///
/// let error = CapturedError::new("TypeError", "x is not a function")
///     .with_stack("TypeError: x is not a function\n    at StudentCode.js:4:1");
///
/// assert_eq!(error.summary(), "TypeError: x is not a function");
/// assert!(error.stack.is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapturedError {
    /// Error constructor name (`TypeError`, `SyntaxError`, ...)
    pub name: String,
    /// Human-readable error message
    pub message: String,
    /// Platform stack trace string, if the engine provided one
    pub stack: Option<String>,
    /// Engine-specific direct line field (`lineNumber` / `line`)
    pub line_number: Option<i64>,
    /// Engine-specific direct column field (`columnNumber` / `column` / `col`)
    pub column_number: Option<i64>,
}

impl CapturedError {
    /// Create an error with a name and message and no location data
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    /// Attach the platform stack string
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Attach direct line/column fields
    pub fn with_position(mut self, line: Option<i64>, column: Option<i64>) -> Self {
        self.line_number = line;
        self.column_number = column;
        self
    }

    /// Build an error from a window `onerror` callback that carried no error
    /// object.
    ///
    /// The synthetic stack names `source_label` so that the resolver treats
    /// the position as learner code. Missing or zero coordinates become 1.
    pub fn from_window_error(message: &str, line: Option<i64>, column: Option<i64>, source_label: &str) -> Self {
        let message = if message.is_empty() { "Unknown error" } else { message };
        let line = line.filter(|l| *l != 0).unwrap_or(1);
        let column = column.filter(|c| *c != 0).unwrap_or(1);
        Self::new("Error", message).with_stack(format!(
            "Error: {}\nat {}:{}:{}",
            message, source_label, line, column
        ))
    }

    /// Build an error for an unhandled promise rejection whose reason is not
    /// itself error-like.
    pub fn from_rejection(reason: Option<&str>) -> Self {
        let message = match reason {
            Some(reason) if !reason.is_empty() => reason,
            _ => "Unhandled promise rejection",
        };
        Self::new("Error", message)
    }

    /// The `name: message` summary shown in the console
    pub fn summary(&self) -> String {
        format!("{}: {}", self.name, self.message)
    }

    /// The stack string when present, otherwise the summary
    pub fn detail(&self) -> String {
        match &self.stack {
            Some(stack) if !stack.is_empty() => stack.clone(),
            _ => self.summary(),
        }
    }
}
