//! Console call severities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The console method a sandboxed script called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ConsoleLevel {
    /// `console.log`
    #[default]
    Log,
    /// `console.warn`
    Warn,
    /// `console.error`, uncaught errors and unhandled rejections
    Error,
    /// `console.info`
    Info,
    /// `console.debug`
    Debug,
}

impl ConsoleLevel {
    /// Map a console method name to a level; unknown names are `Log`
    pub fn from_method(name: &str) -> Self {
        match name {
            "warn" => ConsoleLevel::Warn,
            "error" => ConsoleLevel::Error,
            "info" => ConsoleLevel::Info,
            "debug" => ConsoleLevel::Debug,
            _ => ConsoleLevel::Log,
        }
    }

    /// The console method name
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsoleLevel::Log => "log",
            ConsoleLevel::Warn => "warn",
            ConsoleLevel::Error => "error",
            ConsoleLevel::Info => "info",
            ConsoleLevel::Debug => "debug",
        }
    }

    /// Icon glyph shown in front of an entry of this level
    pub fn icon(&self) -> &'static str {
        match self {
            ConsoleLevel::Error => "⨯",
            ConsoleLevel::Warn => "⚠",
            ConsoleLevel::Info => "i",
            ConsoleLevel::Debug => "•",
            ConsoleLevel::Log => "›",
        }
    }
}

impl From<String> for ConsoleLevel {
    fn from(name: String) -> Self {
        ConsoleLevel::from_method(&name)
    }
}

impl fmt::Display for ConsoleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
