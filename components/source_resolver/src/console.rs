//! Simulated console entries.
//!
//! The sandbox harness replaces the script's `console`, `onerror` and
//! `onunhandledrejection` hooks with callbacks that push [`ConsoleEvent`]s
//! into a [`ConsoleSink`]. [`Console`] turns each event into a
//! [`ConsoleEntry`]: the message, the clickable location and the
//! expandable trace text. Rendering the entry is up to the caller.

use crate::resolver::{format_trace, SourceResolver};
use core_types::{CapturedError, ConsoleLevel, SourceFrame};
use serde::{Deserialize, Serialize};

/// One argument passed to a console method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ConsoleArg {
    /// `undefined`
    Undefined,
    /// `null`
    Null,
    /// A boolean
    Bool(bool),
    /// A number
    Number(f64),
    /// A bigint, as its decimal digits
    BigInt(String),
    /// A string
    Text(String),
    /// A function, by name
    Function {
        /// Function name, if any
        name: Option<String>,
    },
    /// Any object or array, as its JSON form
    Json(serde_json::Value),
    /// An error-like value
    Error(CapturedError),
}

impl ConsoleArg {
    /// Full textual form of the value
    pub fn display(&self) -> String {
        match self {
            ConsoleArg::Undefined => "undefined".to_string(),
            ConsoleArg::Null => "null".to_string(),
            ConsoleArg::Bool(b) => b.to_string(),
            ConsoleArg::Number(n) => format_number(*n),
            ConsoleArg::BigInt(digits) => digits.clone(),
            ConsoleArg::Text(text) => text.clone(),
            ConsoleArg::Function { name } => {
                let name = name.as_deref().filter(|n| !n.is_empty()).unwrap_or("anonymous");
                format!("[Function {}]", name)
            }
            ConsoleArg::Json(value) => serde_json::to_string_pretty(value)
                .unwrap_or_else(|e| format!("[Object: {}]", e)),
            ConsoleArg::Error(error) => error.summary(),
        }
    }

    /// Single-line form: the first line of [`Self::display`], with ` ...`
    /// appended when the value spans several lines
    pub fn inline(&self) -> String {
        let text = self.display();
        match text.split_once('\n') {
            Some((first, _)) => format!("{} ...", first),
            None => text,
        }
    }

    /// JavaScript falsiness of the value
    pub fn is_falsy(&self) -> bool {
        match self {
            ConsoleArg::Undefined | ConsoleArg::Null => true,
            ConsoleArg::Bool(b) => !b,
            ConsoleArg::Number(n) => *n == 0.0 || n.is_nan(),
            ConsoleArg::BigInt(digits) => digits.trim_start_matches('-') == "0",
            ConsoleArg::Text(text) => text.is_empty(),
            ConsoleArg::Function { .. } | ConsoleArg::Json(_) | ConsoleArg::Error(_) => false,
        }
    }

    fn as_error(&self) -> Option<&CapturedError> {
        match self {
            ConsoleArg::Error(error) => Some(error),
            _ => None,
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        format!("{}Infinity", sign)
    } else if n == 0.0 {
        "0".to_string()
    } else {
        let sign = if n < 0.0 { "-" } else { "" };
        let mut buffer = ryu::Buffer::new();
        format!("{}{}", sign, js_decimal(buffer.format_finite(n.abs())))
    }
}

/// Rewrite a shortest round-trip rendering (`123.5`, `1e21`, `1.5e-7`)
/// with the Number::toString layout: plain decimal for exponents in
/// `-7 < e < 21`, else `d.ddde±x`
fn js_decimal(shortest: &str) -> String {
    let (mantissa, exponent) = match shortest.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (shortest, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let joined = format!("{}{}", int_part, frac_part);
    let trimmed = joined.trim_start_matches('0');
    // decimal point sits after `point` digits of `digits`
    let point = int_part.len() as i32 + exponent - (joined.len() - trimmed.len()) as i32;
    let digits = trimmed.trim_end_matches('0');
    if digits.is_empty() {
        return "0".to_string();
    }
    let k = digits.len() as i32;

    if k <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (whole, frac) = digits.split_at(point as usize);
        format!("{}.{}", whole, frac)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let e = point - 1;
        let e_sign = if e < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, e_sign, e.abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, e_sign, e.abs())
        }
    }
}

/// Data delivered by the sandbox harness for one console call or
/// uncaught error
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleEvent {
    /// Console method that was called
    pub level: ConsoleLevel,
    /// Arguments passed to it
    pub args: Vec<ConsoleArg>,
    /// Stack captured at the call site, for console calls
    pub call_stack: Option<String>,
    /// Whether the event comes from an uncaught error or rejection
    pub uncaught: bool,
    /// Error attached by the harness, used when nothing else locates the entry
    pub error: Option<CapturedError>,
}

impl ConsoleEvent {
    /// A `console.<level>(...)` call
    pub fn call(level: ConsoleLevel, args: Vec<ConsoleArg>, call_stack: Option<String>) -> Self {
        Self {
            level,
            args,
            call_stack,
            ..Self::default()
        }
    }

    /// An uncaught error thrown by the script
    pub fn uncaught(error: CapturedError) -> Self {
        Self {
            level: ConsoleLevel::Error,
            args: vec![ConsoleArg::Error(error.clone())],
            call_stack: None,
            uncaught: true,
            error: Some(error),
        }
    }

    /// A window `onerror` notification; engines omit the error object for
    /// some failures, in which case one is synthesized from the position
    pub fn window_error(
        message: &str,
        line: Option<i64>,
        column: Option<i64>,
        error: Option<CapturedError>,
        source_label: &str,
    ) -> Self {
        let error = error
            .unwrap_or_else(|| CapturedError::from_window_error(message, line, column, source_label));
        Self::uncaught(error)
    }

    /// An unhandled promise rejection
    pub fn unhandled_rejection(reason: &ConsoleArg) -> Self {
        let error = match reason {
            ConsoleArg::Error(error) => error.clone(),
            other if other.is_falsy() => CapturedError::from_rejection(None),
            other => CapturedError::from_rejection(Some(&other.display())),
        };
        Self::uncaught(error)
    }
}

/// A console entry ready to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleEntry {
    /// Entry severity
    pub level: ConsoleLevel,
    /// Message line
    pub message: String,
    /// Resolved location; clicking the label moves the editor here
    pub location: Option<SourceFrame>,
    /// Location label (`file:line:col`), the default location when unresolved
    pub location_text: String,
    /// Expandable detail text
    pub trace: String,
    /// Whether the entry has an expandable detail section
    pub has_details: bool,
    /// Whether the detail section starts expanded
    pub open_by_default: bool,
}

/// Capability handed to the sandbox harness for reporting console activity
pub trait ConsoleSink {
    /// Deliver one event
    fn emit(&mut self, event: ConsoleEvent);
}

/// Builds console entries for one run of a learner's script
#[derive(Debug, Clone)]
pub struct Console<'r> {
    resolver: &'r SourceResolver,
    source: String,
    entries: Vec<ConsoleEntry>,
}

impl<'r> Console<'r> {
    /// Create a console for a run of `source`
    pub fn new(resolver: &'r SourceResolver, source: impl Into<String>) -> Self {
        Self {
            resolver,
            source: source.into(),
            entries: Vec::new(),
        }
    }

    /// Entries recorded so far, oldest first
    pub fn entries(&self) -> &[ConsoleEntry] {
        &self.entries
    }

    /// Whether nothing was recorded (the harness shows a placeholder)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget all recorded entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Build the entry for one event without recording it
    pub fn report(&self, event: &ConsoleEvent) -> ConsoleEntry {
        let level = event.level;
        let resolver = self.resolver;

        let (message, mut location, trace) = match event.args.iter().find_map(ConsoleArg::as_error) {
            Some(error) => self.describe_error(error, event.uncaught),
            None => self.describe_call(event),
        };

        if location.is_none() {
            location = event.error.as_ref().and_then(|e| resolver.fallback_frame(e));
        }

        let location_text = location
            .as_ref()
            .map(SourceFrame::location)
            .unwrap_or_else(|| resolver.default_location());
        let has_details = level != ConsoleLevel::Log && !trace.is_empty();

        ConsoleEntry {
            level,
            message: if message.is_empty() { "undefined".to_string() } else { message },
            location,
            location_text,
            trace,
            has_details,
            open_by_default: has_details && level == ConsoleLevel::Error,
        }
    }

    fn describe_error(&self, error: &CapturedError, uncaught: bool) -> (String, Option<SourceFrame>, String) {
        let resolver = self.resolver;
        let frames = error
            .stack
            .as_deref()
            .map(|stack| resolver.parse_stack_frames(stack))
            .unwrap_or_default();

        let location = frames
            .first()
            .cloned()
            .or_else(|| resolver.infer_syntax_frame(&self.source, &error.message))
            .or_else(|| resolver.fallback_frame(error));

        let trace = if frames.is_empty() {
            location.as_ref().map(ToString::to_string).unwrap_or_default()
        } else {
            format_trace(&frames)
        };

        let prefix = if uncaught { "Uncaught " } else { "" };
        (format!("{}{}", prefix, error.summary()), location, trace)
    }

    fn describe_call(&self, event: &ConsoleEvent) -> (String, Option<SourceFrame>, String) {
        let mut details = Vec::new();
        let pieces: Vec<String> = event
            .args
            .iter()
            .map(|arg| match arg {
                ConsoleArg::Json(_) => {
                    details.push(arg.display());
                    arg.inline()
                }
                _ => arg.inline(),
            })
            .collect();

        let frames = event
            .call_stack
            .as_deref()
            .map(|stack| self.resolver.parse_stack_frames(stack))
            .unwrap_or_default();
        let location = frames.first().cloned();

        let mut trace = String::new();
        if event.level != ConsoleLevel::Log {
            trace = format_trace(&frames);
            if !details.is_empty() {
                if !trace.is_empty() {
                    trace.push_str("\n\n");
                }
                trace.push_str(&details.join("\n\n"));
            }
            if trace.is_empty() {
                if let Some(frame) = &location {
                    trace = frame.to_string();
                }
            }
        }

        (pieces.join(" "), location, trace)
    }
}

impl ConsoleSink for Console<'_> {
    fn emit(&mut self, event: ConsoleEvent) {
        let entry = self.report(&event);
        tracing::info!(
            level = %entry.level,
            location = %entry.location_text,
            message = %entry.message,
            "Console entry"
        );
        self.entries.push(entry);
    }
}
