//! Stack-trace line parsing.
//!
//! Engines disagree on the stack format: V8 writes `at fn (file:1:2)` or
//! `at file:1:2`, SpiderMonkey and JavaScriptCore write `fn@file:1:2`. This
//! module splits either form into a function name and a location and pulls
//! the authoritative `file:line:col` out of the location.

use crate::config::{ResolverConfig, ANONYMOUS_FILE};
use core_types::SourceFrame;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static CALL_SITE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s+\((.*)\)$").expect("call site pattern"));

static LOCATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^\s()]+):(\d+):(\d+)").expect("locator pattern"));

static VM_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^VM\d+$").expect("vm placeholder pattern"));

/// Marker replacing function names of top-level (eval'd) code
pub const GLOBAL_SCOPE: &str = "<global>";

/// One trace line split into its parts, before any filtering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame<'a> {
    /// Function name as written by the engine
    pub function_name: Option<&'a str>,
    /// Bare filename (last path segment, no query or fragment)
    pub file: &'a str,
    /// Line as reported, before the wrapper offset
    pub line: i64,
    /// Column as reported
    pub column: i64,
}

/// Split one trimmed trace line into function name and location text
pub fn split_frame_line(line: &str) -> (Option<&str>, &str) {
    if let Some(body) = line.strip_prefix("at ") {
        return match CALL_SITE.captures(body) {
            Some(caps) => {
                let name = caps.get(1).map(|m| m.as_str()).filter(|s| !s.is_empty());
                let location = caps.get(2).map_or(body, |m| m.as_str());
                (name, location)
            }
            None => (None, body),
        };
    }

    if let Some((name, location)) = line.split_once('@') {
        let name = if name.is_empty() { None } else { Some(name) };
        return (name, location);
    }

    (None, line)
}

/// Last `path:line:col` occurrence in `text`
///
/// Nested eval contexts embed several locations in one line; the last one
/// is where the code actually ran.
pub fn last_location(text: &str) -> Option<(&str, i64, i64)> {
    let caps = LOCATOR.captures_iter(text).last()?;
    let path = caps.get(1)?.as_str();
    let line = caps.get(2)?.as_str().parse().ok()?;
    let column = caps.get(3)?.as_str().parse().ok()?;
    Some((path, line, column))
}

/// Last path segment of `path`, stripped of `?query` and `#fragment`
pub fn base_file_name(path: &str) -> &str {
    let segment = path.rsplit('/').next().unwrap_or(path);
    let segment = segment.split('?').next().unwrap_or(segment);
    segment.split('#').next().unwrap_or(segment)
}

/// Whether `name` is the placeholder V8 gives dynamically compiled code
pub fn is_vm_placeholder(name: &str) -> bool {
    VM_PLACEHOLDER.is_match(name)
}

/// Parse one trace line without any filtering
pub fn parse_frame_line(line: &str) -> Option<RawFrame<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (function_name, location) = split_frame_line(line);
    let (path, line, column) = last_location(location)?;
    Some(RawFrame {
        function_name,
        file: base_file_name(path),
        line,
        column,
    })
}

/// Why a parsed frame was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Infrastructure,
    Foreign,
}

fn classify(config: &ResolverConfig, file: &str) -> Result<(), Rejection> {
    let learner = config.is_user_file(file)
        || file == ANONYMOUS_FILE
        || is_vm_placeholder(file)
        || (config.is_harness_file(file) && config.harness_is_source());

    if learner {
        Ok(())
    } else if config.is_infrastructure_file(file) {
        Err(Rejection::Infrastructure)
    } else {
        Err(Rejection::Foreign)
    }
}

fn clean_function_name(config: &ResolverConfig, name: Option<&str>) -> Option<String> {
    let name = name?;
    let name = if name.contains("eval") { GLOBAL_SCOPE } else { name };
    if config.is_log_wrapper(name) {
        return None;
    }
    Some(name.to_string())
}

pub(crate) fn parse_stack_frames(config: &ResolverConfig, stack: &str) -> Vec<SourceFrame> {
    let mut frames = Vec::new();
    let mut seen = HashSet::new();
    let offset = i64::from(config.line_offset);

    for raw in stack.lines().filter_map(parse_frame_line) {
        if let Err(reason) = classify(config, raw.file) {
            tracing::trace!(file = raw.file, ?reason, "Skipping stack frame");
            continue;
        }

        let file = config.source_label.as_deref().unwrap_or(raw.file);
        let frame = SourceFrame::new(
            clean_function_name(config, raw.function_name),
            file,
            raw.line.saturating_sub(offset),
            raw.column,
        );

        if seen.insert((frame.location(), frame.function_name.clone())) {
            frames.push(frame);
        }
    }

    tracing::debug!(frames = frames.len(), "Parsed stack frames");
    frames
}
