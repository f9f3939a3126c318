//! The source-location resolver.
//!
//! One [`SourceResolver`] is built per embedding context from a
//! [`ResolverConfig`]. Every operation is a total, side-effect free
//! function of its inputs: malformed text yields an empty or `None`
//! result, never a panic.

use crate::config::ResolverConfig;
use crate::frames;
use crate::syntax::infer_syntax_position;
use core_types::{CapturedError, SourceFrame};
use regex::Regex;
use std::sync::LazyLock;

static ANONYMOUS_LOCATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<anonymous>:(\d+):(\d+)").expect("anonymous location pattern"));

/// Maps captured stacks and syntax errors back into the learner's source.
///
/// # Examples
///
/// ```
/// use source_resolver::{ResolverConfig, SourceResolver};
///
/// let resolver = SourceResolver::new(ResolverConfig::playground());
/// let frames = resolver.parse_stack_frames(
///     "ReferenceError: x is not defined\n    at greet (StudentCode.js:6:3)",
/// );
///
/// assert_eq!(frames.len(), 1);
/// assert_eq!(frames[0].to_string(), "at greet (file.js:4:3)");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SourceResolver {
    config: ResolverConfig,
}

impl SourceResolver {
    /// Create a resolver for one embedding context
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// The configuration this resolver was built with
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Filename used for frames that do not come from a stack line
    pub fn display_file(&self) -> &str {
        self.config.display_file()
    }

    /// Parse a platform stack string into frames pointing into learner code.
    ///
    /// Frames from unrelated scripts are dropped, line numbers are shifted
    /// by the configured wrapper offset and clamped to 1, and duplicate
    /// (location, function) pairs are collapsed. Most recent call first.
    pub fn parse_stack_frames(&self, stack: &str) -> Vec<SourceFrame> {
        frames::parse_stack_frames(&self.config, stack)
    }

    /// Guess a syntax error location from the source text and the
    /// engine's message
    pub fn infer_syntax_frame(&self, source: &str, error_message: &str) -> Option<SourceFrame> {
        infer_syntax_position(source, error_message)
            .map(|position| SourceFrame::at_position(self.display_file(), position))
    }

    /// Location from the raw signals left on an error when its stack
    /// cannot be parsed: a bare `<anonymous>:line:col` token, or the
    /// engine's direct line/column fields.
    pub fn fallback_frame(&self, error: &CapturedError) -> Option<SourceFrame> {
        let offset = i64::from(self.config.line_offset);

        let anonymous = error
            .stack
            .as_deref()
            .and_then(|stack| ANONYMOUS_LOCATION.captures(stack))
            .and_then(|caps| {
                let line: i64 = caps.get(1)?.as_str().parse().ok()?;
                let column: i64 = caps.get(2)?.as_str().parse().ok()?;
                Some((line, column))
            });
        if let Some((line, column)) = anonymous {
            return Some(self.frame_at(line.saturating_sub(offset), column));
        }

        let line = error.line_number.unwrap_or(0);
        if line > 0 {
            let column = error.column_number.filter(|c| *c != 0).unwrap_or(1);
            return Some(self.frame_at(line.saturating_sub(offset), column));
        }

        None
    }

    /// Best single location for an error: the top stack frame, else a
    /// syntax inference over `source`, else [`Self::fallback_frame`].
    ///
    /// `None` means no signal exists at all; callers show
    /// [`Self::default_location`] instead.
    pub fn resolve_error_location(&self, error: &CapturedError, source: &str) -> Option<SourceFrame> {
        let resolved = error
            .stack
            .as_deref()
            .and_then(|stack| self.parse_stack_frames(stack).into_iter().next())
            .or_else(|| self.infer_syntax_frame(source, &error.message))
            .or_else(|| self.fallback_frame(error));

        match &resolved {
            Some(frame) => tracing::debug!(location = %frame.location(), "Resolved error location"),
            None => tracing::debug!(name = %error.name, "No location signal for error"),
        }
        resolved
    }

    /// Label shown when nothing could be resolved
    pub fn default_location(&self) -> String {
        format!("{}:1:1", self.display_file())
    }

    fn frame_at(&self, line: i64, column: i64) -> SourceFrame {
        SourceFrame::new(None, self.display_file(), line, column)
    }
}

/// Render frames as trace text, one `at ...` line per frame
pub fn format_trace(frames: &[SourceFrame]) -> String {
    frames
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
