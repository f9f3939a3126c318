//! Preparing learner code for sandboxed execution.
//!
//! The harness compiles the learner's script with
//! `new Function("console", "document", "window", body)`. The body carries a
//! trailing source annotation so the engine names the code in its stack
//! traces, which is what lets the resolver tell learner frames apart.

use crate::config::ResolverConfig;

/// Parameters of the compiled function, in order
pub const SANDBOX_PARAMETERS: [&str; 3] = ["console", "document", "window"];

/// Replace characters that commonly sneak in when code is pasted from a web
/// page: non-breaking spaces become spaces, zero-width characters and BOMs
/// are dropped, and Unicode line/paragraph separators become newlines.
///
/// # Examples
///
/// ```
/// use source_resolver::normalize_source;
///
/// assert_eq!(normalize_source("let\u{a0}x\u{200b} = 1;\u{2028}"), "let x = 1;\n");
/// ```
pub fn normalize_source(text: &str) -> String {
    text.chars()
        .filter_map(|ch| match ch {
            '\u{00a0}' => Some(' '),
            '\u{200b}'..='\u{200d}' | '\u{feff}' => None,
            '\u{2028}' | '\u{2029}' => Some('\n'),
            other => Some(other),
        })
        .collect()
}

/// Learner code ready to hand to the sandbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxScript {
    code: String,
    source_url: String,
}

impl SandboxScript {
    /// Normalize `code` and pick the annotation filename from `config`
    pub fn prepare(code: &str, config: &ResolverConfig) -> Self {
        Self {
            code: normalize_source(code),
            source_url: config.annotation_file().to_string(),
        }
    }

    /// The normalized learner code, as the resolver should see it
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Filename named by the source annotation
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Function body: the code followed by the source annotation comment
    pub fn body(&self) -> String {
        format!("{}\n//# sourceURL={}", self.code, self.source_url)
    }

    /// Parameter names of the compiled function
    pub fn parameters(&self) -> &'static [&'static str] {
        &SANDBOX_PARAMETERS
    }

    /// Whether there is nothing to run
    pub fn is_blank(&self) -> bool {
        self.code.trim().is_empty()
    }
}
