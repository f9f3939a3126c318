//! Resolver configuration for one embedding context.
//!
//! Every playground variant differs only in the filenames it attaches to
//! the wrapper and to the learner's code, so those names live here instead
//! of in the scanner.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Lines `new Function(...)` prepends before the body:
/// `function anonymous(console,document,window` and `) {`.
pub const DEFAULT_LINE_OFFSET: u32 = 2;

/// Filename used when nothing better is configured
pub const ANONYMOUS_FILE: &str = "<anonymous>";

/// Errors raised while loading or validating a [`ResolverConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config file '{path}': {source}")]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config text is not valid JSON for this schema
    #[error("invalid resolver config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Neither harness nor user filenames are configured
    #[error("resolver config names no harness or user files")]
    NoSourceFiles,
}

/// Filenames and offsets describing how learner code is executed.
///
/// # Examples
///
/// ```
/// use source_resolver::ResolverConfig;
///
/// let config = ResolverConfig::from_json(r#"{ "line_offset": 0 }"#).unwrap();
/// assert_eq!(config.line_offset, 0);
/// assert!(config.user_files.contains("StudentCode.js"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Filenames of the wrapper that invokes learner code
    pub harness_files: BTreeSet<String>,
    /// Filenames attached to learner code through the source annotation
    pub user_files: BTreeSet<String>,
    /// Filename shown for every reported frame
    pub source_label: Option<String>,
    /// Wrapper lines prepended before learner code at execution time
    pub line_offset: u32,
    /// Page scripts never related to learner code (case-insensitive)
    pub infrastructure_files: BTreeSet<String>,
    /// Function names of the console wrapper installed in the sandbox
    pub log_wrapper_names: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::playground()
    }
}

impl ResolverConfig {
    /// The lesson playground: learner code is annotated as `StudentCode.js`
    /// and reported to the learner as `file.js`.
    pub fn playground() -> Self {
        Self {
            harness_files: names(["file.js"]),
            user_files: names(["StudentCode.js"]),
            source_label: Some("file.js".to_string()),
            line_offset: DEFAULT_LINE_OFFSET,
            infrastructure_files: names(["script.js", "editor.js"]),
            log_wrapper_names: vec!["Object.log".to_string()],
        }
    }

    /// The standalone editor page, whose wrapper file doubles as the
    /// learner's source.
    pub fn standalone_editor() -> Self {
        Self {
            harness_files: names(["Editor.js"]),
            user_files: BTreeSet::new(),
            source_label: Some("Editor.js".to_string()),
            line_offset: DEFAULT_LINE_OFFSET,
            infrastructure_files: names(["script.js"]),
            log_wrapper_names: vec!["Object.log".to_string()],
        }
    }

    /// Parse and validate a JSON config; missing fields take the
    /// playground defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loading resolver config");
        Self::from_json(&text)
    }

    /// Check that the config can identify learner code at all
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.harness_files.is_empty() && self.user_files.is_empty() {
            return Err(ConfigError::NoSourceFiles);
        }
        Ok(())
    }

    /// Set the line offset
    pub fn with_line_offset(mut self, line_offset: u32) -> Self {
        self.line_offset = line_offset;
        self
    }

    /// Set or clear the source label
    pub fn with_source_label(mut self, label: Option<&str>) -> Self {
        self.source_label = label.map(str::to_string);
        self
    }

    /// Filename for frames that do not come from a stack line
    pub fn display_file(&self) -> &str {
        self.source_label
            .as_deref()
            .or_else(|| self.user_files.iter().next().map(String::as_str))
            .or_else(|| self.harness_files.iter().next().map(String::as_str))
            .unwrap_or(ANONYMOUS_FILE)
    }

    /// Filename written into the source annotation of learner code
    pub fn annotation_file(&self) -> &str {
        self.user_files
            .iter()
            .next()
            .map(String::as_str)
            .unwrap_or_else(|| self.display_file())
    }

    /// Whether harness frames count as learner code
    pub fn harness_is_source(&self) -> bool {
        self.user_files.is_empty()
    }

    pub(crate) fn is_user_file(&self, name: &str) -> bool {
        self.source_label.as_deref() == Some(name)
            || self.user_files.iter().any(|f| f.eq_ignore_ascii_case(name))
    }

    pub(crate) fn is_harness_file(&self, name: &str) -> bool {
        self.harness_files.contains(name)
    }

    pub(crate) fn is_infrastructure_file(&self, name: &str) -> bool {
        self.infrastructure_files
            .iter()
            .any(|f| f.eq_ignore_ascii_case(name))
    }

    pub(crate) fn is_log_wrapper(&self, function_name: &str) -> bool {
        self.log_wrapper_names
            .iter()
            .any(|w| !w.is_empty() && function_name.contains(w.as_str()))
    }
}

fn names<const N: usize>(items: [&str; N]) -> BTreeSet<String> {
    items.into_iter().map(str::to_string).collect()
}
