//! Configuration module for tfrefmt.
//!
//! This module handles loading and validating configuration from:
//! - YAML configuration files (`tfrefmt.yaml`)
//! - CLI arguments (layered on top by the binary)
//!
//! # Configuration File Format
//!
//! ```yaml
//! # tfrefmt.yaml
//!
//! # Scanning options
//! scan:
//!   exclude_patterns:
//!     - "**/examples/**"
//!   continue_on_error: true
//!   max_depth: 100
//!
//! # Diff options
//! diff:
//!   context_lines: 3
//!   counts_only: false
//!
//! # Output options
//! output:
//!   colored: true
//!   verbose: false
//!   pretty: true
//! ```

use crate::error::{Result, TfRefmtError};
use serde::{Deserialize, Serialize};

/// Scanning options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Patterns to exclude from scanning (glob patterns).
    pub exclude_patterns: Vec<String>,

    /// Continue checking even if some files fail to read or parse.
    #[serde(default = "default_true")]
    pub continue_on_error: bool,

    /// Maximum depth for recursive directory scanning.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

/// Diff options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Number of context lines around each hunk.
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,

    /// Only report changed-line counts, without diff bodies.
    pub counts_only: bool,
}

/// Output options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    /// Use colored output.
    #[serde(default = "default_true")]
    pub colored: bool,

    /// Verbose output mode (also list files that need no changes).
    pub verbose: bool,

    /// Pretty-print JSON output.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

/// Main configuration structure with nested sections.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Scanning options
    pub scan: ScanOptions,

    /// Diff options
    pub diff: DiffOptions,

    /// Output options
    pub output: OutputOptions,
}

fn default_max_depth() -> usize {
    100
}

fn default_context_lines() -> usize {
    3
}

fn default_true() -> bool {
    true
}

// The section defaults back both `Config::default()` and the serde
// fallback for a missing section, so they must agree with `validate`.
impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            exclude_patterns: Vec::new(),
            continue_on_error: true,
            max_depth: default_max_depth(),
        }
    }
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            context_lines: default_context_lines(),
            counts_only: false,
        }
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            colored: true,
            verbose: false,
            pretty: true,
        }
    }
}

impl Config {
    /// Load configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or a value is out of range.
    pub fn from_yaml(content: &str) -> Result<Self> {
        tracing::debug!("Parsing configuration from YAML");

        let config: Config = serde_yaml::from_str(content).map_err(|e| TfRefmtError::ConfigParse {
            message: e.to_string(),
            source: None,
            src_path: file!(),
            src_line: line!(),
        })?;

        config.validate()?;

        tracing::debug!(
            exclude_patterns = config.scan.exclude_patterns.len(),
            continue_on_error = config.scan.continue_on_error,
            context_lines = config.diff.context_lines,
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is out of range.
    pub fn validate(&self) -> Result<()> {
        if self.scan.max_depth == 0 {
            return Err(crate::err!(ConfigValue {
                key: "scan.max_depth".to_string(),
                message: "must be at least 1".to_string(),
            }));
        }

        for pattern in &self.scan.exclude_patterns {
            if glob::Pattern::new(pattern).is_err() {
                return Err(crate::err!(ConfigValue {
                    key: "scan.exclude_patterns".to_string(),
                    message: format!("invalid glob pattern '{pattern}'"),
                }));
            }
        }

        Ok(())
    }

    /// Generate an example YAML configuration.
    #[must_use]
    pub fn example_yaml() -> String {
        r#"# tfrefmt Configuration File

# Scanning options
scan:
  # Patterns to exclude from scanning (glob patterns)
  exclude_patterns: []
  #  - "**/examples/**"
  #  - "legacy-*.tf"

  # Continue checking even if some files fail to read or parse
  continue_on_error: true

  # Maximum depth for recursive directory scanning
  max_depth: 100

# Diff options
diff:
  # Number of context lines around each hunk
  context_lines: 3

  # Only report changed-line counts, without diff bodies
  counts_only: false

# Output options
output:
  # Use colored output in terminal
  colored: true

  # Also list files that need no changes
  verbose: false

  # Pretty-print JSON output
  pretty: true
"#
        .to_string()
    }
}
