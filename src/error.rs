//! Error types for tfrefmt.
//!
//! This module defines the error hierarchy using `thiserror`. All errors
//! carry context and can be propagated with the `?` operator.
//!
//! # Error Categories
//!
//! - **Parse errors**: HCL parsing failures, invalid syntax
//! - **IO errors**: File system operations
//! - **Config errors**: Invalid configuration files
//! - **Report errors**: Report generation failures
//!
//! # Example
//!
//! ```rust
//! use tfrefmt::error::{TfRefmtError, Result};
//!
//! fn read_file(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .map_err(|e| TfRefmtError::Io {
//!             path: path.into(),
//!             source: e,
//!             src_path: file!(),
//!             src_line: line!(),
//!         })
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Macro to create errors with automatic source location tracking.
///
/// Usage:
/// ```ignore
/// return Err(err!(ConfigMissing { key: "context_lines".to_string() }));
/// ```
#[macro_export]
macro_rules! err {
    ($variant:ident { $($field:ident: $value:expr),* $(,)? }) => {
        $crate::error::TfRefmtError::$variant {
            $($field: $value,)*
            src_path: file!(),
            src_line: line!(),
        }
    };
}

/// A specialized Result type for tfrefmt operations.
pub type Result<T> = std::result::Result<T, TfRefmtError>;

/// The main error type for tfrefmt.
///
/// This enum covers all error conditions that can occur during scanning,
/// formatting, diffing, and reporting.
#[derive(Error, Debug)]
pub enum TfRefmtError {
    // =========================================================================
    // I/O and File System Errors
    // =========================================================================
    /// I/O error with path context.
    #[error("I/O error at '{path}' ({src_path}:{src_line}): {source}")]
    Io {
        /// The path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    /// File not found.
    #[error("File not found: {path} ({src_path}:{src_line})")]
    FileNotFound {
        /// The missing file path
        path: PathBuf,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    /// Directory not found.
    #[error("Directory not found: {path} ({src_path}:{src_line})")]
    DirectoryNotFound {
        /// The missing directory path
        path: PathBuf,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    /// Permission denied.
    #[error("Permission denied: {path} ({src_path}:{src_line})")]
    PermissionDenied {
        /// The path that couldn't be accessed
        path: PathBuf,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    // =========================================================================
    // HCL Errors
    // =========================================================================
    /// HCL parsing error.
    #[error("Failed to parse HCL in '{file}' \n\t({src_path}:{src_line}): {message}")]
    HclParse {
        /// The file being parsed
        file: PathBuf,
        /// Error message
        message: String,
        /// Line number (if available)
        line: Option<usize>,
        /// Column number (if available)
        column: Option<usize>,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    /// HCL serialization error while producing canonical text.
    #[error("Failed to format '{file}' ({src_path}:{src_line}): {message}")]
    HclFormat {
        /// The file being re-serialized
        file: PathBuf,
        /// Error message
        message: String,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Configuration parsing error.
    #[error("Failed to parse configuration ({src_path}:{src_line}): {message}")]
    ConfigParse {
        /// Error message
        message: String,
        /// The underlying error (if any)
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}' ({src_path}:{src_line}): {message}")]
    ConfigValue {
        /// The configuration key
        key: String,
        /// Error message
        message: String,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    /// Missing required configuration.
    #[error("Missing required configuration: {key} ({src_path}:{src_line})")]
    ConfigMissing {
        /// The missing configuration key
        key: String,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    // =========================================================================
    // Report Errors
    // =========================================================================
    /// Report generation error.
    #[error("Failed to generate report ({src_path}:{src_line}): {message}")]
    ReportGeneration {
        /// Error message
        message: String,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    // =========================================================================
    // Generic Errors
    // =========================================================================
    /// Internal error (should not happen in normal operation).
    #[error("Internal error ({src_path}:{src_line}): {message}")]
    Internal {
        /// Error message
        message: String,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    /// Multiple errors occurred.
    #[error("Multiple errors occurred ({count} total)")]
    Multiple {
        /// Number of errors
        count: usize,
        /// The individual errors
        errors: Vec<TfRefmtError>,
    },
}

impl TfRefmtError {
    /// Creates an `Io` error.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error, src_path: &'static str, src_line: u32) -> Self {
        Self::Io { path: path.into(), source, src_path, src_line }
    }

    /// Creates an `HclParse` error.
    #[must_use]
    pub fn hcl_parse(file: PathBuf, message: String, line: Option<usize>, column: Option<usize>, src_path: &'static str, src_line: u32) -> Self {
        Self::HclParse { file, message, line, column, src_path, src_line }
    }

    /// Creates a `ConfigParse` error.
    #[must_use]
    pub fn config_parse(message: String, source: Option<Box<dyn std::error::Error + Send + Sync>>, src_path: &'static str, src_line: u32) -> Self {
        Self::ConfigParse { message, source, src_path, src_line }
    }

    /// Creates an `Internal` error.
    #[must_use]
    pub fn internal(message: String, src_path: &'static str, src_line: u32) -> Self {
        Self::Internal { message, src_path, src_line }
    }

    /// Determines if the error is recoverable (e.g., should continue checking other files).
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::HclParse { .. }
                | Self::HclFormat { .. }
                | Self::Io { .. }
                | Self::FileNotFound { .. }
                | Self::PermissionDenied { .. }
        )
    }

    /// Returns the appropriate exit code for the error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io { source, .. } if source.kind() == std::io::ErrorKind::PermissionDenied => 13,
            Self::FileNotFound { .. } => 14,
            Self::DirectoryNotFound { .. } => 15,
            Self::PermissionDenied { .. } => 13,
            Self::ConfigParse { .. } => 18,
            Self::ConfigValue { .. } => 19,
            Self::ConfigMissing { .. } => 20,
            Self::Multiple { .. } => 21,
            _ => 1, // Generic unhandled error
        }
    }

    /// Consolidates multiple errors into a single `TfRefmtError::Multiple` if there's more than one.
    /// Otherwise, returns the single error or `Ok(())` if no errors.
    pub fn collect(errors: Vec<Self>) -> Result<()> {
        if errors.is_empty() {
            Ok(())
        } else if errors.len() == 1 {
            Err(errors.into_iter().next().unwrap())
        } else {
            Err(Self::Multiple {
                count: errors.len(),
                errors,
            })
        }
    }
}

impl From<std::io::Error> for TfRefmtError {
    fn from(source: std::io::Error) -> Self {
        // This conversion is used when a PathBuf is not readily available.
        // For errors where a path is known, prefer TfRefmtError::io(path, source, file!(), line!())
        Self::Io {
            path: PathBuf::new(),
            source,
            src_path: file!(),
            src_line: line!(),
        }
    }
}

impl From<serde_json::Error> for TfRefmtError {
    fn from(source: serde_json::Error) -> Self {
        Self::Internal {
            message: format!("JSON serialization/deserialization error: {}", source),
            src_path: file!(),
            src_line: line!(),
        }
    }
}

/// A utility for collecting multiple errors during scanning or checking.
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<TfRefmtError>,
}

impl ErrorCollector {
    /// Create a new error collector.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add an error to the collection.
    pub fn add(&mut self, error: TfRefmtError) {
        self.errors.push(error);
    }

    /// Get the number of collected errors.
    #[must_use]
    pub fn count(&self) -> usize {
        self.errors.len()
    }

    /// Check if there are any errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert to a Result, returning Multiple error if there are any errors.
    pub fn into_result(self) -> Result<()> {
        TfRefmtError::collect(self.errors)
    }
}
