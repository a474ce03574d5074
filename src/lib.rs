//! # tfrefmt
//!
//! A report-only formatting drift checker for Terraform/OpenTofu files.
//!
//! tfrefmt scans directories for `.tf` files, re-serializes each file through
//! the canonical HCL formatter, and reports the difference between the
//! original and formatted text as a colorized unified diff with changed-line
//! counters. Nothing is ever written back to disk.
//!
//! ## Features
//!
//! - **Directory scanning**: recursive `.tf` discovery with exclusions
//! - **Canonical formatting**: delegated entirely to the `hcl-rs` crate
//! - **Unified diffs**: line-based diffs with context and change counters
//! - **Multiple output formats**: colorized text and JSON reports
//!
//! ## Example
//!
//! ```rust,no_run
//! use tfrefmt::{Checker, Config, ReportFormat};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let checker = Checker::new(config);
//!
//!     // Check a local directory
//!     let result = checker.check_path("./terraform").await?;
//!
//!     // Generate a report
//!     let report = result.generate_report(ReportFormat::Text)?;
//!     println!("{}", report);
//!
//!     Ok(())
//! }
//! ```

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod cli;
pub mod config;
pub mod differ;
pub mod error;
pub mod formatter;
pub mod reporter;
pub mod scanner;
pub mod types;
// Re-export commonly used types at crate root
pub use config::Config;
pub use error::{Result, TfRefmtError};
pub use types::{CheckResult, FileDiff, FileFailure, ReportFormat};

use std::path::Path;

/// Main checker orchestrator that coordinates scanning, formatting, and diffing.
///
/// The `Checker` is the primary entry point for using tfrefmt as a library.
/// It handles:
/// - Scanning local directories for `.tf` files
/// - Producing the canonical form of each file
/// - Computing unified diffs and change counters
///
/// # Example
///
/// ```rust,no_run
/// use tfrefmt::{Checker, Config};
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = Config::default();
///     let checker = Checker::new(config);
///
///     let paths = vec!["./env/prod", "./modules"];
///     let result = checker.check_paths(&paths).await?;
///
///     println!("{} files would change", result.diffs.len());
///     Ok(())
/// }
/// ```
pub struct Checker {
    config: Config,
}

impl Checker {
    /// Create a new checker with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Check a single local path for formatting drift.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path doesn't exist or isn't accessible
    /// - A file fails to read or parse and `continue_on_error` is disabled
    pub async fn check_path<P: AsRef<Path>>(&self, path: P) -> Result<CheckResult> {
        self.check_paths(&[path.as_ref()]).await
    }

    /// Check multiple local paths for formatting drift.
    ///
    /// # Errors
    ///
    /// Returns an error if any path fails to scan, or if a file fails to
    /// read or parse and `continue_on_error` is disabled.
    pub async fn check_paths<P: AsRef<Path>>(&self, paths: &[P]) -> Result<CheckResult> {
        let scanner = scanner::DirectoryScanner::new(&self.config);
        let formatter = formatter::HclFormatter::new();
        let differ = differ::Differ::new(&self.config);

        let mut result = CheckResult::default();

        for path in paths {
            let path = path.as_ref();
            tracing::info!(path = %path.display(), "Checking path");

            for file_path in scanner.collect_files(path)? {
                match self.check_file(&formatter, &differ, &file_path).await {
                    Ok(diff) => {
                        result.files_scanned.push(file_path);
                        if let Some(diff) = diff {
                            result.diffs.push(diff);
                        }
                    }
                    Err(e) => {
                        if self.config.scan.continue_on_error && e.is_recoverable() {
                            tracing::warn!(
                                file = %file_path.display(),
                                "failed to check file, continuing: {}",
                                e
                            );
                            result.files_scanned.push(file_path.clone());
                            result.failures.push(FileFailure {
                                path: file_path,
                                message: e.to_string(),
                            });
                        } else {
                            return Err(e);
                        }
                    }
                }
            }
        }

        tracing::info!(
            files = result.files_scanned.len(),
            changed = result.diffs.len(),
            failures = result.failures.len(),
            changed_lines = result.total_changed_lines(),
            "Check complete"
        );

        Ok(result)
    }

    /// Check a single file, returning its drift if the canonical form differs.
    async fn check_file(
        &self,
        formatter: &formatter::HclFormatter,
        differ: &differ::Differ,
        path: &Path,
    ) -> Result<Option<FileDiff>> {
        tracing::debug!(file = %path.display(), "Checking file");

        let original = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| TfRefmtError::io(path, e, file!(), line!()))?;

        let formatted = formatter.canonicalize(&original, path)?;

        Ok(differ.diff(path, &original, &formatted))
    }
}
