//! Core data types for tfrefmt.
//!
//! These types describe the outcome of a formatting drift check: which files
//! were scanned, which files would change and by how much, and which files
//! could not be checked at all.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Plain text format with colorized diffs
    #[default]
    Text,
    /// JSON format
    Json,
}

/// The formatting drift detected in a single file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileDiff {
    /// Path of the file, as discovered by the scanner.
    pub path: PathBuf,

    /// Unified diff between the original and the canonical text.
    pub diff: String,

    /// Number of lines the canonical form adds.
    pub added: usize,

    /// Number of lines the canonical form removes.
    pub removed: usize,
}

impl FileDiff {
    /// Total number of changed lines (added + removed).
    #[must_use]
    pub fn changed_lines(&self) -> usize {
        self.added + self.removed
    }
}

/// A file that could not be checked (read or parse failure).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFailure {
    /// Path of the file that failed.
    pub path: PathBuf,

    /// Human-readable failure message.
    pub message: String,
}

/// Results from a formatting drift check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckResult {
    /// All files that were scanned (including clean ones).
    pub files_scanned: Vec<PathBuf>,

    /// Files whose canonical form differs from the original.
    pub diffs: Vec<FileDiff>,

    /// Files that could not be checked.
    pub failures: Vec<FileFailure>,
}

impl CheckResult {
    /// Whether any file would change when formatted.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.diffs.is_empty()
    }

    /// Whether any file failed to be checked.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Number of files that are already canonical.
    #[must_use]
    pub fn clean_count(&self) -> usize {
        self.files_scanned
            .len()
            .saturating_sub(self.diffs.len() + self.failures.len())
    }

    /// Total number of added lines across all files.
    #[must_use]
    pub fn total_added(&self) -> usize {
        self.diffs.iter().map(|d| d.added).sum()
    }

    /// Total number of removed lines across all files.
    #[must_use]
    pub fn total_removed(&self) -> usize {
        self.diffs.iter().map(|d| d.removed).sum()
    }

    /// Total number of changed lines across all files.
    #[must_use]
    pub fn total_changed_lines(&self) -> usize {
        self.diffs.iter().map(FileDiff::changed_lines).sum()
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: CheckResult) {
        self.files_scanned.extend(other.files_scanned);
        self.diffs.extend(other.diffs);
        self.failures.extend(other.failures);
    }

    /// Generate a report for this result using the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if report generation fails.
    pub fn generate_report(&self, format: ReportFormat) -> crate::Result<String> {
        let config = crate::Config::default();
        let reporter = crate::reporter::Reporter::new(&config);
        reporter.generate(self, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diff(path: &str, added: usize, removed: usize) -> FileDiff {
        FileDiff {
            path: PathBuf::from(path),
            diff: String::new(),
            added,
            removed,
        }
    }

    #[test]
    fn test_changed_lines() {
        assert_eq!(diff("a.tf", 3, 2).changed_lines(), 5);
    }

    #[test]
    fn test_totals() {
        let result = CheckResult {
            files_scanned: vec![
                PathBuf::from("a.tf"),
                PathBuf::from("b.tf"),
                PathBuf::from("c.tf"),
            ],
            diffs: vec![diff("a.tf", 1, 2), diff("b.tf", 4, 0)],
            failures: Vec::new(),
        };

        assert!(result.has_changes());
        assert!(!result.has_failures());
        assert_eq!(result.total_added(), 5);
        assert_eq!(result.total_removed(), 2);
        assert_eq!(result.total_changed_lines(), 7);
        assert_eq!(result.clean_count(), 1);
    }

    #[test]
    fn test_merge() {
        let mut left = CheckResult {
            files_scanned: vec![PathBuf::from("a.tf")],
            diffs: vec![diff("a.tf", 1, 1)],
            failures: Vec::new(),
        };
        let right = CheckResult {
            files_scanned: vec![PathBuf::from("b.tf")],
            diffs: Vec::new(),
            failures: vec![FileFailure {
                path: PathBuf::from("b.tf"),
                message: "parse error".to_string(),
            }],
        };

        left.merge(right);
        assert_eq!(left.files_scanned.len(), 2);
        assert_eq!(left.diffs.len(), 1);
        assert_eq!(left.failures.len(), 1);
    }
}
