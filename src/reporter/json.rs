//! JSON report generator.

use crate::config::Config;
use crate::error::Result;
use crate::reporter::ReportGenerator;
use crate::types::CheckResult;
use serde::Serialize;

/// JSON report generator.
pub struct JsonReporter {
    /// Whether to pretty-print the output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            pretty: config.output.pretty,
        }
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, result: &CheckResult) -> Result<String> {
        let report = JsonReport::from(result);

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };

        json.map_err(|e| crate::err!(ReportGeneration {
            message: format!("Failed to serialize JSON report: {e}"),
        }))
    }
}

/// JSON report structure.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    /// Report metadata
    pub metadata: ReportMetadata,
    /// Summary statistics
    pub summary: ReportSummary,
    /// Per-file formatting drift
    pub files: Vec<JsonFileDiff>,
    /// Files that could not be checked
    pub failures: Vec<JsonFailure>,
}

impl From<&CheckResult> for JsonReport {
    fn from(result: &CheckResult) -> Self {
        Self {
            metadata: ReportMetadata {
                version: env!("CARGO_PKG_VERSION").to_string(),
                timestamp: chrono::Utc::now().to_rfc3339(),
                files_scanned: result.files_scanned.len(),
            },
            summary: ReportSummary {
                files_changed: result.diffs.len(),
                files_failed: result.failures.len(),
                lines_added: result.total_added(),
                lines_removed: result.total_removed(),
                lines_changed: result.total_changed_lines(),
                clean: !result.has_changes() && !result.has_failures(),
            },
            files: result
                .diffs
                .iter()
                .map(|d| JsonFileDiff {
                    path: d.path.display().to_string(),
                    added: d.added,
                    removed: d.removed,
                    changed: d.changed_lines(),
                    diff: d.diff.clone(),
                })
                .collect(),
            failures: result
                .failures
                .iter()
                .map(|f| JsonFailure {
                    path: f.path.display().to_string(),
                    message: f.message.clone(),
                })
                .collect(),
        }
    }
}

/// Report metadata.
#[derive(Debug, Serialize)]
pub struct ReportMetadata {
    /// tfrefmt version that produced the report
    pub version: String,
    /// RFC 3339 timestamp
    pub timestamp: String,
    /// Number of files scanned
    pub files_scanned: usize,
}

/// Summary statistics.
#[derive(Debug, Serialize)]
pub struct ReportSummary {
    /// Number of files with formatting drift
    pub files_changed: usize,
    /// Number of files that could not be checked
    pub files_failed: usize,
    /// Total added lines
    pub lines_added: usize,
    /// Total removed lines
    pub lines_removed: usize,
    /// Total changed lines
    pub lines_changed: usize,
    /// True when no drift and no failures were found
    pub clean: bool,
}

/// A single file's drift entry.
#[derive(Debug, Serialize)]
pub struct JsonFileDiff {
    /// File path
    pub path: String,
    /// Added lines
    pub added: usize,
    /// Removed lines
    pub removed: usize,
    /// Changed lines (added + removed)
    pub changed: usize,
    /// Unified diff text
    pub diff: String,
}

/// A single failure entry.
#[derive(Debug, Serialize)]
pub struct JsonFailure {
    /// File path
    pub path: String,
    /// Failure message
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FileDiff, FileFailure};
    use std::path::PathBuf;

    fn sample_result() -> CheckResult {
        CheckResult {
            files_scanned: vec![PathBuf::from("main.tf"), PathBuf::from("broken.tf")],
            diffs: vec![FileDiff {
                path: PathBuf::from("main.tf"),
                diff: "--- a/main.tf\n+++ b/main.tf\n".to_string(),
                added: 2,
                removed: 1,
            }],
            failures: vec![FileFailure {
                path: PathBuf::from("broken.tf"),
                message: "unexpected token".to_string(),
            }],
        }
    }

    #[test]
    fn test_json_report_structure() {
        let reporter = JsonReporter::new(&Config::default());
        let json = reporter.generate(&sample_result()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed["metadata"]["version"].is_string());
        assert_eq!(parsed["metadata"]["files_scanned"], 2);
        assert_eq!(parsed["summary"]["files_changed"], 1);
        assert_eq!(parsed["summary"]["files_failed"], 1);
        assert_eq!(parsed["summary"]["lines_changed"], 3);
        assert_eq!(parsed["summary"]["clean"], false);
        assert_eq!(parsed["files"][0]["path"], "main.tf");
        assert_eq!(parsed["failures"][0]["message"], "unexpected token");
    }

    #[test]
    fn test_compact_output_when_pretty_disabled() {
        let mut config = Config::default();
        config.output.pretty = false;
        let reporter = JsonReporter::new(&config);
        let json = reporter.generate(&sample_result()).unwrap();

        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_clean_flag_for_empty_result() {
        let reporter = JsonReporter::new(&Config::default());
        let json = reporter.generate(&CheckResult::default()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["summary"]["clean"], true);
    }
}
