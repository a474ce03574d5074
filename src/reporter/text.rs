//! Plain text report generator.

use crate::config::Config;
use crate::error::Result;
use crate::reporter::ReportGenerator;
use crate::types::{CheckResult, FileDiff};
use colored::Colorize;
use comfy_table::{Cell, Color, ContentArrangement, Table};

/// Text report generator for CLI output.
pub struct TextReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
    /// Whether to omit diff bodies and only report counters
    counts_only: bool,
}

impl TextReporter {
    /// Create a new text reporter.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            use_colors: config.output.colored,
            verbose: config.output.verbose,
            counts_only: config.diff.counts_only,
        }
    }
}

impl ReportGenerator for TextReporter {
    fn generate(&self, result: &CheckResult) -> Result<String> {
        let mut output = String::new();

        // Header
        output.push_str(&self.format_header());
        output.push('\n');

        // Per-file diffs
        if !self.counts_only {
            for diff in &result.diffs {
                output.push_str(&self.format_diff(diff));
                output.push('\n');
            }
        }

        // Clean files, only worth listing in verbose mode
        if self.verbose {
            output.push_str(&self.format_clean_files(result));
        }

        // Summary table of changed files
        if !result.diffs.is_empty() {
            output.push_str(&self.format_summary_table(result));
            output.push('\n');
        }

        // Failures
        if !result.failures.is_empty() {
            output.push_str(&self.format_failures(result));
            output.push('\n');
        }

        // Footer
        output.push_str(&self.format_footer(result));

        Ok(output)
    }
}

impl TextReporter {
    /// Format the report header.
    fn format_header(&self) -> String {
        let title = "tfrefmt Formatting Check";
        let version = format!("v{}", env!("CARGO_PKG_VERSION"));
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");

        if self.use_colors {
            format!(
                "\n{} {} {}\n{}\n",
                title.bright_white().bold(),
                version.dimmed(),
                format!("({})", timestamp).dimmed(),
                "=".repeat(80).bright_blue(),
            )
        } else {
            format!("\n{} {} ({})\n{}\n", title, version, timestamp, "=".repeat(80))
        }
    }

    /// Format a single file diff with its change counter.
    fn format_diff(&self, diff: &FileDiff) -> String {
        let mut output = String::new();

        let counter = format!(
            "+{} -{} ({} changed lines)",
            diff.added,
            diff.removed,
            diff.changed_lines()
        );
        let heading = format!("{} {}", diff.path.display(), counter);

        if self.use_colors {
            output.push_str(&format!("\n{}\n", heading.bright_cyan().bold()));
        } else {
            output.push_str(&format!("\n{heading}\n"));
        }
        output.push_str(&"-".repeat(80));
        output.push('\n');

        for line in diff.diff.lines() {
            output.push_str(&self.colorize_diff_line(line));
            output.push('\n');
        }

        output
    }

    /// Colorize a single unified diff line by its prefix.
    fn colorize_diff_line(&self, line: &str) -> String {
        if !self.use_colors {
            return line.to_string();
        }

        if line.starts_with("---") || line.starts_with("+++") {
            line.bold().to_string()
        } else if line.starts_with("@@") {
            line.cyan().to_string()
        } else if line.starts_with('+') {
            line.green().to_string()
        } else if line.starts_with('-') {
            line.red().to_string()
        } else {
            line.to_string()
        }
    }

    /// List files that need no changes (verbose mode only).
    fn format_clean_files(&self, result: &CheckResult) -> String {
        let mut output = String::new();

        let changed: std::collections::HashSet<_> =
            result.diffs.iter().map(|d| d.path.as_path()).collect();
        let failed: std::collections::HashSet<_> =
            result.failures.iter().map(|f| f.path.as_path()).collect();

        for file in &result.files_scanned {
            if changed.contains(file.as_path()) || failed.contains(file.as_path()) {
                continue;
            }
            let line = format!("No changes needed for {}", file.display());
            if self.use_colors {
                output.push_str(&format!("{}\n", line.dimmed()));
            } else {
                output.push_str(&format!("{line}\n"));
            }
        }

        output
    }

    /// Format the summary table of changed files.
    fn format_summary_table(&self, result: &CheckResult) -> String {
        let mut output = String::new();

        let section_title = if self.use_colors {
            "Files with formatting drift".bright_cyan().bold().to_string()
        } else {
            "Files with formatting drift".to_string()
        };

        output.push_str(&format!("\n{section_title}\n"));
        output.push_str(&"-".repeat(80));
        output.push('\n');

        let mut table = Table::new();
        table
            .load_preset(comfy_table::presets::UTF8_BORDERS_ONLY)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["File", "Added", "Removed", "Changed"]);

        for diff in &result.diffs {
            let added = diff.added.to_string();
            let removed = diff.removed.to_string();

            let (added_cell, removed_cell) = if self.use_colors {
                (
                    Cell::new(&added).fg(Color::Green),
                    Cell::new(&removed).fg(Color::Red),
                )
            } else {
                (Cell::new(&added), Cell::new(&removed))
            };

            table.add_row(vec![
                Cell::new(diff.path.display().to_string()),
                added_cell,
                removed_cell,
                Cell::new(diff.changed_lines().to_string()),
            ]);
        }

        output.push_str(&table.to_string());
        output.push('\n');

        output
    }

    /// Format the failures section.
    fn format_failures(&self, result: &CheckResult) -> String {
        let mut output = String::new();

        let section_title = if self.use_colors {
            "Skipped files".bright_cyan().bold().to_string()
        } else {
            "Skipped files".to_string()
        };

        output.push_str(&format!("\n{section_title}\n"));
        output.push_str(&"-".repeat(80));
        output.push('\n');

        for failure in &result.failures {
            let label = if self.use_colors {
                "ERROR".red().to_string()
            } else {
                "ERROR".to_string()
            };
            output.push_str(&format!(
                "  [{label}] {}: {}\n",
                failure.path.display(),
                failure.message
            ));
        }

        output
    }

    /// Format the report footer with totals.
    fn format_footer(&self, result: &CheckResult) -> String {
        let mut output = String::new();

        output.push_str(&"=".repeat(80));
        output.push('\n');

        if result.diffs.is_empty() && result.failures.is_empty() {
            let line = format!(
                "All {} files are formatted canonically",
                result.files_scanned.len()
            );
            if self.use_colors {
                output.push_str(&format!("{}\n", line.green().bold()));
            } else {
                output.push_str(&format!("{line}\n"));
            }
            return output;
        }

        let summary = format!(
            "{} of {} files would change | +{} -{} | {} changed lines | {} skipped",
            result.diffs.len(),
            result.files_scanned.len(),
            result.total_added(),
            result.total_removed(),
            result.total_changed_lines(),
            result.failures.len(),
        );

        if self.use_colors {
            output.push_str(&format!("{}\n", summary.yellow().bold()));
        } else {
            output.push_str(&format!("{summary}\n"));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn plain_config() -> Config {
        let mut config = Config::default();
        config.output.colored = false;
        config
    }

    fn sample_result() -> CheckResult {
        CheckResult {
            files_scanned: vec![PathBuf::from("main.tf"), PathBuf::from("vars.tf")],
            diffs: vec![FileDiff {
                path: PathBuf::from("main.tf"),
                diff: "--- a/main.tf\n+++ b/main.tf\n@@ -1 +1 @@\n-a=1\n+a = 1\n".to_string(),
                added: 1,
                removed: 1,
            }],
            failures: Vec::new(),
        }
    }

    #[test]
    fn test_report_contains_diff_and_counters() {
        let reporter = TextReporter::new(&plain_config());
        let text = reporter.generate(&sample_result()).unwrap();

        assert!(text.contains("tfrefmt Formatting Check"));
        assert!(text.contains("-a=1"));
        assert!(text.contains("+a = 1"));
        assert!(text.contains("+1 -1 (2 changed lines)"));
        assert!(text.contains("1 of 2 files would change"));
    }

    #[test]
    fn test_counts_only_omits_diff_bodies() {
        let mut config = plain_config();
        config.diff.counts_only = true;
        let reporter = TextReporter::new(&config);
        let text = reporter.generate(&sample_result()).unwrap();

        assert!(!text.contains("+a = 1"));
        assert!(text.contains("2 changed lines"));
    }

    #[test]
    fn test_clean_result_footer() {
        let reporter = TextReporter::new(&plain_config());
        let result = CheckResult {
            files_scanned: vec![PathBuf::from("main.tf")],
            diffs: Vec::new(),
            failures: Vec::new(),
        };
        let text = reporter.generate(&result).unwrap();

        assert!(text.contains("All 1 files are formatted canonically"));
    }

    #[test]
    fn test_verbose_lists_clean_files() {
        let mut config = plain_config();
        config.output.verbose = true;
        let reporter = TextReporter::new(&config);
        let text = reporter.generate(&sample_result()).unwrap();

        assert!(text.contains("No changes needed for vars.tf"));
        assert!(!text.contains("No changes needed for main.tf"));
    }

    #[test]
    fn test_failures_are_listed() {
        let reporter = TextReporter::new(&plain_config());
        let mut result = sample_result();
        result.failures.push(crate::types::FileFailure {
            path: PathBuf::from("broken.tf"),
            message: "unexpected token".to_string(),
        });
        result.files_scanned.push(PathBuf::from("broken.tf"));

        let text = reporter.generate(&result).unwrap();
        assert!(text.contains("Skipped files"));
        assert!(text.contains("broken.tf: unexpected token"));
        assert!(text.contains("1 skipped"));
    }
}
