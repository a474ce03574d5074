//! Unified diff computation and change counting.
//!
//! Diffing is line-based and delegated to the `similar` crate. The differ
//! produces a [`FileDiff`] carrying the rendered unified diff plus the
//! added/removed line counters; identical inputs produce no diff at all.

use crate::config::Config;
use crate::types::FileDiff;

use similar::{ChangeTag, TextDiff};
use std::path::Path;

/// Line-based differ between original and canonical file text.
pub struct Differ {
    /// Number of context lines around each hunk
    context_lines: usize,
}

impl Differ {
    /// Create a new differ with the given configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            context_lines: config.diff.context_lines,
        }
    }

    /// Compute the unified diff between `original` and `formatted`.
    ///
    /// Returns `None` when the two texts are identical.
    #[must_use]
    pub fn diff(&self, path: &Path, original: &str, formatted: &str) -> Option<FileDiff> {
        if original == formatted {
            return None;
        }

        let text_diff = TextDiff::from_lines(original, formatted);

        let mut added = 0;
        let mut removed = 0;
        for change in text_diff.iter_all_changes() {
            match change.tag() {
                ChangeTag::Insert => added += 1,
                ChangeTag::Delete => removed += 1,
                ChangeTag::Equal => {}
            }
        }

        let diff = text_diff
            .unified_diff()
            .context_radius(self.context_lines)
            .header(
                &format!("a/{}", path.display()),
                &format!("b/{}", path.display()),
            )
            .to_string();

        Some(FileDiff {
            path: path.to_path_buf(),
            diff,
            added,
            removed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_differ() -> Differ {
        Differ::new(&Config::default())
    }

    #[test]
    fn test_identical_inputs_produce_no_diff() {
        let differ = create_test_differ();
        let text = "a = 1\nb = 2\n";
        assert!(differ.diff(Path::new("main.tf"), text, text).is_none());
    }

    #[test]
    fn test_counts_added_and_removed_lines() {
        let differ = create_test_differ();
        let original = "a = 1\nb = 2\n";
        let formatted = "a = 1\nb = 3\nc = 4\n";

        let diff = differ
            .diff(Path::new("main.tf"), original, formatted)
            .unwrap();

        // "b = 2" is replaced and "c = 4" is added
        assert_eq!(diff.removed, 1);
        assert_eq!(diff.added, 2);
        assert_eq!(diff.changed_lines(), 3);
    }

    #[test]
    fn test_unified_headers_carry_the_path() {
        let differ = create_test_differ();
        let diff = differ
            .diff(Path::new("env/main.tf"), "a = 1\n", "a = 2\n")
            .unwrap();

        assert!(diff.diff.contains("a/env/main.tf"));
        assert!(diff.diff.contains("b/env/main.tf"));
        assert!(diff.diff.contains("-a = 1"));
        assert!(diff.diff.contains("+a = 2"));
    }

    #[test]
    fn test_context_radius_is_respected() {
        let mut config = Config::default();
        config.diff.context_lines = 0;
        let differ = Differ::new(&config);

        let original = "a = 1\nb = 2\nc = 3\n";
        let formatted = "a = 1\nb = 9\nc = 3\n";
        let diff = differ
            .diff(Path::new("main.tf"), original, formatted)
            .unwrap();

        // With zero context only the changed pair appears
        assert!(!diff.diff.contains(" a = 1"));
        assert!(diff.diff.contains("-b = 2"));
        assert!(diff.diff.contains("+b = 9"));
    }
}
