//! Directory scanning for Terraform/OpenTofu files.
//!
//! The scanner walks directory trees, selects `.tf` files, and skips
//! state directories, hidden paths, and user-configured exclusions.

use crate::config::Config;
use crate::error::Result;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extensions to scan for Terraform/OpenTofu files.
pub const TERRAFORM_EXTENSIONS: &[&str] = &[".tf"];

/// Files to skip during scanning.
pub const SKIP_FILES: &[&str] = &[".terraform", ".terragrunt-cache", "terraform.tfstate"];

/// Directory scanner for Terraform files.
///
/// The scanner walks directories and collects the `.tf` files to check.
pub struct DirectoryScanner {
    /// Configuration for scanning behavior
    config: Config,
}

impl DirectoryScanner {
    /// Create a new scanner with the given configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Collect all Terraform files under a path.
    ///
    /// Recursively walks the directory tree. A path that is itself a `.tf`
    /// file is returned directly. The result is sorted for deterministic
    /// output.
    ///
    /// # Errors
    ///
    /// Returns an error if the path doesn't exist.
    pub fn collect_files(&self, path: &Path) -> Result<Vec<PathBuf>> {
        if !path.exists() {
            return Err(crate::err!(DirectoryNotFound {
                path: path.to_path_buf(),
            }));
        }

        if path.is_file() {
            if self.is_terraform_file(path) {
                return Ok(vec![path.to_path_buf()]);
            }
            tracing::warn!(path = %path.display(), "Path is not a Terraform file, skipping");
            return Ok(Vec::new());
        }

        let mut files = Vec::new();

        // Walk directory tree
        // The walk root is exempt from skip rules so hidden directories can
        // still be checked when named explicitly.
        for entry in WalkDir::new(path)
            .follow_links(true)
            .max_depth(self.config.scan.max_depth)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !self.should_skip(e.path(), path))
        {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read directory entry");
                    continue;
                }
            };

            let file_path = entry.path();

            // Skip directories
            if file_path.is_dir() {
                continue;
            }

            // Check file extension
            if !self.is_terraform_file(file_path) {
                continue;
            }

            tracing::debug!(file = %file_path.display(), "Discovered file");
            files.push(file_path.to_path_buf());
        }

        files.sort();

        tracing::info!(
            path = %path.display(),
            files = files.len(),
            "Scan complete"
        );

        Ok(files)
    }

    /// Check if a path should be skipped.
    fn should_skip(&self, path: &Path, root: &Path) -> bool {
        if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
            // Skip hidden files/directories
            if file_name.starts_with('.') {
                tracing::debug!(path = %path.display(), reason = "hidden file/directory", "Skipping path");
                return true;
            }

            // Skip known state directories and files
            if SKIP_FILES.iter().any(|s| file_name == *s) {
                tracing::debug!(path = %path.display(), reason = "known skip file", "Skipping path");
                return true;
            }
        }

        // Config exclusions match either the bare file name or the path
        // relative to the walk root, so both `legacy-*.tf` and
        // `**/generated/**` work.
        let relative = path.strip_prefix(root).unwrap_or(path);
        let file_name = path.file_name().and_then(|n| n.to_str());
        if self.config.scan.exclude_patterns.iter().any(|pattern| {
            glob::Pattern::new(pattern)
                .map(|p| {
                    file_name.is_some_and(|name| p.matches(name)) || p.matches_path(relative)
                })
                .unwrap_or(false)
        }) {
            tracing::debug!(path = %path.display(), reason = "matches exclude pattern", "Skipping path");
            return true;
        }

        false
    }

    /// Check if a file is a Terraform file.
    fn is_terraform_file(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        TERRAFORM_EXTENSIONS
            .iter()
            .any(|ext| path_str.ends_with(ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn create_test_scanner() -> DirectoryScanner {
        DirectoryScanner::new(&Config::default())
    }

    #[test]
    fn test_is_terraform_file() {
        let scanner = create_test_scanner();

        assert!(scanner.is_terraform_file(Path::new("main.tf")));
        assert!(scanner.is_terraform_file(Path::new("variables.tf")));
        assert!(!scanner.is_terraform_file(Path::new("config.tfvars")));
        assert!(!scanner.is_terraform_file(Path::new("readme.md")));
        assert!(!scanner.is_terraform_file(Path::new("script.sh")));
    }

    #[test]
    fn test_should_skip() {
        let scanner = create_test_scanner();

        let root = Path::new("");
        assert!(scanner.should_skip(Path::new(".terraform"), root));
        assert!(scanner.should_skip(Path::new(".git"), root));
        assert!(scanner.should_skip(Path::new(".terragrunt-cache"), root));
        assert!(scanner.should_skip(Path::new("terraform.tfstate"), root));
        assert!(!scanner.should_skip(Path::new("modules"), root));
        assert!(!scanner.should_skip(Path::new("main.tf"), root));
        assert!(!scanner.should_skip(Path::new("."), root));
    }

    #[test]
    fn test_should_skip_exclude_patterns() {
        let mut config = Config::default();
        config.scan.exclude_patterns = vec!["legacy-*.tf".to_string()];
        let scanner = DirectoryScanner::new(&config);

        let root = Path::new("");
        assert!(scanner.should_skip(Path::new("legacy-vpc.tf"), root));
        assert!(!scanner.should_skip(Path::new("vpc.tf"), root));
    }

    #[test]
    fn test_should_skip_path_exclude_patterns() {
        let mut config = Config::default();
        config.scan.exclude_patterns = vec!["**/generated/**".to_string()];
        let scanner = DirectoryScanner::new(&config);

        let root = Path::new("/repo");
        assert!(scanner.should_skip(Path::new("/repo/generated/a.tf"), root));
        assert!(scanner.should_skip(Path::new("/repo/modules/generated/a.tf"), root));
        assert!(!scanner.should_skip(Path::new("/repo/modules/a.tf"), root));
    }

    #[test]
    fn test_collect_files_honors_path_exclude_patterns() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("generated")).unwrap();
        fs::write(dir.path().join("generated").join("a.tf"), "x = 1\n").unwrap();
        fs::write(dir.path().join("b.tf"), "x = 1\n").unwrap();

        let mut config = Config::default();
        config.scan.exclude_patterns = vec!["**/generated/**".to_string()];
        let scanner = DirectoryScanner::new(&config);

        let files = scanner.collect_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("b.tf"));
    }

    #[test]
    fn test_collect_files_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.tf"), "x = 1\n").unwrap();
        fs::write(dir.path().join("a.tf"), "x = 1\n").unwrap();
        fs::write(dir.path().join("notes.md"), "hello\n").unwrap();
        fs::create_dir(dir.path().join(".terraform")).unwrap();
        fs::write(dir.path().join(".terraform").join("c.tf"), "x = 1\n").unwrap();

        let scanner = create_test_scanner();
        let files = scanner.collect_files(dir.path()).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.tf", "b.tf"]);
    }

    #[test]
    fn test_collect_files_missing_directory() {
        let scanner = create_test_scanner();
        let result = scanner.collect_files(Path::new("/nonexistent/tfrefmt-test"));
        assert!(result.is_err());
    }

    #[test]
    fn test_collect_single_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("main.tf");
        fs::write(&file, "x = 1\n").unwrap();

        let scanner = create_test_scanner();
        let files = scanner.collect_files(&file).unwrap();
        assert_eq!(files, vec![file]);
    }
}
