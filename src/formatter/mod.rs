//! Canonical HCL re-serialization.
//!
//! Parsing and formatting are fully delegated to the `hcl-rs` crate: a file
//! body is parsed with [`hcl::from_str`] and re-emitted with
//! [`hcl::format::to_string`]. The crate never re-implements expression
//! serialization itself.
//!
//! # Example
//!
//! ```rust
//! use tfrefmt::formatter::HclFormatter;
//! use std::path::Path;
//!
//! let formatter = HclFormatter::new();
//! let canonical = formatter
//!     .canonicalize("a=1", Path::new("main.tf"))
//!     .unwrap();
//! assert_eq!(canonical, "a = 1\n");
//! ```

use crate::error::Result;

use hcl::Body;
use std::path::Path;

/// Canonical formatter for Terraform/OpenTofu files.
///
/// Stateless; exists as a type so call sites mirror the rest of the
/// pipeline (`DirectoryScanner`, `Reporter`).
#[derive(Debug, Default)]
pub struct HclFormatter;

impl HclFormatter {
    /// Create a new formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Produce the canonical text for the given HCL content.
    ///
    /// The canonical form ends with exactly one trailing newline. An empty
    /// body canonicalizes to empty text, so a zero-byte file is not drift.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid HCL or if
    /// re-serialization fails.
    pub fn canonicalize(&self, content: &str, file_path: &Path) -> Result<String> {
        let body: Body = hcl::from_str(content).map_err(|e| {
            crate::err!(HclParse {
                file: file_path.to_path_buf(),
                message: e.to_string(),
                line: None,
                column: None,
            })
        })?;

        let formatted = hcl::format::to_string(&body).map_err(|e| {
            crate::err!(HclFormat {
                file: file_path.to_path_buf(),
                message: e.to_string(),
            })
        })?;

        if formatted.is_empty() {
            return Ok(formatted);
        }

        Ok(ensure_trailing_newline(formatted))
    }

    /// Read a file and produce its canonical text.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid HCL.
    pub async fn canonicalize_file(&self, path: &Path) -> Result<String> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| crate::error::TfRefmtError::io(path, e, file!(), line!()))?;

        self.canonicalize(&content, path)
    }
}

/// Normalize output to end with exactly one newline.
fn ensure_trailing_newline(mut text: String) -> String {
    while text.ends_with('\n') {
        text.pop();
    }
    text.push('\n');
    text
}
