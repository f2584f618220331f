//! Multi-file linting driver.
//!
//! Walks files and directories, runs the call-site scanner over every Rust
//! source, and aggregates one [`ScanReport`]. Each file is analyzed
//! independently; nothing is shared between files beyond the policy, so the
//! per-file work is freely parallelizable by a caller that wants it.

use std::path::Path;

use crate::policy::Policy;
use crate::report::ScanReport;
use crate::result::VelarResult;
use crate::scan::scan_source;

/// Directory entries never descended into
const SKIPPED_DIRS: &[&str] = &["target", "node_modules"];

/// Selector-discipline linter over Rust sources.
#[derive(Debug, Clone, Default)]
pub struct SelectorLinter {
    policy: Policy,
}

impl SelectorLinter {
    /// Create a linter with the default `data-selenium` policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the designated test-hook attribute.
    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.policy = self.policy.with_attribute(attribute);
        self
    }

    /// The active classification policy.
    #[must_use]
    pub const fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Lint source code directly.
    pub fn lint_source(&self, source: &str, file: &str) -> VelarResult<ScanReport> {
        scan_source(source, file, &self.policy)
    }

    /// Lint a single file.
    pub fn lint_file(&self, path: &Path) -> VelarResult<ScanReport> {
        let source = std::fs::read_to_string(path)?;
        self.lint_source(&source, &path.display().to_string())
    }

    /// Lint a file or directory tree.
    ///
    /// Directories are walked recursively over `*.rs` files, skipping hidden
    /// entries and build/vendor directories. Files that fail to read or parse
    /// are counted as skipped without aborting the walk; a direct file path
    /// that fails returns the error instead.
    pub fn lint_path(&self, path: &Path) -> VelarResult<ScanReport> {
        if path.is_dir() {
            let mut report = ScanReport::default();
            self.lint_directory(path, &mut report);
            Ok(report)
        } else {
            self.lint_file(path)
        }
    }

    fn lint_directory(&self, dir: &Path, report: &mut ScanReport) {
        let Ok(entries) = std::fs::read_dir(dir) else {
            report.files_skipped += 1;
            return;
        };

        for entry in entries.flatten() {
            let path = entry.path();
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            if name.starts_with('.') || SKIPPED_DIRS.contains(&name) {
                continue;
            }

            if path.is_dir() {
                self.lint_directory(&path, report);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                match self.lint_file(&path) {
                    Ok(file_report) => report.merge(file_report),
                    Err(err) => {
                        tracing::debug!(
                            file = %path.display(),
                            error = %err,
                            "skipping file"
                        );
                        report.files_skipped += 1;
                    }
                }
            }
        }
    }
}
