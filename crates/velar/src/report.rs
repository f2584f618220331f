//! Diagnostics and scan reports.
//!
//! One diagnostic per Forbidden call site, carrying the rule id, a message
//! naming the offending call, and the exact source position of the selector
//! argument. Reports aggregate diagnostics across files and render as text or
//! JSON.

use serde::{Deserialize, Serialize};

/// Rule id for the selector-hook discipline rule.
pub const RULE_SELECTOR_HOOK: &str = "SEL-HOOK-001";

/// Fixed message template for a Forbidden call site.
#[must_use]
pub fn forbidden_selector_message(method: &str, attribute: &str) -> String {
    format!(
        "{method}() locates elements with a structural selector; \
         only a single [{attribute}=...] attribute selector is allowed"
    )
}

/// Fixed suggestion attached to selector-hook diagnostics.
#[must_use]
pub fn hook_suggestion(attribute: &str) -> String {
    format!("tag the element with {attribute} and select it as [{attribute}='<value>']")
}

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error: must be fixed
    Error,
    /// Warning: should be reviewed
    Warning,
    /// Info: informational note
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic with location and suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Rule identifier (e.g., "SEL-HOOK-001")
    pub rule: String,
    /// Human-readable message
    pub message: String,
    /// File path
    pub file: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
    /// Severity level
    pub severity: Severity,
    /// Suggested fix
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Create an error-severity diagnostic at line 1, column 1.
    pub fn error(
        file: impl Into<String>,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule: rule.into(),
            message: message.into(),
            file: file.into(),
            line: 1,
            column: 1,
            severity: Severity::Error,
            suggestion: None,
        }
    }

    /// Set the line number
    #[must_use]
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    /// Set the column number
    #[must_use]
    pub fn at_column(mut self, column: usize) -> Self {
        self.column = column;
        self
    }

    /// Set the suggestion
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}[{}]: {} ({}:{}:{})",
            self.severity, self.rule, self.message, self.file, self.line, self.column
        )?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  = help: {suggestion}")?;
        }
        Ok(())
    }
}

/// Report from scanning one or more files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanReport {
    /// All diagnostics found
    pub diagnostics: Vec<Diagnostic>,
    /// Files analyzed
    pub files_analyzed: usize,
    /// Files skipped (unreadable or unparseable)
    pub files_skipped: usize,
    /// Lines analyzed
    pub lines_analyzed: usize,
}

impl ScanReport {
    /// Add a diagnostic
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Check if any Forbidden call site was found
    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Number of Forbidden call sites
    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Merge another report into this one
    pub fn merge(&mut self, other: Self) {
        self.diagnostics.extend(other.diagnostics);
        self.files_analyzed += other.files_analyzed;
        self.files_skipped += other.files_skipped;
        self.lines_analyzed += other.lines_analyzed;
    }
}

/// Render a scan report as text
#[must_use]
pub fn render_report(report: &ScanReport) -> String {
    let mut output = String::new();

    for diagnostic in &report.diagnostics {
        output.push_str(&format!("{diagnostic}\n"));
    }
    if report.diagnostics.is_empty() {
        output.push_str("No forbidden selectors found.\n");
    }
    output.push_str(&format!(
        "Summary: {} forbidden selector(s), {} file(s) analyzed, {} skipped\n",
        report.violation_count(),
        report.files_analyzed,
        report.files_skipped
    ));

    output
}

/// Render a scan report as JSON
pub fn render_report_json(report: &ScanReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
