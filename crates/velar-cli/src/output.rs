//! Output formatting for check results

use console::{style, Term};
use velar::{Diagnostic, ScanReport};

/// Printer for diagnostics and summaries
#[derive(Debug)]
pub struct DiagnosticPrinter {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for DiagnosticPrinter {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl DiagnosticPrinter {
    /// Create a new printer
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stdout(),
            use_color,
            quiet,
        }
    }

    /// Print one diagnostic. Diagnostics are printed even in quiet mode.
    pub fn diagnostic(&self, diagnostic: &Diagnostic) {
        let header = format!("{}[{}]", diagnostic.severity, diagnostic.rule);
        let header = if self.use_color {
            style(header).red().bold().to_string()
        } else {
            header
        };
        let location = format!(
            "{}:{}:{}",
            diagnostic.file, diagnostic.line, diagnostic.column
        );

        let _ = self
            .term
            .write_line(&format!("{header}: {}", diagnostic.message));
        let _ = self.term.write_line(&format!("  --> {location}"));
        if let Some(suggestion) = &diagnostic.suggestion {
            let _ = self.term.write_line(&format!("  = help: {suggestion}"));
        }
    }

    /// Print the whole report with a summary line.
    pub fn report(&self, report: &ScanReport) {
        for diagnostic in &report.diagnostics {
            self.diagnostic(diagnostic);
        }

        if self.quiet {
            return;
        }

        let summary = format!(
            "{} forbidden selector(s), {} file(s) analyzed, {} skipped",
            report.violation_count(),
            report.files_analyzed,
            report.files_skipped
        );
        if report.has_violations() {
            let prefix = if self.use_color {
                style("✗").red().bold().to_string()
            } else {
                "FAIL".to_string()
            };
            let _ = self.term.write_line(&format!("{prefix} {summary}"));
        } else {
            let prefix = if self.use_color {
                style("✓").green().bold().to_string()
            } else {
                "PASS".to_string()
            };
            let _ = self.term.write_line(&format!("{prefix} {summary}"));
        }
    }
}
