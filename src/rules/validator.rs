// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use crate::cli::args::OutputFormat;
use crate::config::Severity;
use console::{style, Style};

/// A single validation issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Name of the rule that failed.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Configured severity of the rule.
    pub severity: Severity,
}

impl ValidationIssue {
    /// Whether this issue fails the lint.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Format the issue for terminal output.
    pub fn format(&self) -> String {
        let (prefix, code_style) = if self.is_error() {
            (style("✖").red().bold(), Style::new().red())
        } else {
            (style("⚠").yellow().bold(), Style::new().yellow())
        };

        format!(
            "{}   {} {}",
            prefix,
            self.message,
            code_style.apply_to(format!("[{}]", self.code))
        )
    }
}

/// Result of linting a commit message.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// The linted message.
    pub message: String,
    /// Violations of error-level rules.
    pub errors: Vec<ValidationIssue>,
    /// Violations of warning-level rules.
    pub warnings: Vec<ValidationIssue>,
    /// Where to point users for help.
    pub help_url: Option<String>,
}

impl ValidationResult {
    /// Create a new validation result.
    pub fn new(message: String) -> Self {
        Self {
            message,
            errors: Vec::new(),
            warnings: Vec::new(),
            help_url: None,
        }
    }

    /// Record an issue under errors or warnings by its severity.
    pub fn push(&mut self, issue: ValidationIssue) {
        match issue.severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
            Severity::Off => {}
        }
    }

    /// Check if the validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if the validation passed, optionally treating warnings as errors.
    pub fn passes(&self, strict: bool) -> bool {
        self.is_valid() && !(strict && !self.warnings.is_empty())
    }

    /// Get the total number of issues.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Print the result to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => println!("{}", self.render_json()),
            _ => println!("{}", self.render_text()),
        }
    }

    /// Render in text format.
    pub fn render_text(&self) -> String {
        let header = self.message.lines().next().unwrap_or("");
        let mut lines = vec![format!("{}   input: {}", style("⧗").dim(), header)];

        for issue in self.errors.iter().chain(&self.warnings) {
            lines.push(issue.format());
        }

        lines.push(String::new());
        let status = if self.issue_count() == 0 {
            style("✔").green().bold()
        } else if self.is_valid() {
            style("⚠").yellow().bold()
        } else {
            style("✖").red().bold()
        };
        lines.push(format!("{}   {}", status, self.summary()));

        if self.issue_count() > 0 {
            if let Some(ref url) = self.help_url {
                lines.push(format!("{}   Get help: {}", style("ⓘ").cyan(), url));
            }
        }

        lines.join("\n")
    }

    /// Render in JSON format.
    pub fn render_json(&self) -> String {
        let issue_json = |issue: &ValidationIssue| {
            serde_json::json!({
                "name": issue.code,
                "level": u8::from(issue.severity),
                "message": issue.message,
            })
        };

        let json = serde_json::json!({
            "valid": self.is_valid(),
            "input": self.message,
            "errors": self.errors.iter().map(issue_json).collect::<Vec<_>>(),
            "warnings": self.warnings.iter().map(issue_json).collect::<Vec<_>>(),
            "helpUrl": self.help_url,
        });

        serde_json::to_string_pretty(&json).unwrap_or_default()
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        format!(
            "found {} problems, {} warnings",
            self.errors.len(),
            self.warnings.len()
        )
    }
}
