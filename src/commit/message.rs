// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.

use crate::error::{CommitError, RcError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for splitting a conventional commit header.
    static ref HEADER_REGEX: Regex = Regex::new(
        r"^(?P<type>\w*)(?:\((?P<scope>.*)\))?(?P<breaking>!)?: (?P<subject>.*)$"
    ).unwrap();

    /// Regex for a single trailer line: `Token: value`, `Token #value`
    /// or a breaking change note.
    static ref TRAILER_REGEX: Regex = Regex::new(
        r"^(?:BREAKING[ -]CHANGE|[A-Za-z][\w-]*)\s*(?::\s|:?\s*#)"
    ).unwrap();

    /// Separators between multiple scopes in one header.
    static ref SCOPE_DELIMITERS: Regex = Regex::new(r"[/\\,]").unwrap();
}

/// A commit message split into header, body and footer.
///
/// Produced by [`ParsedCommit::parse`] and consumed read-only by the rules.
/// `header` is always present and non-empty; every other field may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommit {
    /// First line of the message, untrimmed.
    pub header: String,
    /// Commit type (feat, fix, etc.), if the header follows the convention.
    pub commit_type: Option<String>,
    /// Scope as written between the parentheses.
    pub scope: Option<String>,
    /// Subject text after `: `.
    pub subject: Option<String>,
    /// Optional body.
    pub body: Option<String>,
    /// Optional footer holding trailers.
    pub footer: Option<String>,
    /// Whether the header carries the `!` breaking marker.
    pub is_breaking: bool,
    raw: String,
}

impl ParsedCommit {
    /// Create a commit from a header line alone.
    pub fn new(header: impl Into<String>) -> Self {
        let header = header.into();
        let mut commit = Self {
            header: String::new(),
            commit_type: None,
            scope: None,
            subject: None,
            body: None,
            footer: None,
            is_breaking: false,
            raw: String::new(),
        };
        commit.set_header(header);
        commit.raw = commit.compose();
        commit
    }

    /// Set the body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        let body_str = body.into();
        self.body = if body_str.is_empty() {
            None
        } else {
            Some(body_str)
        };
        self.raw = self.compose();
        self
    }

    /// Set the footer.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        let footer_str = footer.into();
        self.footer = if footer_str.is_empty() {
            None
        } else {
            Some(footer_str)
        };
        self.raw = self.compose();
        self
    }

    /// Parse a raw commit message.
    ///
    /// Git comment lines (starting with `#`) and surrounding blank lines
    /// are dropped before splitting.
    pub fn parse(message: &str) -> Result<Self> {
        let lines: Vec<&str> = message
            .lines()
            .filter(|line| !line.starts_with('#'))
            .collect();

        let start = lines
            .iter()
            .position(|l| !l.trim().is_empty())
            .ok_or(RcError::Commit(CommitError::EmptyMessage))?;
        let end = lines
            .iter()
            .rposition(|l| !l.trim().is_empty())
            .map_or(start, |i| i + 1);
        let lines = &lines[start..end];

        let footer_start = find_footer_start(lines);
        let body_lines = &lines[1..footer_start.unwrap_or(lines.len())];

        let body = trim_blank_lines(body_lines);
        let footer = footer_start.map(|fs| lines[fs..].join("\n"));

        let mut commit = Self::new(lines[0]);
        commit.body = body;
        commit.footer = footer;
        commit.raw = lines.join("\n");

        tracing::trace!(
            header = %commit.header,
            has_body = commit.body.is_some(),
            has_footer = commit.footer.is_some(),
            "Parsed commit message"
        );

        Ok(commit)
    }

    /// The cleaned message the fields were taken from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Individual scopes, split on `/`, `\` and `,`.
    pub fn scopes(&self) -> Vec<&str> {
        match self.scope {
            Some(ref scope) => SCOPE_DELIMITERS
                .split(scope)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Whether the line directly after the header is blank.
    pub fn line_after_header_is_blank(&self) -> bool {
        self.raw
            .lines()
            .nth(1)
            .map_or(true, |line| line.trim().is_empty())
    }

    /// Whether the line directly before the footer is blank.
    ///
    /// Returns `true` when there is no footer.
    pub fn line_before_footer_is_blank(&self) -> bool {
        let Some(ref footer) = self.footer else {
            return true;
        };
        let lines: Vec<&str> = self.raw.lines().collect();
        let footer_len = footer.lines().count();
        match lines.len().checked_sub(footer_len + 1) {
            Some(index) => lines[index].trim().is_empty(),
            None => false,
        }
    }

    /// Format the commit message as a string.
    pub fn format(&self) -> String {
        self.raw.clone()
    }

    fn set_header(&mut self, header: String) {
        if let Some(captures) = HEADER_REGEX.captures(&header) {
            let non_empty = |name: &str| {
                captures
                    .name(name)
                    .map(|m| m.as_str().to_string())
                    .filter(|s| !s.is_empty())
            };
            self.commit_type = non_empty("type");
            self.scope = non_empty("scope");
            self.subject = non_empty("subject");
            self.is_breaking = captures.name("breaking").is_some();
        }
        self.header = header;
    }

    fn compose(&self) -> String {
        let mut result = self.header.clone();

        if let Some(ref body) = self.body {
            result.push_str("\n\n");
            result.push_str(body);
        }

        if let Some(ref footer) = self.footer {
            result.push_str("\n\n");
            result.push_str(footer);
        }

        result
    }
}

/// Index of the first line of the trailing trailer block, if any.
fn find_footer_start(lines: &[&str]) -> Option<usize> {
    let mut start = None;
    for index in (1..lines.len()).rev() {
        let line = lines[index];
        if line.trim().is_empty() || !TRAILER_REGEX.is_match(line) {
            break;
        }
        start = Some(index);
    }
    start
}

fn trim_blank_lines(lines: &[&str]) -> Option<String> {
    let first = lines.iter().position(|l| !l.trim().is_empty())?;
    let last = lines.iter().rposition(|l| !l.trim().is_empty())?;
    Some(lines[first..=last].join("\n"))
}
