// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.
//!
//! Every rule computes whether its condition holds and lets the configured
//! [`Applicability`] decide whether that is a pass (`always`) or a failure
//! (`never`). Rules with nothing to inspect pass.

use crate::commit::ParsedCommit;
use crate::config::{Applicability, RuleValue};

/// Signature shared by all rule predicates.
pub type RuleFn = fn(&ParsedCommit, Applicability, Option<&RuleValue>) -> RuleVerdict;

/// Outcome of a single rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleVerdict {
    /// Whether the commit satisfies the rule.
    pub passed: bool,
    /// Explanation shown to the user; always set when `passed` is false.
    pub message: Option<String>,
}

impl RuleVerdict {
    /// A passing verdict.
    pub fn pass() -> Self {
        Self {
            passed: true,
            message: None,
        }
    }

    /// A failing verdict with its explanation.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: Some(message.into()),
        }
    }

    /// Pass when `passed`, otherwise fail with the lazily built message.
    pub fn check(passed: bool, message: impl FnOnce() -> String) -> Self {
        if passed {
            Self::pass()
        } else {
            Self::fail(message())
        }
    }
}

/// Shape of the value a rule reads from its configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// The rule takes no value; anything given is ignored.
    Unused,
    /// A character count.
    Number,
    /// A single string.
    Text,
    /// A list of strings. A single string counts as a one-item list.
    List,
}

impl ValueKind {
    /// Whether a configured value has this shape.
    pub fn accepts(self, value: &RuleValue) -> bool {
        match (self, value) {
            (ValueKind::Unused, _) => true,
            (ValueKind::Number, RuleValue::Number(_)) => true,
            (ValueKind::Text, RuleValue::Text(_)) => true,
            (ValueKind::List, RuleValue::Text(_) | RuleValue::List(_)) => true,
            _ => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Unused => "no value",
            ValueKind::Number => "a number",
            ValueKind::Text => "a string",
            ValueKind::List => "a list of strings",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Trait for rules the engine can evaluate.
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// Get the rule name.
    fn name(&self) -> &str;

    /// The value shape this rule expects.
    fn value_kind(&self) -> ValueKind {
        ValueKind::Unused
    }

    /// Check the commit message.
    fn check(
        &self,
        commit: &ParsedCommit,
        when: Applicability,
        value: Option<&RuleValue>,
    ) -> RuleVerdict;
}

/// A rule backed by a plain function.
#[derive(Debug, Clone, Copy)]
pub struct FnRule {
    name: &'static str,
    predicate: RuleFn,
    kind: ValueKind,
}

impl FnRule {
    /// Create a named rule from a predicate that takes no value.
    pub fn new(name: &'static str, predicate: RuleFn) -> Self {
        Self {
            name,
            predicate,
            kind: ValueKind::Unused,
        }
    }

    /// Set the value shape the predicate reads.
    pub fn with_value(mut self, kind: ValueKind) -> Self {
        self.kind = kind;
        self
    }
}

impl Rule for FnRule {
    fn name(&self) -> &str {
        self.name
    }

    fn value_kind(&self) -> ValueKind {
        self.kind
    }

    fn check(
        &self,
        commit: &ParsedCommit,
        when: Applicability,
        value: Option<&RuleValue>,
    ) -> RuleVerdict {
        (self.predicate)(commit, when, value)
    }
}

/// All built-in rules.
pub fn builtin_rules() -> Vec<Box<dyn Rule>> {
    use ValueKind::{List, Number, Text};

    let rules = [
        FnRule::new("body-leading-blank", body_leading_blank),
        FnRule::new("body-max-line-length", body_max_line_length).with_value(Number),
        FnRule::new("footer-leading-blank", footer_leading_blank),
        FnRule::new("footer-max-line-length", footer_max_line_length).with_value(Number),
        FnRule::new("header-max-length", header_max_length).with_value(Number),
        FnRule::new("header-trim", header_trim),
        FnRule::new("scope-case", scope_case).with_value(List),
        FnRule::new("scope-empty", scope_empty),
        FnRule::new("scope-enum", scope_enum).with_value(List),
        FnRule::new("subject-case", subject_case).with_value(List),
        FnRule::new("subject-empty", subject_empty),
        FnRule::new("subject-full-stop", subject_full_stop).with_value(Text),
        FnRule::new("type-case", type_case).with_value(List),
        FnRule::new("type-empty", type_empty),
        FnRule::new("type-enum", type_enum).with_value(List),
    ];

    rules
        .into_iter()
        .map(|rule| Box::new(rule) as Box<dyn Rule>)
        .collect()
}

// Type rules

fn type_enum(commit: &ParsedCommit, when: Applicability, value: Option<&RuleValue>) -> RuleVerdict {
    enum_rule("type", commit.commit_type.as_deref().into_iter().collect(), when, value)
}

fn type_empty(commit: &ParsedCommit, when: Applicability, _value: Option<&RuleValue>) -> RuleVerdict {
    empty_rule("type", commit.commit_type.as_deref(), when)
}

fn type_case(commit: &ParsedCommit, when: Applicability, value: Option<&RuleValue>) -> RuleVerdict {
    case_rule("type", commit.commit_type.as_deref().into_iter().collect(), when, value)
}

// Scope rules

fn scope_enum(commit: &ParsedCommit, when: Applicability, value: Option<&RuleValue>) -> RuleVerdict {
    enum_rule("scope", commit.scopes(), when, value)
}

fn scope_empty(commit: &ParsedCommit, when: Applicability, _value: Option<&RuleValue>) -> RuleVerdict {
    empty_rule("scope", commit.scope.as_deref(), when)
}

fn scope_case(commit: &ParsedCommit, when: Applicability, value: Option<&RuleValue>) -> RuleVerdict {
    case_rule("scope", commit.scopes(), when, value)
}

// Subject rules

fn subject_empty(
    commit: &ParsedCommit,
    when: Applicability,
    _value: Option<&RuleValue>,
) -> RuleVerdict {
    empty_rule("subject", commit.subject.as_deref(), when)
}

fn subject_full_stop(
    commit: &ParsedCommit,
    when: Applicability,
    value: Option<&RuleValue>,
) -> RuleVerdict {
    let Some(ref subject) = commit.subject else {
        return RuleVerdict::pass();
    };
    let stop = value.and_then(RuleValue::as_text).unwrap_or(".");
    RuleVerdict::check(when.apply(subject.ends_with(stop)), || {
        format!("subject {} end with full stop", when.verb())
    })
}

fn subject_case(commit: &ParsedCommit, when: Applicability, value: Option<&RuleValue>) -> RuleVerdict {
    case_rule("subject", commit.subject.as_deref().into_iter().collect(), when, value)
}

// Header rules

fn header_max_length(
    commit: &ParsedCommit,
    _when: Applicability,
    value: Option<&RuleValue>,
) -> RuleVerdict {
    let Some(max) = value.and_then(RuleValue::as_number) else {
        return RuleVerdict::pass();
    };
    let len = commit.header.chars().count();
    RuleVerdict::check(len <= max, || {
        format!(
            "header must not be longer than {} characters, current length is {}",
            max, len
        )
    })
}

fn header_trim(commit: &ParsedCommit, when: Applicability, _value: Option<&RuleValue>) -> RuleVerdict {
    let header = commit.header.as_str();
    RuleVerdict::check(when.apply(header.trim() == header), || {
        format!("header {} be trimmed of surrounding whitespace", when.verb())
    })
}

// Body and footer rules

fn body_leading_blank(
    commit: &ParsedCommit,
    when: Applicability,
    _value: Option<&RuleValue>,
) -> RuleVerdict {
    if commit.body.is_none() {
        return RuleVerdict::pass();
    }
    RuleVerdict::check(when.apply(commit.line_after_header_is_blank()), || {
        format!("body {} have leading blank line", when.verb())
    })
}

fn body_max_line_length(
    commit: &ParsedCommit,
    _when: Applicability,
    value: Option<&RuleValue>,
) -> RuleVerdict {
    max_line_length_rule("body", commit.body.as_deref(), value)
}

fn footer_leading_blank(
    commit: &ParsedCommit,
    when: Applicability,
    _value: Option<&RuleValue>,
) -> RuleVerdict {
    if commit.footer.is_none() {
        return RuleVerdict::pass();
    }
    RuleVerdict::check(when.apply(commit.line_before_footer_is_blank()), || {
        format!("footer {} have leading blank line", when.verb())
    })
}

fn footer_max_line_length(
    commit: &ParsedCommit,
    _when: Applicability,
    value: Option<&RuleValue>,
) -> RuleVerdict {
    max_line_length_rule("footer", commit.footer.as_deref(), value)
}

// Shared rule shapes

fn enum_rule(
    field: &str,
    actual: Vec<&str>,
    when: Applicability,
    value: Option<&RuleValue>,
) -> RuleVerdict {
    let Some(allowed) = value.and_then(RuleValue::as_list) else {
        return RuleVerdict::pass();
    };
    if actual.is_empty() {
        return RuleVerdict::pass();
    }

    let passed = match when {
        Applicability::Always => actual.iter().all(|item| allowed.contains(item)),
        Applicability::Never => !actual.iter().any(|item| allowed.contains(item)),
    };
    RuleVerdict::check(passed, || {
        format!("{} {} be one of [{}]", field, when.verb(), allowed.join(", "))
    })
}

fn empty_rule(field: &str, actual: Option<&str>, when: Applicability) -> RuleVerdict {
    let is_empty = actual.map_or(true, str::is_empty);
    RuleVerdict::check(when.apply(is_empty), || {
        format!("{} {} be empty", field, when.verb())
    })
}

fn case_rule(
    field: &str,
    actual: Vec<&str>,
    when: Applicability,
    value: Option<&RuleValue>,
) -> RuleVerdict {
    let Some(cases) = value.and_then(RuleValue::as_list) else {
        return RuleVerdict::pass();
    };
    if actual.is_empty() {
        return RuleVerdict::pass();
    }

    let passed = actual.iter().all(|text| {
        let matches_any = cases.iter().any(|case| matches_case(text, case));
        when.apply(matches_any)
    });
    RuleVerdict::check(passed, || {
        format!("{} {} be {}", field, when.verb(), cases.join(", "))
    })
}

fn max_line_length_rule(field: &str, text: Option<&str>, value: Option<&RuleValue>) -> RuleVerdict {
    let (Some(text), Some(max)) = (text, value.and_then(RuleValue::as_number)) else {
        return RuleVerdict::pass();
    };
    let too_long = text.lines().any(|line| line.chars().count() > max);
    RuleVerdict::check(!too_long, || {
        format!("{}'s lines must not be longer than {} characters", field, max)
    })
}

/// Check text against a named case.
///
/// Unknown case names never match.
fn matches_case(text: &str, case: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return true;
    };
    let rest: String = chars.collect();

    match case {
        "lower-case" | "lowercase" => text == text.to_lowercase(),
        "upper-case" | "uppercase" => text == text.to_uppercase(),
        "sentence-case" | "sentencecase" => {
            first.is_uppercase() && rest == rest.to_lowercase()
        }
        "start-case" | "startcase" => text
            .split_whitespace()
            .all(|word| word.chars().next().map_or(true, char::is_uppercase)),
        "pascal-case" | "pascalcase" => {
            first.is_uppercase() && text.chars().all(char::is_alphanumeric)
        }
        _ => {
            tracing::warn!("Unknown case '{}' in rule configuration", case);
            false
        }
    }
}
