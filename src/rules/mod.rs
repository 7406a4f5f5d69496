// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! This module provides a configurable rule engine for validating
//! commit messages against built-in and plugin-provided rules.

mod builtin;
mod engine;
mod issue;
mod plugin;
mod validator;

pub use builtin::{builtin_rules, FnRule, Rule, RuleFn, RuleVerdict, ValueKind};
pub use engine::RuleEngine;
pub use issue::{
    issue_number_suffix, issue_trailer_required, IssueReferencePlugin, DEFAULT_TRAILER_TOKENS,
    ISSUE_SUFFIX_RULE, ISSUE_TRAILER_RULE,
};
pub use plugin::{available_plugins, find_plugin, Plugin};
pub use validator::{ValidationIssue, ValidationResult};
