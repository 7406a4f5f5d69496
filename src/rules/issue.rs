// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Issue reference rules.
//!
//! Two alternative policies are provided and a configuration enables one:
//!
//! - `issue-trailer-required`: the body or footer must carry a trailer such
//!   as `Closes: #42` or `Issue #7`.
//! - `issue-number-suffix`: the header must end with `#<number>`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::commit::ParsedCommit;
use crate::config::{preset::ISSUE_PLUGIN, Applicability, RuleValue};

use super::builtin::{FnRule, Rule, RuleVerdict, ValueKind};
use super::plugin::Plugin;

/// Rule name of the trailer policy.
pub const ISSUE_TRAILER_RULE: &str = "issue-trailer-required";

/// Rule name of the header suffix policy.
pub const ISSUE_SUFFIX_RULE: &str = "issue-number-suffix";

/// Trailer keywords accepted when the rule has no value.
pub const DEFAULT_TRAILER_TOKENS: &[&str] = &["issue", "closes"];

const MISSING_TRAILER: &str = "Commit message must include an issue-related Git trailer";
const MISSING_HEADER: &str = "Header is required";
const MISSING_SUFFIX: &str = "Commit message must end with issue number format: #<number>";

lazy_static! {
    static ref DEFAULT_TRAILER_REGEX: Regex = trailer_regex(DEFAULT_TRAILER_TOKENS).unwrap();

    static ref ISSUE_SUFFIX_REGEX: Regex = Regex::new(r"#[0-9]+$").unwrap();
}

/// Plugin registering both issue reference rules.
#[derive(Debug, Default, Clone, Copy)]
pub struct IssueReferencePlugin;

impl Plugin for IssueReferencePlugin {
    fn name(&self) -> &str {
        ISSUE_PLUGIN
    }

    fn rules(&self) -> Vec<Box<dyn Rule>> {
        vec![
            Box::new(
                FnRule::new(ISSUE_TRAILER_RULE, issue_trailer_required)
                    .with_value(ValueKind::List),
            ),
            Box::new(FnRule::new(ISSUE_SUFFIX_RULE, issue_number_suffix)),
        ]
    }
}

/// Require an issue trailer in the body or footer.
///
/// A list value replaces the accepted trailer keywords. Matching is
/// line based, `<token> [:#] <rest>`, and ignores ASCII case only.
pub fn issue_trailer_required(
    commit: &ParsedCommit,
    _when: Applicability,
    value: Option<&RuleValue>,
) -> RuleVerdict {
    let full_message = [commit.body.as_deref(), commit.footer.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    if full_message.is_empty() {
        return RuleVerdict::fail(MISSING_TRAILER);
    }

    let custom_tokens = value
        .and_then(RuleValue::as_list)
        .filter(|tokens| !tokens.is_empty());

    let found = match custom_tokens {
        Some(ref tokens) => match trailer_regex(tokens) {
            Ok(regex) => regex.is_match(&full_message),
            Err(e) => {
                tracing::warn!("Invalid trailer tokens {:?}: {}", tokens, e);
                DEFAULT_TRAILER_REGEX.is_match(&full_message)
            }
        },
        None => DEFAULT_TRAILER_REGEX.is_match(&full_message),
    };

    let tokens = custom_tokens.unwrap_or_else(|| DEFAULT_TRAILER_TOKENS.to_vec());
    RuleVerdict::check(found, || missing_trailer_message(&tokens))
}

/// Require the header to end with `#<digits>`.
pub fn issue_number_suffix(
    commit: &ParsedCommit,
    _when: Applicability,
    _value: Option<&RuleValue>,
) -> RuleVerdict {
    if commit.header.trim().is_empty() {
        return RuleVerdict::fail(MISSING_HEADER);
    }

    RuleVerdict::check(ISSUE_SUFFIX_REGEX.is_match(&commit.header), || {
        MISSING_SUFFIX.to_string()
    })
}

fn trailer_regex(tokens: &[&str]) -> Result<Regex, regex::Error> {
    let alternatives = tokens
        .iter()
        .map(|token| regex::escape(token))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?im)^(?-u:{})\s*[:#]\s*.+$", alternatives))
}

fn missing_trailer_message(tokens: &[&str]) -> String {
    let examples = tokens
        .iter()
        .zip([123, 456, 789, 101].iter().cycle())
        .map(|(token, number)| format!("\"{}: #{}\"", capitalize(token), number))
        .collect::<Vec<_>>()
        .join(", ");
    let suggested = tokens
        .iter()
        .find(|token| token.eq_ignore_ascii_case("fixes"))
        .or_else(|| tokens.first())
        .copied()
        .unwrap_or("issue");

    format!(
        "{} (e.g., {}). You can add a trailer using: git commit -m \"message\" --trailer \"{}: #123\"",
        MISSING_TRAILER,
        examples,
        capitalize(suggested)
    )
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
