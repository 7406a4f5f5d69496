// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in configurations.
//!
//! `conventional` is the base preset other configurations extend. The two
//! project presets are alternatives: they differ in the issue-reference
//! policy and in how the authentication scopes are catalogued, so exactly
//! one of them is active at a time.

use std::collections::BTreeMap;

use crate::error::{ConfigError, RcError, Result};

use super::catalog::{COMMIT_TYPES, CONVENTIONAL_TYPES, SCOPES_MERGED, SCOPES_SPLIT};
use super::schema::{LintConfig, RuleSetting, RuleValue};

use super::schema::Applicability::{Always, Never};

/// Name of the conventional-commits base preset.
pub const CONVENTIONAL: &str = "conventional";

/// Documentation link printed under failures.
pub const HELP_URL: &str = "https://rucio.cern.ch/documentation/contributing/";

/// Name of the plugin providing the issue-reference rules.
pub const ISSUE_PLUGIN: &str = "issue-reference";

/// Look up a base preset by name.
pub fn base_preset(name: &str) -> Result<LintConfig> {
    match name {
        CONVENTIONAL => Ok(conventional_config()),
        _ => Err(RcError::Config(ConfigError::UnknownPreset {
            name: name.to_string(),
        })),
    }
}

/// The conventional-commits base rules.
pub fn conventional_config() -> LintConfig {
    LintConfig::empty()
        .with_rule("body-leading-blank", RuleSetting::warn(Always))
        .with_rule(
            "body-max-line-length",
            RuleSetting::error(Always).with_value(RuleValue::Number(100)),
        )
        .with_rule("footer-leading-blank", RuleSetting::warn(Always))
        .with_rule(
            "footer-max-line-length",
            RuleSetting::error(Always).with_value(RuleValue::Number(100)),
        )
        .with_rule(
            "header-max-length",
            RuleSetting::error(Always).with_value(RuleValue::Number(100)),
        )
        .with_rule("header-trim", RuleSetting::error(Always))
        .with_rule(
            "subject-case",
            RuleSetting::error(Never).with_value(RuleValue::list(&[
                "sentence-case",
                "start-case",
                "pascal-case",
                "upper-case",
            ])),
        )
        .with_rule("subject-empty", RuleSetting::error(Never))
        .with_rule(
            "subject-full-stop",
            RuleSetting::error(Never).with_value(RuleValue::Text(".".to_string())),
        )
        .with_rule(
            "type-case",
            RuleSetting::error(Always).with_value(RuleValue::Text("lower-case".to_string())),
        )
        .with_rule("type-empty", RuleSetting::error(Never))
        .with_rule(
            "type-enum",
            RuleSetting::error(Always).with_value(RuleValue::list(CONVENTIONAL_TYPES)),
        )
}

/// Issue reference required as a trailer in the body or footer.
pub fn trailer_config() -> LintConfig {
    project_config(SCOPES_MERGED).with_rule(
        "issue-trailer-required",
        RuleSetting::error(Always),
    )
}

/// Issue number required at the end of the header.
pub fn header_suffix_config() -> LintConfig {
    project_config(SCOPES_SPLIT).with_rule("issue-number-suffix", RuleSetting::error(Always))
}

fn project_config(scopes: &[&str]) -> LintConfig {
    let mut config = LintConfig::empty();
    config.extends = vec![CONVENTIONAL.to_string()];
    config.plugins = vec![ISSUE_PLUGIN.to_string()];
    config.help_url = Some(HELP_URL.to_string());

    config
        .with_rule(
            "type-enum",
            RuleSetting::error(Always).with_value(RuleValue::list(COMMIT_TYPES)),
        )
        .with_rule(
            "scope-enum",
            RuleSetting::error(Always).with_value(RuleValue::list(scopes)),
        )
        .with_rule("scope-case", RuleSetting::off())
        .with_rule("scope-empty", RuleSetting::error(Never))
        .with_rule("subject-case", RuleSetting::off())
        .with_rule("subject-empty", RuleSetting::error(Never))
        .with_rule(
            "subject-full-stop",
            RuleSetting::error(Never).with_value(RuleValue::Text(".".to_string())),
        )
        .with_rule(
            "header-max-length",
            RuleSetting::warn(Always).with_value(RuleValue::Number(100)),
        )
        .with_rule("body-max-line-length", RuleSetting::off())
        .with_rule("body-leading-blank", RuleSetting::warn(Always))
        .with_rule("footer-leading-blank", RuleSetting::warn(Always))
}

/// Flatten `extends` into a single configuration.
///
/// Presets are applied in order, then the configuration's own settings
/// override them.
pub fn resolve(config: LintConfig) -> Result<LintConfig> {
    let mut resolved = LintConfig::empty();
    for name in &config.extends {
        tracing::debug!("Applying preset: {}", name);
        resolved = super::loader::merge_configs(resolved, base_preset(name)?);
    }

    let mut own = config;
    own.extends = Vec::new();
    Ok(super::loader::merge_configs(resolved, own))
}

/// Rule settings of a resolved configuration, enabled ones only.
pub fn enabled_rules(config: &LintConfig) -> BTreeMap<&str, &RuleSetting> {
    config
        .rules
        .iter()
        .filter(|(_, setting)| setting.is_enabled())
        .map(|(name, setting)| (name.as_str(), setting))
        .collect()
}
