// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use std::collections::BTreeMap;

use crate::commit::ParsedCommit;
use crate::config::{preset, LintConfig, RuleSetting};
use crate::error::{ConfigError, RcError, Result};

use super::builtin::{builtin_rules, Rule};
use super::plugin::{find_plugin, Plugin};
use super::validator::{ValidationIssue, ValidationResult};

/// Rule engine for validating commit messages.
///
/// Holds the resolved configuration and a registry of rules by name:
/// the built-in rules plus those of every enabled plugin.
#[derive(Debug)]
pub struct RuleEngine {
    config: LintConfig,
    registry: BTreeMap<String, Box<dyn Rule>>,
}

impl RuleEngine {
    /// Create a new rule engine with the given configuration.
    ///
    /// Presets named in `extends` are applied and the listed plugins are
    /// registered.
    pub fn new(config: LintConfig) -> Result<Self> {
        let config = preset::resolve(config)?;
        let mut engine = Self {
            config,
            registry: BTreeMap::new(),
        };

        for rule in builtin_rules() {
            engine.add_rule(rule);
        }

        for name in engine.config.plugins.clone() {
            let plugin = find_plugin(&name)?;
            engine.register_plugin(plugin.as_ref());
        }

        Ok(engine)
    }

    /// Add a rule to the engine, replacing any rule of the same name.
    pub fn add_rule(&mut self, rule: Box<dyn Rule>) {
        tracing::trace!("Registering rule: {}", rule.name());
        self.registry.insert(rule.name().to_string(), rule);
    }

    /// Register every rule of a plugin.
    pub fn register_plugin(&mut self, plugin: &dyn Plugin) {
        tracing::debug!("Registering plugin: {}", plugin.name());
        for rule in plugin.rules() {
            self.add_rule(rule);
        }
    }

    /// The resolved configuration.
    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Names of all registered rules.
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.registry.keys().map(String::as_str)
    }

    /// The configured setting of a rule, if any.
    pub fn setting(&self, name: &str) -> Option<&RuleSetting> {
        self.config.rules.get(name)
    }

    /// Ensure every enabled rule in the configuration is registered and
    /// configured with a value of the shape it reads.
    pub fn check_config(&self) -> Result<()> {
        for (name, setting) in preset::enabled_rules(&self.config) {
            let Some(rule) = self.registry.get(name) else {
                return Err(RcError::Config(ConfigError::UnknownRule {
                    name: name.to_string(),
                }));
            };

            let kind = rule.value_kind();
            if let Some(value) = &setting.value {
                if !kind.accepts(value) {
                    return Err(RcError::Config(ConfigError::InvalidRuleValue {
                        rule: name.to_string(),
                        message: format!("expected {}, found {}", kind, value),
                    }));
                }
            }
        }
        Ok(())
    }

    /// Validate a commit message.
    pub fn validate(&self, commit: &ParsedCommit) -> Result<ValidationResult> {
        self.check_config()?;

        let mut result = ValidationResult::new(commit.format());
        result.help_url = self.config.help_url.clone();

        for (name, setting) in preset::enabled_rules(&self.config) {
            let Some(rule) = self.registry.get(name) else {
                continue;
            };

            let verdict = rule.check(commit, setting.applicability, setting.value.as_ref());
            tracing::debug!(rule = name, passed = verdict.passed, "Evaluated rule");

            if !verdict.passed {
                result.push(ValidationIssue {
                    code: name.to_string(),
                    message: verdict
                        .message
                        .unwrap_or_else(|| format!("{} failed", name)),
                    severity: setting.severity,
                });
            }
        }

        Ok(result)
    }

    /// Validate a raw commit message string.
    pub fn validate_string(&self, message: &str) -> Result<ValidationResult> {
        let parsed = ParsedCommit::parse(message)?;
        self.validate(&parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{preset, Applicability, RuleValue, Severity};
    use crate::rules::builtin::{FnRule, RuleVerdict};

    fn trailer_engine() -> RuleEngine {
        RuleEngine::new(preset::trailer_config()).unwrap()
    }

    fn suffix_engine() -> RuleEngine {
        RuleEngine::new(preset::header_suffix_config()).unwrap()
    }

    fn codes(issues: &[ValidationIssue]) -> Vec<&str> {
        issues.iter().map(|i| i.code.as_str()).collect()
    }

    #[test]
    fn test_valid_trailer_commit() {
        let result = trailer_engine()
            .validate_string("fix(Core): handle missing RSE\n\nCloses: #42")
            .unwrap();
        assert!(result.is_valid(), "{:?}", result.errors);
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    }

    #[test]
    fn test_trailer_missing() {
        let result = trailer_engine()
            .validate_string("fix(Core): handle missing RSE\n\nSee discussion")
            .unwrap();
        assert_eq!(codes(&result.errors), vec!["issue-trailer-required"]);
        assert_eq!(
            result.help_url.as_deref(),
            Some("https://rucio.cern.ch/documentation/contributing/")
        );
    }

    #[test]
    fn test_formatting_policy_errors() {
        let result = trailer_engine()
            .validate_string("chore: bump version.\n\nCloses: #1")
            .unwrap();
        assert_eq!(
            codes(&result.errors),
            vec!["scope-empty", "subject-full-stop"]
        );
    }

    #[test]
    fn test_unknown_type_and_scope() {
        let result = trailer_engine()
            .validate_string("feature(Web): add page\n\nCloses: #1")
            .unwrap();
        assert_eq!(codes(&result.errors), vec!["scope-enum", "type-enum"]);
    }

    #[test]
    fn test_header_length_is_warning() {
        let header = format!("feat(Core): {}", "a".repeat(100));
        let result = trailer_engine()
            .validate_string(&format!("{}\n\nCloses: #1", header))
            .unwrap();
        assert!(result.is_valid());
        assert_eq!(codes(&result.warnings), vec!["header-max-length"]);
    }

    #[test]
    fn test_leading_blank_are_warnings() {
        let result = trailer_engine()
            .validate_string("fix(Core): x\nbody text\nCloses: #1")
            .unwrap();
        assert!(result.is_valid());
        assert_eq!(
            codes(&result.warnings),
            vec!["body-leading-blank", "footer-leading-blank"]
        );
    }

    #[test]
    fn test_long_body_lines_allowed() {
        let body = "x".repeat(300);
        let result = trailer_engine()
            .validate_string(&format!("fix(Core): x\n\n{}\n\nCloses: #1", body))
            .unwrap();
        assert!(result.is_valid());
    }

    #[test]
    fn test_scope_catalog_per_preset() {
        let merged = "fix(Authentication & Authorisation): x #1\n\nCloses: #1";
        let split = "fix(Authorisation): x #1\n\nCloses: #1";

        assert!(trailer_engine().validate_string(merged).unwrap().is_valid());
        assert!(!trailer_engine().validate_string(split).unwrap().is_valid());
        assert!(suffix_engine().validate_string(split).unwrap().is_valid());
        assert!(!suffix_engine().validate_string(merged).unwrap().is_valid());
    }

    #[test]
    fn test_header_suffix_policy() {
        let engine = suffix_engine();
        assert!(engine
            .validate_string("fix(Core): correct bug #17")
            .unwrap()
            .is_valid());

        let result = engine.validate_string("fix(Core): correct bug").unwrap();
        assert_eq!(codes(&result.errors), vec!["issue-number-suffix"]);
    }

    #[test]
    fn test_unknown_rule_is_config_error() {
        let config = preset::trailer_config()
            .with_rule("issue-trailer", RuleSetting::error(Applicability::Always));
        let engine = RuleEngine::new(config).unwrap();
        let err = engine.validate_string("fix(Core): x").unwrap_err();
        assert!(matches!(
            err,
            RcError::Config(ConfigError::UnknownRule { ref name }) if name == "issue-trailer"
        ));
    }

    #[test]
    fn test_wrongly_typed_value_is_config_error() {
        let config = preset::trailer_config().with_rule(
            "type-enum",
            RuleSetting::error(Applicability::Always).with_value(RuleValue::Number(5)),
        );
        let engine = RuleEngine::new(config).unwrap();
        let err = engine
            .validate_string("bogus(Core): x\n\nCloses: #1")
            .unwrap_err();
        assert!(matches!(
            err,
            RcError::Config(ConfigError::InvalidRuleValue { ref rule, .. }) if rule == "type-enum"
        ));
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for rule 'type-enum': expected a list of strings, found 5"
        );

        let config = preset::trailer_config().with_rule(
            "header-max-length",
            RuleSetting::error(Applicability::Always).with_value(RuleValue::Text("100".to_string())),
        );
        let engine = RuleEngine::new(config).unwrap();
        assert!(matches!(
            engine.check_config(),
            Err(RcError::Config(ConfigError::InvalidRuleValue { .. }))
        ));
    }

    #[test]
    fn test_single_string_accepted_as_list() {
        let config = LintConfig::empty().with_rule(
            "scope-enum",
            RuleSetting::error(Applicability::Always).with_value(RuleValue::Text("Core".to_string())),
        );
        let engine = RuleEngine::new(config).unwrap();
        assert!(engine.validate_string("fix(Core): x").unwrap().is_valid());
        assert!(!engine.validate_string("fix(Web): x").unwrap().is_valid());
    }

    #[test]
    fn test_disabled_rule_value_not_checked() {
        let config = preset::trailer_config().with_rule(
            "header-max-length",
            RuleSetting::off().with_value(RuleValue::Text("100".to_string())),
        );
        assert!(RuleEngine::new(config).unwrap().check_config().is_ok());
    }

    #[test]
    fn test_file_config_does_not_inherit_presets() {
        let config =
            crate::config::parse_config_json(r#"{"rules":{"type-enum":[2,"always",["fix"]]}}"#)
                .unwrap();
        let engine = RuleEngine::new(config).unwrap();
        assert_eq!(engine.config().help_url, None);

        let header = format!("fix: {}", "a".repeat(150));
        let result = engine.validate_string(&header).unwrap();
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_header_suffix_requires_ascii_digits() {
        let result = suffix_engine()
            .validate_string("fix(Core): correct bug #\u{0661}\u{0662}")
            .unwrap();
        assert_eq!(codes(&result.errors), vec!["issue-number-suffix"]);
    }

    #[test]
    fn test_disabled_unknown_rule_is_ignored() {
        let config = preset::trailer_config().with_rule("issue-trailer", RuleSetting::off());
        let engine = RuleEngine::new(config).unwrap();
        assert!(engine.check_config().is_ok());
    }

    #[test]
    fn test_plugin_rules_need_plugin() {
        let mut config = preset::trailer_config();
        config.plugins.clear();
        let engine = RuleEngine::new(config).unwrap();
        assert!(engine.check_config().is_err());
    }

    #[test]
    fn test_unknown_plugin() {
        let mut config = preset::trailer_config();
        config.plugins.push("jira".to_string());
        assert!(RuleEngine::new(config).is_err());
    }

    #[test]
    fn test_add_custom_rule() {
        fn no_wip(commit: &ParsedCommit, _: Applicability, _: Option<&RuleValue>) -> RuleVerdict {
            RuleVerdict::check(!commit.header.contains("WIP"), || {
                "header may not contain WIP".to_string()
            })
        }

        let config = LintConfig::empty().with_rule(
            "no-wip",
            RuleSetting::new(Severity::Warning, Applicability::Always, None),
        );
        let mut engine = RuleEngine::new(config).unwrap();
        engine.add_rule(Box::new(FnRule::new("no-wip", no_wip)));

        let result = engine.validate_string("fix: WIP").unwrap();
        assert!(result.is_valid());
        assert_eq!(codes(&result.warnings), vec!["no-wip"]);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let engine = trailer_engine();
        let commit = ParsedCommit::parse("fix: x.").unwrap();
        let first = engine.validate(&commit).unwrap();
        let second = engine.validate(&commit).unwrap();
        assert_eq!(first.errors, second.errors);
        assert_eq!(first.warnings, second.warnings);
    }
}
