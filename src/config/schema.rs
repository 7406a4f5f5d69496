// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the structures that can be loaded from `rclint.toml` or
//! `.rclintrc.json`. A rule is configured as `[severity, applicability, value]`
//! where only the severity is mandatory.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The main configuration structure for rclint.
///
/// Fields left out of a file are empty. [`LintConfig::default`] is the
/// trailer preset used when no file is found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default = "LintConfig::empty")]
pub struct LintConfig {
    /// Base presets whose rules are inherited.
    pub extends: Vec<String>,

    /// Rule providers to register.
    pub plugins: Vec<String>,

    /// Documentation URL surfaced in failure output.
    #[serde(alias = "helpUrl", skip_serializing_if = "Option::is_none")]
    pub help_url: Option<String>,

    /// Rule name to setting.
    pub rules: BTreeMap<String, RuleSetting>,
}

impl Default for LintConfig {
    fn default() -> Self {
        super::preset::trailer_config()
    }
}

impl LintConfig {
    /// Create a configuration with nothing enabled.
    pub fn empty() -> Self {
        Self {
            extends: Vec::new(),
            plugins: Vec::new(),
            help_url: None,
            rules: BTreeMap::new(),
        }
    }

    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Set a rule, replacing any previous setting.
    pub fn with_rule(mut self, name: impl Into<String>, setting: RuleSetting) -> Self {
        self.rules.insert(name.into(), setting);
        self
    }

    /// The value configured for a rule, if any.
    pub fn rule_value(&self, name: &str) -> Option<&RuleValue> {
        self.rules.get(name).and_then(|s| s.value.as_ref())
    }
}

/// How strictly a rule is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    /// Rule is disabled.
    Off,
    /// Violations are reported but do not fail the lint.
    Warning,
    /// Violations fail the lint.
    Error,
}

impl Severity {
    /// Get the string representation of the severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, String> {
        match level {
            0 => Ok(Severity::Off),
            1 => Ok(Severity::Warning),
            2 => Ok(Severity::Error),
            other => Err(format!("severity must be 0, 1 or 2, got {}", other)),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Off => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a rule's condition must hold or must not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    #[default]
    Always,
    Never,
}

impl Applicability {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Applicability::Always => "always",
            Applicability::Never => "never",
        }
    }

    /// Apply to a condition: `always` keeps it, `never` inverts it.
    pub fn apply(&self, holds: bool) -> bool {
        match self {
            Applicability::Always => holds,
            Applicability::Never => !holds,
        }
    }

    /// Modal verb for messages ("must" / "may not").
    pub fn verb(&self) -> &'static str {
        match self {
            Applicability::Always => "must",
            Applicability::Never => "may not",
        }
    }
}

impl fmt::Display for Applicability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The argument of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    Number(usize),
    Text(String),
    List(Vec<String>),
}

impl RuleValue {
    /// Build a list value from string literals.
    pub fn list(items: &[&str]) -> Self {
        RuleValue::List(items.iter().map(|s| s.to_string()).collect())
    }

    /// The value as a number.
    pub fn as_number(&self) -> Option<usize> {
        match self {
            RuleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The value as a list; a single string counts as a one-element list.
    pub fn as_list(&self) -> Option<Vec<&str>> {
        match self {
            RuleValue::List(items) => Some(items.iter().map(String::as_str).collect()),
            RuleValue::Text(text) => Some(vec![text.as_str()]),
            RuleValue::Number(_) => None,
        }
    }

    /// The value as a single string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RuleValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for RuleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleValue::Number(n) => write!(f, "{}", n),
            RuleValue::Text(text) => write!(f, "\"{}\"", text),
            RuleValue::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

/// Configuration of a single rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRuleSetting", into = "RawRuleSetting")]
pub struct RuleSetting {
    pub severity: Severity,
    pub applicability: Applicability,
    pub value: Option<RuleValue>,
}

impl RuleSetting {
    /// A disabled rule.
    pub fn off() -> Self {
        Self::new(Severity::Off, Applicability::Always, None)
    }

    /// Create a rule setting.
    pub fn new(severity: Severity, applicability: Applicability, value: Option<RuleValue>) -> Self {
        Self {
            severity,
            applicability,
            value,
        }
    }

    /// A warning-level rule.
    pub fn warn(applicability: Applicability) -> Self {
        Self::new(Severity::Warning, applicability, None)
    }

    /// An error-level rule.
    pub fn error(applicability: Applicability) -> Self {
        Self::new(Severity::Error, applicability, None)
    }

    /// Attach a value.
    pub fn with_value(mut self, value: RuleValue) -> Self {
        self.value = Some(value);
        self
    }

    /// Whether the rule is evaluated at all.
    pub fn is_enabled(&self) -> bool {
        self.severity != Severity::Off
    }
}

impl fmt::Display for RuleSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}", u8::from(self.severity), self.applicability)?;
        if let Some(ref value) = self.value {
            write!(f, ", {}", value)?;
        }
        write!(f, "]")
    }
}

/// On-disk shapes accepted for a rule setting.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawRuleSetting {
    Full(Severity, Applicability, RuleValue),
    WithApplicability(Severity, Applicability),
    Bare((Severity,)),
    Level(Severity),
}

impl From<RawRuleSetting> for RuleSetting {
    fn from(raw: RawRuleSetting) -> Self {
        match raw {
            RawRuleSetting::Full(severity, applicability, value) => {
                RuleSetting::new(severity, applicability, Some(value))
            }
            RawRuleSetting::WithApplicability(severity, applicability) => {
                RuleSetting::new(severity, applicability, None)
            }
            RawRuleSetting::Bare((severity,)) | RawRuleSetting::Level(severity) => {
                RuleSetting::new(severity, Applicability::Always, None)
            }
        }
    }
}

impl From<RuleSetting> for RawRuleSetting {
    fn from(setting: RuleSetting) -> Self {
        match setting.value {
            Some(value) => RawRuleSetting::Full(setting.severity, setting.applicability, value),
            None => RawRuleSetting::WithApplicability(setting.severity, setting.applicability),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Rules {
        rules: BTreeMap<String, RuleSetting>,
    }

    #[test]
    fn test_default_config() {
        let config = LintConfig::default();
        assert_eq!(config.extends, vec!["conventional"]);
        assert!(config.rules.contains_key("issue-trailer-required"));
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let config: LintConfig =
            toml::from_str("[rules]\n\"type-enum\" = [2, \"always\", [\"fix\"]]\n").unwrap();
        assert!(config.extends.is_empty());
        assert!(config.plugins.is_empty());
        assert_eq!(config.help_url, None);
        assert_eq!(config.rules.len(), 1);

        let config: LintConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LintConfig::empty());
    }

    #[test]
    fn test_rule_setting_shapes() {
        let parsed: Rules = toml::from_str(
            r#"
[rules]
"scope-case" = [0]
"scope-empty" = [2, "never"]
"header-max-length" = [1, "always", 100]
"type-enum" = [2, "always", ["feat", "fix"]]
"subject-full-stop" = [2, "never", "."]
"body-max-line-length" = 0
"#,
        )
        .unwrap();
        let rules = parsed.rules;

        assert_eq!(rules["scope-case"], RuleSetting::off());
        assert_eq!(rules["scope-empty"], RuleSetting::error(Applicability::Never));
        assert_eq!(
            rules["header-max-length"].value,
            Some(RuleValue::Number(100))
        );
        assert_eq!(rules["header-max-length"].severity, Severity::Warning);
        assert_eq!(
            rules["type-enum"].value,
            Some(RuleValue::list(&["feat", "fix"]))
        );
        assert_eq!(
            rules["subject-full-stop"].value,
            Some(RuleValue::Text(".".to_string()))
        );
        assert!(!rules["body-max-line-length"].is_enabled());
    }

    #[test]
    fn test_invalid_severity_rejected() {
        let parsed: Result<Rules, _> = toml::from_str("[rules]\n\"type-enum\" = [3, \"always\"]\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_applicability_apply() {
        assert!(Applicability::Always.apply(true));
        assert!(!Applicability::Never.apply(true));
        assert!(Applicability::Never.apply(false));
    }

    #[test]
    fn test_rule_setting_display() {
        let setting = RuleSetting::warn(Applicability::Always).with_value(RuleValue::Number(100));
        assert_eq!(setting.to_string(), "[1, always, 100]");
        assert_eq!(RuleSetting::off().to_string(), "[0, always]");
    }

    #[test]
    fn test_config_serialization() {
        let config = LintConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("issue-trailer-required"));
        let back: LintConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(back, config);
    }
}
