// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values and example files.

use super::schema::LintConfig;

/// Get the default configuration.
pub fn default_config() -> LintConfig {
    LintConfig::default()
}

/// Example file for the trailer-based issue policy.
pub fn trailer_example() -> &'static str {
    r#"# rclint configuration
# Author: Eshan Roy
# SPDX-License-Identifier: MIT
#
# Every commit must reference an issue through a Git trailer in its
# body or footer, for example:
#
#   git commit -m "fix(Core): handle missing RSE" --trailer "Closes: #123"

extends = ["conventional"]
plugins = ["issue-reference"]
help_url = "https://rucio.cern.ch/documentation/contributing/"

# Each rule is [severity, applicability, value].
# Severity: 0 = off, 1 = warning, 2 = error.
[rules]
"type-enum" = [2, "always", [
    "feat", "fix", "perf",
    "docs", "style", "refactor", "test", "build", "ci", "chore",
    "revert", "patch",
]]
"scope-enum" = [2, "always", [
    "Core", "Clients", "Database", "Authentication & Authorisation",
    "Consistency", "Deletion", "Metadata", "Monitoring", "Traces",
    "Messaging", "Policies", "Docker", "Kubernetes", "Documentation",
    "DIRAC", "MultiVO", "Lifetime", "Overview", "Dependencies",
    "GitHubActions", "Opendata", "CI",
]]
"scope-case" = [0]
"scope-empty" = [2, "never"]
"subject-case" = [0]
"subject-empty" = [2, "never"]
"subject-full-stop" = [2, "never", "."]
"header-max-length" = [1, "always", 100]
"body-max-line-length" = [0]
"body-leading-blank" = [1, "always"]
"footer-leading-blank" = [1, "always"]
"issue-trailer-required" = [2, "always"]
"#
}

/// Example file for the header-suffix issue policy.
pub fn header_suffix_example() -> &'static str {
    r#"# rclint configuration
# Author: Eshan Roy
# SPDX-License-Identifier: MIT
#
# Every commit header must end with the issue number, for example:
#
#   fix(Core): handle missing RSE #123

extends = ["conventional"]
plugins = ["issue-reference"]
help_url = "https://rucio.cern.ch/documentation/contributing/"

# Each rule is [severity, applicability, value].
# Severity: 0 = off, 1 = warning, 2 = error.
[rules]
"type-enum" = [2, "always", [
    "feat", "fix", "perf",
    "docs", "style", "refactor", "test", "build", "ci", "chore",
    "revert", "patch",
]]
"scope-enum" = [2, "always", [
    "Core", "Clients", "Database", "Authentication", "Authorisation",
    "Consistency", "Deletion", "Metadata", "Monitoring", "Traces",
    "Messaging", "Policies", "Docker", "Kubernetes", "Documentation",
    "DIRAC", "MultiVO", "Lifetime", "Overview", "Dependencies",
    "GitHubActions", "Opendata", "CI",
]]
"scope-case" = [0]
"scope-empty" = [2, "never"]
"subject-case" = [0]
"subject-empty" = [2, "never"]
"subject-full-stop" = [2, "never", "."]
"header-max-length" = [1, "always", 100]
"body-max-line-length" = [0]
"body-leading-blank" = [1, "always"]
"footer-leading-blank" = [1, "always"]
"issue-number-suffix" = [2, "always"]
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::preset;

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config, preset::trailer_config());
    }

    #[test]
    fn test_trailer_example_matches_preset() {
        let config: LintConfig =
            toml::from_str(trailer_example()).expect("Example config should parse");
        assert_eq!(config, preset::trailer_config());
    }

    #[test]
    fn test_header_suffix_example_matches_preset() {
        let config: LintConfig =
            toml::from_str(header_suffix_example()).expect("Example config should parse");
        assert_eq!(config, preset::header_suffix_config());
    }
}
