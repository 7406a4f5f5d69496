// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule providers.
//!
//! A plugin contributes named rules to the engine. Plugins are native and
//! looked up by the names listed under `plugins` in the configuration.

use crate::config::preset::ISSUE_PLUGIN;
use crate::error::{ConfigError, RcError, Result};

use super::builtin::Rule;
use super::issue::IssueReferencePlugin;

/// A provider of named rules.
pub trait Plugin: std::fmt::Debug + Send + Sync {
    /// Get the plugin name.
    fn name(&self) -> &str;

    /// The rules this plugin registers.
    fn rules(&self) -> Vec<Box<dyn Rule>>;
}

/// Names of the plugins that can be enabled.
pub fn available_plugins() -> &'static [&'static str] {
    &[ISSUE_PLUGIN]
}

/// Look up a plugin by name.
pub fn find_plugin(name: &str) -> Result<Box<dyn Plugin>> {
    match name {
        ISSUE_PLUGIN => Ok(Box::new(IssueReferencePlugin)),
        _ => Err(RcError::Config(ConfigError::UnknownPlugin {
            name: name.to_string(),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_plugin() {
        let plugin = find_plugin("issue-reference").unwrap();
        assert_eq!(plugin.name(), "issue-reference");
        assert_eq!(plugin.rules().len(), 2);
    }

    #[test]
    fn test_find_unknown_plugin() {
        let err = find_plugin("jira").unwrap_err();
        assert!(err.to_string().contains("Unknown plugin: jira"));
    }

    #[test]
    fn test_available_plugins_resolve() {
        for name in available_plugins() {
            assert!(find_plugin(name).is_ok());
        }
    }
}
