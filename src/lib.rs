// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! rclint - Commit message linter
//!
//! Lints commit messages against a closed set of commit types and scopes,
//! a formatting policy, and a required issue reference.
//!
//! # Features
//!
//! - **Rule Catalog**: allowed commit types and project scopes
//! - **Formatting Policy**: scope and subject requirements, header length,
//!   blank lines around body and footer
//! - **Issue References**: either a trailer such as `Closes: #42` in the
//!   body or footer, or a `#<number>` suffix on the header
//! - **Plugins**: named rule providers registered with the engine
//!
//! # Example
//!
//! ```
//! use rclint::config::LintConfig;
//! use rclint::rules::RuleEngine;
//!
//! let engine = RuleEngine::new(LintConfig::default()).unwrap();
//! let result = engine
//!     .validate_string("fix(Core): handle missing RSE\n\nCloses: #42")
//!     .unwrap();
//! assert!(result.is_valid());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod rules;

// Re-exports for convenience
pub use commit::ParsedCommit;
pub use config::LintConfig;
pub use error::{RcError, Result};
pub use rules::{RuleEngine, RuleVerdict};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of rclint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
