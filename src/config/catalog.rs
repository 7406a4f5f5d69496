// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Allowed commit types and scopes.
//!
//! Membership is exact and case-sensitive.

/// Allowed commit types, grouped by kind of change.
pub const COMMIT_TYPES: &[&str] = &[
    // Functional changes
    "feat",
    "fix",
    "perf",
    // Non-functional changes
    "docs",
    "style",
    "refactor",
    "test",
    "build",
    "ci",
    "chore",
    // Miscellaneous
    "revert",
    "patch",
];

/// Project components with authentication and authorisation as one scope.
pub const SCOPES_MERGED: &[&str] = &[
    "Core",
    "Clients",
    "Database",
    "Authentication & Authorisation",
    "Consistency",
    "Deletion",
    "Metadata",
    "Monitoring",
    "Traces",
    "Messaging",
    "Policies",
    "Docker",
    "Kubernetes",
    "Documentation",
    "DIRAC",
    "MultiVO",
    "Lifetime",
    "Overview",
    "Dependencies",
    "GitHubActions",
    "Opendata",
    "CI",
];

/// Project components with authentication and authorisation split.
pub const SCOPES_SPLIT: &[&str] = &[
    "Core",
    "Clients",
    "Database",
    "Authentication",
    "Authorisation",
    "Consistency",
    "Deletion",
    "Metadata",
    "Monitoring",
    "Traces",
    "Messaging",
    "Policies",
    "Docker",
    "Kubernetes",
    "Documentation",
    "DIRAC",
    "MultiVO",
    "Lifetime",
    "Overview",
    "Dependencies",
    "GitHubActions",
    "Opendata",
    "CI",
];

/// Types accepted by the plain conventional-commits preset.
pub const CONVENTIONAL_TYPES: &[&str] = &[
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test",
];

/// Get a description of a commit type.
pub fn type_description(commit_type: &str) -> Option<&'static str> {
    let description = match commit_type {
        "feat" => "A new feature",
        "fix" => "A bug fix",
        "perf" => "A code change that improves performance",
        "docs" => "Documentation only changes",
        "style" => "Changes that do not affect the meaning of the code",
        "refactor" => "A code change that neither fixes a bug nor adds a feature",
        "test" => "Adding missing tests or correcting existing tests",
        "build" => "Changes that affect the build system or external dependencies",
        "ci" => "Changes to CI configuration files and scripts",
        "chore" => "Other changes that don't modify src or test files",
        "revert" => "Reverts a previous commit",
        "patch" => "Small fixes or improvements",
        _ => return None,
    };
    Some(description)
}
