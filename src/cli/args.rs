// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rclint - Commit message linter
///
/// Checks commit messages against the project's types, scopes,
/// formatting policy and issue-reference rule.
#[derive(Parser, Debug)]
#[command(name = "rclint")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Commit message linter with an issue-reference policy", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to lint if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "RCLINT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Lint a commit message (default command)
    Lint(LintArgs),

    /// List registered rules and their configuration
    Rules,

    /// Print the allowed commit types and scopes
    Catalog,

    /// Initialize rclint configuration
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the lint command.
#[derive(Parser, Debug, Default, Clone)]
pub struct LintArgs {
    /// File holding the message, e.g. .git/COMMIT_EDITMSG ("-" for stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Lint this message instead of reading a file
    #[arg(short, long, conflicts_with = "file")]
    pub message: Option<String>,

    /// Strict mode: treat warnings as errors
    #[arg(long, env = "RCLINT_STRICT")]
    pub strict: bool,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Issue-reference policy to configure
    #[arg(long, value_enum, default_value = "trailer")]
    pub preset: ConfigPreset,

    /// Where to write the configuration
    #[arg(long, default_value = "rclint.toml")]
    pub path: PathBuf,
}

/// Configuration presets for init.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigPreset {
    /// Issue trailer required in the body or footer
    Trailer,
    /// Issue number required at the end of the header
    HeaderSuffix,
}

impl Cli {
    /// Get the effective command, defaulting to Lint if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Lint(LintArgs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_lint_file() {
        let args = Cli::parse_from(["rclint", "lint", ".git/COMMIT_EDITMSG", "--strict"]);
        if let Some(Commands::Lint(lint_args)) = args.command {
            assert_eq!(lint_args.file, Some(PathBuf::from(".git/COMMIT_EDITMSG")));
            assert!(lint_args.strict);
        } else {
            panic!("Expected Lint command");
        }
    }

    #[test]
    fn test_parse_lint_message() {
        let args = Cli::parse_from(["rclint", "lint", "-m", "fix(Core): x #1"]);
        if let Some(Commands::Lint(lint_args)) = args.command {
            assert_eq!(lint_args.message.as_deref(), Some("fix(Core): x #1"));
            assert!(lint_args.file.is_none());
        } else {
            panic!("Expected Lint command");
        }
    }

    #[test]
    fn test_message_conflicts_with_file() {
        let result = Cli::try_parse_from(["rclint", "lint", "msg.txt", "-m", "fix: x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_init() {
        let args = Cli::parse_from(["rclint", "init", "--preset", "header-suffix", "--force"]);
        if let Some(Commands::Init(init_args)) = args.command {
            assert_eq!(init_args.preset, ConfigPreset::HeaderSuffix);
            assert!(init_args.force);
            assert_eq!(init_args.path, PathBuf::from("rclint.toml"));
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn test_global_flags() {
        let args = Cli::parse_from(["rclint", "--format", "json", "rules", "--debug"]);
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert!(args.debug);
        assert!(matches!(args.command, Some(Commands::Rules)));
    }

    #[test]
    fn test_default_command() {
        let args = Cli::parse_from(["rclint"]);
        assert!(args.command.is_none());
        assert!(matches!(args.effective_command(), Commands::Lint(_)));
    }
}
