// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::io::Read;
use std::path::Path;

use crate::config::{catalog, default, LintConfig};
use crate::error::{ConfigError, RcError, Result, ResultExt, ValidationError};
use crate::rules::RuleEngine;

use super::args::{Cli, Commands, ConfigPreset, InitArgs, LintArgs, OutputFormat};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.effective_command() {
        Commands::Lint(args) => run_lint(&cli, &load(&cli)?, args),
        Commands::Rules => run_rules(&cli, &load(&cli)?),
        Commands::Catalog => run_catalog(&cli, &load(&cli)?),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Load configuration from `--config` or the default locations.
fn load(cli: &Cli) -> Result<LintConfig> {
    if let Some(config_path) = &cli.config {
        LintConfig::load_from(config_path)
    } else {
        LintConfig::load()
    }
}

/// Run the lint command.
fn run_lint(cli: &Cli, config: &LintConfig, args: LintArgs) -> Result<()> {
    tracing::debug!("Running lint command with args: {:?}", args);

    let message = match (args.message, args.file) {
        (Some(message), _) => message,
        (None, Some(path)) if path != Path::new("-") => std::fs::read_to_string(&path)?,
        (None, _) => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let engine = RuleEngine::new(config.clone())?;
    let result = engine.validate_string(&message)?;
    result.print(cli.format);

    if result.passes(args.strict) {
        Ok(())
    } else {
        Err(RcError::Validation(ValidationError::LintFailed {
            errors: result.errors.len(),
            warnings: result.warnings.len(),
        }))
    }
}

/// Run the rules command.
fn run_rules(cli: &Cli, config: &LintConfig) -> Result<()> {
    tracing::debug!("Running rules command");

    let engine = RuleEngine::new(config.clone())?;

    if cli.format == Some(OutputFormat::Json) {
        let rules: serde_json::Map<String, serde_json::Value> = engine
            .rule_names()
            .map(|name| {
                let setting = engine
                    .setting(name)
                    .and_then(|s| serde_json::to_value(s).ok())
                    .unwrap_or(serde_json::Value::Null);
                (name.to_string(), setting)
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&rules).unwrap_or_default()
        );
        return Ok(());
    }

    for name in engine.rule_names() {
        match engine.setting(name) {
            Some(setting) => println!("{:<24} {}", name, setting),
            None => println!("{:<24} -", name),
        }
    }

    Ok(())
}

/// Run the catalog command.
fn run_catalog(cli: &Cli, config: &LintConfig) -> Result<()> {
    tracing::debug!("Running catalog command");

    let engine = RuleEngine::new(config.clone())?;
    let list = |rule: &str| -> Vec<String> {
        engine
            .config()
            .rule_value(rule)
            .and_then(|value| value.as_list())
            .map(|items| items.into_iter().map(str::to_string).collect())
            .unwrap_or_default()
    };
    let types = list("type-enum");
    let scopes = list("scope-enum");

    if cli.format == Some(OutputFormat::Json) {
        let json = serde_json::json!({ "types": types, "scopes": scopes });
        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Types:");
    for commit_type in &types {
        match catalog::type_description(commit_type) {
            Some(description) => println!("  {:<10} {}", commit_type, description),
            None => println!("  {}", commit_type),
        }
    }

    println!("Scopes:");
    for scope in &scopes {
        println!("  {}", scope);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    if args.path.exists() && !args.force {
        return Err(RcError::Config(ConfigError::AlreadyExists { path: args.path }));
    }

    let content = match args.preset {
        ConfigPreset::Trailer => default::trailer_example(),
        ConfigPreset::HeaderSuffix => default::header_suffix_example(),
    };

    std::fs::write(&args.path, content).context("Failed to write configuration")?;

    println!("✓ Created {}", args.path.display());

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("rclint {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}
