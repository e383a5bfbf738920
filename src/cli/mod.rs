//! Command-line interface for depres.
//!
//! # Available Commands
//!
//! - `resolve` - Print the transitive closure of every declared entity
//! - `validate` - Report malformed lines and summarize the declarations
//! - `tree` - Draw the dependency hierarchy of one or all entities
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug output
//! - `--quiet` - Only report errors
//! - `--config` - Path to a configuration file
//!
//! # Example
//!
//! ```bash
//! depres resolve deps.txt
//! depres --verbose validate deps.txt
//! depres tree deps.txt --package A
//! ```

pub mod common;
mod resolve;
mod tree;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::ResolverConfig;
use crate::constants::CONFIG_ENV_VAR;

/// Log filter used when nothing else is configured.
///
/// Skipped-line diagnostics are logged at `warn`, so they stay visible.
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Runtime configuration derived from the global flags.
///
/// Kept separate from [`Cli`] so tests and programmatic callers can inject
/// settings without touching the process environment.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter forced by `--verbose`/`--quiet`.
    ///
    /// When `None`, the configuration file's `log_level`, then `RUST_LOG`,
    /// then [`DEFAULT_LOG_LEVEL`] apply.
    pub log_level: Option<String>,

    /// Configuration file requested with `--config`.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    /// Create a new CLI configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the log filter: flags, then config file, then `RUST_LOG`, then the default.
    #[must_use]
    pub fn env_filter(&self, config: &ResolverConfig) -> EnvFilter {
        if let Some(level) = self.log_level.as_deref().or(config.log_level.as_deref()) {
            return EnvFilter::new(level);
        }
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    }

    /// Install the global `tracing` subscriber, writing to stderr.
    ///
    /// Does nothing if a subscriber is already installed.
    pub fn init_logging(&self, config: &ResolverConfig) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter(config))
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Resolve transitive dependencies from `<entity> depends on <deps>` declarations.
#[derive(Parser)]
#[command(name = "depres", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to a configuration file (default: ~/.depres/config.toml)
    #[arg(short, long, global = true, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Print the transitive closure of every declared entity.
    ///
    /// See [`resolve::ResolveCommand`] for options.
    Resolve(resolve::ResolveCommand),

    /// Report malformed lines and summarize the declarations.
    ///
    /// See [`validate::ValidateCommand`] for options.
    Validate(validate::ValidateCommand),

    /// Draw the dependency hierarchy of one or all entities.
    ///
    /// See [`tree::TreeCommand`] for options.
    Tree(tree::TreeCommand),
}

impl Cli {
    /// Execute the CLI with configuration built from the parsed flags.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Translate global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
        }
    }

    /// Execute the CLI with an injected [`CliConfig`].
    ///
    /// Loads the configuration file, installs logging, then dispatches.
    pub async fn execute_with_config(self, cli_config: CliConfig) -> Result<()> {
        let config = ResolverConfig::load_with_optional(cli_config.config_path.clone()).await?;
        cli_config.init_logging(&config);

        match self.command {
            Commands::Resolve(cmd) => cmd.execute(&config).await,
            Commands::Validate(cmd) => cmd.execute().await,
            Commands::Tree(cmd) => cmd.execute().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_build_config_verbose() {
        let cli = Cli::parse_from(["depres", "--verbose", "resolve", "deps.txt"]);
        assert_eq!(cli.build_config().log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_build_config_quiet() {
        let cli = Cli::parse_from(["depres", "resolve", "deps.txt", "-q"]);
        assert_eq!(cli.build_config().log_level.as_deref(), Some("error"));
    }

    #[test]
    fn test_build_config_default() {
        let cli = Cli::parse_from(["depres", "--config", "custom.toml", "tree", "deps.txt"]);
        let config = cli.build_config();
        assert!(config.log_level.is_none());
        assert_eq!(config.config_path, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["depres", "-v", "-q", "resolve", "deps.txt"]).is_err());
    }

    #[test]
    fn test_resolve_requires_input() {
        assert!(Cli::try_parse_from(["depres", "resolve"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_format() {
        let parse =
            |format: &str| Cli::try_parse_from(["depres", "resolve", "deps.txt", "-f", format]);
        assert!(parse("yaml").is_err());
        assert!(parse("json").is_ok());
    }

    #[test]
    fn test_config_flag_reads_env_var() {
        let command = Cli::command();
        let config = command.get_arguments().find(|arg| arg.get_id() == "config").unwrap();
        assert_eq!(config.get_env(), Some(std::ffi::OsStr::new(CONFIG_ENV_VAR)));
    }
}
