//! CLI for fluenttc
//!
//! - `locator`: Render a build locator without contacting the server
//! - `builds`: List builds matching filters
//! - `configs`: List build configurations
//! - `completions`: Generate shell completions

pub mod builds;
pub mod completions;
pub mod configs;
pub mod filters;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use fluenttc::client::TeamCityClient;
use fluenttc::infrastructure::{Config, init_logging};
use fluenttc::locators::{BuildHavingBuilder, Locator};
use std::path::{Path, PathBuf};

/// CLI arguments for fluenttc
#[derive(Parser, Debug)]
#[command(name = "fluenttc")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Server URL, overrides the configuration
    #[arg(short, long, global = true, value_name = "URL")]
    server: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the build locator for the given filters
    Locator {
        #[command(flatten)]
        filters: filters::BuildFilters,
    },

    /// List builds matching the given filters
    Builds {
        #[command(flatten)]
        filters: filters::BuildFilters,
        /// Print JSON instead of one line per build
        #[arg(long)]
        json: bool,
    },

    /// List build configurations
    Configs {
        /// Restrict to a project id
        #[arg(short, long, value_name = "ID")]
        project: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: ShellArg,
        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ShellArg {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Build the CLI command for completion generation
pub fn build_cli() -> clap::Command {
    Args::command()
}

/// Configuration file, then environment, then command-line flags
fn load_config(path: Option<&Path>, server: Option<String>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load configuration: {}", path.display()))?,
        None => Config::default(),
    };
    let mut config = config.with_env_overrides();
    if let Some(server) = server {
        config.server_url = server;
    }
    Ok(config)
}

/// Parse and execute CLI arguments
pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref(), args.server)?;
    init_logging(if args.verbose { "debug" } else { config.log_level.as_str() });

    match args.command {
        Command::Locator { filters } => {
            println!("{}", filters.apply(BuildHavingBuilder::new()).locator());
        }
        Command::Builds { filters, json } => {
            let client = TeamCityClient::connect(&config)?;
            let format = if json {
                builds::OutputFormat::Json
            } else {
                builds::OutputFormat::Text
            };
            let runtime = tokio::runtime::Runtime::new().context("Failed to start runtime")?;
            let output = runtime.block_on(builds::list_builds(&client, &filters, format))?;
            println!("{}", output);
        }
        Command::Configs { project } => {
            let client = TeamCityClient::connect(&config)?;
            let runtime = tokio::runtime::Runtime::new().context("Failed to start runtime")?;
            let output = runtime.block_on(configs::list_configs(&client, project.as_deref()))?;
            println!("{}", output);
        }
        Command::Completions { shell, output } => {
            use clap_complete::Shell;

            let shell_enum = match shell {
                ShellArg::Bash => Shell::Bash,
                ShellArg::Zsh => Shell::Zsh,
                ShellArg::Fish => Shell::Fish,
                ShellArg::PowerShell => Shell::PowerShell,
            };

            let completions = completions::generate_completions(shell_enum)?;

            if let Some(output_path) = output {
                completions::save_completions(&completions, &output_path)?;
            } else {
                println!("{}", completions);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_parse_locator_command() {
        let args = Args::try_parse_from([
            "fluenttc",
            "locator",
            "--branch",
            "main",
            "--status",
            "success",
            "--tag",
            "a",
            "--tag",
            "b",
        ])
        .unwrap();
        let Command::Locator { filters } = args.command else {
            panic!("expected locator command");
        };
        assert_eq!(
            filters.apply(BuildHavingBuilder::new()).locator(),
            "branch:name:main,status:SUCCESS,tags:a,b"
        );
    }

    #[test]
    fn test_parse_rejects_bad_status() {
        assert!(Args::try_parse_from(["fluenttc", "locator", "--status", "green"]).is_err());
    }

    #[test]
    fn test_global_server_flag() {
        let args = Args::try_parse_from(["fluenttc", "configs", "--server", "http://tc"]).unwrap();
        assert_eq!(args.server.as_deref(), Some("http://tc"));
    }

    #[test]
    fn test_load_config_from_file_with_server_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fluenttc.yaml");
        std::fs::write(&path, "server_url: http://from-file\ntimeout_secs: 3\n").unwrap();
        let config = load_config(Some(&path), Some("http://from-flag".to_string())).unwrap();
        assert_eq!(config.server_url, "http://from-flag");
        assert_eq!(config.timeout_secs, 3);
    }
}
