use crate::primitives::ConfigError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::config::AppConfig;

/// pipescan CLI - pipeline graph analysis service
#[derive(Debug, Clone, Parser)]
#[command(name = "pipescan")]
#[command(about = "Counts pipeline nodes and edges and checks the graph is a DAG")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// pipescan commands (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

impl CliConfig {
    /// Load configuration from command line arguments
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::from_cli(Cli::parse()))
    }

    pub fn from_cli(cli: Cli) -> Self {
        Self {
            app_config: cli.config,
            command: cli.command,
        }
    }
}

/// Available pipescan commands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Run the HTTP analysis server
    Serve,

    /// Analyze a pipeline JSON file and print the result
    Check {
        /// Path to a JSON file with `nodes` and `edges`
        #[arg(help = "Pipeline JSON file to analyze")]
        file: PathBuf,

        /// Pretty-print the JSON result
        #[arg(long, help = "Pretty-print the analysis result")]
        pretty: bool,
    },
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
