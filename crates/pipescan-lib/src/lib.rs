//! # pipescan Library
//!
//! Structural analysis of pipeline graphs behind a small HTTP API.
//!
//! ## Core Modules
//!
//! - [`pipeline`] - Pipeline data model and DAG analysis
//! - [`server`] - axum router, CORS policy and server lifecycle
//! - [`primitives`] - Foundation types and errors
//! - [`logger`] - Structured logging setup
//! - [`application`] - CLI interface, configuration, command dispatch
//!
//! ## Quick Start
//!
//! ```
//! use pipescan_lib::pipeline::{Edge, Node, analyze};
//!
//! let nodes = vec![Node::new("a", "customInput"), Node::new("b", "llm")];
//! let edges = vec![Edge::new("a", "b")];
//!
//! let result = analyze(&nodes, &edges);
//! assert_eq!(result.num_nodes, 2);
//! assert!(result.is_dag);
//! ```

pub mod application;
pub mod logger;
pub mod pipeline;
pub mod primitives;
pub mod server;

#[cfg(test)]
mod testing;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Cli, Commands, execute_command};
pub use logger::Logger;
pub use pipeline::{AnalysisResult, Edge, Node, Pipeline, analyze, find_cycle};
pub use primitives::{ColorIntent, ConfigError, LogFormat, LogLevel, LogOutput, LoggerError};
pub use server::{ServerConfig, ServerError};

// Private imports for the main function
use anyhow::Result;
use application::CliConfig;

/// Binary entry point: load config, start logging, run the command
pub async fn main() -> Result<()> {
    // .env files first so clap sees their PIPESCAN_* values
    AppConfig::load_env_files()?;

    let cli = CliConfig::load()?;
    let config = AppConfig::load(cli.app_config)?.for_command(cli.command.as_ref());

    Logger::init(config.to_logger_config())?;

    execute_command(config, cli.command).await
}
