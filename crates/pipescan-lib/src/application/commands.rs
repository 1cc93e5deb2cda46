//! Command execution handlers

use crate::application::{AppConfig, Commands};
use crate::pipeline::{AnalysisResult, Pipeline};
use crate::server;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// Outcome of analyzing a pipeline file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub result: AnalysisResult,
    /// Node ids of the first cycle found, when the graph is not a DAG
    pub cycle: Option<Vec<String>>,
}

/// Execute a CLI command; no command means `serve`
pub async fn execute_command(config: AppConfig, command: Option<Commands>) -> Result<()> {
    match command.unwrap_or(Commands::Serve) {
        Commands::Serve => handle_serve(&config).await,
        Commands::Check { file, pretty } => {
            let mut stdout = std::io::stdout();
            handle_check(&file, pretty, &mut stdout).await
        }
    }
}

async fn handle_serve(config: &AppConfig) -> Result<()> {
    let server_config = config
        .to_server_config()
        .context("Failed to build server configuration")?;

    server::serve(server_config).await?;
    Ok(())
}

/// Analyze `file` and write the result as JSON to `out`
pub async fn handle_check(file: &Path, pretty: bool, out: &mut (dyn Write + Send)) -> Result<()> {
    let report = check_file(file).await?;

    if let Some(cycle) = &report.cycle {
        let path: Vec<&str> = cycle.iter().chain(cycle.first()).map(String::as_str).collect();
        warn!(
            operation = "check",
            subject = %file.display(),
            "Pipeline contains a cycle: {}",
            path.join(" -> ")
        );
    }

    let rendered = if pretty {
        serde_json::to_string_pretty(&report.result)?
    } else {
        serde_json::to_string(&report.result)?
    };
    writeln!(out, "{}", rendered)?;

    Ok(())
}

/// Read a pipeline JSON file and analyze it
pub async fn check_file(file: &Path) -> Result<CheckReport> {
    let contents = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read pipeline file: {}", file.display()))?;

    let pipeline: Pipeline = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid pipeline JSON in {}", file.display()))?;

    let result = pipeline.analyze();
    let cycle = if result.is_dag {
        None
    } else {
        pipeline.find_cycle()
    };

    Ok(CheckReport { result, cycle })
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
