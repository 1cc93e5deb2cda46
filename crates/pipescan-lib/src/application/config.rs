//! Application configuration management
//!
//! Handles config loading, validation, and environment variable processing
//! following the precedence: defaults -> .env -> env vars -> CLI args.

use crate::application::Commands;
use crate::primitives::*;
use crate::server::ServerConfig;
use clap::Parser;
use serde::Deserialize;
use std::io::IsTerminal;
use std::net::{IpAddr, SocketAddr};

/// Default configuration values
pub mod defaults {
    pub const HOST: &str = "127.0.0.1";
    pub const PORT: &str = "8000";
    pub const BODY_LIMIT: &str = "2097152"; // 2 MiB
    pub const LOG_LEVEL: &str = "2"; // Info
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const COLOR: &str = "auto";
}

/// Default value functions for configuration fields
mod default_fns {
    use super::defaults;
    use crate::primitives::{ColorIntent, LogFormat, LogOutput};

    pub fn host() -> String {
        defaults::HOST.to_string()
    }

    pub fn port() -> u16 {
        8000
    }

    pub fn body_limit() -> usize {
        2 * 1024 * 1024
    }

    pub fn log_level() -> u8 {
        2
    }

    pub fn log_format() -> LogFormat {
        LogFormat::Text
    }

    pub fn log_output() -> LogOutput {
        LogOutput::Stderr
    }

    pub fn color() -> ColorIntent {
        ColorIntent::Auto
    }
}

/// Application configuration structure
#[derive(Debug, Clone, Parser, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    #[arg(long, env = "PIPESCAN_HOST", default_value = defaults::HOST)]
    #[serde(default = "default_fns::host")]
    pub host: String,

    /// Port the HTTP server listens on (0 picks a free port)
    #[arg(short, long, env = "PIPESCAN_PORT", default_value = defaults::PORT)]
    #[serde(default = "default_fns::port")]
    pub port: u16,

    /// Maximum accepted request body size in bytes
    #[arg(long, env = "PIPESCAN_BODY_LIMIT", default_value = defaults::BODY_LIMIT)]
    #[serde(default = "default_fns::body_limit")]
    pub body_limit: usize,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, env = "PIPESCAN_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    #[serde(default = "default_fns::log_level")]
    pub log_level: u8,

    /// Log format (text, json, pretty)
    #[arg(long, env = "PIPESCAN_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, env = "PIPESCAN_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(short, long, env = "PIPESCAN_COLOR", default_value = defaults::COLOR)]
    #[serde(default = "default_fns::color")]
    pub color: ColorIntent,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_fns::host(),
            port: default_fns::port(),
            body_limit: default_fns::body_limit(),
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::color(),
        }
    }
}

impl AppConfig {
    /// Create LoggerConfig, resolving colour against the chosen stream
    pub fn to_logger_config(&self) -> LoggerConfig {
        let is_tty = match self.log_output {
            LogOutput::Stderr => std::io::stderr().is_terminal(),
            LogOutput::Stdout => std::io::stdout().is_terminal(),
        };

        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            ansi: self.color.resolve(is_tty),
        }
    }

    /// Adjust settings for the command about to run
    ///
    /// `check` prints its result on stdout, so its logs stay on stderr.
    pub fn for_command(mut self, command: Option<&Commands>) -> Self {
        if matches!(command, Some(Commands::Check { .. })) {
            self.log_output = LogOutput::Stderr;
        }
        self
    }

    /// Socket address built from host and port
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| ConfigError::InvalidBindAddress {
                address: self.host.clone(),
                source: e,
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Create the server configuration for this application config
    pub fn to_server_config(&self) -> Result<ServerConfig, ConfigError> {
        Ok(ServerConfig::new(self.bind_addr()?).with_body_limit(self.body_limit))
    }

    /// Merge this config with another, taking non-default values from other
    pub fn merge_with(mut self, other: Self) -> Self {
        if other.host != default_fns::host() {
            self.host = other.host;
        }
        if other.port != default_fns::port() {
            self.port = other.port;
        }
        if other.body_limit != default_fns::body_limit() {
            self.body_limit = other.body_limit;
        }
        if other.log_level != default_fns::log_level() {
            self.log_level = other.log_level;
        }

        // For enums, detect if it's non-default
        if !matches!(other.log_format, LogFormat::Text) {
            self.log_format = other.log_format;
        }
        if !matches!(other.log_output, LogOutput::Stderr) {
            self.log_output = other.log_output;
        }
        if !matches!(other.color, ColorIntent::Auto) {
            self.color = other.color;
        }

        self
    }

    /// Validate the final configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.body_limit == 0 {
            return Err(ConfigError::ValidationFailed {
                reason: "body limit must be greater than zero".to_string(),
            });
        }

        self.bind_addr()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
