//! Configuration loading
//!
//! Coordinates loading configuration from dotenv files, the environment
//! and the command line.

use crate::primitives::ConfigError;
use tracing::debug;

use super::{config::AppConfig, env::EnvironmentConfig};

/// Dotenv files consulted at startup, highest precedence first
pub const ENV_FILES: [&str; 2] = [".env.local", ".env"];

impl AppConfig {
    /// Load `.env.local` and `.env` into the process environment
    ///
    /// Must run before the CLI is parsed so `PIPESCAN_*` values from the
    /// files reach clap's `env` fallbacks. Missing files are skipped;
    /// variables already set are never overwritten.
    pub fn load_env_files() -> Result<(), ConfigError> {
        for env_file in ENV_FILES {
            match dotenvy::from_filename(env_file) {
                Ok(path) => debug!(path = %path.display(), "Loaded environment file"),
                Err(e) if e.not_found() => {}
                Err(e) => {
                    return Err(ConfigError::EnvFileError {
                        file: env_file.to_string(),
                        source: e,
                    });
                }
            }
        }

        Ok(())
    }

    /// Load config: defaults -> .env -> env vars -> CLI
    pub fn load(cli_config: AppConfig) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Standard colour variables adjust the default intent
        let env_config = EnvironmentConfig::load()?;
        config.color = env_config.apply_color_config(config.color);

        // CLI arguments (and their PIPESCAN_* env fallbacks) win
        config = config.merge_with(cli_config);

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
