use super::*;
use crate::primitives::ColorIntent;
use crate::testing::{clean_test_env, env_lock};
use std::env;

#[test]
fn test_load_with_default_cli() {
    let _guard = env_lock();
    clean_test_env();

    let config = AppConfig::load(AppConfig::default()).unwrap();
    assert_eq!(config.port, 8000);
    assert_eq!(config.color, ColorIntent::Auto);
}

#[test]
fn test_no_color_applies_when_cli_is_default() {
    let _guard = env_lock();
    clean_test_env();
    unsafe {
        env::set_var("NO_COLOR", "1");
    }

    let config = AppConfig::load(AppConfig::default()).unwrap();
    assert_eq!(config.color, ColorIntent::Never);

    clean_test_env();
}

#[test]
fn test_cli_color_beats_environment() {
    let _guard = env_lock();
    clean_test_env();
    unsafe {
        env::set_var("NO_COLOR", "1");
    }

    let cli = AppConfig {
        color: ColorIntent::Always,
        ..AppConfig::default()
    };
    let config = AppConfig::load(cli).unwrap();
    assert_eq!(config.color, ColorIntent::Always);

    clean_test_env();
}

#[test]
fn test_load_rejects_invalid_cli_values() {
    let _guard = env_lock();
    clean_test_env();

    let cli = AppConfig {
        host: "localhost:80".to_string(),
        ..AppConfig::default()
    };
    assert!(matches!(
        AppConfig::load(cli),
        Err(ConfigError::InvalidBindAddress { .. })
    ));
}

#[test]
fn test_missing_env_files_are_skipped() {
    // The crate directory carries no .env files
    assert!(AppConfig::load_env_files().is_ok());
}
