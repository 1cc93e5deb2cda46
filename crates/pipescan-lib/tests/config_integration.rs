use pipescan_lib::application::config::AppConfig;
use pipescan_lib::primitives::{ColorIntent, ConfigError, LogFormat};

#[test]
fn test_config_default_creation() {
    let config = AppConfig::default();

    assert!(config.log_level <= 4);
    assert!(config.body_limit > 0);
    assert_eq!(config.color, ColorIntent::Auto);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_merging_integration() {
    let base_config = AppConfig::default();
    let override_config = AppConfig {
        port: 9000,
        log_format: LogFormat::Json,
        color: ColorIntent::Never,
        ..AppConfig::default()
    };

    let merged = base_config.merge_with(override_config);

    assert_eq!(merged.port, 9000);
    assert_eq!(merged.log_format, LogFormat::Json);
    assert_eq!(merged.color, ColorIntent::Never);

    // Untouched fields keep their defaults
    assert_eq!(merged.host, "127.0.0.1");
}

#[test]
fn test_config_feeds_server() {
    let config = AppConfig {
        host: "0.0.0.0".to_string(),
        port: 8123,
        body_limit: 4096,
        ..AppConfig::default()
    };

    let server = config.to_server_config().unwrap();

    assert_eq!(server.addr().to_string(), "0.0.0.0:8123");
    assert_eq!(server.body_limit(), 4096);
}

#[test]
fn test_config_rejects_bad_host() {
    let config = AppConfig {
        host: "not-an-address".to_string(),
        ..AppConfig::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidBindAddress { .. })
    ));
}
