use super::*;
use clap::ValueEnum;
use std::path::PathBuf;

#[test]
fn test_defaults_match_documented_values() {
    let config = AppConfig::default();

    assert_eq!(config.host, defaults::HOST);
    assert_eq!(config.port.to_string(), defaults::PORT);
    assert_eq!(config.body_limit.to_string(), defaults::BODY_LIMIT);
    assert_eq!(config.log_level.to_string(), defaults::LOG_LEVEL);
    assert_eq!(config.log_format, LogFormat::from_str(defaults::LOG_FORMAT, true).unwrap());
    assert_eq!(config.log_output, LogOutput::from_str(defaults::LOG_OUTPUT, true).unwrap());
    assert_eq!(config.color, ColorIntent::from_str(defaults::COLOR, true).unwrap());
}

#[test]
fn test_clap_defaults_agree_with_default_impl() {
    let parsed = AppConfig::try_parse_from(["pipescan"]).unwrap();
    let expected = AppConfig::default();

    assert_eq!(parsed.host, expected.host);
    assert_eq!(parsed.port, expected.port);
    assert_eq!(parsed.body_limit, expected.body_limit);
    assert_eq!(parsed.log_format, expected.log_format);
}

#[test]
fn test_config_merging() {
    let base = AppConfig::default();
    let override_config = AppConfig {
        port: 9100,
        log_level: 4,
        log_format: LogFormat::Json,
        color: ColorIntent::Never,
        ..AppConfig::default()
    };

    let merged = base.merge_with(override_config);
    assert_eq!(merged.port, 9100);
    assert_eq!(merged.log_level, 4);
    assert_eq!(merged.log_format, LogFormat::Json);
    assert_eq!(merged.color, ColorIntent::Never);

    // Untouched fields keep their defaults
    assert_eq!(merged.host, "127.0.0.1");
    assert_eq!(merged.body_limit, 2 * 1024 * 1024);
}

#[test]
fn test_merge_keeps_base_when_other_is_default() {
    let base = AppConfig {
        host: "0.0.0.0".to_string(),
        color: ColorIntent::Always,
        ..AppConfig::default()
    };

    let merged = base.merge_with(AppConfig::default());
    assert_eq!(merged.host, "0.0.0.0");
    assert_eq!(merged.color, ColorIntent::Always);
}

#[test]
fn test_bind_addr() {
    let config = AppConfig {
        host: "0.0.0.0".to_string(),
        port: 3000,
        ..AppConfig::default()
    };
    assert_eq!(config.bind_addr().unwrap().to_string(), "0.0.0.0:3000");

    let config = AppConfig {
        host: "::1".to_string(),
        ..AppConfig::default()
    };
    assert_eq!(config.bind_addr().unwrap().to_string(), "[::1]:8000");
}

#[test]
fn test_validate_rejects_bad_host() {
    let config = AppConfig {
        host: "not an address".to_string(),
        ..AppConfig::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBindAddress { .. }));
}

#[test]
fn test_validate_rejects_zero_body_limit() {
    let config = AppConfig {
        body_limit: 0,
        ..AppConfig::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn test_logger_config_respects_color_intent() {
    let config = AppConfig {
        log_level: 3,
        color: ColorIntent::Never,
        ..AppConfig::default()
    };

    let logger_config = config.to_logger_config();
    assert_eq!(logger_config.level, LogLevel::Debug);
    assert!(!logger_config.ansi);

    let config = AppConfig {
        color: ColorIntent::Always,
        ..AppConfig::default()
    };
    assert!(config.to_logger_config().ansi);
}

#[test]
fn test_server_config_carries_limits() {
    let config = AppConfig {
        port: 0,
        body_limit: 1024,
        ..AppConfig::default()
    };

    let server_config = config.to_server_config().unwrap();
    assert_eq!(server_config.addr().port(), 0);
    assert_eq!(server_config.body_limit(), 1024);
}

#[test]
fn test_check_logs_stay_off_stdout() {
    let config = AppConfig {
        log_output: LogOutput::Stdout,
        ..AppConfig::default()
    };
    let check = Commands::Check {
        file: PathBuf::from("pipeline.json"),
        pretty: false,
    };

    let adjusted = config.for_command(Some(&check));

    assert_eq!(adjusted.log_output, LogOutput::Stderr);
    assert_eq!(adjusted.to_logger_config().output, LogOutput::Stderr);
}

#[test]
fn test_serve_keeps_chosen_log_output() {
    let config = AppConfig {
        log_output: LogOutput::Stdout,
        ..AppConfig::default()
    };

    assert_eq!(
        config.clone().for_command(Some(&Commands::Serve)).log_output,
        LogOutput::Stdout
    );
    assert_eq!(config.for_command(None).log_output, LogOutput::Stdout);
}
