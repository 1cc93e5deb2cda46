use super::*;

#[test]
fn test_filter_directives_follow_level() {
    let directives = Logger::filter_directives(LogLevel::Debug);
    assert!(directives.starts_with("pipescan=debug,pipescan_lib=debug,tower_http=debug"));
    assert!(directives.contains("hyper=warn"));
    assert!(directives.ends_with(",debug"));
}

#[test]
fn test_filter_directives_parse() {
    for level in [LogLevel::Error, LogLevel::Info, LogLevel::Trace] {
        let directives = Logger::filter_directives(level);
        assert!(
            EnvFilter::try_new(&directives).is_ok(),
            "Directives should parse: {}",
            directives
        );
    }
}

#[test]
fn test_second_init_is_rejected() {
    let config = LoggerConfig {
        level: LogLevel::Error,
        format: LogFormat::Text,
        output: LogOutput::Stderr,
        ansi: false,
    };

    // The first call may lose to another test that set a subscriber already
    let _ = Logger::init(config.clone());
    assert!(Logger::init(config).is_err());
}
