use super::*;
use crate::primitives::{ColorIntent, LogFormat};
use clap::CommandFactory;

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_no_subcommand_parses() {
    let cli = Cli::try_parse_from(["pipescan"]).unwrap();
    assert_eq!(cli.command, None);
}

#[test]
fn test_serve_with_global_flags() {
    let cli = Cli::try_parse_from([
        "pipescan",
        "--port",
        "9000",
        "--host",
        "0.0.0.0",
        "--log-format",
        "json",
        "--color",
        "never",
        "serve",
    ])
    .unwrap();

    assert_eq!(cli.command, Some(Commands::Serve));
    assert_eq!(cli.config.port, 9000);
    assert_eq!(cli.config.host, "0.0.0.0");
    assert_eq!(cli.config.log_format, LogFormat::Json);
    assert_eq!(cli.config.color, ColorIntent::Never);
}

#[test]
fn test_check_subcommand() {
    let cli = Cli::try_parse_from(["pipescan", "check", "pipeline.json", "--pretty"]).unwrap();

    assert_eq!(
        cli.command,
        Some(Commands::Check {
            file: PathBuf::from("pipeline.json"),
            pretty: true,
        })
    );
}

#[test]
fn test_check_requires_file() {
    assert!(Cli::try_parse_from(["pipescan", "check"]).is_err());
}

#[test]
fn test_cli_config_from_cli() {
    let cli = Cli::try_parse_from(["pipescan", "-p", "8123"]).unwrap();
    let config = CliConfig::from_cli(cli);

    assert_eq!(config.app_config.port, 8123);
    assert!(config.command.is_none());
}
