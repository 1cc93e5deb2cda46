use super::*;
use crate::testing::{clean_test_env, env_lock};
use std::env;

fn env_with(
    no_color: Option<&str>,
    force_color: Option<&str>,
    clicolor: Option<&str>,
    ci: Option<&str>,
) -> EnvironmentConfig {
    EnvironmentConfig {
        no_color: no_color.map(str::to_string),
        force_color: force_color.map(str::to_string),
        clicolor: clicolor.map(str::to_string),
        ci: ci.map(str::to_string),
    }
}

#[test]
fn test_empty_environment_keeps_intent() {
    let env_config = EnvironmentConfig::default();
    assert_eq!(
        env_config.apply_color_config(ColorIntent::Auto),
        ColorIntent::Auto
    );
    assert_eq!(
        env_config.apply_color_config(ColorIntent::Always),
        ColorIntent::Always
    );
}

#[test]
fn test_no_color_disables() {
    let env_config = env_with(Some("1"), None, None, None);
    assert_eq!(
        env_config.apply_color_config(ColorIntent::Auto),
        ColorIntent::Never
    );
}

#[test]
fn test_empty_no_color_is_ignored() {
    let env_config = env_with(Some(""), None, None, None);
    assert_eq!(
        env_config.apply_color_config(ColorIntent::Auto),
        ColorIntent::Auto
    );
}

#[test]
fn test_clicolor_zero_disables() {
    let env_config = env_with(None, None, Some("0"), None);
    assert_eq!(
        env_config.apply_color_config(ColorIntent::Auto),
        ColorIntent::Never
    );
}

#[test]
fn test_force_color_wins_over_no_color() {
    let env_config = env_with(Some("1"), Some("1"), Some("0"), None);
    assert_eq!(
        env_config.apply_color_config(ColorIntent::Auto),
        ColorIntent::Always
    );

    let env_config = env_with(None, Some("false"), None, None);
    assert_eq!(
        env_config.apply_color_config(ColorIntent::Always),
        ColorIntent::Never
    );
}

#[test]
fn test_ci_disables_everything() {
    let env_config = env_with(None, Some("1"), None, Some("true"));
    assert_eq!(
        env_config.apply_color_config(ColorIntent::Always),
        ColorIntent::Never
    );
}

#[test]
fn test_invalid_force_color_ignored() {
    let env_config = env_with(None, Some("sometimes"), None, None);
    assert_eq!(
        env_config.apply_color_config(ColorIntent::Auto),
        ColorIntent::Auto
    );
}

#[test]
fn test_load_reads_process_environment() {
    let _guard = env_lock();
    clean_test_env();
    unsafe {
        env::set_var("NO_COLOR", "1");
    }

    let env_config = EnvironmentConfig::load().unwrap();
    assert_eq!(env_config.no_color.as_deref(), Some("1"));
    assert_eq!(
        env_config.apply_color_config(ColorIntent::Auto),
        ColorIntent::Never
    );

    clean_test_env();
}
