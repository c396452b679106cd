use clap::Parser;
use serial_test::serial;
use std::env;

use memchat::llm_api::BackendType;
use memchat::{AppConfig, Cli, ConfigError};

const VARS: [&str; 6] = [
    "GOOGLE_MODEL",
    "GOOGLE_API_KEY",
    "MEMCHAT_BACKEND",
    "MEMCHAT_API_URL",
    "MEMCHAT_HISTORY_MODE",
    "MEMCHAT_LOG_DIR",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_model_and_key_come_from_environment() {
    clear_env();
    env::set_var("GOOGLE_MODEL", "gemini-1.5-flash");
    env::set_var("GOOGLE_API_KEY", "env-key");

    let cli = Cli::try_parse_from(["memchat"]).unwrap();
    let config = AppConfig::from_cli(&cli).unwrap();

    assert_eq!(config.client.model, "gemini-1.5-flash");
    assert_eq!(config.client.api_key, "env-key");
    clear_env();
}

#[test]
#[serial]
fn test_flags_override_environment() {
    clear_env();
    env::set_var("GOOGLE_MODEL", "gemini-1.5-flash");
    env::set_var("GOOGLE_API_KEY", "env-key");
    env::set_var("MEMCHAT_HISTORY_MODE", "display-only");

    let cli = Cli::try_parse_from(["memchat", "--model", "gemini-1.5-pro", "--history-mode", "threaded"]).unwrap();
    let config = AppConfig::from_cli(&cli).unwrap();

    assert_eq!(config.client.model, "gemini-1.5-pro");
    assert_eq!(config.history_mode, memchat::HistoryMode::Threaded);
    clear_env();
}

#[test]
#[serial]
fn test_missing_credentials_fail_startup() {
    clear_env();

    let cli = Cli::try_parse_from(["memchat"]).unwrap();
    assert_eq!(AppConfig::from_cli(&cli).unwrap_err(), ConfigError::MissingModel);

    env::set_var("GOOGLE_MODEL", "gemini-1.5-flash");
    let cli = Cli::try_parse_from(["memchat"]).unwrap();
    assert_eq!(AppConfig::from_cli(&cli).unwrap_err(), ConfigError::MissingApiKey);
    clear_env();
}

#[test]
#[serial]
fn test_openai_with_url_needs_no_key() {
    clear_env();

    let cli = Cli::try_parse_from([
        "memchat",
        "--model",
        "local",
        "--backend",
        "openai",
        "--api-url",
        "http://localhost:8080",
    ])
    .unwrap();
    let config = AppConfig::from_cli(&cli).unwrap();

    assert_eq!(config.client.backend, BackendType::OpenAI);
    assert_eq!(config.client.api_key, "");
}

#[test]
#[serial]
fn test_openai_without_url_still_needs_key() {
    clear_env();

    let cli = Cli::try_parse_from(["memchat", "--model", "gpt-4o-mini", "--backend", "openai"]).unwrap();
    assert_eq!(AppConfig::from_cli(&cli).unwrap_err(), ConfigError::MissingApiKey);
}

#[test]
#[serial]
fn test_log_requests_without_home_is_an_error() {
    clear_env();
    let home = env::var_os("HOME");
    let profile = env::var_os("USERPROFILE");
    env::remove_var("HOME");
    env::remove_var("USERPROFILE");

    let cli = Cli::try_parse_from(["memchat", "--model", "m", "--api-key", "k", "--log-requests"]).unwrap();
    let result = AppConfig::from_cli(&cli);

    if let Some(home) = home {
        env::set_var("HOME", home);
    }
    if let Some(profile) = profile {
        env::set_var("USERPROFILE", profile);
    }

    assert!(matches!(result, Err(ConfigError::LogsDirUnavailable(_))));
}
