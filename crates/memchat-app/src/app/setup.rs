use anyhow::{Context, Result};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::AppConfig;

/// Install the tracing subscriber used for HTTP access logs.
/// RUST_LOG wins over the default filter.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "memchat=debug,tower_http=debug"
    } else {
        "memchat=info,tower_http=info"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Ignore the error if a subscriber is already installed (tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Set up application configuration from CLI arguments
pub fn setup_from_cli(cli: &Cli) -> Result<AppConfig> {
    init_tracing(cli.verbose);

    let config = AppConfig::from_cli(cli).context("Invalid configuration")?;

    println!("{} {}", "🤖 Model:".bright_cyan(), config.client.model);
    println!("{} {}", "   Backend:".bright_cyan(), config.client.backend.as_str());
    println!("{} {}", "   History:".bright_cyan(), config.history_mode);
    if let Some(dir) = &config.conversation_log_dir {
        println!("{} {}", "   Conversation log dir:".bright_cyan(), dir.display());
    }
    if let Some(dir) = &config.client.options.request_log_dir {
        println!("{} {}", "   Request log dir:".bright_cyan(), dir.display());
    }

    Ok(config)
}
