use anyhow::{Context, Result};
use colored::Colorize;
use std::sync::Arc;

use memchat_chat::{ChatSurface, ConversationChain, SessionStore};
use memchat_llm_api::{ClientFactory, LlmClient};
use memchat_logging::ConversationLogger;

use crate::config::AppConfig;
use crate::web::server::{WebServer, WebServerConfig};

/// Wire the chat surface from its parts
pub fn build_surface(
    config: &AppConfig,
    client: Arc<dyn LlmClient>,
    store: Arc<SessionStore>,
    logger: Option<Arc<ConversationLogger>>,
) -> ChatSurface {
    let chain = ConversationChain::new(client, store).with_system_prompt(config.system_prompt.clone());
    let surface = ChatSurface::new(chain, config.history_mode);

    match logger {
        Some(logger) => surface.with_logger(logger),
        None => surface,
    }
}

/// Run the web server until Ctrl-C
pub async fn run_web_server(config: AppConfig) -> Result<()> {
    let client = ClientFactory::create(&config.client);
    let store = Arc::new(SessionStore::new());

    let logger = match &config.conversation_log_dir {
        Some(dir) => {
            let logger = ConversationLogger::new(dir)
                .await
                .with_context(|| format!("Failed to open conversation log in {}", dir.display()))?;
            println!(
                "{} {}",
                "📝 Logging conversation to:".bright_blue(),
                logger.file_path().display()
            );
            Some(Arc::new(logger))
        }
        None => None,
    };

    let surface = Arc::new(build_surface(&config, client, store, logger.clone()));

    let server = WebServer::new(
        WebServerConfig {
            bind_addr: config.bind_addr,
        },
        surface,
    );
    let result = server.start().await;

    if let Some(logger) = logger {
        logger.shutdown().await;
    }

    result
}
