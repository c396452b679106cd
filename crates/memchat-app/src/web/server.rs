use anyhow::{Context, Result};
use colored::Colorize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use memchat_chat::ChatSurface;

use crate::web::routes::{self, AppState};

/// Web server configuration
pub struct WebServerConfig {
    pub bind_addr: SocketAddr,
}

/// Web server instance
pub struct WebServer {
    config: WebServerConfig,
    surface: Arc<ChatSurface>,
}

impl WebServer {
    pub fn new(config: WebServerConfig, surface: Arc<ChatSurface>) -> Self {
        Self { config, surface }
    }

    /// Router with middleware applied
    pub fn router(&self) -> axum::Router {
        let app_state = AppState {
            surface: Arc::clone(&self.surface),
        };

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        routes::create_router(app_state)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Serve until Ctrl-C
    pub async fn start(self) -> Result<()> {
        let app = self.router();

        println!("🌐 Web server starting on http://{}", self.config.bind_addr);
        println!("   Chat page: http://{}/", self.config.bind_addr);
        println!("   API endpoints: http://{}/api/chat", self.config.bind_addr);

        let listener = tokio::net::TcpListener::bind(&self.config.bind_addr)
            .await
            .with_context(|| format!("Failed to bind {}", self.config.bind_addr))?;

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        println!("{}", "👋 Web server stopped".bright_black());
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        eprintln!("[Signal error] {}", e);
    }
}
