//! Lights Out bot
//!
//! A Telegram bot serving a single-player 3×3 Lights Out puzzle over a
//! webhook, one concurrent game per user.

mod api;
mod bot;
mod config;
mod game;
mod telegram;

use api::{create_router, AppState};
use config::Config;
use game::GameStore;
use std::net::SocketAddr;
use std::sync::Arc;
use telegram::BotClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lightsout_bot=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let config = Config::from_env()?;
    tracing::info!(
        webhook_url = %config.webhook_url,
        port = config.port,
        "configuration loaded"
    );

    let telegram = Arc::new(BotClient::new(&config.bot_token));
    let store = Arc::new(GameStore::new());

    // Register the webhook unless running against localhost
    let webhook_endpoint = format!("{}/webhook", config.webhook_url.trim_end_matches('/'));
    if config.webhook_is_public() {
        telegram.set_webhook(&webhook_endpoint).await?;
        tracing::info!(url = %webhook_endpoint, "webhook registered");
    } else {
        tracing::warn!("webhook not registered (local mode)");
    }

    // Create application state and router
    let state = AppState::new(store, telegram.clone());
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Lights Out bot listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Deregister the webhook so Telegram stops delivering to a dead URL
    if config.webhook_is_public() {
        if let Err(error) = telegram.delete_webhook().await {
            tracing::warn!(%error, "failed to delete webhook on shutdown");
        }
    }
    tracing::info!("bot stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
    }
}
