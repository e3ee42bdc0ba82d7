//! Environment-driven configuration

use thiserror::Error;

const DEFAULT_WEBHOOK_URL: &str = "http://localhost:8000";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TELEGRAM_BOT_TOKEN is not set")]
    MissingToken,
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bot API token. Required.
    pub bot_token: String,
    /// Public base URL Telegram should deliver updates to. A localhost
    /// value means local-dev mode: the webhook is not registered.
    pub webhook_url: String,
    /// Listen port.
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let webhook_url =
            std::env::var("WEBHOOK_URL").unwrap_or_else(|_| DEFAULT_WEBHOOK_URL.to_string());

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            bot_token,
            webhook_url,
            port,
        })
    }

    /// Whether the configured webhook URL is publicly reachable. Telegram
    /// cannot deliver to localhost, so registration is skipped for it.
    #[must_use]
    pub fn webhook_is_public(&self) -> bool {
        !self.webhook_url.contains("localhost")
    }
}
