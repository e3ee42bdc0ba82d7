//! HTTP client for the Telegram Bot API

use super::types::InlineKeyboardMarkup;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors from a Bot API call.
#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("Telegram rejected the call: {0}")]
    Api(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Standard Bot API response envelope.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[allow(dead_code)] // The bot never reads result payloads
    result: Option<Value>,
    description: Option<String>,
}

/// Client for the Bot API methods this bot uses.
pub struct BotClient {
    client: Client,
    base_url: String,
}

impl BotClient {
    /// # Panics
    /// Panics if the TLS backend cannot be initialized.
    #[must_use]
    pub fn new(token: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: format!("https://api.telegram.org/bot{token}"),
        }
    }

    /// Send a text message, optionally with an inline keyboard.
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_markup: Option<&InlineKeyboardMarkup>,
    ) -> Result<(), TelegramError> {
        #[derive(Serialize)]
        struct Params<'a> {
            chat_id: i64,
            text: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            reply_markup: Option<&'a InlineKeyboardMarkup>,
        }

        self.call(
            "sendMessage",
            &Params {
                chat_id,
                text,
                reply_markup,
            },
        )
        .await
    }

    /// Replace a message's text, dropping any inline keyboard it carried.
    pub async fn edit_message_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
    ) -> Result<(), TelegramError> {
        #[derive(Serialize)]
        struct Params<'a> {
            chat_id: i64,
            message_id: i64,
            text: &'a str,
        }

        self.call(
            "editMessageText",
            &Params {
                chat_id,
                message_id,
                text,
            },
        )
        .await
    }

    /// Swap a message's inline keyboard in place, leaving its text alone.
    pub async fn edit_message_reply_markup(
        &self,
        chat_id: i64,
        message_id: i64,
        reply_markup: &InlineKeyboardMarkup,
    ) -> Result<(), TelegramError> {
        #[derive(Serialize)]
        struct Params<'a> {
            chat_id: i64,
            message_id: i64,
            reply_markup: &'a InlineKeyboardMarkup,
        }

        self.call(
            "editMessageReplyMarkup",
            &Params {
                chat_id,
                message_id,
                reply_markup,
            },
        )
        .await
    }

    /// Ack a button press so the client stops showing a spinner.
    pub async fn answer_callback_query(&self, callback_query_id: &str) -> Result<(), TelegramError> {
        #[derive(Serialize)]
        struct Params<'a> {
            callback_query_id: &'a str,
        }

        self.call("answerCallbackQuery", &Params { callback_query_id })
            .await
    }

    /// Point Telegram's webhook delivery at `url`.
    pub async fn set_webhook(&self, url: &str) -> Result<(), TelegramError> {
        #[derive(Serialize)]
        struct Params<'a> {
            url: &'a str,
        }

        self.call("setWebhook", &Params { url }).await
    }

    /// Remove the webhook registration.
    pub async fn delete_webhook(&self) -> Result<(), TelegramError> {
        self.call("deleteWebhook", &serde_json::json!({})).await
    }

    async fn call<P: Serialize>(&self, method: &str, params: &P) -> Result<(), TelegramError> {
        let response = self
            .client
            .post(format!("{}/{method}", self.base_url))
            .json(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TelegramError::Network(format!("request timeout: {e}"))
                } else if e.is_connect() {
                    TelegramError::Network(format!("connection failed: {e}"))
                } else {
                    TelegramError::Network(format!("request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TelegramError::Network(format!("failed to read response: {e}")))?;

        let envelope: ApiResponse = serde_json::from_str(&body)
            .map_err(|e| TelegramError::Decode(format!("{e} - body: {body}")))?;

        if envelope.ok {
            Ok(())
        } else {
            let description = envelope
                .description
                .unwrap_or_else(|| format!("HTTP {status}"));
            Err(TelegramError::Api(description))
        }
    }
}
