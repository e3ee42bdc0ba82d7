//! Wire types for the Telegram Bot API
//!
//! Only the fields this bot reads are modeled; serde ignores the rest of
//! the payload.

use serde::{Deserialize, Serialize};

/// One inbound webhook event.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    /// Present for command messages (/start, /help).
    pub message: Option<Message>,
    /// Present when the user pressed an inline keyboard button.
    pub callback_query: Option<CallbackQuery>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub from: Option<User>,
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    /// The message whose keyboard was pressed. Telegram omits it for
    /// messages too old to edit.
    pub message: Option<Message>,
    /// The `callback_data` of the pressed button.
    pub data: Option<String>,
}

/// Inline keyboard attached to an outbound message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    pub callback_data: String,
}
