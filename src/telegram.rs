//! Telegram Bot API integration
//!
//! A minimal typed client covering the handful of methods this bot calls,
//! plus serde models for the inbound webhook payload.

mod client;
pub mod types;

pub use client::{BotClient, TelegramError};
pub use types::{
    CallbackQuery, Chat, InlineKeyboardButton, InlineKeyboardMarkup, Message, Update, User,
};
