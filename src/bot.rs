//! Update dispatcher
//!
//! Routes decoded Telegram updates to the game store and renders boards
//! as inline keyboards.

use crate::game::{Board, GameStore, MoveOutcome};
use crate::telegram::{
    BotClient, CallbackQuery, InlineKeyboardButton, InlineKeyboardMarkup, Message, TelegramError,
    Update,
};

const BLUE: &str = "\u{1f535}";
const RED: &str = "\u{1f534}";

const START_TEXT: &str = "\u{1f9e0} Lights Out 3\u{d7}3\n\n\
    Tap the cells.\n\
    Make the whole board one color!";

const WIN_TEXT: &str = "\u{1f389} You won!\nThe board is one color!";

const HELP_TEXT: &str = "Use /start to begin a new game.\n\
    Goal: make all cells the same color.";

/// Handle one decoded update end to end.
pub async fn handle_update(
    store: &GameStore,
    telegram: &BotClient,
    update: Update,
) -> Result<(), TelegramError> {
    if let Some(message) = update.message {
        return handle_message(store, telegram, message).await;
    }
    if let Some(query) = update.callback_query {
        return handle_callback(store, telegram, query).await;
    }

    tracing::debug!(update_id = update.update_id, "ignoring update without message or callback");
    Ok(())
}

async fn handle_message(
    store: &GameStore,
    telegram: &BotClient,
    message: Message,
) -> Result<(), TelegramError> {
    let Some(text) = message.text.as_deref() else {
        return Ok(());
    };

    match text.split_whitespace().next() {
        Some("/start") => {
            // Commands arrive from the user's own account; fall back to the
            // chat id for the session key only if `from` is missing.
            let user = message.from.map_or(message.chat.id, |u| u.id);
            let board = store.start_session(user).await;
            telegram
                .send_message(message.chat.id, START_TEXT, Some(&keyboard(&board)))
                .await
        }
        Some("/help") => telegram.send_message(message.chat.id, HELP_TEXT, None).await,
        _ => {
            tracing::debug!(chat = message.chat.id, "ignoring non-command message");
            Ok(())
        }
    }
}

async fn handle_callback(
    store: &GameStore,
    telegram: &BotClient,
    query: CallbackQuery,
) -> Result<(), TelegramError> {
    // Ack first so the client drops its spinner even if the move fails.
    telegram.answer_callback_query(&query.id).await?;

    let Some(message) = query.message else {
        tracing::warn!(user = query.from.id, "callback without editable message");
        return Ok(());
    };

    // The only callback payloads in circulation are cell indices from
    // keyboards this bot produced; anything else is dropped with a log.
    let index = match query.data.as_deref().map(str::parse::<usize>) {
        Some(Ok(index)) => index,
        other => {
            tracing::warn!(user = query.from.id, data = ?other, "unparseable callback data");
            return Ok(());
        }
    };

    match store.apply_move(query.from.id, index).await {
        Ok(MoveOutcome::Won) => {
            telegram
                .edit_message_text(message.chat.id, message.message_id, WIN_TEXT)
                .await
        }
        Ok(MoveOutcome::Continuing(board)) => {
            telegram
                .edit_message_reply_markup(message.chat.id, message.message_id, &keyboard(&board))
                .await
        }
        Err(error) => {
            tracing::warn!(user = query.from.id, index, %error, "move rejected");
            Ok(())
        }
    }
}

/// Render a board as a 3×3 inline keyboard: one glyph per cell, each
/// button carrying its cell index as callback data.
fn keyboard(board: &Board) -> InlineKeyboardMarkup {
    let rows = board
        .cells()
        .chunks(3)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, &cell)| InlineKeyboardButton {
                    text: if cell == 1 { RED } else { BLUE }.to_string(),
                    callback_data: (row * 3 + col).to_string(),
                })
                .collect()
        })
        .collect();

    InlineKeyboardMarkup {
        inline_keyboard: rows,
    }
}
