//! Per-user session store
//!
//! Single source of truth for which board each user is currently playing.
//! Shared across concurrently dispatched webhook handlers via `Arc`.

use super::board::{Board, CELLS};
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;

/// Opaque user identity. Telegram account ids are signed 64-bit integers.
pub type UserId = i64;

/// Outcome of a legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move left the board monochrome. The session has been retired;
    /// there is no board to re-render.
    Won,
    /// The game continues with the updated board.
    Continuing(Board),
}

/// Rejection of an illegal move request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("cell index {0} is out of range (expected 0-8)")]
    InvalidIndex(usize),
}

/// Store mapping each user to their one live board.
///
/// Constructed once at startup and handed to the webhook handlers through
/// [`AppState`](crate::api::AppState); never a process global. A single
/// `RwLock` guards the whole map, which at 9 bytes of state per user is
/// plenty: write-side operations are pure in-memory board arithmetic, so
/// no lock is ever held across I/O.
#[derive(Debug, Default)]
pub struct GameStore {
    games: RwLock<HashMap<UserId, Board>>,
}

impl GameStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh game for `user`, unconditionally replacing any board
    /// they already had, and return the new board for rendering.
    ///
    /// The deal is not checked for solved-ness: a monochrome deal (2 of
    /// the 512) still needs at least one click before a win can register.
    /// Wins are only ever detected in [`apply_move`](Self::apply_move);
    /// see DESIGN.md.
    pub async fn start_session(&self, user: UserId) -> Board {
        let board = Board::random(&mut rand::thread_rng());
        self.games.write().await.insert(user, board);
        tracing::info!(user, "session started");
        board
    }

    /// Apply a click at `index` for `user`.
    ///
    /// If the user has no live session one is started first — a click with
    /// no prior /start still produces a playable game. If the move solves
    /// the board the session is removed and `Won` is returned; the win is
    /// a one-shot event, never a persisted state.
    ///
    /// The whole read-toggle-check-remove sequence runs under one write
    /// guard, so two concurrent moves by the same user cannot both observe
    /// the pre-move board.
    pub async fn apply_move(&self, user: UserId, index: usize) -> Result<MoveOutcome, MoveError> {
        if index >= CELLS {
            return Err(MoveError::InvalidIndex(index));
        }

        let mut games = self.games.write().await;
        let board = games
            .entry(user)
            .or_insert_with(|| Board::random(&mut rand::thread_rng()));

        board.toggle(index);

        if board.is_solved() {
            games.remove(&user);
            tracing::info!(user, index, "board solved, session retired");
            Ok(MoveOutcome::Won)
        } else {
            let board = *board;
            tracing::debug!(user, index, "move applied");
            Ok(MoveOutcome::Continuing(board))
        }
    }

    /// Read-only lookup of the user's live board, if any. Absent is not
    /// an error.
    pub async fn get_session(&self, user: UserId) -> Option<Board> {
        self.games.read().await.get(&user).copied()
    }
}
