//! Lights Out game core
//!
//! Pure board arithmetic plus the per-user session store. Nothing in here
//! knows about Telegram or HTTP.

pub mod board;
pub mod store;

#[cfg(test)]
mod proptests;

pub use board::Board;
pub use store::{GameStore, MoveError, MoveOutcome, UserId};
