//! HTTP API: the webhook endpoint and liveness probes

mod handlers;

pub use handlers::create_router;

use crate::game::GameStore;
use crate::telegram::BotClient;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<GameStore>,
    pub telegram: Arc<BotClient>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<GameStore>, telegram: Arc<BotClient>) -> Self {
        Self { store, telegram }
    }
}
