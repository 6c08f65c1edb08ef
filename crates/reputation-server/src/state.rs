use std::sync::Arc;

use reputation_core::Reputation;

#[derive(Clone)]
pub struct AppState {
    pub reputation: Arc<Reputation>,
}
