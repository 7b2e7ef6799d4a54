use std::sync::Arc;

use scoring::ScoreEngine;

use crate::catalog::EventCatalog;
use crate::store::ScoreStore;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ScoreEngine>,
    pub catalog: Arc<EventCatalog>,
    pub scores: ScoreStore,
}
