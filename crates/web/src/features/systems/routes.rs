use axum::{Router, routing::get};

use super::handlers::{get_system, list_systems};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_systems))
        .route("/:id", get(get_system))
}
