use axum::{Router, routing::post};

use super::handlers::{calculate_score, submit_score, verify_score};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_score))
        .route("/calculate", post(calculate_score))
        .route("/verify", post(verify_score))
}
