pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::survey::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::home_handler))
        .route("/health", get(health::health_handler))
        .route("/process-survey", post(handlers::handle_process_survey))
        .route("/test", get(handlers::handle_fixture_dry_run))
        .with_state(state)
}
