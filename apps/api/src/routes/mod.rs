pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::enrichment::handlers::handle_enrich;
use crate::profiles::handlers::handle_list_profiles;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/job-descriptions/enrich", post(handle_enrich))
        .route("/api/v1/profiles", get(handle_list_profiles))
        .with_state(state)
}
