pub mod health;

use axum::{routing::get, Router};

use crate::state::AppState;
use crate::store::handlers as resume;
use crate::views::handlers as views;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route(
            "/api/v1/resume",
            get(resume::handle_get_resume).patch(resume::handle_set_resume),
        )
        .route(
            "/api/v1/resume/changes",
            get(resume::handle_resume_changes),
        )
        // Route table
        .route("/api/v1/routes", get(views::handle_list_routes))
        // Everything else is a navigation to one of the views
        .fallback(views::handle_navigate)
        .with_state(state)
}
