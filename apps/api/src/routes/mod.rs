pub mod form;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::career::handlers as career;
use crate::state::AppState;
use crate::study::handlers as study;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Career tools
        .route("/api/analyze-cv", post(career::handle_analyze_cv))
        .route("/api/generate-jd", post(career::handle_generate_jd))
        .route(
            "/api/generate-cover-letter",
            post(career::handle_generate_cover_letter),
        )
        // Study and wellbeing tools
        .route("/api/generate-quiz", post(study::handle_generate_quiz))
        .route("/api/analyze-mood", post(study::handle_analyze_mood))
        .route("/api/generate-break", post(study::handle_generate_break))
        .route(
            "/api/generate-motivation",
            post(study::handle_generate_motivation),
        )
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
