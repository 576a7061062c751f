use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    combinations::{create_combination, delete_combination, get_combination, list_combinations},
    lineups::{
        generate_lineups, get_analysis, get_formats, get_setup, plan_match, put_setup, suggest_lineup,
        validate_lineup,
    },
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/formats", get(get_formats))
        .route("/api/setup", get(get_setup).put(put_setup))
        .route("/api/lineups/generate", post(generate_lineups))
        .route("/api/lineups/suggest", post(suggest_lineup))
        .route("/api/lineups/validate", post(validate_lineup))
        .route("/api/lineups/plan", post(plan_match))
        .route("/api/analysis", get(get_analysis))
        .route("/api/combinations", get(list_combinations).post(create_combination))
        .route("/api/combinations/:id", get(get_combination).delete(delete_combination))
        .with_state(state)
}
