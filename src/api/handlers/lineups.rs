use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{AppState, internal_error};
use crate::api::models::{GenerateRequest, PlanRequest, ValidateRequest, ValidationResponse};
use crate::domain::{MatchSetup, TeamCombination};
use crate::format::named_formats;
use crate::selection::Variant;

pub async fn get_formats() -> impl IntoResponse {
    Json(named_formats())
}

pub async fn generate_lineups(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRequest>,
) -> impl IntoResponse {
    let variants = if request.variants.is_empty() {
        Variant::ALL.to_vec()
    } else {
        request.variants
    };

    match state.selection.generate(request.setup, &variants) {
        Ok(lineups) => Json(lineups).into_response(),
        Err(e) => internal_error("Generation Error", e),
    }
}

pub async fn suggest_lineup(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.selection.suggest() {
        Ok(suggestion) => Json(suggestion).into_response(),
        Err(e) => internal_error("Suggestion Error", e),
    }
}

pub async fn validate_lineup(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ValidateRequest>,
) -> impl IntoResponse {
    if request.players.is_empty() {
        return (StatusCode::BAD_REQUEST, "Lineup has no players").into_response();
    }

    let mut combination = TeamCombination::new("unsaved", request.players);
    combination.size = request.size;

    match state.selection.validate(&combination, request.setup) {
        Ok(checks) => {
            let valid = checks.iter().all(|c| c.satisfied);
            Json(ValidationResponse { checks, valid }).into_response()
        }
        Err(e) => internal_error("Validation Error", e),
    }
}

pub async fn plan_match(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlanRequest>,
) -> impl IntoResponse {
    match state.selection.plan(request.setup) {
        Ok(plan) => Json(plan).into_response(),
        Err(e) => internal_error("Planning Error", e),
    }
}

pub async fn get_analysis(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.selection.analyze(None) {
        Ok(report) => Json(report).into_response(),
        Err(e) => internal_error("Analysis Error", e),
    }
}

pub async fn get_setup(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.selection.resolve_setup(None) {
        Ok(setup) => Json(setup).into_response(),
        Err(e) => internal_error("Setup Error", e),
    }
}

/// Stores the setup after clamping it into legal ranges
pub async fn put_setup(
    State(state): State<Arc<AppState>>,
    Json(setup): Json<MatchSetup>,
) -> impl IntoResponse {
    let normalised = setup.normalized();

    match state.selection.save_setup(&normalised) {
        Ok(()) => Json(normalised).into_response(),
        Err(e) => internal_error("Setup Error", e),
    }
}
