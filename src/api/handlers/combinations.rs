use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{AppState, internal_error};
use crate::api::models::{CombinationDetail, CombinationListItem, CreateCombinationRequest};
use crate::database;
use crate::domain::TeamCombination;

pub async fn list_combinations(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    match database::combinations::list_all(&mut conn) {
        Ok(rows) => {
            let items: Vec<CombinationListItem> = rows
                .into_iter()
                .map(|row| CombinationListItem {
                    id: row.id,
                    name: row.name,
                    created: row.created,
                    format: row.format,
                    player_count: row.player_count,
                })
                .collect();
            Json(items).into_response()
        }
        Err(e) => internal_error("Query Error", e),
    }
}

pub async fn create_combination(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateCombinationRequest>,
) -> impl IntoResponse {
    if request.name.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, "Combination name is required").into_response();
    }
    if request.players.is_empty() {
        return (StatusCode::BAD_REQUEST, "Combination has no players").into_response();
    }

    let mut combination = TeamCombination::new(&request.name, request.players);
    combination.notes = request.notes;
    combination.format = request.format;
    combination.size = request.size;

    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    match database::combinations::save(&mut conn, &combination) {
        Ok(()) => {
            log::info!("Saved combination {} ({})", combination.name, combination.id);
            (StatusCode::CREATED, Json(combination)).into_response()
        }
        Err(e) => internal_error("Save Error", e),
    }
}

pub async fn get_combination(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let combination = match database::combinations::find_by_id(&mut conn, &id) {
        Ok(Some(combination)) => combination,
        Ok(None) => return (StatusCode::NOT_FOUND, "Combination not found").into_response(),
        Err(e) => return internal_error("Query Error", e),
    };

    let checks = match state.selection.validate(&combination, None) {
        Ok(checks) => checks,
        Err(e) => return internal_error("Validation Error", e),
    };
    // Stats are optional for the detail view
    let summary = state
        .selection
        .summarize(std::slice::from_ref(&combination))
        .ok()
        .and_then(|mut s| s.pop());

    Json(CombinationDetail {
        combination,
        checks,
        summary,
    })
    .into_response()
}

pub async fn delete_combination(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    match database::combinations::delete(&mut conn, &id) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => (StatusCode::NOT_FOUND, "Combination not found").into_response(),
        Err(e) => internal_error("Delete Error", e),
    }
}
