use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::config::settings::AppConfig;
use crate::database::DbPool;
use crate::services::selection::SelectionService;

pub mod combinations;
pub mod lineups;

pub struct AppState {
    pub pool: DbPool,
    pub selection: SelectionService,
    pub config: AppConfig,
}

/// Failure of a snapshot or store operation, reported as a 500 with the
/// full context chain
pub(crate) fn internal_error(context: &str, err: anyhow::Error) -> Response {
    log::error!("{}: {:#}", context, err);
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{}: {:#}", context, err)).into_response()
}
