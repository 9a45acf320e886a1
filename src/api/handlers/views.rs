use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{error_response, store_error, AppState, HistoryParams};
use crate::api::models::EloView;
use crate::history::ModeFilter;

const PODIUM_SIZE: usize = 3;

pub async fn get_elo(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let elo = match state.reports.elo() {
        Ok(elo) => elo,
        Err(e) => return store_error(e),
    };

    Json(EloView {
        podium: elo.standings.iter().take(PODIUM_SIZE).cloned().collect(),
        table: elo.standings,
        skipped: elo.skipped,
    })
    .into_response()
}

pub async fn get_history(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryParams>,
) -> impl IntoResponse {
    let mode = match ModeFilter::parse(params.mode.as_deref().unwrap_or("all")) {
        Some(mode) => mode,
        None => return error_response(StatusCode::BAD_REQUEST, "mode must be one of all, 1v1, 2v2"),
    };
    let query = params.q.unwrap_or_default();

    match state.reports.history(&query, mode) {
        Ok(view) => Json(view).into_response(),
        Err(e) => store_error(e),
    }
}

pub async fn get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.reports.stats() {
        Ok(view) => Json(view).into_response(),
        Err(e) => store_error(e),
    }
}
