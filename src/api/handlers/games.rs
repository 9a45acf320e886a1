use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{error_response, store_error, AppState};
use crate::api::models::{AddGameResponse, DeleteGameResponse};
use crate::domain::{GameValidationError, NewGame};

pub async fn list_games(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.reports.games() {
        Ok(games) => Json(games).into_response(),
        Err(e) => store_error(e),
    }
}

pub async fn add_game(
    State(state): State<Arc<AppState>>,
    Json(new_game): Json<NewGame>,
) -> impl IntoResponse {
    match state.reports.add_game(new_game) {
        Ok((game, count)) => (
            StatusCode::CREATED,
            Json(AddGameResponse {
                ok: true,
                count,
                id: game.id,
            }),
        )
            .into_response(),
        Err(e) => match e.downcast_ref::<GameValidationError>() {
            Some(invalid) => error_response(StatusCode::BAD_REQUEST, invalid.to_string()),
            None => store_error(e),
        },
    }
}

pub async fn delete_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.reports.delete_game(&id) {
        Ok(removed) => Json(DeleteGameResponse { ok: true, removed }).into_response(),
        Err(e) => store_error(e),
    }
}
