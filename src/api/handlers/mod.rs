use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;

use crate::api::models::ErrorResponse;
use crate::services::report::ReportService;

pub mod games;
pub mod views;

pub struct AppState {
    pub reports: ReportService,
}

#[derive(Deserialize)]
pub struct HistoryParams {
    pub q: Option<String>,
    pub mode: Option<String>,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse { error: message.into() })).into_response()
}

fn store_error(e: anyhow::Error) -> Response {
    log::error!("Game store failure: {:?}", e);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("Store Error: {}", e))
}
