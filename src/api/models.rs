use serde::Serialize;

use crate::rating::Standing;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EloView {
    pub podium: Vec<Standing>,
    pub table: Vec<Standing>,
    pub skipped: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddGameResponse {
    pub ok: bool,
    pub count: usize,
    pub id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteGameResponse {
    pub ok: bool,
    pub removed: usize,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
