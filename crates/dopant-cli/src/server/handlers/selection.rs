//! Dopant selection handler: resolve, fetch, and update the displayed structure.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use dopant::{DopantKey, ResolvedQuery};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Request body for selecting a dopant.
#[derive(Deserialize)]
pub struct SelectRequest {
    pub element: Option<String>,
    /// Defaults to the neutral state.
    pub charge_state: Option<i64>,
}

/// Response after the displayed structure has been replaced.
#[derive(Serialize)]
pub struct SelectResponse {
    pub message: String,
    pub element: String,
    pub charge_state: i64,
    pub query: ResolvedQuery,
    pub formula: String,
}

/// POST /api/select-dopant
pub async fn select_dopant(
    State(state): State<AppState>,
    body: Result<Json<SelectRequest>, JsonRejection>,
) -> Result<Json<SelectResponse>, ApiError> {
    let Json(req) = body?;

    let element = req
        .element
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Element not provided".to_string()))?;
    let key = DopantKey::new(element, req.charge_state.unwrap_or(0));

    let query = key.resolve()?;
    let structure = state.fetcher.fetch_and_display(&query).await?;
    info!("Selected {} ({})", query.field_value, structure.formula());

    Ok(Json(SelectResponse {
        message: "Data updated successfully".to_string(),
        element: key.species,
        charge_state: key.charge_state,
        query,
        formula: structure.formula(),
    }))
}
