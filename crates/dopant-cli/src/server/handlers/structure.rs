//! Displayed-structure handler read by the viewer on refresh.

use axum::{extract::State, Json};
use serde::Serialize;

use dopant::Structure;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// The structure currently in the display slot.
#[derive(Serialize)]
pub struct StructureResponse {
    pub revision: u64,
    pub updated_at: String,
    pub formula: String,
    pub num_sites: usize,
    pub structure: Structure,
}

/// GET /api/structure
pub async fn get_structure(
    State(state): State<AppState>,
) -> Result<Json<StructureResponse>, ApiError> {
    let snapshot = state
        .slot
        .snapshot()
        .ok_or_else(|| ApiError::NotFound("No structure selected yet".to_string()))?;

    Ok(Json(StructureResponse {
        revision: snapshot.revision,
        updated_at: snapshot.updated_at.to_rfc3339(),
        formula: snapshot.structure.formula(),
        num_sites: snapshot.structure.num_sites(),
        structure: Structure::clone(&snapshot.structure),
    }))
}
