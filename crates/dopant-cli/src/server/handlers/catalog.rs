//! Listing and lookup handlers for precomputed dopant data.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use dopant::{
    BandGapPrediction, DopantKey, DopantRecord, PredictedFormationEnergy, StoreStatus,
};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Query string for the formation-energy lookup.
#[derive(Deserialize)]
pub struct FormationEnergyQuery {
    pub dopant: Option<String>,
    pub charge_state: Option<i64>,
}

/// GET /api/get-dopant
pub async fn get_dopants(
    State(state): State<AppState>,
) -> Result<Json<Vec<DopantRecord>>, ApiError> {
    Ok(Json(state.catalog.dopants().await?))
}

/// GET /api/get-ML
pub async fn get_predicted_formation_energies(
    State(state): State<AppState>,
) -> Result<Json<Vec<PredictedFormationEnergy>>, ApiError> {
    Ok(Json(state.catalog.predicted_formation_energies().await?))
}

/// GET /api/get-bandgap
pub async fn get_band_gaps(
    State(state): State<AppState>,
) -> Result<Json<Vec<BandGapPrediction>>, ApiError> {
    Ok(Json(state.catalog.band_gaps().await?))
}

/// GET /api/check-db
pub async fn check_db(State(state): State<AppState>) -> Result<Json<StoreStatus>, ApiError> {
    Ok(Json(state.catalog.check().await?))
}

/// GET /api/formation-energy?dopant=BaSn&charge_state=1
///
/// Returns the stored document directly; the displayed structure is not changed.
pub async fn get_formation_energy(
    State(state): State<AppState>,
    query: Result<Query<FormationEnergyQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(query) = query?;

    let dopant = query
        .dopant
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Dopant not provided".to_string()))?;
    let charge_state = query
        .charge_state
        .ok_or_else(|| ApiError::BadRequest("Charge state not provided".to_string()))?;

    let doc = state
        .catalog
        .formation_energy(&DopantKey::new(dopant, charge_state))
        .await?;

    Ok(Json(doc.into()))
}
