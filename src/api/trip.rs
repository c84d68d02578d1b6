//! Trip timer endpoints.

use axum::{extract::State, Json};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::trips::TripStatus;
use crate::AppState;

/// Request body for finishing a trip. Finishing is two-phase: the state only
/// clears when the caller confirms.
#[derive(Debug, Default, Deserialize)]
pub struct FinishTripRequest {
    #[serde(default, rename = "confirmado")]
    pub confirmed: bool,
}

/// GET /api/trip - Current trip state, elapsed time recomputed.
pub async fn get_trip(State(state): State<AppState>) -> ApiResult<TripStatus> {
    success(state.trips.status().await?)
}

/// POST /api/trip/start - Start a trip. A no-op while one is running.
pub async fn start_trip(State(state): State<AppState>) -> ApiResult<TripStatus> {
    success(state.trips.start().await?)
}

/// POST /api/trip/finish - Finish the running trip, if confirmed.
pub async fn finish_trip(
    State(state): State<AppState>,
    Json(request): Json<FinishTripRequest>,
) -> ApiResult<TripStatus> {
    success(state.trips.finish(request.confirmed).await?)
}
