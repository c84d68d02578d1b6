//! Bus API endpoints.
//!
//! Buses are plain identifying strings with no structured fields, so they
//! keep the positional addressing of the stored format.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::BusRequest;
use crate::AppState;

/// GET /api/buses - List all bus plates.
pub async fn list_buses(State(state): State<AppState>) -> ApiResult<Vec<String>> {
    success(state.roster.load().await.buses)
}

/// POST /api/buses - Append a new bus plate.
pub async fn create_bus(
    State(state): State<AppState>,
    Json(request): Json<BusRequest>,
) -> ApiResult<String> {
    if request.plate.trim().is_empty() {
        return Err(AppError::Validation("Plate is required".to_string()));
    }

    success(state.roster.add_bus(&request.plate).await?)
}

/// PUT /api/buses/:index - Replace the bus plate at a position.
pub async fn update_bus(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(request): Json<BusRequest>,
) -> ApiResult<String> {
    if request.plate.trim().is_empty() {
        return Err(AppError::Validation("Plate is required".to_string()));
    }

    success(state.roster.update_bus(index, &request.plate).await?)
}

/// DELETE /api/buses/:index - Delete the bus plate at a position.
pub async fn delete_bus(State(state): State<AppState>, Path(index): Path<usize>) -> ApiResult<()> {
    state.roster.remove_bus(index).await?;
    success(())
}
