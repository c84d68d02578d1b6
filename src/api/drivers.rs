//! Driver API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateDriverRequest, Driver, UpdateDriverRequest};
use crate::AppState;

/// GET /api/drivers - List all drivers.
pub async fn list_drivers(State(state): State<AppState>) -> ApiResult<Vec<Driver>> {
    success(state.roster.load().await.drivers)
}

/// POST /api/drivers - Create a new driver.
pub async fn create_driver(
    State(state): State<AppState>,
    Json(request): Json<CreateDriverRequest>,
) -> ApiResult<Driver> {
    if request.name.trim().is_empty() || request.login_email.trim().is_empty() {
        return Err(AppError::Validation(
            "Name and login email are required".to_string(),
        ));
    }

    success(state.roster.add_driver(&request).await?)
}

/// PUT /api/drivers/:id - Update a driver.
pub async fn update_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateDriverRequest>,
) -> ApiResult<Driver> {
    success(state.roster.update_driver(&id, &request).await?)
}

/// DELETE /api/drivers/:id - Delete a driver.
pub async fn delete_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state.roster.remove_driver(&id).await?;
    success(())
}
