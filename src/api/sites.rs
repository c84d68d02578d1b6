//! School site API endpoints.
//!
//! The first site in the list is the default trip destination.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateSiteRequest, SchoolSite, UpdateSiteRequest};
use crate::AppState;

/// GET /api/sites - List all school sites.
pub async fn list_sites(State(state): State<AppState>) -> ApiResult<Vec<SchoolSite>> {
    success(state.roster.load().await.sites)
}

/// POST /api/sites - Create a new school site.
pub async fn create_site(
    State(state): State<AppState>,
    Json(request): Json<CreateSiteRequest>,
) -> ApiResult<SchoolSite> {
    if request.name.trim().is_empty()
        || request.commune.trim().is_empty()
        || request.address.trim().is_empty()
    {
        return Err(AppError::Validation(
            "Name, commune and address are required".to_string(),
        ));
    }

    success(state.roster.add_site(&request).await?)
}

/// PUT /api/sites/:id - Update a school site.
pub async fn update_site(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateSiteRequest>,
) -> ApiResult<SchoolSite> {
    success(state.roster.update_site(&id, &request).await?)
}

/// DELETE /api/sites/:id - Delete a school site.
pub async fn delete_site(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    state.roster.remove_site(&id).await?;
    success(())
}
