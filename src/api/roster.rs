//! Roster document endpoint.

use axum::extract::State;

use super::{success, ApiResult};
use crate::models::RosterDocument;
use crate::AppState;

/// GET /api/roster - The full roster document.
pub async fn get_roster(State(state): State<AppState>) -> ApiResult<RosterDocument> {
    success(state.roster.load().await)
}
