//! Incident report endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::auth::find_driver;
use crate::errors::AppError;
use crate::models::{CreateReportRequest, IncidentReport};
use crate::reports::ReportDraft;
use crate::routes::route_label;
use crate::AppState;

/// Query parameters for listing reports.
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    /// Exact driver name to filter on.
    #[serde(default, rename = "conductor")]
    pub driver: Option<String>,
}

/// GET /api/reports - All reports, or one driver's with `?conductor=`.
pub async fn list_reports(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> ApiResult<Vec<IncidentReport>> {
    let reports = match query.driver {
        Some(driver) => state.reports.list_for(&driver).await,
        None => state.reports.all().await,
    };
    success(reports)
}

/// POST /api/reports - File an incident report for the logged-in driver.
/// Refused with `TRIP_NOT_STARTED` while no trip is running.
pub async fn create_report(
    State(state): State<AppState>,
    Json(request): Json<CreateReportRequest>,
) -> ApiResult<IncidentReport> {
    let session = state
        .sessions
        .current()
        .await?
        .ok_or_else(|| AppError::InvalidCredential("No active session".to_string()))?;

    let doc = state.roster.load().await;
    let driver = find_driver(&doc, &session.email);

    let draft = ReportDraft {
        driver_name: driver
            .map(|d| d.name.clone())
            .unwrap_or_else(|| "Desconocido".to_string()),
        route: route_label(driver.and_then(|d| d.commune())),
        event: request.event,
        detail: request.detail,
        bus_plate: doc.buses.first().cloned().unwrap_or_default(),
    };

    success(state.reports.append(draft).await?)
}

/// DELETE /api/reports/:id - Delete a report by id. Used by drivers to undo
/// an entry and by parents to mark a notification as read.
pub async fn delete_report(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    state.reports.remove(&id).await?;
    success(())
}
