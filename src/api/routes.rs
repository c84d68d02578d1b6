//! Derived route endpoints: the admin grouping view, per-route map points
//! and the logged-in driver's route view.

use axum::extract::{Path, State};

use super::{success, ApiResult};
use crate::auth::find_driver;
use crate::errors::AppError;
use crate::models::{DerivedRoute, DriverRouteView, MapPoint};
use crate::routes::{
    attach_destination, derive_routes, driver_route, group_by_commune, materialize_map_points,
    route_label,
};
use crate::AppState;

/// GET /api/routes - One derived route per distinct commune. Blocked with
/// `NO_DESTINATION` until at least one school site exists.
pub async fn list_routes(State(state): State<AppState>) -> ApiResult<Vec<DerivedRoute>> {
    let doc = state.roster.load().await;
    success(derive_routes(&doc)?)
}

/// GET /api/routes/:comuna/map - Map points for one commune's route, with
/// coordinates materialized for entities that have none. The commune is
/// matched exactly, like the grouping itself.
pub async fn route_map(
    State(state): State<AppState>,
    Path(commune): Path<String>,
) -> ApiResult<Vec<MapPoint>> {
    let doc = state.roster.load().await;
    let destination = attach_destination(&doc)?.clone();

    let groups = group_by_commune(&doc.students);
    let (_, students) = groups
        .into_iter()
        .find(|(c, _)| *c == commune)
        .ok_or_else(|| AppError::NotFound(format!("No route for commune {}", commune)))?;

    success(materialize_map_points(
        &students,
        Some(&destination),
        state.geocoder.as_ref(),
    ))
}

/// GET /api/driver/route - The logged-in driver's route: their students, map
/// points, destination and assigned plate. Unlike the admin grouping, a
/// missing destination is tolerated here; the map simply ends at the last
/// pickup.
pub async fn get_driver_route(State(state): State<AppState>) -> ApiResult<DriverRouteView> {
    let session = state
        .sessions
        .current()
        .await?
        .ok_or_else(|| AppError::InvalidCredential("No active session".to_string()))?;

    let doc = state.roster.load().await;
    let driver = find_driver(&doc, &session.email)
        .ok_or_else(|| AppError::NotFound("Driver not found for current session".to_string()))?
        .clone();

    let students = driver_route(&doc, &driver);
    let destination = doc.sites.first().cloned();
    let points = materialize_map_points(&students, destination.as_ref(), state.geocoder.as_ref());

    success(DriverRouteView {
        label: route_label(driver.commune()),
        driver,
        students,
        points,
        destination,
        bus_plate: doc.buses.first().cloned(),
    })
}
