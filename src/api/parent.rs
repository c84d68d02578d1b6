//! Parent view endpoint.

use axum::extract::State;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{EventKind, ParentView};
use crate::routes::{materialize_map_points, route_label, students_for_guardian};
use crate::AppState;

/// GET /api/parent/children - The logged-in guardian's children, their route
/// label, the latest report on that route and the pending delay count.
pub async fn get_parent_children(State(state): State<AppState>) -> ApiResult<ParentView> {
    let session = state
        .sessions
        .current()
        .await?
        .ok_or_else(|| AppError::InvalidCredential("No active session".to_string()))?;

    let doc = state.roster.load().await;
    let children = students_for_guardian(&doc, &session.email);

    if children.is_empty() {
        return success(ParentView {
            children,
            route_label: None,
            points: Vec::new(),
            latest_report: None,
            delay_count: 0,
        });
    }

    // All children of one guardian ride the same route in this demo: the
    // first child's commune decides the label reports are correlated on.
    let label = route_label(Some(&children[0].commune));
    let points = materialize_map_points(&children, None, state.geocoder.as_ref());

    let reports = state.reports.all().await;
    let on_route: Vec<_> = reports.into_iter().filter(|r| r.route == label).collect();
    let delay_count = on_route
        .iter()
        .filter(|r| r.event == EventKind::Delay)
        .count();

    success(ParentView {
        children,
        route_label: Some(label),
        points,
        latest_report: on_route.last().cloned(),
        delay_count,
    })
}
