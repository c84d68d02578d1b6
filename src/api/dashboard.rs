//! Dashboard endpoints: the live school-admin summary and the static
//! platform-admin demo dataset.

use axum::extract::State;
use serde::Serialize;

use super::{success, ApiResult};
use crate::models::ReportSummary;
use crate::AppState;

/// Live figures for the school-admin dashboard.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    #[serde(rename = "reportes")]
    pub reports: ReportSummary,
    #[serde(rename = "totalAlumnos")]
    pub student_count: usize,
}

/// GET /api/dashboard - Live summary from the report log and the roster.
pub async fn get_dashboard(State(state): State<AppState>) -> ApiResult<DashboardResponse> {
    let reports = state.reports.summary().await;
    let doc = state.roster.load().await;
    success(DashboardResponse {
        reports,
        student_count: doc.students.len(),
    })
}

/// One bar of the demo accidents-per-month chart.
#[derive(Debug, Serialize)]
pub struct MonthCount {
    #[serde(rename = "mes")]
    pub month: &'static str,
    #[serde(rename = "cantidad")]
    pub count: u32,
}

/// The platform-admin dashboard dataset. Entirely static demo figures with
/// no data dependency.
#[derive(Debug, Serialize)]
pub struct DemoDashboardResponse {
    #[serde(rename = "totalReportes")]
    pub total_reports: u32,
    #[serde(rename = "retrasos")]
    pub delays: u32,
    #[serde(rename = "accidentesPorMes")]
    pub accidents_per_month: Vec<MonthCount>,
}

/// GET /api/dashboard/demo - Static dataset for the platform-admin charts.
pub async fn get_demo_dashboard() -> ApiResult<DemoDashboardResponse> {
    let months = [
        ("Ene 2025", 2),
        ("Feb 2025", 1),
        ("Mar 2025", 3),
        ("Abr 2025", 2),
        ("May 2025", 4),
        ("Jun 2025", 3),
        ("Jul 2025", 1),
        ("Ago 2025", 2),
        ("Sep 2025", 3),
        ("Oct 2025", 2),
        ("Nov 2025", 1),
    ];

    success(DemoDashboardResponse {
        total_reports: 50,
        delays: 20,
        accidents_per_month: months
            .into_iter()
            .map(|(month, count)| MonthCount { month, count })
            .collect(),
    })
}
