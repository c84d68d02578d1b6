//! Incident report log: a persisted flat array of reports, appended during a
//! running trip and queried per driver.
//!
//! Reads never fail the caller; a missing or malformed stored array degrades
//! to an empty log (logged, not surfaced). Appends are refused while no trip
//! is running.

use std::sync::Arc;

use crate::db::{keys, KvStore};
use crate::errors::AppError;
use crate::models::{EventKind, IncidentReport, ReportSummary};
use crate::trips::TripTimer;

/// Detail recorded when the driver leaves the field blank.
const EMPTY_DETAIL: &str = "Ninguno";

/// A report as composed by the caller, before the log stamps identity and
/// elapsed trip time onto it.
#[derive(Debug, Clone)]
pub struct ReportDraft {
    pub driver_name: String,
    pub route: String,
    pub event: EventKind,
    pub detail: Option<String>,
    pub bus_plate: String,
}

fn normalize_detail(detail: Option<String>) -> String {
    detail
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| EMPTY_DETAIL.to_string())
}

/// The persisted incident report log.
pub struct ReportLog {
    store: KvStore,
    trips: Arc<TripTimer>,
}

impl ReportLog {
    pub fn new(store: KvStore, trips: Arc<TripTimer>) -> Self {
        Self { store, trips }
    }

    /// Every report ever logged, in append order. Falls back to an empty
    /// list when the key is absent, unreadable or holds malformed JSON.
    pub async fn all(&self) -> Vec<IncidentReport> {
        let raw = match self.store.get(keys::REPORTS).await {
            Ok(raw) => raw,
            Err(err) => {
                tracing::error!("Failed to read reports, treating as empty: {}", err);
                return Vec::new();
            }
        };

        match raw {
            Some(json) => serde_json::from_str(&json).unwrap_or_else(|err| {
                tracing::warn!("Malformed report list, treating as empty: {}", err);
                Vec::new()
            }),
            None => Vec::new(),
        }
    }

    /// The reports filed by the given driver, exact name match.
    pub async fn list_for(&self, driver_name: &str) -> Vec<IncidentReport> {
        self.all()
            .await
            .into_iter()
            .filter(|r| r.driver_name == driver_name)
            .collect()
    }

    /// Append a report. Requires a running trip; the report is discarded and
    /// the stored list left unchanged otherwise.
    pub async fn append(&self, draft: ReportDraft) -> Result<IncidentReport, AppError> {
        let trip = self.trips.status().await?;
        if !trip.running {
            return Err(AppError::TripNotStarted(
                "Start the trip before reporting an incident".to_string(),
            ));
        }

        let report = IncidentReport {
            id: crate::models::new_id(),
            driver_name: draft.driver_name,
            route: draft.route,
            event: draft.event,
            detail: normalize_detail(draft.detail),
            elapsed: trip.elapsed.unwrap_or_else(|| "00:00:00".to_string()),
            bus_plate: draft.bus_plate,
        };

        let mut reports = self.all().await;
        reports.push(report.clone());
        self.save(&reports).await?;
        Ok(report)
    }

    /// Delete the report with the given id, wherever it sits in the global
    /// list. Filtered views resolve deletions through the id, never through
    /// a view position.
    pub async fn remove(&self, id: &str) -> Result<(), AppError> {
        let mut reports = self.all().await;
        let before = reports.len();
        reports.retain(|r| r.id != id);
        if reports.len() == before {
            return Err(AppError::NotFound(format!("Report {} not found", id)));
        }
        self.save(&reports).await
    }

    /// Aggregate figures for the school-admin dashboard: totals, per-kind
    /// counts and the last three reports newest-first.
    pub async fn summary(&self) -> ReportSummary {
        let reports = self.all().await;
        let count_of = |kind: EventKind| reports.iter().filter(|r| r.event == kind).count();

        ReportSummary {
            total: reports.len(),
            delays: count_of(EventKind::Delay),
            absences: count_of(EventKind::Absence),
            accidents: count_of(EventKind::Accident),
            recent: reports.iter().rev().take(3).cloned().collect(),
        }
    }

    async fn save(&self, reports: &[IncidentReport]) -> Result<(), AppError> {
        let json = serde_json::to_string(reports)?;
        self.store.set(keys::REPORTS, &json).await
    }
}
