//! Incident report model matching the stored `reportes` entries.

use serde::{Deserialize, Serialize};

use super::new_id;

/// Kind of incident a driver can report during a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    #[serde(rename = "Retraso")]
    Delay,
    #[serde(rename = "Ausencia")]
    Absence,
    #[serde(rename = "Accidente")]
    Accident,
}

/// An incident logged against a trip in progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentReport {
    #[serde(default = "new_id")]
    pub id: String,
    #[serde(rename = "conductor")]
    pub driver_name: String,
    #[serde(rename = "ruta")]
    pub route: String,
    #[serde(rename = "evento")]
    pub event: EventKind,
    #[serde(rename = "detalle")]
    pub detail: String,
    /// Elapsed trip time at the moment of the report, formatted `HH:MM:SS`.
    #[serde(rename = "tiempo")]
    pub elapsed: String,
    #[serde(default, rename = "patente")]
    pub bus_plate: String,
}

/// Request body for filing a new incident report. Driver identity, route and
/// bus plate are derived server-side from the session and the roster.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReportRequest {
    #[serde(rename = "evento")]
    pub event: EventKind,
    #[serde(default, rename = "detalle")]
    pub detail: Option<String>,
}

/// Aggregated report figures for the school-admin dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    #[serde(rename = "totalReportes")]
    pub total: usize,
    #[serde(rename = "retrasos")]
    pub delays: usize,
    #[serde(rename = "ausencias")]
    pub absences: usize,
    #[serde(rename = "accidentes")]
    pub accidents: usize,
    /// The last three reports, newest first.
    #[serde(rename = "ultimos")]
    pub recent: Vec<IncidentReport>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&EventKind::Delay).unwrap(),
            r#""Retraso""#
        );
        assert_eq!(
            serde_json::from_str::<EventKind>(r#""Accidente""#).unwrap(),
            EventKind::Accident
        );
    }

    #[test]
    fn test_legacy_report_without_id_parses() {
        let json = r#"{"conductor":"Bob","ruta":"Ruta Maipú","evento":"Retraso",
                       "detalle":"tráfico","tiempo":"00:05:12","patente":"ABC-123"}"#;
        let report: IncidentReport = serde_json::from_str(json).unwrap();
        assert!(!report.id.is_empty());
        assert_eq!(report.event, EventKind::Delay);
    }
}
