//! Derived route views. None of these are persisted; they are recomputed on
//! demand from the roster document.

use serde::{Deserialize, Serialize};

use super::{Driver, IncidentReport, SchoolSite, Student};

/// What a map point represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointKind {
    #[serde(rename = "ALUMNO")]
    Student,
    #[serde(rename = "COLEGIO")]
    School,
}

/// A renderable map point with materialized coordinates.
#[derive(Debug, Clone, Serialize)]
pub struct MapPoint {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "direccion")]
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "tipo")]
    pub kind: PointKind,
}

/// One route derived by grouping students on their commune, paired with the
/// destination site and, by list position, a bus and a driver.
#[derive(Debug, Clone, Serialize)]
pub struct DerivedRoute {
    #[serde(rename = "comuna")]
    pub commune: String,
    #[serde(rename = "ruta")]
    pub label: String,
    #[serde(rename = "alumnos")]
    pub students: Vec<Student>,
    #[serde(rename = "destino")]
    pub destination: SchoolSite,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bus: Option<String>,
    #[serde(rename = "conductor", skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
}

/// The logged-in driver's view of their route.
#[derive(Debug, Clone, Serialize)]
pub struct DriverRouteView {
    #[serde(rename = "conductor")]
    pub driver: Driver,
    #[serde(rename = "ruta")]
    pub label: String,
    #[serde(rename = "alumnos")]
    pub students: Vec<Student>,
    #[serde(rename = "puntos")]
    pub points: Vec<MapPoint>,
    #[serde(rename = "destino", skip_serializing_if = "Option::is_none")]
    pub destination: Option<SchoolSite>,
    #[serde(rename = "patente", skip_serializing_if = "Option::is_none")]
    pub bus_plate: Option<String>,
}

/// The logged-in parent's view of their children's route.
#[derive(Debug, Clone, Serialize)]
pub struct ParentView {
    #[serde(rename = "hijos")]
    pub children: Vec<Student>,
    #[serde(rename = "ruta", skip_serializing_if = "Option::is_none")]
    pub route_label: Option<String>,
    #[serde(rename = "puntos")]
    pub points: Vec<MapPoint>,
    #[serde(rename = "ultimoReporte", skip_serializing_if = "Option::is_none")]
    pub latest_report: Option<IncidentReport>,
    /// Number of delay reports pending on the children's route.
    #[serde(rename = "retrasos")]
    pub delay_count: usize,
}
