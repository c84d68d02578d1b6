//! Roster document model matching the stored `colegioData` value.

use serde::{Deserialize, Serialize};

use super::{Driver, SchoolSite, Student};

/// The root roster document: the single source of truth for all bus, driver,
/// student and school-site data. Every mutation rewrites the whole document.
///
/// Buses stay plain identifying strings (plate or name) with no structured
/// fields, exactly as stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterDocument {
    #[serde(default)]
    pub buses: Vec<String>,
    #[serde(default, rename = "conductores")]
    pub drivers: Vec<Driver>,
    #[serde(default, rename = "alumnos")]
    pub students: Vec<Student>,
    #[serde(default, rename = "colegios")]
    pub sites: Vec<SchoolSite>,
}

/// Request body for creating or replacing a bus entry.
#[derive(Debug, Clone, Deserialize)]
pub struct BusRequest {
    #[serde(rename = "patente")]
    pub plate: String,
}
