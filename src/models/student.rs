//! Student model matching the stored `alumnos` entries.

use serde::{Deserialize, Serialize};

use super::new_id;

/// A student on a bus route. The guardian's email doubles as the parent login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    #[serde(default = "new_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "comuna")]
    pub commune: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "correoApoderado")]
    pub guardian_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

/// Request body for creating a new student.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "comuna")]
    pub commune: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "correoApoderado")]
    pub guardian_email: String,
}

/// Request body for updating an existing student.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStudentRequest {
    #[serde(default, rename = "nombre")]
    pub name: Option<String>,
    #[serde(default, rename = "comuna")]
    pub commune: Option<String>,
    #[serde(default, rename = "direccion")]
    pub address: Option<String>,
    #[serde(default, rename = "correoApoderado")]
    pub guardian_email: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}
