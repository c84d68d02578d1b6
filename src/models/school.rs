//! School site model matching the stored `colegios` entries.

use serde::{Deserialize, Serialize};

use super::new_id;

/// A school site. The first site in the list is the default trip destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolSite {
    #[serde(default = "new_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(default, rename = "comuna")]
    pub commune: String,
    #[serde(default, rename = "direccion")]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

/// Request body for creating a new school site.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSiteRequest {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "comuna")]
    pub commune: String,
    #[serde(rename = "direccion")]
    pub address: String,
}

/// Request body for updating an existing school site.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSiteRequest {
    #[serde(default, rename = "nombre")]
    pub name: Option<String>,
    #[serde(default, rename = "comuna")]
    pub commune: Option<String>,
    #[serde(default, rename = "direccion")]
    pub address: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}
