//! Driver model matching the stored `conductores` entries.

use serde::{Deserialize, Serialize};

use super::new_id;

/// A bus driver. `login_email` is the driver's credential; `assigned_commune`
/// scopes the visible route, with blank/absent meaning "serves all communes".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    #[serde(default = "new_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "correo")]
    pub login_email: String,
    #[serde(
        default,
        rename = "comunaAsignada",
        skip_serializing_if = "Option::is_none"
    )]
    pub assigned_commune: Option<String>,
}

impl Driver {
    /// The assigned commune, treating an empty or whitespace-only value the
    /// same as an absent one (legacy documents store `""`).
    pub fn commune(&self) -> Option<&str> {
        self.assigned_commune
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

/// Request body for creating a new driver.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDriverRequest {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "correo")]
    pub login_email: String,
    #[serde(default, rename = "comunaAsignada")]
    pub assigned_commune: Option<String>,
}

/// Request body for updating an existing driver.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDriverRequest {
    #[serde(default, rename = "nombre")]
    pub name: Option<String>,
    #[serde(default, rename = "correo")]
    pub login_email: Option<String>,
    /// `Some("")` clears the assignment back to the general route.
    #[serde(default, rename = "comunaAsignada")]
    pub assigned_commune: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_commune_means_unassigned() {
        let mut driver = Driver {
            id: new_id(),
            name: "Bob".into(),
            login_email: "b@x.com".into(),
            assigned_commune: None,
        };
        assert_eq!(driver.commune(), None);

        driver.assigned_commune = Some("".into());
        assert_eq!(driver.commune(), None);

        driver.assigned_commune = Some("  ".into());
        assert_eq!(driver.commune(), None);

        driver.assigned_commune = Some(" Maipú ".into());
        assert_eq!(driver.commune(), Some("Maipú"));
    }
}
