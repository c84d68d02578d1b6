//! Login and session management.
//!
//! A login email resolves to a role against the roster: guardian emails win
//! over driver emails, which win over the two fixed demo literals. The first
//! match decides; duplicate emails across entities are not rejected. There is
//! no password verification anywhere in this flow.
//!
//! The session is a single persisted email owned by [`SessionManager`];
//! nothing else reads or writes the session key.

use serde::{Deserialize, Serialize};

use crate::db::{keys, KvStore};
use crate::errors::AppError;
use crate::models::{Driver, RosterDocument};

/// Fixed login for the school-admin panel.
pub const SCHOOL_ADMIN_EMAIL: &str = "colegio@demo.com";
/// Fixed login for the platform-admin dashboard.
pub const PLATFORM_ADMIN_EMAIL: &str = "admin@demo.com";

/// The role a login email resolves to. Serialized values match the view
/// router's screen names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "apoderado")]
    Parent,
    #[serde(rename = "conductor")]
    Driver,
    #[serde(rename = "colegio")]
    SchoolAdmin,
    #[serde(rename = "admin")]
    PlatformAdmin,
}

/// The current session: the authenticated principal's normalized email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "correo")]
    pub email: String,
}

/// Resolve a login email to a role, in priority order. Returns `None` when
/// the email matches no principal and neither fixed literal.
pub fn resolve_role(doc: &RosterDocument, email: &str) -> Option<Role> {
    let normalized = email.to_lowercase();

    if doc
        .students
        .iter()
        .any(|s| s.guardian_email.to_lowercase() == normalized)
    {
        return Some(Role::Parent);
    }
    if doc
        .drivers
        .iter()
        .any(|d| d.login_email.to_lowercase() == normalized)
    {
        return Some(Role::Driver);
    }
    if normalized == SCHOOL_ADMIN_EMAIL {
        return Some(Role::SchoolAdmin);
    }
    if normalized == PLATFORM_ADMIN_EMAIL {
        return Some(Role::PlatformAdmin);
    }
    None
}

/// Find the driver whose login email matches, comparing trimmed and
/// lowercased. First match wins when emails are duplicated.
pub fn find_driver<'a>(doc: &'a RosterDocument, email: &str) -> Option<&'a Driver> {
    let wanted = email.trim().to_lowercase();
    doc.drivers
        .iter()
        .find(|d| d.login_email.trim().to_lowercase() == wanted)
}

/// Owns the persisted session value.
#[derive(Clone)]
pub struct SessionManager {
    store: KvStore,
}

impl SessionManager {
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// Persist the given email as the current session, replacing any prior
    /// one. Stored as a plain string, not JSON.
    pub async fn establish(&self, email: &str) -> Result<Session, AppError> {
        let normalized = email.to_lowercase();
        self.store.set(keys::SESSION, &normalized).await?;
        Ok(Session { email: normalized })
    }

    /// The current session, if one was ever established.
    pub async fn current(&self) -> Result<Option<Session>, AppError> {
        Ok(self
            .store
            .get(keys::SESSION)
            .await?
            .map(|email| Session { email }))
    }

    /// Drop the current session.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.store.remove(keys::SESSION).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{new_id, Student};

    fn doc_with(guardian: &str, driver_email: &str) -> RosterDocument {
        RosterDocument {
            buses: vec![],
            drivers: vec![Driver {
                id: new_id(),
                name: "Bob".into(),
                login_email: driver_email.into(),
                assigned_commune: Some("Maipú".into()),
            }],
            students: vec![Student {
                id: new_id(),
                name: "Ana".into(),
                commune: "Maipú".into(),
                address: "Calle 1".into(),
                guardian_email: guardian.into(),
                lat: None,
                lng: None,
            }],
            sites: vec![],
        }
    }

    #[test]
    fn test_guardian_match_is_case_insensitive() {
        let doc = doc_with("a@x.com", "b@x.com");
        assert_eq!(resolve_role(&doc, "A@X.COM"), Some(Role::Parent));
    }

    #[test]
    fn test_driver_match_is_case_insensitive() {
        let doc = doc_with("a@x.com", "b@x.com");
        assert_eq!(resolve_role(&doc, "B@X.com"), Some(Role::Driver));
    }

    #[test]
    fn test_guardian_wins_over_fixed_literal() {
        // A guardian email equal to a fixed literal still resolves to Parent.
        let doc = doc_with(SCHOOL_ADMIN_EMAIL, "b@x.com");
        assert_eq!(resolve_role(&doc, SCHOOL_ADMIN_EMAIL), Some(Role::Parent));
    }

    #[test]
    fn test_fixed_literals_are_case_insensitive() {
        let doc = RosterDocument::default();
        assert_eq!(resolve_role(&doc, "COLEGIO@demo.com"), Some(Role::SchoolAdmin));
        assert_eq!(resolve_role(&doc, "ADMIN@DEMO.COM"), Some(Role::PlatformAdmin));
    }

    #[test]
    fn test_unknown_email_resolves_to_none() {
        let doc = doc_with("a@x.com", "b@x.com");
        assert_eq!(resolve_role(&doc, "nobody@x.com"), None);
    }

    #[test]
    fn test_find_driver_trims_and_lowercases() {
        let doc = doc_with("a@x.com", " B@x.COM ");
        assert!(find_driver(&doc, "b@x.com ").is_some());
        assert!(find_driver(&doc, "other@x.com").is_none());
    }
}
