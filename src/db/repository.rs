//! Roster repository: whole-document CRUD over the persisted roster.
//!
//! The roster document is the single source of truth. Every mutation loads
//! the full document, applies one change, and writes the full document back;
//! there are no partial-field updates. Reads never fail the caller: an
//! absent key, a storage error or malformed JSON all degrade to the empty
//! document (logged, not surfaced).
//!
//! Concurrent writers are not coordinated; the last write wins. That is a
//! known limitation of the design, kept on purpose.

use crate::db::{keys, KvStore};
use crate::errors::AppError;
use crate::models::{
    CreateDriverRequest, CreateSiteRequest, CreateStudentRequest, Driver, RosterDocument,
    SchoolSite, Student, UpdateDriverRequest, UpdateSiteRequest, UpdateStudentRequest,
};

/// Repository for all roster data operations.
#[derive(Clone)]
pub struct RosterRepository {
    store: KvStore,
}

impl RosterRepository {
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// Load the roster document, falling back to the empty document when the
    /// key is absent, unreadable or holds malformed JSON.
    pub async fn load(&self) -> RosterDocument {
        let raw = match self.store.get(keys::ROSTER).await {
            Ok(raw) => raw,
            Err(err) => {
                tracing::error!("Failed to read roster, treating as empty: {}", err);
                return RosterDocument::default();
            }
        };

        match raw {
            Some(json) => serde_json::from_str(&json).unwrap_or_else(|err| {
                tracing::warn!("Malformed roster document, treating as empty: {}", err);
                RosterDocument::default()
            }),
            None => RosterDocument::default(),
        }
    }

    /// Serialize and write the full document, replacing any prior value.
    pub async fn save(&self, doc: &RosterDocument) -> Result<(), AppError> {
        let json = serde_json::to_string(doc)?;
        self.store.set(keys::ROSTER, &json).await
    }

    // ==================== STUDENT OPERATIONS ====================

    /// Append a new student and persist the document.
    pub async fn add_student(&self, request: &CreateStudentRequest) -> Result<Student, AppError> {
        let mut doc = self.load().await;
        let student = Student {
            id: crate::models::new_id(),
            name: request.name.clone(),
            commune: request.commune.clone(),
            address: request.address.clone(),
            guardian_email: request.guardian_email.clone(),
            lat: None,
            lng: None,
        };
        doc.students.push(student.clone());
        self.save(&doc).await?;
        Ok(student)
    }

    /// Replace fields of the student with the given id.
    pub async fn update_student(
        &self,
        id: &str,
        request: &UpdateStudentRequest,
    ) -> Result<Student, AppError> {
        let mut doc = self.load().await;
        let student = doc
            .students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Student {} not found", id)))?;

        if let Some(name) = &request.name {
            student.name = name.clone();
        }
        if let Some(commune) = &request.commune {
            student.commune = commune.clone();
        }
        if let Some(address) = &request.address {
            student.address = address.clone();
        }
        if let Some(guardian_email) = &request.guardian_email {
            student.guardian_email = guardian_email.clone();
        }
        if let Some(lat) = request.lat {
            student.lat = Some(lat);
        }
        if let Some(lng) = request.lng {
            student.lng = Some(lng);
        }

        let updated = student.clone();
        self.save(&doc).await?;
        Ok(updated)
    }

    /// Delete the student with the given id.
    pub async fn remove_student(&self, id: &str) -> Result<(), AppError> {
        let mut doc = self.load().await;
        let before = doc.students.len();
        doc.students.retain(|s| s.id != id);
        if doc.students.len() == before {
            return Err(AppError::NotFound(format!("Student {} not found", id)));
        }
        self.save(&doc).await
    }

    // ==================== DRIVER OPERATIONS ====================

    /// Append a new driver and persist the document.
    pub async fn add_driver(&self, request: &CreateDriverRequest) -> Result<Driver, AppError> {
        let mut doc = self.load().await;
        let driver = Driver {
            id: crate::models::new_id(),
            name: request.name.clone(),
            login_email: request.login_email.clone(),
            assigned_commune: request.assigned_commune.clone(),
        };
        doc.drivers.push(driver.clone());
        self.save(&doc).await?;
        Ok(driver)
    }

    /// Replace fields of the driver with the given id.
    pub async fn update_driver(
        &self,
        id: &str,
        request: &UpdateDriverRequest,
    ) -> Result<Driver, AppError> {
        let mut doc = self.load().await;
        let driver = doc
            .drivers
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Driver {} not found", id)))?;

        if let Some(name) = &request.name {
            driver.name = name.clone();
        }
        if let Some(login_email) = &request.login_email {
            driver.login_email = login_email.clone();
        }
        if let Some(assigned_commune) = &request.assigned_commune {
            driver.assigned_commune = Some(assigned_commune.clone());
        }

        let updated = driver.clone();
        self.save(&doc).await?;
        Ok(updated)
    }

    /// Delete the driver with the given id.
    pub async fn remove_driver(&self, id: &str) -> Result<(), AppError> {
        let mut doc = self.load().await;
        let before = doc.drivers.len();
        doc.drivers.retain(|d| d.id != id);
        if doc.drivers.len() == before {
            return Err(AppError::NotFound(format!("Driver {} not found", id)));
        }
        self.save(&doc).await
    }

    // ==================== SCHOOL SITE OPERATIONS ====================

    /// Append a new school site and persist the document.
    pub async fn add_site(&self, request: &CreateSiteRequest) -> Result<SchoolSite, AppError> {
        let mut doc = self.load().await;
        let site = SchoolSite {
            id: crate::models::new_id(),
            name: request.name.clone(),
            commune: request.commune.clone(),
            address: request.address.clone(),
            lat: None,
            lng: None,
        };
        doc.sites.push(site.clone());
        self.save(&doc).await?;
        Ok(site)
    }

    /// Replace fields of the school site with the given id.
    pub async fn update_site(
        &self,
        id: &str,
        request: &UpdateSiteRequest,
    ) -> Result<SchoolSite, AppError> {
        let mut doc = self.load().await;
        let site = doc
            .sites
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Site {} not found", id)))?;

        if let Some(name) = &request.name {
            site.name = name.clone();
        }
        if let Some(commune) = &request.commune {
            site.commune = commune.clone();
        }
        if let Some(address) = &request.address {
            site.address = address.clone();
        }
        if let Some(lat) = request.lat {
            site.lat = Some(lat);
        }
        if let Some(lng) = request.lng {
            site.lng = Some(lng);
        }

        let updated = site.clone();
        self.save(&doc).await?;
        Ok(updated)
    }

    /// Delete the school site with the given id.
    pub async fn remove_site(&self, id: &str) -> Result<(), AppError> {
        let mut doc = self.load().await;
        let before = doc.sites.len();
        doc.sites.retain(|s| s.id != id);
        if doc.sites.len() == before {
            return Err(AppError::NotFound(format!("Site {} not found", id)));
        }
        self.save(&doc).await
    }

    // ==================== BUS OPERATIONS ====================
    //
    // Buses are plain strings with no structured fields, so they keep the
    // positional identity of the stored format.

    /// Append a new bus plate and persist the document.
    pub async fn add_bus(&self, plate: &str) -> Result<String, AppError> {
        let mut doc = self.load().await;
        let plate = plate.trim().to_string();
        doc.buses.push(plate.clone());
        self.save(&doc).await?;
        Ok(plate)
    }

    /// Replace the bus plate at the given position.
    pub async fn update_bus(&self, index: usize, plate: &str) -> Result<String, AppError> {
        let mut doc = self.load().await;
        let slot = doc
            .buses
            .get_mut(index)
            .ok_or_else(|| AppError::NotFound(format!("Bus {} not found", index)))?;
        *slot = plate.trim().to_string();
        let updated = slot.clone();
        self.save(&doc).await?;
        Ok(updated)
    }

    /// Delete the bus plate at the given position.
    pub async fn remove_bus(&self, index: usize) -> Result<(), AppError> {
        let mut doc = self.load().await;
        if index >= doc.buses.len() {
            return Err(AppError::NotFound(format!("Bus {} not found", index)));
        }
        doc.buses.remove(index);
        self.save(&doc).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_database;
    use tempfile::TempDir;

    async fn repo() -> (RosterRepository, KvStore, TempDir) {
        let dir = TempDir::new().expect("temp dir");
        let pool = init_database(&dir.path().join("test.sqlite"))
            .await
            .expect("init db");
        let store = KvStore::new(pool);
        (RosterRepository::new(store.clone()), store, dir)
    }

    #[tokio::test]
    async fn test_load_absent_key_yields_empty_document() {
        let (repo, _store, _dir) = repo().await;
        let doc = repo.load().await;
        assert!(doc.buses.is_empty());
        assert!(doc.students.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_document_fails_open_to_empty() {
        let (repo, store, _dir) = repo().await;
        store.set(keys::ROSTER, "{not json at all").await.unwrap();
        let doc = repo.load().await;
        assert!(doc.students.is_empty());
    }

    #[tokio::test]
    async fn test_save_load_round_trip() {
        let (repo, _store, _dir) = repo().await;

        let student = repo
            .add_student(&CreateStudentRequest {
                name: "Ana".into(),
                commune: "Maipú".into(),
                address: "Calle 1".into(),
                guardian_email: "a@x.com".into(),
            })
            .await
            .unwrap();
        repo.add_bus("ABC-123").await.unwrap();

        let doc = repo.load().await;
        assert_eq!(doc.students.len(), 1);
        assert_eq!(doc.students[0].id, student.id);
        assert_eq!(doc.buses, vec!["ABC-123".to_string()]);

        // save(load()) is a no-op.
        repo.save(&doc).await.unwrap();
        let again = repo.load().await;
        assert_eq!(
            serde_json::to_value(&again).unwrap(),
            serde_json::to_value(&doc).unwrap()
        );
    }

    #[tokio::test]
    async fn test_update_and_remove_by_id() {
        let (repo, _store, _dir) = repo().await;

        let driver = repo
            .add_driver(&CreateDriverRequest {
                name: "Bob".into(),
                login_email: "b@x.com".into(),
                assigned_commune: None,
            })
            .await
            .unwrap();

        let updated = repo
            .update_driver(
                &driver.id,
                &UpdateDriverRequest {
                    name: None,
                    login_email: None,
                    assigned_commune: Some("Maipú".into()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.commune(), Some("Maipú"));
        assert_eq!(updated.name, "Bob");

        repo.remove_driver(&driver.id).await.unwrap();
        assert!(repo.load().await.drivers.is_empty());

        let err = repo.remove_driver(&driver.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_bus_positional_update_and_remove() {
        let (repo, _store, _dir) = repo().await;

        repo.add_bus("AAA-111").await.unwrap();
        repo.add_bus("BBB-222").await.unwrap();

        repo.update_bus(1, "CCC-333").await.unwrap();
        assert_eq!(repo.load().await.buses[1], "CCC-333");

        repo.remove_bus(0).await.unwrap();
        assert_eq!(repo.load().await.buses, vec!["CCC-333".to_string()]);

        let err = repo.update_bus(5, "x").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
