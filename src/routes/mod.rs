//! Route derivation: commune grouping, destination attachment and map-point
//! materialization.
//!
//! Nothing here is persisted; every view is recomputed from the roster
//! document on demand.
//!
//! Two different commune comparisons coexist on purpose: the admin grouping
//! buckets on the exact commune string (case-sensitive), while a driver's
//! visible route matches their assigned commune trimmed and case-insensitive.
//! Do not unify them.

mod geocoder;

pub use geocoder::*;

use crate::errors::AppError;
use crate::models::{
    DerivedRoute, MapPoint, PointKind, RosterDocument, SchoolSite, Student,
};

/// Human-readable label for a commune route; the fallback route a driver
/// without an assignment sees is the "general" one. Incident reports carry
/// this label, and parent views correlate on it.
pub fn route_label(commune: Option<&str>) -> String {
    match commune {
        Some(c) => format!("Ruta {}", c),
        None => "Ruta General".to_string(),
    }
}

/// Group students by exact commune string, preserving list order: bucket
/// order is first appearance, and students keep their relative order within
/// each bucket.
pub fn group_by_commune(students: &[Student]) -> Vec<(String, Vec<Student>)> {
    let mut groups: Vec<(String, Vec<Student>)> = Vec::new();
    for student in students {
        match groups.iter_mut().find(|(c, _)| *c == student.commune) {
            Some((_, members)) => members.push(student.clone()),
            None => groups.push((student.commune.clone(), vec![student.clone()])),
        }
    }
    groups
}

/// The destination every derived route ends at: the first school site.
/// Fails when the site list is empty; callers must block route computation
/// on that error rather than proceed without a destination.
pub fn attach_destination(doc: &RosterDocument) -> Result<&SchoolSite, AppError> {
    doc.sites.first().ok_or_else(|| {
        AppError::NoDestination("Register at least one school site as the destination".to_string())
    })
}

/// Derive one route per distinct commune, pairing route *i* with bus *i* and
/// driver *i* where those lists reach that far.
pub fn derive_routes(doc: &RosterDocument) -> Result<Vec<DerivedRoute>, AppError> {
    let destination = attach_destination(doc)?.clone();

    Ok(group_by_commune(&doc.students)
        .into_iter()
        .enumerate()
        .map(|(i, (commune, students))| DerivedRoute {
            label: route_label(Some(&commune)),
            commune,
            students,
            destination: destination.clone(),
            bus: doc.buses.get(i).cloned(),
            driver: doc.drivers.get(i).map(|d| d.name.clone()),
        })
        .collect())
}

/// The student subset a driver serves: commune match trimmed and
/// case-insensitive, or every student when the driver has no assignment.
pub fn driver_route(doc: &RosterDocument, driver: &crate::models::Driver) -> Vec<Student> {
    match driver.commune() {
        Some(assigned) => {
            let wanted = assigned.to_lowercase();
            doc.students
                .iter()
                .filter(|s| s.commune.trim().to_lowercase() == wanted)
                .cloned()
                .collect()
        }
        None => doc.students.clone(),
    }
}

/// The children of a guardian, matched on email case-insensitively.
pub fn students_for_guardian(doc: &RosterDocument, email: &str) -> Vec<Student> {
    let wanted = email.trim().to_lowercase();
    doc.students
        .iter()
        .filter(|s| s.guardian_email.trim().to_lowercase() == wanted)
        .cloned()
        .collect()
}

/// Build map points for the given students, appending the destination when
/// one is provided. Coordinates already present on an entity are kept
/// untouched; only missing ones are synthesized through the geocoder.
pub fn materialize_map_points(
    students: &[Student],
    destination: Option<&SchoolSite>,
    geocoder: &dyn Geocoder,
) -> Vec<MapPoint> {
    let mut points: Vec<MapPoint> = students
        .iter()
        .map(|s| {
            let (lat, lng) = geocoder.student_location();
            MapPoint {
                name: s.name.clone(),
                address: s.address.clone(),
                lat: s.lat.unwrap_or(lat),
                lng: s.lng.unwrap_or(lng),
                kind: PointKind::Student,
            }
        })
        .collect();

    if let Some(site) = destination {
        let (lat, lng) = geocoder.destination_location();
        points.push(MapPoint {
            name: site.name.clone(),
            address: site.address.clone(),
            lat: site.lat.unwrap_or(lat),
            lng: site.lng.unwrap_or(lng),
            kind: PointKind::School,
        });
    }

    points
}
