//! Placeholder geocoding.
//!
//! Coordinate fabrication sits behind the [`Geocoder`] trait so a real
//! geocoding engine can replace it without touching the grouping logic. The
//! placeholder scatters points around Santiago centro and must never be used
//! for actual navigation.

use rand::Rng;

/// Produces coordinates for entities that have none recorded.
pub trait Geocoder: Send + Sync {
    /// A location for a student pickup point.
    fn student_location(&self) -> (f64, f64);
    /// A location for the destination school site.
    fn destination_location(&self) -> (f64, f64);
}

/// Base coordinates near Santiago centro for student points.
const STUDENT_BASE: (f64, f64) = (-33.45, -70.65);
/// Students scatter over a wide area.
const STUDENT_JITTER: f64 = 0.06;

/// Base coordinates for the destination school.
const DESTINATION_BASE: (f64, f64) = (-33.43, -70.63);
/// The destination clusters tightly.
const DESTINATION_JITTER: f64 = 0.005;

/// Random-jitter geocoder used by the demo.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderGeocoder;

impl Geocoder for PlaceholderGeocoder {
    fn student_location(&self) -> (f64, f64) {
        let mut rng = rand::thread_rng();
        (
            STUDENT_BASE.0 + rng.gen::<f64>() * STUDENT_JITTER,
            STUDENT_BASE.1 + rng.gen::<f64>() * STUDENT_JITTER,
        )
    }

    fn destination_location(&self) -> (f64, f64) {
        let mut rng = rand::thread_rng();
        (
            DESTINATION_BASE.0 + rng.gen::<f64>() * DESTINATION_JITTER,
            DESTINATION_BASE.1 + rng.gen::<f64>() * DESTINATION_JITTER,
        )
    }
}
