//! Data models for the RutaBus application.
//!
//! Rust-side names are English; `#[serde(rename)]` attributes pin every field
//! to the Spanish wire names of the persisted document format, so stored data
//! written by earlier versions of the app keeps loading unchanged.

mod driver;
mod report;
mod roster;
mod route;
mod school;
mod student;

pub use driver::*;
pub use report::*;
pub use roster::*;
pub use route::*;
pub use school::*;
pub use student::*;

/// Generate a fresh entity id.
///
/// Stored documents predating stable ids get one assigned on deserialize via
/// `#[serde(default = "new_id")]`; it becomes permanent on the next save.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
