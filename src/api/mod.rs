//! REST API module.
//!
//! Contains all API routes and handlers. Handlers derive per-role views
//! server-side; the view layer only renders what it is given.

mod buses;
mod dashboard;
mod drivers;
mod parent;
mod reports;
mod roster;
mod routes;
mod session;
mod sites;
mod students;
mod trip;

pub use buses::*;
pub use dashboard::*;
pub use drivers::*;
pub use parent::*;
pub use reports::*;
pub use roster::*;
pub use routes::*;
pub use session::*;
pub use sites::*;
pub use students::*;
pub use trip::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Success response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, crate::errors::AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(data))
}
