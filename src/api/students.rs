//! Student API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateStudentRequest, Student, UpdateStudentRequest};
use crate::AppState;

/// GET /api/students - List all students.
pub async fn list_students(State(state): State<AppState>) -> ApiResult<Vec<Student>> {
    success(state.roster.load().await.students)
}

/// POST /api/students - Create a new student.
pub async fn create_student(
    State(state): State<AppState>,
    Json(request): Json<CreateStudentRequest>,
) -> ApiResult<Student> {
    if request.name.trim().is_empty()
        || request.commune.trim().is_empty()
        || request.address.trim().is_empty()
        || request.guardian_email.trim().is_empty()
    {
        return Err(AppError::Validation(
            "Name, commune, address and guardian email are required".to_string(),
        ));
    }

    success(state.roster.add_student(&request).await?)
}

/// PUT /api/students/:id - Update a student.
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateStudentRequest>,
) -> ApiResult<Student> {
    success(state.roster.update_student(&id, &request).await?)
}

/// DELETE /api/students/:id - Delete a student.
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state.roster.remove_student(&id).await?;
    success(())
}
