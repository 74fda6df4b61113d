use crate::dtos::{CreateStudentRequest, StudentCollection, StudentResponse};
use crate::services::metrics::{record_student_created, record_students_listed};
use crate::startup::AppState;
use crate::utils::ValidatedJson;
use axum::{extract::State, http::StatusCode, Json};
use service_core::error::AppError;

/// Insert a new student record.
///
/// A unique `id` is assigned by the store and returned in the response.
#[utoipa::path(
    post,
    path = "/students/",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[tracing::instrument(skip(state, request))]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateStudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), AppError> {
    let student = state.store.insert_student(request.into()).await?;
    let response = StudentResponse::from(student);

    record_student_created();
    tracing::info!(student_id = %response.id, "Student created");

    Ok((StatusCode::CREATED, Json(response)))
}

/// List student records.
///
/// Unpaginated and unsorted; at most the configured limit is returned.
#[utoipa::path(
    get,
    path = "/students",
    responses(
        (status = 200, description = "Students listed", body = StudentCollection),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[tracing::instrument(skip(state))]
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<StudentCollection>, AppError> {
    let students = state
        .store
        .list_students(state.config.students.list_limit)
        .await?;

    record_students_listed(students.len());
    tracing::debug!(count = students.len(), "Students listed");

    Ok(Json(StudentCollection::from(students)))
}
