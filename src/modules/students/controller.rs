use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationParams;
use crate::utils::response::OkResponse;
use crate::validator::ValidatedJson;

use super::model::{CreateStudentDto, Student, UpdateStudentDto};
use super::service::StudentService;

/// Enroll a student into a class
#[utoipa::path(
    post,
    path = "/api/students",
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student created", body = Student),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Referenced class does not exist")
    ),
    tag = "Students",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateStudentDto>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let student = StudentService::create_student(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// List students
#[utoipa::path(
    get,
    path = "/api/students",
    params(PaginationParams),
    responses(
        (status = 200, description = "List of students", body = Vec<Student>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Students",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_students(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = StudentService::get_students(&state.db, &pagination).await?;
    Ok(Json(students))
}

/// Get a student by id
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student details", body = Student),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Student not found")
    ),
    tag = "Students",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::get_student_by_id(&state.db, id).await?;
    Ok(Json(student))
}

/// Replace a student record
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    params(("id" = i64, Path, description = "Student ID")),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Student updated", body = Student),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Student not found"),
        (status = 409, description = "Referenced class does not exist")
    ),
    tag = "Students",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateStudentDto>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::update_student(&state.db, id, dto).await?;
    Ok(Json(student))
}

/// Delete a student
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student deleted", body = OkResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Student not found")
    ),
    tag = "Students",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<OkResponse>, AppError> {
    StudentService::delete_student(&state.db, id).await?;
    Ok(Json(OkResponse::new()))
}
