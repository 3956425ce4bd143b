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

use super::model::{
    CreateTeacherDto, CreateTeacherResponse, Teacher, TeacherSummary, UpdateTeacherDto,
};
use super::service::TeacherService;

/// Create a teacher with a generated account, optional class-teacher link
/// and teaching assignments
#[utoipa::path(
    post,
    path = "/api/teachers",
    request_body = CreateTeacherDto,
    responses(
        (status = 201, description = "Teacher created; the generated password is returned once", body = CreateTeacherResponse),
        (status = 400, description = "Validation error or email already exists"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "class_teacher_for references a nonexistent class"),
        (status = 409, description = "Assignment references a nonexistent class or subject")
    ),
    tag = "Teachers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_teacher(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateTeacherDto>,
) -> Result<(StatusCode, Json<CreateTeacherResponse>), AppError> {
    let response = TeacherService::create_teacher(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// List teachers with their assigned subjects and classes
#[utoipa::path(
    get,
    path = "/api/teachers",
    params(PaginationParams),
    responses(
        (status = 200, description = "List of teachers", body = Vec<TeacherSummary>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Teachers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_teachers(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<Vec<TeacherSummary>>, AppError> {
    let teachers = TeacherService::get_teachers(&state.db, &pagination).await?;
    Ok(Json(teachers))
}

/// Get a teacher profile by id
#[utoipa::path(
    get,
    path = "/api/teachers/{id}",
    params(("id" = i64, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher details", body = Teacher),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Teacher not found")
    ),
    tag = "Teachers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = TeacherService::get_teacher_by_id(&state.db, id).await?;
    Ok(Json(teacher))
}

/// Replace a teacher profile
#[utoipa::path(
    put,
    path = "/api/teachers/{id}",
    params(("id" = i64, Path, description = "Teacher ID")),
    request_body = UpdateTeacherDto,
    responses(
        (status = 200, description = "Teacher updated", body = Teacher),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Teacher not found")
    ),
    tag = "Teachers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_teacher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateTeacherDto>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = TeacherService::update_teacher(&state.db, id, dto).await?;
    Ok(Json(teacher))
}

/// Delete a teacher profile
#[utoipa::path(
    delete,
    path = "/api/teachers/{id}",
    params(("id" = i64, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher deleted", body = OkResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Teacher not found")
    ),
    tag = "Teachers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<OkResponse>, AppError> {
    TeacherService::delete_teacher(&state.db, id).await?;
    Ok(Json(OkResponse::new()))
}
