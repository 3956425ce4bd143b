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

use super::model::{ClassSubjectTeacher, CreateAssignmentDto};
use super::service::AssignmentService;

/// Create a teaching assignment
#[utoipa::path(
    post,
    path = "/api/assignments",
    request_body = CreateAssignmentDto,
    responses(
        (status = 201, description = "Assignment created", body = ClassSubjectTeacher),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Referenced class, subject or teacher does not exist")
    ),
    tag = "Assignments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_assignment(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateAssignmentDto>,
) -> Result<(StatusCode, Json<ClassSubjectTeacher>), AppError> {
    let assignment = AssignmentService::create_assignment(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// List teaching assignments
#[utoipa::path(
    get,
    path = "/api/assignments",
    params(PaginationParams),
    responses(
        (status = 200, description = "List of assignments", body = Vec<ClassSubjectTeacher>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Assignments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_assignments(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<Vec<ClassSubjectTeacher>>, AppError> {
    let assignments = AssignmentService::get_assignments(&state.db, &pagination).await?;
    Ok(Json(assignments))
}

/// Get a teaching assignment by id
#[utoipa::path(
    get,
    path = "/api/assignments/{id}",
    params(("id" = i64, Path, description = "Assignment ID")),
    responses(
        (status = 200, description = "Assignment details", body = ClassSubjectTeacher),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Assignment not found")
    ),
    tag = "Assignments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_assignment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ClassSubjectTeacher>, AppError> {
    let assignment = AssignmentService::get_assignment_by_id(&state.db, id).await?;
    Ok(Json(assignment))
}

/// Delete a teaching assignment
#[utoipa::path(
    delete,
    path = "/api/assignments/{id}",
    params(("id" = i64, Path, description = "Assignment ID")),
    responses(
        (status = 200, description = "Assignment deleted", body = OkResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Assignment not found")
    ),
    tag = "Assignments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_assignment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<OkResponse>, AppError> {
    AssignmentService::delete_assignment(&state.db, id).await?;
    Ok(Json(OkResponse::new()))
}
