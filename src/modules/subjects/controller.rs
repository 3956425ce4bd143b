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

use super::model::{CreateSubjectDto, Subject, UpdateSubjectDto};
use super::service::SubjectService;

/// Create a subject
#[utoipa::path(
    post,
    path = "/api/subjects",
    request_body = CreateSubjectDto,
    responses(
        (status = 201, description = "Subject created", body = Subject),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Subjects",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_subject(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateSubjectDto>,
) -> Result<(StatusCode, Json<Subject>), AppError> {
    let subject = SubjectService::create_subject(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(subject)))
}

/// List subjects
#[utoipa::path(
    get,
    path = "/api/subjects",
    params(PaginationParams),
    responses(
        (status = 200, description = "List of subjects", body = Vec<Subject>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Subjects",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_subjects(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<Vec<Subject>>, AppError> {
    let subjects = SubjectService::get_subjects(&state.db, &pagination).await?;
    Ok(Json(subjects))
}

/// Get a subject by id
#[utoipa::path(
    get,
    path = "/api/subjects/{id}",
    params(("id" = i64, Path, description = "Subject ID")),
    responses(
        (status = 200, description = "Subject details", body = Subject),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Subject not found")
    ),
    tag = "Subjects",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_subject(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Subject>, AppError> {
    let subject = SubjectService::get_subject_by_id(&state.db, id).await?;
    Ok(Json(subject))
}

/// Replace a subject record
#[utoipa::path(
    put,
    path = "/api/subjects/{id}",
    params(("id" = i64, Path, description = "Subject ID")),
    request_body = UpdateSubjectDto,
    responses(
        (status = 200, description = "Subject updated", body = Subject),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Subject not found")
    ),
    tag = "Subjects",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_subject(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateSubjectDto>,
) -> Result<Json<Subject>, AppError> {
    let subject = SubjectService::update_subject(&state.db, id, dto).await?;
    Ok(Json(subject))
}

/// Delete a subject
#[utoipa::path(
    delete,
    path = "/api/subjects/{id}",
    params(("id" = i64, Path, description = "Subject ID")),
    responses(
        (status = 200, description = "Subject deleted", body = OkResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Subject not found")
    ),
    tag = "Subjects",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_subject(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<OkResponse>, AppError> {
    SubjectService::delete_subject(&state.db, id).await?;
    Ok(Json(OkResponse::new()))
}
