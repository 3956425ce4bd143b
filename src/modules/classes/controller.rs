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

use super::model::{Class, CreateClassDto, UpdateClassDto};
use super::service::ClassService;

/// Create a class
#[utoipa::path(
    post,
    path = "/api/classes",
    request_body = CreateClassDto,
    responses(
        (status = 201, description = "Class created", body = Class),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Classes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_class(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateClassDto>,
) -> Result<(StatusCode, Json<Class>), AppError> {
    let class = ClassService::create_class(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(class)))
}

/// List classes
#[utoipa::path(
    get,
    path = "/api/classes",
    params(PaginationParams),
    responses(
        (status = 200, description = "List of classes", body = Vec<Class>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Classes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_classes(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<Vec<Class>>, AppError> {
    let classes = ClassService::get_classes(&state.db, &pagination).await?;
    Ok(Json(classes))
}

/// Get a class by id
#[utoipa::path(
    get,
    path = "/api/classes/{id}",
    params(("id" = i64, Path, description = "Class ID")),
    responses(
        (status = 200, description = "Class details", body = Class),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Class not found")
    ),
    tag = "Classes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_class(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Class>, AppError> {
    let class = ClassService::get_class_by_id(&state.db, id).await?;
    Ok(Json(class))
}

/// Replace a class record
#[utoipa::path(
    put,
    path = "/api/classes/{id}",
    params(("id" = i64, Path, description = "Class ID")),
    request_body = UpdateClassDto,
    responses(
        (status = 200, description = "Class updated", body = Class),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Class not found")
    ),
    tag = "Classes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_class(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateClassDto>,
) -> Result<Json<Class>, AppError> {
    let class = ClassService::update_class(&state.db, id, dto).await?;
    Ok(Json(class))
}

/// Delete a class
#[utoipa::path(
    delete,
    path = "/api/classes/{id}",
    params(("id" = i64, Path, description = "Class ID")),
    responses(
        (status = 200, description = "Class deleted", body = OkResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Class not found"),
        (status = 409, description = "Class still has enrolled students")
    ),
    tag = "Classes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_class(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<OkResponse>, AppError> {
    ClassService::delete_class(&state.db, id).await?;
    Ok(Json(OkResponse::new()))
}
