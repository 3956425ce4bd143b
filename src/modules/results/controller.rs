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

use super::model::{CreateResultDto, ExamResult, UpdateResultDto};
use super::service::ResultService;

/// Record a result
#[utoipa::path(
    post,
    path = "/api/results",
    request_body = CreateResultDto,
    responses(
        (status = 201, description = "Result recorded", body = ExamResult),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Referenced student or subject does not exist")
    ),
    tag = "Results",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_result(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateResultDto>,
) -> Result<(StatusCode, Json<ExamResult>), AppError> {
    let result = ResultService::create_result(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

/// List results
#[utoipa::path(
    get,
    path = "/api/results",
    params(PaginationParams),
    responses(
        (status = 200, description = "List of results", body = Vec<ExamResult>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Results",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_results(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<Vec<ExamResult>>, AppError> {
    let results = ResultService::get_results(&state.db, &pagination).await?;
    Ok(Json(results))
}

/// Get a result by id
#[utoipa::path(
    get,
    path = "/api/results/{id}",
    params(("id" = i64, Path, description = "Result ID")),
    responses(
        (status = 200, description = "Result details", body = ExamResult),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Result not found")
    ),
    tag = "Results",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_result(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ExamResult>, AppError> {
    let result = ResultService::get_result_by_id(&state.db, id).await?;
    Ok(Json(result))
}

/// Update a result's score
#[utoipa::path(
    put,
    path = "/api/results/{id}",
    params(("id" = i64, Path, description = "Result ID")),
    request_body = UpdateResultDto,
    responses(
        (status = 200, description = "Score updated", body = ExamResult),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Result not found")
    ),
    tag = "Results",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_result(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateResultDto>,
) -> Result<Json<ExamResult>, AppError> {
    let result = ResultService::update_result(&state.db, id, dto).await?;
    Ok(Json(result))
}

/// Delete a result
#[utoipa::path(
    delete,
    path = "/api/results/{id}",
    params(("id" = i64, Path, description = "Result ID")),
    responses(
        (status = 200, description = "Result deleted", body = OkResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Result not found")
    ),
    tag = "Results",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_result(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<OkResponse>, AppError> {
    ResultService::delete_result(&state.db, id).await?;
    Ok(Json(OkResponse::new()))
}
