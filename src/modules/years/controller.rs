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

use super::model::{AcademicYear, CreateYearDto, UpdateYearDto};
use super::service::YearService;

/// Create an academic year
#[utoipa::path(
    post,
    path = "/api/years",
    request_body = CreateYearDto,
    responses(
        (status = 201, description = "Academic year created", body = AcademicYear),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "An active academic year already exists")
    ),
    tag = "Academic Years",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_year(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateYearDto>,
) -> Result<(StatusCode, Json<AcademicYear>), AppError> {
    let year = YearService::create_year(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(year)))
}

/// List academic years
#[utoipa::path(
    get,
    path = "/api/years",
    params(PaginationParams),
    responses(
        (status = 200, description = "List of academic years", body = Vec<AcademicYear>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Academic Years",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_years(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<Vec<AcademicYear>>, AppError> {
    let years = YearService::get_years(&state.db, &pagination).await?;
    Ok(Json(years))
}

/// Get an academic year by id
#[utoipa::path(
    get,
    path = "/api/years/{id}",
    params(("id" = i64, Path, description = "Academic year ID")),
    responses(
        (status = 200, description = "Academic year details", body = AcademicYear),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Academic year not found")
    ),
    tag = "Academic Years",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_year(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AcademicYear>, AppError> {
    let year = YearService::get_year_by_id(&state.db, id).await?;
    Ok(Json(year))
}

/// Update an academic year
#[utoipa::path(
    put,
    path = "/api/years/{id}",
    params(("id" = i64, Path, description = "Academic year ID")),
    request_body = UpdateYearDto,
    responses(
        (status = 200, description = "Academic year updated", body = AcademicYear),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Academic year not found"),
        (status = 409, description = "An active academic year already exists")
    ),
    tag = "Academic Years",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_year(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateYearDto>,
) -> Result<Json<AcademicYear>, AppError> {
    let year = YearService::update_year(&state.db, id, dto).await?;
    Ok(Json(year))
}

/// Delete an academic year
#[utoipa::path(
    delete,
    path = "/api/years/{id}",
    params(("id" = i64, Path, description = "Academic year ID")),
    responses(
        (status = 200, description = "Academic year deleted", body = OkResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Academic year not found")
    ),
    tag = "Academic Years",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_year(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<OkResponse>, AppError> {
    YearService::delete_year(&state.db, id).await?;
    Ok(Json(OkResponse::new()))
}
