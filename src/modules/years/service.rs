use sqlx::SqlitePool;
use tracing::instrument;

use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationParams;

use super::model::{AcademicYear, CreateYearDto, UpdateYearDto};

pub struct YearService;

impl YearService {
    #[instrument(skip(db, dto))]
    pub async fn create_year(
        db: &SqlitePool,
        dto: CreateYearDto,
    ) -> Result<AcademicYear, AppError> {
        let year = sqlx::query_as::<_, AcademicYear>(
            "INSERT INTO academic_years (name, is_active)
             VALUES ($1, $2)
             RETURNING id, name, is_active, created_at, updated_at",
        )
        .bind(&dto.name)
        .bind(dto.is_active)
        .fetch_one(db)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::conflict(anyhow::anyhow!("An active academic year already exists"))
            }
            e => AppError::database(anyhow::Error::from(e)),
        })?;

        Ok(year)
    }

    #[instrument(skip(db))]
    pub async fn get_years(
        db: &SqlitePool,
        pagination: &PaginationParams,
    ) -> Result<Vec<AcademicYear>, AppError> {
        let years = sqlx::query_as::<_, AcademicYear>(
            "SELECT id, name, is_active, created_at, updated_at
             FROM academic_years ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok(years)
    }

    #[instrument(skip(db))]
    pub async fn get_year_by_id(db: &SqlitePool, id: i64) -> Result<AcademicYear, AppError> {
        let year = sqlx::query_as::<_, AcademicYear>(
            "SELECT id, name, is_active, created_at, updated_at
             FROM academic_years WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Academic year not found")))?;

        Ok(year)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_year(
        db: &SqlitePool,
        id: i64,
        dto: UpdateYearDto,
    ) -> Result<AcademicYear, AppError> {
        let year = sqlx::query_as::<_, AcademicYear>(
            "UPDATE academic_years SET name = $1, is_active = $2, updated_at = CURRENT_TIMESTAMP
             WHERE id = $3
             RETURNING id, name, is_active, created_at, updated_at",
        )
        .bind(&dto.name)
        .bind(dto.is_active)
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::conflict(anyhow::anyhow!("An active academic year already exists"))
            }
            e => AppError::database(anyhow::Error::from(e)),
        })?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Academic year not found")))?;

        Ok(year)
    }

    #[instrument(skip(db))]
    pub async fn delete_year(db: &SqlitePool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM academic_years WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Academic year not found"
            )));
        }

        Ok(())
    }
}
