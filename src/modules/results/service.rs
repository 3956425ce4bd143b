use sqlx::SqlitePool;
use tracing::instrument;

use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationParams;

use super::model::{CreateResultDto, ExamResult, UpdateResultDto};

pub struct ResultService;

impl ResultService {
    #[instrument(skip(db, dto))]
    pub async fn create_result(
        db: &SqlitePool,
        dto: CreateResultDto,
    ) -> Result<ExamResult, AppError> {
        let result = sqlx::query_as::<_, ExamResult>(
            "INSERT INTO results (student_id, subject_id, score)
             VALUES ($1, $2, $3)
             RETURNING id, student_id, subject_id, score, created_at, updated_at",
        )
        .bind(dto.student_id)
        .bind(dto.subject_id)
        .bind(dto.score)
        .fetch_one(db)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::conflict(anyhow::anyhow!(
                    "Referenced student or subject does not exist"
                ))
            }
            e => AppError::database(anyhow::Error::from(e)),
        })?;

        Ok(result)
    }

    #[instrument(skip(db))]
    pub async fn get_results(
        db: &SqlitePool,
        pagination: &PaginationParams,
    ) -> Result<Vec<ExamResult>, AppError> {
        let results = sqlx::query_as::<_, ExamResult>(
            "SELECT id, student_id, subject_id, score, created_at, updated_at
             FROM results ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok(results)
    }

    #[instrument(skip(db))]
    pub async fn get_result_by_id(db: &SqlitePool, id: i64) -> Result<ExamResult, AppError> {
        let result = sqlx::query_as::<_, ExamResult>(
            "SELECT id, student_id, subject_id, score, created_at, updated_at
             FROM results WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Result not found")))?;

        Ok(result)
    }

    /// Only the score is overwritten; every other field keeps its recorded
    /// value.
    #[instrument(skip(db, dto))]
    pub async fn update_result(
        db: &SqlitePool,
        id: i64,
        dto: UpdateResultDto,
    ) -> Result<ExamResult, AppError> {
        let result = sqlx::query_as::<_, ExamResult>(
            "UPDATE results SET score = $1, updated_at = CURRENT_TIMESTAMP
             WHERE id = $2
             RETURNING id, student_id, subject_id, score, created_at, updated_at",
        )
        .bind(dto.score)
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Result not found")))?;

        Ok(result)
    }

    #[instrument(skip(db))]
    pub async fn delete_result(db: &SqlitePool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM results WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Result not found")));
        }

        Ok(())
    }
}
