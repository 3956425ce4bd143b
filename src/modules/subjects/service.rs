use sqlx::SqlitePool;
use tracing::instrument;

use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationParams;

use super::model::{CreateSubjectDto, Subject, UpdateSubjectDto};

pub struct SubjectService;

impl SubjectService {
    #[instrument(skip(db, dto))]
    pub async fn create_subject(
        db: &SqlitePool,
        dto: CreateSubjectDto,
    ) -> Result<Subject, AppError> {
        let subject = sqlx::query_as::<_, Subject>(
            "INSERT INTO subjects (name) VALUES ($1)
             RETURNING id, name, created_at, updated_at",
        )
        .bind(&dto.name)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok(subject)
    }

    #[instrument(skip(db))]
    pub async fn get_subjects(
        db: &SqlitePool,
        pagination: &PaginationParams,
    ) -> Result<Vec<Subject>, AppError> {
        let subjects = sqlx::query_as::<_, Subject>(
            "SELECT id, name, created_at, updated_at
             FROM subjects ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok(subjects)
    }

    #[instrument(skip(db))]
    pub async fn get_subject_by_id(db: &SqlitePool, id: i64) -> Result<Subject, AppError> {
        let subject = sqlx::query_as::<_, Subject>(
            "SELECT id, name, created_at, updated_at FROM subjects WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Subject not found")))?;

        Ok(subject)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_subject(
        db: &SqlitePool,
        id: i64,
        dto: UpdateSubjectDto,
    ) -> Result<Subject, AppError> {
        let subject = sqlx::query_as::<_, Subject>(
            "UPDATE subjects SET name = $1, updated_at = CURRENT_TIMESTAMP
             WHERE id = $2
             RETURNING id, name, created_at, updated_at",
        )
        .bind(&dto.name)
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Subject not found")))?;

        Ok(subject)
    }

    #[instrument(skip(db))]
    pub async fn delete_subject(db: &SqlitePool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM subjects WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Subject not found")));
        }

        Ok(())
    }
}
