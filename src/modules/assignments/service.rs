use sqlx::SqlitePool;
use tracing::instrument;

use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationParams;

use super::model::{ClassSubjectTeacher, CreateAssignmentDto};

pub struct AssignmentService;

impl AssignmentService {
    #[instrument(skip(db, dto))]
    pub async fn create_assignment(
        db: &SqlitePool,
        dto: CreateAssignmentDto,
    ) -> Result<ClassSubjectTeacher, AppError> {
        let assignment = sqlx::query_as::<_, ClassSubjectTeacher>(
            "INSERT INTO class_subject_teachers (class_id, subject_id, teacher_id)
             VALUES ($1, $2, $3)
             RETURNING id, class_id, subject_id, teacher_id, created_at",
        )
        .bind(dto.class_id)
        .bind(dto.subject_id)
        .bind(dto.teacher_id)
        .fetch_one(db)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::conflict(anyhow::anyhow!(
                    "Referenced class, subject or teacher does not exist"
                ))
            }
            e => AppError::database(anyhow::Error::from(e)),
        })?;

        Ok(assignment)
    }

    #[instrument(skip(db))]
    pub async fn get_assignments(
        db: &SqlitePool,
        pagination: &PaginationParams,
    ) -> Result<Vec<ClassSubjectTeacher>, AppError> {
        let assignments = sqlx::query_as::<_, ClassSubjectTeacher>(
            "SELECT id, class_id, subject_id, teacher_id, created_at
             FROM class_subject_teachers ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok(assignments)
    }

    #[instrument(skip(db))]
    pub async fn get_assignment_by_id(
        db: &SqlitePool,
        id: i64,
    ) -> Result<ClassSubjectTeacher, AppError> {
        let assignment = sqlx::query_as::<_, ClassSubjectTeacher>(
            "SELECT id, class_id, subject_id, teacher_id, created_at
             FROM class_subject_teachers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Assignment not found")))?;

        Ok(assignment)
    }

    #[instrument(skip(db))]
    pub async fn delete_assignment(db: &SqlitePool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM class_subject_teachers WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Assignment not found")));
        }

        Ok(())
    }
}
