use sqlx::SqlitePool;
use tracing::instrument;

use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationParams;

use super::model::{Class, CreateClassDto, UpdateClassDto};

pub struct ClassService;

impl ClassService {
    #[instrument(skip(db, dto))]
    pub async fn create_class(db: &SqlitePool, dto: CreateClassDto) -> Result<Class, AppError> {
        let class = sqlx::query_as::<_, Class>(
            "INSERT INTO classes (name, level, class_teacher_id)
             VALUES ($1, $2, $3)
             RETURNING id, name, level, class_teacher_id, created_at, updated_at",
        )
        .bind(&dto.name)
        .bind(&dto.level)
        .bind(dto.class_teacher_id)
        .fetch_one(db)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::conflict(anyhow::anyhow!("Referenced class teacher does not exist"))
            }
            e => AppError::database(anyhow::Error::from(e)),
        })?;

        Ok(class)
    }

    #[instrument(skip(db))]
    pub async fn get_classes(
        db: &SqlitePool,
        pagination: &PaginationParams,
    ) -> Result<Vec<Class>, AppError> {
        let classes = sqlx::query_as::<_, Class>(
            "SELECT id, name, level, class_teacher_id, created_at, updated_at
             FROM classes ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok(classes)
    }

    #[instrument(skip(db))]
    pub async fn get_class_by_id(db: &SqlitePool, id: i64) -> Result<Class, AppError> {
        let class = sqlx::query_as::<_, Class>(
            "SELECT id, name, level, class_teacher_id, created_at, updated_at
             FROM classes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Class not found")))?;

        Ok(class)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_class(
        db: &SqlitePool,
        id: i64,
        dto: UpdateClassDto,
    ) -> Result<Class, AppError> {
        let class = sqlx::query_as::<_, Class>(
            "UPDATE classes
             SET name = $1, level = $2, class_teacher_id = $3, updated_at = CURRENT_TIMESTAMP
             WHERE id = $4
             RETURNING id, name, level, class_teacher_id, created_at, updated_at",
        )
        .bind(&dto.name)
        .bind(&dto.level)
        .bind(dto.class_teacher_id)
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::conflict(anyhow::anyhow!("Referenced class teacher does not exist"))
            }
            e => AppError::database(anyhow::Error::from(e)),
        })?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Class not found")))?;

        Ok(class)
    }

    /// Deleting a class is restricted while any student is still enrolled in
    /// it; the store rejects the delete and the caller gets a conflict.
    #[instrument(skip(db))]
    pub async fn delete_class(db: &SqlitePool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM classes WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                    AppError::conflict(anyhow::anyhow!(
                        "Class still has enrolled students and cannot be deleted"
                    ))
                }
                e => AppError::database(anyhow::Error::from(e)),
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Class not found")));
        }

        Ok(())
    }
}
