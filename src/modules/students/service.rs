use sqlx::SqlitePool;
use tracing::instrument;

use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationParams;

use super::model::{CreateStudentDto, Student, UpdateStudentDto};

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db, dto))]
    pub async fn create_student(
        db: &SqlitePool,
        dto: CreateStudentDto,
    ) -> Result<Student, AppError> {
        let student = sqlx::query_as::<_, Student>(
            "INSERT INTO students (first_name, last_name, class_id)
             VALUES ($1, $2, $3)
             RETURNING id, first_name, last_name, class_id, created_at, updated_at",
        )
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(dto.class_id)
        .fetch_one(db)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::conflict(anyhow::anyhow!("Class {} does not exist", dto.class_id))
            }
            e => AppError::database(anyhow::Error::from(e)),
        })?;

        Ok(student)
    }

    #[instrument(skip(db))]
    pub async fn get_students(
        db: &SqlitePool,
        pagination: &PaginationParams,
    ) -> Result<Vec<Student>, AppError> {
        let students = sqlx::query_as::<_, Student>(
            "SELECT id, first_name, last_name, class_id, created_at, updated_at
             FROM students ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok(students)
    }

    #[instrument(skip(db))]
    pub async fn get_student_by_id(db: &SqlitePool, id: i64) -> Result<Student, AppError> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT id, first_name, last_name, class_id, created_at, updated_at
             FROM students WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;

        Ok(student)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_student(
        db: &SqlitePool,
        id: i64,
        dto: UpdateStudentDto,
    ) -> Result<Student, AppError> {
        let student = sqlx::query_as::<_, Student>(
            "UPDATE students
             SET first_name = $1, last_name = $2, class_id = $3, updated_at = CURRENT_TIMESTAMP
             WHERE id = $4
             RETURNING id, first_name, last_name, class_id, created_at, updated_at",
        )
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(dto.class_id)
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::conflict(anyhow::anyhow!("Class {} does not exist", dto.class_id))
            }
            e => AppError::database(anyhow::Error::from(e)),
        })?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;

        Ok(student)
    }

    #[instrument(skip(db))]
    pub async fn delete_student(db: &SqlitePool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Student not found")));
        }

        Ok(())
    }
}
