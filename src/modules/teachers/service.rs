use sqlx::SqlitePool;
use tracing::instrument;

use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationParams;
use crate::utils::password::{generate_password, hash_password};

use super::model::{
    CreateTeacherDto, CreateTeacherResponse, Teacher, TeacherProfile, TeacherSummary,
    UpdateTeacherDto,
};

pub struct TeacherService;

impl TeacherService {
    /// Creates a teacher together with its user account, optional
    /// class-teacher link and teaching assignments.
    ///
    /// Everything runs inside one transaction: if any step fails the user
    /// and teacher rows from earlier steps are rolled back rather than left
    /// behind as orphans. A `class_teacher_for` pointing at a nonexistent
    /// class aborts the whole operation with a not-found error.
    #[instrument(skip(db, dto))]
    pub async fn create_teacher(
        db: &SqlitePool,
        dto: CreateTeacherDto,
    ) -> Result<CreateTeacherResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct NewUser {
            id: i64,
            email: String,
        }

        let plain_password = generate_password();
        let password_hash = hash_password(&plain_password)?;
        let name = format!("{} {}", dto.first_name, dto.last_name);

        let mut tx = db.begin().await?;

        let user = sqlx::query_as::<_, NewUser>(
            "INSERT INTO users (email, password_hash, role, name)
             VALUES ($1, $2, 'teacher', $3)
             RETURNING id, email",
        )
        .bind(&dto.email)
        .bind(&password_hash)
        .bind(&name)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::bad_request(anyhow::anyhow!(
                    "User with email {} already exists",
                    dto.email
                ))
            }
            e => AppError::database(anyhow::Error::from(e)),
        })?;

        let teacher = sqlx::query_as::<_, Teacher>(
            "INSERT INTO teachers (user_id, first_name, last_name, contact, status, specialization)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, user_id, first_name, last_name, contact, status, specialization,
                       created_at, updated_at",
        )
        .bind(user.id)
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.contact)
        .bind(&dto.status)
        .bind(&dto.specialization)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        if let Some(class_id) = dto.class_teacher_for {
            let updated = sqlx::query(
                "UPDATE classes SET class_teacher_id = $1, updated_at = CURRENT_TIMESTAMP
                 WHERE id = $2",
            )
            .bind(teacher.id)
            .bind(class_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

            if updated.rows_affected() == 0 {
                // Dropping the transaction rolls back the user and teacher.
                return Err(AppError::not_found(anyhow::anyhow!("Class not found")));
            }
        }

        for assignment in dto.assignments.unwrap_or_default() {
            for subject_id in &assignment.subject_ids {
                sqlx::query(
                    "INSERT INTO class_subject_teachers (class_id, subject_id, teacher_id)
                     VALUES ($1, $2, $3)",
                )
                .bind(assignment.class_id)
                .bind(subject_id)
                .bind(teacher.id)
                .execute(&mut *tx)
                .await
                .map_err(|e| match e {
                    sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                        AppError::conflict(anyhow::anyhow!(
                            "Assignment references a nonexistent class or subject"
                        ))
                    }
                    e => AppError::database(anyhow::Error::from(e)),
                })?;
            }
        }

        tx.commit().await?;

        Ok(CreateTeacherResponse {
            teacher: TeacherProfile {
                id: teacher.id,
                name,
                email: user.email,
            },
            plain_password,
        })
    }

    /// Lists teachers with their account email and the actual subject and
    /// class names from the assignment table.
    #[instrument(skip(db))]
    pub async fn get_teachers(
        db: &SqlitePool,
        pagination: &PaginationParams,
    ) -> Result<Vec<TeacherSummary>, AppError> {
        #[derive(sqlx::FromRow)]
        struct TeacherListRow {
            id: i64,
            first_name: String,
            last_name: String,
            contact: Option<String>,
            status: Option<String>,
            specialization: Option<String>,
            email: String,
        }

        let rows = sqlx::query_as::<_, TeacherListRow>(
            "SELECT t.id, t.first_name, t.last_name, t.contact, t.status, t.specialization,
                    u.email
             FROM teachers t
             JOIN users u ON u.id = t.user_id
             ORDER BY t.id LIMIT $1 OFFSET $2",
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        let mut teachers = Vec::with_capacity(rows.len());
        for row in rows {
            let subjects = sqlx::query_scalar::<_, String>(
                "SELECT DISTINCT s.name
                 FROM class_subject_teachers cst
                 JOIN subjects s ON s.id = cst.subject_id
                 WHERE cst.teacher_id = $1
                 ORDER BY s.name",
            )
            .bind(row.id)
            .fetch_all(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

            let classes = sqlx::query_scalar::<_, String>(
                "SELECT DISTINCT c.name
                 FROM class_subject_teachers cst
                 JOIN classes c ON c.id = cst.class_id
                 WHERE cst.teacher_id = $1
                 ORDER BY c.name",
            )
            .bind(row.id)
            .fetch_all(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

            teachers.push(TeacherSummary {
                id: row.id,
                name: format!("{} {}", row.first_name, row.last_name),
                email: row.email,
                contact: row.contact,
                status: row.status,
                specialization: row.specialization,
                subjects,
                classes,
            });
        }

        Ok(teachers)
    }

    #[instrument(skip(db))]
    pub async fn get_teacher_by_id(db: &SqlitePool, id: i64) -> Result<Teacher, AppError> {
        let teacher = sqlx::query_as::<_, Teacher>(
            "SELECT id, user_id, first_name, last_name, contact, status, specialization,
                    created_at, updated_at
             FROM teachers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Teacher not found")))?;

        Ok(teacher)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_teacher(
        db: &SqlitePool,
        id: i64,
        dto: UpdateTeacherDto,
    ) -> Result<Teacher, AppError> {
        let teacher = sqlx::query_as::<_, Teacher>(
            "UPDATE teachers
             SET first_name = $1, last_name = $2, contact = $3, status = $4,
                 specialization = $5, updated_at = CURRENT_TIMESTAMP
             WHERE id = $6
             RETURNING id, user_id, first_name, last_name, contact, status, specialization,
                       created_at, updated_at",
        )
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.contact)
        .bind(&dto.status)
        .bind(&dto.specialization)
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Teacher not found")))?;

        Ok(teacher)
    }

    #[instrument(skip(db))]
    pub async fn delete_teacher(db: &SqlitePool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM teachers WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Teacher not found")));
        }

        Ok(())
    }
}
