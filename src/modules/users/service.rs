use sqlx::SqlitePool;
use tracing::instrument;

use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationParams;
use crate::utils::password::hash_password;

use super::model::{CreateUserDto, UpdateUserDto, User};

pub struct UserService;

impl UserService {
    #[instrument(skip(db, dto))]
    pub async fn create_user(db: &SqlitePool, dto: CreateUserDto) -> Result<User, AppError> {
        let password_hash = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash, role, name)
             VALUES ($1, $2, $3, $4)
             RETURNING id, email, role, name, created_at, updated_at",
        )
        .bind(&dto.email)
        .bind(&password_hash)
        .bind(dto.role)
        .bind(&dto.name)
        .fetch_one(db)
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

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn get_users(
        db: &SqlitePool,
        pagination: &PaginationParams,
    ) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, email, role, name, created_at, updated_at
             FROM users ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok(users)
    }

    #[instrument(skip(db))]
    pub async fn get_user_by_id(db: &SqlitePool, id: i64) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, role, name, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        Ok(user)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_user(
        db: &SqlitePool,
        id: i64,
        dto: UpdateUserDto,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET name = $1, updated_at = CURRENT_TIMESTAMP
             WHERE id = $2
             RETURNING id, email, role, name, created_at, updated_at",
        )
        .bind(&dto.name)
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn delete_user(db: &SqlitePool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                    AppError::conflict(anyhow::anyhow!(
                        "User is still linked to a teacher profile"
                    ))
                }
                e => AppError::database(anyhow::Error::from(e)),
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("User not found")));
        }

        Ok(())
    }
}
