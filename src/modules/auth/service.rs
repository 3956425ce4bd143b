use sqlx::SqlitePool;
use tracing::instrument;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::{User, UserRole};
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::verify_password;

use super::model::{LoginRequest, LoginResponse};

pub struct AuthService;

impl AuthService {
    /// Verifies credentials and mints a bearer token.
    ///
    /// Unknown email and wrong password collapse into the same error so the
    /// response never reveals which field was wrong.
    #[instrument(skip(db, dto))]
    pub async fn login_user(
        db: &SqlitePool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: i64,
            email: String,
            password_hash: String,
            role: UserRole,
            name: String,
            created_at: chrono::NaiveDateTime,
            updated_at: chrono::NaiveDateTime,
        }

        let invalid_credentials =
            || AppError::bad_request(anyhow::anyhow!("Invalid email or password"));

        let user_with_password = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, email, password_hash, role, name, created_at, updated_at
             FROM users WHERE email = $1",
        )
        .bind(&dto.username)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(invalid_credentials)?;

        let is_valid = verify_password(&dto.password, &user_with_password.password_hash)?;
        if !is_valid {
            return Err(invalid_credentials());
        }

        let user = User {
            id: user_with_password.id,
            email: user_with_password.email,
            role: user_with_password.role,
            name: user_with_password.name,
            created_at: user_with_password.created_at,
            updated_at: user_with_password.updated_at,
        };

        let access_token = create_access_token(&user, jwt_config)?;

        Ok(LoginResponse {
            access_token,
            token_type: "bearer".to_string(),
        })
    }
}
