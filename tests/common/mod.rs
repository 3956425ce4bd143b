use gradebook::config::cors::CorsConfig;
use gradebook::config::jwt::JwtConfig;
use gradebook::modules::users::model::User;
use gradebook::router::init_router;
use gradebook::state::AppState;
use gradebook::utils::jwt::create_access_token;
use gradebook::utils::password::hash_password;
use sqlx::SqlitePool;
use uuid::Uuid;

pub async fn setup_test_app(pool: SqlitePool) -> axum::Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    };
    init_router(state)
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: i64,
    pub email: String,
    pub password: String,
}

/// Insert an account directly. `role` is "admin" or "teacher".
pub async fn create_test_user(
    pool: &SqlitePool,
    email: &str,
    password: &str,
    role: &str,
) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (email, password_hash, role, name)
         VALUES ($1, $2, $3, $4)
         RETURNING id, email, role, name, created_at, updated_at",
    )
    .bind(email)
    .bind(&hashed)
    .bind(role)
    .bind("Test User")
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id: user.id,
        email: user.email,
        password: password.to_string(),
    }
}

/// Mint a bearer token for an existing account without going through login.
pub async fn auth_token(pool: &SqlitePool, user_id: i64) -> String {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, email, role, name, created_at, updated_at FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
    .unwrap();

    create_access_token(&user, &JwtConfig::from_env()).unwrap()
}

/// An admin account plus a ready-to-use bearer token, the starting point of
/// most tests.
pub async fn admin_token(pool: &SqlitePool) -> String {
    let user = create_test_user(pool, &generate_unique_email(), "adminpass123", "admin").await;
    auth_token(pool, user.id).await
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

#[allow(dead_code)]
pub async fn create_test_class(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO classes (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_subject(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO subjects (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_student(pool: &SqlitePool, class_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO students (first_name, last_name, class_id)
         VALUES ($1, $2, $3) RETURNING id",
    )
    .bind("Test")
    .bind("Student")
    .bind(class_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// A teacher profile needs a backing account; this creates both and returns
/// the teacher id.
#[allow(dead_code)]
pub async fn create_test_teacher(pool: &SqlitePool) -> i64 {
    let user = create_test_user(pool, &generate_unique_email(), "teacherpass123", "teacher").await;

    sqlx::query_scalar::<_, i64>(
        "INSERT INTO teachers (user_id, first_name, last_name)
         VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(user.id)
    .bind("Test")
    .bind("Teacher")
    .fetch_one(pool)
    .await
    .unwrap()
}
