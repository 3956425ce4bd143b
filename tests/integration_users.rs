mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{admin_token, create_test_teacher, generate_unique_email, setup_test_app};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::SqlitePool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_get_user(pool: SqlitePool) {
    let token = admin_token(&pool).await;
    let app = setup_test_app(pool.clone()).await;

    let email = generate_unique_email();
    let request = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": email,
                "password": "password123",
                "role": "teacher",
                "name": "Jane Poe"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let created: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(created["email"], email);
    assert_eq!(created["role"], "teacher");
    assert!(created.get("password_hash").is_none());

    let id = created["id"].as_i64().unwrap();
    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/users/{}", id))
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let fetched: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["name"], "Jane Poe");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_user_duplicate_email(pool: SqlitePool) {
    let token = admin_token(&pool).await;
    let app = setup_test_app(pool.clone()).await;

    let email = generate_unique_email();
    let payload = serde_json::to_string(&json!({
        "email": email,
        "password": "password123",
        "role": "admin",
        "name": "First"
    }))
    .unwrap();

    let make_request = || {
        Request::builder()
            .method("POST")
            .uri("/api/users")
            .header("content-type", "application/json")
            .header("authorization", format!("Bearer {}", token))
            .body(Body::from(payload.clone()))
            .unwrap()
    };

    let first = app.clone().oneshot(make_request()).await.unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app.oneshot(make_request()).await.unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_user_short_password_rejected(pool: SqlitePool) {
    let token = admin_token(&pool).await;
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": generate_unique_email(),
                "password": "short",
                "role": "admin",
                "name": "X"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_user_changes_only_name(pool: SqlitePool) {
    let token = admin_token(&pool).await;
    let user = common::create_test_user(&pool, &generate_unique_email(), "password123", "teacher")
        .await;
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/users/{}", user.id))
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(
            serde_json::to_string(&json!({ "name": "Renamed Account" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let updated: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(updated["name"], "Renamed Account");
    assert_eq!(updated["email"], user.email);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_user(pool: SqlitePool) {
    let token = admin_token(&pool).await;
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("PUT")
        .uri("/api/users/999999")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(
            serde_json::to_string(&json!({ "name": "Ghost" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_user_with_teacher_profile_conflicts(pool: SqlitePool) {
    let token = admin_token(&pool).await;
    let teacher_id = create_test_teacher(&pool).await;

    let user_id =
        sqlx::query_scalar::<_, i64>("SELECT user_id FROM teachers WHERE id = $1")
            .bind(teacher_id)
            .fetch_one(&pool)
            .await
            .unwrap();

    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/users/{}", user_id))
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_user(pool: SqlitePool) {
    let token = admin_token(&pool).await;
    let user = common::create_test_user(&pool, &generate_unique_email(), "password123", "admin")
        .await;
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/users/{}", user.id))
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["ok"], true);

    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/users/{}", user.id))
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
