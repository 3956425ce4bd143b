mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{auth_token, create_test_user, generate_unique_email, setup_test_app};
use gradebook::config::jwt::JwtConfig;
use gradebook::utils::jwt::verify_token;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

fn login_request(email: &str, password: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(format!(
            "username={}&password={}",
            email, password
        )))
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_success(pool: SqlitePool) {
    let email = generate_unique_email();
    let password = "testpass123";
    let user = create_test_user(&pool, &email, password, "admin").await;

    let app = setup_test_app(pool.clone()).await;

    let response = app.oneshot(login_request(&email, password)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(body["token_type"], "bearer");

    let token = body["access_token"].as_str().unwrap();
    let claims = verify_token(token, &JwtConfig::from_env()).unwrap();
    assert_eq!(claims.sub, user.id.to_string());
    assert_eq!(claims.email, email);
    assert_eq!(claims.role, "admin");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_unknown_email(pool: SqlitePool) {
    let app = setup_test_app(pool.clone()).await;

    let response = app
        .oneshot(login_request("nonexistent@test.com", "whatever123"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "Invalid email or password");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_wrong_password_matches_unknown_email_shape(pool: SqlitePool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, "correctpass1", "admin").await;

    let app = setup_test_app(pool.clone()).await;

    let wrong_pass = app
        .clone()
        .oneshot(login_request(&email, "wrongpass123"))
        .await
        .unwrap();
    let unknown = app
        .oneshot(login_request("missing@test.com", "wrongpass123"))
        .await
        .unwrap();

    // Both failure modes are indistinguishable to the caller.
    assert_eq!(wrong_pass.status(), StatusCode::BAD_REQUEST);
    assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);

    let a = wrong_pass.into_body().collect().await.unwrap().to_bytes();
    let b = unknown.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(a, b);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_missing_password(pool: SqlitePool) {
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("username=test@test.com"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_me_returns_current_account(pool: SqlitePool) {
    let email = generate_unique_email();
    let user = create_test_user(&pool, &email, "testpass123", "teacher").await;
    let token = auth_token(&pool, user.id).await;

    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/auth/me")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["email"], email);
    assert_eq!(body["id"], user.id);
    assert!(body.get("password_hash").is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_me_without_token(pool: SqlitePool) {
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/auth/me")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_protected_route_rejects_garbage_token(pool: SqlitePool) {
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/students")
        .header("authorization", "Bearer not-a-real-token")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_protected_route_rejects_missing_header(pool: SqlitePool) {
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/classes")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
