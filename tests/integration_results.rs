mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{
    admin_token, create_test_class, create_test_student, create_test_subject, setup_test_app,
};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::SqlitePool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn test_record_and_get_result(pool: SqlitePool) {
    let token = admin_token(&pool).await;
    let class_id = create_test_class(&pool, "JSS 2A").await;
    let student_id = create_test_student(&pool, class_id).await;
    let subject_id = create_test_subject(&pool, "English").await;
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/results")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(
            serde_json::to_string(&json!({
                "student_id": student_id,
                "subject_id": subject_id,
                "score": 78.5
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let created: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(created["score"], 78.5);

    let id = created["id"].as_i64().unwrap();
    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/results/{}", id))
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_record_result_unknown_student(pool: SqlitePool) {
    let token = admin_token(&pool).await;
    let subject_id = create_test_subject(&pool, "English").await;
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/results")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(
            serde_json::to_string(&json!({
                "student_id": 424242,
                "subject_id": subject_id,
                "score": 50.0
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_result_changes_only_score(pool: SqlitePool) {
    let token = admin_token(&pool).await;
    let class_id = create_test_class(&pool, "JSS 2A").await;
    let student_id = create_test_student(&pool, class_id).await;
    let subject_id = create_test_subject(&pool, "English").await;

    let result_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO results (student_id, subject_id, score) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(student_id)
    .bind(subject_id)
    .bind(40.0)
    .fetch_one(&pool)
    .await
    .unwrap();

    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/results/{}", result_id))
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(
            serde_json::to_string(&json!({ "score": 92.0 })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let updated: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(updated["score"], 92.0);
    assert_eq!(updated["student_id"], student_id);
    assert_eq!(updated["subject_id"], subject_id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_result_extra_fields_ignored_for_references(pool: SqlitePool) {
    let token = admin_token(&pool).await;
    let class_id = create_test_class(&pool, "JSS 2A").await;
    let student_id = create_test_student(&pool, class_id).await;
    let other_student = create_test_student(&pool, class_id).await;
    let subject_id = create_test_subject(&pool, "English").await;

    let result_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO results (student_id, subject_id, score) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(student_id)
    .bind(subject_id)
    .bind(40.0)
    .fetch_one(&pool)
    .await
    .unwrap();

    let app = setup_test_app(pool.clone()).await;

    // A caller trying to repoint the result at another student only gets the
    // score change.
    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/results/{}", result_id))
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(
            serde_json::to_string(&json!({
                "score": 60.0,
                "student_id": other_student
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let updated: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(updated["score"], 60.0);
    assert_eq!(updated["student_id"], student_id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_missing_result(pool: SqlitePool) {
    let token = admin_token(&pool).await;
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/results/999999")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
