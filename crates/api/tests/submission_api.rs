//! HTTP-level integration tests for the `/submissions` endpoints.
//!
//! Covers the authentication path, the email domain gate, field validation,
//! and the server-side binding of owner and status.

mod common;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use common::{
    body_json, build_test_app, build_test_app_with_config, get_auth, mint_token, seed_profile,
    send_json, test_config, valid_submission_body,
};
use promptdeck_db::repositories::PromptRepo;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn submit_without_token_returns_401(pool: PgPool) {
    let app = build_test_app(pool);
    let response = send_json(
        app,
        Method::POST,
        "/api/v1/submissions",
        None,
        &valid_submission_body(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Missing Authorization header");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn submit_with_non_bearer_header_returns_401(pool: PgPool) {
    let app = build_test_app(pool);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/submissions")
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, "Token abc123")
        .body(Body::from(valid_submission_body().to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Invalid Authorization format. Expected: Bearer <token>"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn submit_with_garbage_token_returns_401(pool: PgPool) {
    let app = build_test_app(pool);
    let response = send_json(
        app,
        Method::POST,
        "/api/v1/submissions",
        Some("not-a-jwt"),
        &valid_submission_body(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid or expired token");
}

// ---------------------------------------------------------------------------
// Happy path: owner and status are bound server-side
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn submit_valid_body_creates_pending_prompt(pool: PgPool) {
    let user_id = seed_profile(&pool, "user", Some("Ada")).await;
    let token = mint_token(user_id, "ada@digit88.com");

    let app = build_test_app(pool.clone());
    let response = send_json(
        app,
        Method::POST,
        "/api/v1/submissions",
        Some(&token),
        &valid_submission_body(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let id: Uuid = json["data"]["id"]
        .as_str()
        .expect("response must carry the new prompt id")
        .parse()
        .expect("id must be a UUID");

    let stored = PromptRepo::find_by_id(&pool, id)
        .await
        .unwrap()
        .expect("prompt must be persisted");
    assert_eq!(stored.owner_id, user_id);
    assert_eq!(stored.status, "pending");
    assert_eq!(stored.version, "1.0.0");
    assert_eq!(stored.title, "Summarize sprint retro notes");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn submit_ignores_smuggled_owner_and_status(pool: PgPool) {
    let user_id = seed_profile(&pool, "user", Some("Ada")).await;
    let token = mint_token(user_id, "ada@digit88.com");

    // A hostile body claims someone else's ownership and pre-approval.
    let mut body = valid_submission_body();
    body["owner_id"] = serde_json::json!(Uuid::new_v4());
    body["status"] = serde_json::json!("approved");
    body["version"] = serde_json::json!("9.9.9");

    let app = build_test_app(pool.clone());
    let response = send_json(app, Method::POST, "/api/v1/submissions", Some(&token), &body).await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let id: Uuid = json["data"]["id"].as_str().unwrap().parse().unwrap();

    let stored = PromptRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(
        stored.owner_id, user_id,
        "owner must come from the token, not the body"
    );
    assert_eq!(
        stored.status, "pending",
        "status must be forced to pending regardless of the body"
    );
    assert_eq!(stored.version, "1.0.0");
}

// ---------------------------------------------------------------------------
// Validation failures
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn submit_short_title_returns_422_with_field_error(pool: PgPool) {
    let user_id = seed_profile(&pool, "user", None).await;
    let token = mint_token(user_id, "ada@digit88.com");

    let mut body = valid_submission_body();
    body["title"] = serde_json::json!("ab");

    let app = build_test_app(pool);
    let response = send_json(app, Method::POST, "/api/v1/submissions", Some(&token), &body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_FAILED");
    assert_eq!(
        json["details"]["title"][0],
        "Title must be at least 3 characters"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn submit_reports_every_failing_field(pool: PgPool) {
    let user_id = seed_profile(&pool, "user", None).await;
    let token = mint_token(user_id, "ada@digit88.com");

    let mut body = valid_submission_body();
    body["title"] = serde_json::json!("ab");
    body["category"] = serde_json::json!([]);
    body["difficulty"] = serde_json::json!("Expert");

    let app = build_test_app(pool.clone());
    let response = send_json(app, Method::POST, "/api/v1/submissions", Some(&token), &body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    let details = json["details"]
        .as_object()
        .expect("details must be an object");
    assert!(details.contains_key("title"));
    assert!(details.contains_key("category"));
    assert!(details.contains_key("difficulty"));

    // Nothing may be persisted on a validation failure.
    let own = PromptRepo::list_by_owner(&pool, user_id).await.unwrap();
    assert!(own.is_empty(), "rejected submission must not be stored");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn submit_malformed_json_returns_400(pool: PgPool) {
    let user_id = seed_profile(&pool, "user", None).await;
    let token = mint_token(user_id, "ada@digit88.com");

    let app = build_test_app(pool);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/submissions")
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from("{not valid json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Email domain gate
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn domain_gate_admits_configured_domain(pool: PgPool) {
    let user_id = seed_profile(&pool, "user", Some("Ada")).await;
    let token = mint_token(user_id, "Ada@DIGIT88.COM");

    let mut config = test_config();
    config.allowed_email_domains = vec!["digit88.com".to_string()];

    let app = build_test_app_with_config(pool, config);
    let response = send_json(
        app,
        Method::POST,
        "/api/v1/submissions",
        Some(&token),
        &valid_submission_body(),
    )
    .await;

    assert_eq!(
        response.status(),
        StatusCode::CREATED,
        "domain match is case-insensitive"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn domain_gate_rejects_other_domain_with_403(pool: PgPool) {
    let user_id = seed_profile(&pool, "user", Some("Eve")).await;
    let token = mint_token(user_id, "eve@gmail.com");

    let mut config = test_config();
    config.allowed_email_domains = vec!["digit88.com".to_string()];

    let app = build_test_app_with_config(pool.clone(), config);
    let response = send_json(
        app,
        Method::POST,
        "/api/v1/submissions",
        Some(&token),
        &valid_submission_body(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
    assert_eq!(
        json["error"],
        "Only @digit88.com accounts can submit prompts"
    );

    let own = PromptRepo::list_by_owner(&pool, user_id).await.unwrap();
    assert!(own.is_empty(), "gated submission must not be stored");
}

// ---------------------------------------------------------------------------
// Listing own submissions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_own_returns_only_callers_prompts(pool: PgPool) {
    let ada = seed_profile(&pool, "user", Some("Ada")).await;
    let moss = seed_profile(&pool, "user", Some("Moss")).await;
    let ada_token = mint_token(ada, "ada@digit88.com");
    let moss_token = mint_token(moss, "moss@digit88.com");

    let mut ada_body = valid_submission_body();
    ada_body["title"] = serde_json::json!("Ada's draft summarizer");
    let mut moss_body = valid_submission_body();
    moss_body["title"] = serde_json::json!("Moss's incident explainer");

    let app = build_test_app(pool.clone());
    let response = send_json(
        app.clone(),
        Method::POST,
        "/api/v1/submissions",
        Some(&ada_token),
        &ada_body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send_json(
        app.clone(),
        Method::POST,
        "/api/v1/submissions",
        Some(&moss_token),
        &moss_body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get_auth(app, "/api/v1/submissions", &ada_token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1, "Ada must see exactly her own submission");
    assert_eq!(rows[0]["title"], "Ada's draft summarizer");
    assert_eq!(rows[0]["status"], "pending");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_own_requires_auth(pool: PgPool) {
    let app = build_test_app(pool);
    let response = common::get(app, "/api/v1/submissions").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
