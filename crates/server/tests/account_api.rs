use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::Service;

use service::account::repository::{mock::MockAccountRepository, AccountRepository};
use server::routes;
use server::startup::build_state;

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

fn build_app(repo: Arc<MockAccountRepository>, cfg: configs::AppConfig) -> Router {
    let repo: Arc<dyn AccountRepository> = repo;
    routes::build_router(build_state(repo, &cfg), cors())
}

fn seeded() -> Arc<MockAccountRepository> {
    let repo = Arc::new(MockAccountRepository::default());
    let acme = repo.insert_account("A100", "Acme", Some("gold"));
    repo.insert_contact(&acme, "Bob", true);
    repo.insert_contact(&acme, "Ann", false);
    repo
}

async fn post_account(app: &Router, body: Body, json_content: bool) -> anyhow::Result<(StatusCode, Value)> {
    let mut req = Request::builder().method("POST").uri("/services/account");
    if json_content {
        req = req.header("content-type", "application/json");
    }
    let resp = app.clone().call(req.body(body)?).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    Ok((status, serde_json::from_slice(&bytes)?))
}

fn json_body(v: Value) -> anyhow::Result<Body> {
    Ok(Body::from(serde_json::to_vec(&v)?))
}

#[tokio::test]
async fn test_health() -> anyhow::Result<()> {
    let app = build_app(seeded(), configs::AppConfig::default());
    let req = Request::builder().uri("/health").body(Body::empty())?;
    let resp = app.clone().call(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn test_known_account_with_contacts() -> anyhow::Result<()> {
    let app = build_app(seeded(), configs::AppConfig::default());
    let (status, body) = post_account(&app, json_body(json!({"accountNumber": "A100"}))?, true).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "returnCode": 200,
            "name": "Acme",
            "accountNumber": "A100",
            "myField": "gold",
            "isAwesome": true,
            "contacts": [
                {"name": "Bob", "isActive": true},
                {"name": "Ann", "isActive": false}
            ]
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_blank_account_number_is_400_envelope() -> anyhow::Result<()> {
    let app = build_app(seeded(), configs::AppConfig::default());
    let (status, body) = post_account(&app, json_body(json!({"accountNumber": ""}))?, true).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["returnCode"], 400);
    assert!(body["message"].is_string());
    assert!(body.get("name").is_none());
    assert!(body.get("contacts").is_none());
    Ok(())
}

#[tokio::test]
async fn test_missing_body_is_400_envelope() -> anyhow::Result<()> {
    let app = build_app(seeded(), configs::AppConfig::default());
    let (status, body) = post_account(&app, Body::empty(), false).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["returnCode"], 400);
    Ok(())
}

#[tokio::test]
async fn test_unknown_account_is_404_envelope() -> anyhow::Result<()> {
    let app = build_app(seeded(), configs::AppConfig::default());
    let (status, body) = post_account(&app, json_body(json!({"accountNumber": "ZZZ"}))?, true).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["returnCode"], 404);
    Ok(())
}

#[tokio::test]
async fn test_store_failure_respects_exposure_setting() -> anyhow::Result<()> {
    let repo = seeded();
    repo.fail_lookups("db down");

    let app = build_app(repo.clone(), configs::AppConfig::default());
    let (_, body) = post_account(&app, json_body(json!({"accountNumber": "A100"}))?, true).await?;
    assert_eq!(body, json!({"returnCode": 500, "message": "internal error"}));

    let mut cfg = configs::AppConfig::default();
    cfg.service.expose_internal_errors = true;
    let app = build_app(repo, cfg);
    let (_, body) = post_account(&app, json_body(json!({"accountNumber": "A100"}))?, true).await?;
    assert_eq!(body, json!({"returnCode": 500, "message": "db down"}));
    Ok(())
}

#[tokio::test]
async fn test_repeated_requests_identical() -> anyhow::Result<()> {
    let app = build_app(seeded(), configs::AppConfig::default());
    let (_, first) = post_account(&app, json_body(json!({"accountNumber": "A100"}))?, true).await?;
    let (_, second) = post_account(&app, json_body(json!({"accountNumber": "A100"}))?, true).await?;
    assert_eq!(first, second);
    Ok(())
}
