use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use hp_content::PlayerRecord;
use hp_core::{DamageCategory, DefenseKind};
use hp_runtime::repository::Result as RepoResult;
use hp_runtime::{HpService, InMemoryPlayerRepository, PlayerRepository, RepositoryError};
use hp_server::{AppState, build_router};
use serde_json::{Value, json};
use tower::ServiceExt;

/// In-memory store that counts writes.
struct CountingRepo {
    inner: InMemoryPlayerRepository,
    saves: AtomicUsize,
}

#[async_trait]
impl PlayerRepository for CountingRepo {
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<PlayerRecord>> {
        self.inner.find_by_name(name).await
    }

    async fn save(&self, record: &PlayerRecord) -> RepoResult<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(record).await
    }

    async fn list_names(&self) -> RepoResult<Vec<String>> {
        self.inner.list_names().await
    }
}

struct FailingRepo;

#[async_trait]
impl PlayerRepository for FailingRepo {
    async fn find_by_name(&self, _name: &str) -> RepoResult<Option<PlayerRecord>> {
        Err(RepositoryError::Io(std::io::Error::other("disk on fire")))
    }

    async fn save(&self, _record: &PlayerRecord) -> RepoResult<()> {
        Err(RepositoryError::LockPoisoned)
    }

    async fn list_names(&self) -> RepoResult<Vec<String>> {
        Ok(Vec::new())
    }
}

fn app_with(players: impl IntoIterator<Item = PlayerRecord>) -> (Router, Arc<CountingRepo>) {
    let repo = Arc::new(CountingRepo {
        inner: InMemoryPlayerRepository::with_players(players),
        saves: AtomicUsize::new(0),
    });
    let app = build_router(AppState::new(HpService::new(repo.clone())));
    (app, repo)
}

async fn post(app: Router, path: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::post(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn error_fields(body: &Value) -> Vec<&str> {
    body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect()
}

// ============================================================================
// Rule scenarios
// ============================================================================

#[tokio::test]
async fn damage_without_defense() {
    let (app, repo) = app_with([PlayerRecord::new("Briv", 20)]);

    let (status, body) = post(
        app,
        "/damage",
        json!({ "playerName": "Briv", "amount": 10, "damageType": "BLUDGEONING" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "currentHp": 10, "tempHp": 0 }));
    assert_eq!(repo.saves.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn damage_with_resistance() {
    let (app, _) = app_with([
        PlayerRecord::new("Briv", 20).with_defense(DamageCategory::Fire, DefenseKind::Resistance)
    ]);

    let (status, body) = post(
        app,
        "/damage",
        json!({ "playerName": "Briv", "amount": 10, "damageType": "FIRE" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currentHp"], 15);
}

#[tokio::test]
async fn damage_with_immunity() {
    let (app, repo) = app_with([
        PlayerRecord::new("Briv", 20).with_defense(DamageCategory::Fire, DefenseKind::Immunity)
    ]);

    let (status, body) = post(
        app,
        "/damage",
        json!({ "playerName": "Briv", "amount": 10, "damageType": "FIRE" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currentHp"], 20);
    assert_eq!(repo.saves.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn damage_consumes_temp_hp_first() {
    let (app, _) = app_with([PlayerRecord::new("Briv", 20).with_temp_hp(5)]);

    let (status, body) = post(
        app,
        "/damage",
        json!({ "playerName": "Briv", "amount": 10, "damageType": "PIERCING" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "currentHp": 15, "tempHp": 0 }));
}

#[tokio::test]
async fn heal_caps_at_max() {
    let (app, _) = app_with([PlayerRecord::new("Briv", 20).with_current_hp(18)]);

    let (status, body) = post(app, "/heal", json!({ "playerName": "Briv", "amount": 5 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "currentHp": 20 }));
}

#[tokio::test]
async fn temp_hp_does_not_stack_or_write() {
    let (app, repo) = app_with([PlayerRecord::new("Briv", 20).with_temp_hp(5)]);

    let (status, body) = post(app, "/tempHp", json!({ "playerName": "Briv", "amount": 5 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "tempHp": 5, "currentHp": 20 }));
    assert_eq!(repo.saves.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn temp_hp_lands_on_unshielded_player() {
    let (app, repo) = app_with([PlayerRecord::new("Briv", 20).with_current_hp(12)]);

    let (status, body) = post(app, "/tempHp", json!({ "playerName": "Briv", "amount": 8 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "tempHp": 8, "currentHp": 12 }));
    assert_eq!(repo.saves.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn changes_are_visible_to_later_requests() {
    let (app, _) = app_with([PlayerRecord::new("Briv", 25)]);

    post(
        app.clone(),
        "/damage",
        json!({ "playerName": "Briv", "amount": 7, "damageType": "cold" }),
    )
    .await;
    post(app.clone(), "/tempHp", json!({ "playerName": "Briv", "amount": 4 })).await;

    let (status, body) = send(
        app,
        Request::get("/players/Briv").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Briv");
    assert_eq!(body["maxHp"], 25);
    assert_eq!(body["currentHp"], 18);
    assert_eq!(body["tempHp"], 4);
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn unknown_player_is_404() {
    let (app, _) = app_with([PlayerRecord::new("Briv", 20)]);

    let (status, body) = post(app, "/heal", json!({ "playerName": "Nobody", "amount": 1 })).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Player not found" }));
}

#[tokio::test]
async fn unknown_player_lookup_is_404() {
    let (app, _) = app_with([PlayerRecord::new("Briv", 20)]);

    let (status, _) = send(
        app,
        Request::get("/players/Nobody").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn negative_amount_is_400() {
    let (app, repo) = app_with([PlayerRecord::new("Briv", 20)]);

    let (status, body) = post(app, "/heal", json!({ "playerName": "Briv", "amount": -5 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid request body.");
    assert_eq!(error_fields(&body), ["amount"]);
    assert_eq!(repo.saves.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unknown_damage_type_is_400() {
    let (app, _) = app_with([PlayerRecord::new("Briv", 20)]);

    let (status, body) = post(
        app,
        "/damage",
        json!({ "playerName": "Briv", "amount": 10, "damageType": "InvalidType" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&body), ["damageType"]);
}

#[tokio::test]
async fn missing_fields_are_all_reported() {
    let (app, _) = app_with([PlayerRecord::new("Briv", 20)]);

    let (status, body) = post(app, "/damage", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&body), ["playerName", "amount", "damageType"]);
}

#[tokio::test]
async fn validation_runs_before_lookup() {
    let (app, _) = app_with([PlayerRecord::new("Briv", 20)]);

    let (status, _) = post(app, "/tempHp", json!({ "playerName": "Nobody", "amount": "x" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_json_is_400() {
    let (app, _) = app_with([PlayerRecord::new("Briv", 20)]);

    let (status, body) = send(
        app,
        Request::post("/heal")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{ \"playerName\": "))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&body), ["body"]);
}

#[tokio::test]
async fn missing_content_type_is_400() {
    let (app, _) = app_with([PlayerRecord::new("Briv", 20)]);

    let (status, body) = send(
        app,
        Request::post("/heal")
            .body(Body::from(r#"{ "playerName": "Briv", "amount": 1 }"#))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&body), ["body"]);
}

#[tokio::test]
async fn store_failure_is_500_without_details() {
    let app = build_router(AppState::new(HpService::new(Arc::new(FailingRepo))));

    let (status, body) = post(app, "/heal", json!({ "playerName": "Briv", "amount": 1 })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Internal server error" }));
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _) = app_with(Vec::<PlayerRecord>::new());

    let (status, body) = send(app, Request::get("/health").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn whitespace_player_name_is_looked_up_not_rejected() {
    let (app, _) = app_with([PlayerRecord::new("Briv", 25)]);

    let (status, body) = post(app, "/heal", json!({ "playerName": "  ", "amount": 1 })).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Player not found" }));
}

// ============================================================================
// API docs
// ============================================================================

#[tokio::test]
async fn openapi_document_lists_every_endpoint() {
    let (app, _) = app_with(Vec::<PlayerRecord>::new());

    let (status, body) = send(
        app,
        Request::get("/api-docs/openapi.json")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Player HP Management API");
    let paths = body["paths"].as_object().unwrap();
    for path in ["/damage", "/heal", "/tempHp", "/players/{name}", "/health"] {
        assert!(paths.contains_key(path), "missing {path}");
    }
    assert!(body["paths"]["/damage"]["post"]["requestBody"].is_object());
    let schemas = body["components"]["schemas"].as_object().unwrap();
    for schema in ["DamageRequest", "DamageResponse", "ErrorBody", "FieldError"] {
        assert!(schemas.contains_key(schema), "missing {schema}");
    }
}

#[tokio::test]
async fn root_redirects_to_swagger_ui() {
    let (app, _) = app_with(Vec::<PlayerRecord>::new());

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/swagger");
}

#[tokio::test]
async fn swagger_ui_is_served() {
    let (app, _) = app_with(Vec::<PlayerRecord>::new());

    let response = app
        .oneshot(Request::get("/swagger/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
