//! api-server: HTTP API for the shopping list and recipe collection.
//!
//! Serves CRUD endpoints over two independent in-memory stores:
//! - `/shopping-list` and `/shopping-list/:id` for `{id, name, checked}` items.
//! - `/recipes` and `/recipes/:id` for `{id, name, ingredients}` recipes.
//!
//! Both stores are built once at startup (seeded unless `SEED_DATA` is off)
//! and shared through the router state. Data lives only as long as the process.
//!
//! Run:
//! ```bash
//! # pretty logs (default); PORT optional
//! cargo run -p api-server
//!
//! # JSON logs, legacy 204 answer for recipe updates
//! LOG_FORMAT=json RECIPES_PUT_RESPONSE=empty cargo run -p api-server
//! ```
//!
//! Configuration: See `config.rs` for all environment variables.
//!

mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::http::HeaderValue;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use domain::{
    CoreError, IdGenerator, Recipe, RecipeStore, Record, RecordId, Schema, ShoppingItem,
    ShoppingListStore,
};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

/// Random v4 UUIDs as record ids.
struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[derive(Clone)]
struct AppState {
    shopping: Arc<ShoppingListStore<UuidIdGenerator>>,
    recipes: Arc<RecipeStore<UuidIdGenerator>>,
    recipes_put_response: config::UpdateResponse,
}

impl AppState {
    fn new(seed_data: bool, recipes_put_response: config::UpdateResponse) -> Self {
        let (shopping, recipes) = if seed_data {
            (
                ShoppingListStore::seeded(UuidIdGenerator),
                RecipeStore::seeded(UuidIdGenerator),
            )
        } else {
            (
                ShoppingListStore::new(UuidIdGenerator),
                RecipeStore::new(UuidIdGenerator),
            )
        };
        Self {
            shopping: Arc::new(shopping),
            recipes: Arc::new(recipes),
            recipes_put_response,
        }
    }
}

#[tokio::main]
async fn main() {
    // Load and validate config first (fail fast on misconfiguration)
    let cfg = match config::Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&cfg);
    cfg.warn_if_legacy();

    let state = AppState::new(cfg.seed_data, cfg.recipes_put_response);
    info!(
        shopping_items = state.shopping.len(),
        recipes = state.recipes.len(),
        "stores ready"
    );

    // Request ID header name
    let x_request_id = axum::http::HeaderName::from_static("x-request-id");

    let mut app = build_router(state)
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }),
        )
        .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid));

    // CORS - already validated in Config::from_env()
    let cors = if cfg.cors_allow_origin == HeaderValue::from_static("*") {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list([cfg.cors_allow_origin]))
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([axum::http::header::CONTENT_TYPE])
    };
    app = app.layer(cors);

    let addr: SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!(%addr, err = %e, "failed to bind");
            std::process::exit(1);
        }
    };
    info!(%addr, "api-server listening");
    if let Err(e) = axum::serve(listener, app).await {
        error!(err = %e, "server error");
        std::process::exit(1);
    }
}

fn init_tracing(cfg: &config::Config) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);
    match cfg.log_format {
        config::LogFormat::Json => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(fmt::time::SystemTime)
                        .with_writer(std::io::stdout),
                )
                .init();
        }
        config::LogFormat::Pretty => {
            registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_target(true)
                        .with_writer(std::io::stdout),
                )
                .init();
        }
    }
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/shopping-list",
            get(list_shopping_items).post(create_shopping_item),
        )
        .route(
            "/shopping-list/:id",
            get(get_shopping_item)
                .put(update_shopping_item)
                .delete(delete_shopping_item),
        )
        .route("/recipes", get(list_recipes).post(create_recipe))
        .route(
            "/recipes/:id",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
        .with_state(state)
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Deserialize)]
struct ShoppingItemReq {
    #[serde(default)]
    id: Option<String>,
    name: String,
    checked: bool,
}

#[derive(Deserialize)]
struct RecipeReq {
    #[serde(default)]
    id: Option<String>,
    name: String,
    ingredients: Vec<String>,
}

#[derive(Serialize)]
struct ShoppingItemOut {
    id: String,
    name: String,
    checked: bool,
}

#[derive(Serialize)]
struct RecipeOut {
    id: String,
    name: String,
    ingredients: Vec<String>,
}

fn shopping_item_to_out(record: Record<ShoppingItem>) -> ShoppingItemOut {
    ShoppingItemOut {
        id: record.id.as_str().to_string(),
        name: record.fields.name,
        checked: record.fields.checked,
    }
}

fn recipe_to_out(record: Record<Recipe>) -> RecipeOut {
    RecipeOut {
        id: record.id.as_str().to_string(),
        name: record.fields.name,
        ingredients: record.fields.ingredients,
    }
}

impl TryFrom<ShoppingItemReq> for ShoppingItem {
    type Error = CoreError;

    fn try_from(req: ShoppingItemReq) -> Result<Self, Self::Error> {
        ShoppingItem::new(req.name, req.checked)
    }
}

impl TryFrom<RecipeReq> for Recipe {
    type Error = CoreError;

    fn try_from(req: RecipeReq) -> Result<Self, Self::Error> {
        Recipe::new(req.name, req.ingredients)
    }
}

// ============================================================================
// Error mapping
// ============================================================================

fn invalid_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(http_common::json_error_with_message(
            "invalid_request",
            message,
        )),
    )
        .into_response()
}

/// Map a store error to its HTTP response. Only this adapter knows status codes.
fn core_error_response(kind: &str, err: CoreError) -> Response {
    match err {
        CoreError::InvalidInput(msg) => {
            warn!(kind, reason = %msg, "rejected input");
            invalid_request(&msg)
        }
        CoreError::NotFound(id) => {
            warn!(kind, id = %id, "not found");
            (
                StatusCode::NOT_FOUND,
                Json(http_common::json_err("not_found")),
            )
                .into_response()
        }
    }
}

/// Unwrap a JSON body, answering 400 for syntax errors, missing or mistyped
/// fields and a missing JSON content type alike.
fn json_body<T>(kind: &str, body: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    match body {
        Ok(Json(b)) => Ok(b),
        Err(rejection) => {
            let reason = rejection.body_text();
            warn!(kind, %reason, "rejected body");
            Err(invalid_request(&reason))
        }
    }
}

fn path_id(kind: &str, raw: String) -> Result<RecordId, Response> {
    RecordId::new(raw).map_err(|e| core_error_response(kind, e))
}

fn check_body_id(kind: &str, id: &RecordId, body_id: Option<&str>) -> Result<(), Response> {
    if http_common::body_id_matches(id.as_str(), body_id) {
        return Ok(());
    }
    warn!(kind, id = %id, body_id = ?body_id, "body id does not match path");
    Err(invalid_request("id in body does not match id in path"))
}

// ============================================================================
// Handlers
// ============================================================================

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

async fn list_shopping_items(State(state): State<AppState>) -> impl IntoResponse {
    let items: Vec<ShoppingItemOut> = state
        .shopping
        .list_all()
        .into_iter()
        .map(shopping_item_to_out)
        .collect();
    (StatusCode::OK, Json(items))
}

async fn get_shopping_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    const KIND: &str = ShoppingItem::KIND;
    let id = match path_id(KIND, id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    match state.shopping.get(&id) {
        Ok(record) => (StatusCode::OK, Json(shopping_item_to_out(record))).into_response(),
        Err(e) => core_error_response(KIND, e),
    }
}

async fn create_shopping_item(
    State(state): State<AppState>,
    body: Result<Json<ShoppingItemReq>, JsonRejection>,
) -> impl IntoResponse {
    const KIND: &str = ShoppingItem::KIND;
    let req = match json_body(KIND, body) {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    let fields = match ShoppingItem::try_from(req) {
        Ok(f) => f,
        Err(e) => return core_error_response(KIND, e),
    };
    match state.shopping.add(fields) {
        Ok(record) => {
            info!(kind = KIND, id = %record.id, "create ok");
            (StatusCode::CREATED, Json(shopping_item_to_out(record))).into_response()
        }
        Err(e) => core_error_response(KIND, e),
    }
}

async fn update_shopping_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ShoppingItemReq>, JsonRejection>,
) -> impl IntoResponse {
    const KIND: &str = ShoppingItem::KIND;
    let id = match path_id(KIND, id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let req = match json_body(KIND, body) {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    if let Err(resp) = check_body_id(KIND, &id, req.id.as_deref()) {
        return resp;
    }
    let fields = match ShoppingItem::try_from(req) {
        Ok(f) => f,
        Err(e) => return core_error_response(KIND, e),
    };
    match state.shopping.update(&id, fields) {
        Ok(record) => {
            info!(kind = KIND, id = %record.id, "update ok");
            (StatusCode::OK, Json(shopping_item_to_out(record))).into_response()
        }
        Err(e) => core_error_response(KIND, e),
    }
}

async fn delete_shopping_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    const KIND: &str = ShoppingItem::KIND;
    let id = match path_id(KIND, id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    match state.shopping.delete(&id) {
        Ok(()) => {
            info!(kind = KIND, id = %id, "delete ok");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => core_error_response(KIND, e),
    }
}

async fn list_recipes(State(state): State<AppState>) -> impl IntoResponse {
    let recipes: Vec<RecipeOut> = state
        .recipes
        .list_all()
        .into_iter()
        .map(recipe_to_out)
        .collect();
    (StatusCode::OK, Json(recipes))
}

async fn get_recipe(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    const KIND: &str = Recipe::KIND;
    let id = match path_id(KIND, id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    match state.recipes.get(&id) {
        Ok(record) => (StatusCode::OK, Json(recipe_to_out(record))).into_response(),
        Err(e) => core_error_response(KIND, e),
    }
}

async fn create_recipe(
    State(state): State<AppState>,
    body: Result<Json<RecipeReq>, JsonRejection>,
) -> impl IntoResponse {
    const KIND: &str = Recipe::KIND;
    let req = match json_body(KIND, body) {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    let fields = match Recipe::try_from(req) {
        Ok(f) => f,
        Err(e) => return core_error_response(KIND, e),
    };
    match state.recipes.add(fields) {
        Ok(record) => {
            info!(kind = KIND, id = %record.id, "create ok");
            (StatusCode::CREATED, Json(recipe_to_out(record))).into_response()
        }
        Err(e) => core_error_response(KIND, e),
    }
}

async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<RecipeReq>, JsonRejection>,
) -> impl IntoResponse {
    const KIND: &str = Recipe::KIND;
    let id = match path_id(KIND, id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let req = match json_body(KIND, body) {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    if let Err(resp) = check_body_id(KIND, &id, req.id.as_deref()) {
        return resp;
    }
    let fields = match Recipe::try_from(req) {
        Ok(f) => f,
        Err(e) => return core_error_response(KIND, e),
    };
    match state.recipes.update(&id, fields) {
        Ok(record) => {
            info!(kind = KIND, id = %record.id, "update ok");
            match state.recipes_put_response {
                config::UpdateResponse::Record => {
                    (StatusCode::OK, Json(recipe_to_out(record))).into_response()
                }
                config::UpdateResponse::Empty => StatusCode::NO_CONTENT.into_response(),
            }
        }
        Err(e) => core_error_response(KIND, e),
    }
}

async fn delete_recipe(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    const KIND: &str = Recipe::KIND;
    let id = match path_id(KIND, id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    match state.recipes.delete(&id) {
        Ok(()) => {
            info!(kind = KIND, id = %id, "delete ok");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => core_error_response(KIND, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn app() -> Router {
        build_router(AppState::new(true, config::UpdateResponse::Record))
    }

    async fn send(
        router: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(v) => builder
                .header("content-type", "application/json")
                .body(Body::from(v.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let resp = router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn first_id(router: &Router, uri: &str) -> String {
        let (_, list) = send(router, "GET", uri, None).await;
        list[0]["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (status, body) = send(&app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn shopping_list_is_seeded() {
        let (status, body) = send(&app(), "GET", "/shopping-list", None).await;
        assert_eq!(status, StatusCode::OK);
        let items = body.as_array().unwrap();
        assert!(!items.is_empty());
        for item in items {
            assert!(item["id"].is_string());
            assert!(item["name"].is_string());
            assert!(item["checked"].is_boolean());
        }
    }

    #[tokio::test]
    async fn create_shopping_item_flow() {
        let router = app();
        let (status, created) = send(
            &router,
            "POST",
            "/shopping-list",
            Some(json!({"name": "coffee", "checked": false})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["id"].as_str().unwrap().to_string();
        assert!(!id.is_empty());
        assert_eq!(created, json!({"id": id, "name": "coffee", "checked": false}));

        let (_, list) = send(&router, "GET", "/shopping-list", None).await;
        let matches: Vec<_> = list
            .as_array()
            .unwrap()
            .iter()
            .filter(|i| i["id"] == json!(id))
            .collect();
        assert_eq!(matches, vec![&created]);
        assert_eq!(list.as_array().unwrap().last(), Some(&created));
    }

    #[tokio::test]
    async fn created_ids_are_distinct() {
        let router = app();
        let mut ids = std::collections::HashSet::new();
        for i in 0..20 {
            let (_, created) = send(
                &router,
                "POST",
                "/shopping-list",
                Some(json!({"name": format!("item {}", i), "checked": false})),
            )
            .await;
            ids.insert(created["id"].as_str().unwrap().to_string());
        }
        assert_eq!(ids.len(), 20);
    }

    #[tokio::test]
    async fn create_rejects_bad_payloads() {
        let router = app();
        let bad_bodies = [
            json!({"name": "coffee"}),
            json!({"checked": true}),
            json!({"name": 5, "checked": false}),
            json!({"name": "coffee", "checked": "no"}),
            json!({"name": "   ", "checked": false}),
        ];
        for body in bad_bodies {
            let (status, err) = send(&router, "POST", "/shopping-list", Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(err["error"]["code"], "invalid_request");
        }

        // Not JSON at all
        let req = Request::builder()
            .method("POST")
            .uri("/shopping-list")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let resp = router.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        // Valid JSON without a content type
        let req = Request::builder()
            .method("POST")
            .uri("/shopping-list")
            .body(Body::from(json!({"name": "coffee", "checked": false}).to_string()))
            .unwrap();
        let resp = router.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let err: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(err["error"]["code"], "invalid_request");

        // Nothing was added
        let (_, list) = send(&router, "GET", "/shopping-list", None).await;
        assert_eq!(list.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn update_shopping_item_returns_record() {
        let router = app();
        let id = first_id(&router, "/shopping-list").await;

        let (status, body) = send(
            &router,
            "PUT",
            &format!("/shopping-list/{}", id),
            Some(json!({"id": id, "name": "oat milk", "checked": true})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id": id, "name": "oat milk", "checked": true}));

        // Position is kept
        assert_eq!(first_id(&router, "/shopping-list").await, id);
    }

    #[tokio::test]
    async fn update_unknown_or_mismatched_id() {
        let router = app();
        let (status, body) = send(
            &router,
            "PUT",
            "/shopping-list/does-not-exist",
            Some(json!({"name": "tea", "checked": false})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "not_found");

        let id = first_id(&router, "/shopping-list").await;
        let (status, _) = send(
            &router,
            "PUT",
            &format!("/shopping-list/{}", id),
            Some(json!({"id": "someone-else", "name": "tea", "checked": false})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (_, item) = send(&router, "GET", &format!("/shopping-list/{}", id), None).await;
        assert_ne!(item["name"], "tea");
    }

    #[tokio::test]
    async fn delete_shopping_item_flow() {
        let router = app();
        let id = first_id(&router, "/shopping-list").await;
        let uri = format!("/shopping-list/{}", id);

        let (status, body) = send(&router, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (_, list) = send(&router, "GET", "/shopping-list", None).await;
        assert!(list.as_array().unwrap().iter().all(|i| i["id"] != json!(id)));

        let (status, _) = send(&router, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(
            &router,
            "PUT",
            &uri,
            Some(json!({"name": "milk", "checked": false})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn recipes_are_seeded_with_expected_keys() {
        let (status, body) = send(&app(), "GET", "/recipes", None).await;
        assert_eq!(status, StatusCode::OK);
        let recipes = body.as_array().unwrap();
        assert!(!recipes.is_empty());
        for recipe in recipes {
            let keys: Vec<_> = recipe.as_object().unwrap().keys().cloned().collect();
            assert_eq!(keys.len(), 3);
            assert!(recipe["id"].is_string());
            assert!(recipe["name"].is_string());
            assert!(recipe["ingredients"].is_array());
        }
    }

    #[tokio::test]
    async fn create_and_get_recipe() {
        let router = app();
        let (status, created) = send(
            &router,
            "POST",
            "/recipes",
            Some(json!({"name": "toast", "ingredients": ["bread", "butter"]})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["id"].as_str().unwrap().to_string();

        let (status, fetched) = send(&router, "GET", &format!("/recipes/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, _) = send(&router, "GET", "/recipes/missing", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            &router,
            "POST",
            "/recipes",
            Some(json!({"name": "toast", "ingredients": ["bread", ""]})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_recipe_to_hot_chocolate() {
        let router = app();
        let id = first_id(&router, "/recipes").await;
        let fields = json!({
            "name": "hot chocolate",
            "ingredients": ["mountain spring water", "costa rican cocoa", "cinnamon"],
        });

        let (status, body) = send(&router, "PUT", &format!("/recipes/{}", id), Some(fields)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "id": id,
                "name": "hot chocolate",
                "ingredients": ["mountain spring water", "costa rican cocoa", "cinnamon"],
            })
        );
    }

    #[tokio::test]
    async fn update_recipe_unknown_or_mismatched_id() {
        let router = app();
        let (status, body) = send(
            &router,
            "PUT",
            "/recipes/does-not-exist",
            Some(json!({"id": null, "name": "tea", "ingredients": ["tea"]})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "not_found");

        let id = first_id(&router, "/recipes").await;
        let uri = format!("/recipes/{}", id);
        let (status, body) = send(
            &router,
            "PUT",
            &uri,
            Some(json!({"id": "someone-else", "name": "tea", "ingredients": ["tea"]})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "invalid_request");
        let (_, recipe) = send(&router, "GET", &uri, None).await;
        assert_ne!(recipe["name"], "tea");
    }

    #[tokio::test]
    async fn legacy_recipe_update_answers_no_content() {
        let router = build_router(AppState::new(true, config::UpdateResponse::Empty));
        let id = first_id(&router, "/recipes").await;
        let uri = format!("/recipes/{}", id);

        let (status, body) = send(
            &router,
            "PUT",
            &uri,
            Some(json!({"id": id, "name": "iced tea", "ingredients": ["tea", "ice"]})),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (_, fetched) = send(&router, "GET", &uri, None).await;
        assert_eq!(fetched["name"], "iced tea");
        assert_eq!(fetched["ingredients"], json!(["tea", "ice"]));
    }

    #[tokio::test]
    async fn delete_recipe_flow() {
        let router = app();
        let id = first_id(&router, "/recipes").await;
        let uri = format!("/recipes/{}", id);

        let (status, _) = send(&router, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (_, list) = send(&router, "GET", "/recipes", None).await;
        assert!(list.as_array().unwrap().iter().all(|r| r["id"] != json!(id)));

        let (status, body) = send(&router, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "not_found");
    }

    #[tokio::test]
    async fn unseeded_stores_start_empty() {
        let router = build_router(AppState::new(false, config::UpdateResponse::Record));
        let (_, list) = send(&router, "GET", "/shopping-list", None).await;
        assert_eq!(list, json!([]));
        let (_, list) = send(&router, "GET", "/recipes", None).await;
        assert_eq!(list, json!([]));
    }
}
