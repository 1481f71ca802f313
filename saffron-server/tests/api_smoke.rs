//! API 集成测试
//!
//! Drives the full router in-process through `tower::ServiceExt::oneshot`.
//! No network: the upsell provider is mocked and geocode points at a
//! closed port.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use saffron_server::api;
use saffron_server::core::{Config, ServerState};
use saffron_server::services::{GeocodeClient, UpsellProvider, UpsellSuggestion};
use saffron_server::settings::SettingsStorage;
use saffron_server::store::MemStore;

/// Canned upsell provider: suggests tiramisu unless the order is empty
struct CannedUpsell;

#[async_trait]
impl UpsellProvider for CannedUpsell {
    async fn recommend(&self, items_ordered: &[String]) -> UpsellSuggestion {
        if items_ordered.is_empty() {
            return UpsellSuggestion::fallback();
        }
        UpsellSuggestion {
            recommendation: "Tiramisu".to_string(),
            reason: "Popular after mains".to_string(),
            should_suggest: true,
        }
    }
}

/// Build a router over seeded fixtures and a temp settings store
///
/// The TempDir must stay alive for the duration of the test.
fn test_app() -> (Router, TempDir) {
    let dir = TempDir::new().unwrap();
    let config = Config::with_overrides(dir.path().to_string_lossy().to_string(), 0);

    let settings = SettingsStorage::open(dir.path().join("settings.redb")).unwrap();
    let geocode = GeocodeClient::new(
        reqwest::Client::new(),
        "http://127.0.0.1:1/geocode".to_string(),
        String::new(),
    );

    let state = ServerState::with_components(
        config,
        Arc::new(MemStore::seeded()),
        Arc::new(settings),
        Arc::new(CannedUpsell),
        Arc::new(geocode),
    );

    (api::router(state), dir)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn with_role(mut request: Request<Body>, role: &str) -> Request<Body> {
    request
        .headers_mut()
        .insert("x-staff-role", role.parse().unwrap());
    request
}

#[tokio::test]
async fn test_health_reports_fixtures_loaded() {
    let (app, _dir) = test_app();
    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["fixtures_loaded"], true);
}

#[tokio::test]
async fn test_menu_list_returns_seeded_items() {
    let (app, _dir) = test_app();
    let (status, body) = send(&app, get("/api/menu")).await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert!(items.iter().any(|i| i["id"] == "menu_ribeye"));
}

#[tokio::test]
async fn test_create_order_derives_totals() {
    let (app, _dir) = test_app();

    // Ribeye 18.50 + peppercorn sauce 4.00, qty 1
    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/orders",
            json!({
                "table_id": "table_1",
                "items": [{
                    "menu_item_id": "menu_ribeye",
                    "quantity": 1,
                    "addon_ids": ["addon_peppercorn"]
                }]
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totals"]["subtotal"], 22.50);
    assert_eq!(body["totals"]["total"], 22.50);
    assert_eq!(body["status"], "PENDING");

    // The stored order is retrievable with the same totals
    let id = body["id"].as_str().unwrap();
    let (status, fetched) = send(&app, get(&format!("/api/orders/{id}/totals"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["total"], 22.50);
}

#[tokio::test]
async fn test_order_discount_can_exceed_subtotal() {
    let (app, _dir) = test_app();

    // House red 5.50, discount 10.00: total goes negative, not clamped
    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/orders",
            json!({
                "order_type": "COLLECTION",
                "items": [{"menu_item_id": "menu_house_red", "quantity": 1}],
                "discount": 10.0
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totals"]["subtotal"], 5.50);
    assert_eq!(body["totals"]["total"], -4.50);
}

#[tokio::test]
async fn test_create_order_rejects_unknown_menu_item() {
    let (app, _dir) = test_app();

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/orders",
            json!({
                "order_type": "COLLECTION",
                "items": [{"menu_item_id": "menu_ghost", "quantity": 1}]
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");
}

#[tokio::test]
async fn test_create_order_rejects_foreign_addon() {
    let (app, _dir) = test_app();

    // Burrata belongs to the bruschetta, not the calamari
    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/orders",
            json!({
                "order_type": "COLLECTION",
                "items": [{
                    "menu_item_id": "menu_calamari",
                    "quantity": 1,
                    "addon_ids": ["addon_burrata"]
                }]
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
}

#[tokio::test]
async fn test_table_order_requires_table_id() {
    let (app, _dir) = test_app();

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/orders",
            json!({
                "items": [{"menu_item_id": "menu_tiramisu", "quantity": 1}]
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
}

#[tokio::test]
async fn test_team_routes_deny_basic_role() {
    let (app, _dir) = test_app();

    // No role header defaults to Basic
    let (status, body) = send(&app, get("/api/team")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "E2001");

    // Advanced is still short of Admin
    let (status, _) = send(&app, with_role(get("/api/team"), "ADVANCED")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_team_routes_allow_admin_role() {
    let (app, _dir) = test_app();

    let (status, body) = send(&app, with_role(get("/api/team"), "ADMIN")).await;
    assert_eq!(status, StatusCode::OK);
    let members = body.as_array().unwrap();
    assert!(members.iter().any(|m| m["role"] == "ADMIN"));
}

#[tokio::test]
async fn test_inventory_requires_advanced_role() {
    let (app, _dir) = test_app();

    let (status, _) = send(&app, get("/api/inventory")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&app, with_role(get("/api/inventory"), "ADVANCED")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_inventory_alerts_flag_low_and_warning_stock() {
    let (app, _dir) = test_app();

    let (status, body) = send(&app, with_role(get("/api/inventory/alerts"), "ADMIN")).await;

    assert_eq!(status, StatusCode::OK);
    let alerts = body.as_array().unwrap();
    assert!(!alerts.is_empty());
    // House red sits at 2.0 against a threshold of 5.0
    let red = alerts
        .iter()
        .find(|a| a["id"] == "inv_house_red")
        .expect("house red should be in alerts");
    assert_eq!(red["level"], "LOW");
    assert!(alerts.iter().all(|a| a["level"] != "NORMAL"));
}

#[tokio::test]
async fn test_upsell_returns_provider_suggestion() {
    let (app, _dir) = test_app();

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/upsell",
            json!({"itemsOrdered": ["Ribeye Steak"]}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recommendation"], "Tiramisu");
    assert_eq!(body["shouldSuggest"], true);
}

#[tokio::test]
async fn test_upsell_empty_order_falls_back() {
    let (app, _dir) = test_app();

    let (status, body) = send(
        &app,
        json_request(Method::POST, "/api/upsell", json!({"itemsOrdered": []})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shouldSuggest"], false);
    assert_eq!(body["recommendation"], "");
}

#[tokio::test]
async fn test_address_search_requires_query() {
    let (app, _dir) = test_app();

    let (status, body) = send(&app, get("/api/address/search?q=")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
}

#[tokio::test]
async fn test_address_search_maps_upstream_failure() {
    let (app, _dir) = test_app();

    // Geocode points at a closed port
    let (status, body) = send(&app, get("/api/address/search?q=borough+market")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "E9003");
}

#[tokio::test]
async fn test_settings_connections_round_trip() {
    let (app, _dir) = test_app();

    // Settings routes are Admin-gated
    let (status, _) = send(&app, get("/api/settings/connections")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        &app,
        with_role(
            json_request(
                Method::PUT,
                "/api/settings/connections/upsell",
                json!({"enabled": true, "api_key": "sk-test", "api_url": "http://localhost:3100"}),
            ),
            "ADMIN",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["enabled"], true);

    let (status, body) = send(
        &app,
        with_role(get("/api/settings/connections/upsell"), "ADMIN"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["api_key"], "sk-test");

    let (status, _) = send(
        &app,
        with_role(
            Request::builder()
                .method(Method::DELETE)
                .uri("/api/settings/connections/upsell")
                .body(Body::empty())
                .unwrap(),
            "ADMIN",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        with_role(get("/api/settings/connections/upsell"), "ADMIN"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_role_header_is_rejected_at_guard() {
    let (app, _dir) = test_app();

    // An unparseable role falls back to Basic and is denied on Admin routes
    let (status, _) = send(&app, with_role(get("/api/team"), "SUPERUSER")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
