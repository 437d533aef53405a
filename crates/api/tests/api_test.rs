//! HTTP API tests driven through the router.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;

use account_service_lib::infra::Database;
use account_service_lib::repository::InMemoryStore;
use account_service_lib::AccountServices;
use api_lib::clients::IdentityProvider;
use api_lib::config::{ApiConfig, RetryPolicy};
use api_lib::middleware::handle_onboarding_panic;
use api_lib::routes::{apply_layers, create_router};
use api_lib::state::AppState;
use domain::messages;

const PRINCIPAL: &str = "2b7e1516-28ae-4d2a-a6f7-15889a09cf4f";
const UNKNOWN_PRINCIPAL: &str = "6a1d0a3e-5f0c-4c1b-9d7e-3b8e2f4a1c55";

fn test_state(store: &InMemoryStore, identity: Option<Arc<dyn IdentityProvider>>) -> AppState {
    let mut config = ApiConfig::default();
    config.identity.retry = RetryPolicy {
        max_attempts: 3,
        delay: Duration::ZERO,
    };

    AppState::new(
        AccountServices::in_memory(store),
        identity,
        Database::from_connection(DatabaseConnection::Disconnected),
        config,
    )
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

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn onboarding_body(role: &str, business_name: Option<&str>) -> Value {
    json!({
        "authUserId": PRINCIPAL,
        "role": role,
        "fullName": "Ana",
        "email": "ana@x.com",
        "phone": "555",
        "businessName": business_name,
        "businessDescription": "Consultorio dental",
    })
}

#[tokio::test]
async fn test_client_onboarding_succeeds() {
    let store = InMemoryStore::new();
    let app = create_router(test_state(&store, None));

    let (status, body) = send(app, json_request("POST", "/onboarding", onboarding_body("client", None))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));
    assert_eq!(store.users().len(), 1);
    assert_eq!(store.clients().len(), 1);
}

#[tokio::test]
async fn test_onboarding_missing_phone() {
    let store = InMemoryStore::new();
    let app = create_router(test_state(&store, None));

    let mut submission = onboarding_body("client", None);
    submission["phone"] = json!("");
    let (status, body) = send(app, json_request("POST", "/onboarding", submission)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Nombre, correo y teléfono son obligatorios" }));
    assert!(store.users().is_empty());
}

#[tokio::test]
async fn test_onboarding_malformed_json() {
    let store = InMemoryStore::new();
    let app = create_router(test_state(&store, None));

    let request = Request::builder()
        .method("POST")
        .uri("/onboarding")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": messages::MALFORMED_REQUEST }));
    assert!(store.users().is_empty());
}

#[tokio::test]
async fn test_staff_list_malformed_business_id() {
    let store = InMemoryStore::new();
    let app = create_router(test_state(&store, None));

    let (status, body) = send(app, get_request("/staff?businessId=not-a-uuid")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": messages::MALFORMED_REQUEST }));
}

#[tokio::test]
async fn test_unknown_profile() {
    let store = InMemoryStore::new();
    let app = create_router(test_state(&store, None));

    let (status, body) = send(app, get_request(&format!("/profile?authUserId={}", UNKNOWN_PRINCIPAL))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": messages::PROFILE_FETCH_FAILED }));
}

#[tokio::test]
async fn test_profile_without_principal() {
    let store = InMemoryStore::new();
    let app = create_router(test_state(&store, None));

    let (status, body) = send(app, get_request("/profile")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": messages::MISSING_PRINCIPAL }));
}

#[tokio::test]
async fn test_profile_update_then_read() {
    let store = InMemoryStore::new();
    let state = test_state(&store, None);

    let (status, _) = send(
        create_router(state.clone()),
        json_request("POST", "/onboarding", onboarding_body("client", None)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let update = json!({
        "authUserId": PRINCIPAL,
        "fullName": "Ana López",
        "email": "ana.lopez@x.com",
        "phone": "556",
    });
    let (status, body) = send(create_router(state.clone()), json_request("PUT", "/profile", update)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (status, body) = send(create_router(state), get_request(&format!("/profile?authUserId={}", PRINCIPAL))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "profile": { "name": "Ana López", "email": "ana.lopez@x.com", "phone": "556" } })
    );
}

#[tokio::test]
async fn test_profile_update_for_unknown_principal() {
    let store = InMemoryStore::new();
    let app = create_router(test_state(&store, None));

    let update = json!({
        "authUserId": UNKNOWN_PRINCIPAL,
        "fullName": "Ana",
        "email": "ana@x.com",
        "phone": "555",
    });
    let (status, body) = send(app, json_request("PUT", "/profile", update)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": messages::PROFILE_UPDATE_FAILED }));
    assert!(store.users().is_empty());
}

#[tokio::test]
async fn test_business_settings_round() {
    let store = InMemoryStore::new();
    let state = test_state(&store, None);

    send(
        create_router(state.clone()),
        json_request("POST", "/onboarding", onboarding_body("owner", None)),
    )
    .await;

    // No business yet: empty fields
    let (status, body) = send(create_router(state.clone()), get_request(&format!("/business?authUserId={}", PRINCIPAL))).await;
    assert_eq!(status, StatusCode::OK);
    let owner_id = body["ownerId"].as_i64().unwrap();
    assert_eq!(
        body["business"],
        json!({ "id": null, "name": "", "description": "", "logoUrl": "" })
    );

    let save = json!({
        "ownerId": owner_id,
        "businessName": "Clínica Sonrisas",
        "description": "Odontología general",
        "logoUrl": "",
    });
    let (status, body) = send(create_router(state.clone()), json_request("PUT", "/business", save)).await;
    assert_eq!(status, StatusCode::OK);
    let business_id = body["business"]["id"].clone();
    assert!(business_id.is_string());

    let save_again = json!({
        "ownerId": owner_id,
        "businessId": business_id,
        "businessName": "Clínica Sonrisas Centro",
        "description": "Odontología general",
        "logoUrl": "https://cdn.example.com/logo.png",
    });
    let (status, body) = send(create_router(state.clone()), json_request("PUT", "/business", save_again)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["business"]["id"], business_id);

    let (_, body) = send(create_router(state), get_request(&format!("/business?authUserId={}", PRINCIPAL))).await;
    assert_eq!(body["business"]["name"], "Clínica Sonrisas Centro");
    assert_eq!(body["business"]["logoUrl"], "https://cdn.example.com/logo.png");
    assert_eq!(store.businesses().len(), 1);
}

#[tokio::test]
async fn test_business_save_validation() {
    let store = InMemoryStore::new();
    let app = create_router(test_state(&store, None));

    let save = json!({
        "ownerId": 1,
        "businessName": "Clínica",
        "description": "Odontología general",
        "logoUrl": "cdn/logo.png",
    });
    let (status, body) = send(app, json_request("PUT", "/business", save)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": messages::INVALID_LOGO_URL }));
}

#[tokio::test]
async fn test_business_save_without_owner() {
    let store = InMemoryStore::new();
    let app = create_router(test_state(&store, None));

    let save = json!({
        "businessName": "Clínica",
        "description": "Odontología general",
        "logoUrl": "",
    });
    let (status, body) = send(app, json_request("PUT", "/business", save)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": messages::MISSING_SESSION_USER }));
}

#[tokio::test]
async fn test_staff_add_and_list() {
    let store = InMemoryStore::new();
    let state = test_state(&store, None);

    send(
        create_router(state.clone()),
        json_request("POST", "/onboarding", onboarding_body("owner", Some("Sonrisas"))),
    )
    .await;
    let business_id = store.businesses()[0].id;

    for name in ["Laura", "Diego"] {
        let add = json!({
            "businessId": business_id,
            "fullName": name,
            "email": format!("{}@empresa.com", name.to_lowercase()),
            "role": "Recepcionista",
            "phone": "55 1234 5678",
        });
        let (status, body) = send(create_router(state.clone()), json_request("POST", "/staff", add)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["staff"]["cargo"], "Recepcionista");
    }

    let uri = format!("/staff?businessId={}", business_id);
    let (status, body) = send(create_router(state.clone()), get_request(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = body["staff"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Laura", "Diego"]);

    let (status, body) = send(create_router(state), get_request(&format!("/staff?authUserId={}", PRINCIPAL))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["staff"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_staff_add_invalid_email() {
    let store = InMemoryStore::new();
    let app = create_router(test_state(&store, None));

    let add = json!({
        "businessId": uuid::Uuid::new_v4(),
        "fullName": "Laura",
        "email": "laura@empresa",
        "role": "Recepcionista",
        "phone": "55 1234 5678",
    });
    let (status, body) = send(app, json_request("POST", "/staff", add)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": messages::STAFF_EMAIL_INVALID }));
    assert!(store.staff().is_empty());
}

#[tokio::test]
async fn test_staff_list_without_filter() {
    let store = InMemoryStore::new();
    let app = create_router(test_state(&store, None));

    let (status, body) = send(app, get_request("/staff")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": messages::STAFF_BUSINESS_REQUIRED }));
}

#[tokio::test]
async fn test_health_reports_unreachable_database() {
    let store = InMemoryStore::new();
    let app = create_router(test_state(&store, None));

    let (status, body) = send(app, get_request("/health")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["services"]["database"]["status"], "unhealthy");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let store = InMemoryStore::new();
    let app = create_router(test_state(&store, None));

    let (status, body) = send(app, get_request("/api-docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/onboarding"].is_object());
}

async fn boom() -> &'static str {
    panic!("boom")
}

#[tokio::test]
async fn test_panic_becomes_generic_error() {
    let app = apply_layers(Router::new().route("/boom", get(boom)));

    let (status, body) = send(app, get_request("/boom")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": messages::REQUEST_FAILED }));
}

#[tokio::test]
async fn test_onboarding_panic_uses_onboarding_message() {
    let route = post(boom).layer(CatchPanicLayer::custom(handle_onboarding_panic));
    let app = apply_layers(Router::new().route("/onboarding", route));

    let request = json_request("POST", "/onboarding", json!({}));
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": messages::ONBOARDING_FAILED }));
}
