use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use logistics_dashboard::config::EnvironmentConfig;
use logistics_dashboard::{create_app, AppState};

async fn create_test_app() -> Router {
    create_app(AppState::seeded(EnvironmentConfig::without_delays()).await)
}

async fn create_auth_required_app() -> Router {
    let config = EnvironmentConfig {
        auth_required: true,
        ..EnvironmentConfig::without_delays()
    };
    create_app(AppState::seeded(config).await)
}

async fn send(app: &Router, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None, None).await
}

fn ids(body: &Value) -> Vec<&str> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap())
        .collect()
}

async fn login(app: &Router, username: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["data"]["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_list_packages_has_envelope_and_timestamp() {
    let app = create_test_app().await;
    let (status, body) = get(&app, "/api/packages").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 8);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_get_package_by_id() {
    let app = create_test_app().await;
    let (status, body) = get(&app, "/api/packages/pkg-001").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], "pkg-001");
    assert_eq!(body["data"]["trackingNumber"], "LOG-2024-001");
}

#[tokio::test]
async fn test_get_missing_package_is_404() {
    let app = create_test_app().await;
    let (status, body) = get(&app, "/api/packages/does-not-exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Paquete no encontrado");
}

#[tokio::test]
async fn test_put_status_is_visible_to_next_get() {
    let app = create_test_app().await;
    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/packages/pkg-002",
        None,
        Some(json!({ "status": "entregado" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "entregado");
    assert_eq!(body["message"], "Paquete actualizado correctamente");

    let (_, body) = get(&app, "/api/packages/pkg-002").await;
    assert_eq!(body["data"]["status"], "entregado");
}

#[tokio::test]
async fn test_put_on_missing_package_is_404() {
    let app = create_test_app().await;
    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/packages/pkg-404",
        None,
        Some(json!({ "status": "entregado" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_malformed_body_uses_error_envelope() {
    let app = create_test_app().await;
    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/packages/pkg-002",
        None,
        Some(json!({ "status": "perdido" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().starts_with("Cuerpo JSON inválido"));
}

#[tokio::test]
async fn test_routes_for_seed_driver() {
    let app = create_test_app().await;
    let (status, body) = get(&app, "/api/routes?assignedDriver=conductor-001").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["route-001", "route-002"]);
    assert_eq!(body["data"][1]["status"], "pausada");
}

#[tokio::test]
async fn test_package_list_filters() {
    let app = create_test_app().await;

    let (status, body) = get(&app, "/api/packages?status=entregado").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["pkg-007", "pkg-008"]);

    let (status, body) = get(&app, "/api/packages?assignedTo=conductor-001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 7);
    assert!(!ids(&body).contains(&"pkg-001"));

    let (_, body) = get(&app, "/api/packages?status=en_transito&assignedTo=conductor-001").await;
    assert_eq!(ids(&body), vec!["pkg-002", "pkg-003", "pkg-004", "pkg-005", "pkg-006"]);

    let (_, body) = get(&app, "/api/packages?assignedTo=conductor-999").await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_route_status_filter_accepts_alias() {
    let app = create_test_app().await;

    let (status, body) = get(&app, "/api/routes?status=pausada").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["route-002"]);

    let (_, body) = get(&app, "/api/routes?status=paused").await;
    assert_eq!(ids(&body), vec!["route-002"]);

    let (_, body) = get(&app, "/api/routes?status=activa&assignedDriver=conductor-001").await;
    assert_eq!(ids(&body), vec!["route-001"]);
}

#[tokio::test]
async fn test_unknown_filter_token_is_400() {
    let app = create_test_app().await;

    for uri in ["/api/packages?status=bogus", "/api/routes?status=bogus"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().starts_with("Parámetros inválidos"));
    }
}

#[tokio::test]
async fn test_get_route_and_missing_route() {
    let app = create_test_app().await;

    let (status, body) = get(&app, "/api/routes/route-001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["packages"].as_array().unwrap().len(), 5);

    let (status, body) = get(&app, "/api/routes/route-999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Ruta no encontrada");
}

#[tokio::test]
async fn test_login_success_and_invalid_credentials() {
    let app = create_test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "username": "admin", "password": "admin" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["user"]["role"], "admin");
    assert_eq!(body["data"]["tokenType"], "Bearer");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "username": "admin", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Credenciales inválidas");
}

#[tokio::test]
async fn test_login_with_out_of_range_token_ttl_is_500() {
    let config = EnvironmentConfig {
        jwt_expiration: u64::MAX,
        ..EnvironmentConfig::without_delays()
    };
    let app = create_app(AppState::seeded(config).await);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "username": "admin", "password": "admin" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_me_requires_session() {
    let app = create_test_app().await;

    let (status, _) = get(&app, "/api/auth/me").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = login(&app, "conductor", "conductor").await;
    let (status, body) = send(&app, Method::GET, "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], "conductor-001");
}

#[tokio::test]
async fn test_invalid_token_is_rejected() {
    let app = create_test_app().await;
    let (status, body) = send(&app, Method::GET, "/api/packages", Some("no.es.valido"), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_auth_required_rejects_anonymous() {
    let app = create_auth_required_app().await;

    let (status, _) = get(&app, "/api/packages").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Login y documentación siguen siendo públicos
    let (status, _) = get(&app, "/api/swagger").await;
    assert_eq!(status, StatusCode::OK);
    let token = login(&app, "admin", "admin").await;
    let (status, body) = send(&app, Method::GET, "/api/packages", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_driver_is_scoped_to_own_packages() {
    let app = create_test_app().await;
    let token = login(&app, "conductor", "conductor").await;

    let (status, body) = send(&app, Method::GET, "/api/packages", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let packages = body["data"].as_array().unwrap();
    assert_eq!(packages.len(), 7);
    assert!(packages.iter().all(|p| p["assignedTo"] == "conductor-001"));

    // pkg-001 no tiene conductor asignado
    let (status, _) = send(&app, Method::GET, "/api/packages/pkg-001", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_driver_can_deliver_but_not_edit_or_delete() {
    let app = create_test_app().await;
    let token = login(&app, "conductor", "conductor").await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/packages/pkg-003",
        Some(&token),
        Some(json!({ "status": "entregado" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "entregado");

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/packages/pkg-003",
        Some(&token),
        Some(json!({ "weight": 9.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, Method::DELETE, "/api/packages/pkg-003", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_package_lifecycle() {
    let app = create_test_app().await;
    let token = login(&app, "admin", "admin").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/packages",
        Some(&token),
        Some(json!({
            "trackingNumber": "LOG-2024-009",
            "origin": "Centro de Distribución B",
            "destination": "Zona Este - Mercado",
            "weight": 4.4,
            "priority": "media"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["status"], "pendiente");
    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("pkg-"));

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/packages/{}/assign", id),
        Some(&token),
        Some(json!({ "driverId": "conductor-001" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["assignedTo"], "conductor-001");

    let (status, _) = send(&app, Method::DELETE, &format!("/api/packages/{}", id), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(&app, &format!("/api/packages/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_package_validation() {
    let app = create_test_app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/packages",
        None,
        Some(json!({
            "trackingNumber": "",
            "origin": "Centro de Distribución B",
            "destination": "Zona Este",
            "weight": -1.0,
            "priority": "baja"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Los datos enviados no son válidos");
}

#[tokio::test]
async fn test_route_creation_appends_and_status_update() {
    let app = create_test_app().await;
    let route = json!({
        "id": "route-003",
        "name": "Ruta Este",
        "startPoint": "Almacén Central",
        "endPoint": "Zona Este",
        "distance": 30.0,
        "estimatedTime": 75,
        "packages": ["pkg-007"]
    });

    let (status, _) = send(&app, Method::POST, "/api/routes", None, Some(route.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(&app, Method::POST, "/api/routes", None, Some(route)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = get(&app, "/api/routes").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 4);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/routes/route-002",
        None,
        Some(json!({ "status": "paused" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "pausada");
}

#[tokio::test]
async fn test_refresh_restores_seed_packages() {
    let app = create_test_app().await;
    send(&app, Method::DELETE, "/api/packages/pkg-001", None, None).await;

    let (status, body) = send(&app, Method::POST, "/api/packages/refresh", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 8);

    let (status, _) = get(&app, "/api/packages/pkg-001").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_stats_and_driver_dashboard() {
    let app = create_test_app().await;

    let (status, body) = get(&app, "/api/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["totalPackages"], 8);
    assert_eq!(body["data"]["activeRoutes"], 1);

    let token = login(&app, "conductor", "conductor").await;
    let (status, body) = send(&app, Method::GET, "/api/conductor/dashboard", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["activeRoute"]["id"], "route-001");
    assert_eq!(body["data"]["activeDeliveries"].as_array().unwrap().len(), 4);

    let (status, _) = get(&app, "/api/conductor/dashboard").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_swagger_and_health() {
    let app = create_test_app().await;

    let (status, body) = get(&app, "/api/swagger").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["openapi"], "3.0.0");
    assert_eq!(body["servers"][0]["url"], "http://localhost:3000");

    let (status, body) = get(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isLoading"], false);
    assert_eq!(body["packages"], 8);
}
