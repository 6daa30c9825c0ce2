pub mod auth_routes;
pub mod dashboard_routes;
pub mod docs_routes;
pub mod package_routes;
pub mod route_routes;

use axum::{middleware::from_fn_with_state, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::{auth::auth_middleware, cors::cors_middleware};
use crate::state::AppState;

/// Crear el router principal de la API
///
/// Login, documentación y health son públicos; el resto pasa por el
/// middleware de autenticación que resuelve el `Caller`.
pub fn create_api_router(state: &AppState) -> Router<AppState> {
    let auth_layer = from_fn_with_state(state.clone(), auth_middleware);

    let protected = Router::new()
        .nest("/api/packages", package_routes::create_package_router())
        .nest("/api/routes", route_routes::create_route_router())
        .merge(auth_routes::create_session_router())
        .merge(Router::new().nest("/api", dashboard_routes::create_dashboard_router()))
        .route_layer(auth_layer);

    Router::new()
        .nest("/api/auth", auth_routes::create_auth_router())
        .route("/api/swagger", get(docs_routes::swagger))
        .route("/api/health", get(dashboard_routes::health))
        .merge(protected)
}

/// Aplicación completa con middleware transversal
pub fn create_app(state: AppState) -> Router {
    let cors = cors_middleware(&state.config);

    create_api_router(&state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors),
        )
        .with_state(state)
}
