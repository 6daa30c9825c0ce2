use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Extension, Json, Router,
};
use chrono::Utc;
use serde_json::{json, Value};

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::api_response::ApiResponse;
use crate::dto::route_dto::DriverDashboardQuery;
use crate::models::auth::Caller;
use crate::models::{DriverDashboard, LogisticsStats};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(stats))
        .route("/conductor/dashboard", get(driver_dashboard))
}

async fn stats(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> Json<ApiResponse<LogisticsStats>> {
    let controller = DashboardController::new(&state);
    Json(ApiResponse::list(controller.stats(&caller).await))
}

async fn driver_dashboard(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    query: Result<Query<DriverDashboardQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<DriverDashboard>>, AppError> {
    let Query(query) = query?;
    let controller = DashboardController::new(&state);
    Ok(Json(ApiResponse::success(controller.driver_dashboard(&caller, query).await?)))
}

/// Estado del servicio y del store
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let snapshot = state.store.snapshot().await;
    Json(json!({
        "success": true,
        "status": "ok",
        "environment": state.config.environment,
        "isLoading": snapshot.is_loading,
        "error": snapshot.error,
        "packages": snapshot.packages.len(),
        "routes": snapshot.routes.len(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
