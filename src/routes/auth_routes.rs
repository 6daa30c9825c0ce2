use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::dto::api_response::ApiResponse;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::models::auth::{AuthUser, Caller};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas públicas de autenticación
pub fn create_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Rutas de sesión; requieren el middleware de autenticación
pub fn create_session_router() -> Router<AppState> {
    Router::new().route("/api/auth/me", get(me))
}

async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    let Json(request) = payload?;
    let controller = AuthController::new(&state);
    let response = controller.login(request).await?;
    Ok(Json(ApiResponse::success_with_message(response, "Login exitoso")))
}

async fn me(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> Result<Json<ApiResponse<AuthUser>>, AppError> {
    let controller = AuthController::new(&state);
    Ok(Json(ApiResponse::success(controller.me(&caller)?)))
}
