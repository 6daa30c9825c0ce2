use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::route_controller::RouteController;
use crate::dto::api_response::ApiResponse;
use crate::dto::route_dto::{CreateRouteRequest, RouteFilters, UpdateRouteStatusRequest};
use crate::models::auth::Caller;
use crate::models::Route;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_route_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_routes).post(create_route))
        .route("/refresh", post(refresh_routes))
        .route("/:id", get(get_route).put(update_route_status))
}

async fn list_routes(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    filters: Result<Query<RouteFilters>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<Route>>>, AppError> {
    let Query(filters) = filters?;
    let controller = RouteController::new(&state);
    Ok(Json(ApiResponse::list(controller.list(&caller, &filters).await)))
}

async fn get_route(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Route>>, AppError> {
    let controller = RouteController::new(&state);
    let route = controller.get_by_id(&caller, &id).await?;
    Ok(Json(ApiResponse::success(route)))
}

async fn create_route(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    payload: Result<Json<CreateRouteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Route>>), AppError> {
    let Json(request) = payload?;
    let controller = RouteController::new(&state);
    let route = controller.create(&caller, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(route, "Ruta creada correctamente")),
    ))
}

async fn update_route_status(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateRouteStatusRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Route>>, AppError> {
    let Json(request) = payload?;
    let controller = RouteController::new(&state);
    let route = controller.update_status(&caller, &id, request).await?;
    Ok(Json(ApiResponse::success_with_message(route, "Ruta actualizada correctamente")))
}

async fn refresh_routes(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> Result<Json<ApiResponse<Vec<Route>>>, AppError> {
    let controller = RouteController::new(&state);
    Ok(Json(ApiResponse::list(controller.refresh(&caller).await?)))
}
