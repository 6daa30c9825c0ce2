use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use tracing::info;

use crate::controllers::package_controller::PackageController;
use crate::dto::api_response::ApiResponse;
use crate::dto::package_dto::{AssignDriverRequest, CreatePackageRequest, PackageFilters, UpdatePackageRequest};
use crate::models::auth::Caller;
use crate::models::Package;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_package_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_packages).post(create_package))
        .route("/refresh", post(refresh_packages))
        .route("/:id", get(get_package).put(update_package).delete(delete_package))
        .route("/:id/assign", post(assign_package))
}

async fn list_packages(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    filters: Result<Query<PackageFilters>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<Package>>>, AppError> {
    let Query(filters) = filters?;
    let controller = PackageController::new(&state);
    let packages = controller.list(&caller, &filters).await;
    Ok(Json(ApiResponse::list(packages)))
}

async fn get_package(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Package>>, AppError> {
    let controller = PackageController::new(&state);
    let package = controller.get_by_id(&caller, &id).await?;
    Ok(Json(ApiResponse::success(package)))
}

async fn update_package(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePackageRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Package>>, AppError> {
    let Json(request) = payload?;
    let controller = PackageController::new(&state);
    let package = controller.update(&caller, &id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        package,
        "Paquete actualizado correctamente",
    )))
}

async fn create_package(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    payload: Result<Json<CreatePackageRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Package>>), AppError> {
    let Json(request) = payload?;
    let controller = PackageController::new(&state);
    let package = controller.create(&caller, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(package, "Paquete creado correctamente")),
    ))
}

async fn delete_package(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Package>>, AppError> {
    let controller = PackageController::new(&state);
    let package = controller.delete(&caller, &id).await?;
    Ok(Json(ApiResponse::success_with_message(
        package,
        "Paquete eliminado correctamente",
    )))
}

async fn assign_package(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<String>,
    payload: Result<Json<AssignDriverRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Package>>, AppError> {
    let Json(request) = payload?;
    let controller = PackageController::new(&state);
    let package = controller.assign(&caller, &id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        package,
        "Paquete asignado correctamente",
    )))
}

async fn refresh_packages(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> Result<Json<ApiResponse<Vec<Package>>>, AppError> {
    let controller = PackageController::new(&state);
    let packages = controller.refresh(&caller).await?;
    info!("🔄 {} paquetes recargados", packages.len());
    Ok(Json(ApiResponse::list(packages)))
}
