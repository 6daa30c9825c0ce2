use serde::Deserialize;
use validator::Validate;

use super::package_dto::validate_positive;
use crate::models::{Route, RouteStatus};

// Request para crear una ruta
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRouteRequest {
    pub id: Option<String>,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub start_point: String,
    #[validate(length(min = 1))]
    pub end_point: String,
    #[validate(custom = "validate_positive")]
    pub distance: f64,
    #[validate(range(min = 1))]
    pub estimated_time: u32,
    pub assigned_driver: Option<String>,
    #[serde(default)]
    pub packages: Vec<String>,
    pub status: Option<RouteStatus>,
}

impl From<CreateRouteRequest> for Route {
    fn from(request: CreateRouteRequest) -> Self {
        Self {
            // Vacío: el store genera el id
            id: request.id.unwrap_or_default(),
            name: request.name,
            start_point: request.start_point,
            end_point: request.end_point,
            distance: request.distance,
            estimated_time: request.estimated_time,
            assigned_driver: request.assigned_driver.filter(|id| !id.trim().is_empty()),
            packages: request.packages,
            status: request.status.unwrap_or(RouteStatus::Active),
        }
    }
}

// Request para cambiar el estado de una ruta
#[derive(Debug, Deserialize)]
pub struct UpdateRouteStatusRequest {
    pub status: RouteStatus,
}

/// Filtros de listado de rutas
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteFilters {
    pub status: Option<RouteStatus>,
    pub assigned_driver: Option<String>,
}

impl RouteFilters {
    pub fn matches(&self, route: &Route) -> bool {
        self.status.map_or(true, |status| route.status == status)
            && self
                .assigned_driver
                .as_deref()
                .map_or(true, |driver| route.is_assigned_to(driver))
    }
}

/// Parámetros de la vista del conductor
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverDashboardQuery {
    pub route_id: Option<String>,
    /// Solo para administradores: conductor a consultar
    pub driver_id: Option<String>,
}
