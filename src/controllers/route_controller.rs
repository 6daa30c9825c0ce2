use tracing::info;
use validator::Validate;

use super::require_admin;
use crate::dto::route_dto::{CreateRouteRequest, RouteFilters, UpdateRouteStatusRequest};
use crate::models::auth::Caller;
use crate::models::Route;
use crate::state::AppState;
use crate::store::LogisticsStore;
use crate::utils::errors::{forbidden_error, route_not_found, AppResult};

pub struct RouteController {
    store: LogisticsStore,
}

impl RouteController {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }

    fn is_visible(caller: &Caller, route: &Route) -> bool {
        caller.driver_id().map_or(true, |driver| route.is_assigned_to(driver))
    }

    async fn find_visible(&self, caller: &Caller, id: &str) -> AppResult<Route> {
        let route = self.store.find_route(id).await.ok_or_else(route_not_found)?;
        if !Self::is_visible(caller, &route) {
            return Err(forbidden_error("acceder a la ruta", "no está asignada a este conductor"));
        }
        Ok(route)
    }

    pub async fn list(&self, caller: &Caller, filters: &RouteFilters) -> Vec<Route> {
        self.store
            .routes()
            .await
            .into_iter()
            .filter(|r| Self::is_visible(caller, r) && filters.matches(r))
            .collect()
    }

    pub async fn get_by_id(&self, caller: &Caller, id: &str) -> AppResult<Route> {
        self.find_visible(caller, id).await
    }

    pub async fn create(&self, caller: &Caller, request: CreateRouteRequest) -> AppResult<Route> {
        require_admin(caller, "crear rutas")?;
        request.validate()?;
        let route = self.store.add_route(request.into()).await?;
        info!("🗺️ Ruta creada: {} ({})", route.id, route.name);
        Ok(route)
    }

    /// El administrador o el conductor asignado pueden cambiar el estado
    pub async fn update_status(
        &self,
        caller: &Caller,
        id: &str,
        request: UpdateRouteStatusRequest,
    ) -> AppResult<Route> {
        self.find_visible(caller, id).await?;
        let route = self.store.update_route_status(id, request.status).await?;
        info!("🗺️ Ruta {} → {}", id, request.status.as_str());
        Ok(route)
    }

    /// Recarga las rutas semilla
    pub async fn refresh(&self, caller: &Caller) -> AppResult<Vec<Route>> {
        require_admin(caller, "recargar rutas")?;
        self.store.fetch_routes().await
    }
}
