use crate::dto::route_dto::DriverDashboardQuery;
use crate::models::auth::Caller;
use crate::models::{DriverDashboard, LogisticsStats};
use crate::services::dashboard_service;
use crate::state::AppState;
use crate::store::LogisticsStore;
use crate::utils::errors::{forbidden_error, AppError, AppResult};

pub struct DashboardController {
    store: LogisticsStore,
}

impl DashboardController {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }

    /// Estadísticas sobre lo que el llamante puede ver
    pub async fn stats(&self, caller: &Caller) -> LogisticsStats {
        let state = self.store.snapshot().await;
        match caller.driver_id() {
            Some(driver) => {
                let packages: Vec<_> = state.packages.into_iter().filter(|p| p.is_assigned_to(driver)).collect();
                let routes: Vec<_> = state.routes.into_iter().filter(|r| r.is_assigned_to(driver)).collect();
                dashboard_service::stats(&packages, &routes)
            }
            None => dashboard_service::stats(&state.packages, &state.routes),
        }
    }

    pub async fn driver_dashboard(&self, caller: &Caller, query: DriverDashboardQuery) -> AppResult<DriverDashboard> {
        let driver_id = match (caller.driver_id(), query.driver_id.as_deref()) {
            (Some(own), Some(requested)) if own != requested => {
                return Err(forbidden_error("ver el panel de otro conductor", "solo el propio"));
            }
            (Some(own), _) => own.to_string(),
            (None, Some(requested)) => requested.to_string(),
            (None, None) => {
                return Err(AppError::BadRequest("Falta el parámetro driverId".to_string()));
            }
        };

        let state = self.store.snapshot().await;
        Ok(dashboard_service::driver_dashboard(
            &driver_id,
            &state.packages,
            &state.routes,
            query.route_id.as_deref(),
        ))
    }
}
