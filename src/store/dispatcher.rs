//! Store compartido y despachadores de acciones
//!
//! Todos los despachadores siguen el mismo patrón: `SET_LOADING(true)`,
//! espera de la latencia simulada, cálculo del nuevo registro a partir del
//! estado actual, despacho de las acciones, `SET_ERROR` y `SET_LOADING(false)`.
//!
//! La lectura y la escritura toman el lock por separado, así que dos
//! despachadores solapados sobre el mismo registro se resuelven por orden de
//! finalización: gana la última escritura.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::fixtures;
use super::reducer::{reduce, LogisticsAction, LogisticsState};
use crate::models::{NewPackage, Package, PackageStatus, Route, RouteStatus};
use crate::utils::errors::{package_not_found, route_not_found, AppResult};

/// Latencias simuladas de los despachadores
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Latency {
    pub fetch: Duration,
    pub mutation: Duration,
}

impl Latency {
    pub fn none() -> Self {
        Self {
            fetch: Duration::ZERO,
            mutation: Duration::ZERO,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            fetch: Duration::from_millis(1000),
            mutation: Duration::from_millis(600),
        }
    }
}

#[derive(Clone)]
pub struct LogisticsStore {
    state: Arc<RwLock<LogisticsState>>,
    latency: Latency,
}

impl LogisticsStore {
    pub fn new(latency: Latency) -> Self {
        Self {
            state: Arc::new(RwLock::new(LogisticsState::default())),
            latency,
        }
    }

    /// Carga los datos semilla sin latencia (arranque del servidor)
    pub async fn seed(&self) {
        self.dispatch(LogisticsAction::SetPackages(fixtures::packages())).await;
        self.dispatch(LogisticsAction::SetRoutes(fixtures::routes())).await;
        info!("📦 Store inicializado con datos semilla");
    }

    /// Aplica una acción al estado. Es el único punto de escritura.
    pub async fn dispatch(&self, action: LogisticsAction) {
        debug!("🔄 Acción {}", action.name());
        let mut state = self.state.write().await;
        let current = std::mem::take(&mut *state);
        *state = reduce(current, action);
    }

    pub async fn snapshot(&self) -> LogisticsState {
        self.state.read().await.clone()
    }

    pub async fn packages(&self) -> Vec<Package> {
        self.state.read().await.packages.clone()
    }

    pub async fn routes(&self) -> Vec<Route> {
        self.state.read().await.routes.clone()
    }

    pub async fn find_package(&self, id: &str) -> Option<Package> {
        self.state.read().await.find_package(id).cloned()
    }

    pub async fn find_route(&self, id: &str) -> Option<Route> {
        self.state.read().await.find_route(id).cloned()
    }

    async fn run<T, F>(&self, operation: &'static str, delay: Duration, compute: F) -> AppResult<T>
    where
        F: FnOnce(&LogisticsState) -> AppResult<(Vec<LogisticsAction>, T)>,
    {
        self.dispatch(LogisticsAction::SetLoading(true)).await;
        tokio::time::sleep(delay).await;

        let outcome = {
            let state = self.state.read().await;
            compute(&*state)
        };

        let result = match outcome {
            Ok((actions, value)) => {
                for action in actions {
                    self.dispatch(action).await;
                }
                self.dispatch(LogisticsAction::SetError(None)).await;
                debug!("✅ {} completado", operation);
                Ok(value)
            }
            Err(e) => {
                warn!("⚠️ {} falló: {}", operation, e);
                self.dispatch(LogisticsAction::SetError(Some(e.user_message()))).await;
                Err(e)
            }
        };

        self.dispatch(LogisticsAction::SetLoading(false)).await;
        result
    }

    pub async fn fetch_packages(&self) -> AppResult<Vec<Package>> {
        self.run("fetch_packages", self.latency.fetch, |_| {
            let packages = fixtures::packages();
            Ok((vec![LogisticsAction::SetPackages(packages.clone())], packages))
        })
        .await
    }

    pub async fn fetch_routes(&self) -> AppResult<Vec<Route>> {
        self.run("fetch_routes", self.latency.fetch, |_| {
            let routes = fixtures::routes();
            Ok((vec![LogisticsAction::SetRoutes(routes.clone())], routes))
        })
        .await
    }

    pub async fn update_package_status(&self, package_id: &str, status: PackageStatus) -> AppResult<Package> {
        self.run("update_package_status", self.latency.mutation, |state| {
            let mut package = state.find_package(package_id).cloned().ok_or_else(package_not_found)?;
            package.status = status;
            Ok((vec![LogisticsAction::UpdatePackage(package.clone())], package))
        })
        .await
    }

    pub async fn assign_package_to_driver(&self, package_id: &str, driver_id: &str) -> AppResult<Package> {
        self.run("assign_package_to_driver", self.latency.mutation, |state| {
            let mut package = state.find_package(package_id).cloned().ok_or_else(package_not_found)?;
            package.assigned_to = Some(driver_id.to_string());
            Ok((vec![LogisticsAction::UpdatePackage(package.clone())], package))
        })
        .await
    }

    pub async fn update_route_status(&self, route_id: &str, status: RouteStatus) -> AppResult<Route> {
        self.run("update_route_status", self.latency.mutation, |state| {
            let mut route = state.find_route(route_id).cloned().ok_or_else(route_not_found)?;
            route.status = status;
            Ok((vec![LogisticsAction::UpdateRoute(route.clone())], route))
        })
        .await
    }

    pub async fn add_package(&self, new_package: NewPackage) -> AppResult<Package> {
        self.run("add_package", self.latency.mutation, |state| {
            let id = timestamp_id("pkg", |candidate| state.find_package(candidate).is_some());
            let package = new_package.into_package(id, Utc::now());
            Ok((vec![LogisticsAction::AddPackage(package.clone())], package))
        })
        .await
    }

    /// Reemplazo completo del registro. Sin control de versión.
    pub async fn update_package(&self, package: Package) -> AppResult<Package> {
        self.run("update_package", self.latency.mutation, |state| {
            if state.find_package(&package.id).is_none() {
                return Err(package_not_found());
            }
            Ok((vec![LogisticsAction::UpdatePackage(package.clone())], package))
        })
        .await
    }

    pub async fn delete_package(&self, package_id: &str) -> AppResult<Package> {
        self.run("delete_package", self.latency.mutation, |state| {
            let package = state.find_package(package_id).cloned().ok_or_else(package_not_found)?;
            Ok((vec![LogisticsAction::DeletePackage(package.id.clone())], package))
        })
        .await
    }

    /// Agrega una ruta al final de la lista. Sin `id` se genera uno.
    /// Agregar dos veces la misma ruta la duplica.
    pub async fn add_route(&self, mut route: Route) -> AppResult<Route> {
        self.run("add_route", self.latency.mutation, |state| {
            if route.id.trim().is_empty() {
                route.id = timestamp_id("route", |candidate| state.find_route(candidate).is_some());
            }
            Ok((vec![LogisticsAction::AddRoute(route.clone())], route))
        })
        .await
    }
}

/// Id `<prefijo>-<unix millis>`, incrementado hasta que no colisione
fn timestamp_id(prefix: &str, taken: impl Fn(&str) -> bool) -> String {
    let mut millis = Utc::now().timestamp_millis();
    loop {
        let candidate = format!("{}-{}", prefix, millis);
        if !taken(&candidate) {
            return candidate;
        }
        millis += 1;
    }
}
