use tracing::info;
use validator::Validate;

use super::require_admin;
use crate::dto::package_dto::{AssignDriverRequest, CreatePackageRequest, PackageFilters, UpdatePackageRequest};
use crate::models::auth::Caller;
use crate::models::Package;
use crate::state::AppState;
use crate::store::LogisticsStore;
use crate::utils::errors::{forbidden_error, package_not_found, AppResult};

pub struct PackageController {
    store: LogisticsStore,
}

impl PackageController {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }

    /// Un conductor solo ve los paquetes asignados a él
    fn is_visible(caller: &Caller, package: &Package) -> bool {
        caller.driver_id().map_or(true, |driver| package.is_assigned_to(driver))
    }

    async fn find_visible(&self, caller: &Caller, id: &str) -> AppResult<Package> {
        let package = self.store.find_package(id).await.ok_or_else(package_not_found)?;
        if !Self::is_visible(caller, &package) {
            return Err(forbidden_error("acceder al paquete", "no está asignado a este conductor"));
        }
        Ok(package)
    }

    pub async fn list(&self, caller: &Caller, filters: &PackageFilters) -> Vec<Package> {
        self.store
            .packages()
            .await
            .into_iter()
            .filter(|p| Self::is_visible(caller, p) && filters.matches(p))
            .collect()
    }

    pub async fn get_by_id(&self, caller: &Caller, id: &str) -> AppResult<Package> {
        self.find_visible(caller, id).await
    }

    pub async fn update(&self, caller: &Caller, id: &str, request: UpdatePackageRequest) -> AppResult<Package> {
        request.validate()?;
        let existing = self.find_visible(caller, id).await?;

        if !request.is_status_only() {
            require_admin(caller, "modificar datos del paquete")?;
            return self.store.update_package(request.apply_to(existing)).await;
        }

        match request.status {
            Some(status) => {
                let package = self.store.update_package_status(id, status).await?;
                info!("📦 Paquete {} → {}", id, status.as_str());
                Ok(package)
            }
            None => Ok(existing),
        }
    }

    pub async fn create(&self, caller: &Caller, request: CreatePackageRequest) -> AppResult<Package> {
        require_admin(caller, "crear paquetes")?;
        request.validate()?;
        let package = self.store.add_package(request.into()).await?;
        info!("📦 Paquete creado: {} ({})", package.id, package.tracking_number);
        Ok(package)
    }

    pub async fn delete(&self, caller: &Caller, id: &str) -> AppResult<Package> {
        require_admin(caller, "eliminar paquetes")?;
        let package = self.store.delete_package(id).await?;
        info!("🗑️ Paquete eliminado: {}", id);
        Ok(package)
    }

    pub async fn assign(&self, caller: &Caller, id: &str, request: AssignDriverRequest) -> AppResult<Package> {
        require_admin(caller, "asignar paquetes")?;
        request.validate()?;
        let package = self.store.assign_package_to_driver(id, request.driver_id.trim()).await?;
        info!("🚚 Paquete {} asignado a {}", id, request.driver_id);
        Ok(package)
    }

    /// Recarga los paquetes semilla
    pub async fn refresh(&self, caller: &Caller) -> AppResult<Vec<Package>> {
        require_admin(caller, "recargar paquetes")?;
        self.store.fetch_packages().await
    }
}
