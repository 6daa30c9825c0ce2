//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El `LogisticsStore` es la única fuente de
//! verdad de paquetes y rutas: todos los handlers leen y escriben en él.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::services::auth_service::AuthService;
use crate::store::LogisticsStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<EnvironmentConfig>,
    pub store: LogisticsStore,
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        let store = LogisticsStore::new(config.latency());
        let auth = AuthService::new(&config);
        Self {
            config: Arc::new(config),
            store,
            auth: Arc::new(auth),
        }
    }

    /// Estado con el store ya cargado con los datos semilla
    pub async fn seeded(config: EnvironmentConfig) -> Self {
        let state = Self::new(config);
        state.store.seed().await;
        state
    }
}
