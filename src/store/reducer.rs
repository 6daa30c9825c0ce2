//! Contenedor de estado logístico
//!
//! `reduce` es el único mutador del estado visible de paquetes y rutas.
//! Cada acción aplica exactamente un efecto; las secuencias de cambios se
//! componen despachando varias acciones. No valida invariantes de las
//! entidades: los llamantes son de confianza.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::{Package, Route};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogisticsState {
    pub packages: Vec<Package>,
    pub routes: Vec<Route>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl LogisticsState {
    pub fn find_package(&self, id: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.id == id)
    }

    pub fn find_route(&self, id: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.id == id)
    }
}

/// Acciones aceptadas por el contenedor, con forma `{"type", "payload"}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(remote = "Self", tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogisticsAction {
    SetPackages(Vec<Package>),
    SetRoutes(Vec<Route>),
    UpdatePackage(Package),
    AddPackage(Package),
    DeletePackage(String),
    AddRoute(Route),
    UpdateRoute(Route),
    SetLoading(bool),
    SetError(Option<String>),
    /// Cualquier tipo desconocido: el estado queda igual
    #[serde(skip_deserializing)]
    Unknown,
}

impl LogisticsAction {
    const KNOWN_TYPES: [&'static str; 9] = [
        "SET_PACKAGES",
        "SET_ROUTES",
        "UPDATE_PACKAGE",
        "ADD_PACKAGE",
        "DELETE_PACKAGE",
        "ADD_ROUTE",
        "UPDATE_ROUTE",
        "SET_LOADING",
        "SET_ERROR",
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LogisticsAction::SetPackages(_) => "SET_PACKAGES",
            LogisticsAction::SetRoutes(_) => "SET_ROUTES",
            LogisticsAction::UpdatePackage(_) => "UPDATE_PACKAGE",
            LogisticsAction::AddPackage(_) => "ADD_PACKAGE",
            LogisticsAction::DeletePackage(_) => "DELETE_PACKAGE",
            LogisticsAction::AddRoute(_) => "ADD_ROUTE",
            LogisticsAction::UpdateRoute(_) => "UPDATE_ROUTE",
            LogisticsAction::SetLoading(_) => "SET_LOADING",
            LogisticsAction::SetError(_) => "SET_ERROR",
            LogisticsAction::Unknown => "UNKNOWN",
        }
    }
}

// Un `type` desconocido se decodifica como `Unknown` sin mirar el payload
impl<'de> Deserialize<'de> for LogisticsAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let action_type = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| <D::Error as de::Error>::missing_field("type"))?;

        if !Self::KNOWN_TYPES.contains(&action_type) {
            return Ok(LogisticsAction::Unknown);
        }
        LogisticsAction::deserialize(value).map_err(de::Error::custom)
    }
}

pub fn reduce(mut state: LogisticsState, action: LogisticsAction) -> LogisticsState {
    match action {
        LogisticsAction::SetPackages(packages) => state.packages = packages,
        LogisticsAction::SetRoutes(routes) => state.routes = routes,
        LogisticsAction::UpdatePackage(package) => {
            // Reemplazo completo por id; un id inexistente no inserta
            for existing in state.packages.iter_mut().filter(|p| p.id == package.id) {
                *existing = package.clone();
            }
        }
        LogisticsAction::AddPackage(package) => state.packages.push(package),
        LogisticsAction::DeletePackage(id) => state.packages.retain(|p| p.id != id),
        LogisticsAction::AddRoute(route) => state.routes.push(route),
        LogisticsAction::UpdateRoute(route) => {
            for existing in state.routes.iter_mut().filter(|r| r.id == route.id) {
                *existing = route.clone();
            }
        }
        LogisticsAction::SetLoading(is_loading) => state.is_loading = is_loading,
        LogisticsAction::SetError(error) => state.error = error,
        LogisticsAction::Unknown => {}
    }
    state
}
