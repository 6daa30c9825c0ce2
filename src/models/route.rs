use serde::{Deserialize, Serialize};

/// Estado de una ruta de reparto
///
/// `paused` se acepta como alias de `pausada` para clientes antiguos,
/// pero siempre se emite el token en español.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteStatus {
    #[serde(rename = "activa")]
    Active,
    #[serde(rename = "completada")]
    Completed,
    #[serde(rename = "pausada", alias = "paused")]
    Paused,
}

impl RouteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteStatus::Active => "activa",
            RouteStatus::Completed => "completada",
            RouteStatus::Paused => "pausada",
        }
    }
}

/// Ruta de reparto: itinerario ordenado que agrupa paquetes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: String,
    pub name: String,
    pub start_point: String,
    pub end_point: String,
    /// Distancia en km
    pub distance: f64,
    /// Tiempo estimado en minutos
    pub estimated_time: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_driver: Option<String>,
    /// Ids de paquetes en orden de entrega (no se validan contra la colección)
    #[serde(default)]
    pub packages: Vec<String>,
    pub status: RouteStatus,
}

impl Route {
    pub fn is_assigned_to(&self, driver_id: &str) -> bool {
        self.assigned_driver.as_deref() == Some(driver_id)
    }

    pub fn contains_package(&self, package_id: &str) -> bool {
        self.packages.iter().any(|id| id == package_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_legacy_paused_token_but_emits_pausada() {
        let status: RouteStatus = serde_json::from_value(json!("paused")).unwrap();
        assert_eq!(status, RouteStatus::Paused);
        assert_eq!(serde_json::to_value(status).unwrap(), json!("pausada"));
    }

    #[test]
    fn missing_package_list_defaults_to_empty() {
        let route: Route = serde_json::from_value(json!({
            "id": "route-900",
            "name": "Ruta Express",
            "startPoint": "Almacén Central",
            "endPoint": "Aeropuerto",
            "distance": 18.2,
            "estimatedTime": 35,
            "status": "activa"
        }))
        .unwrap();

        assert!(route.packages.is_empty());
        assert!(route.assigned_driver.is_none());
    }
}
