use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Estado de entrega de un paquete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackageStatus {
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "en_transito")]
    InTransit,
    #[serde(rename = "entregado")]
    Delivered,
    #[serde(rename = "cancelado")]
    Cancelled,
}

impl PackageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageStatus::Pending => "pendiente",
            PackageStatus::InTransit => "en_transito",
            PackageStatus::Delivered => "entregado",
            PackageStatus::Cancelled => "cancelado",
        }
    }
}

/// Prioridad del paquete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackagePriority {
    #[serde(rename = "baja")]
    Low,
    #[serde(rename = "media")]
    Medium,
    #[serde(rename = "alta")]
    High,
}

/// Paquete (envío) gestionado por el sistema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: String,
    pub tracking_number: String,
    pub origin: String,
    pub destination: String,
    pub weight: f64,
    pub status: PackageStatus,
    pub priority: PackagePriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Package {
    pub fn is_assigned_to(&self, driver_id: &str) -> bool {
        self.assigned_to.as_deref() == Some(driver_id)
    }
}

/// Datos de un paquete nuevo: el id y la fecha de creación los asigna el store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPackage {
    pub tracking_number: String,
    pub origin: String,
    pub destination: String,
    pub weight: f64,
    pub status: PackageStatus,
    pub priority: PackagePriority,
    #[serde(default)]
    pub assigned_to: Option<String>,
}

impl NewPackage {
    pub fn into_package(self, id: String, created_at: DateTime<Utc>) -> Package {
        Package {
            id,
            tracking_number: self.tracking_number,
            origin: self.origin,
            destination: self.destination,
            weight: self.weight,
            status: self.status,
            priority: self.priority,
            assigned_to: self.assigned_to,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_camel_case_and_spanish_tokens() {
        let package = Package {
            id: "pkg-001".to_string(),
            tracking_number: "LOG-2024-001".to_string(),
            origin: "Centro de Distribución A".to_string(),
            destination: "Zona Centro".to_string(),
            weight: 5.2,
            status: PackageStatus::InTransit,
            priority: PackagePriority::High,
            assigned_to: None,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&package).unwrap();
        assert_eq!(value["trackingNumber"], "LOG-2024-001");
        assert_eq!(value["status"], "en_transito");
        assert_eq!(value["priority"], "alta");
        assert!(value.get("assignedTo").is_none());
    }

    #[test]
    fn rejects_unknown_status_token() {
        let parsed: Result<PackageStatus, _> = serde_json::from_value(json!("perdido"));
        assert!(parsed.is_err());
        let parsed: PackageStatus = serde_json::from_value(json!("cancelado")).unwrap();
        assert_eq!(parsed, PackageStatus::Cancelled);
    }
}
