use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::{NewPackage, Package, PackagePriority, PackageStatus};

/// Los pesos y distancias deben ser positivos
pub fn validate_positive(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("positive"))
    }
}

// Request para crear un paquete
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePackageRequest {
    #[validate(length(min = 1))]
    pub tracking_number: String,
    #[validate(length(min = 1))]
    pub origin: String,
    #[validate(length(min = 1))]
    pub destination: String,
    #[validate(custom = "validate_positive")]
    pub weight: f64,
    pub status: Option<PackageStatus>,
    pub priority: PackagePriority,
    pub assigned_to: Option<String>,
}

impl From<CreatePackageRequest> for NewPackage {
    fn from(request: CreatePackageRequest) -> Self {
        Self {
            tracking_number: request.tracking_number,
            origin: request.origin,
            destination: request.destination,
            weight: request.weight,
            status: request.status.unwrap_or(PackageStatus::Pending),
            priority: request.priority,
            assigned_to: request.assigned_to.filter(|id| !id.trim().is_empty()),
        }
    }
}

// Request para actualizar un paquete: solo se aplican los campos presentes
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePackageRequest {
    pub status: Option<PackageStatus>,
    #[validate(length(min = 1))]
    pub tracking_number: Option<String>,
    #[validate(length(min = 1))]
    pub origin: Option<String>,
    #[validate(length(min = 1))]
    pub destination: Option<String>,
    #[validate(custom = "validate_positive")]
    pub weight: Option<f64>,
    pub priority: Option<PackagePriority>,
    pub assigned_to: Option<String>,
}

impl UpdatePackageRequest {
    /// Solo cambia el estado (lo único que puede tocar un conductor)
    pub fn is_status_only(&self) -> bool {
        self.tracking_number.is_none()
            && self.origin.is_none()
            && self.destination.is_none()
            && self.weight.is_none()
            && self.priority.is_none()
            && self.assigned_to.is_none()
    }

    pub fn apply_to(self, mut package: Package) -> Package {
        if let Some(status) = self.status {
            package.status = status;
        }
        if let Some(tracking_number) = self.tracking_number {
            package.tracking_number = tracking_number;
        }
        if let Some(origin) = self.origin {
            package.origin = origin;
        }
        if let Some(destination) = self.destination {
            package.destination = destination;
        }
        if let Some(weight) = self.weight {
            package.weight = weight;
        }
        if let Some(priority) = self.priority {
            package.priority = priority;
        }
        if let Some(assigned_to) = self.assigned_to {
            // Cadena vacía = desasignar
            package.assigned_to = Some(assigned_to).filter(|id| !id.trim().is_empty());
        }
        package
    }
}

// Request para asignar un paquete a un conductor
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssignDriverRequest {
    #[validate(length(min = 1))]
    pub driver_id: String,
}

/// Filtros de listado de paquetes
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageFilters {
    pub status: Option<PackageStatus>,
    pub assigned_to: Option<String>,
}

impl PackageFilters {
    pub fn matches(&self, package: &Package) -> bool {
        self.status.map_or(true, |status| package.status == status)
            && self
                .assigned_to
                .as_deref()
                .map_or(true, |driver| package.is_assigned_to(driver))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures;
    use serde_json::json;

    #[test]
    fn status_only_update_is_detected() {
        let request: UpdatePackageRequest = serde_json::from_value(json!({ "status": "entregado" })).unwrap();
        assert!(request.is_status_only());

        let request: UpdatePackageRequest =
            serde_json::from_value(json!({ "status": "entregado", "weight": 2.0 })).unwrap();
        assert!(!request.is_status_only());
    }

    #[test]
    fn apply_merges_present_fields_only() {
        let original = fixtures::packages().remove(1);
        let request: UpdatePackageRequest =
            serde_json::from_value(json!({ "priority": "alta", "assignedTo": "" })).unwrap();

        let updated = request.apply_to(original.clone());

        assert_eq!(updated.priority, PackagePriority::High);
        assert!(updated.assigned_to.is_none());
        assert_eq!(updated.status, original.status);
        assert_eq!(updated.tracking_number, original.tracking_number);
    }

    #[test]
    fn create_request_rejects_non_positive_weight() {
        let request: CreatePackageRequest = serde_json::from_value(json!({
            "trackingNumber": "LOG-2024-200",
            "origin": "Centro de Distribución A",
            "destination": "Zona Norte",
            "weight": 0.0,
            "priority": "media"
        }))
        .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn update_request_rejects_negative_weight() {
        let request: UpdatePackageRequest = serde_json::from_value(json!({ "weight": -3.0 })).unwrap();
        assert!(request.validate().is_err());

        let request: UpdatePackageRequest = serde_json::from_value(json!({ "weight": 3.0 })).unwrap();
        assert!(request.validate().is_ok());
    }
}
