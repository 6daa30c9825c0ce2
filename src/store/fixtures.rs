//! Datos semilla del sistema
//!
//! Única fuente de datos de ejemplo: el store la carga al despachar
//! `fetch_packages` / `fetch_routes`.

use chrono::Utc;

use crate::models::{Package, PackagePriority, PackageStatus, Route, RouteStatus};

pub const SEED_DRIVER_ID: &str = "conductor-001";

fn package(
    seq: u32,
    origin: &str,
    destination: &str,
    weight: f64,
    status: PackageStatus,
    priority: PackagePriority,
    assigned_to: Option<&str>,
) -> Package {
    Package {
        id: format!("pkg-{:03}", seq),
        tracking_number: format!("LOG-2024-{:03}", seq),
        origin: origin.to_string(),
        destination: destination.to_string(),
        weight,
        status,
        priority,
        assigned_to: assigned_to.map(str::to_string),
        created_at: Utc::now(),
    }
}

pub fn packages() -> Vec<Package> {
    use PackagePriority::*;
    use PackageStatus::*;

    let driver = Some(SEED_DRIVER_ID);
    vec![
        package(1, "Centro de Distribución A", "Zona Centro - Calle 5", 5.2, Pending, High, None),
        package(2, "Centro de Distribución B", "Zona Sur - Av. Principal", 3.8, InTransit, Medium, driver),
        package(3, "Centro de Distribución A", "Zona Norte - Parque Industrial", 7.1, InTransit, Low, driver),
        package(4, "Centro de Distribución C", "Zona Centro - Calle 12", 2.5, InTransit, High, driver),
        package(5, "Centro de Distribución A", "Zona Norte - Comercial Plaza", 4.3, InTransit, Medium, driver),
        package(6, "Centro de Distribución B", "Zona Sur - Centro Comercial", 6.8, InTransit, Low, driver),
        package(7, "Centro de Distribución A", "Zona Este - Residencial", 1.9, Delivered, Low, driver),
        package(8, "Centro de Distribución C", "Zona Oeste - Oficinas", 3.2, Delivered, Medium, driver),
    ]
}

pub fn routes() -> Vec<Route> {
    vec![
        Route {
            id: "route-001".to_string(),
            name: "Ruta Centro-Norte".to_string(),
            start_point: "Almacén Central".to_string(),
            end_point: "Zona Norte".to_string(),
            distance: 45.5,
            estimated_time: 120,
            assigned_driver: Some(SEED_DRIVER_ID.to_string()),
            packages: ["pkg-001", "pkg-002", "pkg-003", "pkg-004", "pkg-005"]
                .iter()
                .map(|id| id.to_string())
                .collect(),
            status: RouteStatus::Active,
        },
        Route {
            id: "route-002".to_string(),
            name: "Ruta Centro-Sur".to_string(),
            start_point: "Almacén Central".to_string(),
            end_point: "Zona Sur".to_string(),
            distance: 52.3,
            estimated_time: 150,
            assigned_driver: Some(SEED_DRIVER_ID.to_string()),
            packages: vec!["pkg-006".to_string()],
            status: RouteStatus::Paused,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique() {
        let ids: HashSet<_> = packages().into_iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 8);
        assert!(ids.contains("pkg-001") && ids.contains("pkg-008"));
    }

    #[test]
    fn every_seed_route_belongs_to_the_seed_driver() {
        let assigned: Vec<_> = routes()
            .into_iter()
            .filter(|r| r.is_assigned_to(SEED_DRIVER_ID))
            .map(|r| r.id)
            .collect();
        assert_eq!(assigned, vec!["route-001", "route-002"]);
    }
}
