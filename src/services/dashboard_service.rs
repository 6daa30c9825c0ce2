//! Agregados del panel
//!
//! Estadísticas del resumen de administración y la vista de entregas de un
//! conductor. Funciones puras sobre instantáneas del store.

use crate::models::{DriverDashboard, LogisticsStats, Package, PackageStatus, Route, RouteStatus};

pub fn stats(packages: &[Package], routes: &[Route]) -> LogisticsStats {
    LogisticsStats::compute(packages, routes)
}

/// Vista del conductor: sus rutas, la ruta activa y sus entregas en ella.
///
/// La ruta activa es `route_id` si se indica y pertenece al conductor; si no,
/// la primera ruta asignada con estado `activa`.
pub fn driver_dashboard(
    driver_id: &str,
    packages: &[Package],
    routes: &[Route],
    route_id: Option<&str>,
) -> DriverDashboard {
    let assigned: Vec<Route> = routes
        .iter()
        .filter(|r| r.is_assigned_to(driver_id))
        .cloned()
        .collect();

    let active_route = match route_id {
        Some(id) => assigned.iter().find(|r| r.id == id),
        None => assigned.iter().find(|r| r.status == RouteStatus::Active),
    }
    .cloned();

    let (completed, active): (Vec<Package>, Vec<Package>) = active_route
        .as_ref()
        .map(|route| {
            packages
                .iter()
                .filter(|p| route.contains_package(&p.id) && p.is_assigned_to(driver_id))
                .cloned()
                .collect::<Vec<_>>()
        })
        .unwrap_or_default()
        .into_iter()
        .partition(|p| p.status == PackageStatus::Delivered);

    DriverDashboard {
        driver_id: driver_id.to_string(),
        routes: assigned,
        active_route,
        active_deliveries: active,
        completed_deliveries: completed,
    }
}
