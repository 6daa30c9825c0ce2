use serde::Serialize;

use super::package::{Package, PackagePriority, PackageStatus};
use super::route::{Route, RouteStatus};

/// Resumen de la operación mostrado en el panel de administración
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogisticsStats {
    pub total_packages: usize,
    pub pending_packages: usize,
    pub in_transit_packages: usize,
    pub delivered_packages: usize,
    pub high_priority_packages: usize,
    pub total_routes: usize,
    pub active_routes: usize,
    pub completed_routes: usize,
    /// Suma de distancias en km
    pub total_distance: f64,
}

impl LogisticsStats {
    pub fn compute<'a, P, R>(packages: P, routes: R) -> Self
    where
        P: IntoIterator<Item = &'a Package>,
        R: IntoIterator<Item = &'a Route>,
    {
        let mut stats = Self {
            total_packages: 0,
            pending_packages: 0,
            in_transit_packages: 0,
            delivered_packages: 0,
            high_priority_packages: 0,
            total_routes: 0,
            active_routes: 0,
            completed_routes: 0,
            total_distance: 0.0,
        };

        for package in packages {
            stats.total_packages += 1;
            match package.status {
                PackageStatus::Pending => stats.pending_packages += 1,
                PackageStatus::InTransit => stats.in_transit_packages += 1,
                PackageStatus::Delivered => stats.delivered_packages += 1,
                PackageStatus::Cancelled => {}
            }
            if package.priority == PackagePriority::High {
                stats.high_priority_packages += 1;
            }
        }

        for route in routes {
            stats.total_routes += 1;
            stats.total_distance += route.distance;
            match route.status {
                RouteStatus::Active => stats.active_routes += 1,
                RouteStatus::Completed => stats.completed_routes += 1,
                RouteStatus::Paused => {}
            }
        }

        stats
    }
}

/// Vista de entregas de un conductor
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverDashboard {
    pub driver_id: String,
    pub routes: Vec<Route>,
    pub active_route: Option<Route>,
    pub active_deliveries: Vec<Package>,
    pub completed_deliveries: Vec<Package>,
}
