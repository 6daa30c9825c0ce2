//! Modelos del sistema
//!
//! Este módulo contiene las entidades logísticas (paquetes y rutas),
//! los tipos de autenticación y los agregados del panel.

pub mod auth;
pub mod package;
pub mod route;
pub mod stats;

pub use auth::{AuthUser, Caller, UserRole};
pub use package::{NewPackage, Package, PackagePriority, PackageStatus};
pub use route::{Route, RouteStatus};
pub use stats::{DriverDashboard, LogisticsStats};
