//! Servicios del sistema
//!
//! Autenticación y agregados del panel logístico.

pub mod auth_service;
pub mod dashboard_service;

pub use auth_service::AuthService;
