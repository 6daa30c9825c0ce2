pub mod auth_controller;
pub mod dashboard_controller;
pub mod package_controller;
pub mod route_controller;

use crate::models::auth::Caller;
use crate::utils::errors::{forbidden_error, AppResult};

/// Operaciones reservadas al administrador
pub(crate) fn require_admin(caller: &Caller, operation: &str) -> AppResult<()> {
    if caller.is_admin() {
        Ok(())
    } else {
        Err(forbidden_error(operation, "requiere rol de administrador"))
    }
}
