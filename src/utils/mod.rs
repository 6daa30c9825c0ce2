//! Utilidades del sistema
//!
//! Errores de la aplicación y helpers de JWT.

pub mod errors;
pub mod jwt;

pub use errors::*;
