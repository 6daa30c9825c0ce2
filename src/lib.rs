//! Backend del sistema de ruteo logístico
//!
//! Paquetes y rutas viven en un único store en memoria (`store`) que la capa
//! HTTP (`routes` → `controllers`) lee y modifica. Los datos se reinician
//! con cada arranque.

// El documento OpenAPI se construye con un `json!` grande
#![recursion_limit = "256"]

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;
