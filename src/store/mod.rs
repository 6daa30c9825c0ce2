//! Estado logístico en memoria
//!
//! `reducer` define el contenedor y sus acciones, `dispatcher` el store
//! compartido detrás de la capa HTTP y `fixtures` los datos semilla.

pub mod dispatcher;
pub mod fixtures;
pub mod reducer;

pub use dispatcher::{Latency, LogisticsStore};
pub use reducer::{reduce, LogisticsAction, LogisticsState};
