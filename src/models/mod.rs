//! Modelos de datos
//!
//! Structs FromRow por entidad más sus filtros de búsqueda.

pub mod auth;
pub mod constant;
pub mod dashboard;
pub mod fuel_log;
pub mod gas_bill;
pub mod gas_store;
pub mod generator;
pub mod maintenance;
pub mod station;
pub mod user;
pub mod vehicle;
