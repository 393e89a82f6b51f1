//! Controllers
//!
//! Capa de orquestación: validación de entrada, llamadas al repositorio,
//! enriquecimiento de filas y armado del envelope de respuesta.

pub mod auth_controller;
pub mod constant_controller;
pub mod dashboard_controller;
pub mod fuel_log_controller;
pub mod gas_bill_controller;
pub mod gas_store_controller;
pub mod generator_controller;
pub mod maintenance_controller;
pub mod station_controller;
pub mod user_controller;
pub mod vehicle_controller;
