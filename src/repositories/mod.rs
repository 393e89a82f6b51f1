//! Repositorios de entidades
//!
//! Cada repositorio es dueño del SQL de su entidad: CRUD de una fila por
//! sentencia más la consulta filtrada/paginada construida con el motor
//! genérico de utils::query.

pub mod constant_repository;
pub mod fuel_log_repository;
pub mod gas_bill_repository;
pub mod gas_store_repository;
pub mod generator_repository;
pub mod maintenance_repository;
pub mod station_repository;
pub mod user_repository;
pub mod vehicle_repository;
