//! Modelo de Generator (tabla `veh_generator`)

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Generator {
    pub oid: i64,
    pub name: String,
    pub assigned_to: i64,
    pub fuel_type_oid: i64,
    pub vehicle_oid: Option<i64>,
    pub power_kw: Option<Decimal>,
    pub fuel_capacity_liters: Option<Decimal>,
    pub operating_hours: Option<Decimal>,
    pub consumption_liters_per_hour: Option<Decimal>,
    pub engine_capacity: Option<Decimal>,
    pub serial_number: Option<String>,
    pub note: Option<String>,
    pub entry_date: Option<NaiveDateTime>,
    pub entry_user: Option<i64>,
}

/// Filtros para búsqueda de generadores
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorFilters {
    pub search: Option<String>,
    pub fuel_type_oid: Option<i64>,
    pub vehicle_oid: Option<i64>,
    pub assigned_to: Option<i64>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Estadísticas agregadas del parque de generadores
#[derive(Debug, Serialize)]
pub struct GeneratorStats {
    pub total_generators: i64,
    pub total_power_kw: Decimal,
    pub total_operating_hours: Decimal,
    pub average_consumption: Option<Decimal>,
    pub generators_with_vehicles: i64,
}
