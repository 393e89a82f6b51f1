//! Modelo de Vehicle
//!
//! Mapea la tabla `vehicle` del esquema heredado; los nombres de columna
//! (incluidos modle_year y kelometer_per_liter) se conservan tal cual.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub oid: i64,
    pub vehicle_num: String,
    pub model: Option<String>,
    pub modle_year: Option<i64>,
    pub plate_num: Option<String>,
    pub old_plate_num: Option<String>,
    pub vin_num: Option<String>,
    pub fuel_type_oid: i64,
    pub type_oid: i64,
    pub usage_type_oid: Option<i64>,
    pub vendor_oid: Option<i64>,
    pub engine_capacity: Option<Decimal>,
    pub tank_capacity: Option<Decimal>,
    pub odometer: Option<Decimal>,
    pub kelometer_per_liter: Option<Decimal>,
    pub assigned_to: Option<i64>,
    pub status_oid: Option<i64>,
    pub note: Option<String>,
    pub entry_date: Option<NaiveDateTime>,
    pub entry_user: Option<i64>,
}

/// Filtros para búsqueda de vehículos
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleFilters {
    pub search: Option<String>,
    pub status_oid: Option<i64>,
    pub fuel_type_oid: Option<i64>,
    pub assigned_to: Option<i64>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Estadísticas de combustible de un vehículo
#[derive(Debug, Serialize)]
pub struct VehicleFuelStats {
    pub total_fuel_logs: i64,
    pub total_gallons: Decimal,
    pub last_fuel_date: Option<NaiveDateTime>,
    pub current_odometer: Option<Decimal>,
}
