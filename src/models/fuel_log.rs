//! Modelo de FuelLog (tabla `vehicle_fuel_log`)
//!
//! Cada registro pertenece exactamente a un vehículo o a un generador;
//! la exclusividad se valida en la capa de datos, no solo en el formulario.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FuelLog {
    pub oid: i64,
    pub veh_oid: Option<i64>,
    pub generator_oid: Option<i64>,
    pub entry_user: i64,
    pub entry_date: Option<NaiveDateTime>,
    pub fill_up_date: NaiveDateTime,
    pub gallons: Decimal,
    pub fuel_id: i64,
    pub fuel_year: i64,
    pub gas_type: i64,
    pub odometer: Option<Decimal>,
    pub station_oid: Option<i64>,
    pub status_oid: Option<i64>,
    pub note: Option<String>,
}

/// Filtros para búsqueda de registros de combustible
#[derive(Debug, Clone, Deserialize)]
pub struct FuelLogFilters {
    pub veh_oid: Option<i64>,
    pub generator_oid: Option<i64>,
    pub station_oid: Option<i64>,
    pub fuel_year: Option<i64>,
    pub gas_type: Option<i64>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
