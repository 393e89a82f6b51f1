//! Modelo de MaintenanceRecord (tabla `vehicle_maintenance`)

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaintenanceRecord {
    pub oid: i64,
    pub vehicle_oid: i64,
    pub mntc_type_oid: i64,
    pub is_accidental: Option<i64>,
    pub current_mileage: Option<Decimal>,
    pub mntc_date: NaiveDateTime,
    pub status_oid: Option<i64>,
    pub finish_date: Option<NaiveDateTime>,
    pub note: Option<String>,
    pub entry_user: Option<i64>,
    pub mntc_year: Option<i64>,
    pub responsible: Option<String>,
    pub repair_time: Option<i64>,
}

/// Filtros para búsqueda de mantenimientos
#[derive(Debug, Clone, Deserialize)]
pub struct MaintenanceFilters {
    pub vehicle_oid: Option<i64>,
    pub mntc_type_oid: Option<i64>,
    pub status_oid: Option<i64>,
    pub is_accidental: Option<i64>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
