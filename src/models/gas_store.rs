//! Modelo de GasStore (tabla `gas_store`)
//!
//! Cada fila es una foto puntual del inventario, no un libro mayor; el
//! inventario actual es la fila activa más reciente por entry_date.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GasStore {
    pub oid: i64,
    pub entry_date: Option<NaiveDateTime>,
    pub gas_quantity: Option<Decimal>,
    pub solar_quantity: Option<Decimal>,
    pub eygpt_solar_quantity: Option<Decimal>,
    pub gas_bills: Option<Decimal>,
    pub gas_rec_oid: Option<i64>,
    pub prv_oid: Option<i64>,
    pub prv_qty: Option<Decimal>,
    pub fill_up_date: Option<NaiveDateTime>,
    pub note: Option<String>,
    pub is_active: Option<i64>,
}

/// Filtros para el historial de inventario
#[derive(Debug, Clone, Deserialize)]
pub struct GasStoreFilters {
    pub is_active: Option<i64>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub min_quantity: Option<Decimal>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Totales agregados del almacén
#[derive(Debug, Serialize)]
pub struct GasStoreStats {
    pub total_stores: i64,
    pub active_stores: i64,
    pub total_gas_quantity: Decimal,
    pub total_solar_quantity: Decimal,
    pub total_bills_value: Decimal,
}
