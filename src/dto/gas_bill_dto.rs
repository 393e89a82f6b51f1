use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

/// Request para crear una factura de combustible
#[derive(Debug, Deserialize, Validate)]
pub struct CreateGasBillRequest {
    pub gas_station_oid: i64,
    pub fuel_type_oid: i64,
    pub bill_type_oid: i64,
    pub quantity: Decimal,
    pub price: Option<Decimal>,
    pub bill_num: Option<i64>,
    pub bill_date: Option<NaiveDateTime>,
    pub en_date: Option<NaiveDateTime>,
    pub status_oid: Option<i64>,
    pub donor_name_oid: Option<i64>,

    #[validate(length(max = 4000))]
    pub notes: Option<String>,
}

/// Request para actualizar una factura (campos parciales)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateGasBillRequest {
    pub gas_station_oid: Option<i64>,
    pub fuel_type_oid: Option<i64>,
    pub bill_type_oid: Option<i64>,
    pub quantity: Option<Decimal>,
    pub price: Option<Decimal>,
    pub bill_num: Option<i64>,
    pub bill_date: Option<NaiveDateTime>,
    pub en_date: Option<NaiveDateTime>,
    pub status_oid: Option<i64>,
    pub donor_name_oid: Option<i64>,

    #[validate(length(max = 4000))]
    pub notes: Option<String>,
}

/// Rango de fechas para el resumen de facturación
#[derive(Debug, Deserialize)]
pub struct SummaryRange {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}
