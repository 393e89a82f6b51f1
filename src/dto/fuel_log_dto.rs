use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

/// Request para crear un registro de combustible
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFuelLogRequest {
    pub veh_oid: Option<i64>,
    pub generator_oid: Option<i64>,
    pub fill_up_date: NaiveDateTime,
    pub gallons: Decimal,
    pub fuel_id: i64,
    pub fuel_year: i64,
    pub gas_type: i64,
    pub odometer: Option<Decimal>,
    pub station_oid: Option<i64>,
    pub status_oid: Option<i64>,

    #[validate(length(max = 4000))]
    pub note: Option<String>,
}

/// Request para actualizar un registro de combustible (campos parciales)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFuelLogRequest {
    pub veh_oid: Option<i64>,
    pub generator_oid: Option<i64>,
    pub fill_up_date: Option<NaiveDateTime>,
    pub gallons: Option<Decimal>,
    pub fuel_id: Option<i64>,
    pub fuel_year: Option<i64>,
    pub gas_type: Option<i64>,
    pub odometer: Option<Decimal>,
    pub station_oid: Option<i64>,
    pub status_oid: Option<i64>,

    #[validate(length(max = 4000))]
    pub note: Option<String>,
}
