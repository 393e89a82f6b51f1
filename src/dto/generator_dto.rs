use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

/// Request para crear un generador
#[derive(Debug, Deserialize, Validate)]
pub struct CreateGeneratorRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    pub assigned_to: i64,
    pub fuel_type_oid: i64,
    pub vehicle_oid: Option<i64>,
    pub power_kw: Option<Decimal>,
    pub fuel_capacity_liters: Option<Decimal>,
    pub operating_hours: Option<Decimal>,
    pub consumption_liters_per_hour: Option<Decimal>,
    pub engine_capacity: Option<Decimal>,

    #[validate(length(max = 100))]
    pub serial_number: Option<String>,

    #[validate(length(max = 4000))]
    pub note: Option<String>,
}

/// Request para actualizar un generador (campos parciales)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateGeneratorRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub assigned_to: Option<i64>,
    pub fuel_type_oid: Option<i64>,
    pub vehicle_oid: Option<i64>,
    pub power_kw: Option<Decimal>,
    pub fuel_capacity_liters: Option<Decimal>,
    pub operating_hours: Option<Decimal>,
    pub consumption_liters_per_hour: Option<Decimal>,
    pub engine_capacity: Option<Decimal>,

    #[validate(length(max = 100))]
    pub serial_number: Option<String>,

    #[validate(length(max = 4000))]
    pub note: Option<String>,
}
