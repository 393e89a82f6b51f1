use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

/// Request para crear un nuevo vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub vehicle_num: String,

    #[validate(length(max = 100))]
    pub model: Option<String>,

    pub modle_year: Option<i64>,

    #[validate(length(max = 100))]
    pub plate_num: Option<String>,

    #[validate(length(max = 100))]
    pub old_plate_num: Option<String>,

    #[validate(length(max = 100))]
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

    #[validate(length(max = 4000))]
    pub note: Option<String>,
}

/// Request para actualizar un vehículo existente (campos parciales)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub vehicle_num: Option<String>,

    #[validate(length(max = 100))]
    pub model: Option<String>,

    pub modle_year: Option<i64>,

    #[validate(length(max = 100))]
    pub plate_num: Option<String>,

    #[validate(length(max = 100))]
    pub old_plate_num: Option<String>,

    #[validate(length(max = 100))]
    pub vin_num: Option<String>,

    pub fuel_type_oid: Option<i64>,
    pub type_oid: Option<i64>,
    pub usage_type_oid: Option<i64>,
    pub vendor_oid: Option<i64>,
    pub engine_capacity: Option<Decimal>,
    pub tank_capacity: Option<Decimal>,
    pub odometer: Option<Decimal>,
    pub kelometer_per_liter: Option<Decimal>,
    pub assigned_to: Option<i64>,
    pub status_oid: Option<i64>,

    #[validate(length(max = 4000))]
    pub note: Option<String>,
}
