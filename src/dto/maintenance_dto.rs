use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

/// Request para crear un registro de mantenimiento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceRequest {
    pub vehicle_oid: i64,
    pub mntc_type_oid: i64,
    pub is_accidental: Option<i64>,
    pub current_mileage: Option<Decimal>,
    pub mntc_date: NaiveDateTime,
    pub status_oid: Option<i64>,
    pub finish_date: Option<NaiveDateTime>,

    #[validate(length(max = 4000))]
    pub note: Option<String>,

    pub mntc_year: Option<i64>,

    #[validate(length(max = 255))]
    pub responsible: Option<String>,

    pub repair_time: Option<i64>,
}

/// Request para actualizar un mantenimiento (campos parciales)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMaintenanceRequest {
    pub vehicle_oid: Option<i64>,
    pub mntc_type_oid: Option<i64>,
    pub is_accidental: Option<i64>,
    pub current_mileage: Option<Decimal>,
    pub mntc_date: Option<NaiveDateTime>,
    pub status_oid: Option<i64>,
    pub finish_date: Option<NaiveDateTime>,

    #[validate(length(max = 4000))]
    pub note: Option<String>,

    pub mntc_year: Option<i64>,

    #[validate(length(max = 255))]
    pub responsible: Option<String>,

    pub repair_time: Option<i64>,
}
