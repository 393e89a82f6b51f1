use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

/// Request para crear una foto de inventario
#[derive(Debug, Deserialize, Validate)]
pub struct CreateGasStoreRequest {
    pub entry_date: Option<NaiveDateTime>,
    pub gas_quantity: Option<Decimal>,
    pub solar_quantity: Option<Decimal>,
    pub eygpt_solar_quantity: Option<Decimal>,
    pub gas_bills: Option<Decimal>,
    pub gas_rec_oid: Option<i64>,
    pub prv_oid: Option<i64>,
    pub prv_qty: Option<Decimal>,
    pub fill_up_date: Option<NaiveDateTime>,

    #[validate(length(max = 1000))]
    pub note: Option<String>,

    pub is_active: Option<i64>,
}

/// Request para actualizar una foto existente (campos parciales)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateGasStoreRequest {
    pub entry_date: Option<NaiveDateTime>,
    pub gas_quantity: Option<Decimal>,
    pub solar_quantity: Option<Decimal>,
    pub eygpt_solar_quantity: Option<Decimal>,
    pub gas_bills: Option<Decimal>,
    pub gas_rec_oid: Option<i64>,
    pub prv_oid: Option<i64>,
    pub prv_qty: Option<Decimal>,
    pub fill_up_date: Option<NaiveDateTime>,

    #[validate(length(max = 1000))]
    pub note: Option<String>,

    pub is_active: Option<i64>,
}

/// Request del endpoint de actualización rápida de inventario:
/// siempre crea una fila nueva activa con la fecha del servidor.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateInventoryRequest {
    pub gas_quantity: Decimal,
    pub solar_quantity: Option<Decimal>,

    #[validate(length(max = 1000))]
    pub note: Option<String>,
}
