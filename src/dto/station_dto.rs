use serde::Deserialize;
use validator::Validate;

/// Request para crear una estación
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStationRequest {
    #[validate(length(min = 1, max = 4000))]
    pub station_name: String,

    #[validate(length(max = 4000))]
    pub station_ename: Option<String>,

    pub station_weight: Option<i64>,
    pub parent_oid: Option<i64>,
}

/// Request para actualizar una estación (campos parciales)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStationRequest {
    #[validate(length(min = 1, max = 4000))]
    pub station_name: Option<String>,

    #[validate(length(max = 4000))]
    pub station_ename: Option<String>,

    pub station_weight: Option<i64>,
    pub parent_oid: Option<i64>,
}
