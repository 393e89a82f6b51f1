//! Modelo de Station (tabla `stations`)
//!
//! Las estaciones forman una jerarquía opcional vía parent_oid y se listan
//! por peso de ordenamiento ascendente, no por fecha.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Station {
    pub oid: i64,
    pub station_name: String,
    pub station_ename: Option<String>,
    pub station_weight: Option<i64>,
    pub parent_oid: Option<i64>,
}

/// Filtros para búsqueda de estaciones
#[derive(Debug, Clone, Deserialize)]
pub struct StationFilters {
    pub search: Option<String>,
    pub parent_oid: Option<i64>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Opción para poblar selects en el SPA
#[derive(Debug, Serialize, FromRow)]
pub struct SelectOption {
    pub value: i64,
    pub label: String,
}
