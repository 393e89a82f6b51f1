//! Modelo de Constant (tabla `constants`)
//!
//! El almacén de constantes es la enumeración blanda del esquema: la clave
//! efectiva de búsqueda es (cnst_type, oid); oid por sí solo no es único
//! entre tipos. Los tags de tipo son strings libres heredados y se comparan
//! tal cual, sin normalizar mayúsculas ni ortografía.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Constant {
    pub oid: i64,
    pub cnst_name: String,
    pub cnst_type: Option<String>,
    pub cnst_eng: Option<String>,
}

/// Filtros para búsqueda de constantes
#[derive(Debug, Clone, Deserialize)]
pub struct ConstantFilters {
    pub search: Option<String>,
    pub cnst_type: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
