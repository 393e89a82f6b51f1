//! Modelo de User (tabla `users`)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub oid: i64,
    pub user_name_new: String,
    // El hash nunca se serializa hacia el cliente
    #[serde(skip_serializing)]
    pub user_password: String,
    pub user_ssn: Option<i64>,
    pub user_full_name: String,
    pub user_active: Option<i64>,
    pub read_only: Option<i64>,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.user_active.unwrap_or(0) == 1
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only.unwrap_or(0) == 1
    }
}

/// Filtros para búsqueda de usuarios
#[derive(Debug, Clone, Deserialize)]
pub struct UserFilters {
    pub search: Option<String>,
    pub user_active: Option<i64>,
    pub read_only: Option<i64>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
