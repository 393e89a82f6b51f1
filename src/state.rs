//! Shared application state
//!
//! El estado compartido que se pasa a través del router de Axum: el pool
//! de la base y la configuración del entorno. Nada de estado mutable.

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }
}
