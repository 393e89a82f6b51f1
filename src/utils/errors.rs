//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP con el envelope uniforme.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Los mensajes crudos de la base de datos solo se exponen al cliente
/// con EXPOSE_ERROR_DETAILS=true; en cualquier otro caso van al log.
fn expose_details() -> bool {
    std::env::var("EXPOSE_ERROR_DETAILS")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false)
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                let message = if expose_details() {
                    format!("Database error: {}", e)
                } else {
                    "An error occurred while accessing the database".to_string()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            AppError::Validation(e) => {
                tracing::warn!("Validation error: {}", e);
                (StatusCode::BAD_REQUEST, format!("Validation error: {}", e))
            }
            AppError::Unauthorized(msg) => {
                tracing::warn!("Unauthorized access: {}", msg);
                (StatusCode::UNAUTHORIZED, msg.clone())
            }
            AppError::Forbidden(msg) => {
                tracing::warn!("Forbidden access: {}", msg);
                (StatusCode::FORBIDDEN, msg.clone())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                let message = if expose_details() {
                    msg.clone()
                } else {
                    "An unexpected error occurred".to_string()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        let body = json!({
            "success": false,
            "message": message,
            "data": null,
        });

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación de un solo campo
pub fn validation_error(field: &'static str, message: &'static str) -> AppError {
    use validator::ValidationError;

    let mut error = ValidationError::new("custom");
    error.message = Some(message.into());

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::NotFound("Vehicle not found".to_string());
        let (status, message) = err.status_and_message();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(message, "Vehicle not found");
    }

    #[test]
    fn test_validation_maps_to_400() {
        let err = validation_error("gallons", "gallons is required");
        let (status, _) = err.status_and_message();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_error_is_masked_by_default() {
        std::env::remove_var("EXPOSE_ERROR_DETAILS");
        let err = AppError::Database(sqlx::Error::PoolClosed);
        let (status, message) = err.status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!message.to_lowercase().contains("pool"));
    }

    #[test]
    fn test_unauthorized_maps_to_401() {
        let err = AppError::Unauthorized("Invalid token".to_string());
        let (status, _) = err.status_and_message();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
