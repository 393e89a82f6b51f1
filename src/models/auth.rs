//! Modelos de autenticación
//!
//! La identidad del llamante viaja como valor por request (extension de
//! axum), nunca como estado global de sesión.

use serde::{Deserialize, Serialize};

/// Claims del JWT emitido en el login
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // oid del usuario
    pub username: String,
    pub exp: usize,
    pub iat: usize,
}

/// Usuario autenticado inyectado en las requests protegidas
#[derive(Debug, Clone, Serialize)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub active: bool,
    pub read_only: bool,
}

impl AuthUser {
    /// Los usuarios de solo lectura no pueden ejecutar escrituras
    pub fn ensure_can_write(&self) -> Result<(), crate::utils::errors::AppError> {
        if self.read_only {
            return Err(crate::utils::errors::AppError::Forbidden(
                "Read-only users cannot modify data".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_only_user_cannot_write() {
        let user = AuthUser {
            id: 1,
            username: "viewer".to_string(),
            full_name: "Viewer".to_string(),
            active: true,
            read_only: true,
        };
        assert!(user.ensure_can_write().is_err());
    }

    #[test]
    fn test_regular_user_can_write() {
        let user = AuthUser {
            id: 1,
            username: "editor".to_string(),
            full_name: "Editor".to_string(),
            active: true,
            read_only: false,
        };
        assert!(user.ensure_can_write().is_ok());
    }
}
