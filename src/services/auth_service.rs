//! Servicio de autenticación
//!
//! Emisión y verificación de tokens JWT y manejo de contraseñas. Las filas
//! heredadas del esquema Oracle guardan la contraseña en texto plano; las
//! creadas por esta aplicación usan bcrypt. El login verifica el hash y cae
//! a la comparación con trim para las filas legadas.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::config::environment::EnvironmentConfig;
use crate::models::auth::{AuthUser, Claims};
use crate::models::user::User;
use crate::utils::errors::AppError;

pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_secs: i64,
}

impl AuthService {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_ref()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_ref()),
            expiration_secs: config.jwt_expiration as i64,
        }
    }

    /// Genera el token de sesión para un usuario autenticado
    pub fn generate_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + Duration::seconds(self.expiration_secs);

        let claims = Claims {
            sub: user.oid.to_string(),
            username: user.user_name_new.clone(),
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Error generating token: {}", e)))
    }

    /// Decodifica y valida un token; devuelve los claims
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))
    }
}

/// Hashea una contraseña nueva con bcrypt
pub fn hash_password(plain: &str) -> Result<String, AppError> {
    bcrypt::hash(plain, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))
}

/// Verifica una contraseña contra el valor almacenado.
///
/// Filas bcrypt ($2...) se verifican con el hash; cualquier otro valor es
/// una fila legada en texto plano y se compara con trim.
pub fn verify_password(supplied: &str, stored: &str) -> bool {
    if stored.starts_with("$2") {
        bcrypt::verify(supplied, stored).unwrap_or(false)
    } else {
        supplied.trim() == stored.trim()
    }
}

/// Construye la identidad request-scoped a partir de la fila de usuario
pub fn auth_user_from(user: &User) -> AuthUser {
    AuthUser {
        id: user.oid,
        username: user.user_name_new.clone(),
        full_name: user.user_full_name.clone(),
        active: user.is_active(),
        read_only: user.is_read_only(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User {
            oid: 7,
            user_name_new: "admin".to_string(),
            user_password: "secret".to_string(),
            user_ssn: None,
            user_full_name: "Administrator".to_string(),
            user_active: Some(1),
            read_only: Some(0),
        }
    }

    fn test_service() -> AuthService {
        AuthService {
            encoding_key: EncodingKey::from_secret(b"test-secret"),
            decoding_key: DecodingKey::from_secret(b"test-secret"),
            expiration_secs: 3600,
        }
    }

    #[test]
    fn test_token_roundtrip() {
        let service = test_service();
        let token = service.generate_token(&test_user()).unwrap();
        let claims = service.decode_token(&token).unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.username, "admin");
    }

    #[test]
    fn test_garbage_token_is_unauthorized() {
        let service = test_service();
        assert!(service.decode_token("not-a-token").is_err());
    }

    #[test]
    fn test_bcrypt_roundtrip() {
        let hash = hash_password("s3cret").unwrap();
        assert!(verify_password("s3cret", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn test_legacy_plaintext_fallback_trims() {
        assert!(verify_password("secret", " secret "));
        assert!(!verify_password("secret", "other"));
    }

    #[test]
    fn test_auth_user_flags() {
        let auth = auth_user_from(&test_user());
        assert!(auth.active);
        assert!(!auth.read_only);
        assert_eq!(auth.full_name, "Administrator");
    }
}
