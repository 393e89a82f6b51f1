//! Middleware de autenticación JWT
//!
//! Decodifica el token Bearer, carga la fila del usuario y la inyecta como
//! AuthUser en las extensions de la request. La identidad es un valor por
//! request; no existe estado de sesión global.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::models::auth::AuthUser;
use crate::repositories::user_repository::UserRepository;
use crate::services::auth_service::{self, AuthService};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Extrae el token Bearer del header Authorization
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

/// Valida el token y resuelve la identidad contra la base
pub async fn resolve_token(state: &AppState, token: &str) -> Result<AuthUser, AppError> {
    let claims = AuthService::new(&state.config).decode_token(token)?;

    let oid: i64 = claims
        .sub
        .parse()
        .map_err(|_| AppError::Unauthorized("Invalid user id in token".to_string()))?;

    let user = UserRepository::new(state.pool.clone())
        .find_by_id(oid)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;

    if !user.is_active() {
        return Err(AppError::Unauthorized("Inactive or suspended user".to_string()));
    }

    Ok(auth_service::auth_user_from(&user))
}

/// Middleware para las rutas protegidas
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())
        .ok_or_else(|| AppError::Unauthorized("Authorization token required".to_string()))?
        .to_string();

    let auth_user = resolve_token(&state, &token).await?;
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_missing_or_malformed_header() {
        let headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic abc123"),
        );
        assert_eq!(bearer_token(&headers), None);
    }
}
