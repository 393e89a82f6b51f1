//! Rutas de autenticación
//!
//! Estas rutas son públicas: login emite el token, verify y user permiten
//! al SPA revalidar la sesión almacenada del lado del cliente.

use axum::{
    extract::State,
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::dto::ApiResponse;
use crate::middleware::auth::{bearer_token, resolve_token};
use crate::models::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/verify", get(verify))
        .route("/user", get(current_user))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    let controller = AuthController::new(state.pool.clone(), &state.config);
    Ok(Json(controller.login(request).await?))
}

/// El token vive del lado del cliente; logout solo confirma el cierre
async fn logout() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message_only("Logged out successfully"))
}

/// Responde 200 con authenticated true/false, nunca 401
async fn verify(State(state): State<AppState>, headers: HeaderMap) -> Json<Value> {
    if let Some(token) = bearer_token(&headers) {
        if let Ok(user) = resolve_token(&state, token).await {
            return Json(json!({ "authenticated": true, "user": user }));
        }
    }
    Json(json!({ "authenticated": false }))
}

async fn current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AuthUser>, AppError> {
    let token = bearer_token(&headers)
        .ok_or_else(|| AppError::Unauthorized("Unauthenticated".to_string()))?;
    let user = resolve_token(&state, token).await?;
    Ok(Json(user))
}
