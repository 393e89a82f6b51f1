//! Routers por recurso
//!
//! Un router por entidad, nesteados bajo /api en main. Las rutas acá son
//! las protegidas; auth_routes arma el grupo público.

pub mod auth_routes;
pub mod constant_routes;
pub mod dashboard_routes;
pub mod fuel_log_routes;
pub mod gas_bill_routes;
pub mod gas_store_routes;
pub mod generator_routes;
pub mod maintenance_routes;
pub mod station_routes;
pub mod user_routes;
pub mod vehicle_routes;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Arma la aplicación completa: rutas públicas de auth, recursos
/// protegidos detrás del middleware JWT, CORS y trazas HTTP.
pub fn create_app(state: AppState) -> Router {
    let cors = if state.config.cors_origins.is_empty() {
        crate::middleware::cors::cors_middleware()
    } else {
        crate::middleware::cors::cors_middleware_with_origins(&state.config.cors_origins)
    };

    let protected = create_protected_router().route_layer(axum::middleware::from_fn_with_state(
        state.clone(),
        crate::middleware::auth::auth_middleware,
    ));

    let api = Router::new()
        .nest("/auth", auth_routes::create_auth_router())
        .merge(protected);

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "fuel-management",
    }))
}

/// Router de recursos protegidos (requiere AuthUser en extensions)
pub fn create_protected_router() -> Router<AppState> {
    Router::new()
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/generators", generator_routes::create_generator_router())
        .nest("/fuel-logs", fuel_log_routes::create_fuel_log_router())
        .nest("/invoices", gas_bill_routes::create_gas_bill_router())
        .nest("/inventory", gas_store_routes::create_inventory_router())
        .nest("/stations", station_routes::create_station_router())
        .nest("/users", user_routes::create_user_router())
        .nest("/maintenance", maintenance_routes::create_maintenance_router())
        .nest("/constants", constant_routes::create_constant_router())
        .nest("/dashboard", dashboard_routes::create_dashboard_router())
}
