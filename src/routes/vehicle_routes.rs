use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::dto::ApiResponse;
use crate::models::auth::AuthUser;
use crate::models::fuel_log::FuelLog;
use crate::models::vehicle::{Vehicle, VehicleFilters, VehicleFuelStats};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::query::Paginated;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route(
            "/:id",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
        .route("/:id/fuel-logs", get(vehicle_fuel_logs))
        .route("/:id/stats", get(vehicle_fuel_stats))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(filters): Query<VehicleFilters>,
) -> Result<Json<ApiResponse<Paginated<Value>>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    Ok(Json(controller.list(&filters).await?))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Vehicle>>), AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(&auth, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    Ok(Json(controller.update(&auth, id, request).await?))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    Ok(Json(controller.delete(&auth, id).await?))
}

async fn vehicle_fuel_logs(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<FuelLog>>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    Ok(Json(controller.fuel_logs(id).await?))
}

async fn vehicle_fuel_stats(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<VehicleFuelStats>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    Ok(Json(controller.fuel_stats(id).await?))
}
