use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::controllers::fuel_log_controller::FuelLogController;
use crate::dto::fuel_log_dto::{CreateFuelLogRequest, UpdateFuelLogRequest};
use crate::dto::ApiResponse;
use crate::models::auth::AuthUser;
use crate::models::fuel_log::{FuelLog, FuelLogFilters};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::query::Paginated;

pub fn create_fuel_log_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_fuel_logs).post(create_fuel_log))
        .route(
            "/:id",
            get(get_fuel_log).put(update_fuel_log).delete(delete_fuel_log),
        )
}

async fn list_fuel_logs(
    State(state): State<AppState>,
    Query(filters): Query<FuelLogFilters>,
) -> Result<Json<ApiResponse<Paginated<Value>>>, AppError> {
    let controller = FuelLogController::new(state.pool.clone());
    Ok(Json(controller.list(&filters).await?))
}

async fn get_fuel_log(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let controller = FuelLogController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn create_fuel_log(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<CreateFuelLogRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FuelLog>>), AppError> {
    let controller = FuelLogController::new(state.pool.clone());
    let response = controller.create(&auth, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_fuel_log(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateFuelLogRequest>,
) -> Result<Json<ApiResponse<FuelLog>>, AppError> {
    let controller = FuelLogController::new(state.pool.clone());
    Ok(Json(controller.update(&auth, id, request).await?))
}

async fn delete_fuel_log(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = FuelLogController::new(state.pool.clone());
    Ok(Json(controller.delete(&auth, id).await?))
}
