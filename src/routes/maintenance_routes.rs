use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::maintenance_controller::MaintenanceController;
use crate::dto::maintenance_dto::{CreateMaintenanceRequest, UpdateMaintenanceRequest};
use crate::dto::ApiResponse;
use crate::models::auth::AuthUser;
use crate::models::maintenance::{MaintenanceFilters, MaintenanceRecord};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::query::Paginated;

pub fn create_maintenance_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_maintenance).post(create_maintenance))
        .route(
            "/:id",
            get(get_maintenance)
                .put(update_maintenance)
                .delete(delete_maintenance),
        )
}

async fn list_maintenance(
    State(state): State<AppState>,
    Query(filters): Query<MaintenanceFilters>,
) -> Result<Json<ApiResponse<Paginated<MaintenanceRecord>>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    Ok(Json(controller.list(&filters).await?))
}

async fn get_maintenance(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MaintenanceRecord>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn create_maintenance(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<CreateMaintenanceRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MaintenanceRecord>>), AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.create(&auth, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_maintenance(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateMaintenanceRequest>,
) -> Result<Json<ApiResponse<MaintenanceRecord>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    Ok(Json(controller.update(&auth, id, request).await?))
}

async fn delete_maintenance(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    Ok(Json(controller.delete(&auth, id).await?))
}
