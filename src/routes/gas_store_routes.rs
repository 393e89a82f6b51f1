use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::gas_store_controller::GasStoreController;
use crate::dto::gas_store_dto::{
    CreateGasStoreRequest, UpdateGasStoreRequest, UpdateInventoryRequest,
};
use crate::dto::gas_bill_dto::SummaryRange;
use crate::dto::ApiResponse;
use crate::models::auth::AuthUser;
use crate::models::gas_store::{GasStore, GasStoreFilters, GasStoreStats};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::query::Paginated;

pub fn create_inventory_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_gas_stores).post(create_gas_store))
        .route("/current", get(current_inventory))
        .route("/history", get(inventory_history))
        .route("/update", post(record_snapshot))
        .route("/stats", get(inventory_stats))
        .route(
            "/:id",
            get(get_gas_store).put(update_gas_store).delete(delete_gas_store),
        )
}

async fn list_gas_stores(
    State(state): State<AppState>,
    Query(filters): Query<GasStoreFilters>,
) -> Result<Json<ApiResponse<Paginated<GasStore>>>, AppError> {
    let controller = GasStoreController::new(state.pool.clone());
    Ok(Json(controller.list(&filters).await?))
}

async fn get_gas_store(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<GasStore>>, AppError> {
    let controller = GasStoreController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn current_inventory(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Option<GasStore>>>, AppError> {
    let controller = GasStoreController::new(state.pool.clone());
    Ok(Json(controller.current().await?))
}

async fn inventory_history(
    State(state): State<AppState>,
    Query(range): Query<SummaryRange>,
) -> Result<Json<ApiResponse<Vec<GasStore>>>, AppError> {
    let controller = GasStoreController::new(state.pool.clone());
    Ok(Json(controller.history(range.date_from, range.date_to).await?))
}

async fn create_gas_store(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<CreateGasStoreRequest>,
) -> Result<(StatusCode, Json<ApiResponse<GasStore>>), AppError> {
    let controller = GasStoreController::new(state.pool.clone());
    let response = controller.create(&auth, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn record_snapshot(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<UpdateInventoryRequest>,
) -> Result<Json<ApiResponse<GasStore>>, AppError> {
    let controller = GasStoreController::new(state.pool.clone());
    Ok(Json(controller.record_snapshot(&auth, request).await?))
}

async fn update_gas_store(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateGasStoreRequest>,
) -> Result<Json<ApiResponse<GasStore>>, AppError> {
    let controller = GasStoreController::new(state.pool.clone());
    Ok(Json(controller.update(&auth, id, request).await?))
}

async fn delete_gas_store(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = GasStoreController::new(state.pool.clone());
    Ok(Json(controller.delete(&auth, id).await?))
}

async fn inventory_stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<GasStoreStats>>, AppError> {
    let controller = GasStoreController::new(state.pool.clone());
    Ok(Json(controller.stats().await?))
}
