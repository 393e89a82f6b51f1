use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::controllers::gas_bill_controller::GasBillController;
use crate::dto::gas_bill_dto::{CreateGasBillRequest, SummaryRange, UpdateGasBillRequest};
use crate::dto::ApiResponse;
use crate::models::auth::AuthUser;
use crate::models::gas_bill::{GasBill, GasBillFilters, GasBillSummary};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::query::Paginated;

pub fn create_gas_bill_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_gas_bills).post(create_gas_bill))
        .route("/summary", get(bills_summary))
        .route(
            "/:id",
            get(get_gas_bill).put(update_gas_bill).delete(delete_gas_bill),
        )
}

async fn list_gas_bills(
    State(state): State<AppState>,
    Query(filters): Query<GasBillFilters>,
) -> Result<Json<ApiResponse<Paginated<Value>>>, AppError> {
    let controller = GasBillController::new(state.pool.clone());
    Ok(Json(controller.list(&filters).await?))
}

async fn get_gas_bill(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let controller = GasBillController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn create_gas_bill(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<CreateGasBillRequest>,
) -> Result<(StatusCode, Json<ApiResponse<GasBill>>), AppError> {
    let controller = GasBillController::new(state.pool.clone());
    let response = controller.create(&auth, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_gas_bill(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateGasBillRequest>,
) -> Result<Json<ApiResponse<GasBill>>, AppError> {
    let controller = GasBillController::new(state.pool.clone());
    Ok(Json(controller.update(&auth, id, request).await?))
}

async fn delete_gas_bill(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = GasBillController::new(state.pool.clone());
    Ok(Json(controller.delete(&auth, id).await?))
}

async fn bills_summary(
    State(state): State<AppState>,
    Query(range): Query<SummaryRange>,
) -> Result<Json<ApiResponse<GasBillSummary>>, AppError> {
    let controller = GasBillController::new(state.pool.clone());
    Ok(Json(controller.summary(&range).await?))
}
