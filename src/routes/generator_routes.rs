use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::controllers::generator_controller::GeneratorController;
use crate::dto::generator_dto::{CreateGeneratorRequest, UpdateGeneratorRequest};
use crate::dto::ApiResponse;
use crate::models::auth::AuthUser;
use crate::models::generator::{Generator, GeneratorFilters, GeneratorStats};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::query::Paginated;

pub fn create_generator_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_generators).post(create_generator))
        .route("/stats", get(generator_stats))
        .route(
            "/:id",
            get(get_generator)
                .put(update_generator)
                .delete(delete_generator),
        )
        .route("/:id/fuel-logs", get(generator_fuel_logs))
}

async fn list_generators(
    State(state): State<AppState>,
    Query(filters): Query<GeneratorFilters>,
) -> Result<Json<ApiResponse<Paginated<Value>>>, AppError> {
    let controller = GeneratorController::new(state.pool.clone());
    Ok(Json(controller.list(&filters).await?))
}

async fn get_generator(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let controller = GeneratorController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn create_generator(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<CreateGeneratorRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Generator>>), AppError> {
    let controller = GeneratorController::new(state.pool.clone());
    let response = controller.create(&auth, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_generator(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateGeneratorRequest>,
) -> Result<Json<ApiResponse<Generator>>, AppError> {
    let controller = GeneratorController::new(state.pool.clone());
    Ok(Json(controller.update(&auth, id, request).await?))
}

async fn delete_generator(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = GeneratorController::new(state.pool.clone());
    Ok(Json(controller.delete(&auth, id).await?))
}

async fn generator_fuel_logs(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let controller = GeneratorController::new(state.pool.clone());
    Ok(Json(controller.fuel_logs(id).await?))
}

async fn generator_stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<GeneratorStats>>, AppError> {
    let controller = GeneratorController::new(state.pool.clone());
    Ok(Json(controller.stats().await?))
}
