use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::constant_controller::ConstantController;
use crate::dto::constant_dto::{CreateConstantRequest, UpdateConstantRequest};
use crate::dto::ApiResponse;
use crate::models::auth::AuthUser;
use crate::models::constant::{Constant, ConstantFilters};
use crate::models::station::SelectOption;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::query::Paginated;

pub fn create_constant_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_constants).post(create_constant))
        .route("/types", get(constant_types))
        .route("/type/:type", get(constants_by_type))
        .route("/type/:type/options", get(constant_options))
        .route(
            "/:id",
            get(get_constant).put(update_constant).delete(delete_constant),
        )
}

async fn list_constants(
    State(state): State<AppState>,
    Query(filters): Query<ConstantFilters>,
) -> Result<Json<ApiResponse<Paginated<Constant>>>, AppError> {
    let controller = ConstantController::new(state.pool.clone());
    Ok(Json(controller.list(&filters).await?))
}

async fn get_constant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Constant>>, AppError> {
    let controller = ConstantController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn create_constant(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<CreateConstantRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Constant>>), AppError> {
    let controller = ConstantController::new(state.pool.clone());
    let response = controller.create(&auth, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_constant(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateConstantRequest>,
) -> Result<Json<ApiResponse<Constant>>, AppError> {
    let controller = ConstantController::new(state.pool.clone());
    Ok(Json(controller.update(&auth, id, request).await?))
}

async fn delete_constant(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = ConstantController::new(state.pool.clone());
    Ok(Json(controller.delete(&auth, id).await?))
}

async fn constants_by_type(
    State(state): State<AppState>,
    Path(type_tag): Path<String>,
) -> Result<Json<ApiResponse<Vec<Constant>>>, AppError> {
    let controller = ConstantController::new(state.pool.clone());
    Ok(Json(controller.by_type(&type_tag).await?))
}

async fn constant_options(
    State(state): State<AppState>,
    Path(type_tag): Path<String>,
) -> Result<Json<ApiResponse<Vec<SelectOption>>>, AppError> {
    let controller = ConstantController::new(state.pool.clone());
    Ok(Json(controller.options(&type_tag).await?))
}

async fn constant_types(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<String>>>, AppError> {
    let controller = ConstantController::new(state.pool.clone());
    Ok(Json(controller.types().await?))
}
