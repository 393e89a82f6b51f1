use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use crate::controllers::user_controller::UserController;
use crate::dto::user_dto::{CreateUserRequest, UpdateUserRequest};
use crate::dto::ApiResponse;
use crate::models::auth::AuthUser;
use crate::models::user::{User, UserFilters};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::query::Paginated;

pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
        .route("/:id/toggle-status", put(toggle_user_status))
}

async fn list_users(
    State(state): State<AppState>,
    Query(filters): Query<UserFilters>,
) -> Result<Json<ApiResponse<Paginated<User>>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    Ok(Json(controller.list(&filters).await?))
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn create_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.create(&auth, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    Ok(Json(controller.update(&auth, id, request).await?))
}

async fn delete_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    Ok(Json(controller.delete(&auth, id).await?))
}

async fn toggle_user_status(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    Ok(Json(controller.toggle_status(&auth, id).await?))
}
