use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::station_controller::StationController;
use crate::dto::station_dto::{CreateStationRequest, UpdateStationRequest};
use crate::dto::ApiResponse;
use crate::models::auth::AuthUser;
use crate::models::station::{SelectOption, Station, StationFilters};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::query::Paginated;

pub fn create_station_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_stations).post(create_station))
        .route("/options", get(station_options))
        .route(
            "/:id",
            get(get_station).put(update_station).delete(delete_station),
        )
}

async fn list_stations(
    State(state): State<AppState>,
    Query(filters): Query<StationFilters>,
) -> Result<Json<ApiResponse<Paginated<Station>>>, AppError> {
    let controller = StationController::new(state.pool.clone());
    Ok(Json(controller.list(&filters).await?))
}

async fn get_station(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Station>>, AppError> {
    let controller = StationController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn create_station(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<CreateStationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Station>>), AppError> {
    let controller = StationController::new(state.pool.clone());
    let response = controller.create(&auth, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_station(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateStationRequest>,
) -> Result<Json<ApiResponse<Station>>, AppError> {
    let controller = StationController::new(state.pool.clone());
    Ok(Json(controller.update(&auth, id, request).await?))
}

async fn delete_station(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = StationController::new(state.pool.clone());
    Ok(Json(controller.delete(&auth, id).await?))
}

async fn station_options(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<SelectOption>>>, AppError> {
    let controller = StationController::new(state.pool.clone());
    Ok(Json(controller.options().await?))
}
