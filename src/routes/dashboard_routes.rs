use axum::{extract::State, routing::get, Json, Router};
use serde_json::Value;

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/stats", get(dashboard_stats))
}

async fn dashboard_stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    Ok(Json(controller.stats().await?))
}
