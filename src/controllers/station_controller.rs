//! Controller de estaciones

use sqlx::PgPool;
use validator::Validate;

use crate::dto::station_dto::{CreateStationRequest, UpdateStationRequest};
use crate::dto::ApiResponse;
use crate::models::auth::AuthUser;
use crate::models::station::{SelectOption, Station, StationFilters};
use crate::repositories::station_repository::StationRepository;
use crate::utils::errors::AppError;
use crate::utils::query::Paginated;
use crate::utils::validation::require_text;

pub struct StationController {
    repository: StationRepository,
}

impl StationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: StationRepository::new(pool),
        }
    }

    pub async fn list(
        &self,
        filters: &StationFilters,
    ) -> Result<ApiResponse<Paginated<Station>>, AppError> {
        let page = self.repository.list(filters).await?;
        Ok(ApiResponse::success(page, "Stations retrieved successfully"))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ApiResponse<Station>, AppError> {
        let station = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Station not found".to_string()))?;

        Ok(ApiResponse::success(
            station,
            "Station retrieved successfully",
        ))
    }

    pub async fn create(
        &self,
        auth: &AuthUser,
        request: CreateStationRequest,
    ) -> Result<ApiResponse<Station>, AppError> {
        auth.ensure_can_write()?;
        request.validate()?;
        require_text("station_name", &request.station_name)?;

        let station = self.repository.create(&request).await?;
        Ok(ApiResponse::success(station, "Station created successfully"))
    }

    pub async fn update(
        &self,
        auth: &AuthUser,
        id: i64,
        request: UpdateStationRequest,
    ) -> Result<ApiResponse<Station>, AppError> {
        auth.ensure_can_write()?;
        request.validate()?;

        let station = self.repository.update(id, &request).await?;
        Ok(ApiResponse::success(station, "Station updated successfully"))
    }

    pub async fn delete(&self, auth: &AuthUser, id: i64) -> Result<ApiResponse<()>, AppError> {
        auth.ensure_can_write()?;
        self.repository.delete(id).await?;
        Ok(ApiResponse::message_only("Station deleted successfully"))
    }

    pub async fn options(&self) -> Result<ApiResponse<Vec<SelectOption>>, AppError> {
        let options = self.repository.options().await?;
        Ok(ApiResponse::success(
            options,
            "Station options retrieved successfully",
        ))
    }
}
