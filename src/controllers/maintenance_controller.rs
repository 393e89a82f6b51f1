//! Controller de mantenimientos

use sqlx::PgPool;
use validator::Validate;

use crate::dto::maintenance_dto::{CreateMaintenanceRequest, UpdateMaintenanceRequest};
use crate::dto::ApiResponse;
use crate::models::auth::AuthUser;
use crate::models::maintenance::{MaintenanceFilters, MaintenanceRecord};
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::utils::errors::AppError;
use crate::utils::query::Paginated;
use crate::utils::validation::require_non_negative;

pub struct MaintenanceController {
    repository: MaintenanceRepository,
}

impl MaintenanceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MaintenanceRepository::new(pool),
        }
    }

    pub async fn list(
        &self,
        filters: &MaintenanceFilters,
    ) -> Result<ApiResponse<Paginated<MaintenanceRecord>>, AppError> {
        let page = self.repository.list(filters).await?;
        Ok(ApiResponse::success(
            page,
            "Maintenance records retrieved successfully",
        ))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ApiResponse<MaintenanceRecord>, AppError> {
        let record = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Maintenance record not found".to_string()))?;

        Ok(ApiResponse::success(
            record,
            "Maintenance record retrieved successfully",
        ))
    }

    pub async fn create(
        &self,
        auth: &AuthUser,
        request: CreateMaintenanceRequest,
    ) -> Result<ApiResponse<MaintenanceRecord>, AppError> {
        auth.ensure_can_write()?;
        request.validate()?;
        require_non_negative("current_mileage", request.current_mileage)?;

        let record = self.repository.create(&request, auth.id).await?;
        Ok(ApiResponse::success(
            record,
            "Maintenance record created successfully",
        ))
    }

    pub async fn update(
        &self,
        auth: &AuthUser,
        id: i64,
        request: UpdateMaintenanceRequest,
    ) -> Result<ApiResponse<MaintenanceRecord>, AppError> {
        auth.ensure_can_write()?;
        request.validate()?;
        require_non_negative("current_mileage", request.current_mileage)?;

        let record = self.repository.update(id, &request).await?;
        Ok(ApiResponse::success(
            record,
            "Maintenance record updated successfully",
        ))
    }

    pub async fn delete(&self, auth: &AuthUser, id: i64) -> Result<ApiResponse<()>, AppError> {
        auth.ensure_can_write()?;
        self.repository.delete(id).await?;
        Ok(ApiResponse::message_only(
            "Maintenance record deleted successfully",
        ))
    }
}
