//! Controller del inventario de combustible

use chrono::NaiveDate;
use sqlx::PgPool;
use validator::Validate;

use crate::dto::gas_store_dto::{
    CreateGasStoreRequest, UpdateGasStoreRequest, UpdateInventoryRequest,
};
use crate::dto::ApiResponse;
use crate::models::auth::AuthUser;
use crate::models::gas_store::{GasStore, GasStoreFilters, GasStoreStats};
use crate::repositories::gas_store_repository::GasStoreRepository;
use crate::utils::errors::AppError;
use crate::utils::query::Paginated;
use crate::utils::validation::require_non_negative;

pub struct GasStoreController {
    repository: GasStoreRepository,
}

impl GasStoreController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: GasStoreRepository::new(pool),
        }
    }

    pub async fn list(
        &self,
        filters: &GasStoreFilters,
    ) -> Result<ApiResponse<Paginated<GasStore>>, AppError> {
        let page = self.repository.list(filters).await?;
        Ok(ApiResponse::success(
            page,
            "Gas stores retrieved successfully",
        ))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ApiResponse<GasStore>, AppError> {
        let store = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Gas store entry not found".to_string()))?;

        Ok(ApiResponse::success(
            store,
            "Gas store retrieved successfully",
        ))
    }

    /// El inventario vigente: la foto activa más reciente (o null)
    pub async fn current(&self) -> Result<ApiResponse<Option<GasStore>>, AppError> {
        let current = self.repository.current().await?;
        Ok(ApiResponse::success(
            current,
            "Current inventory retrieved successfully",
        ))
    }

    pub async fn history(
        &self,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> Result<ApiResponse<Vec<GasStore>>, AppError> {
        let history = self.repository.history(date_from, date_to).await?;
        Ok(ApiResponse::success(
            history,
            "Inventory history retrieved successfully",
        ))
    }

    pub async fn create(
        &self,
        auth: &AuthUser,
        request: CreateGasStoreRequest,
    ) -> Result<ApiResponse<GasStore>, AppError> {
        auth.ensure_can_write()?;
        request.validate()?;
        require_non_negative("gas_quantity", request.gas_quantity)?;
        require_non_negative("solar_quantity", request.solar_quantity)?;
        require_non_negative("eygpt_solar_quantity", request.eygpt_solar_quantity)?;
        require_non_negative("gas_bills", request.gas_bills)?;
        require_non_negative("prv_qty", request.prv_qty)?;

        let store = self.repository.create(&request).await?;
        Ok(ApiResponse::success(
            store,
            "Gas store created successfully",
        ))
    }

    /// Registrar una foto nueva del inventario (endpoint de actualización)
    pub async fn record_snapshot(
        &self,
        auth: &AuthUser,
        request: UpdateInventoryRequest,
    ) -> Result<ApiResponse<GasStore>, AppError> {
        auth.ensure_can_write()?;
        request.validate()?;
        require_non_negative("gas_quantity", Some(request.gas_quantity))?;
        require_non_negative("solar_quantity", request.solar_quantity)?;

        let store = self.repository.record_snapshot(&request).await?;
        Ok(ApiResponse::success(
            store,
            "Inventory updated successfully",
        ))
    }

    pub async fn update(
        &self,
        auth: &AuthUser,
        id: i64,
        request: UpdateGasStoreRequest,
    ) -> Result<ApiResponse<GasStore>, AppError> {
        auth.ensure_can_write()?;
        request.validate()?;
        require_non_negative("gas_quantity", request.gas_quantity)?;
        require_non_negative("solar_quantity", request.solar_quantity)?;
        require_non_negative("eygpt_solar_quantity", request.eygpt_solar_quantity)?;
        require_non_negative("gas_bills", request.gas_bills)?;
        require_non_negative("prv_qty", request.prv_qty)?;

        let store = self.repository.update(id, &request).await?;
        Ok(ApiResponse::success(
            store,
            "Gas store updated successfully",
        ))
    }

    pub async fn delete(&self, auth: &AuthUser, id: i64) -> Result<ApiResponse<()>, AppError> {
        auth.ensure_can_write()?;
        self.repository.delete(id).await?;
        Ok(ApiResponse::message_only("Gas store deleted successfully"))
    }

    pub async fn stats(&self) -> Result<ApiResponse<GasStoreStats>, AppError> {
        let stats = self.repository.stats().await?;
        Ok(ApiResponse::success(
            stats,
            "Gas store statistics retrieved successfully",
        ))
    }
}
