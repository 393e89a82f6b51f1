//! Controller de registros de combustible
//!
//! Además de la validación de tipos, acá se hace cumplir la invariante de
//! datos: un registro referencia exactamente un vehículo o un generador.

use serde_json::Value;
use sqlx::PgPool;
use validator::Validate;

use crate::dto::fuel_log_dto::{CreateFuelLogRequest, UpdateFuelLogRequest};
use crate::dto::ApiResponse;
use crate::models::auth::AuthUser;
use crate::models::fuel_log::{FuelLog, FuelLogFilters};
use crate::repositories::fuel_log_repository::FuelLogRepository;
use crate::services::constants;
use crate::utils::errors::AppError;
use crate::utils::query::Paginated;
use crate::utils::validation::{require_fuel_target, require_non_negative};

pub struct FuelLogController {
    pool: PgPool,
    repository: FuelLogRepository,
}

impl FuelLogController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: FuelLogRepository::new(pool.clone()),
            pool,
        }
    }

    async fn enrich(&self, log: &FuelLog) -> Result<Value, AppError> {
        let mut row = serde_json::to_value(log).unwrap_or(Value::Null);
        constants::enrich(&self.pool, &mut row, constants::FUEL_LOG_CONSTANT_FIELDS).await?;
        let station = constants::station_name(&self.pool, log.station_oid).await?;
        constants::attach_label(&mut row, "station_name", station);
        Ok(row)
    }

    pub async fn list(
        &self,
        filters: &FuelLogFilters,
    ) -> Result<ApiResponse<Paginated<Value>>, AppError> {
        let page = self.repository.list(filters).await?;

        let mut enriched = Vec::with_capacity(page.data.len());
        for log in &page.data {
            enriched.push(self.enrich(log).await?);
        }

        let page = Paginated {
            data: enriched,
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
        };

        Ok(ApiResponse::success(page, "Fuel logs retrieved successfully"))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ApiResponse<Value>, AppError> {
        let log = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Fuel log not found".to_string()))?;

        let row = self.enrich(&log).await?;
        Ok(ApiResponse::success(row, "Fuel log retrieved successfully"))
    }

    pub async fn create(
        &self,
        auth: &AuthUser,
        request: CreateFuelLogRequest,
    ) -> Result<ApiResponse<FuelLog>, AppError> {
        auth.ensure_can_write()?;
        request.validate()?;
        require_fuel_target(request.veh_oid, request.generator_oid)?;
        require_non_negative("gallons", Some(request.gallons))?;
        require_non_negative("odometer", request.odometer)?;

        let log = self.repository.create(&request, auth.id).await?;
        Ok(ApiResponse::success(log, "Fuel log created successfully"))
    }

    pub async fn update(
        &self,
        auth: &AuthUser,
        id: i64,
        request: UpdateFuelLogRequest,
    ) -> Result<ApiResponse<FuelLog>, AppError> {
        auth.ensure_can_write()?;
        request.validate()?;
        require_non_negative("gallons", request.gallons)?;
        require_non_negative("odometer", request.odometer)?;

        // la invariante se verifica contra el estado resultante de la fila
        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Fuel log not found".to_string()))?;
        require_fuel_target(
            request.veh_oid.or(current.veh_oid),
            request.generator_oid.or(current.generator_oid),
        )?;

        let log = self.repository.update(id, &request).await?;
        Ok(ApiResponse::success(log, "Fuel log updated successfully"))
    }

    pub async fn delete(&self, auth: &AuthUser, id: i64) -> Result<ApiResponse<()>, AppError> {
        auth.ensure_can_write()?;
        self.repository.delete(id).await?;
        Ok(ApiResponse::message_only("Fuel log deleted successfully"))
    }
}
