//! Controller de generadores

use serde_json::{json, Value};
use sqlx::PgPool;
use validator::Validate;

use crate::dto::generator_dto::{CreateGeneratorRequest, UpdateGeneratorRequest};
use crate::dto::ApiResponse;
use crate::models::auth::AuthUser;
use crate::models::generator::{Generator, GeneratorFilters, GeneratorStats};
use crate::repositories::generator_repository::GeneratorRepository;
use crate::services::constants;
use crate::utils::errors::AppError;
use crate::utils::query::Paginated;
use crate::utils::validation::{require_non_negative, require_text};

pub struct GeneratorController {
    pool: PgPool,
    repository: GeneratorRepository,
}

impl GeneratorController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: GeneratorRepository::new(pool.clone()),
            pool,
        }
    }

    async fn enrich(&self, generator: &Generator) -> Result<Value, AppError> {
        let mut row = serde_json::to_value(generator).unwrap_or(Value::Null);
        constants::enrich(&self.pool, &mut row, constants::GENERATOR_CONSTANT_FIELDS).await?;
        Ok(row)
    }

    pub async fn list(
        &self,
        filters: &GeneratorFilters,
    ) -> Result<ApiResponse<Paginated<Value>>, AppError> {
        let mut page = self
            .repository
            .list(filters)
            .await?
            .map(|generator| serde_json::to_value(generator).unwrap_or(Value::Null));

        constants::enrich_rows(&self.pool, &mut page.data, constants::GENERATOR_CONSTANT_FIELDS)
            .await?;

        Ok(ApiResponse::success(
            page,
            "Generators retrieved successfully",
        ))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ApiResponse<Value>, AppError> {
        let generator = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Generator not found".to_string()))?;

        let row = self.enrich(&generator).await?;
        Ok(ApiResponse::success(row, "Generator retrieved successfully"))
    }

    pub async fn create(
        &self,
        auth: &AuthUser,
        request: CreateGeneratorRequest,
    ) -> Result<ApiResponse<Generator>, AppError> {
        auth.ensure_can_write()?;
        request.validate()?;
        require_text("name", &request.name)?;
        require_non_negative("power_kw", request.power_kw)?;
        require_non_negative("fuel_capacity_liters", request.fuel_capacity_liters)?;
        require_non_negative("operating_hours", request.operating_hours)?;
        require_non_negative(
            "consumption_liters_per_hour",
            request.consumption_liters_per_hour,
        )?;

        let generator = self.repository.create(&request, auth.id).await?;
        Ok(ApiResponse::success(
            generator,
            "Generator created successfully",
        ))
    }

    pub async fn update(
        &self,
        auth: &AuthUser,
        id: i64,
        request: UpdateGeneratorRequest,
    ) -> Result<ApiResponse<Generator>, AppError> {
        auth.ensure_can_write()?;
        request.validate()?;
        require_non_negative("power_kw", request.power_kw)?;
        require_non_negative("fuel_capacity_liters", request.fuel_capacity_liters)?;
        require_non_negative("operating_hours", request.operating_hours)?;
        require_non_negative(
            "consumption_liters_per_hour",
            request.consumption_liters_per_hour,
        )?;

        let generator = self.repository.update(id, &request).await?;
        Ok(ApiResponse::success(
            generator,
            "Generator updated successfully",
        ))
    }

    pub async fn delete(&self, auth: &AuthUser, id: i64) -> Result<ApiResponse<()>, AppError> {
        auth.ensure_can_write()?;
        self.repository.delete(id).await?;
        Ok(ApiResponse::message_only("Generator deleted successfully"))
    }

    /// El generador junto con todos sus registros de combustible
    pub async fn fuel_logs(&self, id: i64) -> Result<ApiResponse<Value>, AppError> {
        let generator = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Generator not found".to_string()))?;

        let logs = self.repository.fuel_logs(id).await?;
        let data = json!({
            "generator": generator,
            "fuel_logs": logs,
        });

        Ok(ApiResponse::success(
            data,
            "Generator fuel logs retrieved successfully",
        ))
    }

    pub async fn stats(&self) -> Result<ApiResponse<GeneratorStats>, AppError> {
        let stats = self.repository.stats().await?;
        Ok(ApiResponse::success(
            stats,
            "Generator statistics retrieved successfully",
        ))
    }
}
