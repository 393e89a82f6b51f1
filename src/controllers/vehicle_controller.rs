//! Controller de vehículos
//!
//! Valida la entrada, orquesta el repositorio y enriquece las filas con
//! los nombres de constantes y de la estación asignada antes de envolver
//! la respuesta.

use serde_json::Value;
use sqlx::PgPool;
use validator::Validate;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::dto::ApiResponse;
use crate::models::auth::AuthUser;
use crate::models::fuel_log::FuelLog;
use crate::models::vehicle::{Vehicle, VehicleFilters, VehicleFuelStats};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::constants;
use crate::utils::errors::AppError;
use crate::utils::query::Paginated;
use crate::utils::validation::{require_non_negative, require_text};

pub struct VehicleController {
    pool: PgPool,
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            pool,
        }
    }

    async fn enrich(&self, vehicle: &Vehicle) -> Result<Value, AppError> {
        let mut row = serde_json::to_value(vehicle).unwrap_or(Value::Null);
        constants::enrich(&self.pool, &mut row, constants::VEHICLE_CONSTANT_FIELDS).await?;
        let station = constants::station_name(&self.pool, vehicle.assigned_to).await?;
        constants::attach_label(&mut row, "assigned_station_name", station);
        Ok(row)
    }

    pub async fn list(
        &self,
        filters: &VehicleFilters,
    ) -> Result<ApiResponse<Paginated<Value>>, AppError> {
        let page = self.repository.list(filters).await?;

        let mut enriched = Vec::with_capacity(page.data.len());
        for vehicle in &page.data {
            enriched.push(self.enrich(vehicle).await?);
        }

        let page = Paginated {
            data: enriched,
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
        };

        Ok(ApiResponse::success(page, "Vehicles retrieved successfully"))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ApiResponse<Value>, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let row = self.enrich(&vehicle).await?;
        Ok(ApiResponse::success(row, "Vehicle retrieved successfully"))
    }

    pub async fn create(
        &self,
        auth: &AuthUser,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<Vehicle>, AppError> {
        auth.ensure_can_write()?;
        request.validate()?;
        require_text("vehicle_num", &request.vehicle_num)?;
        require_non_negative("engine_capacity", request.engine_capacity)?;
        require_non_negative("tank_capacity", request.tank_capacity)?;
        require_non_negative("odometer", request.odometer)?;

        let vehicle = self.repository.create(&request, auth.id).await?;
        Ok(ApiResponse::success(
            vehicle,
            "Vehicle created successfully",
        ))
    }

    pub async fn update(
        &self,
        auth: &AuthUser,
        id: i64,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<Vehicle>, AppError> {
        auth.ensure_can_write()?;
        request.validate()?;
        require_non_negative("engine_capacity", request.engine_capacity)?;
        require_non_negative("tank_capacity", request.tank_capacity)?;
        require_non_negative("odometer", request.odometer)?;

        let vehicle = self.repository.update(id, &request).await?;
        Ok(ApiResponse::success(
            vehicle,
            "Vehicle updated successfully",
        ))
    }

    pub async fn delete(&self, auth: &AuthUser, id: i64) -> Result<ApiResponse<()>, AppError> {
        auth.ensure_can_write()?;
        self.repository.delete(id).await?;
        Ok(ApiResponse::message_only("Vehicle deleted successfully"))
    }

    /// Los registros de combustible más recientes del vehículo
    pub async fn fuel_logs(&self, id: i64) -> Result<ApiResponse<Vec<FuelLog>>, AppError> {
        // 404 si el vehículo no existe, lista vacía si no tiene registros
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let logs = self.repository.recent_fuel_logs(id).await?;
        Ok(ApiResponse::success(
            logs,
            "Vehicle fuel logs retrieved successfully",
        ))
    }

    pub async fn fuel_stats(&self, id: i64) -> Result<ApiResponse<VehicleFuelStats>, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let stats = self.repository.fuel_stats(&vehicle).await?;
        Ok(ApiResponse::success(
            stats,
            "Vehicle fuel statistics retrieved successfully",
        ))
    }
}
