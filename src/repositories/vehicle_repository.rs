//! Repositorio de vehículos

use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::fuel_log::FuelLog;
use crate::models::vehicle::{Vehicle, VehicleFilters, VehicleFuelStats};
use crate::utils::errors::AppError;
use crate::utils::query::{self, Page, Paginated, QueryFilter};

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, filters: &VehicleFilters) -> Result<Paginated<Vehicle>, AppError> {
        let mut filter = QueryFilter::new();
        filter
            .eq("status_oid", filters.status_oid)
            .eq("fuel_type_oid", filters.fuel_type_oid)
            .eq("assigned_to", filters.assigned_to)
            .search(
                &["vehicle_num", "plate_num", "model"],
                filters.search.as_deref(),
            );

        let page = Page::new(filters.page, filters.per_page);
        let result = query::paginate(&self.pool, "vehicle", &filter, "oid DESC", page).await?;
        Ok(result)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicle WHERE oid = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(vehicle)
    }

    pub async fn create(
        &self,
        request: &CreateVehicleRequest,
        entry_user: i64,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicle (
                vehicle_num, model, modle_year, plate_num, old_plate_num, vin_num,
                fuel_type_oid, type_oid, usage_type_oid, vendor_oid,
                engine_capacity, tank_capacity, odometer, kelometer_per_liter,
                assigned_to, status_oid, note, entry_date, entry_user
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                $11, $12, $13, $14, $15, $16, $17, $18, $19
            )
            RETURNING *
            "#,
        )
        .bind(&request.vehicle_num)
        .bind(&request.model)
        .bind(request.modle_year)
        .bind(&request.plate_num)
        .bind(&request.old_plate_num)
        .bind(&request.vin_num)
        .bind(request.fuel_type_oid)
        .bind(request.type_oid)
        .bind(request.usage_type_oid)
        .bind(request.vendor_oid)
        .bind(request.engine_capacity)
        .bind(request.tank_capacity)
        .bind(request.odometer)
        .bind(request.kelometer_per_liter)
        .bind(request.assigned_to)
        .bind(request.status_oid)
        .bind(&request.note)
        .bind(Utc::now().naive_utc())
        .bind(entry_user)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn update(
        &self,
        id: i64,
        request: &UpdateVehicleRequest,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicle SET
                vehicle_num = COALESCE($2, vehicle_num),
                model = COALESCE($3, model),
                modle_year = COALESCE($4, modle_year),
                plate_num = COALESCE($5, plate_num),
                old_plate_num = COALESCE($6, old_plate_num),
                vin_num = COALESCE($7, vin_num),
                fuel_type_oid = COALESCE($8, fuel_type_oid),
                type_oid = COALESCE($9, type_oid),
                usage_type_oid = COALESCE($10, usage_type_oid),
                vendor_oid = COALESCE($11, vendor_oid),
                engine_capacity = COALESCE($12, engine_capacity),
                tank_capacity = COALESCE($13, tank_capacity),
                odometer = COALESCE($14, odometer),
                kelometer_per_liter = COALESCE($15, kelometer_per_liter),
                assigned_to = COALESCE($16, assigned_to),
                status_oid = COALESCE($17, status_oid),
                note = COALESCE($18, note)
            WHERE oid = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.vehicle_num)
        .bind(&request.model)
        .bind(request.modle_year)
        .bind(&request.plate_num)
        .bind(&request.old_plate_num)
        .bind(&request.vin_num)
        .bind(request.fuel_type_oid)
        .bind(request.type_oid)
        .bind(request.usage_type_oid)
        .bind(request.vendor_oid)
        .bind(request.engine_capacity)
        .bind(request.tank_capacity)
        .bind(request.odometer)
        .bind(request.kelometer_per_liter)
        .bind(request.assigned_to)
        .bind(request.status_oid)
        .bind(&request.note)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicle WHERE oid = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehicle not found".to_string()));
        }
        Ok(())
    }

    /// Los 10 registros de combustible más recientes del vehículo
    pub async fn recent_fuel_logs(&self, id: i64) -> Result<Vec<FuelLog>, AppError> {
        let logs = sqlx::query_as::<_, FuelLog>(
            "SELECT * FROM vehicle_fuel_log WHERE veh_oid = $1 ORDER BY fill_up_date DESC LIMIT 10",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;
        Ok(logs)
    }

    pub async fn fuel_stats(&self, vehicle: &Vehicle) -> Result<VehicleFuelStats, AppError> {
        let (total_fuel_logs, total_gallons, last_fuel_date): (i64, Decimal, Option<NaiveDateTime>) =
            sqlx::query_as(
            r#"
            SELECT COUNT(*), COALESCE(SUM(gallons), 0), MAX(fill_up_date)
            FROM vehicle_fuel_log
            WHERE veh_oid = $1
            "#,
        )
        .bind(vehicle.oid)
        .fetch_one(&self.pool)
        .await?;

        Ok(VehicleFuelStats {
            total_fuel_logs,
            total_gallons,
            last_fuel_date,
            current_odometer: vehicle.odometer,
        })
    }
}
