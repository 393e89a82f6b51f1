//! Repositorio de registros de combustible

use chrono::Utc;
use sqlx::PgPool;

use crate::dto::fuel_log_dto::{CreateFuelLogRequest, UpdateFuelLogRequest};
use crate::models::fuel_log::{FuelLog, FuelLogFilters};
use crate::utils::errors::AppError;
use crate::utils::query::{self, Page, Paginated, QueryFilter};

pub struct FuelLogRepository {
    pool: PgPool,
}

impl FuelLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, filters: &FuelLogFilters) -> Result<Paginated<FuelLog>, AppError> {
        let mut filter = QueryFilter::new();
        filter
            .eq("veh_oid", filters.veh_oid)
            .eq("generator_oid", filters.generator_oid)
            .eq("station_oid", filters.station_oid)
            .eq("fuel_year", filters.fuel_year)
            .eq("gas_type", filters.gas_type)
            .date_from("fill_up_date", filters.date_from)
            .date_to("fill_up_date", filters.date_to);

        let page = Page::new(filters.page, filters.per_page);
        let result = query::paginate(
            &self.pool,
            "vehicle_fuel_log",
            &filter,
            "fill_up_date DESC",
            page,
        )
        .await?;
        Ok(result)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<FuelLog>, AppError> {
        let log = sqlx::query_as::<_, FuelLog>("SELECT * FROM vehicle_fuel_log WHERE oid = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(log)
    }

    pub async fn create(
        &self,
        request: &CreateFuelLogRequest,
        entry_user: i64,
    ) -> Result<FuelLog, AppError> {
        let log = sqlx::query_as::<_, FuelLog>(
            r#"
            INSERT INTO vehicle_fuel_log (
                veh_oid, generator_oid, entry_user, entry_date, fill_up_date,
                gallons, fuel_id, fuel_year, gas_type, odometer,
                station_oid, status_oid, note
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(request.veh_oid)
        .bind(request.generator_oid)
        .bind(entry_user)
        .bind(Utc::now().naive_utc())
        .bind(request.fill_up_date)
        .bind(request.gallons)
        .bind(request.fuel_id)
        .bind(request.fuel_year)
        .bind(request.gas_type)
        .bind(request.odometer)
        .bind(request.station_oid)
        .bind(request.status_oid)
        .bind(&request.note)
        .fetch_one(&self.pool)
        .await?;

        Ok(log)
    }

    pub async fn update(&self, id: i64, request: &UpdateFuelLogRequest) -> Result<FuelLog, AppError> {
        let log = sqlx::query_as::<_, FuelLog>(
            r#"
            UPDATE vehicle_fuel_log SET
                veh_oid = COALESCE($2, veh_oid),
                generator_oid = COALESCE($3, generator_oid),
                fill_up_date = COALESCE($4, fill_up_date),
                gallons = COALESCE($5, gallons),
                fuel_id = COALESCE($6, fuel_id),
                fuel_year = COALESCE($7, fuel_year),
                gas_type = COALESCE($8, gas_type),
                odometer = COALESCE($9, odometer),
                station_oid = COALESCE($10, station_oid),
                status_oid = COALESCE($11, status_oid),
                note = COALESCE($12, note)
            WHERE oid = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.veh_oid)
        .bind(request.generator_oid)
        .bind(request.fill_up_date)
        .bind(request.gallons)
        .bind(request.fuel_id)
        .bind(request.fuel_year)
        .bind(request.gas_type)
        .bind(request.odometer)
        .bind(request.station_oid)
        .bind(request.status_oid)
        .bind(&request.note)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Fuel log not found".to_string()))?;

        Ok(log)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicle_fuel_log WHERE oid = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Fuel log not found".to_string()));
        }
        Ok(())
    }
}
