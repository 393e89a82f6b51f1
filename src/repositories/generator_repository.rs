//! Repositorio de generadores

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::dto::generator_dto::{CreateGeneratorRequest, UpdateGeneratorRequest};
use crate::models::fuel_log::FuelLog;
use crate::models::generator::{Generator, GeneratorFilters, GeneratorStats};
use crate::utils::errors::AppError;
use crate::utils::query::{self, Page, Paginated, QueryFilter};

pub struct GeneratorRepository {
    pool: PgPool,
}

impl GeneratorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, filters: &GeneratorFilters) -> Result<Paginated<Generator>, AppError> {
        let mut filter = QueryFilter::new();
        filter
            .search(&["name", "note"], filters.search.as_deref())
            .eq("fuel_type_oid", filters.fuel_type_oid)
            .eq("vehicle_oid", filters.vehicle_oid)
            .eq("assigned_to", filters.assigned_to);

        let page = Page::new(filters.page, filters.per_page);
        let result = query::paginate(&self.pool, "veh_generator", &filter, "oid DESC", page).await?;
        Ok(result)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Generator>, AppError> {
        let generator = sqlx::query_as::<_, Generator>("SELECT * FROM veh_generator WHERE oid = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(generator)
    }

    pub async fn create(
        &self,
        request: &CreateGeneratorRequest,
        entry_user: i64,
    ) -> Result<Generator, AppError> {
        let generator = sqlx::query_as::<_, Generator>(
            r#"
            INSERT INTO veh_generator (
                name, assigned_to, fuel_type_oid, vehicle_oid, power_kw,
                fuel_capacity_liters, operating_hours, consumption_liters_per_hour,
                engine_capacity, serial_number, note, entry_date, entry_user
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(&request.name)
        .bind(request.assigned_to)
        .bind(request.fuel_type_oid)
        .bind(request.vehicle_oid)
        .bind(request.power_kw)
        .bind(request.fuel_capacity_liters)
        .bind(request.operating_hours)
        .bind(request.consumption_liters_per_hour)
        .bind(request.engine_capacity)
        .bind(&request.serial_number)
        .bind(&request.note)
        .bind(Utc::now().naive_utc())
        .bind(entry_user)
        .fetch_one(&self.pool)
        .await?;

        Ok(generator)
    }

    pub async fn update(
        &self,
        id: i64,
        request: &UpdateGeneratorRequest,
    ) -> Result<Generator, AppError> {
        let generator = sqlx::query_as::<_, Generator>(
            r#"
            UPDATE veh_generator SET
                name = COALESCE($2, name),
                assigned_to = COALESCE($3, assigned_to),
                fuel_type_oid = COALESCE($4, fuel_type_oid),
                vehicle_oid = COALESCE($5, vehicle_oid),
                power_kw = COALESCE($6, power_kw),
                fuel_capacity_liters = COALESCE($7, fuel_capacity_liters),
                operating_hours = COALESCE($8, operating_hours),
                consumption_liters_per_hour = COALESCE($9, consumption_liters_per_hour),
                engine_capacity = COALESCE($10, engine_capacity),
                serial_number = COALESCE($11, serial_number),
                note = COALESCE($12, note)
            WHERE oid = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.name)
        .bind(request.assigned_to)
        .bind(request.fuel_type_oid)
        .bind(request.vehicle_oid)
        .bind(request.power_kw)
        .bind(request.fuel_capacity_liters)
        .bind(request.operating_hours)
        .bind(request.consumption_liters_per_hour)
        .bind(request.engine_capacity)
        .bind(&request.serial_number)
        .bind(&request.note)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Generator not found".to_string()))?;

        Ok(generator)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM veh_generator WHERE oid = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Generator not found".to_string()));
        }
        Ok(())
    }

    pub async fn fuel_logs(&self, id: i64) -> Result<Vec<FuelLog>, AppError> {
        let logs = sqlx::query_as::<_, FuelLog>(
            "SELECT * FROM vehicle_fuel_log WHERE generator_oid = $1 ORDER BY fill_up_date DESC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;
        Ok(logs)
    }

    pub async fn stats(&self) -> Result<GeneratorStats, AppError> {
        let (total_generators, total_power_kw, total_operating_hours, average_consumption, generators_with_vehicles): (i64, Decimal, Decimal, Option<Decimal>, i64) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*),
                COALESCE(SUM(power_kw), 0),
                COALESCE(SUM(operating_hours), 0),
                AVG(consumption_liters_per_hour),
                COUNT(vehicle_oid)
            FROM veh_generator
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(GeneratorStats {
            total_generators,
            total_power_kw,
            total_operating_hours,
            average_consumption,
            generators_with_vehicles,
        })
    }
}
