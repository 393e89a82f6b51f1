//! Repositorio de mantenimientos

use sqlx::PgPool;

use crate::dto::maintenance_dto::{CreateMaintenanceRequest, UpdateMaintenanceRequest};
use crate::models::maintenance::{MaintenanceFilters, MaintenanceRecord};
use crate::utils::errors::AppError;
use crate::utils::query::{self, Page, Paginated, QueryFilter};

pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(
        &self,
        filters: &MaintenanceFilters,
    ) -> Result<Paginated<MaintenanceRecord>, AppError> {
        let mut filter = QueryFilter::new();
        filter
            .eq("vehicle_oid", filters.vehicle_oid)
            .eq("mntc_type_oid", filters.mntc_type_oid)
            .eq("status_oid", filters.status_oid)
            .eq("is_accidental", filters.is_accidental)
            .date_from("mntc_date", filters.date_from)
            .date_to("mntc_date", filters.date_to);

        let page = Page::new(filters.page, filters.per_page);
        let result = query::paginate(
            &self.pool,
            "vehicle_maintenance",
            &filter,
            "mntc_date DESC",
            page,
        )
        .await?;
        Ok(result)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<MaintenanceRecord>, AppError> {
        let record =
            sqlx::query_as::<_, MaintenanceRecord>("SELECT * FROM vehicle_maintenance WHERE oid = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(record)
    }

    pub async fn create(
        &self,
        request: &CreateMaintenanceRequest,
        entry_user: i64,
    ) -> Result<MaintenanceRecord, AppError> {
        let record = sqlx::query_as::<_, MaintenanceRecord>(
            r#"
            INSERT INTO vehicle_maintenance (
                vehicle_oid, mntc_type_oid, is_accidental, current_mileage,
                mntc_date, status_oid, finish_date, note, entry_user,
                mntc_year, responsible, repair_time
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(request.vehicle_oid)
        .bind(request.mntc_type_oid)
        .bind(request.is_accidental)
        .bind(request.current_mileage)
        .bind(request.mntc_date)
        .bind(request.status_oid)
        .bind(request.finish_date)
        .bind(&request.note)
        .bind(entry_user)
        .bind(request.mntc_year)
        .bind(&request.responsible)
        .bind(request.repair_time)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn update(
        &self,
        id: i64,
        request: &UpdateMaintenanceRequest,
    ) -> Result<MaintenanceRecord, AppError> {
        let record = sqlx::query_as::<_, MaintenanceRecord>(
            r#"
            UPDATE vehicle_maintenance SET
                vehicle_oid = COALESCE($2, vehicle_oid),
                mntc_type_oid = COALESCE($3, mntc_type_oid),
                is_accidental = COALESCE($4, is_accidental),
                current_mileage = COALESCE($5, current_mileage),
                mntc_date = COALESCE($6, mntc_date),
                status_oid = COALESCE($7, status_oid),
                finish_date = COALESCE($8, finish_date),
                note = COALESCE($9, note),
                mntc_year = COALESCE($10, mntc_year),
                responsible = COALESCE($11, responsible),
                repair_time = COALESCE($12, repair_time)
            WHERE oid = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.vehicle_oid)
        .bind(request.mntc_type_oid)
        .bind(request.is_accidental)
        .bind(request.current_mileage)
        .bind(request.mntc_date)
        .bind(request.status_oid)
        .bind(request.finish_date)
        .bind(&request.note)
        .bind(request.mntc_year)
        .bind(&request.responsible)
        .bind(request.repair_time)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Maintenance record not found".to_string()))?;

        Ok(record)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicle_maintenance WHERE oid = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Maintenance record not found".to_string()));
        }
        Ok(())
    }
}
