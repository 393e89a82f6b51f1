//! Repositorio del almacén de combustible
//!
//! Las filas son fotos puntuales; "inventario actual" es la fila activa
//! más reciente, nunca una suma incremental.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::dto::gas_store_dto::{
    CreateGasStoreRequest, UpdateGasStoreRequest, UpdateInventoryRequest,
};
use crate::models::gas_store::{GasStore, GasStoreFilters, GasStoreStats};
use crate::utils::errors::AppError;
use crate::utils::query::{self, Page, Paginated, QueryFilter};

pub struct GasStoreRepository {
    pool: PgPool,
}

impl GasStoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, filters: &GasStoreFilters) -> Result<Paginated<GasStore>, AppError> {
        let mut filter = QueryFilter::new();
        filter
            .eq("is_active", filters.is_active)
            .date_from("entry_date", filters.date_from)
            .date_to("entry_date", filters.date_to)
            .min("gas_quantity", filters.min_quantity);

        let page = Page::new(filters.page, filters.per_page);
        let result =
            query::paginate(&self.pool, "gas_store", &filter, "entry_date DESC", page).await?;
        Ok(result)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<GasStore>, AppError> {
        let store = sqlx::query_as::<_, GasStore>("SELECT * FROM gas_store WHERE oid = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(store)
    }

    /// La fila activa más reciente; None si nunca se cargó inventario
    pub async fn current(&self) -> Result<Option<GasStore>, AppError> {
        let store = sqlx::query_as::<_, GasStore>(
            "SELECT * FROM gas_store WHERE is_active = 1 ORDER BY entry_date DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(store)
    }

    /// Historial sin paginar, acotado por fechas
    pub async fn history(
        &self,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> Result<Vec<GasStore>, AppError> {
        let mut filter = QueryFilter::new();
        filter
            .date_from("entry_date", date_from)
            .date_to("entry_date", date_to);

        let sql = format!(
            "SELECT * FROM gas_store {} ORDER BY entry_date DESC",
            filter.where_clause()
        );
        let rows: Vec<GasStore> = filter.fetch_all(&self.pool, &sql).await?;
        Ok(rows)
    }

    pub async fn create(&self, request: &CreateGasStoreRequest) -> Result<GasStore, AppError> {
        let store = sqlx::query_as::<_, GasStore>(
            r#"
            INSERT INTO gas_store (
                entry_date, gas_quantity, solar_quantity, eygpt_solar_quantity,
                gas_bills, gas_rec_oid, prv_oid, prv_qty, fill_up_date, note, is_active
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(request.entry_date)
        .bind(request.gas_quantity)
        .bind(request.solar_quantity)
        .bind(request.eygpt_solar_quantity)
        .bind(request.gas_bills)
        .bind(request.gas_rec_oid)
        .bind(request.prv_oid)
        .bind(request.prv_qty)
        .bind(request.fill_up_date)
        .bind(&request.note)
        .bind(request.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(store)
    }

    /// Actualización rápida de inventario: siempre inserta una foto nueva
    /// activa con la fecha del servidor.
    pub async fn record_snapshot(
        &self,
        request: &UpdateInventoryRequest,
    ) -> Result<GasStore, AppError> {
        let store = sqlx::query_as::<_, GasStore>(
            r#"
            INSERT INTO gas_store (entry_date, gas_quantity, solar_quantity, note, is_active)
            VALUES ($1, $2, $3, $4, 1)
            RETURNING *
            "#,
        )
        .bind(Utc::now().naive_utc())
        .bind(request.gas_quantity)
        .bind(request.solar_quantity)
        .bind(&request.note)
        .fetch_one(&self.pool)
        .await?;

        Ok(store)
    }

    pub async fn update(
        &self,
        id: i64,
        request: &UpdateGasStoreRequest,
    ) -> Result<GasStore, AppError> {
        let store = sqlx::query_as::<_, GasStore>(
            r#"
            UPDATE gas_store SET
                entry_date = COALESCE($2, entry_date),
                gas_quantity = COALESCE($3, gas_quantity),
                solar_quantity = COALESCE($4, solar_quantity),
                eygpt_solar_quantity = COALESCE($5, eygpt_solar_quantity),
                gas_bills = COALESCE($6, gas_bills),
                gas_rec_oid = COALESCE($7, gas_rec_oid),
                prv_oid = COALESCE($8, prv_oid),
                prv_qty = COALESCE($9, prv_qty),
                fill_up_date = COALESCE($10, fill_up_date),
                note = COALESCE($11, note),
                is_active = COALESCE($12, is_active)
            WHERE oid = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.entry_date)
        .bind(request.gas_quantity)
        .bind(request.solar_quantity)
        .bind(request.eygpt_solar_quantity)
        .bind(request.gas_bills)
        .bind(request.gas_rec_oid)
        .bind(request.prv_oid)
        .bind(request.prv_qty)
        .bind(request.fill_up_date)
        .bind(&request.note)
        .bind(request.is_active)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Gas store entry not found".to_string()))?;

        Ok(store)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM gas_store WHERE oid = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Gas store entry not found".to_string()));
        }
        Ok(())
    }

    pub async fn stats(&self) -> Result<GasStoreStats, AppError> {
        let (total_stores, active_stores, total_gas_quantity, total_solar_quantity, total_bills_value): (
            i64,
            i64,
            Decimal,
            Decimal,
            Decimal,
        ) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*),
                COUNT(*) FILTER (WHERE is_active = 1),
                COALESCE(SUM(gas_quantity), 0),
                COALESCE(SUM(solar_quantity), 0),
                COALESCE(SUM(gas_bills), 0)
            FROM gas_store
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(GasStoreStats {
            total_stores,
            active_stores,
            total_gas_quantity,
            total_solar_quantity,
            total_bills_value,
        })
    }
}
