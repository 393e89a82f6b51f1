//! Repositorio de facturas de combustible

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::dto::gas_bill_dto::{CreateGasBillRequest, SummaryRange, UpdateGasBillRequest};
use crate::models::gas_bill::{GasBill, GasBillFilters, GasBillSummary};
use crate::utils::errors::AppError;
use crate::utils::query::{self, Page, Paginated, QueryFilter};

pub struct GasBillRepository {
    pool: PgPool,
}

impl GasBillRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, filters: &GasBillFilters) -> Result<Paginated<GasBill>, AppError> {
        let mut filter = QueryFilter::new();
        filter
            .eq("gas_station_oid", filters.gas_station_oid)
            .eq("entery_user_oid", filters.entery_user_oid)
            .eq("fuel_type_oid", filters.fuel_type_oid)
            .eq("bill_type_oid", filters.bill_type_oid)
            .eq("status_oid", filters.status_oid)
            .date_from("bill_date", filters.date_from)
            .date_to("bill_date", filters.date_to)
            .eq("bill_num", filters.bill_num);

        let page = Page::new(filters.page, filters.per_page);
        let result =
            query::paginate(&self.pool, "veh_gas_bill", &filter, "bill_date DESC", page).await?;
        Ok(result)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<GasBill>, AppError> {
        let bill = sqlx::query_as::<_, GasBill>("SELECT * FROM veh_gas_bill WHERE oid = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(bill)
    }

    pub async fn create(
        &self,
        request: &CreateGasBillRequest,
        entry_user: i64,
    ) -> Result<GasBill, AppError> {
        let bill = sqlx::query_as::<_, GasBill>(
            r#"
            INSERT INTO veh_gas_bill (
                gas_station_oid, fuel_type_oid, bill_type_oid, quantity, price,
                bill_num, bill_date, en_date, status_oid, donor_name_oid,
                entery_user_oid, notes
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(request.gas_station_oid)
        .bind(request.fuel_type_oid)
        .bind(request.bill_type_oid)
        .bind(request.quantity)
        .bind(request.price)
        .bind(request.bill_num)
        .bind(request.bill_date)
        .bind(request.en_date)
        .bind(request.status_oid)
        .bind(request.donor_name_oid)
        .bind(entry_user)
        .bind(&request.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(bill)
    }

    pub async fn update(&self, id: i64, request: &UpdateGasBillRequest) -> Result<GasBill, AppError> {
        let bill = sqlx::query_as::<_, GasBill>(
            r#"
            UPDATE veh_gas_bill SET
                gas_station_oid = COALESCE($2, gas_station_oid),
                fuel_type_oid = COALESCE($3, fuel_type_oid),
                bill_type_oid = COALESCE($4, bill_type_oid),
                quantity = COALESCE($5, quantity),
                price = COALESCE($6, price),
                bill_num = COALESCE($7, bill_num),
                bill_date = COALESCE($8, bill_date),
                en_date = COALESCE($9, en_date),
                status_oid = COALESCE($10, status_oid),
                donor_name_oid = COALESCE($11, donor_name_oid),
                notes = COALESCE($12, notes)
            WHERE oid = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.gas_station_oid)
        .bind(request.fuel_type_oid)
        .bind(request.bill_type_oid)
        .bind(request.quantity)
        .bind(request.price)
        .bind(request.bill_num)
        .bind(request.bill_date)
        .bind(request.en_date)
        .bind(request.status_oid)
        .bind(request.donor_name_oid)
        .bind(&request.notes)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Gas bill not found".to_string()))?;

        Ok(bill)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM veh_gas_bill WHERE oid = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Gas bill not found".to_string()));
        }
        Ok(())
    }

    /// Resumen agregado sobre el mismo predicado de rango de fechas
    pub async fn summary(&self, range: &SummaryRange) -> Result<GasBillSummary, AppError> {
        let mut filter = QueryFilter::new();
        filter
            .date_from("bill_date", range.date_from)
            .date_to("bill_date", range.date_to);

        let sql = format!(
            r#"
            SELECT
                COUNT(*),
                COALESCE(SUM(quantity), 0),
                COALESCE(SUM(quantity * price), 0),
                AVG(price)
            FROM veh_gas_bill
            {}
            "#,
            filter.where_clause()
        );

        let (total_bills, total_quantity, total_amount, average_price): (
            i64,
            Decimal,
            Decimal,
            Option<Decimal>,
        ) = filter.fetch_one(&self.pool, &sql).await?;

        Ok(GasBillSummary {
            total_bills,
            total_quantity,
            total_amount,
            average_price,
            date_from: range.date_from,
            date_to: range.date_to,
        })
    }
}
