//! Controller del dashboard
//!
//! Conteos agregados sobre todas las tablas del dominio. Las ventanas de
//! fecha (hoy, mes en curso) se calculan acá y se pasan como binds para no
//! depender de funciones de fecha del motor.

use chrono::{Datelike, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::dto::ApiResponse;
use crate::models::dashboard::{DashboardStats, RecentFuelLog};
use crate::models::fuel_log::FuelLog;
use crate::utils::errors::AppError;
use crate::utils::query::QueryFilter;

pub struct DashboardController {
    pool: PgPool,
}

impl DashboardController {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn count(&self, table: &str) -> Result<i64, AppError> {
        let sql = format!("SELECT COUNT(*) FROM {}", table);
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }

    async fn count_fuel_logs_between(
        &self,
        from: NaiveDateTime,
        before: NaiveDateTime,
    ) -> Result<i64, AppError> {
        let mut filter = QueryFilter::new();
        filter
            .datetime_from("entry_date", Some(from))
            .datetime_before("entry_date", Some(before));

        let sql = format!(
            "SELECT COUNT(*) FROM vehicle_fuel_log {}",
            filter.where_clause()
        );
        let count = filter.fetch_count(&self.pool, &sql).await?;
        Ok(count)
    }

    pub async fn stats(&self) -> Result<ApiResponse<Value>, AppError> {
        let today = Utc::now().date_naive();
        let today_start = today.and_time(NaiveTime::MIN);
        let tomorrow_start = today.succ_opt().unwrap_or(today).and_time(NaiveTime::MIN);
        let month_start = today.with_day(1).unwrap_or(today).and_time(NaiveTime::MIN);

        let (gas_inventory, solar_inventory): (Decimal, Decimal) = sqlx::query_as(
            "SELECT COALESCE(SUM(gas_quantity), 0), COALESCE(SUM(solar_quantity), 0) FROM gas_store",
        )
        .fetch_one(&self.pool)
        .await?;

        let stats = DashboardStats {
            total_vehicles: self.count("vehicle").await?,
            total_generators: self.count("veh_generator").await?,
            today_fuel_logs: self
                .count_fuel_logs_between(today_start, tomorrow_start)
                .await?,
            this_month_fuel_logs: self
                .count_fuel_logs_between(month_start, tomorrow_start)
                .await?,
            active_stations: self.count("stations").await?,
            total_gas_bills: self.count("veh_gas_bill").await?,
            gas_inventory,
            solar_inventory,
        };

        let recent: Vec<FuelLog> = sqlx::query_as(
            "SELECT * FROM vehicle_fuel_log ORDER BY entry_date DESC LIMIT 5",
        )
        .fetch_all(&self.pool)
        .await?;

        let recent_fuel_logs: Vec<RecentFuelLog> = recent
            .into_iter()
            .map(|log| RecentFuelLog {
                id: log.oid,
                vehicle_oid: log.veh_oid,
                quantity: log.gallons,
                station_oid: log.station_oid,
                entry_date: log.entry_date,
            })
            .collect();

        let data = json!({
            "stats": stats,
            "recentFuelLogs": recent_fuel_logs,
        });

        Ok(ApiResponse::success(
            data,
            "Dashboard statistics retrieved successfully",
        ))
    }
}
