//! Modelos del dashboard

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

/// Contadores globales mostrados en la pantalla principal del SPA
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_vehicles: i64,
    pub total_generators: i64,
    pub today_fuel_logs: i64,
    pub this_month_fuel_logs: i64,
    pub active_stations: i64,
    pub total_gas_bills: i64,
    pub gas_inventory: Decimal,
    pub solar_inventory: Decimal,
}

/// Resumen de un registro reciente de combustible
#[derive(Debug, Serialize)]
pub struct RecentFuelLog {
    pub id: i64,
    pub vehicle_oid: Option<i64>,
    pub quantity: Decimal,
    pub station_oid: Option<i64>,
    pub entry_date: Option<NaiveDateTime>,
}
