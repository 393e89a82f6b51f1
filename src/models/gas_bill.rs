//! Modelo de GasBill (tabla `veh_gas_bill`)

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GasBill {
    pub oid: i64,
    pub gas_station_oid: i64,
    pub fuel_type_oid: i64,
    pub bill_type_oid: i64,
    pub quantity: Decimal,
    pub price: Option<Decimal>,
    pub bill_num: Option<i64>,
    pub bill_date: Option<NaiveDateTime>,
    pub en_date: Option<NaiveDateTime>,
    pub status_oid: Option<i64>,
    pub donor_name_oid: Option<i64>,
    pub entery_user_oid: i64,
    pub notes: Option<String>,
}

impl GasBill {
    /// Total derivado al momento de la lectura; nunca se almacena.
    pub fn total_amount(&self) -> Option<Decimal> {
        self.price.map(|p| p * self.quantity)
    }
}

/// Filtros para búsqueda de facturas
#[derive(Debug, Clone, Deserialize)]
pub struct GasBillFilters {
    pub gas_station_oid: Option<i64>,
    pub entery_user_oid: Option<i64>,
    pub fuel_type_oid: Option<i64>,
    pub bill_type_oid: Option<i64>,
    pub status_oid: Option<i64>,
    pub bill_num: Option<i64>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Resumen de facturación por rango de fechas
#[derive(Debug, Serialize)]
pub struct GasBillSummary {
    pub total_bills: i64,
    pub total_quantity: Decimal,
    pub total_amount: Decimal,
    pub average_price: Option<Decimal>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bill(quantity: i64, price: Option<i64>) -> GasBill {
        GasBill {
            oid: 1,
            gas_station_oid: 1,
            fuel_type_oid: 1,
            bill_type_oid: 1,
            quantity: Decimal::new(quantity, 0),
            price: price.map(|p| Decimal::new(p, 0)),
            bill_num: None,
            bill_date: None,
            en_date: None,
            status_oid: None,
            donor_name_oid: None,
            entery_user_oid: 1,
            notes: None,
        }
    }

    #[test]
    fn test_total_amount_is_quantity_times_price() {
        assert_eq!(bill(50, Some(3)).total_amount(), Some(Decimal::new(150, 0)));
    }

    #[test]
    fn test_total_amount_absent_without_price() {
        assert_eq!(bill(50, None).total_amount(), None);
    }
}
