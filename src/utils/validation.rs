//! Utilidades de validación
//!
//! Chequeos manuales que el derive de validator no cubre: strings
//! requeridos, decimales no negativos y la exclusividad vehículo/generador
//! de los registros de combustible.

use num_traits::Zero;
use rust_decimal::Decimal;

use crate::utils::errors::{validation_error, AppError};

/// Valida que un campo de texto requerido no esté vacío
pub fn require_text(field: &'static str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(validation_error(field, "field is required"));
    }
    Ok(())
}

/// Valida que un decimal opcional no sea negativo
pub fn require_non_negative(
    field: &'static str,
    value: Option<Decimal>,
) -> Result<(), AppError> {
    if let Some(v) = value {
        if v < Decimal::zero() {
            return Err(validation_error(field, "value must not be negative"));
        }
    }
    Ok(())
}

/// Un registro de combustible pertenece exactamente a un vehículo o a un
/// generador; nunca a ambos ni a ninguno.
pub fn require_fuel_target(
    veh_oid: Option<i64>,
    generator_oid: Option<i64>,
) -> Result<(), AppError> {
    match (veh_oid, generator_oid) {
        (Some(_), None) | (None, Some(_)) => Ok(()),
        (Some(_), Some(_)) => Err(validation_error(
            "veh_oid",
            "a fuel log cannot reference both a vehicle and a generator",
        )),
        (None, None) => Err(validation_error(
            "veh_oid",
            "a fuel log must reference a vehicle or a generator",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert!(require_text("vehicle_num", "V-100").is_ok());
        assert!(require_text("vehicle_num", "").is_err());
        assert!(require_text("vehicle_num", "   ").is_err());
    }

    #[test]
    fn test_require_non_negative() {
        assert!(require_non_negative("gallons", None).is_ok());
        assert!(require_non_negative("gallons", Some(Decimal::new(50, 0))).is_ok());
        assert!(require_non_negative("gallons", Some(Decimal::new(-1, 0))).is_err());
    }

    #[test]
    fn test_fuel_target_requires_exactly_one() {
        assert!(require_fuel_target(Some(42), None).is_ok());
        assert!(require_fuel_target(None, Some(7)).is_ok());
        assert!(require_fuel_target(Some(42), Some(7)).is_err());
        assert!(require_fuel_target(None, None).is_err());
    }
}
